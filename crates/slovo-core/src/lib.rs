pub mod enrichment;
pub mod error;
pub mod events;
pub mod practice;
pub mod preprocess;
pub mod session;
pub mod store;
pub mod transfer;
pub mod view;

#[cfg(test)]
mod tests;

pub use enrichment::{EnrichmentScheduler, LanguagePair, RunOutcome, RunReport};
pub use error::{EnrichmentError, SessionError, StoreError, TransferError};
pub use events::{ChannelSink, EventSink, NoopSink};
pub use session::{SelectionSession, SessionState};
pub use store::{JsonFileBackend, MemoryBackend, StorageBackend, StoreSnapshot, WordStore};
pub use view::DictionaryView;
