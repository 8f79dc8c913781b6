pub mod types;
pub mod word;

pub use types::*;
pub use word::*;
