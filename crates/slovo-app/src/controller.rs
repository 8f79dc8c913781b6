use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use slovo_core::{ChannelSink, EventSink};
use slovo_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_printer;

/// Centralized channel management
pub struct ChannelSet {
    pub core_to_cli: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            core_to_cli: kanal::bounded_async(256), // one sweep can be chatty
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the background tasks that outlive a single command
pub struct AppController {
    channels: ChannelSet,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new() -> Self {
        Self {
            channels: ChannelSet::new(),
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sink handed to core components, feeds the printer
    pub fn sink(&self) -> Arc<dyn EventSink> {
        Arc::new(ChannelSink::new(self.channels.core_to_cli.0.clone()))
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_printer(
            self.channels.core_to_cli.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}
