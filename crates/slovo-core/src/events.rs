use slovo_types::AppEvent;

/// Where core components report progress. Emitting never blocks.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: AppEvent);
}

pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: AppEvent) {}
}

/// Forwards events into a kanal channel drained by the app
#[derive(Clone)]
pub struct ChannelSink {
    tx: kanal::AsyncSender<AppEvent>,
}

impl ChannelSink {
    pub fn new(tx: kanal::AsyncSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: AppEvent) {
        match self.tx.try_send(event) {
            Ok(true) => {}
            Ok(false) => tracing::warn!("Event channel full, dropping event"),
            Err(e) => tracing::debug!("Event channel closed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_sink_forwards() {
        let (tx, rx) = kanal::bounded_async(4);
        let sink = ChannelSink::new(tx);

        sink.emit(AppEvent::WordsChanged);

        assert_eq!(rx.recv().await.unwrap(), AppEvent::WordsChanged);
    }

    #[tokio::test]
    async fn test_closed_channel_is_ignored() {
        let (tx, rx) = kanal::bounded_async::<AppEvent>(1);
        drop(rx);

        ChannelSink::new(tx).emit(AppEvent::WordsChanged);
    }
}
