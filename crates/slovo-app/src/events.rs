use kanal::AsyncReceiver;
use slovo_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Terminal line for an event, `None` for bookkeeping events
pub fn render_event(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::EnrichmentStarted { total } => {
            Some(format!("Translating {total} words in the background..."))
        }
        AppEvent::TranslationProgress {
            word, index, total, ..
        } => Some(format!("[{index}/{total}] {word}")),
        AppEvent::WordTranslated {
            word, translation, ..
        } => Some(format!("  {word} -> {translation}")),
        AppEvent::TranslationFailed { word, reason, .. } => {
            Some(format!("  {word}: failed ({reason})"))
        }
        AppEvent::EnrichmentFinished { translated, failed } => Some(format!(
            "Translation finished: {translated} translated, {failed} failed"
        )),
        AppEvent::WordsCommitted(summary) => Some(summary.message()),
        AppEvent::StatusUpdate(status) => Some(status.clone()),
        AppEvent::WordsChanged => None,
    }
}

/// Prints core events until cancelled, then flushes whatever is queued
pub async fn event_printer(
    rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                while let Ok(Some(event)) = rx.try_recv() {
                    print_event(&event);
                }
                tracing::debug!("Event printer stopped");
                return Ok(());
            }
            event = rx.recv() => {
                match event {
                    Ok(event) => print_event(&event),
                    Err(_) => return Ok(()),
                }
            }
        }
    }
}

fn print_event(event: &AppEvent) {
    tracing::trace!("Event: {:?}", event);
    if let Some(line) = render_event(event) {
        println!("{line}");
    }
}
