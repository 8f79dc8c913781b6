use slovo_core::RunOutcome;
use slovo_types::WordId;

use crate::state::AppState;

pub async fn translate(state: &AppState) -> anyhow::Result<String> {
    let message = match state.scheduler()?.run().await {
        RunOutcome::AlreadyRunning => "A translation sweep is already running".to_string(),
        RunOutcome::NothingToDo => "Every word already has a translation".to_string(),
        RunOutcome::Completed(report) if report.failed > 0 => format!(
            "{} words still need a translation, run `slovo translate` again later",
            report.failed
        ),
        RunOutcome::Completed(_) => String::new(),
    };
    Ok(message)
}

pub async fn retranslate(state: &AppState, id: WordId) -> anyhow::Result<String> {
    let translation = state.scheduler()?.retranslate_one(id).await?;
    Ok(format!("#{id} -> {translation}"))
}
