use std::path::Path;

use slovo_core::transfer::{export_to_path, import_from_path};

use crate::state::AppState;

pub async fn export(state: &AppState, path: &Path) -> anyhow::Result<String> {
    let count = export_to_path(&state.store, path).await?;
    Ok(format!("Exported {count} words to {}", path.display()))
}

/// Imported words get translated like freshly captured ones
pub async fn import(state: &AppState, path: &Path) -> anyhow::Result<String> {
    let reports = import_from_path(&state.store, path).await?;

    let created = reports.iter().filter(|r| r.is_created()).count();
    let existing = reports.iter().filter(|r| r.is_exists()).count();
    let errors = reports.iter().filter(|r| r.is_error()).count();

    if created > 0
        && state.config.enrichment.enabled
        && let Some(scheduler) = &state.scheduler
    {
        scheduler.spawn_run();
    }

    Ok(format!(
        "Imported {} words: {created} new, {existing} already saved, {errors} errors",
        reports.len()
    ))
}
