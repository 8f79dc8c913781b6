//! JSON export and import of the dictionary.
//!
//! Export writes every record as a pretty-printed array. Import accepts any
//! array of objects with a non-empty `word` and adds them like a manual
//! selection would; every other field is ignored.

use std::path::Path;

use slovo_types::{AddReport, TextSource};

use crate::error::TransferError;
use crate::store::WordStore;

pub async fn export_json(store: &WordStore) -> Result<String, TransferError> {
    let records = store.get_all().await;
    if records.is_empty() {
        return Err(TransferError::EmptyDictionary);
    }

    Ok(serde_json::to_string_pretty(&records)?)
}

/// Validates an import document and returns its words, trimmed, in order
pub fn parse_import(json: &str) -> Result<Vec<String>, TransferError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items = value.as_array().ok_or(TransferError::NotAnArray)?;

    if items.is_empty() {
        return Err(TransferError::EmptyArray);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let object = item.as_object().ok_or_else(|| TransferError::InvalidEntry {
                index,
                reason: "not an object".to_string(),
            })?;

            let word = object
                .get("word")
                .and_then(|w| w.as_str())
                .map(str::trim)
                .unwrap_or_default();

            if word.is_empty() {
                return Err(TransferError::InvalidEntry {
                    index,
                    reason: "missing or empty \"word\"".to_string(),
                });
            }
            Ok(word.to_string())
        })
        .collect()
}

/// All or nothing on validation, then the same per-item semantics as a batch add
pub async fn import_json(store: &WordStore, json: &str) -> Result<Vec<AddReport>, TransferError> {
    let words = parse_import(json)?;
    let reports = store.add_many_from(&words, TextSource::Import).await;

    tracing::info!(
        "Imported {} words ({} new)",
        reports.len(),
        reports.iter().filter(|r| r.is_created()).count()
    );
    Ok(reports)
}

/// Returns the number of exported words
pub async fn export_to_path(store: &WordStore, path: &Path) -> Result<usize, TransferError> {
    let json = export_json(store).await?;
    let count = store.len().await;

    tokio::fs::write(path, json).await?;
    tracing::info!("Exported {} words to {}", count, path.display());
    Ok(count)
}

pub async fn import_from_path(
    store: &WordStore,
    path: &Path,
) -> Result<Vec<AddReport>, TransferError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(TransferError::NotJsonFile(path.display().to_string()));
    }

    let json = tokio::fs::read_to_string(path).await?;
    import_json(store, &json).await
}
