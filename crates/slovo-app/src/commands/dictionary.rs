use slovo_types::{TRANSLATION_UNAVAILABLE, WordId};

use crate::state::AppState;

pub async fn list(state: &AppState, query: Option<&str>) -> String {
    let entries = state.view().entries(query).await;
    if entries.is_empty() {
        return match query {
            Some(query) => format!("No words match '{query}'"),
            None => "Dictionary is empty".to_string(),
        };
    }

    let width = entries
        .iter()
        .map(|e| e.word.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let translation = if entry.pending {
                TRANSLATION_UNAVAILABLE
            } else {
                entry.translation.as_str()
            };
            format!("{:>5}  {:<width$}  {}", entry.id, entry.word, translation)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn stats(state: &AppState) -> String {
    let stats = state.view().stats().await;
    format!(
        "Total: {}\nNew: {}\nEasy: {}\nMedium: {}\nHard: {}\nTranslated: {}",
        stats.total, stats.new, stats.easy, stats.medium, stats.hard, stats.with_translation
    )
}

pub async fn delete(state: &AppState, id: WordId) -> anyhow::Result<String> {
    if state.store.delete(id).await? {
        Ok(format!("Deleted word #{id}"))
    } else {
        Ok(format!("No word with id {id}"))
    }
}

pub async fn clear(state: &AppState, confirmed: bool) -> anyhow::Result<String> {
    if !confirmed {
        anyhow::bail!("refusing to delete every word without --yes");
    }

    let count = state.store.len().await;
    state.store.clear().await?;
    Ok(format!("Removed {count} words"))
}
