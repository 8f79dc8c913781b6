use anyhow::Context;
use slovo_core::SelectionSession;
use slovo_types::TextSource;

use crate::state::AppState;

/// How the candidates of a capture get selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    All,
    /// 0-based positions
    Positions(Vec<usize>),
    /// Configured length window
    ByLength,
}

/// Parses "1 3, 5" into 0-based positions
pub fn parse_positions(input: &str) -> anyhow::Result<Vec<usize>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let position: usize = part
                .parse()
                .with_context(|| format!("'{part}' is not a position"))?;
            position
                .checked_sub(1)
                .with_context(|| "positions start at 1".to_string())
        })
        .collect()
}

fn render_candidates(session: &SelectionSession) -> String {
    session
        .candidates()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let mark = if session.is_selected(word) { "x" } else { " " };
            format!("{:>3}. [{mark}] {word}", i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn capture(state: &AppState, input: &[u8], pick: Pick) -> anyhow::Result<String> {
    let output = state
        .ocr
        .recognize(input)
        .await
        .with_context(|| format!("{} could not read the input", state.ocr.name()))?;

    if output.is_empty() {
        anyhow::bail!("no words found in the recognized text");
    }

    let mut session = state.session(TextSource::Ocr);
    session.load(output.words)?;

    match pick {
        Pick::All => session.select_all(),
        Pick::Positions(positions) => {
            for index in positions {
                let word = session
                    .candidates()
                    .get(index)
                    .cloned()
                    .with_context(|| format!("there is no word at position {}", index + 1))?;
                if !session.is_selected(&word) {
                    session.toggle(&word)?;
                }
            }
        }
        Pick::ByLength => {
            let ocr = &state.config.ocr;
            session.select_by_length(ocr.select_min_len, ocr.select_max_len);
        }
    }

    let listing = render_candidates(&session);
    session.commit().await?;
    Ok(listing)
}

/// Words typed by hand go through the same commit path as a capture
pub async fn add(state: &AppState, words: Vec<String>) -> anyhow::Result<String> {
    let mut session = state.session(TextSource::Manual);
    session.load(words)?;
    session.select_all();

    let summary = session.commit().await?;
    tracing::debug!("Manual add: {:?}", summary);
    Ok(String::new())
}
