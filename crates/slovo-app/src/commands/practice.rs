use std::io::Write;

use slovo_types::{Difficulty, TRANSLATION_UNAVAILABLE};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::state::AppState;

enum Answer {
    Rated(Difficulty),
    Skip,
    Quit,
}

fn parse_answer(answer: &str) -> Answer {
    match answer.trim().to_lowercase().as_str() {
        "e" | "easy" => Answer::Rated(Difficulty::Easy),
        "m" | "medium" => Answer::Rated(Difficulty::Medium),
        "h" | "hard" => Answer::Rated(Difficulty::Hard),
        "q" | "quit" => Answer::Quit,
        _ => Answer::Skip,
    }
}

/// Shows each word, reveals the translation on Enter and stores the rating.
/// Returns how many words were rated.
pub async fn practice<R, W>(
    state: &AppState,
    limit: usize,
    input: R,
    out: &mut W,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let queue = state.store.practice_queue(limit).await;
    if queue.is_empty() {
        writeln!(out, "Nothing to practise yet, capture some words first")?;
        return Ok(0);
    }

    let mut lines = input.lines();
    let mut rated = 0;

    for record in queue {
        writeln!(out, "\n{}  (Enter to reveal)", record.word)?;
        out.flush()?;
        if lines.next_line().await?.is_none() {
            break;
        }

        let translation = if record.needs_translation() {
            TRANSLATION_UNAVAILABLE
        } else {
            record.translation.as_str()
        };
        writeln!(out, "  {translation}")?;
        writeln!(out, "  [e]asy / [m]edium / [h]ard, anything else skips, [q]uit")?;
        out.flush()?;

        let Some(answer) = lines.next_line().await? else {
            break;
        };
        match parse_answer(&answer) {
            Answer::Rated(difficulty) => {
                state.store.record_practice(record.id, difficulty).await?;
                rated += 1;
            }
            Answer::Skip => continue,
            Answer::Quit => break,
        }
    }

    writeln!(out, "\nPractised {rated} words")?;
    Ok(rated)
}
