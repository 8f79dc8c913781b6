use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use slovo_types::WordId;
use tokio::io::AsyncReadExt;

use crate::state::AppState;

pub mod capture;
pub mod dictionary;
pub mod practice;
pub mod transfer;
pub mod translate;

use capture::Pick;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick words out of recognized text (a file or stdin) and save them
    Capture {
        #[arg(long)]
        file: Option<PathBuf>,
        /// Save every candidate
        #[arg(long, conflicts_with = "pick")]
        all: bool,
        /// 1-based candidate positions, e.g. "1 3 5"
        #[arg(long)]
        pick: Option<String>,
    },
    /// Add words typed on the command line
    Add {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// List saved words, optionally filtered
    List { query: Option<String> },
    Stats,
    /// Translate every word that is missing a translation
    Translate,
    /// Fetch a fresh translation for one word
    Retranslate { id: WordId },
    Delete { id: WordId },
    /// Remove every saved word
    Clear {
        #[arg(long)]
        yes: bool,
    },
    Export { path: PathBuf },
    Import { path: PathBuf },
    /// Flashcard drill over the words that need it most
    Practice {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Create a profile cloned from main
    NewProfile { name: String },
}

async fn read_input(file: Option<PathBuf>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Runs one command against the wired state and returns what to print
pub async fn dispatch(command: Command, state: &AppState) -> anyhow::Result<String> {
    match command {
        Command::Capture { file, all, pick } => {
            let pick = match (all, pick) {
                (true, _) => Pick::All,
                (false, Some(positions)) => Pick::Positions(capture::parse_positions(&positions)?),
                (false, None) => Pick::ByLength,
            };
            let input = read_input(file).await?;
            capture::capture(state, &input, pick).await
        }
        Command::Add { words } => capture::add(state, words).await,
        Command::List { query } => Ok(dictionary::list(state, query.as_deref()).await),
        Command::Stats => Ok(dictionary::stats(state).await),
        Command::Translate => translate::translate(state).await,
        Command::Retranslate { id } => translate::retranslate(state, id).await,
        Command::Delete { id } => dictionary::delete(state, id).await,
        Command::Clear { yes } => dictionary::clear(state, yes).await,
        Command::Export { path } => transfer::export(state, &path).await,
        Command::Import { path } => transfer::import(state, &path).await,
        Command::Practice { limit } => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            practice::practice(state, limit, stdin, &mut stdout).await?;
            Ok(String::new())
        }
        Command::NewProfile { .. } => {
            anyhow::bail!("profiles are created before the store is opened")
        }
    }
}
