use std::sync::Arc;

use clap::Parser;
use slovo_config::log::LogConfig;
use tracing_subscriber::EnvFilter;

mod commands;
mod controller;
mod events;
mod profile;
mod state;

#[cfg(test)]
mod tests;

use self::commands::Command;
use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "slovo", version, about = "Save words from screenshots and learn them")]
struct Cli {
    /// Profile under $SLOVO_HOME/profiles
    #[arg(long, global = true, default_value = "main")]
    profile: String,

    /// Keep the dictionary in memory for this run only
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Command,
}

const DEFAULT_FILTER: &str = "slovo=info";

/// Plain stderr logging for the steps that run before the config is known
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let root = profile::slovo_root();
    let config = profile::bootstrap(&root, &cli.profile, bootstrap_subscriber())?;
    init_tracing(&config.log);

    if let Command::NewProfile { name } = &cli.command {
        let path = profile::add_profile_from_default(&root, name)?;
        println!("Created profile {name} at {}", path.display());
        return Ok(());
    }

    let controller = AppController::new();
    let state = Arc::new(AppState::build(config, cli.memory, controller.sink()).await?);
    let mut tasks = controller.spawn_tasks();

    let (result, interrupted) = tokio::select! {
        result = commands::dispatch(cli.command, &state) => (result, false),
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            (Ok(String::new()), true)
        }
    };

    if let Ok(output) = &result
        && !output.is_empty()
    {
        println!("{output}");
    }

    // Background translation started by the command finishes before exit
    if !interrupted {
        tokio::select! {
            _ = state.wait_idle() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown requested, untranslated words are picked up next run");
            }
        }
    }
    controller.shutdown();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("background task failed: {e}"),
            Err(e) => tracing::error!("background task panicked: {e}"),
        }
    }

    result.map(|_| ())
}
