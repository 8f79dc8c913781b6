use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use slovo_config::Config;

const MAIN_PROFILE: &str = "main";

/// `$SLOVO_HOME`, or `.slovo` in the working directory
pub fn slovo_root() -> PathBuf {
    std::env::var_os("SLOVO_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".slovo"))
}

fn profiles_dir(root: &Path) -> PathBuf {
    root.join("profiles")
}

fn profile_path(root: &Path, name: &str) -> PathBuf {
    profiles_dir(root).join(format!("{name}.json"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("parsing profile {}", path.display()))?;
    Ok(profile.value)
}

fn write_profile(path: &Path, name: &str, config: Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value: config,
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("writing profile {}", path.display()))?;
    Ok(())
}

/// Create the profiles folder and a main profile if missing
pub fn init_user_config(root: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir(root))?;

    let main_profile = profile_path(root, MAIN_PROFILE);
    if !main_profile.exists() {
        write_profile(&main_profile, MAIN_PROFILE, Config::default())?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a profile by name, falling back to main and then to built-in defaults.
/// Environment variables are applied on top either way.
pub fn load_user_profile(root: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = profile_path(root, name);
    let main_file = profile_path(root, MAIN_PROFILE);

    let mut config = if profile_file.exists() {
        read_profile(&profile_file)?
    } else if main_file.exists() {
        tracing::warn!("Profile {name} not found, falling back to main profile");
        read_profile(&main_file)?
    } else {
        tracing::warn!("No profiles found, using defaults");
        Config::default()
    };

    config.apply_env();
    Ok(config)
}

/// Add a new profile cloned from main (or defaults if main is missing)
pub fn add_profile_from_default(root: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    let main_file = profile_path(root, MAIN_PROFILE);
    let config = if main_file.exists() {
        read_profile(&main_file)?
    } else {
        Config::default()
    };

    fs::create_dir_all(profiles_dir(root))?;
    let file = profile_path(root, new_name);
    write_profile(&file, new_name, config)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}

/// Creates missing profile files and loads `name` while `subscriber` is the
/// active one. The global subscriber needs the loaded config, so anything
/// logged here would otherwise go nowhere.
pub fn bootstrap<S>(root: &Path, name: &str, subscriber: S) -> anyhow::Result<Config>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::with_default(subscriber, || {
        init_user_config(root)?;
        load_user_profile(root, name)
    })
}

/// Relative store paths live next to the profiles
pub fn resolve_store_path(root: &Path, config: &Config) -> PathBuf {
    let path = PathBuf::from(&config.store.path);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
