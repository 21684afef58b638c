use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use kanji_config::Config;
use serde::Deserialize;

const REPO_DEFAULT_CONFIG: &str = "config.json";

/// Represents a user profile
#[derive(Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load the default config shipped in the repo
fn load_repo_default_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading repo default config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Load a profile file
pub fn load_profile(path: &Path) -> anyhow::Result<Profile> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    tracing::info!("Loaded profile '{}' from {}", profile.name, path.display());
    Ok(profile)
}

/// Resolve the session config.
///
/// An explicit profile must load. Without one, the repo `config.json` is used
/// when present, then built-in defaults. Environment overrides apply last.
pub fn load_config(profile_path: Option<&Path>) -> anyhow::Result<Config> {
    load_config_from(profile_path, &PathBuf::from(REPO_DEFAULT_CONFIG))
}

fn load_config_from(profile_path: Option<&Path>, repo_default: &Path) -> anyhow::Result<Config> {
    let mut config = match profile_path {
        Some(path) => load_profile(path)?.value,
        None if repo_default.exists() => load_repo_default_config(repo_default)?,
        None => {
            tracing::debug!("No profile or repo config, using defaults");
            return Ok(Config::new());
        }
    };

    config.apply_env_overrides();
    Ok(config)
}
