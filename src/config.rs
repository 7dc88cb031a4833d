use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "fetch-project";

/// Persisted defaults, stored by confy under the user's config directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Where `--install` puts the link when no location is given.
    #[serde(default = "default_install_location")]
    pub install_location: PathBuf,

    /// Roster of `<name>,<github username>` rows.
    #[serde(default = "default_usernames_file")]
    pub usernames_file: PathBuf,
}

fn default_install_location() -> PathBuf {
    PathBuf::from("/usr/local/bin")
}

fn default_usernames_file() -> PathBuf {
    usernames_file_under(home::home_dir())
}

fn usernames_file_under(home: Option<PathBuf>) -> PathBuf {
    home.unwrap_or_else(|| {
        tracing::warn!("home directory not found, using current directory");
        PathBuf::from(".")
    })
    .join("Ada")
    .join("c10")
    .join("usernames.csv")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            install_location: default_install_location(),
            usernames_file: default_usernames_file(),
        }
    }
}

/// Reads the user's config file if there is one. Never creates it.
pub fn load() -> miette::Result<Config> {
    match confy::get_configuration_file_path(APP_NAME, None) {
        Ok(path) => load_from(&path),
        Err(e) => {
            tracing::warn!(error = %e, "could not locate config file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_from(path: &Path) -> miette::Result<Config> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config: Config = confy::load_path(path)
        .map_err(|e| miette::miette!("Failed to load config {}: {}", path.display(), e))?;
    Ok(config)
}

/// Settings for one run: config defaults with command-line overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub install: bool,
    pub install_location: PathBuf,
    pub username_file_path: PathBuf,
    pub dry_run: bool,
    pub explicit_project_name: Option<String>,
}
