//! Configuration loading
//!
//! Reads `~/.config/entity-search/config.toml`. A missing default file means
//! built-in defaults; an explicitly requested file must exist.

mod types;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::SearchError;

pub use types::{Config, DEFAULT_BASE_URL, DEFAULT_MAX_VISIBLE_SUGGESTIONS, EndpointConfig, UiConfig};

const CONFIG_DIR: &str = "entity-search";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `explicit` if given, otherwise from the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config, SearchError> {
    match explicit {
        Some(path) => {
            let contents = read_file(path)?;
            parse_config_toml(&contents, path)
        }
        None => {
            let Some(path) = config_path() else {
                return Ok(Config::default());
            };
            load_config_from_path(&path)
        }
    }
}

/// Load a config file, falling back to defaults when it does not exist
pub fn load_config_from_path(path: &Path) -> Result<Config, SearchError> {
    match read_file(path) {
        Ok(contents) => parse_config_toml(&contents, path),
        Err(SearchError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

pub fn parse_config_toml(content: &str, path: &Path) -> Result<Config, SearchError> {
    toml::from_str::<Config>(content).map_err(|e| SearchError::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

fn read_file(path: &Path) -> Result<String, SearchError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
