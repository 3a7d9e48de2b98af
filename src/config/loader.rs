use std::path::{Path, PathBuf};

use super::PropinferConfig;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".propinfer.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub fn parse_config(contents: &str) -> Result<PropinferConfig> {
    toml::from_str(contents)
        .map_err(|e| Error::Config(format!("failed to parse {CONFIG_FILE_NAME}: {e}")))
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_file(path: &Path) -> Result<PropinferConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config: PropinferConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Directories from `start` upwards, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

fn try_load_discovered(path: &Path) -> Option<PropinferConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            // Missing files are the normal case while walking up
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, path.display());
            Some(PropinferConfig::default())
        }
    }
}

/// Find the nearest `.propinfer.toml` at or above `start`.
pub fn load_config_from(start: &Path) -> PropinferConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_discovered(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No {} found within {} directories. Using defaults.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            PropinferConfig::default()
        })
}

/// Explicit path if given, otherwise discovery from the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<PropinferConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    match std::env::current_dir() {
        Ok(dir) => Ok(load_config_from(&dir)),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using defaults.", e);
            Ok(PropinferConfig::default())
        }
    }
}
