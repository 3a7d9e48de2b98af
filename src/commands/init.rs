use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};

/// Write the default config into `dir`, returning the file's path.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Created {}", config_path.display());
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_file;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let path = init_config(temp.path(), false).unwrap();
        assert!(load_config_file(&path).is_ok());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "table = \"props\"\n").unwrap();

        assert!(init_config(temp.path(), false).is_err());
        init_config(temp.path(), true).unwrap();
        let contents = std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(contents, DEFAULT_CONFIG);
    }
}
