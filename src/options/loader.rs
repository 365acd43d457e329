//! Config file discovery and parsing

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::layer::ConfigLayer;

/// Files tried, in order, when no config path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = [".ignore.json", ".ignore.yaml", ".ignore.yml"];

/// Config document syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Find the config file to read, if any.
///
/// An explicit path is used as-is (and skipped if missing); otherwise the
/// first existing entry of [`DEFAULT_CONFIG_FILES`] wins.
pub fn locate_config(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => path.exists().then(|| path.to_path_buf()),
        None => DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists()),
    }
}

/// Parse config document text.
pub fn parse_config(path: &Path, content: &str) -> Result<ConfigLayer> {
    if content.trim().is_empty() {
        return Ok(ConfigLayer::default());
    }
    match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|source| Error::ConfigJson {
            path: path.to_path_buf(),
            source,
        }),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|source| Error::ConfigYaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &content)
}

/// Load the config file layer. Never fails: a broken file is logged and
/// contributes nothing.
pub fn load_config_layer(explicit: Option<&Path>) -> ConfigLayer {
    let Some(path) = locate_config(explicit) else {
        log::debug!("no config file found, using defaults");
        return ConfigLayer::default();
    };

    match read_config(&path) {
        Ok(layer) => {
            log::debug!("loaded config file '{}'", path.display());
            layer
        }
        Err(e) => {
            log::error!("{}", e);
            ConfigLayer::default()
        }
    }
}
