//! Error types shared by the option merger, the walkers and the CLI

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Config file exists but could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON config file '{}': {source}", path.display())]
    ConfigJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse YAML config file '{}': {source}", path.display())]
    ConfigYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("root directory '{}' does not exist", .0.display())]
    InvalidRoot(PathBuf),

    #[error("invalid options: {0}")]
    InvalidOptions(#[source] json5::Error),

    #[error("failed to serialize tree: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
