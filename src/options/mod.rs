//! Effective options for one run
//!
//! Options are assembled from three layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a config file (`.ignore.json`, `.ignore.yaml` or an explicit path)
//! 3. the caller's override layer (CLI flags and `--options`)
//!
//! Name lists are appended or replaced per layer (`appendIgnore`,
//! `appendInclude`, `appendExclude`); build options merge key by key. Once all
//! layers are folded, exclude and include names are removed from the ignore set.

mod layer;
mod loader;
mod merge;

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::tree::display_name;

pub use layer::{BuildOptions, ConfigLayer};
pub use loader::{
    ConfigFormat, DEFAULT_CONFIG_FILES, load_config_layer, locate_config, parse_config, read_config,
};
pub use merge::merge_names;

use merge::MergedConfig;

/// Names ignored unless a layer says otherwise.
pub const DEFAULT_IGNORE: [&str; 8] = [
    "node_modules",
    ".idea",
    ".git",
    ".vscode",
    "build",
    "dist",
    "__tests__",
    "temp",
];

pub const DEFAULT_MAX_DEPTH: usize = 5;

pub const DEFAULT_OUTPUT_FORMAT: &str = "console";

/// How the tree is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree written line by line.
    #[default]
    Console,
    /// Pretty-printed JSON document of the tree.
    Document,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" | "document" => Ok(OutputFormat::Document),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Console => f.write_str("console"),
            OutputFormat::Document => f.write_str("json"),
        }
    }
}

/// Fully merged, immutable configuration for one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    /// Printed above the console tree; empty disables the header.
    pub root_label: String,
    pub ignore: BTreeSet<String>,
    pub include: BTreeSet<String>,
    pub exclude: BTreeSet<String>,
    pub max_depth: usize,
    pub output_format: OutputFormat,
    /// Show ignored entries as non-recursed placeholders.
    pub keep_ignored: bool,
    pub show_file_size: bool,
    pub show_ignored_size: bool,
    pub append_ignore: bool,
    pub append_include: bool,
    pub append_exclude: bool,
}

impl EffectiveOptions {
    /// Whether an entry with this name takes the ignored branch.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }
}

impl Default for EffectiveOptions {
    fn default() -> Self {
        Self {
            root_label: String::new(),
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            include: BTreeSet::new(),
            exclude: BTreeSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            output_format: OutputFormat::Console,
            keep_ignored: false,
            show_file_size: false,
            show_ignored_size: false,
            append_ignore: true,
            append_include: true,
            append_exclude: true,
        }
    }
}

/// Label for a root path. The console header and the document root node
/// share this name.
pub fn root_label(root: &Path) -> String {
    display_name(root)
}

/// Builds [`EffectiveOptions`] from defaults, config file and overrides.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    root: PathBuf,
    overrides: ConfigLayer,
    read_config_file: bool,
}

impl OptionsBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overrides: ConfigLayer::default(),
            read_config_file: true,
        }
    }

    /// Set the highest-precedence layer.
    pub fn overrides(mut self, layer: ConfigLayer) -> Self {
        self.overrides = layer;
        self
    }

    /// Skip config file discovery entirely.
    pub fn without_config_file(mut self) -> Self {
        self.read_config_file = false;
        self
    }

    pub fn build(self) -> Result<EffectiveOptions> {
        let mut merged = MergedConfig::defaults(root_label(&self.root));

        if self.read_config_file {
            let file_layer = load_config_layer(self.overrides.config_file_path.as_deref());
            merged.merge(&file_layer);
        }
        merged.merge(&self.overrides);

        let options = merged.finish()?;
        log::debug!(
            "effective options: ignore={:?} include={:?} exclude={:?} max_depth={} format={}",
            options.ignore,
            options.include,
            options.exclude,
            options.max_depth,
            options.output_format
        );
        Ok(options)
    }
}
