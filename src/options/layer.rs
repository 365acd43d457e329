//! Serde shapes for one configuration layer
//!
//! The same shape is used for the config file (JSON or YAML) and for the
//! caller-supplied override object. Every field is optional: a missing key
//! means "this layer has nothing to say about it".

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Build options as they appear in a single layer.
///
/// `keepIgnoredEntries` and `showIgnoredSize` are accepted as spellings of
/// `keepIgnoredName` and `showIgnoredFileSize`; when both spellings are
/// present the canonical key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawBuildOptions")]
pub struct BuildOptions {
    pub keep_ignored_name: Option<bool>,
    pub max_depth: Option<usize>,
    pub output_format: Option<String>,
    pub show_file_size: Option<bool>,
    pub show_ignored_file_size: Option<bool>,
    pub append_ignore: Option<bool>,
    pub append_include: Option<bool>,
    pub append_exclude: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBuildOptions {
    keep_ignored_name: Option<bool>,
    keep_ignored_entries: Option<bool>,
    max_depth: Option<usize>,
    output_format: Option<String>,
    show_file_size: Option<bool>,
    show_ignored_file_size: Option<bool>,
    show_ignored_size: Option<bool>,
    append_ignore: Option<bool>,
    append_include: Option<bool>,
    append_exclude: Option<bool>,
}

impl From<RawBuildOptions> for BuildOptions {
    fn from(raw: RawBuildOptions) -> Self {
        Self {
            keep_ignored_name: raw.keep_ignored_name.or(raw.keep_ignored_entries),
            max_depth: raw.max_depth,
            output_format: raw.output_format,
            show_file_size: raw.show_file_size,
            show_ignored_file_size: raw.show_ignored_file_size.or(raw.show_ignored_size),
            append_ignore: raw.append_ignore,
            append_include: raw.append_include,
            append_exclude: raw.append_exclude,
        }
    }
}

impl BuildOptions {
    /// Shallow merge: every key present in `other` replaces ours.
    pub fn merge(&mut self, other: &BuildOptions) {
        self.keep_ignored_name = other.keep_ignored_name.or(self.keep_ignored_name);
        self.max_depth = other.max_depth.or(self.max_depth);
        if other.output_format.is_some() {
            self.output_format.clone_from(&other.output_format);
        }
        self.show_file_size = other.show_file_size.or(self.show_file_size);
        self.show_ignored_file_size = other.show_ignored_file_size.or(self.show_ignored_file_size);
        self.append_ignore = other.append_ignore.or(self.append_ignore);
        self.append_include = other.append_include.or(self.append_include);
        self.append_exclude = other.append_exclude.or(self.append_exclude);
    }
}

/// One layer of configuration: defaults, config file, or caller override.
///
/// Documents use `ignore`/`include`/`exclude`/`buildOptions`, and may also
/// spell them `ignoreDirs`/`includeDirs`/`excludeDirs`/`build`. A document
/// carrying both spellings gets the lists concatenated and `buildOptions`
/// merged over `build`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConfigLayer")]
pub struct ConfigLayer {
    pub ignore: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub build_options: Option<BuildOptions>,
    /// Label printed above the console tree.
    pub project_name: Option<String>,
    /// Where to look for the config file. Only honoured on the override layer.
    pub config_file_path: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfigLayer {
    ignore: Option<Vec<String>>,
    ignore_dirs: Option<Vec<String>>,
    include: Option<Vec<String>>,
    include_dirs: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    exclude_dirs: Option<Vec<String>>,
    build_options: Option<BuildOptions>,
    build: Option<BuildOptions>,
    project_name: Option<String>,
    root_label: Option<String>,
    config_file_path: Option<PathBuf>,
}

impl From<RawConfigLayer> for ConfigLayer {
    fn from(raw: RawConfigLayer) -> Self {
        let build_options = match (raw.build, raw.build_options) {
            (Some(mut build), Some(options)) => {
                build.merge(&options);
                Some(build)
            }
            (build, options) => options.or(build),
        };
        Self {
            ignore: concat_names(raw.ignore, raw.ignore_dirs),
            include: concat_names(raw.include, raw.include_dirs),
            exclude: concat_names(raw.exclude, raw.exclude_dirs),
            build_options,
            project_name: raw.project_name.or(raw.root_label),
            config_file_path: raw.config_file_path,
        }
    }
}

fn concat_names(a: Option<Vec<String>>, b: Option<Vec<String>>) -> Option<Vec<String>> {
    match (a, b) {
        (Some(mut a), Some(b)) => {
            a.extend(b);
            Some(a)
        }
        (a, b) => a.or(b),
    }
}

impl ConfigLayer {
    /// Parse a caller-supplied override object, e.g. the CLI `--options` value.
    ///
    /// The text is JSON5, so unquoted keys, single-quoted strings and
    /// trailing commas are accepted alongside plain JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        json5::from_str(s).map_err(Error::InvalidOptions)
    }

    /// Build options of this layer, creating an empty set if absent.
    pub fn build_options_mut(&mut self) -> &mut BuildOptions {
        self.build_options.get_or_insert_with(BuildOptions::default)
    }

    pub(crate) fn append_ignore(&self) -> bool {
        self.build_flag(|b| b.append_ignore)
    }

    pub(crate) fn append_include(&self) -> bool {
        self.build_flag(|b| b.append_include)
    }

    pub(crate) fn append_exclude(&self) -> bool {
        self.build_flag(|b| b.append_exclude)
    }

    // Append flags default to true when the layer does not set them.
    fn build_flag(&self, get: impl Fn(&BuildOptions) -> Option<bool>) -> bool {
        self.build_options.as_ref().and_then(get).unwrap_or(true)
    }
}
