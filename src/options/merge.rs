//! Layer-by-layer merging of configuration

use std::collections::BTreeSet;

use crate::error::Result;

use super::layer::{BuildOptions, ConfigLayer};
use super::{
    DEFAULT_IGNORE, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_FORMAT, EffectiveOptions, OutputFormat,
};

/// Combine `incoming` into `acc`: union when appending, replacement otherwise.
pub fn merge_names(acc: &mut BTreeSet<String>, incoming: Option<&[String]>, append: bool) {
    let Some(names) = incoming else {
        return;
    };
    if !append {
        acc.clear();
    }
    acc.extend(names.iter().cloned());
}

/// Accumulated state while folding layers, lowest precedence first.
#[derive(Debug, Clone)]
pub(crate) struct MergedConfig {
    ignore: BTreeSet<String>,
    include: BTreeSet<String>,
    exclude: BTreeSet<String>,
    build: BuildOptions,
    project_name: String,
}

impl MergedConfig {
    /// The built-in defaults layer.
    pub fn defaults(project_name: String) -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            include: BTreeSet::new(),
            exclude: BTreeSet::new(),
            build: BuildOptions {
                keep_ignored_name: Some(false),
                max_depth: Some(DEFAULT_MAX_DEPTH),
                output_format: Some(DEFAULT_OUTPUT_FORMAT.to_string()),
                show_file_size: Some(false),
                show_ignored_file_size: Some(false),
                append_ignore: Some(true),
                append_include: Some(true),
                append_exclude: Some(true),
            },
            project_name,
        }
    }

    pub fn merge(&mut self, layer: &ConfigLayer) {
        merge_names(&mut self.ignore, layer.ignore.as_deref(), layer.append_ignore());
        merge_names(&mut self.include, layer.include.as_deref(), layer.append_include());
        merge_names(&mut self.exclude, layer.exclude.as_deref(), layer.append_exclude());
        if let Some(build) = &layer.build_options {
            self.build.merge(build);
        }
        if let Some(name) = &layer.project_name {
            self.project_name.clone_from(name);
        }
    }

    /// Apply the exclude/include overrides and freeze the result.
    pub fn finish(self) -> Result<EffectiveOptions> {
        let Self {
            mut ignore,
            include,
            exclude,
            build,
            project_name,
        } = self;

        ignore.retain(|name| !exclude.contains(name) && !include.contains(name));

        let output_format = build
            .output_format
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_FORMAT)
            .parse::<OutputFormat>()?;

        Ok(EffectiveOptions {
            root_label: project_name,
            ignore,
            include,
            exclude,
            max_depth: build.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            output_format,
            keep_ignored: build.keep_ignored_name.unwrap_or(false),
            show_file_size: build.show_file_size.unwrap_or(false),
            show_ignored_size: build.show_ignored_file_size.unwrap_or(false),
            append_ignore: build.append_ignore.unwrap_or(true),
            append_include: build.append_include.unwrap_or(true),
            append_exclude: build.append_exclude.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn names(list: &[&str]) -> Option<Vec<String>> {
        Some(list.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_merge_names_append_and_replace() {
        let mut acc = set(&["a", "b"]);
        merge_names(&mut acc, Some(&["c".to_string()]), true);
        assert_eq!(acc, set(&["a", "b", "c"]));

        let mut acc = set(&["a", "b"]);
        merge_names(&mut acc, Some(&["c".to_string()]), false);
        assert_eq!(acc, set(&["c"]));

        let mut acc = set(&["a"]);
        merge_names(&mut acc, None, false);
        assert_eq!(acc, set(&["a"]), "absent list leaves the set alone");
    }

    #[test]
    fn test_merge_names_deduplicates() {
        let mut acc = set(&["a"]);
        merge_names(&mut acc, Some(&["a".to_string(), "a".to_string()]), true);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_defaults() {
        let opts = MergedConfig::defaults("proj".to_string()).finish().unwrap();
        assert_eq!(opts.root_label, "proj");
        assert!(opts.ignore.contains("node_modules"));
        assert!(opts.ignore.contains(".git"));
        assert_eq!(opts.ignore.len(), DEFAULT_IGNORE.len());
        assert_eq!(opts.max_depth, 5);
        assert_eq!(opts.output_format, OutputFormat::Console);
        assert!(!opts.keep_ignored);
        assert!(!opts.show_file_size);
        assert!(!opts.show_ignored_size);
        assert!(opts.append_ignore && opts.append_include && opts.append_exclude);
    }

    #[test]
    fn test_replace_flag_is_read_from_same_layer() {
        let mut merged = MergedConfig::defaults("p".to_string());
        merged.merge(&ConfigLayer {
            ignore: names(&["target"]),
            build_options: Some(BuildOptions {
                append_ignore: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        });
        // Next layer appends again because it does not set the flag itself.
        merged.merge(&ConfigLayer {
            ignore: names(&["coverage"]),
            ..Default::default()
        });

        let opts = merged.finish().unwrap();
        assert_eq!(opts.ignore, set(&["coverage", "target"]));
        assert!(!opts.append_ignore, "merged flag is still reported");
    }

    #[test]
    fn test_include_and_exclude_subtract_from_ignore() {
        let mut merged = MergedConfig::defaults("p".to_string());
        merged.merge(&ConfigLayer {
            include: names(&["dist"]),
            exclude: names(&["build", "not-ignored-anyway"]),
            ..Default::default()
        });

        let opts = merged.finish().unwrap();
        assert!(!opts.ignore.contains("dist"));
        assert!(!opts.ignore.contains("build"));
        assert!(opts.ignore.contains("node_modules"));
        assert!(opts.include.contains("dist"));
        assert!(opts.exclude.contains("build"));
    }

    #[test]
    fn test_name_in_all_three_sets_is_not_ignored() {
        let mut merged = MergedConfig::defaults("p".to_string());
        merged.merge(&ConfigLayer {
            ignore: names(&["x"]),
            include: names(&["x"]),
            exclude: names(&["x"]),
            ..Default::default()
        });
        let opts = merged.finish().unwrap();
        assert!(!opts.is_ignored("x"));
    }

    #[test]
    fn test_build_options_shallow_merge_and_project_name() {
        let mut merged = MergedConfig::defaults("p".to_string());
        merged.merge(&ConfigLayer {
            build_options: Some(BuildOptions {
                max_depth: Some(1),
                ..Default::default()
            }),
            project_name: Some("My Project".to_string()),
            ..Default::default()
        });
        merged.merge(&ConfigLayer {
            build_options: Some(BuildOptions {
                show_file_size: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });

        let opts = merged.finish().unwrap();
        assert_eq!(opts.max_depth, 1);
        assert!(opts.show_file_size);
        assert_eq!(opts.root_label, "My Project");
    }

    #[test]
    fn test_unsupported_format_fails() {
        let mut merged = MergedConfig::defaults("p".to_string());
        merged.merge(&ConfigLayer {
            build_options: Some(BuildOptions {
                output_format: Some("xml".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        match merged.finish() {
            Err(Error::UnsupportedFormat(f)) => assert_eq!(f, "xml"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }
}
