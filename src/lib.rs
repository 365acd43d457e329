//! mddir - print a directory tree with ignore/include/exclude filtering
//!
//! The tree is rendered either as an indented console listing or as a JSON
//! document. Both renderers share the same traversal: entries are listed in
//! byte order, names in the ignore set are skipped (or shown as placeholders),
//! and recursion stops once `max_depth` is exceeded.

pub mod error;
pub mod fs_utils;
pub mod options;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use termcolor::{Buffer, WriteColor};

pub use error::{Error, Result};
pub use options::{ConfigLayer, EffectiveOptions, OptionsBuilder, OutputFormat};
pub use output::{OutputConfig, StreamingFormatter, write_document};
pub use tree::{StreamingOutput, StreamingWalker, TreeNode, TreeWalker, format_size};

/// Resolve the root directory: the current directory when none is given,
/// relative paths joined onto it.
///
/// Existing paths are canonicalized so `.` and `..` components never reach
/// the root label. A missing path is returned as joined, for the caller to
/// report.
pub fn resolve_root(path: Option<&Path>) -> io::Result<PathBuf> {
    let joined = match path {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => std::env::current_dir()?.join(p),
        None => std::env::current_dir()?,
    };
    Ok(fs::canonicalize(&joined).unwrap_or(joined))
}

/// Render the tree below `root` into `out` in the configured format.
pub fn generate_tree<W: WriteColor>(
    root: &Path,
    options: &EffectiveOptions,
    out: &mut W,
) -> Result<()> {
    if !fs_utils::exists(root) {
        return Err(Error::PathNotFound(root.to_path_buf()));
    }

    match options.output_format {
        OutputFormat::Console => {
            let mut formatter = StreamingFormatter::with_writer(out);
            StreamingWalker::new(options.clone()).walk_streaming(root, &mut formatter)?;
        }
        OutputFormat::Document => {
            let nodes = TreeWalker::new(options.clone()).walk(root);
            write_document(&nodes, out)?;
        }
    }
    Ok(())
}

/// Render the tree into a string, without colors.
pub fn render_to_string(root: &Path, options: &EffectiveOptions) -> Result<String> {
    let mut buffer = Buffer::no_color();
    generate_tree(root, options, &mut buffer)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    fn console(dir: &TestDir, options: EffectiveOptions) -> String {
        render_to_string(dir.path(), &options).unwrap()
    }

    #[test]
    fn test_default_console_scenario() {
        let dir = TestDir::named("project");
        dir.add_file("src/a.txt", "hello");
        dir.add_file("node_modules/lib/index.js", "x");

        let options = OptionsBuilder::new(dir.path())
            .without_config_file()
            .build()
            .unwrap();
        assert_eq!(
            console(&dir, options),
            "project/\n\
             │\n\
             ├── src/\n\
             │   ├── a.txt\n\
             │   └── ...\n\
             │\n\
             └── ...\n"
        );
    }

    #[test]
    fn test_nested_console_layout() {
        let dir = TestDir::new();
        dir.add_file("a/b/c.txt", "");
        dir.add_file("z.txt", "");

        let out = console(&dir, EffectiveOptions::default());
        assert_eq!(
            out,
            "├── a/\n\
             │   ├── b/\n\
             │   │   ├── c.txt\n\
             │   │   └── ...\n\
             │   │\n\
             │   └── ...\n\
             │\n\
             ├── z.txt\n\
             └── ...\n"
        );
    }

    #[test]
    fn test_kept_ignored_dir_is_two_line_placeholder() {
        let dir = TestDir::new();
        dir.add_file("node_modules/pkg/index.js", "x");
        dir.add_file(".vscode", "{}");

        let out = console(
            &dir,
            EffectiveOptions {
                keep_ignored: true,
                ..Default::default()
            },
        );
        assert_eq!(out, "├── .vscode\n├── node_modules/\n│   └── ...\n└── ...\n");
    }

    #[test]
    fn test_sizes_in_console() {
        let dir = TestDir::new();
        dir.add_sized_file("pkg/temp", 10);
        dir.add_sized_file("pkg/main.rs", 20);

        let out = console(
            &dir,
            EffectiveOptions {
                show_file_size: true,
                ..Default::default()
            },
        );
        assert!(out.contains("├── pkg/    30 B\n"), "{out}");
        assert!(out.contains("│   ├── main.rs    20 B\n"), "{out}");
        assert!(!out.contains("temp"));
    }

    #[test]
    fn test_document_matches_console_names() {
        let dir = TestDir::new();
        dir.add_file("src/lib.rs", "");
        dir.add_file("src/dist/x.js", "");
        dir.add_file("build/out", "");
        dir.add_file("docs/guide/intro.md", "");

        let options = EffectiveOptions {
            keep_ignored: true,
            ..Default::default()
        };
        let doc = render_to_string(
            dir.path(),
            &EffectiveOptions {
                output_format: OutputFormat::Document,
                ..options.clone()
            },
        )
        .unwrap();
        let nodes: Vec<TreeNode> = serde_json::from_str(&doc).unwrap();
        let mut doc_names: Vec<&str> = nodes[0].children().iter().flat_map(|c| c.names()).collect();
        doc_names.sort();

        let text = console(&dir, options);
        let mut console_names: Vec<&str> = text
            .lines()
            .filter_map(|l| l.split_once("├── ").map(|(_, rest)| rest.trim_end_matches('/')))
            .collect();
        console_names.sort();

        assert_eq!(doc_names, console_names);
        assert_eq!(
            doc_names,
            vec!["build", "dist", "docs", "guide", "intro.md", "lib.rs", "src"]
        );
    }

    #[test]
    fn test_missing_root_is_path_not_found() {
        let dir = TestDir::new();
        let err = render_to_string(&dir.path().join("missing"), &EffectiveOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::PathNotFound(_)));
    }

    #[test]
    fn test_resolve_root() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_root(None).unwrap(), cwd);
        assert_eq!(resolve_root(Some(Path::new("sub"))).unwrap(), cwd.join("sub"));
        assert_eq!(resolve_root(Some(Path::new("/abs"))).unwrap(), PathBuf::from("/abs"));
    }

    #[test]
    fn test_resolve_root_collapses_parent_components() {
        let dir = TestDir::named("p");
        dir.add_dir("sub");

        let root = resolve_root(Some(&dir.path().join("sub/.."))).unwrap();
        assert_eq!(root, fs::canonicalize(dir.path()).unwrap());
        assert_eq!(options::root_label(&root), "p");
        assert_eq!(tree::display_name(&root), "p");
    }
}
