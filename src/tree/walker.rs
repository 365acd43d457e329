//! TreeWalker - builds full tree in memory for document output

use std::path::Path;

use crate::fs_utils;
use crate::options::EffectiveOptions;

use super::json_types::TreeNode;
use super::traversal::{BaseTraversal, DirectoryEntry, EntryClass};
use super::utils::display_name;

/// Tree walker that builds the full tree in memory.
/// Required for document serialization.
pub struct TreeWalker {
    options: EffectiveOptions,
}

impl TreeWalker {
    pub fn new(options: EffectiveOptions) -> Self {
        Self { options }
    }

    /// Walk from the root. Returns `[root]`, or nothing if the root is missing.
    pub fn walk(&self, root: &Path) -> Vec<TreeNode> {
        self.walk_from(root, 0)
    }

    /// Walk `path` as if it sat `depth` levels below the root.
    ///
    /// Returns an empty list when the path does not exist, cannot be listed,
    /// or `depth` exceeds `max_depth`.
    pub fn walk_from(&self, path: &Path, depth: usize) -> Vec<TreeNode> {
        let traversal = BaseTraversal::new(&self.options);

        if !fs_utils::exists(path) || traversal.beyond_max_depth(depth) {
            return Vec::new();
        }
        let Some(entries) = traversal.read_entries(path) else {
            return Vec::new();
        };

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            match traversal.classify(&entry.name) {
                EntryClass::Ignored => {
                    if self.options.keep_ignored {
                        let size = traversal.ignored_size(&entry);
                        children.push(TreeNode::placeholder(entry.name, entry.is_dir, size));
                    }
                }
                EntryClass::Visited => children.push(self.visit(&traversal, entry, depth)),
            }
        }

        vec![TreeNode::dir(display_name(path), None, children)]
    }

    fn visit(&self, traversal: &BaseTraversal<'_>, entry: DirectoryEntry, depth: usize) -> TreeNode {
        let size = traversal.visited_size(&entry);
        if !entry.is_dir {
            return TreeNode::file(entry.name, size);
        }

        // The recursive call wraps the subtree in its own root node; keep only
        // its children. Beyond max depth this is an empty list.
        let children = self
            .walk_from(&entry.path, depth + 1)
            .into_iter()
            .next()
            .and_then(|node| node.children)
            .unwrap_or_default();
        TreeNode::dir(entry.name, size, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    fn walk(dir: &TestDir, options: EffectiveOptions) -> TreeNode {
        let mut nodes = TreeWalker::new(options).walk(dir.path());
        assert_eq!(nodes.len(), 1, "root walk yields exactly one node");
        nodes.remove(0)
    }

    fn child<'a>(node: &'a TreeNode, name: &str) -> &'a TreeNode {
        node.children()
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("no child named {name}"))
    }

    #[test]
    fn test_default_scenario() {
        let dir = TestDir::named("project");
        dir.add_file("src/a.txt", "hello");
        dir.add_file("node_modules/pkg/index.js", "x");

        let root = walk(&dir, EffectiveOptions::default());
        assert_eq!(root.name, "project");
        assert!(root.is_dir);
        assert_eq!(root.children().len(), 1);

        let src = child(&root, "src");
        assert!(src.is_dir);
        assert_eq!(src.size, None);
        assert_eq!(src.children(), &[TreeNode::file("a.txt", None)]);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = TestDir::new();
        let nodes = TreeWalker::new(EffectiveOptions::default()).walk(&dir.path().join("nope"));
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_depth_beyond_max_yields_nothing() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "");
        let options = EffectiveOptions {
            max_depth: 1,
            ..Default::default()
        };
        let walker = TreeWalker::new(options);
        assert_eq!(walker.walk_from(dir.path(), 1).len(), 1);
        assert!(walker.walk_from(dir.path(), 2).is_empty());
    }

    #[test]
    fn test_max_depth_zero_lists_only_immediate_children() {
        let dir = TestDir::new();
        dir.add_file("top.txt", "");
        dir.add_file("level1/mid.txt", "");
        dir.add_file("level1/level2/deep.txt", "");

        let root = walk(
            &dir,
            EffectiveOptions {
                max_depth: 0,
                ..Default::default()
            },
        );
        let level1 = child(&root, "level1");
        assert!(level1.is_dir);
        assert_eq!(level1.children, Some(Vec::new()));
        assert!(!root.names().contains(&"mid.txt"));
        assert!(root.names().contains(&"top.txt"));
    }

    #[test]
    fn test_keep_ignored_placeholders_are_not_recursed() {
        let dir = TestDir::new();
        dir.add_file("node_modules/pkg/index.js", "x");
        dir.add_file(".git/HEAD", "ref");
        dir.add_file("main.js", "");

        let root = walk(
            &dir,
            EffectiveOptions {
                keep_ignored: true,
                ..Default::default()
            },
        );
        let nm = child(&root, "node_modules");
        assert_eq!(nm, &TreeNode::placeholder("node_modules", true, None));
        assert!(!root.names().contains(&"pkg"));
        assert_eq!(root.names().iter().filter(|n| **n == ".git").count(), 1);
    }

    #[test]
    fn test_dir_size_counts_hidden_files() {
        let dir = TestDir::new();
        dir.add_sized_file("pkg/temp", 10);
        dir.add_sized_file("pkg/main.rs", 20);

        let root = walk(
            &dir,
            EffectiveOptions {
                show_file_size: true,
                ..Default::default()
            },
        );
        let pkg = child(&root, "pkg");
        assert_eq!(pkg.size.as_deref(), Some("30 B"));
        assert_eq!(pkg.children(), &[TreeNode::file("main.rs", Some("20 B".to_string()))]);
    }

    #[test]
    fn test_ignored_size_shown_only_with_flag() {
        let dir = TestDir::new();
        dir.add_sized_file("dist/bundle.js", 42);

        let with_size = walk(
            &dir,
            EffectiveOptions {
                keep_ignored: true,
                show_ignored_size: true,
                ..Default::default()
            },
        );
        assert_eq!(child(&with_size, "dist").size.as_deref(), Some("42 B"));

        let without = walk(
            &dir,
            EffectiveOptions {
                keep_ignored: true,
                show_file_size: true,
                ..Default::default()
            },
        );
        assert_eq!(child(&without, "dist").size, None);
    }

    #[test]
    fn test_included_name_is_visited() {
        let dir = TestDir::new();
        dir.add_file("build/out.txt", "");

        let mut options = EffectiveOptions::default();
        options.ignore.remove("build");
        options.include.insert("build".to_string());

        let root = walk(&dir, options);
        assert_eq!(child(&root, "build").children(), &[TreeNode::file("out.txt", None)]);
    }
}
