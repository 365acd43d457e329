//! StreamingWalker - streams output without building full tree in memory

use std::io;
use std::path::Path;

use crate::fs_utils;
use crate::options::EffectiveOptions;

use super::traversal::{BaseTraversal, EntryClass};

/// Callback for streaming output - receives node information for display.
///
/// `depth` is the nesting level of the entry, 0 for the root's children.
pub trait StreamingOutput {
    /// Header printed once before the root's entries.
    fn output_root(&mut self, label: &str) -> io::Result<()>;

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        depth: usize,
        size: Option<&str>,
    ) -> io::Result<()>;

    /// Close a visited directory after its content was emitted.
    fn close_dir(&mut self, depth: usize) -> io::Result<()>;

    /// Close an ignored directory placeholder.
    fn close_placeholder(&mut self, depth: usize) -> io::Result<()>;

    /// Trailer after all root entries.
    fn finish(&mut self) -> io::Result<()>;
}

/// Streaming tree walker that outputs directly without building tree in memory.
/// Uses O(depth) memory instead of O(files) for the tree structure.
pub struct StreamingWalker {
    options: EffectiveOptions,
}

impl StreamingWalker {
    pub fn new(options: EffectiveOptions) -> Self {
        Self { options }
    }

    /// Walk from the root and stream every line to `output`.
    pub fn walk_streaming<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> io::Result<()> {
        self.walk_streaming_from(root, 0, output)
    }

    /// Stream `path` as if it sat `depth` levels below the root.
    ///
    /// A missing or unreadable directory is logged and produces no output;
    /// only write failures on `output` are returned as errors.
    pub fn walk_streaming_from<O: StreamingOutput>(
        &self,
        path: &Path,
        depth: usize,
        output: &mut O,
    ) -> io::Result<()> {
        let traversal = BaseTraversal::new(&self.options);

        if traversal.beyond_max_depth(depth) {
            return Ok(());
        }
        if !fs_utils::exists(path) {
            log::error!("path '{}' does not exist", path.display());
            return Ok(());
        }
        let Some(entries) = traversal.read_entries(path) else {
            return Ok(());
        };

        if depth == 0 && !self.options.root_label.is_empty() {
            output.output_root(&self.options.root_label)?;
        }

        for entry in entries {
            match traversal.classify(&entry.name) {
                EntryClass::Ignored => {
                    if !self.options.keep_ignored {
                        continue;
                    }
                    let size = traversal.ignored_size(&entry);
                    output.output_node(&entry.name, entry.is_dir, depth, size.as_deref())?;
                    if entry.is_dir {
                        output.close_placeholder(depth)?;
                    }
                }
                EntryClass::Visited => {
                    let size = traversal.visited_size(&entry);
                    output.output_node(&entry.name, entry.is_dir, depth, size.as_deref())?;
                    if entry.is_dir {
                        self.walk_streaming_from(&entry.path, depth + 1, output)?;
                        output.close_dir(depth)?;
                    }
                }
            }
        }

        if depth == 0 {
            output.finish()?;
        }
        Ok(())
    }
}
