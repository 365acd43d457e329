//! Common tree traversal logic shared by TreeWalker and StreamingWalker.
//!
//! Both walkers list a directory the same way, classify each entry the same
//! way and apply the same depth guard; only the side effect differs (building
//! nodes versus emitting lines).

use std::path::{Path, PathBuf};

use crate::fs_utils;
use crate::options::EffectiveOptions;

use super::utils::size_label;

/// An entry of the directory currently being walked.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
}

/// Which branch an entry takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryClass {
    /// Name is in the ignore set: placeholder at most, never recursed.
    Ignored,
    Visited,
}

/// Common base traversal functionality shared by both walker implementations.
pub struct BaseTraversal<'a> {
    pub options: &'a EffectiveOptions,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(options: &'a EffectiveOptions) -> Self {
        Self { options }
    }

    /// Depth guard: calls deeper than `max_depth` produce nothing.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        depth > self.options.max_depth
    }

    pub fn classify(&self, name: &str) -> EntryClass {
        if self.options.is_ignored(name) {
            EntryClass::Ignored
        } else {
            EntryClass::Visited
        }
    }

    /// List, sort and stat the entries of `path`.
    ///
    /// Returns `None` if the directory itself cannot be read. Entries that
    /// vanish or cannot be stat-ed are logged and skipped.
    pub fn read_entries(&self, path: &Path) -> Option<Vec<DirectoryEntry>> {
        let names = match fs_utils::list_sorted(path) {
            Ok(names) => names,
            Err(e) => {
                log::error!("cannot read directory '{}': {}", path.display(), e);
                return None;
            }
        };

        let entries = names
            .into_iter()
            .filter_map(|name| {
                let full_path = path.join(&name);
                match fs_utils::stat(&full_path) {
                    Ok(stat) => Some(DirectoryEntry {
                        name,
                        path: full_path,
                        is_dir: stat.is_dir,
                        size: stat.size,
                    }),
                    Err(e) => {
                        log::warn!("skipping '{}': {}", full_path.display(), e);
                        None
                    }
                }
            })
            .collect();

        Some(entries)
    }

    /// Size label for a visited entry, if sizes are shown.
    pub fn visited_size(&self, entry: &DirectoryEntry) -> Option<String> {
        if !self.options.show_file_size {
            return None;
        }
        size_label(&entry.path, entry.is_dir, entry.size)
    }

    /// Size label for an ignored placeholder, if ignored sizes are shown.
    pub fn ignored_size(&self, entry: &DirectoryEntry) -> Option<String> {
        if !self.options.show_ignored_size {
            return None;
        }
        size_label(&entry.path, entry.is_dir, entry.size)
    }
}
