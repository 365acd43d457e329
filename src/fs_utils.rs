//! Filesystem primitives used by the walkers
//!
//! Thin wrappers over `std::fs` so that both walkers see the same listing
//! order and the same notion of "size".

use std::fs;
use std::io;
use std::path::Path;

/// Metadata the walkers care about for a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub is_dir: bool,
    pub size: u64,
}

/// Check that a path exists and can be accessed.
pub fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

/// List the names in a directory, sorted ascending by byte order.
pub fn list_sorted(path: &Path) -> io::Result<Vec<String>> {
    let mut names = fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// Stat a path, following symlinks.
pub fn stat(path: &Path) -> io::Result<EntryStat> {
    let meta = fs::metadata(path)?;
    Ok(EntryStat {
        is_dir: meta.is_dir(),
        size: meta.len(),
    })
}

/// Total size of every file below `path`, ignoring any filtering.
///
/// For a file this is just its length. Symlinks are measured by their own
/// metadata and never followed.
pub fn dir_size(path: &Path) -> io::Result<u64> {
    let meta = fs::metadata(path)?;
    if !meta.is_dir() {
        return Ok(meta.len());
    }
    subtree_size(path)
}

fn subtree_size(dir: &Path) -> io::Result<u64> {
    let mut total = 0u64;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let meta = fs::symlink_metadata(entry.path())?;
        total += if meta.is_dir() {
            subtree_size(&entry.path())?
        } else {
            meta.len()
        };
    }
    Ok(total)
}
