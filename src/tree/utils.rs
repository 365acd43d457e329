//! Shared utility functions for tree walking

use std::path::Path;

use crate::fs_utils;

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a size in bytes to a human-readable base-1024 string.
///
/// Values are rounded to two decimals and printed without trailing zeros,
/// e.g. `1536` becomes `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut index = 0;
    let mut scale: u128 = 1;
    while index + 1 < UNITS.len() && u128::from(bytes) >= scale * 1024 {
        scale *= 1024;
        index += 1;
    }

    let value = bytes as f64 / scale as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[index])
}

/// Size label for an entry: file length, or the unfiltered subtree sum for
/// directories. Unreadable subtrees get no label.
pub fn size_label(path: &Path, is_dir: bool, file_size: u64) -> Option<String> {
    if !is_dir {
        return Some(format_size(file_size));
    }
    match fs_utils::dir_size(path) {
        Ok(total) => Some(format_size(total)),
        Err(e) => {
            log::warn!("cannot compute size of '{}': {}", path.display(), e);
            None
        }
    }
}

/// Get the name of a path: its final component, or the whole path for `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
