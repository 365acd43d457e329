//! Directory tree walking logic
//!
//! This module provides tree walking capabilities for displaying directory structures.
//! It supports two main modes:
//!
//! - `TreeWalker`: Builds full tree in memory, required for document output
//! - `StreamingWalker`: Streams output directly, uses O(depth) memory for console output

mod json_types;
mod streaming;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use json_types::TreeNode;
pub use streaming::{StreamingOutput, StreamingWalker};
pub use traversal::{BaseTraversal, DirectoryEntry, EntryClass};
pub use utils::{display_name, format_size, size_label};
pub use walker::TreeWalker;
