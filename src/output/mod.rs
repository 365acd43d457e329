//! Tree formatting and display
//!
//! This module provides the two renderers:
//! - Console tree output, streamed line by line (`streaming`)
//! - JSON document output of the built tree (`json`)
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared line markers and color helpers
//! - `streaming` - Streaming formatter for console output
//! - `json` - JSON document output

mod config;
mod json;
mod streaming;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::write_document;
pub use streaming::StreamingFormatter;
pub use utils::{BRANCH, ELLIPSIS, INDENT, indent};
