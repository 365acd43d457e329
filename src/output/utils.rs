//! Shared utility functions for output formatting

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Marker repeated once per nesting level.
pub const INDENT: &str = "│   ";

/// Connector placed before every entry name.
pub const BRANCH: &str = "├── ";

/// Line closing a directory's content.
pub const ELLIPSIS: &str = "└── ...";

/// Indentation for an entry at `depth`.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Write `text` in `color`, then reset.
/// Writers without color support just get the text.
pub fn write_colored<W: WriteColor + ?Sized>(
    out: &mut W,
    text: &str,
    color: Color,
    bold: bool,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
    write!(out, "{}", text)?;
    out.reset()
}
