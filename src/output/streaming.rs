//! Streaming console formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines as soon
//! as `StreamingWalker` reports them. It writes to any `termcolor` sink:
//! stdout for the CLI, an in-memory `Buffer` in tests.

use std::io::{self, Write};
use termcolor::{Color, WriteColor};

use crate::tree::StreamingOutput;

use super::utils::{BRANCH, ELLIPSIS, INDENT, indent, write_colored};

/// Streaming output formatter for the console tree.
///
/// ```text
/// project/
/// │
/// ├── README.md
/// ├── src/
/// │   ├── main.rs
/// │   └── ...
/// │
/// └── ...
/// ```
pub struct StreamingFormatter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> StreamingFormatter<W> {
    /// Formatter writing to an arbitrary sink.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_root(&mut self, label: &str) -> io::Result<()> {
        write_colored(&mut self.out, &format!("{}/", label), Color::Blue, true)?;
        writeln!(self.out)?;
        writeln!(self.out, "│")
    }

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        depth: usize,
        size: Option<&str>,
    ) -> io::Result<()> {
        write!(self.out, "{}{}", indent(depth), BRANCH)?;
        if is_dir {
            write_colored(&mut self.out, &format!("{}/", name), Color::Blue, true)?;
        } else {
            write!(self.out, "{}", name)?;
        }

        if let Some(size) = size {
            write!(self.out, "    ")?;
            write_colored(&mut self.out, size, Color::Green, false)?;
        }
        writeln!(self.out)
    }

    fn close_dir(&mut self, depth: usize) -> io::Result<()> {
        let prefix = indent(depth);
        writeln!(self.out, "{}{}{}", prefix, INDENT, ELLIPSIS)?;
        writeln!(self.out, "{}│", prefix)
    }

    fn close_placeholder(&mut self, depth: usize) -> io::Result<()> {
        writeln!(self.out, "{}{}{}", indent(depth), INDENT, ELLIPSIS)
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", ELLIPSIS)?;
        self.out.flush()
    }
}
