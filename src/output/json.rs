//! JSON document output

use std::io::Write;

use crate::error::{Error, Result};
use crate::tree::TreeNode;

/// Write the nodes as a pretty-printed JSON array followed by a newline.
pub fn write_document<W: Write + ?Sized>(nodes: &[TreeNode], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, nodes).map_err(Error::Serialize)?;
    writeln!(out)?;
    Ok(())
}
