//! Document types for tree output

use serde::{Deserialize, Serialize};

/// One node of the structured document.
///
/// `children` is present for visited directories only; files and ignored
/// directory placeholders carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "isDir")]
    pub is_dir: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>, size: Option<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            size,
            children: None,
        }
    }

    pub fn dir(name: impl Into<String>, size: Option<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            size,
            children: Some(children),
        }
    }

    /// Non-recursed stand-in for an ignored entry.
    pub fn placeholder(name: impl Into<String>, is_dir: bool, size: Option<String>) -> Self {
        Self {
            name: name.into(),
            is_dir,
            size,
            children: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Names of this node and all its descendants, depth first.
    pub fn names(&self) -> Vec<&str> {
        let mut out = vec![self.name.as_str()];
        for child in self.children() {
            out.extend(child.names());
        }
        out
    }
}
