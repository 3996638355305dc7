//! Read-only operations: ls, cat, grep.

use std::fmt;

use super::error::{FsError, FsResult};
use super::namespace::Namespace;
use super::node::NodeKind;

/// One line of an `ls` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: NodeKind,
}

impl Entry {
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Directories print with a trailing `/`, files as their bare name.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Directory => write!(f, "{}/", self.name),
            NodeKind::File => f.write_str(&self.name),
        }
    }
}

impl Namespace {
    /// List `path`.
    ///
    /// A directory yields its immediate children in name order; a file
    /// yields a single entry for itself. An empty directory yields an empty
    /// listing.
    pub fn ls(&self, path: &str) -> FsResult<Vec<Entry>> {
        let id = self.resolve(path)?;
        let node = self.tree.get(id).ok_or_else(|| FsError::not_found(path))?;

        let Some(children) = node.children() else {
            return Ok(vec![Entry {
                name: node.name().to_string(),
                kind: NodeKind::File,
            }]);
        };

        Ok(children
            .iter()
            .filter_map(|(name, &child)| {
                self.tree.get(child).map(|node| Entry {
                    name: name.clone(),
                    kind: node.kind(),
                })
            })
            .collect())
    }

    /// Content of the file `name` directly under the cursor.
    pub fn cat(&self, name: &str) -> FsResult<&str> {
        let id = self.file_child(name)?;
        self.tree
            .get(id)
            .and_then(|node| node.content())
            .ok_or_else(|| FsError::not_found(name))
    }

    /// Lines of the file `name` that contain `pattern` as a literal substring.
    ///
    /// No match is an empty result, not an error; an empty file has no lines
    /// and so never matches.
    pub fn grep(&self, pattern: &str, name: &str) -> FsResult<Vec<&str>> {
        let content = self.cat(name)?;
        Ok(content
            .lines()
            .filter(|line| line.contains(pattern))
            .collect())
    }
}
