//! The namespace: a tree plus the current-directory cursor.
//!
//! Mutating operations live in `mutate.rs` and read-only ones in `query.rs`;
//! this file holds the state, the cursor, and the helpers both share.

use super::error::{FsError, FsResult};
use super::node::{Node, NodeId};
use super::path::{self, Destination};
use super::tree::Tree;

/// An in-memory namespace.
///
/// The cursor always names a live directory reachable from the root. Only
/// [`cd`](Namespace::cd) moves it; every other operation resolves paths
/// without touching it.
#[derive(Debug)]
pub struct Namespace {
    pub(crate) tree: Tree,
    pub(crate) cursor: NodeId,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create a namespace holding only `/`, with the cursor at the root.
    pub fn new() -> Self {
        let tree = Tree::new();
        let cursor = tree.root();
        Self { tree, cursor }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Borrow a live node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tree.get(id)
    }

    /// Resolve a path against the cursor (or the root, if absolute).
    pub fn resolve(&self, path: &str) -> FsResult<NodeId> {
        path::resolve(&self.tree, self.cursor, path)
    }

    pub(crate) fn resolve_destination(&self, path: &str) -> FsResult<Destination> {
        path::resolve_destination(&self.tree, self.cursor, path)
    }

    /// Absolute path of the cursor.
    pub fn cwd_path(&self) -> String {
        self.tree.path_of(self.cursor).unwrap_or_else(|| "/".to_string())
    }

    /// Absolute path of any live node.
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        self.tree.path_of(id)
    }

    /// Move the cursor to the directory named by `path`.
    pub fn cd(&mut self, path: &str) -> FsResult<()> {
        let target = self.resolve(path)?;
        match self.tree.get(target) {
            Some(node) if node.is_directory() => {
                self.cursor = target;
                tracing::debug!(path, cwd = %self.cwd_path(), "cd");
                Ok(())
            }
            Some(_) => Err(FsError::not_a_directory(path)),
            None => Err(FsError::not_found(path)),
        }
    }

    /// Reject names that cannot key a single directory entry.
    pub(crate) fn check_name(name: &str) -> FsResult<()> {
        if path::is_valid_name(name) {
            Ok(())
        } else {
            Err(FsError::invalid_name(name))
        }
    }

    /// A direct child of the cursor.
    pub(crate) fn child(&self, name: &str) -> FsResult<NodeId> {
        Self::check_name(name)?;
        self.tree
            .child(self.cursor, name)
            .ok_or_else(|| FsError::not_found(name))
    }

    /// A direct child of the cursor that must be a file.
    ///
    /// A directory under that name counts as absent.
    pub(crate) fn file_child(&self, name: &str) -> FsResult<NodeId> {
        let id = self.child(name)?;
        match self.tree.get(id) {
            Some(node) if node.is_file() => Ok(id),
            _ => Err(FsError::not_found(name)),
        }
    }
}
