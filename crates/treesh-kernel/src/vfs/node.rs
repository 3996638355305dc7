//! Node model: the tagged union of directory and file stored in the tree.

use std::collections::BTreeMap;

/// Handle to a node stored in a [`Tree`](super::Tree) arena.
///
/// A handle is a non-owning reference: holding one keeps nothing alive. The
/// generation makes a handle to a removed node fail lookup instead of
/// silently pointing at whatever reused its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

/// Kind of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    File {
        content: String,
    },
    /// Children keyed by name. A `BTreeMap` keeps listings in lexicographic order.
    Directory {
        children: BTreeMap<String, NodeId>,
    },
}

/// A node in the namespace tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    /// Back-reference used only for `..`; `None` for the root and for
    /// detached nodes.
    pub(crate) parent: Option<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            data: NodeData::File {
                content: content.into(),
            },
        }
    }

    pub(crate) fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            data: NodeData::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::File { .. } => NodeKind::File,
            NodeData::Directory { .. } => NodeKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.data, NodeData::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.data, NodeData::Directory { .. })
    }

    /// File content, or `None` for a directory.
    pub fn content(&self) -> Option<&str> {
        match &self.data {
            NodeData::File { content } => Some(content),
            NodeData::Directory { .. } => None,
        }
    }

    /// Children of a directory, or `None` for a file.
    pub fn children(&self) -> Option<&BTreeMap<String, NodeId>> {
        match &self.data {
            NodeData::Directory { children } => Some(children),
            NodeData::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, NodeId>> {
        match &mut self.data {
            NodeData::Directory { children } => Some(children),
            NodeData::File { .. } => None,
        }
    }
}

/// Owned, arena-independent picture of a subtree.
///
/// Two snapshots compare equal when the subtrees have the same shape,
/// names and contents, regardless of node identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    File {
        name: String,
        content: String,
    },
    Directory {
        name: String,
        children: Vec<Snapshot>,
    },
}

impl Snapshot {
    pub fn name(&self) -> &str {
        match self {
            Snapshot::File { name, .. } | Snapshot::Directory { name, .. } => name,
        }
    }
}
