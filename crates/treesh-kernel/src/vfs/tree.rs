//! Arena-backed namespace tree.
//!
//! Nodes live in a slot vector and refer to each other by [`NodeId`].
//! Ownership runs strictly downward: a directory's `children` map is the only
//! thing that keeps a node reachable, while `parent` is a plain handle used
//! for `..` lookups. Freeing a node bumps its slot generation, so stale
//! handles resolve to `None` rather than to an unrelated node.

use super::error::{FsError, FsResult};
use super::node::{Node, NodeData, NodeId, Snapshot};

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// The directory/file tree, rooted at `/`.
#[derive(Debug)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    live: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
            live: 0,
        };
        tree.root = tree.alloc(Node::directory("/"));
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.live
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// True if `id` refers to a node that has not been freed.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a direct child of a directory by name.
    pub fn child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.get(dir)?.children()?.get(name).copied()
    }

    /// Allocate a detached node.
    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    /// Insert a detached node under `parent` as `name`.
    ///
    /// A sibling already stored under `name` is freed along with its
    /// subtree. Returns whether such a sibling existed.
    pub(crate) fn attach(&mut self, parent: NodeId, name: &str, child: NodeId) -> FsResult<bool> {
        let dir = self
            .get_mut(parent)
            .ok_or_else(|| FsError::not_found(name))?;
        if !dir.is_directory() {
            return Err(FsError::not_a_directory(dir.name.clone()));
        }
        let previous = dir
            .children_mut()
            .and_then(|children| children.insert(name.to_string(), child));

        if let Some(node) = self.get_mut(child) {
            node.name = name.to_string();
            node.parent = Some(parent);
        }

        match previous {
            Some(old) if old != child => {
                self.free_subtree(old);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Unlink `name` from `parent` without freeing it.
    ///
    /// The returned node is detached: no directory owns it until it is
    /// attached again or freed.
    pub(crate) fn detach(&mut self, parent: NodeId, name: &str) -> Option<NodeId> {
        let id = self.get_mut(parent)?.children_mut()?.remove(name)?;
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }
        Some(id)
    }

    /// Unlink `name` from `parent` and free its whole subtree.
    pub(crate) fn remove(&mut self, parent: NodeId, name: &str) -> Option<NodeId> {
        let id = self.detach(parent, name)?;
        self.free_subtree(id);
        Some(id)
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(current.index)
                .filter(|slot| slot.generation == current.generation)
            else {
                continue;
            };
            if let Some(node) = slot.node.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.index);
                self.live -= 1;
                if let NodeData::Directory { children } = node.data {
                    stack.extend(children.into_values());
                }
            }
        }
    }

    /// True if `ancestor` is `node` itself or lies on its parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(Node::parent);
        }
        false
    }

    /// Allocate a detached deep copy of the subtree at `id`.
    ///
    /// Every descendant is duplicated, so the copy shares no nodes with the
    /// original. Copying a directory into its own subtree is safe because
    /// the source is read completely before the copy is attached anywhere.
    pub(crate) fn deep_copy(&mut self, id: NodeId) -> Option<NodeId> {
        let snapshot = self.snapshot(id)?;
        Some(self.instantiate(&snapshot))
    }

    fn instantiate(&mut self, snapshot: &Snapshot) -> NodeId {
        match snapshot {
            Snapshot::File { name, content } => self.alloc(Node::file(name.clone(), content.clone())),
            Snapshot::Directory { name, children } => {
                let dir = self.alloc(Node::directory(name.clone()));
                for child in children {
                    let copy = self.instantiate(child);
                    if let Some(node) = self.get_mut(copy) {
                        node.parent = Some(dir);
                    }
                    if let Some(map) = self.get_mut(dir).and_then(Node::children_mut) {
                        map.insert(child.name().to_string(), copy);
                    }
                }
                dir
            }
        }
    }

    /// Owned picture of the subtree at `id`, children in name order.
    pub fn snapshot(&self, id: NodeId) -> Option<Snapshot> {
        let node = self.get(id)?;
        Some(match &node.data {
            NodeData::File { content } => Snapshot::File {
                name: node.name.clone(),
                content: content.clone(),
            },
            NodeData::Directory { children } => Snapshot::Directory {
                name: node.name.clone(),
                children: children
                    .values()
                    .filter_map(|&child| self.snapshot(child))
                    .collect(),
            },
        })
    }

    /// Absolute path of a live node, `/` for the root.
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        let mut names = Vec::new();
        let mut current = self.get(id)?;
        while let Some(parent) = current.parent {
            names.push(current.name.as_str());
            current = self.get(parent)?;
        }
        if names.is_empty() {
            return Some("/".to_string());
        }
        names.reverse();
        Some(format!("/{}", names.join("/")))
    }
}
