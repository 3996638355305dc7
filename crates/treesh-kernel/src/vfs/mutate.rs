//! Operations that change the tree: mkdir, touch, echo, rm, mv, cp.
//!
//! Each operation validates everything it needs before its first mutation,
//! so a failed call leaves the tree untouched.

use super::error::{FsError, FsResult};
use super::namespace::Namespace;
use super::node::{Node, NodeData, NodeId};
use super::path::{self, Segment};

/// A position during mkdir planning: either a node that already exists or
/// the n-th directory the plan will create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Planned {
    Existing(NodeId),
    New(usize),
}

#[derive(Debug)]
struct PlannedDir<'a> {
    parent: Planned,
    name: &'a str,
}

impl Namespace {
    /// Create every missing directory along `path`, like `mkdir -p`.
    ///
    /// Existing directories are traversed. A file in the way fails the whole
    /// call with `NotADirectory` before anything is created. Returns the
    /// directory the path ends at.
    pub fn mkdir(&mut self, path: &str) -> FsResult<NodeId> {
        let start = if path::is_absolute(path) {
            self.tree.root()
        } else {
            self.cursor
        };

        let mut plan: Vec<PlannedDir<'_>> = Vec::new();
        let mut at = Planned::Existing(start);

        for segment in path::segments(path) {
            at = match (segment, at) {
                (Segment::Current, _) => at,
                (Segment::Parent, Planned::Existing(id)) => {
                    Planned::Existing(self.tree.get(id).and_then(Node::parent).unwrap_or(id))
                }
                (Segment::Parent, Planned::New(index)) => plan[index].parent,
                (Segment::Name(name), Planned::Existing(id)) => match self.tree.child(id, name) {
                    Some(child) => match self.tree.get(child) {
                        Some(node) if node.is_directory() => Planned::Existing(child),
                        _ => return Err(FsError::not_a_directory(path)),
                    },
                    None => plan_dir(&mut plan, at, name),
                },
                (Segment::Name(name), Planned::New(_)) => plan_dir(&mut plan, at, name),
            };
        }

        let mut created: Vec<NodeId> = Vec::with_capacity(plan.len());
        for dir in &plan {
            let parent = match dir.parent {
                Planned::Existing(id) => id,
                Planned::New(index) => created[index],
            };
            let id = self.tree.alloc(Node::directory(dir.name));
            self.tree.attach(parent, dir.name, id)?;
            created.push(id);
        }

        if !created.is_empty() {
            tracing::debug!(path, created = created.len(), "mkdir");
        }

        Ok(match at {
            Planned::Existing(id) => id,
            Planned::New(index) => created[index],
        })
    }

    /// Create an empty file under the cursor.
    ///
    /// Whatever already sits under `name` is replaced, directories
    /// included.
    pub fn touch(&mut self, name: &str) -> FsResult<NodeId> {
        Self::check_name(name)?;
        let id = self.tree.alloc(Node::file(name, ""));
        let replaced = self.tree.attach(self.cursor, name, id)?;
        if replaced {
            tracing::warn!(name, "touch replaced an existing entry");
        }
        tracing::debug!(name, "touch");
        Ok(id)
    }

    /// Replace the content of an existing file under the cursor.
    pub fn echo(&mut self, content: &str, name: &str) -> FsResult<()> {
        let id = self.file_child(name)?;
        if let Some(NodeData::File { content: current }) = self.tree.get_mut(id).map(|n| &mut n.data) {
            *current = content.to_string();
        }
        tracing::debug!(name, bytes = content.len(), "echo");
        Ok(())
    }

    /// Remove a direct child of the cursor, with its whole subtree.
    pub fn rm(&mut self, name: &str) -> FsResult<()> {
        Self::check_name(name)?;
        self.tree
            .remove(self.cursor, name)
            .ok_or_else(|| FsError::not_found(name))?;
        tracing::debug!(name, "rm");
        Ok(())
    }

    /// Move a direct child of the cursor to `dest`.
    ///
    /// The node keeps its identity; only its parent and key change. `dest`
    /// names the new parent plus the new key. When `dest` is `/` or ends in
    /// `.` or `..` it names only the parent and the key stays the same.
    pub fn mv(&mut self, source: &str, dest: &str) -> FsResult<NodeId> {
        let src = self.child(source)?;
        let target = self.resolve_destination(dest)?;
        let key = target.name.unwrap_or_else(|| source.to_string());

        if self.tree.is_ancestor(src, target.parent) {
            return Err(FsError::invalid_move(
                source,
                dest,
                "cannot move a directory into itself",
            ));
        }

        let existing = self.tree.child(target.parent, &key);
        if existing == Some(src) {
            return Ok(src);
        }
        self.guard_overwrite(existing, source, dest)?;

        self.tree.detach(self.cursor, source);
        match self.tree.attach(target.parent, &key, src) {
            Ok(replaced) => {
                if replaced {
                    tracing::warn!(source, dest, "mv replaced an existing entry");
                }
                tracing::debug!(source, dest, "mv");
                Ok(src)
            }
            Err(err) => {
                // Put the source back where it was.
                self.tree.attach(self.cursor, source, src)?;
                Err(err)
            }
        }
    }

    /// Copy a direct child of the cursor to `dest`, recursively.
    ///
    /// Destination handling matches [`mv`](Namespace::mv). The original
    /// subtree is never touched.
    pub fn cp(&mut self, source: &str, dest: &str) -> FsResult<NodeId> {
        let src = self.child(source)?;
        let target = self.resolve_destination(dest)?;
        let key = target.name.unwrap_or_else(|| source.to_string());

        let existing = self.tree.child(target.parent, &key);
        if existing == Some(src) {
            return Err(FsError::invalid_move(
                source,
                dest,
                "source and destination are the same",
            ));
        }
        self.guard_overwrite(existing, source, dest)?;

        let copy = self
            .tree
            .deep_copy(src)
            .ok_or_else(|| FsError::not_found(source))?;
        let replaced = self.tree.attach(target.parent, &key, copy)?;
        if replaced {
            tracing::warn!(source, dest, "cp replaced an existing entry");
        }
        tracing::debug!(source, dest, "cp");
        Ok(copy)
    }

    /// Refuse to overwrite an entry that holds the cursor.
    fn guard_overwrite(&self, existing: Option<NodeId>, source: &str, dest: &str) -> FsResult<()> {
        match existing {
            Some(id) if self.tree.is_ancestor(id, self.cursor) => Err(FsError::invalid_move(
                source,
                dest,
                "would replace the current directory",
            )),
            _ => Ok(()),
        }
    }
}

/// Reuse a directory already in the plan, or add a new one.
fn plan_dir<'a>(plan: &mut Vec<PlannedDir<'a>>, parent: Planned, name: &'a str) -> Planned {
    if let Some(index) = plan
        .iter()
        .position(|dir| dir.parent == parent && dir.name == name)
    {
        return Planned::New(index);
    }
    plan.push(PlannedDir { parent, name });
    Planned::New(plan.len() - 1)
}
