//! Path resolution.
//!
//! Resolution is a pure query over the tree: it never moves the cursor and
//! never creates anything. Absolute paths start at the root, relative paths
//! at the cursor. Empty segments (from `//` or a trailing `/`) are skipped,
//! `.` stays put, and `..` climbs to the parent, staying put at the root.

use super::error::{FsError, FsResult};
use super::node::NodeId;
use super::tree::Tree;

/// One `/`-delimited component of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Current,
    Parent,
    Name(&'a str),
}

impl<'a> Segment<'a> {
    fn parse(raw: &'a str) -> Self {
        match raw {
            "." => Segment::Current,
            ".." => Segment::Parent,
            name => Segment::Name(name),
        }
    }
}

/// Split a path into its non-empty segments.
pub fn segments(path: &str) -> Vec<Segment<'_>> {
    path.split('/')
        .filter(|raw| !raw.is_empty())
        .map(Segment::parse)
        .collect()
}

pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// True if `name` can key a single directory entry.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

/// Where a move or copy lands: a directory plus an optional new name.
///
/// `name` is `None` when the destination path ends in `.`, `..`, or names
/// the root, in which case the entry keeps its original name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub parent: NodeId,
    pub name: Option<String>,
}

/// Resolve `path` to a node, starting at the root or at `cursor`.
pub fn resolve(tree: &Tree, cursor: NodeId, path: &str) -> FsResult<NodeId> {
    let start = start_of(tree, cursor, path);
    walk(tree, start, &segments(path), path)
}

/// Resolve every segment of `path` but the last, which becomes the entry name.
///
/// The parent must be an existing directory: a missing intermediate yields
/// `NotFound`, and a file in parent position yields `NotADirectory`.
pub fn resolve_destination(tree: &Tree, cursor: NodeId, path: &str) -> FsResult<Destination> {
    let start = start_of(tree, cursor, path);
    let segs = segments(path);

    let (parent, name) = match segs.split_last() {
        Some((Segment::Name(name), rest)) => (walk(tree, start, rest, path)?, Some(name.to_string())),
        _ => (walk(tree, start, &segs, path)?, None),
    };

    match tree.get(parent) {
        Some(node) if node.is_directory() => Ok(Destination { parent, name }),
        Some(_) => Err(FsError::not_a_directory(path)),
        None => Err(FsError::not_found(path)),
    }
}

fn start_of(tree: &Tree, cursor: NodeId, path: &str) -> NodeId {
    if is_absolute(path) {
        tree.root()
    } else {
        cursor
    }
}

fn walk(tree: &Tree, start: NodeId, segs: &[Segment<'_>], path: &str) -> FsResult<NodeId> {
    let mut current = start;
    for segment in segs {
        // A file has no `.`, `..`, or children: any segment after it fails.
        let children = tree
            .get(current)
            .and_then(|node| node.children().map(|children| (node, children)));
        let Some((node, children)) = children else {
            return Err(FsError::not_found(path));
        };
        current = match *segment {
            Segment::Current => current,
            // The root has no parent; `..` there is a deliberate no-op.
            Segment::Parent => node.parent().unwrap_or(current),
            Segment::Name(name) => children
                .get(name)
                .copied()
                .ok_or_else(|| FsError::not_found(path))?,
        };
        tracing::trace!(?segment, node = ?current, "resolved segment");
    }
    Ok(current)
}
