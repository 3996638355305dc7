//! In-memory namespace for treesh.
//!
//! The namespace is a tree of directories and files plus a cursor (the
//! current directory):
//!
//! - **Tree**: arena of [`Node`]s addressed by [`NodeId`]; directories own
//!   their children, `parent` is a non-owning handle
//! - **Resolver**: pure translation of a path string into a node
//! - **Namespace**: the tree plus cursor, with one method per command verb
//!
//! ```text
//! /
//! ├── a/          Directory { children: {b, notes} }
//! │   ├── b/
//! │   └── notes   File { content }
//! └── tmp/
//! ```

mod error;
mod mutate;
mod namespace;
mod node;
pub mod path;
mod query;
mod tree;

pub use error::{ErrorKind, FsError, FsResult};
pub use namespace::Namespace;
pub use node::{Node, NodeData, NodeId, NodeKind, Snapshot};
pub use query::Entry;
pub use tree::Tree;
