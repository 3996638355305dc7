//! treesh-kernel: the core of treesh, an in-memory shell namespace.
//!
//! This crate provides:
//!
//! - **vfs**: the namespace tree, path resolution, and the mkdir/cd/ls/
//!   touch/echo/cat/grep/mv/cp/rm operations
//! - **tools**: one builtin per command verb, plus the registry that maps
//!   verbs to them
//! - **interpreter**: the structured [`ExecResult`] every command returns
//!   and the [`ControlFlow`] signal for `exit`
//! - **kernel**: the [`Kernel`] facade that tokenizes and dispatches lines
//!
//! Everything is synchronous and single-session; a `Kernel` owns its
//! namespace outright.

pub mod interpreter;
pub mod kernel;
pub mod tools;
pub mod vfs;

pub use interpreter::{ControlFlow, ExecResult};
pub use kernel::{Kernel, KernelConfig};
pub use vfs::{ErrorKind, FsError, FsResult, Namespace, NodeId};
