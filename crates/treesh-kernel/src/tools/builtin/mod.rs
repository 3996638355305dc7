//! Built-in tools for treesh.
//!
//! One tool per command verb. Each tool is a thin adapter: it pulls its
//! arguments, calls the matching [`Namespace`](crate::vfs::Namespace)
//! operation, and turns the outcome into an [`ExecResult`].

mod cat;
mod cd;
mod cp;
mod echo;
mod grep;
mod help;
mod history;
mod ls;
mod mkdir;
mod mv;
mod pwd;
mod rm;
mod touch;

use crate::interpreter::ExecResult;

use super::{Tool, ToolRegistry};

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(mkdir::Mkdir);
    registry.register(cd::Cd);
    registry.register(ls::Ls);
    registry.register(cat::Cat);
    registry.register(touch::Touch);
    registry.register(echo::Echo);
    registry.register(grep::Grep);
    registry.register(mv::Mv);
    registry.register(cp::Cp);
    registry.register(rm::Rm);
    registry.register(pwd::Pwd);
    registry.register(help::Help);
    registry.register(history::History);
}

/// Usage error built from the tool's own schema.
fn usage_error(tool: &dyn Tool) -> ExecResult {
    ExecResult::usage(tool.name(), &tool.schema().usage())
}
