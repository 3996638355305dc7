//! Tools: the command verbs the dispatcher can run.

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::{ExecContext, DEFAULT_HISTORY_LIMIT};
pub use registry::ToolRegistry;
pub use traits::{Arity, ParamSchema, Tool, ToolArgs, ToolSchema};
