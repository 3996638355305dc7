//! cd: Change working directory.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Cd tool: change current working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current working directory")
            .param(ParamSchema::optional("path", "/", "Directory to change to"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let path = args.get(0).unwrap_or("/");

        match ctx.ns.cd(path) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::fs_error("cd", &e),
        }
    }
}
