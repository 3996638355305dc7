//! mkdir: Create directories.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage_error;

/// Mkdir tool: create a directory and any missing parents.
pub struct Mkdir;

impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Create a directory, including missing parents")
            .param(ParamSchema::required("path", "Directory to create"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(path) = args.get(0) else {
            return usage_error(self);
        };

        match ctx.ns.mkdir(path) {
            Ok(_) => ExecResult::success(""),
            Err(e) => ExecResult::fs_error("mkdir", &e),
        }
    }
}
