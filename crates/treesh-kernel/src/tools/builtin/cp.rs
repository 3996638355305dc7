//! cp: Deep-copy an entry.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage_error;

/// Cp tool: independent copy of a file or a whole directory tree.
pub struct Cp;

impl Tool for Cp {
    fn name(&self) -> &str {
        "cp"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cp", "Copy a file or directory tree")
            .param(ParamSchema::required("source", "Entry to copy"))
            .param(ParamSchema::required("dest", "Location of the copy"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(source), Some(dest)) = (args.get(0), args.get(1)) else {
            return usage_error(self);
        };

        match ctx.ns.cp(source, dest) {
            Ok(_) => ExecResult::success(""),
            Err(e) => ExecResult::fs_error("cp", &e),
        }
    }
}
