//! mv: Move or rename an entry.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage_error;

/// Mv tool: relocate an entry without copying it.
pub struct Mv;

impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mv", "Move or rename a file or directory")
            .param(ParamSchema::required("source", "Entry to move"))
            .param(ParamSchema::required("dest", "New location"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(source), Some(dest)) = (args.get(0), args.get(1)) else {
            return usage_error(self);
        };

        match ctx.ns.mv(source, dest) {
            Ok(_) => ExecResult::success(""),
            Err(e) => ExecResult::fs_error("mv", &e),
        }
    }
}
