//! cat: Print a file's content.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage_error;

/// Cat tool: print the content of a file in the current directory.
pub struct Cat;

impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Print the content of a file in the current directory")
            .param(ParamSchema::required("filename", "File to read"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(name) = args.get(0) else {
            return usage_error(self);
        };

        match ctx.ns.cat(name) {
            Ok(content) => ExecResult::success(content),
            Err(e) => ExecResult::fs_error("cat", &e),
        }
    }
}
