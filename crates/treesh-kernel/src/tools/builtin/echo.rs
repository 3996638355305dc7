//! echo: Write content into an existing file.
//!
//! The last argument is the file; everything before it, joined with single
//! spaces, becomes the new content.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage_error;

/// Echo tool: replace the content of a file in the current directory.
pub struct Echo;

impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Replace the content of an existing file")
            .param(ParamSchema::variadic("content", "Words to write, joined by spaces"))
            .param(ParamSchema::required("filename", "File to write"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some((name, words)) = args.positional.split_last() else {
            return usage_error(self);
        };
        let content = words.join(" ");

        match ctx.ns.echo(&content, name) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::fs_error("echo", &e),
        }
    }
}
