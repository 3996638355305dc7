//! history: Show previously entered command lines.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// History tool: numbered command lines, oldest first.
pub struct History;

impl Tool for History {
    fn name(&self) -> &str {
        "history"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("history", "Show previously entered commands")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ExecResult::lines(
            ctx.history()
                .enumerate()
                .map(|(i, line)| format!("{:>4}  {line}", i + 1)),
        )
    }
}
