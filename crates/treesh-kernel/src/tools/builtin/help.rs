//! help: List supported commands.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Help tool: one line per verb, usage then description.
pub struct Help;

impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "List supported commands")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let width = ctx
            .commands
            .iter()
            .map(|schema| schema.usage().len())
            .max()
            .unwrap_or(0);

        ExecResult::lines(ctx.commands.iter().map(|schema| {
            format!("{:<width$}  {}", schema.usage(), schema.description)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() {
        let mut ctx = ExecContext::default();
        ctx.commands = vec![
            ToolSchema::new("pwd", "Print current working directory"),
            ToolSchema::new("help", "List supported commands"),
        ];
        let result = Help.execute(ToolArgs::new(), &mut ctx);
        assert!(result.ok());
        assert_eq!(
            result.out,
            "pwd   Print current working directory\nhelp  List supported commands"
        );
    }

    #[test]
    fn test_help_without_commands_is_empty() {
        let mut ctx = ExecContext::default();
        let result = Help.execute(ToolArgs::new(), &mut ctx);
        assert!(result.ok());
        assert!(result.out.is_empty());
    }
}
