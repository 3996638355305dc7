//! touch: Create an empty file.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage_error;

/// Touch tool: create (or reset) an empty file in the current directory.
pub struct Touch;

impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "touch",
            "Create an empty file in the current directory, replacing any entry of that name",
        )
        .param(ParamSchema::required("filename", "File to create"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(name) = args.get(0) else {
            return usage_error(self);
        };

        match ctx.ns.touch(name) {
            Ok(_) => ExecResult::success(""),
            Err(e) => ExecResult::fs_error("touch", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_creates_file() {
        let mut ctx = ExecContext::default();
        let result = Touch.execute(ToolArgs::from_tokens(["new.txt"]), &mut ctx);
        assert!(result.ok());
        assert_eq!(ctx.ns.cat("new.txt").unwrap(), "");
    }

    #[test]
    fn test_touch_replaces_directory() {
        let mut ctx = ExecContext::default();
        ctx.ns.mkdir("d/inner").unwrap();
        let result = Touch.execute(ToolArgs::from_tokens(["d"]), &mut ctx);
        assert!(result.ok());
        assert!(ctx.ns.resolve("d/inner").is_err());
    }

    #[test]
    fn test_touch_rejects_path() {
        let mut ctx = ExecContext::default();
        let result = Touch.execute(ToolArgs::from_tokens(["a/b"]), &mut ctx);
        assert!(!result.ok());
        assert!(result.err.contains("Invalid name"));
    }
}
