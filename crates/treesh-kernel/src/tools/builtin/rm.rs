//! rm: Remove an entry from the current directory.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage_error;

/// Rm tool: remove a file, or a directory with everything under it.
pub struct Rm;

impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Remove a file or directory (recursively) in the current directory")
            .param(ParamSchema::required("name", "Entry to remove"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(name) = args.get(0) else {
            return usage_error(self);
        };

        match ctx.ns.rm(name) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::fs_error("rm", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ctx() -> ExecContext {
        let mut ctx = ExecContext::default();
        ctx.ns.mkdir("dir/sub").unwrap();
        ctx.ns.touch("file.txt").unwrap();
        ctx
    }

    #[test]
    fn test_rm_file() {
        let mut ctx = make_ctx();
        let result = Rm.execute(ToolArgs::from_tokens(["file.txt"]), &mut ctx);
        assert!(result.ok());
        assert!(ctx.ns.resolve("file.txt").is_err());
    }

    #[test]
    fn test_rm_directory_recursive() {
        let mut ctx = make_ctx();
        let before = ctx.ns.tree().node_count();
        let result = Rm.execute(ToolArgs::from_tokens(["dir"]), &mut ctx);
        assert!(result.ok());
        assert_eq!(ctx.ns.tree().node_count(), before - 2);
    }

    #[test]
    fn test_rm_nonexistent() {
        let mut ctx = make_ctx();
        let result = Rm.execute(ToolArgs::from_tokens(["nope"]), &mut ctx);
        assert!(!result.ok());
        assert!(result.err.contains("No such file"));
    }

    #[test]
    fn test_rm_no_args() {
        let mut ctx = make_ctx();
        let result = Rm.execute(ToolArgs::new(), &mut ctx);
        assert!(!result.ok());
        assert!(result.err.contains("usage"));
    }
}
