//! ls: List directory contents.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Ls tool: list directory contents.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents")
            .param(ParamSchema::optional("path", ".", "Directory or file to list"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let path = args.get(0).unwrap_or(".");

        match ctx.ns.ls(path) {
            Ok(entries) => ExecResult::lines(entries.iter().map(ToString::to_string)),
            Err(e) => ExecResult::fs_error("ls", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ctx() -> ExecContext {
        let mut ctx = ExecContext::default();
        ctx.ns.mkdir("/dir/sub").unwrap();
        ctx.ns.touch("b.txt").unwrap();
        ctx.ns.touch("a.txt").unwrap();
        ctx
    }

    #[test]
    fn test_ls_cwd() {
        let mut ctx = make_ctx();
        let result = Ls.execute(ToolArgs::new(), &mut ctx);
        assert!(result.ok());
        assert_eq!(result.out, "a.txt\nb.txt\ndir/");
    }

    #[test]
    fn test_ls_path() {
        let mut ctx = make_ctx();
        let result = Ls.execute(ToolArgs::from_tokens(["/dir"]), &mut ctx);
        assert_eq!(result.out, "sub/");
    }

    #[test]
    fn test_ls_empty_dir() {
        let mut ctx = make_ctx();
        let result = Ls.execute(ToolArgs::from_tokens(["/dir/sub"]), &mut ctx);
        assert!(result.ok());
        assert!(result.out.is_empty());
    }

    #[test]
    fn test_ls_file() {
        let mut ctx = make_ctx();
        let result = Ls.execute(ToolArgs::from_tokens(["a.txt"]), &mut ctx);
        assert_eq!(result.out, "a.txt");
    }

    #[test]
    fn test_ls_nonexistent() {
        let mut ctx = make_ctx();
        let result = Ls.execute(ToolArgs::from_tokens(["/nope"]), &mut ctx);
        assert!(!result.ok());
        assert!(result.err.starts_with("ls: /nope"));
    }
}
