//! grep: Print the lines of a file that contain a literal pattern.

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

use super::usage_error;

/// Grep tool: literal substring search over one file.
pub struct Grep;

impl Tool for Grep {
    fn name(&self) -> &str {
        "grep"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("grep", "Print lines of a file containing a literal pattern")
            .param(ParamSchema::required("pattern", "Substring to look for"))
            .param(ParamSchema::required("filename", "File to search"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(pattern), Some(name)) = (args.get(0), args.get(1)) else {
            return usage_error(self);
        };

        // No match is a successful, empty result.
        match ctx.ns.grep(pattern, name) {
            Ok(lines) if lines.is_empty() => ExecResult::default().with_note(format!(
                "No matching lines found for pattern '{pattern}' in file '{name}'"
            )),
            Ok(lines) => ExecResult::lines(lines),
            Err(e) => ExecResult::fs_error("grep", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ctx(content: &str) -> ExecContext {
        let mut ctx = ExecContext::default();
        ctx.ns.touch("f").unwrap();
        ctx.ns.echo(content, "f").unwrap();
        ctx
    }

    #[test]
    fn test_grep_match() {
        let mut ctx = make_ctx("hello world");
        let result = Grep.execute(ToolArgs::from_tokens(["hello", "f"]), &mut ctx);
        assert!(result.ok());
        assert_eq!(result.out, "hello world");
    }

    #[test]
    fn test_grep_no_match_is_ok_and_empty() {
        let mut ctx = make_ctx("hello world");
        let result = Grep.execute(ToolArgs::from_tokens(["bye", "f"]), &mut ctx);
        assert!(result.ok());
        assert!(result.out.is_empty());
        assert_eq!(
            result.note.as_deref(),
            Some("No matching lines found for pattern 'bye' in file 'f'")
        );
    }

    #[test]
    fn test_grep_match_has_no_note() {
        let mut ctx = make_ctx("hello world");
        let result = Grep.execute(ToolArgs::from_tokens(["world", "f"]), &mut ctx);
        assert_eq!(result.note, None);
    }

    #[test]
    fn test_grep_missing_file() {
        let mut ctx = make_ctx("");
        let result = Grep.execute(ToolArgs::from_tokens(["x", "nope"]), &mut ctx);
        assert!(!result.ok());
    }

    #[test]
    fn test_grep_missing_filename() {
        let mut ctx = make_ctx("");
        let result = Grep.execute(ToolArgs::from_tokens(["x"]), &mut ctx);
        assert_eq!(result.err, "grep: usage: grep pattern filename");
    }
}
