//! ExecResult: the structured result of every command.
//!
//! A builtin never prints. It returns what it would have written to stdout
//! and stderr together with an exit code, and the REPL decides how to show
//! them.

use crate::vfs::FsError;

/// Exit code for a failed namespace operation.
pub const EXIT_FAILURE: i64 = 1;

/// Exit code for a malformed invocation (missing arguments, unknown verb).
pub const EXIT_USAGE: i64 = 2;

/// The result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output, without a trailing newline.
    pub out: String,
    /// Standard error, without a trailing newline.
    pub err: String,
    /// Message for a human when a success has nothing to print.
    pub note: Option<String>,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
            note: None,
        }
    }

    /// Create a successful result from output lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let out = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::success(out)
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
            note: None,
        }
    }

    /// Failure of `verb` caused by a namespace error.
    pub fn fs_error(verb: &str, error: &FsError) -> Self {
        Self::failure(EXIT_FAILURE, format!("{verb}: {error}"))
    }

    /// Usage error for `verb`.
    pub fn usage(verb: &str, usage: &str) -> Self {
        Self::failure(EXIT_USAGE, format!("{verb}: usage: {usage}"))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}
