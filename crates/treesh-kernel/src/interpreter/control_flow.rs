//! Control flow signal from command execution.
//!
//! Most commands complete normally; `exit` asks the dispatch loop to stop.

use super::result::ExecResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlFlow {
    /// Normal completion with a result.
    Normal(ExecResult),
    /// Stop the dispatch loop with an exit code.
    Exit { code: i64 },
}

impl ControlFlow {
    /// Create a normal control flow with a result.
    pub fn ok(result: ExecResult) -> Self {
        ControlFlow::Normal(result)
    }

    /// Create an exit with a code.
    pub fn exit_code(code: i64) -> Self {
        ControlFlow::Exit { code }
    }

    /// Check if this is normal flow.
    pub fn is_normal(&self) -> bool {
        matches!(self, ControlFlow::Normal(_))
    }

    /// Get the result if this is normal flow.
    pub fn into_result(self) -> Option<ExecResult> {
        match self {
            ControlFlow::Normal(r) => Some(r),
            ControlFlow::Exit { .. } => None,
        }
    }
}

impl Default for ControlFlow {
    fn default() -> Self {
        ControlFlow::Normal(ExecResult::success(""))
    }
}

impl From<ExecResult> for ControlFlow {
    fn from(result: ExecResult) -> Self {
        ControlFlow::Normal(result)
    }
}
