//! Command results and control flow.

mod control_flow;
mod result;

pub use control_flow::ControlFlow;
pub use result::{ExecResult, EXIT_FAILURE, EXIT_USAGE};
