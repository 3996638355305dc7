//! Execution context for tools.

use std::collections::VecDeque;

use crate::vfs::Namespace;

use super::traits::ToolSchema;

/// Default number of command lines kept for `history`.
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Execution context passed to tools.
///
/// Owns the namespace; one context per session, nothing shared across
/// sessions.
#[derive(Debug)]
pub struct ExecContext {
    /// The namespace every builtin operates on.
    pub ns: Namespace,
    /// Schemas of every supported verb, for `help`.
    pub commands: Vec<ToolSchema>,
    history: VecDeque<String>,
    history_limit: usize,
}

impl Default for ExecContext {
    fn default() -> Self {
        Self::new(Namespace::new())
    }
}

impl ExecContext {
    /// Create a new execution context around a namespace.
    pub fn new(ns: Namespace) -> Self {
        Self {
            ns,
            commands: Vec::new(),
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Bound the number of remembered command lines.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self.trim_history();
        self
    }

    /// Remember a command line, dropping the oldest past the limit.
    pub fn record(&mut self, line: &str) {
        self.history.push_back(line.to_string());
        self.trim_history();
    }

    /// Remembered command lines, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    fn trim_history(&mut self) {
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}
