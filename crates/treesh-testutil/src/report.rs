//! Outcome of replaying scenario transcripts.

use std::fmt;

/// A command whose result differed from the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMismatch {
    /// Line of the `$ command` in the transcript.
    pub line: usize,
    pub command: String,
    pub expected: String,
    pub actual: String,
}

/// Why a case did not pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseFailure {
    /// A step produced the wrong output, status, or error text.
    Step(StepMismatch),
    /// The kernel could not be created, so no step ran.
    Setup(String),
}

impl From<StepMismatch> for CaseFailure {
    fn from(mismatch: StepMismatch) -> Self {
        CaseFailure::Step(mismatch)
    }
}

/// A failed case with its name and header line.
#[derive(Debug, Clone)]
pub struct FailedCase {
    pub name: String,
    pub line: usize,
    pub failure: CaseFailure,
}

/// Tally of a transcript run.
#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub cases: usize,
    pub failures: Vec<FailedCase>,
}

impl ScenarioReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &str, line: usize, outcome: Result<(), CaseFailure>) {
        self.cases += 1;
        if let Err(failure) = outcome {
            self.failures.push(FailedCase {
                name: name.to_string(),
                line,
                failure,
            });
        }
    }

    pub fn passed(&self) -> usize {
        self.cases - self.failures.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failing commands, in transcript order.
    pub fn failed_commands(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().filter_map(|case| match &case.failure {
            CaseFailure::Step(mismatch) => Some(mismatch.command.as_str()),
            CaseFailure::Setup(_) => None,
        })
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}/{} cases passed", self.passed(), self.cases)?;

        for case in &self.failures {
            writeln!(f, "\n  {} (line {})", case.name, case.line)?;
            match &case.failure {
                CaseFailure::Step(mismatch) => {
                    writeln!(f, "    $ {}  (line {})", mismatch.command, mismatch.line)?;
                    writeln!(f, "    expected: {}", mismatch.expected)?;
                    writeln!(f, "    actual:   {}", mismatch.actual)?;
                }
                CaseFailure::Setup(message) => writeln!(f, "    setup: {message}")?,
            }
        }
        Ok(())
    }
}
