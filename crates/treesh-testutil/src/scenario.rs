//! Scenario transcript parser and runner.
//!
//! A scenario file holds any number of cases, each replayed against a
//! fresh [`Kernel`]:
//!
//! ```text
//! # test: rename_file
//! $ touch notes
//! $ mv notes todo
//! $ ls
//! todo
//! $ cat notes
//! ! No such file or directory
//! ===
//! ```
//!
//! After a `$ command` line, plain lines are the expected stdout (compared
//! exactly, joined by newlines) and a `! text` line expects the command to
//! fail with `text` somewhere in its stderr. A command with neither must
//! succeed with empty output. Blank lines and other `#` lines are ignored.

use treesh_kernel::{ControlFlow, ExecResult, Kernel, KernelConfig};

use crate::{CaseFailure, ScenarioReport, StepMismatch};

/// A single scenario case.
#[derive(Debug, Clone)]
pub struct ScenarioCase {
    /// Test name from the `# test: name` line.
    pub name: String,
    /// Line number of the header (1-indexed).
    pub line_number: usize,
    pub steps: Vec<Step>,
}

/// One command and what it should produce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    pub command: String,
    pub line_number: usize,
    pub stdout: Vec<String>,
    /// Expected stderr substring; `Some` means the command must fail.
    pub error: Option<String>,
}

/// Parse a scenario file into cases.
pub fn parse_scenarios(content: &str) -> Vec<ScenarioCase> {
    let mut cases = Vec::new();
    let mut current: Option<ScenarioCase> = None;

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if let Some(name) = line.strip_prefix("# test:") {
            if let Some(case) = current.take() {
                cases.push(case);
            }
            current = Some(ScenarioCase {
                name: name.trim().to_string(),
                line_number,
                steps: Vec::new(),
            });
            continue;
        }

        if line == "===" {
            if let Some(case) = current.take() {
                cases.push(case);
            }
            continue;
        }

        let Some(case) = current.as_mut() else {
            continue;
        };

        if let Some(command) = line.strip_prefix('$') {
            case.steps.push(Step {
                command: command.trim().to_string(),
                line_number,
                ..Step::default()
            });
        } else if line.is_empty() || line.starts_with('#') {
            continue;
        } else if let Some(step) = case.steps.last_mut() {
            match line.strip_prefix('!') {
                Some(error) => step.error = Some(error.trim().to_string()),
                None => step.stdout.push(line.to_string()),
            }
        }
    }

    if let Some(case) = current {
        cases.push(case);
    }
    cases
}

impl ScenarioCase {
    /// Replay this case against a fresh kernel.
    pub fn run(&self) -> Result<(), CaseFailure> {
        let mut kernel = Kernel::new(KernelConfig::transient())
            .map_err(|e| CaseFailure::Setup(format!("{e:#}")))?;

        for (index, step) in self.steps.iter().enumerate() {
            match kernel.execute(&step.command) {
                ControlFlow::Normal(result) => step.check(&result)?,
                ControlFlow::Exit { .. } if index + 1 == self.steps.len() => return Ok(()),
                ControlFlow::Exit { code } => {
                    return Err(step
                        .mismatch("more commands".to_string(), format!("exit {code}"))
                        .into());
                }
            }
        }
        Ok(())
    }
}

impl Step {
    fn check(&self, result: &ExecResult) -> Result<(), StepMismatch> {
        match &self.error {
            Some(expected) if result.ok() || !result.err.contains(expected.as_str()) => Err(
                self.mismatch(format!("error containing {expected:?}"), describe(result)),
            ),
            Some(_) => Ok(()),
            None if !result.ok() => Err(self.mismatch("success".to_string(), describe(result))),
            None => {
                let expected = self.stdout.join("\n");
                if result.out == expected {
                    Ok(())
                } else {
                    Err(self.mismatch(format!("{expected:?}"), format!("{:?}", result.out)))
                }
            }
        }
    }

    fn mismatch(&self, expected: String, actual: String) -> StepMismatch {
        StepMismatch {
            line: self.line_number,
            command: self.command.clone(),
            expected,
            actual,
        }
    }
}

fn describe(result: &ExecResult) -> String {
    if result.ok() {
        format!("success {:?}", result.out)
    } else {
        format!("exit {} {:?}", result.code, result.err)
    }
}

/// Run every case in `content`, collecting results.
pub fn run_scenarios(content: &str) -> ScenarioReport {
    let mut report = ScenarioReport::new();
    for case in parse_scenarios(content) {
        report.record(&case.name, case.line_number, case.run());
    }
    report
}
