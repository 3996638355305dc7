//! Test utilities for treesh.
//!
//! Provides the parser and runner for the scenario transcripts kept in
//! `tests/scenarios/*.test` at the workspace root.

pub mod report;
pub mod scenario;

pub use report::{CaseFailure, FailedCase, ScenarioReport, StepMismatch};
