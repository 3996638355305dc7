//! Replays the transcripts in `tests/scenarios/` against a fresh kernel.

use treesh_testutil::scenario::{parse_scenarios, run_scenarios};

const BASICS: &str = include_str!("../../../tests/scenarios/basics.test");
const MOVE_COPY: &str = include_str!("../../../tests/scenarios/move_copy.test");
const ERRORS: &str = include_str!("../../../tests/scenarios/errors.test");

fn run(name: &str, content: &str) {
    assert!(!parse_scenarios(content).is_empty(), "{name}: no cases parsed");
    let report = run_scenarios(content);
    println!("{name}:{report}");
    assert!(report.all_passed(), "{name} scenarios failed:{report}");
}

#[test]
fn basics_scenarios() {
    run("basics", BASICS);
}

#[test]
fn move_copy_scenarios() {
    run("move_copy", MOVE_COPY);
}

#[test]
fn error_scenarios() {
    run("errors", ERRORS);
}
