//! Sequential test runner.
//!
//! Executes a fixed, ordered list of test cases one at a time, classifies
//! each outcome and prints one human-readable line per test. A failure in
//! one test never prevents the remaining tests from running; the runner's
//! responsibility ends at reporting.

use std::panic::{self, AssertUnwindSafe};

use log::info;

use crate::config::Config;
use crate::error::{HarnessError, HarnessResult};

/// Classification of one test execution.
///
/// `Failed` means an observed value differed from the expected value after
/// all required waits succeeded: a behavioral regression in the application
/// under test. `Errored` means a precondition was not met (wait timeout,
/// missing element, session or fixture failure): the environment or the
/// system under test was not in the expected state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Errored,
}

/// One test: a stable identifier plus the function that drives it.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    pub id: &'static str,
    pub run: fn(&Config) -> HarnessResult<()>,
}

#[derive(Debug)]
pub struct TestReport {
    pub id: &'static str,
    pub outcome: Outcome,
    pub detail: Option<String>,
}

fn panic_detail(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {}", s)
    } else {
        String::from("panic with non-string payload")
    }
}

fn classify(result: std::thread::Result<HarnessResult<()>>) -> (Outcome, Option<String>) {
    match result {
        Ok(Ok(())) => (Outcome::Passed, None),
        Ok(Err(HarnessError::Assertion(msg))) => (Outcome::Failed, Some(msg)),
        Ok(Err(e)) => (Outcome::Errored, Some(e.to_string())),
        Err(payload) => (Outcome::Errored, Some(panic_detail(payload))),
    }
}

fn print_report(report: &TestReport) {
    match report.outcome {
        Outcome::Passed => println!("✅ Test '{}' passed.", report.id),
        Outcome::Failed => println!(
            "❌ Test '{}' failed: {}",
            report.id,
            report.detail.as_deref().unwrap_or("")
        ),
        Outcome::Errored => println!(
            "⚠️ Test '{}' finished with an error: {}",
            report.id,
            report.detail.as_deref().unwrap_or("")
        ),
    }
}

/// Run all test cases in order and report each outcome.
pub fn run_all(cases: &[TestCase], config: &Config) -> Vec<TestReport> {
    cases
        .iter()
        .map(|case| {
            info!("running test '{}'", case.id);
            let result = panic::catch_unwind(AssertUnwindSafe(|| (case.run)(config)));
            let (outcome, detail) = classify(result);
            let report = TestReport {
                id: case.id,
                outcome,
                detail,
            };
            print_report(&report);
            report
        })
        .collect()
}

/// Count (passed, failed, errored) over a set of reports.
pub fn summarize(reports: &[TestReport]) -> (usize, usize, usize) {
    let passed = reports.iter().filter(|r| r.outcome == Outcome::Passed).count();
    let failed = reports.iter().filter(|r| r.outcome == Outcome::Failed).count();
    let errored = reports.iter().filter(|r| r.outcome == Outcome::Errored).count();
    (passed, failed, errored)
}
