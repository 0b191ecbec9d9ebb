//! Runner classification and batch-continuation behavior, exercised with
//! synthetic test cases that never touch a browser.

use ui_smoke::config::Config;
use ui_smoke::error::{check, HarnessError, HarnessResult};
use ui_smoke::runner::{run_all, summarize, Outcome, TestCase};
use ui_smoke::WebDriverError;

fn dummy_config() -> Config {
    Config {
        webdriver_url: String::from("fake://unused"),
        login_url: String::from("https://app.local/login"),
        projects_url: String::from("https://app.local/projects"),
        valid_username: String::from("qa_user"),
        valid_password: String::from("s3cret"),
        invalid_username: String::from("intruder"),
        invalid_password: String::from("wrong"),
        headless: true,
    }
}

fn passes(_config: &Config) -> HarnessResult<()> {
    Ok(())
}

fn fails(_config: &Config) -> HarnessResult<()> {
    check(false, "expected 'a', got 'b'")
}

fn errors(_config: &Config) -> HarnessResult<()> {
    Err(HarnessError::Driver(WebDriverError::Timeout(String::from("gave up after 10s"))))
}

fn panics(_config: &Config) -> HarnessResult<()> {
    panic!("kaboom");
}

fn unavailable(_config: &Config) -> HarnessResult<()> {
    Err(HarnessError::Availability {
        status: 503,
    })
}

#[test]
fn every_case_is_attempted_and_classified() {
    let cases = [
        TestCase {
            id: "first_passes",
            run: passes,
        },
        TestCase {
            id: "second_fails",
            run: fails,
        },
        TestCase {
            id: "third_errors",
            run: errors,
        },
        TestCase {
            id: "fourth_passes",
            run: passes,
        },
    ];

    let reports = run_all(&cases, &dummy_config());

    // A failure must never stop the batch: all N cases are attempted, in
    // order.
    assert_eq!(reports.len(), cases.len());
    let ids: Vec<&str> = reports.iter().map(|r| r.id).collect();
    assert_eq!(ids, ["first_passes", "second_fails", "third_errors", "fourth_passes"]);

    assert_eq!(reports[0].outcome, Outcome::Passed);
    assert_eq!(reports[1].outcome, Outcome::Failed);
    assert_eq!(reports[1].detail.as_deref(), Some("expected 'a', got 'b'"));
    assert_eq!(reports[2].outcome, Outcome::Errored);
    assert_eq!(reports[3].outcome, Outcome::Passed);

    let (passed, failed, errored) = summarize(&reports);
    assert_eq!(passed + failed + errored, cases.len());
    assert_eq!((passed, failed, errored), (2, 1, 1));
}

#[test]
fn a_panicking_test_is_reported_as_errored_and_the_batch_continues() {
    let cases = [
        TestCase {
            id: "panicking",
            run: panics,
        },
        TestCase {
            id: "survivor",
            run: passes,
        },
    ];

    let reports = run_all(&cases, &dummy_config());

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].outcome, Outcome::Errored);
    assert!(reports[0].detail.as_deref().unwrap_or("").contains("kaboom"));
    assert_eq!(reports[1].outcome, Outcome::Passed);
}

#[test]
fn an_unavailable_page_is_reported_as_errored() {
    let cases = [TestCase {
        id: "probe_503",
        run: unavailable,
    }];

    let reports = run_all(&cases, &dummy_config());

    assert_eq!(reports[0].outcome, Outcome::Errored);
    assert!(reports[0].detail.as_deref().unwrap_or("").contains("503"));
}

#[test]
fn wait_timeouts_and_assertions_stay_distinguishable() {
    let timeout: HarnessError = WebDriverError::Timeout(String::from("no URL change")).into();
    let assertion = HarnessError::Assertion(String::from("URL mismatch"));

    // The two buckets must never be conflated in reporting.
    assert!(matches!(timeout, HarnessError::Driver(WebDriverError::Timeout(_))));
    assert!(matches!(assertion, HarnessError::Assertion(_)));
}
