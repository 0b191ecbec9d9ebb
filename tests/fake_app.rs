//! Harness behavior exercised against the in-memory fake application.

use std::sync::Arc;
use std::time::Duration;

use ui_smoke::config::Config;
use ui_smoke::fixtures;
use ui_smoke::http::fake_sync::{install, FakeApp, FakeDriverSync};
use ui_smoke::prelude::*;
use ui_smoke::{suite, SessionId};

const ERROR_BANNER: By<'static> =
    By::XPath("//div[text()='Неверный логин/пароль. Проверьте данные']");
const PROJECT_TYPE_DROPDOWN: By<'static> = By::Css(".Select-control");
const OPTION_INTERNAL: By<'static> = By::XPath(
    "//div[@class='Select-menu']//div[normalize-space()='Внутренний' or normalize-space()='Internal']",
);
const SELECTED_VALUE: By<'static> = By::Css(".Select-value-label");
const PROJECT_NAME_INPUT: By<'static> = By::XPath(
    "//input[normalize-space(@placeholder)='Введите название проекта' or normalize-space(@placeholder)='Enter the project name']",
);
const PROJECT_TYPE_SELECT: By<'static> = By::Name("project_type");

fn fake_config() -> Config {
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

/// Build a session over a fake app, polling fast so that negative waits
/// fail in milliseconds rather than the production 10 seconds.
fn fake_session(app: FakeApp) -> WebDriverSession {
    let conn = FakeDriverSync::with_app(app);
    let mut session = WebDriverSession::new(SessionId::from("fake-session"), Arc::new(conn));
    session.config_mut().query_poller =
        ElementPoller::NumTriesWithInterval(3, Duration::from_millis(1));
    session
}

#[test]
fn valid_login_lands_on_projects_url() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let login = fixtures::login_page(&session, &config).unwrap();
    login.login(&config.valid_username, &config.valid_password).unwrap();

    session.wait().error("no URL change").url_is(&config.projects_url).unwrap();
    assert_eq!(session.current_url().unwrap(), config.projects_url);
}

#[test]
fn invalid_login_shows_banner_and_stays_on_login_url() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let login = fixtures::login_page(&session, &config).unwrap();
    login.login(&config.invalid_username, &config.invalid_password).unwrap();

    assert!(login.exists(ERROR_BANNER), "error banner expected after invalid login");
    assert_eq!(session.current_url().unwrap(), config.login_url);
}

#[test]
fn valid_login_scenario_passes_against_the_fake_app() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());
    suite::check_valid_login(&session, &config).unwrap();
}

#[test]
fn invalid_login_scenario_passes_against_the_fake_app() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());
    suite::check_invalid_login(&session, &config).unwrap();
}

#[test]
fn missing_error_banner_reports_an_assertion_failure() {
    // Credentials the scenario believes are invalid actually log in, so the
    // banner never renders. A banner that never shows up is the product
    // contract failing and must read as an assertion failure, not as an
    // infrastructure error.
    let mut config = fake_config();
    config.invalid_username = config.valid_username.clone();
    config.invalid_password = config.valid_password.clone();
    let session = fake_session(FakeApp::demo());

    match suite::check_invalid_login(&session, &config) {
        Err(HarnessError::Assertion(msg)) => {
            assert!(msg.contains("banner"), "assertion should name the banner: {}", msg)
        }
        other => panic!("expected an assertion failure, got {:?}", other),
    }
}

#[test]
fn exists_is_idempotent_without_page_mutation() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let login = fixtures::login_page(&session, &config).unwrap();
    // Absent element: false, twice.
    assert!(!login.exists(ERROR_BANNER));
    assert!(!login.exists(ERROR_BANNER));
    // Present element: true, twice.
    assert!(login.exists(LoginPage::USERNAME));
    assert!(login.exists(LoginPage::USERNAME));
}

#[test]
fn authenticated_fixture_returns_projects_page() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let projects = fixtures::authenticated_projects_page(&session, &config).unwrap();
    assert_eq!(projects.header_text().as_deref(), Some("Проекты"));
}

#[test]
fn fixture_login_failure_is_a_timeout_not_an_assertion() {
    let mut config = fake_config();
    config.valid_password = String::from("not-actually-valid");
    let session = fake_session(FakeApp::demo());

    match fixtures::authenticated_projects_page(&session, &config) {
        Err(WebDriverError::Timeout(msg)) => {
            assert!(msg.contains("URL"), "timeout message should name the awaited URL: {}", msg)
        }
        other => panic!("expected a timeout, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn header_check_is_a_sentinel_not_a_hard_failure() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    // Bound to the wrong page, the identity check returns None instead of
    // erroring.
    let projects = ProjectsPage::new(&session);
    fixtures::login_page(&session, &config).unwrap();
    assert_eq!(projects.header_text(), None);

    projects.load(&config).unwrap();
    assert_eq!(projects.header_text().as_deref(), Some("Проекты"));
}

#[test]
fn typed_text_appends_and_round_trips_non_ascii() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let projects = ProjectsPage::new(&session);
    projects.load(&config).unwrap();

    projects.type_text(PROJECT_NAME_INPUT, "При").unwrap();
    projects.type_text(PROJECT_NAME_INPUT, "вет").unwrap();

    let input = session.find_element(PROJECT_NAME_INPUT).unwrap();
    input
        .wait_until()
        .error("typed value never appeared")
        .has_value(String::from("Привет"))
        .unwrap();
    assert_eq!(projects.read_value(PROJECT_NAME_INPUT).unwrap(), "Привет");
}

#[test]
fn native_select_round_trips_visible_text() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let projects = ProjectsPage::new(&session);
    projects.load(&config).unwrap();

    projects.select_option_by_text(PROJECT_TYPE_SELECT, "Внутренний").unwrap();
    let selected = projects.read_selected_option(PROJECT_TYPE_SELECT).unwrap();
    assert!(
        matches!(selected.as_str(), "Внутренний" | "Internal"),
        "unexpected selected option: {}",
        selected
    );
}

#[test]
fn native_select_round_trips_english_localization() {
    let config = fake_config();
    let mut app = FakeApp::demo();
    app.english = true;
    let session = fake_session(app);

    let projects = ProjectsPage::new(&session);
    projects.load(&config).unwrap();

    projects.select_option_by_text(PROJECT_TYPE_SELECT, "Internal").unwrap();
    let selected = projects.read_selected_option(PROJECT_TYPE_SELECT).unwrap();
    assert!(matches!(selected.as_str(), "Внутренний" | "Internal"));
}

#[test]
fn select_with_unmatched_text_fails_with_no_such_element() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let projects = ProjectsPage::new(&session);
    projects.load(&config).unwrap();

    match projects.select_option_by_text(PROJECT_TYPE_SELECT, "Несуществующий") {
        Err(WebDriverError::NoSuchElement(_)) => {}
        other => panic!("expected NoSuchElement, got {:?}", other),
    }
}

#[test]
fn read_selected_option_with_no_selection_fails() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let projects = ProjectsPage::new(&session);
    projects.load(&config).unwrap();

    match projects.read_selected_option(PROJECT_TYPE_SELECT) {
        Err(WebDriverError::NoSuchElement(_)) => {}
        other => panic!("expected NoSuchElement, got {:?}", other),
    }
}

#[test]
fn custom_dropdown_flow_shows_accepted_selection() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let _projects = fixtures::authenticated_projects_page(&session, &config).unwrap();

    let dropdown = session.wait().error("no dropdown").clickable(PROJECT_TYPE_DROPDOWN).unwrap();
    dropdown.click().unwrap();
    let option = session.wait().error("no option").clickable(OPTION_INTERNAL).unwrap();
    option.click().unwrap();
    let selected = session.wait().error("no selection label").displayed(SELECTED_VALUE).unwrap();
    let text = selected.text().unwrap();
    assert!(matches!(text.trim(), "Внутренний" | "Internal"), "got '{}'", text);
}

#[test]
fn dropdown_option_is_absent_until_the_dropdown_opens() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());

    let projects = ProjectsPage::new(&session);
    projects.load(&config).unwrap();

    match session.wait().error("option never appeared").clickable(OPTION_INTERNAL) {
        Err(WebDriverError::Timeout(msg)) => assert_eq!(msg, "option never appeared"),
        other => panic!("expected a timeout, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn wait_timeout_carries_the_configured_message() {
    let config = fake_config();
    let session = fake_session(FakeApp::demo());
    fixtures::login_page(&session, &config).unwrap();

    match session.wait().error("header never showed").displayed(ProjectsPage::HEADER) {
        Err(WebDriverError::Timeout(msg)) => assert_eq!(msg, "header never showed"),
        other => panic!("expected a timeout, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn session_guard_quits_on_drop() {
    let handle = install("fake://guard-drop", FakeApp::demo());

    {
        let _driver = GenericWebDriver::<FakeDriverSync>::new(
            "fake://guard-drop",
            &SessionOptions::default(),
        )
        .unwrap();
        assert!(!handle.lock().unwrap().ended);
    }

    assert!(handle.lock().unwrap().ended, "session should be closed when the guard is dropped");
}

#[test]
fn explicit_quit_also_closes_the_session() {
    let handle = install("fake://explicit-quit", FakeApp::demo());

    let driver =
        GenericWebDriver::<FakeDriverSync>::new("fake://explicit-quit", &SessionOptions::default())
            .unwrap();
    driver.quit().unwrap();

    assert!(handle.lock().unwrap().ended);
}

#[test]
fn raw_session_applies_the_implicit_wait() {
    let handle = install("fake://implicit-wait", FakeApp::demo());

    let driver = GenericWebDriver::<FakeDriverSync>::new(
        "fake://implicit-wait",
        &SessionOptions::default(),
    )
    .unwrap();
    driver.set_implicit_wait(Duration::from_secs(3)).unwrap();

    assert_eq!(handle.lock().unwrap().implicit_wait_ms, 3000);
}
