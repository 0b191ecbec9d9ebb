//! The smoke-test suite: the ordered list of test cases the runner
//! executes.
//!
//! Each test owns one browser session for its full duration; the session is
//! created by the fixture chain and torn down when the `WebDriver` guard
//! goes out of scope, pass or fail. The scenario bodies are separate
//! session-level functions, so they run unchanged against the fake driver
//! in the integration tests.

use crate::availability;
use crate::common::command::By;
use crate::config::Config;
use crate::error::{check, HarnessResult, WebDriverError};
use crate::fixtures;
use crate::query::element_waiter::ElementWaitable;
use crate::runner::TestCase;
use crate::webdrivercommands::WebDriverCommands;
use crate::WebDriverSession;

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

/// The tests executed by the runner, in order.
pub const TESTS: &[TestCase] = &[
    TestCase {
        id: "login_valid_creds",
        run: test_login_valid_creds,
    },
    TestCase {
        id: "login_invalid_creds",
        run: test_login_invalid_creds,
    },
    TestCase {
        id: "select_project_type",
        run: test_select_project_type,
    },
    TestCase {
        id: "input_project_name",
        run: test_input_project_name,
    },
];

fn test_login_valid_creds(config: &Config) -> HarnessResult<()> {
    availability::check_available(&config.login_url)?;
    let driver = fixtures::raw_session(config)?;
    check_valid_login(driver.session(), config)
}

fn test_login_invalid_creds(config: &Config) -> HarnessResult<()> {
    let driver = fixtures::raw_session(config)?;
    check_invalid_login(driver.session(), config)
}

fn test_select_project_type(config: &Config) -> HarnessResult<()> {
    let driver = fixtures::raw_session(config)?;
    check_project_type_selection(driver.session(), config)
}

fn test_input_project_name(config: &Config) -> HarnessResult<()> {
    let driver = fixtures::raw_session(config)?;
    check_project_name_input(driver.session(), config)
}

/// Valid credentials log in and land exactly on the projects URL.
pub fn check_valid_login(session: &WebDriverSession, config: &Config) -> HarnessResult<()> {
    let login = fixtures::login_page(session, config)?;
    login.login(&config.valid_username, &config.valid_password)?;

    session
        .wait()
        .error(&format!("Timed out waiting for the URL to change to {}", config.projects_url))
        .url_is(&config.projects_url)?;

    let current_url = session.current_url()?;
    check(
        current_url == config.projects_url,
        format!("expected URL {}, got {}", config.projects_url, current_url),
    )
}

/// Invalid credentials show the error banner and stay on the login URL.
///
/// The banner is given a bounded wait to render, but its absence after
/// that wait is the product contract failing, so it reports as an
/// assertion failure rather than an infrastructure error.
pub fn check_invalid_login(session: &WebDriverSession, config: &Config) -> HarnessResult<()> {
    let login = fixtures::login_page(session, config)?;
    login.login(&config.invalid_username, &config.invalid_password)?;

    let text = match session.wait().displayed(ERROR_BANNER) {
        Ok(banner) => banner.text()?,
        Err(WebDriverError::Timeout(_)) => {
            return check(false, "no error banner shown for invalid credentials")
        }
        Err(e) => return Err(e.into()),
    };
    check(
        text == "Неверный логин/пароль. Проверьте данные",
        format!("unexpected error banner text: '{}'", text),
    )?;
    let current_url = session.current_url()?;
    check(
        current_url == config.login_url,
        format!("login with invalid credentials left the login page, URL is {}", current_url),
    )
}

/// Selecting the "Внутренний" / "Internal" project type displays the chosen
/// value. The application may render either localization; both are accepted.
pub fn check_project_type_selection(
    session: &WebDriverSession,
    config: &Config,
) -> HarnessResult<()> {
    let _projects = fixtures::authenticated_projects_page(session, config)?;

    let dropdown = session
        .wait()
        .error("Timed out waiting for the project type dropdown to become clickable")
        .clickable(PROJECT_TYPE_DROPDOWN)?;
    dropdown.click()?;

    let option = session
        .wait()
        .error("Timed out waiting for the 'Внутренний' / 'Internal' option to become clickable")
        .clickable(OPTION_INTERNAL)?;
    option.click()?;

    let selected = session
        .wait()
        .error("Timed out waiting for the selected project type to become visible")
        .displayed(SELECTED_VALUE)?;
    let text = selected.text()?;
    check(
        matches!(text.trim(), "Внутренний" | "Internal"),
        format!("expected project type 'Внутренний' / 'Internal', got '{}'", text),
    )
}

/// Typing a project name shows up in the input, including non-ASCII text.
pub fn check_project_name_input(session: &WebDriverSession, config: &Config) -> HarnessResult<()> {
    let _projects = fixtures::authenticated_projects_page(session, config)?;

    let input = session
        .wait()
        .error("Timed out waiting for the project name input to become visible")
        .displayed(PROJECT_NAME_INPUT)?;
    input.send_keys("Привет")?;
    input
        .wait_until()
        .error("Timed out waiting for 'Привет' to appear in the project name input")
        .has_value(String::from("Привет"))?;

    let entered = input.value()?.unwrap_or_default();
    check(entered == "Привет", format!("expected project name 'Привет', got '{}'", entered))
}
