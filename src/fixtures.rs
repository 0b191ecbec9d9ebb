//! The per-test resource chain: raw session, loaded login page,
//! authenticated projects page.
//!
//! Each stage takes the previous stage's resource as an explicit argument
//! and is scoped to exactly one test invocation; nothing is cached or
//! shared across tests. The session itself is torn down by the
//! [`WebDriver`](crate::WebDriver) drop guard regardless of how the test
//! ends.
//!
//! A failure inside any of these builders is a precondition failure of the
//! dependent test, not an assertion failure: it propagates unmodified and
//! the runner classifies the test as errored.

use std::time::Duration;

use crate::config::Config;
use crate::error::WebDriverResult;
use crate::pages::{LoginPage, ProjectsPage};
use crate::webdriver::{SessionOptions, WebDriver};
use crate::webdrivercommands::WebDriverCommands;
use crate::WebDriverSession;

/// Create the browser session, honoring the headless switch and applying a
/// short implicit element-lookup wait to the whole session.
pub fn raw_session(config: &Config) -> WebDriverResult<WebDriver> {
    let options = SessionOptions {
        headless: config.headless,
    };
    let driver = WebDriver::new(&config.webdriver_url, &options)?;
    driver.set_implicit_wait(Duration::from_secs(3))?;
    Ok(driver)
}

/// Build a login page on the session and request it immediately, so that by
/// the time a test receives this fixture the login form has been navigated
/// to (though not necessarily rendered yet).
pub fn login_page<'a>(
    session: &'a WebDriverSession,
    config: &Config,
) -> WebDriverResult<LoginPage<'a>> {
    let page = LoginPage::new(session);
    page.load(config)?;
    Ok(page)
}

/// Log in with the known-valid credentials and hand back the projects page
/// on the same session. By the time this returns, the URL change to the
/// projects page has been waited for; if the login does not complete, the
/// fixture itself fails.
pub fn authenticated_projects_page<'a>(
    session: &'a WebDriverSession,
    config: &Config,
) -> WebDriverResult<ProjectsPage<'a>> {
    let login = login_page(session, config)?;
    login.login(&config.valid_username, &config.valid_password)?;
    session
        .wait()
        .error(&format!("Timed out waiting for the URL to change to {}", config.projects_url))
        .url_is(&config.projects_url)?;
    Ok(ProjectsPage::new(session))
}
