use std::time::Duration;

use crate::common::command::{By, Command};
use crate::common::convert_json;
use crate::common::types::SessionId;
use crate::error::{WebDriverError, WebDriverResult};
use crate::http::connection_sync::WebDriverHttpClientSync;
use crate::webdriver::SessionOptions;
use crate::webelement::{convert_element_sync, WebElement};
use crate::WebDriverSession;

/// Create a new session on the WebDriver server and return its id.
pub fn start_session(
    conn: &dyn WebDriverHttpClientSync,
    options: &SessionOptions,
) -> WebDriverResult<SessionId> {
    let v = conn.execute(&SessionId::null(), Command::NewSession(options.to_capabilities()))?;
    v["value"]["sessionId"]
        .as_str()
        .or_else(|| v["sessionId"].as_str())
        .map(SessionId::from)
        .ok_or_else(|| {
            WebDriverError::SessionNotCreated(format!("invalid New Session response: {}", v))
        })
}

/// Commands available on anything holding a live session, i.e. both the
/// WebDriver struct and the session itself.
pub trait WebDriverCommands {
    fn session(&self) -> &WebDriverSession;

    /// Convenience wrapper for executing a WebDriver command.
    fn cmd(&self, command: Command<'_>) -> WebDriverResult<serde_json::Value> {
        self.session().execute(command)
    }

    /// Navigate to the specified URL.
    fn get(&self, url: &str) -> WebDriverResult<()> {
        self.cmd(Command::NavigateTo(url.to_owned()))?;
        Ok(())
    }

    /// Get the current URL as reported by the browser.
    fn current_url(&self) -> WebDriverResult<String> {
        let v = self.cmd(Command::GetCurrentUrl)?;
        convert_json(&v["value"])
    }

    /// Search for an element on the current page using the specified
    /// locator. Fails with NoSuchElement if nothing matches at call time
    /// (beyond any implicit wait configured on the session).
    fn find_element(&self, by: By<'_>) -> WebDriverResult<WebElement<'_>> {
        let v = self.cmd(Command::FindElement(by))?;
        convert_element_sync(self.session(), &v["value"])
    }

    /// Set the implicit element-lookup wait applied to the whole session.
    fn set_implicit_wait(&self, duration: Duration) -> WebDriverResult<()> {
        self.cmd(Command::SetImplicitWaitTimeout(duration))?;
        Ok(())
    }
}
