use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use log::error;
use serde_json::{json, Value};

use crate::common::command::Command;
use crate::common::types::SessionId;
use crate::error::WebDriverResult;
use crate::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};
use crate::http::reqwest_sync::ReqwestDriverSync;
use crate::webdrivercommands::{start_session, WebDriverCommands};
use crate::WebDriverSession;

/// The WebDriver struct represents a browser session over HTTP.
pub type WebDriver = GenericWebDriver<ReqwestDriverSync>;

/// Options applied when creating a session.
///
/// Explicit rather than ambient: everything that shapes the session is
/// passed in here at creation time.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub headless: bool,
}

impl SessionOptions {
    /// Build the `alwaysMatch` capabilities object for this session.
    pub fn to_capabilities(&self) -> Value {
        let mut args: Vec<&str> = Vec::new();
        if self.headless {
            args.push("--headless");
        }
        json!({
            "browserName": "chrome",
            "goog:chromeOptions": { "args": args },
        })
    }
}

/// A browser session generic over the transport used to execute commands.
/// Production code uses [`WebDriver`]; tests plug in the fake driver.
///
/// The session is closed on drop unless [`quit`](GenericWebDriver::quit)
/// was already called, so teardown runs regardless of the test outcome.
#[derive(Debug)]
pub struct GenericWebDriver<T: WebDriverHttpClientSync> {
    pub session: WebDriverSession,
    quit_on_drop: bool,
    phantom: PhantomData<T>,
}

impl<T: 'static> GenericWebDriver<T>
where
    T: WebDriverHttpClientSync,
{
    /// Create a new browser session on the given WebDriver server.
    pub fn new(server_url: &str, options: &SessionOptions) -> WebDriverResult<Self> {
        Self::new_with_timeout(server_url, options, None)
    }

    /// Like `new`, with a configurable timeout for all HTTP requests
    /// including the session creation itself.
    pub fn new_with_timeout(
        server_url: &str,
        options: &SessionOptions,
        timeout: Option<Duration>,
    ) -> WebDriverResult<Self> {
        let params = HttpClientCreateParams {
            server_url: server_url.to_string(),
            timeout,
        };
        let conn: Arc<dyn WebDriverHttpClientSync> = Arc::new(T::create(params)?);

        let session_id = start_session(conn.as_ref(), options)?;

        Ok(GenericWebDriver {
            session: WebDriverSession::new(session_id, conn),
            quit_on_drop: true,
            phantom: PhantomData,
        })
    }

    pub fn session_id(&self) -> &SessionId {
        self.session.session_id()
    }

    /// End the webdriver session.
    pub fn quit(mut self) -> WebDriverResult<()> {
        self.cmd(Command::DeleteSession)?;
        self.quit_on_drop = false;
        Ok(())
    }
}

impl<T> WebDriverCommands for GenericWebDriver<T>
where
    T: WebDriverHttpClientSync,
{
    fn session(&self) -> &WebDriverSession {
        &self.session
    }
}

impl<T> Drop for GenericWebDriver<T>
where
    T: WebDriverHttpClientSync,
{
    /// Close the session when the WebDriver struct goes out of scope.
    fn drop(&mut self) {
        if self.quit_on_drop && !self.session.session_id().is_empty() {
            if let Err(e) = self.cmd(Command::DeleteSession) {
                error!("Failed to close session: {:?}", e);
            }
        }
    }
}
