use std::fmt::Debug;
use std::time::Duration;

use crate::common::command::Command;
use crate::common::types::SessionId;
use crate::error::WebDriverResult;

#[derive(Debug, Clone)]
pub struct HttpClientCreateParams {
    pub server_url: String,
    pub timeout: Option<Duration>,
}

/// Trait for executing WebDriver commands against a server.
///
/// As long as you have some struct that implements WebDriverHttpClientSync,
/// you can turn it into a WebDriver like this:
///
/// ```ignore
/// // Assuming MyHttpClient implements WebDriverHttpClientSync.
/// pub type MyWebDriver = GenericWebDriver<MyHttpClient>;
/// ```
///
/// The fake driver used by the test suite implements this trait over an
/// in-memory application model instead of HTTP.
pub trait WebDriverHttpClientSync: Debug + Send + Sync {
    fn create(params: HttpClientCreateParams) -> WebDriverResult<Self>
    where
        Self: Sized;

    fn execute(
        &self,
        session_id: &SessionId,
        command: Command<'_>,
    ) -> WebDriverResult<serde_json::Value>;
}
