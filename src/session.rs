use std::sync::Arc;

use crate::common::command::Command;
use crate::common::config::WebDriverConfig;
use crate::common::types::SessionId;
use crate::error::WebDriverResult;
use crate::http::connection_sync::WebDriverHttpClientSync;
use crate::query::session_waiter::SessionWaiter;
use crate::webdrivercommands::WebDriverCommands;

/// One live browser session: the session id plus the connection used to
/// execute commands against it.
#[derive(Debug)]
pub struct WebDriverSession {
    session_id: SessionId,
    conn: Arc<dyn WebDriverHttpClientSync>,
    config: WebDriverConfig,
}

impl WebDriverSession {
    pub fn new(session_id: SessionId, conn: Arc<dyn WebDriverHttpClientSync>) -> Self {
        Self {
            session_id,
            conn,
            config: WebDriverConfig::new(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn config(&self) -> &WebDriverConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WebDriverConfig {
        &mut self.config
    }

    pub fn execute(&self, command: Command<'_>) -> WebDriverResult<serde_json::Value> {
        self.conn.execute(&self.session_id, command)
    }

    /// Return a SessionWaiter for explicit waits on session-level state,
    /// e.g. the current URL, using this session's poller policy.
    pub fn wait(&self) -> SessionWaiter<'_> {
        SessionWaiter::new(self, self.config.query_poller.clone())
    }
}

impl WebDriverCommands for WebDriverSession {
    fn session(&self) -> &WebDriverSession {
        self
    }
}
