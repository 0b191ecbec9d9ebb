use crate::query::poller::ElementPoller;

/// Per-session driver configuration.
///
/// The query poller is the single timeout policy shared by all explicit
/// waits performed against this session.
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    pub query_poller: ElementPoller,
}

impl WebDriverConfig {
    pub fn new() -> Self {
        WebDriverConfig {
            query_poller: ElementPoller::default(),
        }
    }
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self::new()
    }
}
