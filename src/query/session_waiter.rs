use std::time::Duration;

use crate::common::command::By;
use crate::error::{WebDriverError, WebDriverResult};
use crate::query::poller::{ElementPoller, ElementPollerTicker};
use crate::webdrivercommands::WebDriverCommands;
use crate::webelement::WebElement;
use crate::WebDriverSession;

/// Explicit waits on session-level state, re-resolving locators on every
/// poll. This is the wait to use before interacting with an element that
/// may not have been rendered yet, and after any action that triggers a
/// navigation.
///
/// Obtained via [`WebDriverSession::wait`].
pub struct SessionWaiter<'a> {
    session: &'a WebDriverSession,
    poller: ElementPoller,
    message: String,
}

impl<'a> SessionWaiter<'a> {
    pub fn new(session: &'a WebDriverSession, poller: ElementPoller) -> Self {
        Self {
            session,
            poller,
            message: String::new(),
        }
    }

    /// Use the specified ElementPoller for this wait only.
    pub fn with_poller(mut self, poller: ElementPoller) -> Self {
        self.poller = poller;
        self
    }

    /// Provide a human-readable error message to be returned in the case of
    /// timeout.
    pub fn error(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    /// Force this wait to use the specified timeout, polling once after
    /// each interval.
    pub fn wait(self, timeout: Duration, interval: Duration) -> Self {
        self.with_poller(ElementPoller::TimeoutWithInterval(timeout, interval))
    }

    /// Wait until the browser's current URL equals the specified URL
    /// exactly.
    pub fn url_is(self, url: &str) -> WebDriverResult<()> {
        let mut ticker = ElementPollerTicker::new(self.poller.clone());
        loop {
            if self.session.current_url()? == url {
                return Ok(());
            }
            if !ticker.tick() {
                return Err(WebDriverError::Timeout(self.message));
            }
        }
    }

    /// Wait until an element matching the locator exists and is displayed,
    /// and return it.
    pub fn displayed(self, by: By<'a>) -> WebDriverResult<WebElement<'a>> {
        self.find_when(by, |elem| elem.is_displayed())
    }

    /// Wait until an element matching the locator exists and is clickable
    /// (displayed and enabled), and return it.
    pub fn clickable(self, by: By<'a>) -> WebDriverResult<WebElement<'a>> {
        self.find_when(by, |elem| {
            elem.is_displayed()
                .and_then(|displayed| if displayed { elem.is_enabled() } else { Ok(false) })
        })
    }

    fn find_when<F>(self, by: By<'a>, condition: F) -> WebDriverResult<WebElement<'a>>
    where
        F: Fn(&WebElement<'a>) -> WebDriverResult<bool>,
    {
        let mut ticker = ElementPollerTicker::new(self.poller.clone());
        loop {
            match self.session.find_element(by) {
                Ok(elem) => {
                    if condition(&elem).unwrap_or(false) {
                        return Ok(elem);
                    }
                }
                // The element may simply not be rendered yet, or may have
                // been replaced mid-poll. Keep polling.
                Err(WebDriverError::NoSuchElement(_))
                | Err(WebDriverError::StaleElementReference(_)) => {}
                Err(e) => return Err(e),
            }
            if !ticker.tick() {
                return Err(WebDriverError::Timeout(self.message));
            }
        }
    }
}
