use stringmatch::Needle;

use crate::error::{WebDriverError, WebDriverResult};
use crate::query::poller::{ElementPoller, ElementPollerTicker};
use crate::webelement::WebElement;

pub type ElementPredicate = Box<dyn Fn(&WebElement) -> WebDriverResult<bool> + Send + Sync>;

fn handle_errors(result: WebDriverResult<bool>, ignore: bool) -> WebDriverResult<bool> {
    match result {
        Ok(x) => Ok(x),
        Err(_) if ignore => Ok(false),
        Err(e) => Err(e),
    }
}

/// High-level interface for performing explicit waits on an already-found
/// element, using the builder pattern.
///
/// Every action that changes page state and is asserted on afterwards must
/// be followed by one of these waits for the resulting condition, never by
/// a fixed sleep. A wait that times out returns
/// [`WebDriverError::Timeout`] carrying the configured message.
pub struct ElementWaiter<'a> {
    element: &'a WebElement<'a>,
    poller: ElementPoller,
    message: String,
    ignore_errors: bool,
}

impl<'a> ElementWaiter<'a> {
    fn new(element: &'a WebElement<'a>, poller: ElementPoller) -> Self {
        Self {
            element,
            poller,
            message: String::new(),
            ignore_errors: true,
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

    /// By default a waiter will ignore any errors that occur while polling
    /// for the desired condition. This can be modified so that the waiter
    /// returns early if the driver returns an error.
    pub fn ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = ignore;
        self
    }

    fn run_poller(&self, condition: ElementPredicate) -> WebDriverResult<bool> {
        let mut ticker = ElementPollerTicker::new(self.poller.clone());
        loop {
            if condition(self.element)? {
                return Ok(true);
            }

            if !ticker.tick() {
                return Ok(false);
            }
        }
    }

    pub fn condition(self, condition: ElementPredicate) -> WebDriverResult<()> {
        match self.run_poller(condition)? {
            true => Ok(()),
            false => Err(WebDriverError::Timeout(self.message)),
        }
    }

    /// Wait until the element is displayed.
    pub fn displayed(self) -> WebDriverResult<()> {
        let ignore_errors = self.ignore_errors;
        self.condition(Box::new(move |elem| {
            handle_errors(elem.is_displayed(), ignore_errors)
        }))
    }

    /// Wait until the element is clickable, i.e. both displayed and
    /// enabled.
    pub fn clickable(self) -> WebDriverResult<()> {
        let ignore_errors = self.ignore_errors;
        self.condition(Box::new(move |elem| {
            let clickable = elem
                .is_displayed()
                .and_then(|displayed| if displayed { elem.is_enabled() } else { Ok(false) });
            handle_errors(clickable, ignore_errors)
        }))
    }

    /// Wait until the element's value attribute matches the specified
    /// needle (e.g. exact equality for a `String`).
    pub fn has_value<N>(self, value: N) -> WebDriverResult<()>
    where
        N: Needle + Send + Sync + 'static,
    {
        let ignore_errors = self.ignore_errors;
        self.condition(Box::new(move |elem| {
            let matched = elem
                .value()
                .map(|v| v.map(|x| value.is_match(&x)).unwrap_or(false));
            handle_errors(matched, ignore_errors)
        }))
    }
}

/// Trait for enabling the ElementWaiter interface.
pub trait ElementWaitable {
    fn wait_until(&self) -> ElementWaiter;
}

impl ElementWaitable for WebElement<'_> {
    /// Return an ElementWaiter using the session's poller policy.
    fn wait_until(&self) -> ElementWaiter {
        let poller: ElementPoller = self.session.config().query_poller.clone();
        ElementWaiter::new(self, poller)
    }
}
