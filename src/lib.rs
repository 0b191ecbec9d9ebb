//! End-to-end UI smoke tests for the login / projects workflow, driven
//! through a built-in synchronous W3C WebDriver client.
//!
//! The crate has two layers:
//!
//! - A slim WebDriver client: session lifecycle, element lookup and
//!   interaction, a `<select>` wrapper, and bounded polling waits. The HTTP
//!   transport sits behind the
//!   [`WebDriverHttpClientSync`](http::connection_sync::WebDriverHttpClientSync)
//!   trait so that tests run against an in-memory fake application instead
//!   of a browser.
//! - The harness itself: page objects for the login and projects pages, a
//!   per-test fixture chain with guaranteed session teardown, and a
//!   sequential runner that classifies each test as passed, failed or
//!   errored and never aborts the batch.
//!
//! ## Running the suite
//!
//! The `ui_smoke` binary expects a running chromedriver (or any
//! W3C-compatible WebDriver server) and the application URLs and
//! credentials in the environment:
//!
//! ```ignore
//! chromedriver --port=4444
//!
//! LOGIN_URL=https://app.example.com/login \
//! PROJECTS_URL=https://app.example.com/projects \
//! VALID_USERNAME=... VALID_PASSWORD=... \
//! INVALID_USERNAME=... INVALID_PASSWORD=... \
//! HEADLESS=true cargo run
//! ```
//!
//! Every action that changes page state and is asserted on afterwards is
//! followed by an explicit bounded wait for the resulting condition; there
//! are no fixed sleeps anywhere in the harness.

#![forbid(unsafe_code)]

pub use common::command::By;
pub use common::types::{ElementId, SessionId};
pub use error::{HarnessError, HarnessResult, WebDriverError, WebDriverResult};
pub use session::WebDriverSession;
pub use webdriver::{GenericWebDriver, SessionOptions, WebDriver};
pub use webdrivercommands::WebDriverCommands;
pub use webelement::WebElement;

pub mod prelude {
    pub use crate::common::command::By;
    pub use crate::config::Config;
    pub use crate::error::{check, HarnessError, HarnessResult, WebDriverError, WebDriverResult};
    pub use crate::http::connection_sync::WebDriverHttpClientSync;
    pub use crate::pages::{LoginPage, PageAccessor, ProjectsPage};
    pub use crate::query::element_waiter::ElementWaitable;
    pub use crate::query::poller::ElementPoller;
    pub use crate::runner::{Outcome, TestCase};
    pub use crate::webdriver::{GenericWebDriver, SessionOptions, WebDriver};
    pub use crate::webdrivercommands::WebDriverCommands;
    pub use crate::webelement::WebElement;
    pub use crate::WebDriverSession;
}

pub mod availability;
pub mod common;
pub mod components {
    pub mod select;
}
pub mod config;
pub mod error;
pub mod fixtures;
pub mod http {
    pub mod connection_sync;
    pub mod fake_sync;
    pub mod reqwest_sync;
}
pub mod pages;
pub mod query {
    pub mod element_waiter;
    pub mod poller;
    pub mod session_waiter;
}
pub mod runner;
mod session;
pub mod suite;
mod webdriver;
mod webdrivercommands;
mod webelement;
