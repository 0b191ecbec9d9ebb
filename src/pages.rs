//! Page objects for the login and projects pages.
//!
//! Each page object binds a fixed set of locators to one semantic page and
//! exposes high-level operations built from the shared [`PageAccessor`]
//! capability plus explicit waits. Page objects borrow the session; they
//! never create or destroy it.

use crate::common::command::By;
use crate::components::select::SelectElement;
use crate::config::Config;
use crate::error::WebDriverResult;
use crate::query::element_waiter::ElementWaitable;
use crate::webdrivercommands::WebDriverCommands;
use crate::WebDriverSession;

/// Element-accessor capability shared by all page objects.
///
/// These are thin, unsynchronized primitives: they assume the caller has
/// already established that the element is in the required state.
/// Synchronization is layered on top via the explicit waiters, so the
/// accessor stays trivially testable against the fake driver.
pub trait PageAccessor {
    fn session(&self) -> &WebDriverSession;

    /// Check whether an element matching the locator is present. Any
    /// resolution failure collapses to `false`; this never errors.
    fn exists(&self, by: By<'_>) -> bool {
        self.session().find_element(by).is_ok()
    }

    /// Read the text contents of the element. Fails with NoSuchElement if
    /// the element is absent at call time.
    fn read_text(&self, by: By<'_>) -> WebDriverResult<String> {
        self.session().find_element(by)?.text()
    }

    /// Read the value attribute of an input element, returning the empty
    /// string if the attribute is absent.
    fn read_value(&self, by: By<'_>) -> WebDriverResult<String> {
        Ok(self.session().find_element(by)?.value()?.unwrap_or_default())
    }

    /// Type text into an input element. The text is appended to any
    /// existing content; callers must account for pre-existing content.
    fn type_text(&self, by: By<'_>, text: &str) -> WebDriverResult<()> {
        self.session().find_element(by)?.send_keys(text)
    }

    /// Click the element.
    fn click(&self, by: By<'_>) -> WebDriverResult<()> {
        self.session().find_element(by)?.click()
    }

    /// Select the option of a `<select>` element whose visible text matches
    /// exactly.
    fn select_option_by_text(&self, by: By<'_>, text: &str) -> WebDriverResult<()> {
        let elem = self.session().find_element(by)?;
        SelectElement::new(&elem)?.select_by_visible_text(text)
    }

    /// Read the visible text of the currently selected option of a
    /// `<select>` element.
    fn read_selected_option(&self, by: By<'_>) -> WebDriverResult<String> {
        let elem = self.session().find_element(by)?;
        SelectElement::new(&elem)?.first_selected_option()?.text()
    }
}

/// The login page.
pub struct LoginPage<'a> {
    session: &'a WebDriverSession,
}

impl PageAccessor for LoginPage<'_> {
    fn session(&self) -> &WebDriverSession {
        self.session
    }
}

impl<'a> LoginPage<'a> {
    pub const USERNAME: By<'static> = By::Name("username");
    pub const PASSWORD: By<'static> = By::Name("password");
    const SUBMIT: By<'static> = By::XPath("//button[contains(text(), 'Войти')]");

    pub fn new(session: &'a WebDriverSession) -> Self {
        LoginPage {
            session,
        }
    }

    /// Navigate to the login page.
    pub fn load(&self, config: &Config) -> WebDriverResult<()> {
        self.session.get(&config.login_url)
    }

    /// Fill in the credentials and submit the form.
    ///
    /// After typing each field this waits until the field actually contains
    /// the typed value before moving on. It deliberately does not wait for
    /// the result of the submission: success and failure navigate
    /// differently, and only the caller knows which branch to expect.
    pub fn login(&self, username: &str, password: &str) -> WebDriverResult<()> {
        self.type_text(Self::USERNAME, username)?;
        self.session
            .find_element(Self::USERNAME)?
            .wait_until()
            .error(&format!("Timed out waiting for username field to contain '{}'", username))
            .has_value(username.to_string())?;

        self.type_text(Self::PASSWORD, password)?;
        self.session
            .find_element(Self::PASSWORD)?
            .wait_until()
            .error("Timed out waiting for password field to contain the typed password")
            .has_value(password.to_string())?;

        self.click(Self::SUBMIT)
    }
}

/// The projects page, reached after a successful login.
pub struct ProjectsPage<'a> {
    session: &'a WebDriverSession,
}

impl PageAccessor for ProjectsPage<'_> {
    fn session(&self) -> &WebDriverSession {
        self.session
    }
}

impl<'a> ProjectsPage<'a> {
    pub const HEADER: By<'static> = By::Css("header h1");

    pub fn new(session: &'a WebDriverSession) -> Self {
        ProjectsPage {
            session,
        }
    }

    /// Navigate to the projects page directly.
    pub fn load(&self, config: &Config) -> WebDriverResult<()> {
        self.session.get(&config.projects_url)
    }

    /// Lightweight identity check: the header text if the header is
    /// present, None otherwise. This lets callers branch on "are we on the
    /// projects page?" without failing the test.
    pub fn header_text(&self) -> Option<String> {
        if self.exists(Self::HEADER) {
            self.read_text(Self::HEADER).ok()
        } else {
            None
        }
    }
}
