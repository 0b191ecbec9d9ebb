//! In-memory WebDriver backend for tests.
//!
//! `FakeDriverSync` implements [`WebDriverHttpClientSync`] over a small
//! model of the application under test: a login form that navigates to the
//! projects page on valid credentials, and a projects page with a header, a
//! custom project-type picker, a native `<select>` and a project-name
//! input. Inputs append on send-keys, matching real browser behavior.
//!
//! Tests either construct the driver directly via [`FakeDriverSync::with_app`]
//! and keep the returned state handle, or pre-register an application with
//! [`install`] so that `GenericWebDriver::new` picks it up by server URL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use serde_json::{json, Value};

use crate::common::command::{By, Command};
use crate::common::types::{SessionId, MAGIC_ELEMENTID};
use crate::error::{no_such_element, WebDriverError, WebDriverResult};
use crate::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};

const LOGIN_USERNAME: &str = "login-username";
const LOGIN_PASSWORD: &str = "login-password";
const LOGIN_SUBMIT: &str = "login-submit";
const LOGIN_ERROR_BANNER: &str = "login-error-banner";

const PROJECTS_HEADER: &str = "projects-header";
const PICKER_CONTROL: &str = "picker-control";
const PICKER_OPTION: &str = "picker-option-internal";
const PICKER_VALUE_LABEL: &str = "picker-value-label";
const PROJECT_TYPE_SELECT: &str = "project-type-select";
const PROJECT_TYPE_OPTION_0: &str = "project-type-option-0";
const PROJECT_TYPE_OPTION_1: &str = "project-type-option-1";
const PROJECT_NAME_INPUT: &str = "project-name-input";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Login,
    Projects,
    Other,
}

/// Mutable state of the fake application.
#[derive(Debug, Clone)]
pub struct FakeApp {
    pub login_url: String,
    pub projects_url: String,
    pub valid_username: String,
    pub valid_password: String,
    /// Render the English localization instead of the Russian one.
    pub english: bool,

    pub current_url: String,
    pub username: String,
    pub password: String,
    pub login_error: bool,
    pub project_name: String,
    pub picker_open: bool,
    pub picker_selection: Option<String>,
    pub native_selected: Option<usize>,
    pub implicit_wait_ms: u64,
    pub ended: bool,
}

impl FakeApp {
    pub fn new(
        login_url: &str,
        projects_url: &str,
        valid_username: &str,
        valid_password: &str,
    ) -> Self {
        FakeApp {
            login_url: login_url.to_string(),
            projects_url: projects_url.to_string(),
            valid_username: valid_username.to_string(),
            valid_password: valid_password.to_string(),
            english: false,
            current_url: String::from("about:blank"),
            username: String::new(),
            password: String::new(),
            login_error: false,
            project_name: String::new(),
            picker_open: false,
            picker_selection: None,
            native_selected: None,
            implicit_wait_ms: 0,
            ended: false,
        }
    }

    /// A ready-made application with the URLs and credentials the test
    /// suite uses by default.
    pub fn demo() -> Self {
        Self::new("https://app.local/login", "https://app.local/projects", "qa_user", "s3cret")
    }

    fn page(&self) -> Page {
        if self.current_url == self.login_url {
            Page::Login
        } else if self.current_url == self.projects_url {
            Page::Projects
        } else {
            Page::Other
        }
    }

    fn native_option_texts(&self) -> [&'static str; 2] {
        if self.english {
            ["Internal", "External"]
        } else {
            ["Внутренний", "Внешний"]
        }
    }

    fn picker_option_text(&self) -> &'static str {
        if self.english {
            "Internal"
        } else {
            "Внутренний"
        }
    }

    pub fn navigate(&mut self, url: &str) {
        self.current_url = url.to_string();
        if self.page() == Page::Login {
            self.username.clear();
            self.password.clear();
            self.login_error = false;
        }
        if self.page() == Page::Projects {
            self.picker_open = false;
            self.picker_selection = None;
            self.native_selected = None;
            self.project_name.clear();
        }
    }

    /// Resolve a locator against the current page.
    fn resolve(&self, by: &By<'_>) -> Option<&'static str> {
        match self.page() {
            Page::Login => match by {
                By::Name("username") => Some(LOGIN_USERNAME),
                By::Name("password") => Some(LOGIN_PASSWORD),
                By::XPath(x) if x.contains("Войти") => Some(LOGIN_SUBMIT),
                By::XPath(x) if x.contains("Неверный логин/пароль") => {
                    if self.login_error {
                        Some(LOGIN_ERROR_BANNER)
                    } else {
                        None
                    }
                }
                _ => None,
            },
            Page::Projects => match by {
                By::Css("header h1") => Some(PROJECTS_HEADER),
                By::Css(".Select-control") => Some(PICKER_CONTROL),
                By::Css(".Select-value-label") => {
                    if self.picker_selection.is_some() {
                        Some(PICKER_VALUE_LABEL)
                    } else {
                        None
                    }
                }
                By::XPath(x) if x.contains("Select-menu") => {
                    if self.picker_open {
                        Some(PICKER_OPTION)
                    } else {
                        None
                    }
                }
                By::XPath(x) if x.contains("placeholder") => Some(PROJECT_NAME_INPUT),
                By::Name("project_type") => Some(PROJECT_TYPE_SELECT),
                _ => None,
            },
            Page::Other => None,
        }
    }

    /// Whether a previously-returned element reference is still attached to
    /// the current page.
    fn element_exists(&self, id: &str) -> bool {
        match self.page() {
            Page::Login => match id {
                LOGIN_USERNAME | LOGIN_PASSWORD | LOGIN_SUBMIT => true,
                LOGIN_ERROR_BANNER => self.login_error,
                _ => false,
            },
            Page::Projects => match id {
                PROJECTS_HEADER | PICKER_CONTROL | PROJECT_TYPE_SELECT | PROJECT_TYPE_OPTION_0
                | PROJECT_TYPE_OPTION_1 | PROJECT_NAME_INPUT => true,
                PICKER_OPTION => self.picker_open,
                PICKER_VALUE_LABEL => self.picker_selection.is_some(),
                _ => false,
            },
            Page::Other => false,
        }
    }

    fn find_children(&self, parent: &str, by: &By<'_>) -> Vec<&'static str> {
        if parent != PROJECT_TYPE_SELECT {
            return Vec::new();
        }
        let texts = self.native_option_texts();
        let ids = [PROJECT_TYPE_OPTION_0, PROJECT_TYPE_OPTION_1];
        match by {
            By::Css("option") => ids.to_vec(),
            By::XPath(x) => texts
                .iter()
                .zip(ids.iter())
                .filter(|(text, _)| x.contains(**text))
                .map(|(_, id)| *id)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn text(&self, id: &str) -> String {
        match id {
            LOGIN_SUBMIT => String::from("Войти"),
            LOGIN_ERROR_BANNER => String::from("Неверный логин/пароль. Проверьте данные"),
            PROJECTS_HEADER => {
                if self.english {
                    String::from("Projects")
                } else {
                    String::from("Проекты")
                }
            }
            PICKER_OPTION => self.picker_option_text().to_string(),
            PICKER_VALUE_LABEL => self.picker_selection.clone().unwrap_or_default(),
            PROJECT_TYPE_OPTION_0 => self.native_option_texts()[0].to_string(),
            PROJECT_TYPE_OPTION_1 => self.native_option_texts()[1].to_string(),
            _ => String::new(),
        }
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        if name != "value" {
            return None;
        }
        match id {
            LOGIN_USERNAME => Some(self.username.clone()),
            LOGIN_PASSWORD => Some(self.password.clone()),
            PROJECT_NAME_INPUT => Some(self.project_name.clone()),
            _ => None,
        }
    }

    fn click(&mut self, id: &str) {
        match id {
            LOGIN_SUBMIT => {
                if self.username == self.valid_username && self.password == self.valid_password {
                    let url = self.projects_url.clone();
                    self.navigate(&url);
                } else {
                    self.login_error = true;
                }
            }
            PICKER_CONTROL => {
                self.picker_open = true;
            }
            PICKER_OPTION => {
                self.picker_selection = Some(self.picker_option_text().to_string());
                self.picker_open = false;
            }
            PROJECT_TYPE_OPTION_0 => {
                self.native_selected = Some(0);
            }
            PROJECT_TYPE_OPTION_1 => {
                self.native_selected = Some(1);
            }
            _ => {}
        }
    }

    fn send_keys(&mut self, id: &str, text: &str) -> WebDriverResult<()> {
        let target = match id {
            LOGIN_USERNAME => &mut self.username,
            LOGIN_PASSWORD => &mut self.password,
            PROJECT_NAME_INPUT => &mut self.project_name,
            _ => {
                return Err(WebDriverError::ElementNotInteractable(format!(
                    "element {} does not accept keyboard input",
                    id
                )))
            }
        };
        // Append, never clear. Real send-keys adds to existing content.
        target.push_str(text);
        Ok(())
    }

    fn is_selected(&self, id: &str) -> bool {
        match id {
            PROJECT_TYPE_OPTION_0 => self.native_selected == Some(0),
            PROJECT_TYPE_OPTION_1 => self.native_selected == Some(1),
            _ => false,
        }
    }
}

fn registry() -> &'static Mutex<HashMap<String, Arc<Mutex<FakeApp>>>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<Mutex<FakeApp>>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Register an application model under a fake server URL, so that
/// `GenericWebDriver::<FakeDriverSync>::new(url, ..)` connects to it. The
/// returned handle shares state with the driver.
pub fn install(server_url: &str, app: FakeApp) -> Arc<Mutex<FakeApp>> {
    let handle = Arc::new(Mutex::new(app));
    if let Ok(mut map) = registry().lock() {
        map.insert(server_url.to_string(), Arc::clone(&handle));
    }
    handle
}

/// Fake driver that executes commands against an in-memory [`FakeApp`].
#[derive(Debug)]
pub struct FakeDriverSync {
    app: Arc<Mutex<FakeApp>>,
}

impl FakeDriverSync {
    pub fn with_app(app: FakeApp) -> Self {
        FakeDriverSync {
            app: Arc::new(Mutex::new(app)),
        }
    }

    /// Shared handle to the application state, for inspection by tests.
    pub fn app(&self) -> Arc<Mutex<FakeApp>> {
        Arc::clone(&self.app)
    }
}

fn element_json(id: &str) -> Value {
    let mut obj = serde_json::Map::new();
    obj.insert(MAGIC_ELEMENTID.to_owned(), Value::String(id.to_owned()));
    Value::Object(obj)
}

impl WebDriverHttpClientSync for FakeDriverSync {
    fn create(params: HttpClientCreateParams) -> WebDriverResult<Self> {
        let app = registry()
            .lock()
            .ok()
            .and_then(|map| map.get(&params.server_url).cloned())
            .unwrap_or_else(|| Arc::new(Mutex::new(FakeApp::demo())));
        Ok(FakeDriverSync {
            app,
        })
    }

    fn execute(
        &self,
        _session_id: &SessionId,
        command: Command<'_>,
    ) -> WebDriverResult<serde_json::Value> {
        let mut app = self
            .app
            .lock()
            .map_err(|_| WebDriverError::FatalError(String::from("fake driver state poisoned")))?;

        let require = |app: &FakeApp, id: &str| -> WebDriverResult<()> {
            if app.element_exists(id) {
                Ok(())
            } else {
                Err(WebDriverError::StaleElementReference(format!(
                    "element {} is not attached to the current page",
                    id
                )))
            }
        };

        match command {
            Command::NewSession(_) => {
                app.ended = false;
                Ok(json!({ "value": { "sessionId": "fake-session", "capabilities": {} } }))
            }
            Command::DeleteSession => {
                app.ended = true;
                Ok(json!({ "value": null }))
            }
            Command::SetImplicitWaitTimeout(duration) => {
                app.implicit_wait_ms = duration.as_millis() as u64;
                Ok(json!({ "value": null }))
            }
            Command::NavigateTo(url) => {
                app.navigate(&url);
                Ok(json!({ "value": null }))
            }
            Command::GetCurrentUrl => Ok(json!({ "value": app.current_url })),
            Command::FindElement(by) => match app.resolve(&by) {
                Some(id) => Ok(json!({ "value": element_json(id) })),
                None => Err(no_such_element(&format!("Unable to locate element: {:?}", by))),
            },
            Command::FindElementFromElement(parent, by) => {
                require(&app, parent.as_str())?;
                match app.find_children(parent.as_str(), &by).first() {
                    Some(id) => Ok(json!({ "value": element_json(id) })),
                    None => Err(no_such_element(&format!("Unable to locate element: {:?}", by))),
                }
            }
            Command::FindElementsFromElement(parent, by) => {
                require(&app, parent.as_str())?;
                let children: Vec<Value> = app
                    .find_children(parent.as_str(), &by)
                    .into_iter()
                    .map(element_json)
                    .collect();
                Ok(json!({ "value": children }))
            }
            Command::ElementClick(id) => {
                require(&app, id.as_str())?;
                app.click(id.as_str());
                Ok(json!({ "value": null }))
            }
            Command::ElementSendKeys(id, text) => {
                require(&app, id.as_str())?;
                app.send_keys(id.as_str(), &text)?;
                Ok(json!({ "value": null }))
            }
            Command::GetElementText(id) => {
                require(&app, id.as_str())?;
                Ok(json!({ "value": app.text(id.as_str()) }))
            }
            Command::GetElementAttribute(id, name) => {
                require(&app, id.as_str())?;
                match app.attribute(id.as_str(), &name) {
                    Some(value) => Ok(json!({ "value": value })),
                    None => Ok(json!({ "value": null })),
                }
            }
            Command::IsElementSelected(id) => {
                require(&app, id.as_str())?;
                Ok(json!({ "value": app.is_selected(id.as_str()) }))
            }
            Command::IsElementEnabled(id) => {
                require(&app, id.as_str())?;
                Ok(json!({ "value": true }))
            }
            Command::IsElementDisplayed(id) => {
                require(&app, id.as_str())?;
                Ok(json!({ "value": true }))
            }
        }
    }
}
