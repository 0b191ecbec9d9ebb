use serde_json::{json, Value};
use std::time::Duration;

use crate::common::types::{ElementId, SessionId};

/// Locator for a single element: a strategy plus a selector string.
///
/// A locator is meaningful only relative to a specific page's loaded DOM;
/// it carries no session reference and can be declared as a `const` on the
/// page object that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum By<'a> {
    Id(&'a str),
    Name(&'a str),
    Css(&'a str),
    XPath(&'a str),
}

impl By<'_> {
    /// Convert this locator into the (strategy, selector) pair used by the
    /// W3C Find Element command. Id and Name lookups are expressed as CSS
    /// attribute selectors, as the W3C protocol has no native strategy for
    /// either.
    pub fn get_w3c_selector(&self) -> (String, String) {
        match self {
            By::Id(id) => (String::from("css selector"), format!(r#"[id="{}"]"#, id)),
            By::Name(name) => (String::from("css selector"), format!(r#"[name="{}"]"#, name)),
            By::Css(css) => (String::from("css selector"), String::from(*css)),
            By::XPath(xpath) => (String::from("xpath"), String::from(*xpath)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Delete,
}

/// One HTTP request to the WebDriver server.
#[derive(Debug)]
pub struct RequestData {
    pub method: RequestMethod,
    pub url: String,
    pub body: Option<Value>,
}

impl RequestData {
    pub fn new(method: RequestMethod, url: String) -> Self {
        RequestData {
            method,
            url,
            body: None,
        }
    }

    pub fn add_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The subset of W3C WebDriver commands this crate needs in order to drive
/// the login / projects workflow.
#[derive(Debug)]
pub enum Command<'a> {
    NewSession(Value),
    DeleteSession,
    SetImplicitWaitTimeout(Duration),
    NavigateTo(String),
    GetCurrentUrl,
    FindElement(By<'a>),
    FindElementFromElement(ElementId, By<'a>),
    FindElementsFromElement(ElementId, By<'a>),
    ElementClick(ElementId),
    ElementSendKeys(ElementId, String),
    GetElementText(ElementId),
    GetElementAttribute(ElementId, String),
    IsElementSelected(ElementId),
    IsElementEnabled(ElementId),
    IsElementDisplayed(ElementId),
}

impl Command<'_> {
    /// Map this command onto its W3C endpoint and body.
    pub fn format_w3c(&self, session_id: &SessionId) -> RequestData {
        match self {
            Command::NewSession(caps) => {
                RequestData::new(RequestMethod::Post, String::from("/session")).add_body(json!({
                    "capabilities": {
                        "alwaysMatch": caps,
                    },
                }))
            }
            Command::DeleteSession => {
                RequestData::new(RequestMethod::Delete, format!("/session/{}", session_id))
            }
            Command::SetImplicitWaitTimeout(duration) => {
                RequestData::new(RequestMethod::Post, format!("/session/{}/timeouts", session_id))
                    .add_body(json!({ "implicit": duration.as_millis() as u64 }))
            }
            Command::NavigateTo(url) => {
                RequestData::new(RequestMethod::Post, format!("/session/{}/url", session_id))
                    .add_body(json!({ "url": url }))
            }
            Command::GetCurrentUrl => {
                RequestData::new(RequestMethod::Get, format!("/session/{}/url", session_id))
            }
            Command::FindElement(by) => {
                let (selector, value) = by.get_w3c_selector();
                RequestData::new(RequestMethod::Post, format!("/session/{}/element", session_id))
                    .add_body(json!({ "using": selector, "value": value }))
            }
            Command::FindElementFromElement(element_id, by) => {
                let (selector, value) = by.get_w3c_selector();
                RequestData::new(
                    RequestMethod::Post,
                    format!("/session/{}/element/{}/element", session_id, element_id),
                )
                .add_body(json!({ "using": selector, "value": value }))
            }
            Command::FindElementsFromElement(element_id, by) => {
                let (selector, value) = by.get_w3c_selector();
                RequestData::new(
                    RequestMethod::Post,
                    format!("/session/{}/element/{}/elements", session_id, element_id),
                )
                .add_body(json!({ "using": selector, "value": value }))
            }
            Command::ElementClick(element_id) => RequestData::new(
                RequestMethod::Post,
                format!("/session/{}/element/{}/click", session_id, element_id),
            )
            .add_body(json!({})),
            Command::ElementSendKeys(element_id, text) => RequestData::new(
                RequestMethod::Post,
                format!("/session/{}/element/{}/value", session_id, element_id),
            )
            .add_body(json!({ "text": text })),
            Command::GetElementText(element_id) => RequestData::new(
                RequestMethod::Get,
                format!("/session/{}/element/{}/text", session_id, element_id),
            ),
            Command::GetElementAttribute(element_id, name) => RequestData::new(
                RequestMethod::Get,
                format!("/session/{}/element/{}/attribute/{}", session_id, element_id, name),
            ),
            Command::IsElementSelected(element_id) => RequestData::new(
                RequestMethod::Get,
                format!("/session/{}/element/{}/selected", session_id, element_id),
            ),
            Command::IsElementEnabled(element_id) => RequestData::new(
                RequestMethod::Get,
                format!("/session/{}/element/{}/enabled", session_id, element_id),
            ),
            Command::IsElementDisplayed(element_id) => RequestData::new(
                RequestMethod::Get,
                format!("/session/{}/element/{}/displayed", session_id, element_id),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_maps_to_w3c_selectors() {
        assert_eq!(
            By::Id("login").get_w3c_selector(),
            (String::from("css selector"), String::from(r#"[id="login"]"#))
        );
        assert_eq!(
            By::Name("username").get_w3c_selector(),
            (String::from("css selector"), String::from(r#"[name="username"]"#))
        );
        assert_eq!(
            By::Css("header h1").get_w3c_selector(),
            (String::from("css selector"), String::from("header h1"))
        );
        assert_eq!(
            By::XPath("//button").get_w3c_selector(),
            (String::from("xpath"), String::from("//button"))
        );
    }

    #[test]
    fn navigate_formats_post_with_url_body() {
        let session_id = SessionId::from("abc123");
        let req =
            Command::NavigateTo(String::from("https://app.local/login")).format_w3c(&session_id);
        assert_eq!(req.method, RequestMethod::Post);
        assert_eq!(req.url, "/session/abc123/url");
        assert_eq!(req.body, Some(json!({ "url": "https://app.local/login" })));
    }

    #[test]
    fn find_element_carries_selector_body() {
        let session_id = SessionId::from("abc123");
        let req = Command::FindElement(By::Name("username")).format_w3c(&session_id);
        assert_eq!(req.url, "/session/abc123/element");
        assert_eq!(
            req.body,
            Some(json!({ "using": "css selector", "value": r#"[name="username"]"# }))
        );
    }

    #[test]
    fn element_commands_embed_both_ids() {
        let session_id = SessionId::from("s1");
        let element_id = ElementId::from("e9");
        let req = Command::ElementClick(element_id).format_w3c(&session_id);
        assert_eq!(req.method, RequestMethod::Post);
        assert_eq!(req.url, "/session/s1/element/e9/click");
    }

    #[test]
    fn implicit_wait_is_sent_in_milliseconds() {
        let session_id = SessionId::from("s1");
        let req =
            Command::SetImplicitWaitTimeout(Duration::from_secs(3)).format_w3c(&session_id);
        assert_eq!(req.url, "/session/s1/timeouts");
        assert_eq!(req.body, Some(json!({ "implicit": 3000 })));
    }
}
