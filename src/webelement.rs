use std::fmt;

use crate::common::command::{By, Command};
use crate::common::convert_json;
use crate::common::types::{ElementId, ElementRef};
use crate::error::WebDriverResult;
use crate::WebDriverSession;

/// Unwrap the raw JSON into a WebElement struct.
pub fn convert_element_sync<'a>(
    session: &'a WebDriverSession,
    value: &serde_json::Value,
) -> WebDriverResult<WebElement<'a>> {
    let elem_ref: ElementRef = serde_json::from_value(value.clone())?;
    Ok(WebElement::new(session, ElementId::from(elem_ref.id)))
}

/// Unwrap the raw JSON into a Vec of WebElement structs.
pub fn convert_elements_sync<'a>(
    session: &'a WebDriverSession,
    value: &serde_json::Value,
) -> WebDriverResult<Vec<WebElement<'a>>> {
    let values: Vec<ElementRef> = serde_json::from_value(value.clone())?;
    Ok(values.into_iter().map(|x| WebElement::new(session, ElementId::from(x.id))).collect())
}

/// One element on a page, borrowed against the session that found it.
///
/// These operations are thin and unsynchronized: they assume the caller has
/// already established that the element is in the required state. Explicit
/// waits are layered on top via
/// [`ElementWaitable`](crate::query::element_waiter::ElementWaitable).
#[derive(Debug, Clone)]
pub struct WebElement<'a> {
    pub element_id: ElementId,
    pub(crate) session: &'a WebDriverSession,
}

impl<'a> WebElement<'a> {
    /// Typically you would not call this directly; elements are constructed
    /// by the find_element*() methods.
    pub fn new(session: &'a WebDriverSession, element_id: ElementId) -> Self {
        WebElement {
            element_id,
            session,
        }
    }

    fn cmd(&self, command: Command<'_>) -> WebDriverResult<serde_json::Value> {
        self.session.execute(command)
    }

    /// Get the text contents of this element.
    pub fn text(&self) -> WebDriverResult<String> {
        let v = self.cmd(Command::GetElementText(self.element_id.clone()))?;
        convert_json(&v["value"])
    }

    /// Convenience method for getting the (optional) value attribute.
    pub fn value(&self) -> WebDriverResult<Option<String>> {
        self.get_attribute("value")
    }

    /// Click this element. Fails if the element is no longer attached or is
    /// not clickable.
    pub fn click(&self) -> WebDriverResult<()> {
        self.cmd(Command::ElementClick(self.element_id.clone()))?;
        Ok(())
    }

    /// Get the specified attribute, or None if the element lacks it.
    pub fn get_attribute(&self, name: &str) -> WebDriverResult<Option<String>> {
        let v = self.cmd(Command::GetElementAttribute(self.element_id.clone(), name.to_owned()))?;
        if !v["value"].is_string() {
            Ok(None)
        } else {
            convert_json(&v["value"])
        }
    }

    /// Return true if this element is currently selected, otherwise false.
    pub fn is_selected(&self) -> WebDriverResult<bool> {
        let v = self.cmd(Command::IsElementSelected(self.element_id.clone()))?;
        convert_json(&v["value"])
    }

    /// Return true if this element is currently enabled, otherwise false.
    pub fn is_enabled(&self) -> WebDriverResult<bool> {
        let v = self.cmd(Command::IsElementEnabled(self.element_id.clone()))?;
        convert_json(&v["value"])
    }

    /// Return true if this element is currently displayed, otherwise false.
    pub fn is_displayed(&self) -> WebDriverResult<bool> {
        let v = self.cmd(Command::IsElementDisplayed(self.element_id.clone()))?;
        convert_json(&v["value"])
    }

    /// Search for a child element using the specified locator.
    pub fn find_element(&self, by: By<'_>) -> WebDriverResult<WebElement<'a>> {
        let v = self
            .cmd(Command::FindElementFromElement(self.element_id.clone(), by))?;
        convert_element_sync(self.session, &v["value"])
    }

    /// Search for all child elements matching the specified locator.
    pub fn find_elements(&self, by: By<'_>) -> WebDriverResult<Vec<WebElement<'a>>> {
        let v = self
            .cmd(Command::FindElementsFromElement(self.element_id.clone(), by))?;
        convert_elements_sync(self.session, &v["value"])
    }

    /// Send keyboard input to this element. Input is appended to any
    /// existing content; it is not cleared first.
    pub fn send_keys(&self, text: &str) -> WebDriverResult<()> {
        self.cmd(Command::ElementSendKeys(self.element_id.clone(), text.to_owned()))?;
        Ok(())
    }
}

impl fmt::Display for WebElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"(session="{}", element="{}")"#, self.session.session_id(), self.element_id)
    }
}
