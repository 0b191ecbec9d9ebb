// This wrapper follows the Select class from the python selenium library at:
// https://github.com/SeleniumHQ/selenium/blob/trunk/py/selenium/webdriver/support/select.py
//
// Copyright 2011-2020 Software Freedom Conservancy
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::common::command::By;
use crate::error::{no_such_element, WebDriverResult};
use crate::webelement::WebElement;

/// Set the selection state of the specified element.
fn set_selected(element: &WebElement<'_>, select: bool) -> WebDriverResult<()> {
    if element.is_selected()? != select {
        element.click()?;
    }
    Ok(())
}

/// Escape the specified string for use in an XPath selector.
pub fn escape_string(value: &str) -> String {
    let contains_single = value.contains('\'');
    let contains_double = value.contains('\"');
    if contains_single && contains_double {
        let mut result = vec![String::from("concat(")];
        for substring in value.split('\"') {
            result.push(format!("\"{}\"", substring));
            result.push(String::from(", '\"', "));
        }
        result.pop();
        if value.ends_with('\"') {
            result.push(String::from(", '\"'"));
        }
        return result.join("") + ")";
    }

    if contains_double {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value)
    }
}

/// Convenience wrapper for `<select>` elements.
pub struct SelectElement<'a> {
    element: WebElement<'a>,
    multiple: bool,
}

impl<'a> SelectElement<'a> {
    /// Instantiate a new SelectElement struct. The specified element must be
    /// a `<select>` element.
    pub fn new(element: &WebElement<'a>) -> WebDriverResult<SelectElement<'a>> {
        let multiple = element.get_attribute("multiple")?.filter(|x| x != "false").is_some();
        let element = element.clone();
        Ok(SelectElement {
            element,
            multiple,
        })
    }

    /// Return a vec of all options belonging to this select tag.
    pub fn options(&self) -> WebDriverResult<Vec<WebElement<'a>>> {
        self.element.find_elements(By::Css("option"))
    }

    /// Return the first selected option in this select tag.
    pub fn first_selected_option(&self) -> WebDriverResult<WebElement<'a>> {
        for option in self.options()? {
            if option.is_selected()? {
                return Ok(option);
            }
        }
        Err(no_such_element("No options are selected"))
    }

    /// Select the option whose visible text matches the specified text
    /// exactly (after whitespace normalization). That is, when given "Bar"
    /// this would select an option like:
    ///
    /// `<option value="foo">Bar</option>`
    ///
    /// Fails with NoSuchElement if no option's visible text matches.
    pub fn select_by_visible_text(&self, text: &str) -> WebDriverResult<()> {
        let xpath = format!(".//option[normalize-space(.) = {}]", escape_string(text));
        let options = self.element.find_elements(By::XPath(&xpath))?;
        if options.is_empty() {
            return Err(no_such_element(&format!(
                "Could not locate option with visible text: {}",
                text
            )));
        }

        for option in &options {
            set_selected(option, true)?;
            if !self.multiple {
                break;
            }
        }
        Ok(())
    }
}
