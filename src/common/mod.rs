pub mod command;
pub mod config;
pub mod types;

use serde::de::DeserializeOwned;

use crate::error::WebDriverResult;

/// Deserialize a JSON fragment from a WebDriver response.
pub fn convert_json<T>(value: &serde_json::Value) -> WebDriverResult<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(value.clone())?)
}
