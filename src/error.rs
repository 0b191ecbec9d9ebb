use serde::Deserialize;
use thiserror::Error;

pub type WebDriverResult<T> = Result<T, WebDriverError>;

/// Errors surfaced by the WebDriver layer.
///
/// Unrecognized server error codes are preserved verbatim in
/// `UnknownResponse` rather than being coerced into a known variant, since
/// they may indicate a problem in the WebDriver server itself.
#[derive(Debug, Error)]
pub enum WebDriverError {
    #[error("no such element: {0}")]
    NoSuchElement(String),
    #[error("element not interactable: {0}")]
    ElementNotInteractable(String),
    #[error("stale element reference: {0}")]
    StaleElementReference(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("session not created: {0}")]
    SessionNotCreated(String),
    #[error("webdriver returned status {status}: {error}: {message}")]
    UnknownResponse {
        status: u16,
        error: String,
        message: String,
    },
    #[error("fatal error: {0}")]
    FatalError(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct W3cErrorValue {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct W3cErrorBody {
    value: W3cErrorValue,
}

impl WebDriverError {
    /// Parse a W3C error response body into the matching variant.
    pub fn parse(status: u16, body: String) -> Self {
        let parsed: W3cErrorBody = match serde_json::from_str(&body) {
            Ok(x) => x,
            Err(_) => {
                return WebDriverError::UnknownResponse {
                    status,
                    error: String::from("unparseable error body"),
                    message: body,
                }
            }
        };

        let W3cErrorValue {
            error,
            message,
        } = parsed.value;
        match error.as_str() {
            "no such element" => WebDriverError::NoSuchElement(message),
            "element not interactable" => WebDriverError::ElementNotInteractable(message),
            "stale element reference" => WebDriverError::StaleElementReference(message),
            "session not created" => WebDriverError::SessionNotCreated(message),
            "timeout" | "script timeout" => WebDriverError::Timeout(message),
            _ => WebDriverError::UnknownResponse {
                status,
                error,
                message,
            },
        }
    }
}

/// Convenience constructor used by element lookups and the select wrapper.
pub fn no_such_element(message: &str) -> WebDriverError {
    WebDriverError::NoSuchElement(message.to_string())
}

pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors at the test-harness layer. Exactly one variant (`Assertion`)
/// classifies as a test failure; everything else indicates the environment
/// or the system under test was not in the expected state and classifies
/// as a test error.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("assertion failed: {0}")]
    Assertion(String),
    #[error("page not available, status {status}")]
    Availability { status: u16 },
    #[error("page unreachable: {0}")]
    Unreachable(reqwest::Error),
    #[error("configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Driver(#[from] WebDriverError),
}

/// Assert a condition, producing an `Assertion` failure with the given
/// message when it does not hold.
pub fn check<S>(condition: bool, message: S) -> HarnessResult<()>
where
    S: Into<String>,
{
    if condition {
        Ok(())
    } else {
        Err(HarnessError::Assertion(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_known_error_codes() {
        let body = r#"{"value":{"error":"no such element","message":"nope"}}"#;
        match WebDriverError::parse(404, body.to_string()) {
            WebDriverError::NoSuchElement(msg) => assert_eq!(msg, "nope"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn parse_keeps_unknown_codes_verbatim() {
        let body = r#"{"value":{"error":"quantum flux","message":"entangled"}}"#;
        match WebDriverError::parse(500, body.to_string()) {
            WebDriverError::UnknownResponse {
                status,
                error,
                message,
            } => {
                assert_eq!(status, 500);
                assert_eq!(error, "quantum flux");
                assert_eq!(message, "entangled");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn parse_tolerates_garbage_bodies() {
        match WebDriverError::parse(502, String::from("<html>bad gateway</html>")) {
            WebDriverError::UnknownResponse {
                status,
                message,
                ..
            } => {
                assert_eq!(status, 502);
                assert!(message.contains("bad gateway"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn check_separates_failure_from_success() {
        assert!(check(true, "never seen").is_ok());
        match check(1 + 1 == 3, "math broke") {
            Err(HarnessError::Assertion(msg)) => assert_eq!(msg, "math broke"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
