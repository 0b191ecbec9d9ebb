use std::env;

use crate::error::{HarnessError, HarnessResult};

/// Harness configuration, loaded once at process start and immutable for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address of the WebDriver server, e.g. a running chromedriver.
    pub webdriver_url: String,
    pub login_url: String,
    pub projects_url: String,
    pub valid_username: String,
    pub valid_password: String,
    pub invalid_username: String,
    pub invalid_password: String,
    /// Run the browser without a graphical interface.
    pub headless: bool,
}

fn require(name: &'static str) -> HarnessResult<String> {
    env::var(name).map_err(|_| HarnessError::Config(format!("missing environment variable {}", name)))
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

impl Config {
    /// Load the configuration from the environment. A missing value fails
    /// startup; nothing here is re-read later.
    pub fn from_env() -> HarnessResult<Self> {
        Ok(Config {
            webdriver_url: env::var("WEBDRIVER_URL")
                .unwrap_or_else(|_| String::from("http://localhost:4444")),
            login_url: require("LOGIN_URL")?,
            projects_url: require("PROJECTS_URL")?,
            valid_username: require("VALID_USERNAME")?,
            valid_password: require("VALID_PASSWORD")?,
            invalid_username: require("INVALID_USERNAME")?,
            invalid_password: require("INVALID_PASSWORD")?,
            headless: env::var("HEADLESS").map(|v| parse_bool(&v)).unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_flag_accepts_true_only() {
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("1"));
        assert!(!parse_bool(""));
    }
}
