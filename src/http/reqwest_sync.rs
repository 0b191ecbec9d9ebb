use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::common::command::{Command, RequestMethod};
use crate::common::types::SessionId;
use crate::error::{WebDriverError, WebDriverResult};
use crate::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};

fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Synchronous connection to the remote WebDriver server.
#[derive(Debug)]
pub struct ReqwestDriverSync {
    url: String,
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl WebDriverHttpClientSync for ReqwestDriverSync {
    fn create(params: HttpClientCreateParams) -> WebDriverResult<Self> {
        let url = params.server_url.trim_end_matches('/').to_owned();
        Ok(ReqwestDriverSync {
            url,
            client: reqwest::blocking::Client::builder()
                .default_headers(build_headers())
                .build()?,
            timeout: params.timeout.unwrap_or_else(|| Duration::from_secs(120)),
        })
    }

    /// Execute the specified command and return the response as
    /// serde_json::Value.
    fn execute(
        &self,
        session_id: &SessionId,
        command: Command<'_>,
    ) -> WebDriverResult<serde_json::Value> {
        let request_data = command.format_w3c(session_id);
        debug!("webdriver request: {:?} {}", request_data.method, request_data.url);

        let url = self.url.clone() + &request_data.url;
        let mut request = match request_data.method {
            RequestMethod::Get => self.client.get(&url),
            RequestMethod::Post => self.client.post(&url),
            RequestMethod::Delete => self.client.delete(&url),
        };
        request = request.timeout(self.timeout);

        if let Some(x) = request_data.body {
            request = request.json(&x);
        }

        let resp = request.send()?;

        match resp.status().as_u16() {
            200..=399 => Ok(resp.json()?),
            status => Err(WebDriverError::parse(status, resp.text()?)),
        }
    }
}
