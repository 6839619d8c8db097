use crate::error::{Result, ZabbixError};
use crate::request::RequestEnvelope;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const API_ENDPOINT: &str = "/api_jsonrpc.php";
pub const USER_AGENT: &str = concat!("zabbix-rs/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Extra time connecting gets on top of the read timeout
const CONNECT_SLACK: Duration = Duration::from_millis(1000);

/// HTTP client bound to one API base URL and request timeout
#[derive(Debug, Clone)]
pub struct TransportHandle {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl TransportHandle {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json-rpc"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .connect_timeout(timeout + CONNECT_SLACK)
            .read_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.timeout + CONNECT_SLACK
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, API_ENDPOINT)
    }

    /// POST an envelope and return the decoded body.
    ///
    /// Only a 200 status is accepted; the body of any other status is ignored.
    /// Reads time out after `timeout`; the whole exchange is capped at the
    /// connect timeout.
    pub async fn post(&self, envelope: &RequestEnvelope) -> Result<Value> {
        debug!("API request: id={} method={}", envelope.id, envelope.method);

        let body = serde_json::to_vec(envelope)?;
        let response = self
            .client
            .post(self.endpoint())
            .timeout(self.connect_timeout())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("API response status: {} (id={})", status, envelope.id);

        if status != StatusCode::OK {
            warn!("{} returned status {}", envelope.method, status);
            return Err(ZabbixError::BadStatus(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
