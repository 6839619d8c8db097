use crate::config::ZabbixConfig;
use crate::dto::rpc::{CheckAuthenticationRequest, JsonRpcResponse, LoginRequest};
use crate::error::{Result, ZabbixError};
use crate::request::RequestEnvelope;
use crate::session::Session;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, warn};

/// Confirmation that the server invalidated the session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deauthorized;

/// Client for the Zabbix JSON-RPC API
#[derive(Debug, Clone, Default)]
pub struct ZabbixClient {
    session: Session,
}

impl ZabbixClient {
    /// Create an unconfigured client with its own session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client on top of an existing (possibly shared) session
    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    /// Create a client and configure it from `config`
    pub async fn from_config(config: &ZabbixConfig) -> Result<Self> {
        let client = Self::new();
        client.create_client(&config.url, config.timeout()).await?;
        Ok(client)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn token(&self) -> Option<String> {
        self.session.token().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.token().await.is_some()
    }

    /// Point the session at `url`, dropping any token and restarting request ids
    pub async fn create_client(&self, url: &str, timeout: Duration) -> Result<()> {
        self.session.create(url, timeout).await
    }

    /// Call a remote method and return the decoded response body unmodified
    pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let checkout = self.session.checkout().await?;
        let envelope = RequestEnvelope::build(method, params, checkout.token, checkout.id);

        checkout.transport.post(&envelope).await
    }

    /// Call a remote method and decode its `result` field as `T`
    pub async fn call_result<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let body = self.call(method, params).await?;
        let response: JsonRpcResponse<T> = serde_json::from_value(body)?;

        match (response.result, response.error) {
            (_, Some(error)) => Err(ZabbixError::Api {
                code: error.code,
                message: error.message,
                data: error.data,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ZabbixError::MissingResult),
        }
    }

    /// Version of the remote API
    pub async fn api_version(&self) -> Result<String> {
        self.call_result("apiinfo.version", json!({})).await
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Log in with a username and password, storing the returned token
    pub async fn login_with_credentials(&self, username: &str, password: &str) -> Result<String> {
        let params = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        let body = self.call("user.login", params).await?;

        match body.get("result").and_then(Value::as_str) {
            Some(token) => {
                self.session.set_token(Some(token.to_string())).await;
                info!("Logged in as {}", username);
                Ok(token.to_string())
            }
            None => {
                warn!("user.login rejected for {}", username);
                Err(ZabbixError::Unauthorized)
            }
        }
    }

    /// Resume an existing session by id, storing the server's canonical session id
    pub async fn login_with_token(&self, token: &str) -> Result<String> {
        let params = serde_json::to_value(CheckAuthenticationRequest {
            sessionid: token.to_string(),
        })?;
        let body = self.call("user.checkAuthentication", params).await?;

        match body.pointer("/result/sessionid").and_then(Value::as_str) {
            Some(session_id) => {
                self.session.set_token(Some(session_id.to_string())).await;
                info!("Session resumed");
                Ok(session_id.to_string())
            }
            None => {
                warn!("user.checkAuthentication rejected the session");
                Err(ZabbixError::Unauthorized)
            }
        }
    }

    /// Log in with whatever `config` provides: a session id first, then credentials.
    ///
    /// Returns `Ok(None)` when no authentication settings are present.
    pub async fn login_from_config(&self, config: &ZabbixConfig) -> Result<Option<String>> {
        if let Some(token) = &config.session_id {
            return self.login_with_token(token).await.map(Some);
        }

        match (&config.username, &config.password) {
            (Some(username), Some(password)) => {
                self.login_with_credentials(username, password).await.map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Invalidate the current token.
    ///
    /// Succeeds only when the server answers with a literal `true` result.
    pub async fn logout(&self) -> Result<Deauthorized> {
        let body = self.call("user.logout", json!([])).await?;

        if body.get("result") == Some(&Value::Bool(true)) {
            self.session.set_token(None).await;
            info!("Logged out");
            Ok(Deauthorized)
        } else {
            warn!("user.logout did not confirm");
            Err(ZabbixError::Unauthorized)
        }
    }
}
