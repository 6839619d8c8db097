use thiserror::Error;

/// Errors returned by every public client operation
#[derive(Debug, Error)]
pub enum ZabbixError {
    /// No transport configured; `create_client` has not been called on this session
    #[error("client is not configured, call create_client first")]
    BadClient,

    /// The server answered with an HTTP status other than 200
    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),

    /// An authentication response did not have the expected success shape
    #[error("unauthorized")]
    Unauthorized,

    /// The server returned a JSON-RPC `error` object
    #[error("API error {code}: {message}")]
    Api {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    /// A JSON-RPC response carried neither `result` nor `error`
    #[error("response has no result")]
    MissingResult,

    /// Connection failure, timeout or undecodable body from the HTTP layer
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ZabbixError>;
