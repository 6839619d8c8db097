use serde::Serialize;
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// Methods the API accepts without an auth token
pub const BOOTSTRAP_METHODS: [&str; 3] =
    ["apiinfo.version", "user.login", "user.checkAuthentication"];

/// Whether `method` must carry the session token
pub fn requires_auth(method: &str) -> bool {
    !BOOTSTRAP_METHODS.iter().any(|bootstrap| *bootstrap == method)
}

/// JSON-RPC request body sent to the API endpoint.
///
/// `auth` is always serialized; it is `null` for bootstrap methods and
/// whenever the session holds no token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Value,
    pub id: u64,
    pub auth: Option<String>,
}

impl RequestEnvelope {
    /// Assemble an envelope, attaching `token` only when the method requires it
    pub fn build(method: &str, params: Value, token: Option<String>, id: u64) -> Self {
        let auth = if requires_auth(method) { token } else { None };

        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.to_string(),
            params,
            id,
            auth,
        }
    }
}
