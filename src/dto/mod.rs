pub mod rpc;

pub use rpc::{ApiError, CheckAuthenticationRequest, JsonRpcResponse, LoginRequest};
