//! # zabbix-rs
//!
//! An async Rust client for the Zabbix JSON-RPC API. A client owns a session
//! holding the HTTP transport, the auth token and the request id counter, and
//! can be shared freely between concurrent tasks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use serde_json::json;
//! use zabbix_rs::ZabbixClient;
//!
//! # async fn example() -> zabbix_rs::Result<()> {
//! let client = ZabbixClient::new();
//! client
//!     .create_client("https://zabbix.example.com", Duration::from_millis(5000))
//!     .await?;
//!
//! // Bootstrap methods work without a token
//! let version = client.api_version().await?;
//!
//! // Everything else needs a login first
//! client.login_with_credentials("Admin", "zabbix").await?;
//! let hosts = client
//!     .call("host.get", json!({ "output": ["hostid", "name"] }))
//!     .await?;
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Sessions
//!
//! `create_client` always resets the session: the token is dropped and request
//! ids restart at 1. The three bootstrap methods (`apiinfo.version`,
//! `user.login`, `user.checkAuthentication`) are always sent with
//! `"auth": null`; every other method carries the current token, or `null`
//! when nobody is logged in.
//!
//! Clones of a [`ZabbixClient`] share one [`Session`]. Build separate clients
//! to talk to several servers at once.
//!
//! ## Configuration
//!
//! The `zabbix` binary and [`Config`] read a `config.toml`:
//!
//! ```toml
//! [zabbix]
//! url = "https://zabbix.example.com"
//! timeout_ms = 5000
//! username = "Admin"
//! password = "zabbix"
//! ```
//!
//! or the `ZABBIX_URL`, `ZABBIX_TIMEOUT_MS`, `ZABBIX_USERNAME`,
//! `ZABBIX_PASSWORD` and `ZABBIX_SESSION_ID` environment variables.

pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod request;
pub mod session;
pub mod transport;

// Re-export commonly used types at the crate root
pub use client::{Deauthorized, ZabbixClient};
pub use config::Config;
pub use error::{Result, ZabbixError};
pub use request::{requires_auth, RequestEnvelope, BOOTSTRAP_METHODS};
pub use session::{AuthState, Session};
pub use transport::{TransportHandle, DEFAULT_TIMEOUT};
