use crate::error::{Result, ZabbixError};
use crate::transport::TransportHandle;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

/// Authentication state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unconfigured,
    Unauthenticated,
    Authenticated,
}

#[derive(Debug)]
struct SessionState {
    transport: Option<TransportHandle>,
    token: Option<String>,
    next_id: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            transport: None,
            token: None,
            next_id: 1,
        }
    }
}

/// Everything one request needs, read under a single lock acquisition
#[derive(Debug, Clone)]
pub struct Checkout {
    pub transport: TransportHandle,
    pub token: Option<String>,
    pub id: u64,
}

/// Shared connection state: transport handle, auth token and request counter.
///
/// Clones share the same state. Separate `Session::new()` values are fully
/// independent, so several sessions can live in one process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconfigure the transport and reset token and request id
    pub async fn create(&self, base_url: impl Into<String>, timeout: Duration) -> Result<()> {
        let transport = TransportHandle::new(base_url, timeout)?;
        info!("Configured client for {}", transport.endpoint());

        let mut state = self.state.lock().await;
        *state = SessionState {
            transport: Some(transport),
            ..SessionState::default()
        };
        Ok(())
    }

    pub async fn state(&self) -> AuthState {
        let state = self.state.lock().await;
        match (&state.transport, &state.token) {
            (None, _) => AuthState::Unconfigured,
            (Some(_), None) => AuthState::Unauthenticated,
            (Some(_), Some(_)) => AuthState::Authenticated,
        }
    }

    pub async fn transport(&self) -> Option<TransportHandle> {
        self.state.lock().await.transport.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.state.lock().await.token.clone()
    }

    pub async fn set_token(&self, token: Option<String>) {
        self.state.lock().await.token = token;
    }

    /// Return the current request id and advance the counter
    pub async fn next_id(&self) -> u64 {
        let mut state = self.state.lock().await;
        let id = state.next_id;
        state.next_id += 1;
        id
    }

    /// Snapshot transport and token and take a fresh request id.
    ///
    /// Fails with `BadClient` before `create`; no id is consumed in that case.
    pub async fn checkout(&self) -> Result<Checkout> {
        let mut state = self.state.lock().await;
        let transport = state.transport.clone().ok_or(ZabbixError::BadClient)?;
        let id = state.next_id;
        state.next_id += 1;

        Ok(Checkout {
            transport,
            token: state.token.clone(),
            id,
        })
    }
}
