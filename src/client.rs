//! High-level client: `BoardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::config::DashboardConfig;
use crate::domain::user::client::Users;
use crate::domain::user::User;
use crate::error::{BoardError, DomainFailure};
use crate::http::BoardHttp;
use crate::source::UserSource;

use async_trait::async_trait;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for talking to the board API.
#[derive(Clone)]
pub struct BoardClient {
    pub(crate) http: BoardHttp,
}

impl BoardClient {
    pub fn builder() -> BoardClientBuilder {
        BoardClientBuilder::default()
    }

    /// Build a client from a loaded configuration.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, BoardError> {
        Self::builder()
            .base_url(&config.base_url)
            .request_timeout(config.request_timeout())
            .build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl UserSource for BoardClient {
    async fn user(&self) -> Result<User, DomainFailure> {
        self.users().get().await
    }

    async fn everybody(&self) -> Result<Vec<User>, DomainFailure> {
        self.users().everybody().await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BoardClientBuilder {
    base_url: String,
    request_timeout: Duration,
}

impl Default for BoardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            request_timeout: crate::network::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl BoardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<BoardClient, BoardError> {
        if self.base_url.trim().is_empty() {
            return Err(BoardError::Config("base_url must not be empty".into()));
        }
        Ok(BoardClient {
            http: BoardHttp::new(&self.base_url, self.request_timeout)?,
        })
    }
}
