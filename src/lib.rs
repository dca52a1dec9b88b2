//! # Balance Board
//!
//! Client for the board API: fetches the signed-in user and the full user
//! list, renders them into page views, and keeps those views fresh.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Domain types, wire types, conversions, errors, config
//! 2. **HTTP**: `BoardHttp::perform_get`, folding every result into a `RequestOutcome`
//! 3. **Client**: `BoardClient` with the user accessors
//! 4. **Pages**: Views, navigation chrome, page controllers
//! 5. **Polling**: Cancellable timer loop driving a controller
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use balance_board::prelude::*;
//!
//! let client = BoardClient::builder()
//!     .base_url("http://localhost:3333")
//!     .build()?;
//!
//! let me = client.users().get().await?;
//! let everybody = client.users().everybody().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network constants.
pub mod network;

/// File + environment configuration.
pub mod config;

/// Tracing subscriber setup.
pub mod logging;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request wrapper and outcome types.
pub mod http;

// ── Layer 3: Client ──────────────────────────────────────────────────────────

/// `BoardClient`: the primary entry point.
pub mod client;

/// The accessor trait controllers depend on.
pub mod source;

// ── Layer 4: Pages ───────────────────────────────────────────────────────────

/// Render targets.
pub mod view;

/// Navigation bar adapter.
pub mod nav;

/// Page controllers.
pub mod controller;

// ── Layer 5: Polling ─────────────────────────────────────────────────────────

/// Polling loop and its handle.
pub mod poll;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain
    pub use crate::domain::user::{rank_users, RankedUser, RankingOrder, User};

    // Errors
    pub use crate::error::{
        BoardError, DomainFailure, DomainFailureKind, FailureKind, RequestFailure,
    };

    // Config
    pub use crate::config::{DashboardConfig, LoggingConfig};
    pub use crate::network::DEFAULT_API_URL;

    // HTTP + client
    pub use crate::client::{BoardClient, BoardClientBuilder, UsersClient};
    pub use crate::http::{BoardHttp, RequestOutcome, ResponsePayload};
    pub use crate::source::UserSource;

    // Pages
    pub use crate::controller::{
        BalanceController, DashboardController, LeaderboardController, Page, PageController,
        RenderGuard,
    };
    pub use crate::nav::{NavigationBar, NoopNavigationBar};
    pub use crate::view::{shared, MemoryView, Row, SharedView, TerminalView, View};

    // Polling
    pub use crate::poll::PollHandle;
}
