//! Page controllers.
//!
//! A controller owns one page: it renders once on start (`init`) and then
//! refreshes its dynamic regions every time the poller calls `tick`.
//! Controllers never let a `DomainFailure` escape; they notify the view and
//! carry on with the next tick.

pub mod balance;
pub mod dashboard;
pub mod guard;
pub mod leaderboard;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::error::DomainFailure;
use crate::nav::NavigationBar;
use crate::source::UserSource;
use crate::view::{SharedView, View};

pub use balance::BalanceController;
pub use dashboard::DashboardController;
pub use guard::RenderGuard;
pub use leaderboard::LeaderboardController;

#[async_trait]
pub trait PageController: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// One-time render on page start.
    async fn init(&self);

    /// Refresh the dynamic regions.
    async fn tick(&self);
}

/// The pages the crate knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Leaderboard,
    Balance,
}

impl Page {
    pub fn controller<V: View + 'static>(
        self,
        source: Arc<dyn UserSource>,
        view: SharedView<V>,
        nav: Arc<dyn NavigationBar>,
        config: &DashboardConfig,
    ) -> Arc<dyn PageController> {
        match self {
            Page::Dashboard => Arc::new(
                DashboardController::new(source, view, nav).with_ranking_order(config.ranking_order),
            ),
            Page::Leaderboard => Arc::new(LeaderboardController::new(source, view, nav)),
            Page::Balance => Arc::new(BalanceController::new(source, view, nav)),
        }
    }
}

/// Surface a failure the way every page does.
///
/// Transport and protocol failures become a notification; decode failures
/// only reach the logs.
pub(crate) fn report_failure<V: View>(
    view: &mut V,
    page: &'static str,
    what: &str,
    failure: &DomainFailure,
) {
    if failure.is_user_visible() {
        tracing::warn!(page, kind = ?failure.kind, "{}", failure);
        view.notify(&format!(
            "Failed to load {} from server: {}",
            what, failure.user_message
        ));
    } else {
        tracing::error!(page, "{}", failure);
    }
}
