//! Leaderboard page: full ranking, richest first.

use async_trait::async_trait;
use std::sync::Arc;

use super::{report_failure, PageController, RenderGuard};
use crate::domain::user::{rank_users, RankedUser, RankingOrder};
use crate::nav::NavigationBar;
use crate::source::UserSource;
use crate::view::{ids, slots, Row, SharedView, View};

const PAGE: &str = "leaderboard";

pub struct LeaderboardController<V: View> {
    source: Arc<dyn UserSource>,
    view: SharedView<V>,
    nav: Arc<dyn NavigationBar>,
    guard: RenderGuard,
}

impl<V: View> LeaderboardController<V> {
    pub fn new(
        source: Arc<dyn UserSource>,
        view: SharedView<V>,
        nav: Arc<dyn NavigationBar>,
    ) -> Self {
        Self {
            source,
            view,
            nav,
            guard: RenderGuard::new(),
        }
    }
}

/// Template row for one ranked user.
pub fn ranking_row(entry: &RankedUser) -> Row {
    Row::new()
        .slot(slots::ID, entry.position.to_string())
        .slot(slots::USERNAME, entry.user.name.clone())
        .slot(slots::VALUE, entry.user.formatted_balance())
}

#[async_trait]
impl<V: View + 'static> PageController for LeaderboardController<V> {
    fn name(&self) -> &'static str {
        PAGE
    }

    async fn init(&self) {
        self.nav.init();
    }

    async fn tick(&self) {
        self.nav.update();

        let ticket = self.guard.ticket();
        let result = self.source.everybody().await;

        let mut view = self.view.lock().await;
        if !self.guard.commit(ticket) {
            tracing::debug!(ticket, "Dropping stale ranking response");
            return;
        }
        match result {
            Ok(users) => {
                let ranked = rank_users(users, RankingOrder::Descending);
                view.clear(ids::RANKING_LIST);
                for entry in &ranked {
                    view.append_row(ids::RANKING_LIST, ranking_row(entry));
                }
            }
            Err(failure) => report_failure(&mut *view, PAGE, "leaderboard", &failure),
        }
    }
}
