//! Dashboard page: greeting, name, live balance and a compact board.

use async_trait::async_trait;
use std::sync::Arc;

use super::{report_failure, PageController, RenderGuard};
use crate::domain::user::{rank_users, RankingOrder};
use crate::nav::NavigationBar;
use crate::source::UserSource;
use crate::view::{ids, slots, Row, SharedView, View};

const PAGE: &str = "dashboard";

pub struct DashboardController<V: View> {
    source: Arc<dyn UserSource>,
    view: SharedView<V>,
    nav: Arc<dyn NavigationBar>,
    ranking_order: RankingOrder,
    balance_guard: RenderGuard,
    board_guard: RenderGuard,
}

impl<V: View> DashboardController<V> {
    pub fn new(
        source: Arc<dyn UserSource>,
        view: SharedView<V>,
        nav: Arc<dyn NavigationBar>,
    ) -> Self {
        Self {
            source,
            view,
            nav,
            ranking_order: RankingOrder::Descending,
            balance_guard: RenderGuard::new(),
            board_guard: RenderGuard::new(),
        }
    }

    pub fn with_ranking_order(mut self, order: RankingOrder) -> Self {
        self.ranking_order = order;
        self
    }

    async fn refresh_balance(&self) {
        let ticket = self.balance_guard.ticket();
        let result = self.source.user().await;

        let mut view = self.view.lock().await;
        if !self.balance_guard.commit(ticket) {
            tracing::debug!(ticket, "Dropping stale balance response");
            return;
        }
        match result {
            Ok(user) => view.set_text(ids::BALANCE, &user.balance.to_string()),
            Err(failure) => report_failure(&mut *view, PAGE, "balance", &failure),
        }
    }

    async fn refresh_board(&self) {
        let ticket = self.board_guard.ticket();
        let result = self.source.everybody().await;

        let mut view = self.view.lock().await;
        if !self.board_guard.commit(ticket) {
            tracing::debug!(ticket, "Dropping stale leaderboard response");
            return;
        }
        match result {
            Ok(users) => {
                let ranked = rank_users(users, self.ranking_order);
                tracing::debug!(count = ranked.len(), "Rendering side leaderboard");
                view.clear(ids::SIDE_BOARD);
                for entry in ranked {
                    view.append_row(
                        ids::SIDE_BOARD,
                        Row::new().slot(slots::USER, entry.user.summary()),
                    );
                }
            }
            Err(failure) => report_failure(&mut *view, PAGE, "leaderboard", &failure),
        }
    }
}

#[async_trait]
impl<V: View + 'static> PageController for DashboardController<V> {
    fn name(&self) -> &'static str {
        PAGE
    }

    async fn init(&self) {
        self.nav.init();

        let result = self.source.user().await;
        let mut view = self.view.lock().await;
        match result {
            Ok(user) => {
                view.set_text(ids::GREETING, &format!("Willkommen zurück {}!", user.name));
                view.set_text(ids::USER_NAME, &user.name);
            }
            Err(failure) => report_failure(&mut *view, PAGE, "username", &failure),
        }
    }

    async fn tick(&self) {
        tracing::debug!("Running dashboard update");
        self.nav.update();
        tokio::join!(self.refresh_balance(), self.refresh_board());
    }
}
