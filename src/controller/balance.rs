//! Balance-only page: name once, balance on every tick.

use async_trait::async_trait;
use std::sync::Arc;

use super::{report_failure, PageController, RenderGuard};
use crate::nav::NavigationBar;
use crate::source::UserSource;
use crate::view::{ids, SharedView, View};

const PAGE: &str = "balance";

pub struct BalanceController<V: View> {
    source: Arc<dyn UserSource>,
    view: SharedView<V>,
    nav: Arc<dyn NavigationBar>,
    guard: RenderGuard,
}

impl<V: View> BalanceController<V> {
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

#[async_trait]
impl<V: View + 'static> PageController for BalanceController<V> {
    fn name(&self) -> &'static str {
        PAGE
    }

    async fn init(&self) {
        self.nav.init();
        let ticket = self.guard.ticket();
        let result = self.source.user().await;

        let mut view = self.view.lock().await;
        match result {
            Ok(user) => {
                view.set_text(ids::DISPLAY_NAME, &user.name);
                if self.guard.commit(ticket) {
                    view.set_text(ids::DISPLAY_BALANCE, &user.balance.to_string());
                }
            }
            Err(failure) => report_failure(&mut *view, PAGE, "user", &failure),
        }
    }

    async fn tick(&self) {
        self.nav.update();
        let ticket = self.guard.ticket();
        let result = self.source.user().await;

        let mut view = self.view.lock().await;
        if !self.guard.commit(ticket) {
            tracing::debug!(ticket, "Dropping stale balance response");
            return;
        }
        match result {
            Ok(user) => view.set_text(ids::DISPLAY_BALANCE, &user.balance.to_string()),
            Err(failure) => report_failure(&mut *view, PAGE, "balance", &failure),
        }
    }
}
