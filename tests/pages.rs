//! End-to-end page tests: client → controller → view, plus polling behaviour.

mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use balance_board::poll;
use balance_board::prelude::*;
use balance_board::view::{ids, slots};
use rust_decimal::Decimal;
use support::{refused_base_url, Route, StubServer};

fn client_for(base_url: &str) -> Arc<BoardClient> {
    Arc::new(BoardClient::builder().base_url(base_url).build().unwrap())
}

#[tokio::test]
async fn leaderboard_renders_descending_from_server() {
    let server = StubServer::start(vec![(
        "/api/user/everybody",
        Route::json(r#"[{"name":"A","sum":10},{"name":"B","sum":30},{"name":"C","sum":20}]"#),
    )])
    .await;
    let view = shared(MemoryView::new());
    let controller = LeaderboardController::new(
        client_for(&server.base_url()),
        view.clone(),
        Arc::new(NoopNavigationBar),
    );

    controller.init().await;
    controller.tick().await;

    let view = view.lock().await;
    let rows: Vec<(String, String, String)> = view
        .rows(ids::RANKING_LIST)
        .iter()
        .map(|row| {
            (
                row.get(slots::ID).unwrap_or_default().to_string(),
                row.get(slots::USERNAME).unwrap_or_default().to_string(),
                row.get(slots::VALUE).unwrap_or_default().to_string(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        [
            ("1".to_string(), "B".to_string(), "30.00 €".to_string()),
            ("2".to_string(), "C".to_string(), "20.00 €".to_string()),
            ("3".to_string(), "A".to_string(), "10.00 €".to_string()),
        ]
    );
}

#[tokio::test]
async fn dashboard_notifies_on_connection_refused() {
    let view = shared(MemoryView::new());
    let controller = DashboardController::new(
        client_for(&refused_base_url().await),
        view.clone(),
        Arc::new(NoopNavigationBar),
    );

    controller.init().await;

    let view = view.lock().await;
    assert_eq!(view.notifications().len(), 1);
    assert!(view.notifications()[0].starts_with("Failed to load username from server: "));
    assert_eq!(view.text(ids::GREETING), None);
}

#[tokio::test]
async fn page_factory_builds_each_page() {
    let server = StubServer::start(vec![
        ("/api/user", Route::json(r#"{"name":"Ana","balance":12.5}"#)),
        ("/api/user/everybody", Route::json(r#"[{"name":"Ana","sum":12.5}]"#)),
    ])
    .await;
    let config = DashboardConfig::default();
    let client = client_for(&server.base_url());

    for (page, name) in [
        (Page::Dashboard, "dashboard"),
        (Page::Leaderboard, "leaderboard"),
        (Page::Balance, "balance"),
    ] {
        let view = shared(MemoryView::new());
        let controller =
            page.controller(client.clone(), view.clone(), Arc::new(NoopNavigationBar), &config);
        assert_eq!(controller.name(), name);
        controller.init().await;
        controller.tick().await;
        assert!(view.lock().await.notifications().is_empty());
    }

    assert_eq!(server.hits("/api/user"), 4);
    assert_eq!(server.hits("/api/user/everybody"), 2);
}

/// Source whose answers take a scripted amount of (virtual) time.
struct DelayedSource {
    calls: AtomicUsize,
    script: Vec<(Duration, i64)>,
}

#[async_trait]
impl UserSource for DelayedSource {
    async fn user(&self) -> Result<User, DomainFailure> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, balance) = self.script[call.min(self.script.len() - 1)];
        tokio::time::sleep(delay).await;
        Ok(User::new("Ana", Decimal::new(balance, 0)))
    }

    async fn everybody(&self) -> Result<Vec<User>, DomainFailure> {
        Ok(Vec::new())
    }
}

#[tokio::test(start_paused = true)]
async fn slow_stale_response_does_not_overwrite_newer_render() {
    let interval = Duration::from_secs(5);
    let source = Arc::new(DelayedSource {
        calls: AtomicUsize::new(0),
        script: vec![
            // init
            (Duration::ZERO, 1),
            // tick 1 at 5s, lands at 13s
            (Duration::from_secs(8), 2),
            // tick 2 at 10s, lands immediately
            (Duration::ZERO, 3),
        ],
    });
    let view = shared(MemoryView::new());
    let controller: Arc<dyn PageController> =
        Arc::new(BalanceController::new(source.clone(), view.clone(), Arc::new(NoopNavigationBar)));

    let mut handle = poll::start(controller, interval).await.unwrap();

    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(view.lock().await.text(ids::DISPLAY_BALANCE), Some("3"));

    // Tick 1 lands at 13s and must be dropped.
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(view.lock().await.text(ids::DISPLAY_BALANCE), Some("3"));

    handle.stop().await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 3);
}
