//! Integration tests for the user accessors.

mod support;

use balance_board::prelude::*;
use rust_decimal::Decimal;
use support::{refused_base_url, Route, StubServer};
use tokio_test::{assert_err, assert_ok};

fn client_for(base_url: &str) -> BoardClient {
    BoardClient::builder().base_url(base_url).build().unwrap()
}

#[tokio::test]
async fn get_user_maps_name_and_balance() {
    let server = StubServer::start(vec![("/api/user", Route::json(r#"{"name":"Ana","balance":12.5}"#))]).await;
    let client = client_for(&server.base_url());

    let user = assert_ok!(client.users().get().await);

    assert_eq!(user, User::new("Ana", Decimal::new(125, 1)));
}

#[tokio::test]
async fn everybody_empty_list() {
    let server = StubServer::start(vec![("/api/user/everybody", Route::json("[]"))]).await;
    let client = client_for(&server.base_url());

    let users = assert_ok!(client.users().everybody().await);
    assert!(users.is_empty());
}

#[tokio::test]
async fn everybody_preserves_server_order() {
    let server = StubServer::start(vec![(
        "/api/user/everybody",
        Route::json(r#"[{"name":"A","sum":10},{"name":"B","sum":30},{"name":"C","sum":20}]"#),
    )])
    .await;
    let client = client_for(&server.base_url());

    let users = assert_ok!(client.users().everybody().await);
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();

    assert_eq!(names, ["A", "B", "C"]);
    assert_eq!(users[1].balance, Decimal::new(30, 0));
}

#[tokio::test]
async fn connection_refused_raises_transport_failure() {
    let client = client_for(&refused_base_url().await);

    let failure = assert_err!(client.users().get().await);

    assert_eq!(failure.kind, DomainFailureKind::Transport);
    assert_eq!(failure.message, "Unable to get user");
    assert!(!failure.user_message.is_empty());
}

#[tokio::test]
async fn server_error_keeps_status() {
    let server = StubServer::start(vec![(
        "/api/user/everybody",
        Route::status(503, "Service Unavailable"),
    )])
    .await;
    let client = client_for(&server.base_url());

    let failure = assert_err!(client.users().everybody().await);

    assert_eq!(failure.kind, DomainFailureKind::Protocol { status: 503 });
    assert_eq!(failure.user_message, "Service Unavailable (503)");
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let server = StubServer::start(vec![("/api/user", Route::json("not json"))]).await;
    let client = client_for(&server.base_url());

    let failure = assert_err!(client.users().get().await);

    assert_eq!(failure.kind, DomainFailureKind::Decode);
    assert!(!failure.is_user_visible());
}

#[tokio::test]
async fn no_caching_between_calls() {
    let server = StubServer::start(vec![("/api/user", Route::json(r#"{"name":"Ana","balance":1}"#))]).await;
    let client = client_for(&server.base_url());

    assert_ok!(client.users().get().await);
    assert_ok!(client.users().get().await);
    assert_ok!(client.user().await);

    assert_eq!(server.hits("/api/user"), 3);
}
