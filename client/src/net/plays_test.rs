use futures::executor::block_on;

use super::*;
use crate::net::request::{Method, RequestBody};
use crate::net::test_support::fixture;

const PAGE: &str = r#"{"content":[{"id":8,"userBoardGameId":3,"playedAt":"2024-05-01","memo":"close game",
"playerCount":3,"createdAt":"2024-05-01T10:00:00Z"}],"totalElements":11,"totalPages":2,"number":1,"size":10,
"first":false,"last":true}"#;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(game_plays_endpoint(3), "/me/boardgames/3/plays");
    assert_eq!(play_endpoint(3, 8), "/me/boardgames/3/plays/8");
}

#[test]
fn list_all_sends_page_params() {
    let fx = fixture();
    fx.session.establish("tok", "alice", 1);
    fx.transport.respond(200, PAGE);

    let page = PageRequest { page: Some(1), size: Some(10) };
    let listing = block_on(list_all(&fx.channel, page)).unwrap();
    assert_eq!(listing.position(), (1, 2));
    assert!(!listing.has_next());

    let (url, sent) = fx.transport.last();
    assert_eq!(url, "/api/me/plays");
    assert_eq!(
        sent.query,
        vec![("page".to_owned(), "1".to_owned()), ("size".to_owned(), "10".to_owned())]
    );
}

#[test]
fn list_by_game_without_params_has_empty_query() {
    let fx = fixture();
    fx.session.establish("tok", "alice", 1);
    fx.transport.respond(200, "[]");

    let listing = block_on(list_by_game(&fx.channel, 3, PageRequest::default())).unwrap();
    assert!(listing.items().is_empty());

    let (url, sent) = fx.transport.last();
    assert_eq!(url, "/api/me/boardgames/3/plays");
    assert!(sent.query.is_empty());
}

#[test]
fn add_and_update_send_json_bodies() {
    let fx = fixture();
    fx.session.establish("tok", "alice", 1);
    let record = r#"{"id":8,"userBoardGameId":3,"playedAt":"2024-05-02","memo":null,"playerCount":null,
"createdAt":"2024-05-02T10:00:00Z"}"#;
    fx.transport.respond(200, record).respond(200, record);

    let request = PlayRecordRequest { played_at: "2024-05-02".to_owned(), ..PlayRecordRequest::default() };
    block_on(add(&fx.channel, 3, &request)).unwrap();
    block_on(update(&fx.channel, 3, 8, &request)).unwrap();

    let sent = fx.transport.sent();
    assert_eq!(sent[0].0, "/api/me/boardgames/3/plays");
    assert_eq!(sent[0].1.method, Method::Post);
    assert_eq!(sent[1].0, "/api/me/boardgames/3/plays/8");
    assert_eq!(sent[1].1.method, Method::Put);
    assert_eq!(sent[1].1.body, RequestBody::Json(serde_json::json!({ "playedAt": "2024-05-02" })));
}

#[test]
fn delete_targets_nested_record() {
    let fx = fixture();
    fx.session.establish("tok", "alice", 1);
    fx.transport.respond(204, "");
    block_on(delete(&fx.channel, 3, 8)).unwrap();
    let (url, sent) = fx.transport.last();
    assert_eq!(url, "/api/me/boardgames/3/plays/8");
    assert_eq!(sent.method, Method::Delete);
}
