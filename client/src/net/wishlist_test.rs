use futures::executor::block_on;

use super::*;
use crate::net::request::{Method, RequestBody};
use crate::net::test_support::fixture;

#[test]
fn item_endpoint_formats_expected_path() {
    assert_eq!(item_endpoint(3), "/me/wishlist/3");
}

#[test]
fn list_accepts_either_envelope() {
    let fx = fixture();
    fx.session.establish("tok", "alice", 1);
    let item = r#"{"id":1,"name":"Cascadia","thumbnailUrl":null,"addedAt":"2024-02-02T00:00:00Z"}"#;
    fx.transport
        .respond(200, &format!("[{item}]"))
        .respond(
            200,
            &format!(r#"{{"content":[{item}],"totalElements":1,"totalPages":1,"number":0,"size":20,"first":true,"last":true}}"#),
        );

    let bare = block_on(list(&fx.channel)).unwrap();
    let paged = block_on(list(&fx.channel)).unwrap();
    assert_eq!(bare.items(), paged.items());
    assert_eq!(paged.total(), 1);
}

#[test]
fn add_omits_missing_thumbnail() {
    let fx = fixture();
    fx.session.establish("tok", "alice", 1);
    fx.transport
        .respond(200, r#"{"id":2,"name":"Ark Nova","thumbnailUrl":null,"addedAt":"2024-02-02T00:00:00Z"}"#);

    let payload = AddWishlistItemPayload { name: "Ark Nova".to_owned(), thumbnail_url: None };
    let item = block_on(add(&fx.channel, &payload)).unwrap();
    assert_eq!(item.id, 2);

    let (url, sent) = fx.transport.last();
    assert_eq!(url, "/api/me/wishlist");
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.body, RequestBody::Json(serde_json::json!({ "name": "Ark Nova" })));
}

#[test]
fn delete_targets_item() {
    let fx = fixture();
    fx.session.establish("tok", "alice", 1);
    fx.transport.respond(204, "");
    block_on(delete(&fx.channel, 2)).unwrap();
    assert_eq!(fx.transport.last().0, "/api/me/wishlist/2");
}
