use super::*;

fn play_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "userBoardGameId": 3,
        "playedAt": "2024-05-01",
        "memo": null,
        "playerCount": 4,
        "createdAt": "2024-05-01T10:00:00Z"
    })
}

#[test]
fn auth_response_decodes_camel_case() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"token":"tok123","username":"alice","userId":7}"#).unwrap();
    assert_eq!(resp, AuthResponse { token: "tok123".to_owned(), username: "alice".to_owned(), user_id: 7 });
}

#[test]
fn board_game_decodes_nullable_fields() {
    let game: UserBoardGame = serde_json::from_value(serde_json::json!({
        "id": 1,
        "bggId": null,
        "name": "Azul",
        "thumbnailUrl": null,
        "yearPublished": 2017,
        "minPlayers": 2,
        "maxPlayers": 4,
        "minPlayTimeMinutes": null,
        "maxPlayTimeMinutes": 45,
        "addedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(game.year_published, Some(2017));
    assert_eq!(game.players_label().as_deref(), Some("2-4"));
    assert_eq!(game.play_time_label().as_deref(), Some("45"));
}

#[test]
fn range_label_collapses_equal_bounds() {
    assert_eq!(range_label(Some(2), Some(2)).as_deref(), Some("2"));
    assert_eq!(range_label(None, None), None);
}

#[test]
fn update_payload_omits_unset_fields() {
    let payload = UpdateBoardGamePayload { name: Some("Azul".to_owned()), ..UpdateBoardGamePayload::default() };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "name": "Azul" }));
}

#[test]
fn play_record_request_uses_camel_case() {
    let req = PlayRecordRequest { played_at: "2024-05-01".to_owned(), memo: None, player_count: Some(3) };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "playedAt": "2024-05-01", "playerCount": 3 })
    );
}

#[test]
fn listing_accepts_bare_array() {
    let listing: Listing<PlayRecord> = serde_json::from_value(serde_json::json!([play_json(1), play_json(2)])).unwrap();
    assert!(matches!(listing, Listing::Bare(_)));
    assert_eq!(listing.items().len(), 2);
    assert_eq!(listing.total(), 2);
    assert_eq!(listing.position(), (0, 1));
    assert!(!listing.has_next());
    assert!(!listing.has_previous());
}

#[test]
fn listing_accepts_page_envelope() {
    let listing: Listing<PlayRecord> = serde_json::from_value(serde_json::json!({
        "content": [play_json(5)],
        "totalElements": 21,
        "totalPages": 3,
        "number": 1,
        "size": 10,
        "first": false,
        "last": false
    }))
    .unwrap();
    assert!(matches!(listing, Listing::Paged(_)));
    assert_eq!(listing.total(), 21);
    assert_eq!(listing.position(), (1, 3));
    assert!(listing.has_next());
    assert!(listing.has_previous());
    assert_eq!(listing.into_items()[0].id, 5);
}

#[test]
fn listing_rejects_unrelated_shapes() {
    let result: Result<Listing<WishlistItem>, _> = serde_json::from_value(serde_json::json!({ "items": [] }));
    assert!(result.is_err());
}
