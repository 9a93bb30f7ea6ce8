use super::*;

fn play(memo: Option<&str>, player_count: Option<i32>) -> PlayRecord {
    PlayRecord {
        id: 1,
        user_board_game_id: 3,
        played_at: "2024-05-01".to_owned(),
        memo: memo.map(str::to_owned),
        player_count,
        created_at: "2024-05-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn play_summary_includes_available_details() {
    assert_eq!(play_summary(&play(Some("close game"), Some(3))), "2024-05-01 · 3 players · close game");
}

#[test]
fn play_summary_skips_missing_and_blank_fields() {
    assert_eq!(play_summary(&play(None, None)), "2024-05-01");
    assert_eq!(play_summary(&play(Some(""), Some(2))), "2024-05-01 · 2 players");
}
