//! Form input normalization shared by pages.
//!
//! Pages call these before issuing a request so obviously incomplete input is
//! rejected locally with a message instead of a server round-trip.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{AddBoardGamePayload, AddWishlistItemPayload, LoginRequest, PlayRecordRequest, RegisterRequest};

pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

pub(crate) fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Parse an optional numeric field; blank means "not set".
pub(crate) fn parse_optional_number(raw: &str) -> Result<Option<i32>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| "Numbers only, please.")
}

fn optional_text(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_owned())
}

pub(crate) fn validate_new_game(
    name: &str,
    min_players: &str,
    max_players: &str,
    thumbnail_url: Option<String>,
) -> Result<AddBoardGamePayload, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Game name is required.");
    }
    let min_players = parse_optional_number(min_players)?;
    let max_players = parse_optional_number(max_players)?;
    if let (Some(lo), Some(hi)) = (min_players, max_players) {
        if lo > hi {
            return Err("Min players cannot exceed max players.");
        }
    }
    Ok(AddBoardGamePayload {
        name: name.to_owned(),
        thumbnail_url,
        min_players,
        max_players,
        ..AddBoardGamePayload::default()
    })
}

pub(crate) fn validate_wishlist_item(name: &str, thumbnail_url: &str) -> Result<AddWishlistItemPayload, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    Ok(AddWishlistItemPayload { name: name.to_owned(), thumbnail_url: optional_text(thumbnail_url) })
}

pub(crate) fn validate_play(played_at: &str, player_count: &str, memo: &str) -> Result<PlayRecordRequest, &'static str> {
    let played_at = played_at.trim();
    if played_at.is_empty() {
        return Err("Play date is required.");
    }
    let player_count = parse_optional_number(player_count)?;
    if player_count.is_some_and(|n| n < 1) {
        return Err("Player count must be at least 1.");
    }
    Ok(PlayRecordRequest { played_at: played_at.to_owned(), memo: optional_text(memo), player_count })
}
