//! Wire DTOs for the board game API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. Optional request fields are
//! omitted when unset so partial updates only touch what the user changed.
//! List endpoints have shipped both as bare arrays and as paginated
//! envelopes, so list results decode into `Listing<T>`, which accepts either.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login/register: the triple handed to `SessionStore::establish`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub user_id: i64,
}

// =============================================================================
// BOARD GAMES
// =============================================================================

/// A game in the user's collection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBoardGame {
    pub id: i64,
    pub bgg_id: Option<String>,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub year_published: Option<i32>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub min_play_time_minutes: Option<i32>,
    pub max_play_time_minutes: Option<i32>,
    /// ISO-8601 instant.
    pub added_at: String,
}

impl UserBoardGame {
    /// Player range for display, e.g. `"2-4"`, `"2"`, or `None`.
    pub fn players_label(&self) -> Option<String> {
        range_label(self.min_players, self.max_players)
    }

    /// Play time range in minutes for display.
    pub fn play_time_label(&self) -> Option<String> {
        range_label(self.min_play_time_minutes, self.max_play_time_minutes)
    }
}

fn range_label(min: Option<i32>, max: Option<i32>) -> Option<String> {
    match (min, max) {
        (Some(lo), Some(hi)) if lo == hi => Some(lo.to_string()),
        (Some(lo), Some(hi)) => Some(format!("{lo}-{hi}")),
        (Some(n), None) | (None, Some(n)) => Some(n.to_string()),
        (None, None) => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBoardGamePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_players: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_play_time_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_play_time_minutes: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardGamePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_players: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_play_time_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_play_time_minutes: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadImageResponse {
    /// Server-relative URL of the stored image.
    pub url: String,
}

// =============================================================================
// WISHLIST
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: i64,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub added_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistItemPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

// =============================================================================
// PLAY RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRecord {
    pub id: i64,
    pub user_board_game_id: i64,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub played_at: String,
    pub memo: Option<String>,
    pub player_count: Option<i32>,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRecordRequest {
    pub played_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_count: Option<i32>,
}

// =============================================================================
// LISTINGS
// =============================================================================

/// Zero-based page selection for paginated list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Spring-style page envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Zero-based index of this page.
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
}

/// A list endpoint's result: either a paginated envelope or a bare array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Paged(page) => &page.content,
            Self::Bare(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged(page) => page.content,
            Self::Bare(items) => items,
        }
    }

    /// Total number of items across all pages.
    pub fn total(&self) -> u64 {
        match self {
            Self::Paged(page) => page.total_elements,
            Self::Bare(items) => items.len() as u64,
        }
    }

    /// Zero-based page index and page count; a bare list is one page.
    pub fn position(&self) -> (u32, u32) {
        match self {
            Self::Paged(page) => (page.number, page.total_pages),
            Self::Bare(_) => (0, 1),
        }
    }

    pub fn has_next(&self) -> bool {
        match self {
            Self::Paged(page) => !page.last,
            Self::Bare(_) => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        match self {
            Self::Paged(page) => !page.first,
            Self::Bare(_) => false,
        }
    }
}
