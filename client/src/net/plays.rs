//! Play record calls, nested under a game or listed across the collection.

#[cfg(test)]
#[path = "plays_test.rs"]
mod plays_test;

use super::channel::AuthorizedChannel;
use super::error::ApiError;
use super::request::OutgoingRequest;
use super::transport::Transport;
use super::types::{Listing, PageRequest, PlayRecord, PlayRecordRequest};

const ALL_PLAYS_ENDPOINT: &str = "/me/plays";

fn game_plays_endpoint(game_id: i64) -> String {
    format!("/me/boardgames/{game_id}/plays")
}

fn play_endpoint(game_id: i64, play_id: i64) -> String {
    format!("/me/boardgames/{game_id}/plays/{play_id}")
}

fn paged(mut request: OutgoingRequest, page: PageRequest) -> OutgoingRequest {
    if let Some(n) = page.page {
        request = request.query_param("page", n);
    }
    if let Some(n) = page.size {
        request = request.query_param("size", n);
    }
    request
}

/// List plays of one game.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn list_by_game<T: Transport>(
    channel: &AuthorizedChannel<T>,
    game_id: i64,
    page: PageRequest,
) -> Result<Listing<PlayRecord>, ApiError> {
    channel
        .send_json(paged(OutgoingRequest::get(game_plays_endpoint(game_id)), page))
        .await
}

/// List plays across the whole collection.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn list_all<T: Transport>(
    channel: &AuthorizedChannel<T>,
    page: PageRequest,
) -> Result<Listing<PlayRecord>, ApiError> {
    channel
        .send_json(paged(OutgoingRequest::get(ALL_PLAYS_ENDPOINT), page))
        .await
}

/// Record a play of a game.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn add<T: Transport>(
    channel: &AuthorizedChannel<T>,
    game_id: i64,
    request: &PlayRecordRequest,
) -> Result<PlayRecord, ApiError> {
    channel
        .send_json(OutgoingRequest::post(game_plays_endpoint(game_id)).json(request)?)
        .await
}

/// Replace a play record.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn update<T: Transport>(
    channel: &AuthorizedChannel<T>,
    game_id: i64,
    play_id: i64,
    request: &PlayRecordRequest,
) -> Result<PlayRecord, ApiError> {
    channel
        .send_json(OutgoingRequest::put(play_endpoint(game_id, play_id)).json(request)?)
        .await
}

/// Delete a play record.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn delete<T: Transport>(channel: &AuthorizedChannel<T>, game_id: i64, play_id: i64) -> Result<(), ApiError> {
    channel
        .send_empty(OutgoingRequest::delete(play_endpoint(game_id, play_id)))
        .await
}
