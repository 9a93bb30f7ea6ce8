//! The user's board game collection: `/me/boardgames` and image upload.

#[cfg(test)]
#[path = "boardgames_test.rs"]
mod boardgames_test;

use super::channel::AuthorizedChannel;
use super::error::ApiError;
use super::request::{FilePart, OutgoingRequest};
use super::transport::Transport;
use super::types::{AddBoardGamePayload, Listing, UpdateBoardGamePayload, UploadImageResponse, UserBoardGame};

const COLLECTION_ENDPOINT: &str = "/me/boardgames";
const UPLOAD_ENDPOINT: &str = "/me/upload-image";

fn game_endpoint(id: i64) -> String {
    format!("{COLLECTION_ENDPOINT}/{id}")
}

/// List the collection.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn list<T: Transport>(channel: &AuthorizedChannel<T>) -> Result<Listing<UserBoardGame>, ApiError> {
    channel.send_json(OutgoingRequest::get(COLLECTION_ENDPOINT)).await
}

/// Fetch one game.
///
/// # Errors
///
/// Returns the channel error unchanged (404 for an unknown id).
pub async fn get<T: Transport>(channel: &AuthorizedChannel<T>, id: i64) -> Result<UserBoardGame, ApiError> {
    channel.send_json(OutgoingRequest::get(game_endpoint(id))).await
}

/// Add a game to the collection.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn add<T: Transport>(
    channel: &AuthorizedChannel<T>,
    payload: &AddBoardGamePayload,
) -> Result<UserBoardGame, ApiError> {
    channel
        .send_json(OutgoingRequest::post(COLLECTION_ENDPOINT).json(payload)?)
        .await
}

/// Update the fields set in `payload`.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn update<T: Transport>(
    channel: &AuthorizedChannel<T>,
    id: i64,
    payload: &UpdateBoardGamePayload,
) -> Result<UserBoardGame, ApiError> {
    channel
        .send_json(OutgoingRequest::put(game_endpoint(id)).json(payload)?)
        .await
}

/// Remove a game from the collection.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn delete<T: Transport>(channel: &AuthorizedChannel<T>, id: i64) -> Result<(), ApiError> {
    channel.send_empty(OutgoingRequest::delete(game_endpoint(id))).await
}

/// Upload an image as multipart field `file`; returns its display URL.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn upload_image<T: Transport>(
    channel: &AuthorizedChannel<T>,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<UploadImageResponse, ApiError> {
    let part = FilePart {
        field: "file".to_owned(),
        file_name: file_name.to_owned(),
        content_type: content_type.to_owned(),
        bytes,
    };
    channel.send_json(OutgoingRequest::post(UPLOAD_ENDPOINT).file(part)).await
}
