//! Wishlist calls on `/me/wishlist`.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use super::channel::AuthorizedChannel;
use super::error::ApiError;
use super::request::OutgoingRequest;
use super::transport::Transport;
use super::types::{AddWishlistItemPayload, Listing, WishlistItem};

const WISHLIST_ENDPOINT: &str = "/me/wishlist";

fn item_endpoint(id: i64) -> String {
    format!("{WISHLIST_ENDPOINT}/{id}")
}

/// List wishlist items.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn list<T: Transport>(channel: &AuthorizedChannel<T>) -> Result<Listing<WishlistItem>, ApiError> {
    channel.send_json(OutgoingRequest::get(WISHLIST_ENDPOINT)).await
}

/// Add an item.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn add<T: Transport>(
    channel: &AuthorizedChannel<T>,
    payload: &AddWishlistItemPayload,
) -> Result<WishlistItem, ApiError> {
    channel
        .send_json(OutgoingRequest::post(WISHLIST_ENDPOINT).json(payload)?)
        .await
}

/// Remove an item.
///
/// # Errors
///
/// Returns the channel error unchanged.
pub async fn delete<T: Transport>(channel: &AuthorizedChannel<T>, id: i64) -> Result<(), ApiError> {
    channel.send_empty(OutgoingRequest::delete(item_endpoint(id))).await
}
