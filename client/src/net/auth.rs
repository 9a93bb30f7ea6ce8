//! Login and registration calls.
//!
//! These run before a session exists, so they go through `GuestChannel`: a
//! 401 for a wrong password is shown on the form instead of bouncing the user
//! back to the page they are already on. The caller stores the result with
//! `SessionStore::establish`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::channel::GuestChannel;
use super::error::ApiError;
use super::request::OutgoingRequest;
use super::transport::Transport;
use super::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::state::session::SessionStore;

pub(crate) const LOGIN_ENDPOINT: &str = "/auth/login";
pub(crate) const REGISTER_ENDPOINT: &str = "/auth/register";

/// Exchange a username and password for a token via `POST /auth/login`.
///
/// # Errors
///
/// Returns the pipeline error unchanged; bad credentials arrive as
/// `ApiError::Status { status: 401, .. }`.
pub async fn login<T: Transport>(channel: &GuestChannel<T>, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    channel
        .send_json(OutgoingRequest::post(LOGIN_ENDPOINT).json(request)?)
        .await
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the pipeline error unchanged (e.g. a 400 for a taken username).
pub async fn register<T: Transport>(
    channel: &GuestChannel<T>,
    request: &RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    channel
        .send_json(OutgoingRequest::post(REGISTER_ENDPOINT).json(request)?)
        .await
}

/// Record a successful login/register in the session.
pub fn sign_in(session: &SessionStore, response: &AuthResponse) {
    session.establish(&response.token, &response.username, response.user_id);
}
