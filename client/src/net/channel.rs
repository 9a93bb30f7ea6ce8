//! Request pipelines: the authorized channel and its guest counterpart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every domain call (board games, wishlist, plays) goes through
//! `AuthorizedChannel`. It is the only place that attaches credentials and
//! the only place that reacts to a rejected credential, so no collaborator
//! carries auth logic of its own. Login and register use `GuestChannel`,
//! which shares the transport and content-type policy but never touches the
//! session.
//!
//! DESIGN
//! ======
//! The channel holds no state beyond handles: the token is read from the
//! session at `prepare` time and the session is evicted at `inspect` time, so
//! a login or logout takes effect on the very next request. The redirect is a
//! handler supplied by the application shell rather than a global.
//!
//! ERROR HANDLING
//! ==============
//! A 401 evicts the session, fires the handler, and is still returned to the
//! caller as `ApiError::Unauthorized`. Every other failure passes through
//! untouched.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::sync::Arc;

use leptos::logging::warn;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request::{AUTHORIZATION, CONTENT_TYPE, JSON_CONTENT_TYPE, OutgoingRequest};
use super::transport::{FetchTransport, RawResponse, Transport};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;

/// Status the server uses for a missing, invalid, or expired credential.
pub const UNAUTHORIZED: u16 = 401;

/// Invoked with the login path after the session has been evicted.
pub type UnauthorizedHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Channel type used by the browser application.
pub type ApiChannel = AuthorizedChannel<FetchTransport>;

/// Apply the default content-type policy: JSON, except multipart bodies,
/// which must leave it unset so the transport can add the boundary.
pub fn apply_content_type(request: &mut OutgoingRequest) {
    if request.body.is_multipart() {
        request.remove_header(CONTENT_TYPE);
    } else if request.header(CONTENT_TYPE).is_none() {
        request.set_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
    }
}

/// Map a non-2xx response to `ApiError::Status`.
fn classify(response: RawResponse) -> Result<RawResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { status: response.status, body: response.body })
    }
}

/// Pipeline for authenticated API calls.
#[derive(Clone)]
pub struct AuthorizedChannel<T> {
    session: SessionStore,
    transport: T,
    config: ApiConfig,
    on_unauthorized: UnauthorizedHandler,
}

impl<T: Transport> AuthorizedChannel<T> {
    pub fn new<F>(session: SessionStore, transport: T, config: ApiConfig, on_unauthorized: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self { session, transport, config, on_unauthorized: Arc::new(on_unauthorized) }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Request stage: attach the current credential and content type.
    pub fn prepare(&self, mut request: OutgoingRequest) -> OutgoingRequest {
        apply_content_type(&mut request);
        match self.session.current_token() {
            Some(token) => request.set_header(AUTHORIZATION, &format!("Bearer {token}")),
            None => request.remove_header(AUTHORIZATION),
        }
        request
    }

    /// Response stage: evict and redirect on 401, classify everything else.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged, `ApiError::Unauthorized` for a
    /// rejected credential, or `ApiError::Status` for other non-2xx statuses.
    pub fn inspect(&self, outcome: Result<RawResponse, ApiError>) -> Result<RawResponse, ApiError> {
        let response = outcome?;
        if response.status == UNAUTHORIZED {
            warn!("credential rejected; clearing session and returning to {}", self.config.login_path);
            self.session.evict();
            (self.on_unauthorized)(&self.config.login_path);
            return Err(ApiError::Unauthorized);
        }
        classify(response)
    }

    /// Send `request` through both stages.
    ///
    /// # Errors
    ///
    /// See [`AuthorizedChannel::inspect`].
    pub async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, ApiError> {
        let request = self.prepare(request);
        let url = request.url(&self.config.base_url);
        let outcome = self.transport.dispatch(&url, &request).await;
        self.inspect(outcome)
    }

    /// Send and decode a JSON response body.
    ///
    /// # Errors
    ///
    /// As [`AuthorizedChannel::send`], plus `ApiError::Decode` for a body
    /// that does not match `R`.
    pub async fn send_json<R: DeserializeOwned>(&self, request: OutgoingRequest) -> Result<R, ApiError> {
        self.send(request).await?.json()
    }

    /// Send and discard the response body.
    ///
    /// # Errors
    ///
    /// See [`AuthorizedChannel::send`].
    pub async fn send_empty(&self, request: OutgoingRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}

impl<T: Transport + Clone> AuthorizedChannel<T> {
    /// Credential-free pipeline over the same transport and base URL.
    pub fn guest(&self) -> GuestChannel<T> {
        GuestChannel::new(self.transport.clone(), self.config.clone())
    }
}

/// Pipeline for calls made before a session exists (login, register).
#[derive(Clone, Debug)]
pub struct GuestChannel<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> GuestChannel<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    /// Send and decode a JSON response body. A 401 here means bad
    /// credentials and is returned as a plain `ApiError::Status`.
    ///
    /// # Errors
    ///
    /// Returns transport errors unchanged, `ApiError::Status` for non-2xx
    /// statuses, or `ApiError::Decode` for a malformed body.
    pub async fn send_json<R: DeserializeOwned>(&self, mut request: OutgoingRequest) -> Result<R, ApiError> {
        apply_content_type(&mut request);
        request.remove_header(AUTHORIZATION);
        let url = request.url(&self.config.base_url);
        classify(self.transport.dispatch(&url, &request).await?)?.json()
    }
}
