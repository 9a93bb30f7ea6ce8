//! The seam between the request pipelines and the network.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `FetchTransport` reports `ApiError::Unavailable`, and tests
//! substitute a scripted transport.

#![allow(clippy::unused_async)]

use std::future::Future;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request::OutgoingRequest;
#[cfg(feature = "csr")]
use super::request::{FilePart, Method, RequestBody};

/// Status and body text of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends a fully prepared request. Implementations do no credential or
/// status handling of their own; any HTTP status is a successful exchange.
pub trait Transport {
    fn dispatch(
        &self,
        url: &str,
        request: &OutgoingRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn dispatch(&self, url: &str, request: &OutgoingRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            fetch(url, request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch(url: &str, request: &OutgoingRequest) -> Result<RawResponse, ApiError> {
    use gloo_net::http::RequestBuilder;

    let method = match request.method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    };
    let mut builder = RequestBuilder::new(url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    if !request.query.is_empty() {
        builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    let outgoing = match &request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.body(value.to_string()),
        RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
    }
    .map_err(|e| ApiError::Encode(e.to_string()))?;

    let resp = outgoing.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(RawResponse { status, body })
}

#[cfg(feature = "csr")]
fn form_data(parts: &[FilePart]) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(js_err)?;
    for part in parts {
        let bytes = js_sys::Uint8Array::from(part.bytes.as_slice());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&part.content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&js_sys::Array::of1(&bytes), &options)
            .map_err(js_err)?;
        form.append_with_blob_and_filename(&part.field, &blob, &part.file_name)
            .map_err(js_err)?;
    }
    Ok(form)
}
