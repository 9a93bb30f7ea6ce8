//! Scripted transport and channel fixtures for pipeline tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use super::channel::AuthorizedChannel;
use super::error::ApiError;
use super::request::OutgoingRequest;
use super::transport::{RawResponse, Transport};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;
use crate::state::storage::MemoryStorage;

/// Replays queued outcomes in order and records every dispatched request.
/// Once the queue is empty it answers `200` with a `null` body.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    outcomes: Rc<RefCell<VecDeque<Result<RawResponse, ApiError>>>>,
    sent: Rc<RefCell<Vec<(String, OutgoingRequest)>>>,
}

impl ScriptedTransport {
    pub(crate) fn respond(&self, status: u16, body: &str) -> &Self {
        self.outcomes
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, error: ApiError) -> &Self {
        self.outcomes.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn sent(&self) -> Vec<(String, OutgoingRequest)> {
        self.sent.borrow().clone()
    }

    pub(crate) fn last(&self) -> (String, OutgoingRequest) {
        self.sent.borrow().last().cloned().expect("no request dispatched")
    }
}

impl Transport for ScriptedTransport {
    async fn dispatch(&self, url: &str, request: &OutgoingRequest) -> Result<RawResponse, ApiError> {
        self.sent.borrow_mut().push((url.to_owned(), request.clone()));
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse { status: 200, body: "null".to_owned() }))
    }
}

/// Channel over a fresh in-memory session plus the navigations it requested.
pub(crate) struct Fixture {
    pub channel: AuthorizedChannel<ScriptedTransport>,
    pub transport: ScriptedTransport,
    pub session: SessionStore,
    pub storage: MemoryStorage,
    pub redirects: Arc<Mutex<Vec<String>>>,
}

pub(crate) fn fixture() -> Fixture {
    let storage = MemoryStorage::new();
    let session = SessionStore::load(storage.clone());
    let transport = ScriptedTransport::default();
    let redirects = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&redirects);
    let channel = AuthorizedChannel::new(
        session.clone(),
        transport.clone(),
        ApiConfig::default(),
        move |path: &str| sink.lock().unwrap().push(path.to_owned()),
    );
    Fixture { channel, transport, session, storage, redirects }
}

impl Fixture {
    pub(crate) fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}
