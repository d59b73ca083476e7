//! Background execution of API requests.
//!
//! Each submitted request runs on its own thread so the UI stays responsive.
//! Completions come back over a channel tagged with the page and sequence
//! number they were issued under; requests are never cancelled.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crate::api::{ApiClient, ApiRequest, ApiResponse};
use crate::error::Result;
use crate::pages::PageId;

/// A request to run on behalf of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Issuing page.
    pub page: PageId,
    /// Sequence number from the page's tracker.
    pub seq: u64,
    /// Request body.
    pub request: ApiRequest,
}

/// Outcome of a dispatched request.
#[derive(Debug)]
pub struct Completion {
    /// Issuing page.
    pub page: PageId,
    /// Sequence number the request was issued under.
    pub seq: u64,
    /// Decoded response or error.
    pub result: Result<ApiResponse>,
}

/// Runs requests off the UI thread.
#[derive(Debug)]
pub struct RequestWorker {
    client: ApiClient,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    in_flight: usize,
}

impl RequestWorker {
    /// Create a worker sending through `client`.
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start a request in the background.
    pub fn submit(&mut self, dispatch: Dispatch) {
        tracing::info!(
            "Dispatching {} #{} for {}",
            dispatch.request.path(),
            dispatch.seq,
            dispatch.page.name()
        );
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let result = client.send(&dispatch.request);
            let _ = tx.send(Completion {
                page: dispatch.page,
                seq: dispatch.seq,
                result,
            });
        });
    }

    /// Collect every completion that has arrived, without blocking.
    pub fn poll(&mut self) -> Vec<Completion> {
        let done: Vec<Completion> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }

    /// Block until the next completion or until `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> Option<Completion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(completion)
            },
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Requests submitted but not yet collected.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
