use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use futures::future::{self, BoxFuture, FutureExt};

use crate::models::{Launch, Payload, Rocket};

use super::{ApiError, LaunchSource};

/// In-memory `LaunchSource` with canned records and per-operation call counters.
///
/// Launches and payloads are returned regardless of the filter argument, so tests
/// exercise the client-side re-validation. A pending failure makes the next call
/// of any operation fail once.
#[derive(Debug, Default)]
pub struct MockSource {
    launches: HashMap<String, Vec<Launch>>,
    payloads: Vec<Payload>,
    rockets: Vec<Rocket>,
    fail_next: Mutex<bool>,
    launch_calls: AtomicUsize,
    payload_calls: AtomicUsize,
    rocket_calls: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records returned for a given year filter.
    pub fn with_launches(mut self, year_filter: &str, launches: Vec<Launch>) -> Self {
        self.launches.insert(year_filter.to_string(), launches);
        self
    }

    pub fn with_payloads(mut self, payloads: Vec<Payload>) -> Self {
        self.payloads = payloads;
        self
    }

    pub fn with_rockets(mut self, rockets: Vec<Rocket>) -> Self {
        self.rockets = rockets;
        self
    }

    pub fn fail_next(&self) {
        if let Ok(mut flag) = self.fail_next.lock() {
            *flag = true;
        }
    }

    pub fn launch_calls(&self) -> usize {
        self.launch_calls.load(Ordering::SeqCst)
    }

    pub fn payload_calls(&self) -> usize {
        self.payload_calls.load(Ordering::SeqCst)
    }

    pub fn rocket_calls(&self) -> usize {
        self.rocket_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.launch_calls() + self.payload_calls() + self.rocket_calls()
    }

    fn respond<'a, T: Send + 'a>(&self, records: Vec<T>) -> BoxFuture<'a, Result<Vec<T>, ApiError>> {
        let fail = self
            .fail_next
            .lock()
            .map(|mut flag| std::mem::replace(&mut *flag, false))
            .unwrap_or(false);

        if fail {
            future::ready(Err(ApiError::ServerError("injected failure".to_string()))).boxed()
        } else {
            future::ready(Ok(records)).boxed()
        }
    }
}

impl LaunchSource for MockSource {
    fn fetch_launches<'a>(
        &'a self,
        year_filter: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Launch>, ApiError>> {
        self.launch_calls.fetch_add(1, Ordering::SeqCst);
        let records = self.launches.get(year_filter).cloned().unwrap_or_default();
        self.respond(records)
    }

    fn fetch_payloads<'a>(
        &'a self,
        _launch_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Payload>, ApiError>> {
        self.payload_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(self.payloads.clone())
    }

    fn fetch_rockets(&self) -> BoxFuture<'_, Result<Vec<Rocket>, ApiError>> {
        self.rocket_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(self.rockets.clone())
    }
}
