use futures::future::BoxFuture;

use crate::models::{Launch, Payload, Rocket};

use super::ApiError;

/// A remote provider of raw launch, payload and rocket records.
///
/// Implementations do no caching of their own. Filters are advisory: a source
/// may return records that do not match, and callers re-validate.
pub trait LaunchSource: Send + Sync {
    /// Fetch launches, filtered by year where the source supports it.
    fn fetch_launches<'a>(&'a self, year_filter: &'a str)
        -> BoxFuture<'a, Result<Vec<Launch>, ApiError>>;

    /// Fetch payloads, filtered by owning launch where the source supports it.
    fn fetch_payloads<'a>(&'a self, launch_id: &'a str)
        -> BoxFuture<'a, Result<Vec<Payload>, ApiError>>;

    /// Fetch the full rocket catalog.
    fn fetch_rockets(&self) -> BoxFuture<'_, Result<Vec<Rocket>, ApiError>>;
}
