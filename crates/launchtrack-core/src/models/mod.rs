//! Data models for launch-data entities.
//!
//! This module contains the data structures decoded from the remote API
//! and the values derived from them:
//!
//! - `Launch`, `LaunchOutcome`, `SearchCriteria`: launch records and search input
//! - `Payload`: cargo attached to a launch
//! - `Rocket`, `Mass`, `PayloadWeight`: vehicle specifications
//! - `Favorite`: a timestamped bookmark of a launch
//! - `RocketStats`: success/failure tally derived from cached launches
//! - `Lookup`: outcome of a cache-only lookup

pub mod favorite;
pub mod launch;
pub mod payload;
pub mod rocket;
pub mod stats;

pub use favorite::Favorite;
pub use launch::{Launch, LaunchOutcome, SearchCriteria, FIRST_LAUNCH_YEAR};
pub use payload::Payload;
pub use rocket::{Mass, PayloadWeight, Rocket};
pub use stats::RocketStats;

/// Outcome of a lookup served only from already-fetched data.
///
/// Separates "nothing has been searched yet" from "searched, but no match".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    NotYetFetched,
    Empty,
    Value(T),
}

impl<T> Lookup<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Lookup::Value(v) => Some(v),
            Lookup::NotYetFetched | Lookup::Empty => None,
        }
    }
}
