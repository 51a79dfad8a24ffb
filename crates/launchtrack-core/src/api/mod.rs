//! REST API client module for the public launch-data service.
//!
//! This module provides the `LaunchSource` trait, the remote-fetch
//! capability consumed by the aggregation service, and `ApiClient`, its
//! HTTP implementation.
//!
//! The API is public and unauthenticated; filters passed as query
//! parameters are advisory and results are re-validated by the caller.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod source;

pub use client::ApiClient;
pub use error::ApiError;
pub use source::LaunchSource;
