//! Core library for launchtrack.
//!
//! Retrieves launch, payload and rocket records from the public launch-data
//! API, caches them for the session, keeps a favorites list, and derives
//! per-rocket success statistics from the launches already fetched.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod service;

pub use api::{ApiClient, ApiError, LaunchSource};
pub use config::Config;
pub use error::ServiceError;
pub use service::LaunchService;
