//! Aggregation service module.
//!
//! `LaunchService` is the single entry point used by the CLI. It consults
//! the `CacheStore` before the `LaunchSource`, joins launches, payloads and
//! rockets, derives rocket statistics and keeps the favorites list.

pub mod launch_service;

pub use launch_service::LaunchService;
