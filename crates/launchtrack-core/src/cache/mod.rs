//! In-memory caching module for fetched launch data.
//!
//! This module provides the `CacheStore`, which holds everything the
//! session has fetched. Each key is populated at most once and entries
//! never go stale; nothing is persisted across process restarts.
//!
//! Cached data types include:
//! - Launches, keyed by year
//! - Payloads, keyed by launch identifier (including "no payload" results)
//! - The rocket catalog, fetched whole on first use

pub mod manager;

pub use manager::{CacheStore, CacheSummary, CachedData, CatalogCache, KeyedCache, YearSummary};
