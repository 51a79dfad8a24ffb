use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Debug;
use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::models::{Launch, Payload, Rocket};

#[derive(Debug, Clone, Serialize)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        let now = Utc::now();
        (now - self.cached_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

// ============================================================================
// Keyed Cache
// ============================================================================

/// Fetch-once map: each key is populated at most once and never refreshed.
///
/// Iteration follows key order.
#[derive(Debug)]
pub struct KeyedCache<K, V> {
    name: &'static str,
    entries: BTreeMap<K, CachedData<V>>,
}

impl<K: Ord + Debug, V> KeyedCache<K, V> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|cached| &cached.data)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &CachedData<V>)> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|cached| &cached.data)
    }

    /// Return the cached value for `key`, or run `fetch` once and cache its result.
    ///
    /// Empty results are cached. Errors are returned without touching the
    /// cache, so the next lookup for the same key fetches again.
    pub async fn get_or_fetch<F, Fut, E>(&mut self, key: K, fetch: F) -> Result<&V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        match self.entries.entry(key) {
            btree_map::Entry::Occupied(entry) => {
                debug!(cache = self.name, key = ?entry.key(), "Cache hit");
                Ok(&entry.into_mut().data)
            }
            btree_map::Entry::Vacant(entry) => {
                debug!(cache = self.name, key = ?entry.key(), "Cache miss, fetching");
                let value = fetch().await?;
                Ok(&entry.insert(CachedData::new(value)).data)
            }
        }
    }
}

// ============================================================================
// Catalog Cache
// ============================================================================

/// Single-slot variant of `KeyedCache` for data fetched as one whole collection.
#[derive(Debug)]
pub struct CatalogCache<T> {
    name: &'static str,
    slot: Option<CachedData<T>>,
}

impl<T> CatalogCache<T> {
    pub fn new(name: &'static str) -> Self {
        Self { name, slot: None }
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref().map(|cached| &cached.data)
    }

    pub fn cached(&self) -> Option<&CachedData<T>> {
        self.slot.as_ref()
    }

    /// Same contract as `KeyedCache::get_or_fetch`, for the single slot.
    pub async fn get_or_fetch<F, Fut, E>(&mut self, fetch: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let cached = match self.slot.take() {
            Some(cached) => {
                debug!(cache = self.name, "Cache hit");
                cached
            }
            None => {
                debug!(cache = self.name, "Cache miss, fetching");
                CachedData::new(fetch().await?)
            }
        };
        Ok(&self.slot.insert(cached).data)
    }
}

// ============================================================================
// Cache Store
// ============================================================================

/// All fetched session state: launches by year, payloads by launch, rocket catalog.
#[derive(Debug)]
pub struct CacheStore {
    pub launches: KeyedCache<i32, Vec<Launch>>,
    /// `None` records a successful lookup that found no payload.
    pub payloads: KeyedCache<String, Option<Payload>>,
    pub rockets: CatalogCache<Vec<Rocket>>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    pub fn new() -> Self {
        Self {
            launches: KeyedCache::new("launches"),
            payloads: KeyedCache::new("payloads"),
            rockets: CatalogCache::new("rockets"),
        }
    }

    /// Every cached launch, year by year in ascending order.
    pub fn cached_launches(&self) -> impl Iterator<Item = &Launch> {
        self.launches.values().flatten()
    }

    pub fn summary(&self) -> CacheSummary {
        CacheSummary {
            years: self
                .launches
                .iter()
                .map(|(year, cached)| YearSummary {
                    year: *year,
                    launches: cached.data.len(),
                    age: cached.age_display(),
                })
                .collect(),
            payload_entries: self.payloads.len(),
            rockets: self.rockets.cached().map(|cached| cached.data.len()),
            rockets_age: self.rockets.cached().map(|cached| cached.age_display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSummary {
    pub year: i32,
    pub launches: usize,
    pub age: String,
}

/// Snapshot of what the session has fetched so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheSummary {
    pub years: Vec<YearSummary>,
    pub payload_entries: usize,
    /// Catalog size, `None` until the catalog has been fetched.
    pub rockets: Option<usize>,
    pub rockets_age: Option<String>,
}

impl CacheSummary {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.payload_entries == 0 && self.rockets.is_none()
    }

    pub fn total_launches(&self) -> usize {
        self.years.iter().map(|y| y.launches).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
