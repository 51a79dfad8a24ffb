//! The aggregation service: cache-before-fetch retrieval, cross-collection
//! joins, favorites, and rocket statistics.

use chrono::Local;
use tracing::debug;

use crate::api::LaunchSource;
use crate::cache::{CacheStore, CacheSummary};
use crate::error::ServiceError;
use crate::favorites::FavoritesList;
use crate::models::{Favorite, Launch, Lookup, Payload, Rocket, RocketStats};

/// Owns all session state and serves every user-facing operation.
///
/// Each operation either answers from memory or awaits exactly one remote call.
pub struct LaunchService<S> {
    source: S,
    cache: CacheStore,
    favorites: FavoritesList,
}

impl<S: LaunchSource> LaunchService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: CacheStore::new(),
            favorites: FavoritesList::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    // ===== Launches =====

    /// Launches dated in `year` (UTC), fetched at most once per year.
    ///
    /// The remote filter is advisory, so every returned record is re-checked
    /// against its parsed date. An empty result is cached like any other.
    pub async fn find_launches_by_year(&mut self, year: i32) -> Result<&[Launch], ServiceError> {
        let source = &self.source;
        let launches = self
            .cache
            .launches
            .get_or_fetch(year, || async move {
                let filter = year.to_string();
                let fetched = source.fetch_launches(&filter).await?;
                let received = fetched.len();
                let matching: Vec<Launch> = fetched
                    .into_iter()
                    .filter(|launch| launch.year() == Some(year))
                    .collect();
                debug!(year, received, kept = matching.len(), "Filtered launches by year");
                Ok::<_, ServiceError>(matching)
            })
            .await?;
        Ok(launches.as_slice())
    }

    /// Launch id of the first cached launch whose mission name matches, ignoring case.
    ///
    /// Years are scanned in ascending order, so on a tie the earliest cached
    /// year wins. Never fetches.
    pub fn resolve_launch_id_by_mission_name(&self, mission_name: &str) -> Lookup<String> {
        if self.cache.launches.is_empty() {
            return Lookup::NotYetFetched;
        }

        let wanted = mission_name.trim().to_lowercase();
        self.cache
            .cached_launches()
            .find(|launch| launch.mission_name.to_lowercase() == wanted)
            .map(|launch| Lookup::Value(launch.id.clone()))
            .unwrap_or(Lookup::Empty)
    }

    /// A cached launch by identifier. Never fetches.
    pub fn cached_launch(&self, launch_id: &str) -> Option<&Launch> {
        self.cache.cached_launches().find(|launch| launch.id == launch_id)
    }

    // ===== Payloads =====

    /// Payload carried by `launch_id`, fetched at most once per launch.
    ///
    /// `None` (also cached) means the API returned no payload for the launch.
    pub async fn find_payload_for_launch(
        &mut self,
        launch_id: &str,
    ) -> Result<Option<&Payload>, ServiceError> {
        let source = &self.source;
        let payload = self
            .cache
            .payloads
            .get_or_fetch(launch_id.to_string(), || async move {
                let fetched = source.fetch_payloads(launch_id).await?;
                let received = fetched.len();
                let payload = fetched.into_iter().find(|p| p.belongs_to(launch_id));
                debug!(launch_id, received, found = payload.is_some(), "Filtered payloads by launch");
                Ok::<_, ServiceError>(payload)
            })
            .await?;
        Ok(payload.as_ref())
    }

    // ===== Rockets =====

    /// Rocket with exactly this name. The catalog is fetched once per session.
    pub async fn resolve_rocket(&mut self, name: &str) -> Result<Option<&Rocket>, ServiceError> {
        let source = &self.source;
        let catalog = self
            .cache
            .rockets
            .get_or_fetch(|| async move { Ok::<_, ServiceError>(source.fetch_rockets().await?) })
            .await?;
        Ok(catalog.iter().find(|rocket| rocket.name == name))
    }

    /// A rocket from the catalog by identifier, if the catalog has been fetched.
    pub fn cached_rocket(&self, rocket_id: &str) -> Option<&Rocket> {
        self.cache.rockets.get()?.iter().find(|rocket| rocket.id == rocket_id)
    }

    /// Success tally for `rocket` across every cached year. Never fetches launches.
    pub fn compute_rocket_stats(&self, rocket: &Rocket) -> Result<RocketStats, ServiceError> {
        if self.cache.launches.is_empty() {
            return Err(ServiceError::NoCachedLaunches);
        }

        let stats = RocketStats::tally(rocket, self.cache.cached_launches());
        if !stats.has_launches() {
            return Err(ServiceError::NoLaunchesForRocket(rocket.name.clone()));
        }

        debug!(
            rocket = %rocket.name,
            total = stats.total_launches,
            successful = stats.successful_launches,
            unknown = stats.unknown_outcome,
            "Computed rocket statistics"
        );
        Ok(stats)
    }

    /// Resolve a rocket by name, then compute its statistics.
    pub async fn rocket_stats(&mut self, name: &str) -> Result<RocketStats, ServiceError> {
        // Checked first so an empty launch cache costs no catalog fetch
        if self.cache.launches.is_empty() {
            return Err(ServiceError::NoCachedLaunches);
        }

        let rocket = self
            .resolve_rocket(name)
            .await?
            .cloned()
            .ok_or_else(|| ServiceError::RocketNotFound(name.to_string()))?;
        self.compute_rocket_stats(&rocket)
    }

    // ===== Favorites =====

    /// Bookmark a launch, stamped with the current local time.
    pub fn add_favorite(&mut self, launch: Launch) -> Result<&Favorite, ServiceError> {
        self.favorites.add(launch, Local::now())
    }

    /// Favorites, oldest first.
    pub fn list_favorites(&self) -> Vec<&Favorite> {
        self.favorites.sorted()
    }

    pub fn remove_favorite(&mut self, launch_id: &str) -> Result<Favorite, ServiceError> {
        self.favorites.remove(launch_id)
    }

    // ===== Cache =====

    pub fn cache_summary(&self) -> CacheSummary {
        self.cache.summary()
    }
}

// ============================================================================
// Tests
// ============================================================================
