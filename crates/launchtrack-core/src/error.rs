use thiserror::Error;

use crate::api::ApiError;

/// Conditions signaled by `LaunchService` operations.
///
/// None of these are fatal; the caller may retry the same or another operation.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to fetch data from the launch API: {0}")]
    RemoteFetchFailed(#[from] ApiError),

    #[error("No launches cached yet - search launches by year first")]
    NoCachedLaunches,

    #[error("No cached launches found for rocket '{0}'")]
    NoLaunchesForRocket(String),

    #[error("Rocket '{0}' not found")]
    RocketNotFound(String),

    #[error("Launch {0} is already in favorites")]
    DuplicateFavorite(String),

    #[error("Launch {0} not found in favorites")]
    FavoriteNotFound(String),

    #[error(
        "Invalid year '{0}' - enter a four-digit year from {first} onwards",
        first = crate::models::FIRST_LAUNCH_YEAR
    )]
    InvalidYear(String),
}
