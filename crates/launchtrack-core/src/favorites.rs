//! The user's bookmarked launches.

use chrono::{DateTime, Local};

use crate::error::ServiceError;
use crate::models::{Favorite, Launch};

/// Ordered list of favorites, at most one per launch identifier.
///
/// Add and remove are linear scans; the list is a personal one.
#[derive(Debug, Default)]
pub struct FavoritesList {
    entries: Vec<Favorite>,
}

impl FavoritesList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, launch_id: &str) -> bool {
        self.entries.iter().any(|f| f.launch_id() == launch_id)
    }

    /// Bookmark `launch`, stamped with `added_at`.
    pub fn add(&mut self, launch: Launch, added_at: DateTime<Local>) -> Result<&Favorite, ServiceError> {
        if self.contains(&launch.id) {
            return Err(ServiceError::DuplicateFavorite(launch.id));
        }
        self.entries.push(Favorite::new(launch, added_at));
        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    /// Remove and return the favorite for `launch_id`.
    pub fn remove(&mut self, launch_id: &str) -> Result<Favorite, ServiceError> {
        let index = self
            .entries
            .iter()
            .position(|f| f.launch_id() == launch_id)
            .ok_or_else(|| ServiceError::FavoriteNotFound(launch_id.to_string()))?;
        Ok(self.entries.remove(index))
    }

    /// Favorites oldest first; entries added in the same second keep insertion order.
    pub fn sorted(&self) -> Vec<&Favorite> {
        let mut sorted: Vec<&Favorite> = self.entries.iter().collect();
        sorted.sort_by_key(|f| f.added_at);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LaunchOutcome;
    use chrono::TimeZone;

    fn launch(id: &str, name: &str) -> Launch {
        Launch {
            mission_name: name.to_string(),
            date_utc: "2021-03-04T08:24:00.000Z".to_string(),
            rocket: "f9".to_string(),
            success: LaunchOutcome::Success,
            launch_site: None,
            id: id.to_string(),
        }
    }

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_add_and_contains() {
        let mut favorites = FavoritesList::new();
        assert!(favorites.is_empty());

        let added = favorites.add(launch("a", "Starlink-15"), at(10, 0)).unwrap();
        assert_eq!(added.launch.mission_name, "Starlink-15");
        assert!(favorites.contains("a"));
        assert!(!favorites.contains("b"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut favorites = FavoritesList::new();
        favorites.add(launch("a", "Crew-2"), at(10, 0)).unwrap();

        let second = favorites.add(launch("a", "Crew-2"), at(11, 0));
        assert!(matches!(second, Err(ServiceError::DuplicateFavorite(ref id)) if id == "a"));
        assert_eq!(favorites.len(), 1);
        // The original timestamp is kept
        assert_eq!(favorites.sorted()[0].added_at, at(10, 0));
    }

    #[test]
    fn test_sorted_by_added_at() {
        let mut favorites = FavoritesList::new();
        favorites.add(launch("t2", "Second"), at(12, 0)).unwrap();
        favorites.add(launch("t3", "Third"), at(13, 0)).unwrap();
        favorites.add(launch("t1", "First"), at(11, 0)).unwrap();

        let ids: Vec<&str> = favorites.sorted().iter().map(|f| f.launch_id()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_sorted_ties_keep_insertion_order() {
        let mut favorites = FavoritesList::new();
        favorites.add(launch("x", "X"), at(9, 0)).unwrap();
        favorites.add(launch("y", "Y"), at(9, 0)).unwrap();
        favorites.add(launch("w", "W"), at(8, 0)).unwrap();

        let ids: Vec<&str> = favorites.sorted().iter().map(|f| f.launch_id()).collect();
        assert_eq!(ids, vec!["w", "x", "y"]);
    }

    #[test]
    fn test_remove() {
        let mut favorites = FavoritesList::new();
        favorites.add(launch("a", "Crew-2"), at(10, 0)).unwrap();
        favorites.add(launch("b", "Transporter-2"), at(10, 5)).unwrap();

        let removed = favorites.remove("a").unwrap();
        assert_eq!(removed.launch.mission_name, "Crew-2");
        assert!(!favorites.contains("a"));
        assert_eq!(favorites.len(), 1);

        assert!(matches!(
            favorites.remove("a"),
            Err(ServiceError::FavoriteNotFound(ref id)) if id == "a"
        ));
    }
}
