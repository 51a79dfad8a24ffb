use chrono::{DateTime, Local, SubsecRound};
use serde::{Deserialize, Serialize};

use super::Launch;

/// Display format for favorite timestamps.
const ADDED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A bookmarked launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub launch: Launch,
    pub added_at: DateTime<Local>,
}

impl Favorite {
    /// Bookmark a launch. Timestamps are kept at whole-second precision.
    pub fn new(launch: Launch, added_at: DateTime<Local>) -> Self {
        Self {
            launch,
            added_at: added_at.trunc_subsecs(0),
        }
    }

    pub fn launch_id(&self) -> &str {
        &self.launch.id
    }

    pub fn added_at_display(&self) -> String {
        self.added_at.format(ADDED_AT_FORMAT).to_string()
    }
}
