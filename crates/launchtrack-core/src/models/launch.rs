use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Earliest year present in the launch data set.
pub const FIRST_LAUNCH_YEAR: i32 = 2006;

/// Outcome of a launch as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchOutcome {
    Success,
    Failure,
    #[default]
    Unknown,
}

impl std::fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchOutcome::Success => write!(f, "Success"),
            LaunchOutcome::Failure => write!(f, "Failure"),
            LaunchOutcome::Unknown => write!(f, "Unknown"),
        }
    }
}

impl LaunchOutcome {
    /// Wire form of the outcome: `Some(true)`, `Some(false)`, or `None` when undecided.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            LaunchOutcome::Success => Some(true),
            LaunchOutcome::Failure => Some(false),
            LaunchOutcome::Unknown => None,
        }
    }
}

impl Serialize for LaunchOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_bool().serialize(serializer)
    }
}

// The API reports `success` as a bool or null; older dumps carry "true"/"false" strings.
impl<'de> Deserialize<'de> for LaunchOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de;

        struct OutcomeVisitor;

        impl<'de> de::Visitor<'de> for OutcomeVisitor {
            type Value = LaunchOutcome;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a boolean, null, or string 'true'/'false'")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
                Ok(if v {
                    LaunchOutcome::Success
                } else {
                    LaunchOutcome::Failure
                })
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
                match v.to_ascii_lowercase().as_str() {
                    "true" => Ok(LaunchOutcome::Success),
                    "false" => Ok(LaunchOutcome::Failure),
                    _ => Ok(LaunchOutcome::Unknown),
                }
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(LaunchOutcome::Unknown)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(LaunchOutcome::Unknown)
            }
        }

        deserializer.deserialize_any(OutcomeVisitor)
    }
}

/// A single launch record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    #[serde(rename = "name")]
    pub mission_name: String,
    pub date_utc: String,
    /// Rocket identifier, joined against `Rocket::id`.
    pub rocket: String,
    #[serde(default)]
    pub success: LaunchOutcome,
    #[serde(rename = "launchpad", default)]
    pub launch_site: Option<String>,
    pub id: String,
}

impl Launch {
    /// UTC year of the launch, or `None` if `date_utc` is not ISO-8601.
    pub fn year(&self) -> Option<i32> {
        DateTime::parse_from_rfc3339(&self.date_utc)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).year())
    }
}

/// Validated launch search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCriteria {
    pub year: i32,
}

impl SearchCriteria {
    /// Parse a year typed by the user.
    pub fn parse(input: &str) -> Result<Self, ServiceError> {
        let trimmed = input.trim();
        if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ServiceError::InvalidYear(trimmed.to_string()));
        }

        let year: i32 = trimmed
            .parse()
            .map_err(|_| ServiceError::InvalidYear(trimmed.to_string()))?;

        if year < FIRST_LAUNCH_YEAR {
            return Err(ServiceError::InvalidYear(trimmed.to_string()));
        }

        Ok(Self { year })
    }
}
