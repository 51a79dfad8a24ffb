use serde::Serialize;

use super::{Launch, LaunchOutcome, Rocket};

/// Launch tally for one rocket, derived from cached launches.
///
/// Launches with an unknown outcome are reported in `unknown_outcome` and
/// excluded from the other counts, so `successful + failed == total` holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocketStats {
    pub rocket: Rocket,
    pub total_launches: u32,
    pub successful_launches: u32,
    pub failed_launches: u32,
    pub unknown_outcome: u32,
    /// Floor-rounded percentage of decided launches.
    pub success_rate: u32,
}

impl RocketStats {
    /// Tally the launches flown by `rocket`. Launches of other rockets are ignored.
    pub fn tally<'a, I>(rocket: &Rocket, launches: I) -> Self
    where
        I: IntoIterator<Item = &'a Launch>,
    {
        let mut successful = 0;
        let mut failed = 0;
        let mut unknown = 0;

        for launch in launches.into_iter().filter(|l| l.rocket == rocket.id) {
            match launch.success {
                LaunchOutcome::Success => successful += 1,
                LaunchOutcome::Failure => failed += 1,
                LaunchOutcome::Unknown => unknown += 1,
            }
        }

        let total = successful + failed;
        Self {
            rocket: rocket.clone(),
            total_launches: total,
            successful_launches: successful,
            failed_launches: failed,
            unknown_outcome: unknown,
            success_rate: success_rate(successful, total),
        }
    }

    /// True when at least one scanned launch of the rocket has a decided outcome.
    pub fn has_launches(&self) -> bool {
        self.total_launches > 0
    }
}

fn success_rate(successful: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        // Integer division floors
        (100 * u64::from(successful) / u64::from(total)) as u32
    }
}
