use serde::{Deserialize, Serialize};

/// Identifier of the low Earth orbit entry in `payload_weights`.
const LEO_WEIGHT_ID: &str = "leo";

/// A vehicle type with its static specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stages: u32,
    #[serde(default)]
    pub boosters: u32,
    #[serde(default)]
    pub mass: Mass,
    #[serde(default)]
    pub payload_weights: Vec<PayloadWeight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Mass {
    #[serde(default)]
    pub kg: f64,
}

/// Payload capacity for one destination orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadWeight {
    pub id: String,
    pub name: String,
    pub kg: u64,
}

impl Rocket {
    /// Capacity to low Earth orbit, falling back to the first listed capacity.
    pub fn leo_capacity(&self) -> Option<&PayloadWeight> {
        self.payload_weights
            .iter()
            .find(|w| w.id == LEO_WEIGHT_ID)
            .or_else(|| self.payload_weights.first())
    }
}
