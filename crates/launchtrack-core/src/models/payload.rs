use serde::{Deserialize, Serialize};

/// Cargo carried by a single launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub payload_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_mass")]
    pub mass_kg: Option<f64>,
    #[serde(default)]
    pub orbit: Option<String>,
    /// Identifier of the owning launch.
    #[serde(default)]
    pub launch: Option<String>,
}

impl Payload {
    pub fn belongs_to(&self, launch_id: &str) -> bool {
        self.launch.as_deref() == Some(launch_id)
    }
}

// Mass arrives as a number, null, or occasionally a numeric string
fn deserialize_mass<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct MassVisitor;

    impl<'de> de::Visitor<'de> for MassVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number, numeric string, or null")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.trim().parse::<f64>().ok())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(MassVisitor)
}
