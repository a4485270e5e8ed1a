//! Adapter temperature rendering.

use serde::{Deserialize, Serialize};

/// A chat adapter's temperature-like setting as it appears in result records
/// (Value Object)
///
/// Token-authenticated backends expose a sampling scalar, session-backed
/// backends expose a named conversation style, and some expose nothing at
/// all. Serialized untagged, so the `temperature` field of a record is a
/// JSON number, string, or null depending on the adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Temperature {
    /// Numeric sampling temperature.
    Scalar(f64),
    /// Named style such as "Balanced" or "Creative".
    Label(String),
    /// The adapter has no temperature concept.
    Unset,
}

impl Temperature {
    pub fn scalar(value: f64) -> Self {
        Temperature::Scalar(value)
    }

    pub fn label(value: impl Into<String>) -> Self {
        Temperature::Label(value.into())
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Temperature::Unset
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Temperature::Scalar(value)
    }
}

impl From<&str> for Temperature {
    fn from(value: &str) -> Self {
        Temperature::Label(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_serializes_as_number() {
        let json = serde_json::to_string(&Temperature::Scalar(0.7)).unwrap();
        assert_eq!(json, "0.7");
    }

    #[test]
    fn test_label_serializes_as_string() {
        let json = serde_json::to_string(&Temperature::label("Balanced")).unwrap();
        assert_eq!(json, "\"Balanced\"");
    }

    #[test]
    fn test_unset_serializes_as_null() {
        let json = serde_json::to_string(&Temperature::Unset).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_roundtrip() {
        for temp in [
            Temperature::Scalar(1.0),
            Temperature::label("Precise"),
            Temperature::Unset,
        ] {
            let json = serde_json::to_string(&temp).unwrap();
            let back: Temperature = serde_json::from_str(&json).unwrap();
            assert_eq!(back, temp);
        }
    }
}
