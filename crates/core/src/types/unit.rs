//! Measurement units for list items.

use serde::{Deserialize, Serialize};

/// How an item's quantity and unit price are measured.
///
/// Wire values keep the Portuguese strings used in persisted collections and
/// seed files (`"unidade"` / `"kg"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitType {
    /// Priced per unit.
    #[default]
    #[serde(rename = "unidade")]
    Unit,
    /// Priced per kilogram.
    #[serde(rename = "kg")]
    Weight,
}

impl UnitType {
    /// Short label shown next to quantities (e.g. `5 kg`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unit => "unidade",
            Self::Weight => "kg",
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for UnitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unidade" | "unit" => Ok(Self::Unit),
            "kg" | "weight" => Ok(Self::Weight),
            _ => Err(format!("invalid unit type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(serde_json::to_string(&UnitType::Unit).unwrap(), "\"unidade\"");
        assert_eq!(serde_json::to_string(&UnitType::Weight).unwrap(), "\"kg\"");
        let parsed: UnitType = serde_json::from_str("\"kg\"").unwrap();
        assert_eq!(parsed, UnitType::Weight);
    }
}
