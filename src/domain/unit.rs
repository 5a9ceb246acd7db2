//! Unit record type
//!
//! A single measurement unit as resolved from the host, with its conversion
//! factors and optional display symbol. Identity is the host-assigned type id
//! alone; every other field is cosmetic as far as set membership goes.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A measurement unit belonging to a quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitData {
    #[serde(rename = "TypeId")]
    pub type_id: String,

    #[serde(rename = "DisplayName")]
    pub display_name: String,

    /// Factor produced by converting 1.0 from the host's internal
    /// representation to this unit; 0.0 when the host lookup failed.
    #[serde(rename = "ConversionFromInternal")]
    pub conversion_from_internal: f64,

    /// Factor produced by converting 1.0 to the host's internal
    /// representation; 0.0 when the host lookup failed.
    #[serde(rename = "ConversionToInternal")]
    pub conversion_to_internal: f64,

    /// Short display glyph (e.g. "atm"); empty when no schema fragment maps it.
    #[serde(rename = "UnitSymbol")]
    pub unit_symbol: String,

    #[serde(rename = "IsValidUnit")]
    pub is_valid_unit: bool,
}

impl UnitData {
    /// The stable identity key used for equality, hashing and dedup.
    pub fn key(&self) -> &str {
        &self.type_id
    }
}

// Equality and hashing go through key() only; two records with the same
// type id are the same unit regardless of other field differences.
impl PartialEq for UnitData {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for UnitData {}

impl Hash for UnitData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
