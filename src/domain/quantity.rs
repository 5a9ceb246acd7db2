//! Quantity record type
//!
//! A measurable quantity (Length, Force, ...) with its discipline, optional
//! type-catalog string and the owned set of valid units. Like [`UnitData`],
//! identity is the type id alone.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::unit::UnitData;

/// A measurement quantity with its associated units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityData {
    #[serde(rename = "TypeId")]
    pub type_id: String,

    #[serde(rename = "DisplayName")]
    pub display_name: String,

    /// Discipline id, or the literal "Unknown" when the host could not
    /// resolve one.
    #[serde(rename = "DisciplineTypeId")]
    pub discipline_type_id: String,

    #[serde(rename = "DisciplineName")]
    pub discipline_name: String,

    #[serde(rename = "TypeCatalogString")]
    pub type_catalog_string: String,

    /// Units unique by type id, in host enumeration order.
    #[serde(rename = "Units")]
    pub units: Vec<UnitData>,
}

impl QuantityData {
    /// The stable identity key used for equality, hashing and dedup.
    pub fn key(&self) -> &str {
        &self.type_id
    }

    /// Add a unit, keeping the first record on a key collision.
    ///
    /// Returns `false` when a unit with the same type id is already present;
    /// the existing record is never overwritten.
    pub fn add_unit(&mut self, unit: UnitData) -> bool {
        if self.units.iter().any(|u| u.key() == unit.key()) {
            return false;
        }
        self.units.push(unit);
        true
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}

impl PartialEq for QuantityData {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QuantityData {}

impl Hash for QuantityData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for QuantityData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} - {} units",
            self.display_name,
            self.discipline_name,
            self.type_id,
            self.units.len()
        )
    }
}
