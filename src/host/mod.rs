//! Host unit API seam
//!
//! The CAD host's unit model is an external collaborator. This module
//! defines the trait the collector consumes, with per-call results so a
//! failing lookup can be handled at the smallest granularity, plus the
//! file-backed [`ModelHost`] implementation used by the CLI.

use thiserror::Error;

pub mod model;

pub use model::ModelHost;

/// Failure cause reported by a single host call
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        HostError {
            message: message.into(),
        }
    }
}

/// Result of a single host call
pub type HostResult<T> = std::result::Result<T, HostError>;

/// The host's unit model, as seen by the collector.
///
/// Identifiers are host-assigned, stable strings. Every lookup can fail
/// independently; the collector decides how far a failure propagates.
pub trait UnitHost {
    /// Host application version string.
    fn version(&self) -> String;

    /// All measurable quantity type ids, in the host's enumeration order.
    fn measurable_quantities(&self) -> HostResult<Vec<String>>;

    /// Discipline type id for a quantity; `None` when unclassified.
    fn discipline(&self, quantity_id: &str) -> HostResult<Option<String>>;

    /// Display label for a discipline type id.
    fn discipline_label(&self, discipline_id: &str) -> HostResult<String>;

    /// Display label for a quantity type id.
    fn quantity_label(&self, quantity_id: &str) -> HostResult<String>;

    /// Type-catalog string for a quantity; `None` when the host has none.
    fn type_catalog_string(&self, quantity_id: &str) -> HostResult<Option<String>>;

    /// Valid unit type ids for a quantity, in the host's enumeration order.
    fn valid_units(&self, quantity_id: &str) -> HostResult<Vec<String>>;

    /// Display label for a unit type id.
    fn unit_label(&self, unit_id: &str) -> HostResult<String>;

    /// Whether the id denotes a proper unit.
    fn is_unit(&self, unit_id: &str) -> HostResult<bool>;

    /// Convert `value` from the host's internal representation to `unit_id`.
    fn convert_from_internal(&self, value: f64, unit_id: &str) -> HostResult<f64>;

    /// Convert `value` from `unit_id` to the host's internal representation.
    fn convert_to_internal(&self, value: f64, unit_id: &str) -> HostResult<f64>;
}
