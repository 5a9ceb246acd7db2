//! Domain models for unit-lister
//!
//! Pure data records for quantities, units and the aggregated report.
//! Identity for quantities and units is the host-assigned type id alone;
//! see the `key()` functions, which equality, hashing and dedup all route
//! through.

pub mod quantity;
pub mod report;
pub mod unit;

pub use quantity::QuantityData;
pub use report::{QuantityInsert, UnitsReport};
pub use unit::UnitData;
