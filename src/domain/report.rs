//! Aggregated collection result
//!
//! [`UnitsReport`] is built up incrementally during one collection run and
//! frozen once it is handed to a viewer or exporter. It owns its quantities
//! outright (which in turn own their units), carries ordered error/warning
//! lists, and keeps the counters the host-facing commands surface.
//!
//! Quantities are stored in host enumeration order; the alphabetical ordering
//! shown by the viewer commands is a presentation concern served by
//! [`UnitsReport::sorted_quantities`].

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::quantity::QuantityData;

/// Outcome of inserting a quantity into the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityInsert {
    Added,
    /// A quantity with the same type id was already present; the first
    /// record wins. `display_name_differs` is a diagnostic detail only.
    DuplicateSkipped { display_name_differs: bool },
}

/// Full result of one collection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsReport {
    #[serde(rename = "RevitVersion")]
    pub revit_version: String,

    #[serde(rename = "ExportDate")]
    pub export_date: DateTime<Local>,

    /// Derived; recomputed by [`UnitsReport::finalize`], never incremented.
    #[serde(rename = "TotalQuantities")]
    pub total_quantities: u32,

    /// Derived; recomputed by [`UnitsReport::finalize`], never incremented.
    #[serde(rename = "TotalUnits")]
    pub total_units: u32,

    /// Quantities unique by type id, in host enumeration order.
    #[serde(rename = "Quantities")]
    pub quantities: Vec<QuantityData>,

    #[serde(rename = "Errors")]
    pub errors: Vec<String>,

    #[serde(rename = "Warnings")]
    pub warnings: Vec<String>,

    #[serde(rename = "DuplicateQuantitiesSkipped")]
    pub duplicate_quantities_skipped: u32,

    #[serde(rename = "FailedUnits")]
    pub failed_units: u32,

    #[serde(rename = "FailedQuantities")]
    pub failed_quantities: u32,
}

impl UnitsReport {
    /// Create an empty report stamped with the host version and current time.
    pub fn new(revit_version: impl Into<String>) -> Self {
        UnitsReport {
            revit_version: revit_version.into(),
            export_date: Local::now(),
            total_quantities: 0,
            total_units: 0,
            quantities: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            duplicate_quantities_skipped: 0,
            failed_units: 0,
            failed_quantities: 0,
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record a quantity the host failed to resolve.
    pub fn record_quantity_failure(&mut self, message: impl Into<String>) {
        self.failed_quantities += 1;
        self.errors.push(message.into());
    }

    /// Record a unit the host failed to resolve.
    pub fn record_unit_failure(&mut self, message: impl Into<String>) {
        self.failed_units += 1;
        self.errors.push(message.into());
    }

    /// Insert a quantity, keeping the first record on a key collision.
    ///
    /// A collision is a no-op for the stored data: the duplicate counter is
    /// bumped and a warning recorded, and the existing record stays as-is.
    pub fn add_quantity(&mut self, quantity: QuantityData) -> QuantityInsert {
        if let Some(existing) = self.quantities.iter().find(|q| q.key() == quantity.key()) {
            let display_name_differs = existing.display_name != quantity.display_name;
            self.duplicate_quantities_skipped += 1;
            self.warnings.push(format!(
                "Duplicate quantity skipped: {} ({})",
                quantity.display_name, quantity.type_id
            ));
            return QuantityInsert::DuplicateSkipped {
                display_name_differs,
            };
        }
        self.quantities.push(quantity);
        QuantityInsert::Added
    }

    /// Recompute the derived totals from the stored quantities.
    pub fn finalize(&mut self) {
        self.total_quantities = self.quantities.len() as u32;
        self.total_units = self
            .quantities
            .iter()
            .map(|q| q.unit_count() as u32)
            .sum();
    }

    /// Quantities sorted for presentation: display name, then discipline.
    pub fn sorted_quantities(&self) -> Vec<&QuantityData> {
        let mut sorted: Vec<&QuantityData> = self.quantities.iter().collect();
        sorted.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.discipline_name.cmp(&b.discipline_name))
        });
        sorted
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}
