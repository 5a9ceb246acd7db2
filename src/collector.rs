//! Unit collection pipeline
//!
//! [`UnitCollector`] walks the host's unit model and assembles a
//! [`UnitsReport`]: every measurable quantity, every valid unit per quantity,
//! labels, symbols and conversion factors, deduplicated by type id.
//!
//! Failure isolation is the design rule here. A host call that fails is
//! caught at the smallest granularity it can be: a conversion failure costs
//! one factor (0.0 plus a warning), a unit failure costs one unit, a quantity
//! failure costs one quantity. The only fatal path is the initial quantity
//! enumeration; everything after that always yields a best-effort report.

use crate::domain::{QuantityData, QuantityInsert, UnitData, UnitsReport};
use crate::error::{ListerError, Result};
use crate::host::{HostResult, UnitHost};
use crate::symbols::SymbolLoader;

/// Placeholder used when the host cannot classify a quantity.
const UNKNOWN_DISCIPLINE: &str = "Unknown";

/// Collects unit data from a host into a [`UnitsReport`]
pub struct UnitCollector {
    symbols: SymbolLoader,
    verbose: bool,
}

impl UnitCollector {
    pub fn new(symbols: SymbolLoader) -> Self {
        UnitCollector {
            symbols,
            verbose: false,
        }
    }

    /// Enable stderr traces for diagnostic-only events.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Collect all quantities and units from the host.
    ///
    /// Only a failed quantity enumeration aborts the run; no partial report
    /// is produced in that case.
    pub fn collect_all(&self, host: &dyn UnitHost) -> Result<UnitsReport> {
        let mut report = UnitsReport::new(host.version());

        if self.verbose {
            eprintln!("Loaded {} unit symbols", self.symbols.len());
        }

        let quantity_ids =
            host.measurable_quantities()
                .map_err(|e| ListerError::HostUnavailable {
                    reason: e.to_string(),
                })?;

        for quantity_id in &quantity_ids {
            self.process_quantity(host, quantity_id, &mut report);
        }

        report.finalize();
        Ok(report)
    }

    /// Process one quantity; a host failure costs this quantity only.
    fn process_quantity(&self, host: &dyn UnitHost, quantity_id: &str, report: &mut UnitsReport) {
        if let Err(e) = self.try_process_quantity(host, quantity_id, report) {
            report.record_quantity_failure(format!(
                "Failed to process quantity {}: {}",
                quantity_id, e
            ));
        }
    }

    fn try_process_quantity(
        &self,
        host: &dyn UnitHost,
        quantity_id: &str,
        report: &mut UnitsReport,
    ) -> HostResult<()> {
        let (discipline_type_id, discipline_name) = resolve_discipline(host, quantity_id);

        let mut quantity = QuantityData {
            type_id: quantity_id.to_string(),
            display_name: host.quantity_label(quantity_id)?,
            discipline_type_id,
            discipline_name,
            type_catalog_string: host.type_catalog_string(quantity_id)?.unwrap_or_default(),
            units: Vec::new(),
        };

        for unit_id in &host.valid_units(quantity_id)? {
            self.process_unit(host, unit_id, &mut quantity, report);
        }

        // A quantity without any surviving unit is unexportable, not an error.
        if quantity.units.is_empty() {
            report.warn(format!(
                "Quantity '{}' has no valid units",
                quantity.display_name
            ));
            return Ok(());
        }

        let type_id = quantity.type_id.clone();
        let display_name = quantity.display_name.clone();
        if let QuantityInsert::DuplicateSkipped {
            display_name_differs,
        } = report.add_quantity(quantity)
        {
            if self.verbose && display_name_differs {
                eprintln!(
                    "Duplicate quantity {} disagrees on display name: '{}'",
                    type_id, display_name
                );
            }
        }
        Ok(())
    }

    /// Process one unit; a host failure costs this unit only.
    fn process_unit(
        &self,
        host: &dyn UnitHost,
        unit_id: &str,
        quantity: &mut QuantityData,
        report: &mut UnitsReport,
    ) {
        match self.try_build_unit(host, unit_id, report) {
            Ok(unit) => {
                let display_name = unit.display_name.clone();
                let type_id = unit.type_id.clone();
                if !quantity.add_unit(unit) {
                    report.warn(format!(
                        "Duplicate unit skipped: {} ({})",
                        display_name, type_id
                    ));
                }
            }
            Err(e) => {
                report.record_unit_failure(format!("Failed to process unit {}: {}", unit_id, e));
            }
        }
    }

    fn try_build_unit(
        &self,
        host: &dyn UnitHost,
        unit_id: &str,
        report: &mut UnitsReport,
    ) -> HostResult<UnitData> {
        let display_name = host.unit_label(unit_id)?;
        let is_valid_unit = host.is_unit(unit_id)?;
        let unit_symbol = self.symbols.symbol(unit_id).to_string();

        let conversion_from_internal = conversion_from_internal(host, unit_id, &display_name, report);
        let conversion_to_internal = conversion_to_internal(host, unit_id, &display_name, report);

        Ok(UnitData {
            type_id: unit_id.to_string(),
            display_name,
            conversion_from_internal,
            conversion_to_internal,
            unit_symbol,
            is_valid_unit,
        })
    }
}

/// Resolve discipline id and label; any failure or absence substitutes
/// "Unknown" for both and never aborts the quantity.
fn resolve_discipline(host: &dyn UnitHost, quantity_id: &str) -> (String, String) {
    match host.discipline(quantity_id) {
        Ok(Some(discipline_id)) => match host.discipline_label(&discipline_id) {
            Ok(name) => (discipline_id, name),
            Err(_) => (
                UNKNOWN_DISCIPLINE.to_string(),
                UNKNOWN_DISCIPLINE.to_string(),
            ),
        },
        Ok(None) | Err(_) => (
            UNKNOWN_DISCIPLINE.to_string(),
            UNKNOWN_DISCIPLINE.to_string(),
        ),
    }
}

/// Factor for converting 1.0 from internal units; 0.0 plus a warning when
/// the host refuses.
fn conversion_from_internal(
    host: &dyn UnitHost,
    unit_id: &str,
    display_name: &str,
    report: &mut UnitsReport,
) -> f64 {
    match host.convert_from_internal(1.0, unit_id) {
        Ok(value) => value,
        Err(e) => {
            report.warn(format!(
                "Failed to get conversion factor for unit '{}': {}",
                display_name, e
            ));
            0.0
        }
    }
}

/// Factor for converting 1.0 to internal units; same failure policy as
/// [`conversion_from_internal`].
fn conversion_to_internal(
    host: &dyn UnitHost,
    unit_id: &str,
    display_name: &str,
    report: &mut UnitsReport,
) -> f64 {
    match host.convert_to_internal(1.0, unit_id) {
        Ok(value) => value,
        Err(e) => {
            report.warn(format!(
                "Failed to get conversion factor to internal units for unit '{}': {}",
                display_name, e
            ));
            0.0
        }
    }
}
