//! Export of a finished report to JSON and CSV
//!
//! Both writers take a frozen [`UnitsReport`] and a destination path, and
//! overwrite whatever is there with a single whole-file write.

use std::path::Path;

use crate::domain::UnitsReport;
use crate::error::{ListerError, Result};

/// CSV header row; one data row per (quantity, unit) pair follows.
const CSV_HEADER: &str = "Quantity,Discipline,Quantity TypeId,Type Catalog String,Unit Name,\
Unit TypeId,Unit Symbol,Conversion Factor From Internal,Conversion Factor To Internal,Is Valid";

/// Write the full report as indented JSON.
pub fn write_json(report: &UnitsReport, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).map_err(|e| ListerError::ExportWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    write_file(path, &json)
}

/// Write the report flattened to CSV, one row per (quantity, unit) pair.
///
/// String fields are double-quoted. Embedded quotes and commas in display
/// names are not escaped and will produce malformed rows; callers get the
/// host's names verbatim.
pub fn write_csv(report: &UnitsReport, path: &Path) -> Result<()> {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for quantity in &report.quantities {
        for unit in &quantity.units {
            out.push_str(&format!(
                "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",{},{},{}\n",
                quantity.display_name,
                quantity.discipline_name,
                quantity.type_id,
                quantity.type_catalog_string,
                unit.display_name,
                unit.type_id,
                unit.unit_symbol,
                unit.conversion_from_internal,
                unit.conversion_to_internal,
                unit.is_valid_unit
            ));
        }
    }

    write_file(path, &out)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| ListerError::ExportWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
