//! Export command implementation
//!
//! Runs one collection and writes the result to the requested JSON and/or
//! CSV targets, overwriting existing files.

use std::path::Path;

use console::Style;

use crate::cli::ExportArgs;
use crate::commands::helpers;
use crate::error::{ListerError, Result};
use crate::export;

/// Run export command
pub fn run(model: &Path, schemas: Option<&Path>, verbose: bool, args: ExportArgs) -> Result<()> {
    if args.json.is_none() && args.csv.is_none() {
        return Err(ListerError::NothingToExport);
    }

    let report = helpers::collect_report(model, schemas, verbose)?;

    if let Some(ref path) = args.json {
        export::write_json(&report, path)?;
        print_success(&report, path);
    }

    if let Some(ref path) = args.csv {
        export::write_csv(&report, path)?;
        print_success(&report, path);
    }

    if report.has_issues() {
        println!(
            "{}",
            Style::new().dim().apply_to(format!(
                "Collection finished with {} errors and {} warnings; run 'unit-lister issues' for details.",
                report.errors.len(),
                report.warnings.len()
            ))
        );
    }

    Ok(())
}

fn print_success(report: &crate::domain::UnitsReport, path: &Path) {
    println!(
        "Exported {} quantities with {} units to: {}",
        Style::new().bold().apply_to(report.total_quantities),
        Style::new().bold().apply_to(report.total_units),
        path.display()
    );
}
