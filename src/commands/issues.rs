//! Issues command implementation
//!
//! Prints the errors, warnings and counters accumulated during collection
//! as one copy-pasteable block.

use std::path::Path;

use console::Style;

use crate::commands::helpers;
use crate::domain::UnitsReport;
use crate::error::Result;

/// Run issues command
pub fn run(model: &Path, schemas: Option<&Path>, verbose: bool) -> Result<()> {
    let report = helpers::collect_report(model, schemas, verbose)?;
    display_issues(&report);
    Ok(())
}

fn display_issues(report: &UnitsReport) {
    println!(
        "=== Unit Lister Issues ({}) ===",
        report.export_date.format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!("Errors: {}", report.errors.len()))
    );
    for error in &report.errors {
        println!("  - {}", error);
    }
    println!();

    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!("Warnings: {}", report.warnings.len()))
    );
    for warning in &report.warnings {
        println!("  - {}", warning);
    }
    println!();

    println!("{}", Style::new().bold().apply_to("Summary:"));
    println!(
        "  - Duplicate quantities skipped: {}",
        report.duplicate_quantities_skipped
    );
    println!("  - Failed quantities: {}", report.failed_quantities);
    println!("  - Failed units: {}", report.failed_units);
}
