//! List command implementation
//!
//! Displays collection statistics and the quantities sorted alphabetically
//! by display name, then by discipline, so related entries (e.g. every
//! "Temperature") end up together. The collected report itself keeps host
//! enumeration order; sorting happens only here.

use std::path::Path;

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers;
use crate::domain::{QuantityData, UnitsReport};
use crate::error::Result;

/// Run list command
pub fn run(model: &Path, schemas: Option<&Path>, verbose: bool, args: ListArgs) -> Result<()> {
    let report = helpers::collect_report(model, schemas, verbose)?;
    display_report(&report, args.detailed);
    Ok(())
}

fn display_report(report: &UnitsReport, detailed: bool) {
    println!(
        "Quantities: {}   Units: {}   (host version {})",
        Style::new().bold().apply_to(report.total_quantities),
        Style::new().bold().apply_to(report.total_units),
        report.revit_version
    );

    if !report.errors.is_empty() {
        println!(
            "{}",
            Style::new()
                .red()
                .apply_to(format!("Errors: {}", report.errors.len()))
        );
    }
    if !report.warnings.is_empty() {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to(format!("Warnings: {}", report.warnings.len()))
        );
    }

    if report.quantities.is_empty() {
        println!();
        println!("No quantities collected.");
        return;
    }

    println!();
    for quantity in report.sorted_quantities() {
        display_quantity(quantity, detailed);
    }

    if report.has_issues() {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("Run 'unit-lister issues' for error and warning details.")
        );
    }
}

fn display_quantity(quantity: &QuantityData, detailed: bool) {
    let unit_count = quantity.unit_count();
    let unit_label = if unit_count == 1 { "unit" } else { "units" };
    println!(
        "  {} ({})",
        Style::new().bold().yellow().apply_to(&quantity.display_name),
        quantity.discipline_name
    );
    println!(
        "    {} {}",
        Style::new().bold().apply_to("TypeId:"),
        quantity.type_id
    );
    if !quantity.type_catalog_string.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Type catalog:"),
            quantity.type_catalog_string
        );
    }
    println!(
        "    {} {} {}",
        Style::new().bold().apply_to("Units:"),
        unit_count,
        unit_label
    );

    if detailed {
        for unit in &quantity.units {
            let symbol = if unit.unit_symbol.is_empty() {
                String::new()
            } else {
                format!(" [{}]", unit.unit_symbol)
            };
            println!(
                "      {}{}",
                Style::new().dim().apply_to(&unit.display_name),
                symbol
            );
        }
    }
    println!();
}
