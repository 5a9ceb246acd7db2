//! Show command implementation
//!
//! Displays every unit of one quantity, matched by type id or display name.
//! A display name can legitimately match several quantities (same name,
//! different disciplines); all matches are shown.

use std::path::Path;

use console::Style;

use crate::cli::ShowArgs;
use crate::commands::helpers;
use crate::domain::{QuantityData, UnitData};
use crate::error::{ListerError, Result};

/// Run show command
pub fn run(model: &Path, schemas: Option<&Path>, verbose: bool, args: ShowArgs) -> Result<()> {
    let report = helpers::collect_report(model, schemas, verbose)?;

    let matches: Vec<&QuantityData> = report
        .sorted_quantities()
        .into_iter()
        .filter(|q| matches_query(q, &args.quantity))
        .collect();

    if matches.is_empty() {
        return Err(ListerError::QuantityNotFound {
            query: args.quantity,
        });
    }

    for quantity in matches {
        display_quantity(quantity);
    }
    Ok(())
}

/// Exact type id match, or case-insensitive display name match.
fn matches_query(quantity: &QuantityData, query: &str) -> bool {
    quantity.type_id == query || quantity.display_name.eq_ignore_ascii_case(query)
}

fn display_quantity(quantity: &QuantityData) {
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
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Discipline TypeId:"),
        quantity.discipline_type_id
    );
    if !quantity.type_catalog_string.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Type catalog:"),
            quantity.type_catalog_string
        );
    }

    println!("    {}", Style::new().bold().apply_to("Units:"));
    for unit in &quantity.units {
        display_unit(unit);
    }
    println!();
}

fn display_unit(unit: &UnitData) {
    let symbol = if unit.unit_symbol.is_empty() {
        String::new()
    } else {
        format!(" [{}]", unit.unit_symbol)
    };
    let validity = if unit.is_valid_unit {
        String::new()
    } else {
        format!(" {}", Style::new().red().apply_to("(not a unit)"))
    };
    println!(
        "      {}{}{}",
        Style::new().cyan().apply_to(&unit.display_name),
        symbol,
        validity
    );
    println!("        {}", Style::new().dim().apply_to(&unit.type_id));
    println!(
        "        {} {}   {} {}",
        Style::new().bold().apply_to("from internal:"),
        unit.conversion_from_internal,
        Style::new().bold().apply_to("to internal:"),
        unit.conversion_to_internal
    );
}
