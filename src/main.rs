//! unit-lister - CAD unit model explorer
//!
//! A command line tool that enumerates measurement quantities and their valid
//! units from a host unit model, resolves display labels and unit symbols,
//! deduplicates by type id, and exports the result as JSON or CSV.

use clap::Parser;
use std::path::Path;

mod cli;
mod collector;
mod commands;
mod domain;
mod error;
mod export;
mod host;
mod symbols;

use cli::{Cli, Commands};
use error::{ListerError, Result};

/// Check that the unit model snapshot exists
fn check_model_exists(model: &Path) -> Result<()> {
    if !model.exists() {
        return Err(ListerError::ModelNotFound {
            path: model.display().to_string(),
        });
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Check the model file for commands that collect from it
    // Version and completions commands run without one
    let needs_model = matches!(
        cli.command,
        Commands::Export(_) | Commands::List(_) | Commands::Show(_) | Commands::Issues
    );

    if needs_model {
        if let Err(e) = check_model_exists(&cli.model) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let schemas = cli.schemas.as_deref();
    let result = match cli.command {
        Commands::Export(args) => commands::export::run(&cli.model, schemas, cli.verbose, args),
        Commands::List(args) => commands::list::run(&cli.model, schemas, cli.verbose, args),
        Commands::Show(args) => commands::show::run(&cli.model, schemas, cli.verbose, args),
        Commands::Issues => commands::issues::run(&cli.model, schemas, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
