//! CLI definitions using clap derive API

use clap::builder::{styling::AnsiColor, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// unit-lister - CAD unit model explorer
///
/// Enumerate measurement quantities and their valid units from a host unit
/// model, with JSON/CSV export and a terminal viewer.
#[derive(Parser, Debug)]
#[command(
    name = "unit-lister",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "List measurement quantities and units from a CAD host unit model",
    long_about = "unit-lister enumerates measurement quantities (Length, Temperature, ...) and \
                  their valid units from a host unit model snapshot, resolves display labels and \
                  unit symbols, deduplicates by type id, and exports the result as JSON or CSV.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  unit-lister list --model units-model.json\n    \
                  unit-lister show Length\n    \
                  unit-lister export --json units.json --csv units.csv\n    \
                  unit-lister issues"
)]
pub struct Cli {
    /// Host unit model snapshot (JSON)
    #[arg(
        long,
        short = 'm',
        global = true,
        env = "UNIT_LISTER_MODEL",
        default_value = "units-model.json"
    )]
    pub model: PathBuf,

    /// Schema root directory holding unit symbol fragments
    #[arg(long, global = true, env = "UNIT_LISTER_SCHEMAS")]
    pub schemas: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export collected quantities and units to JSON and/or CSV
    Export(ExportArgs),

    /// List collected quantities with their unit counts
    List(ListArgs),

    /// Show one quantity's units in detail
    Show(ShowArgs),

    /// Show collection errors, warnings and counters
    Issues,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the export command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Export as JSON:\n    unit-lister export --json units.json\n\n\
                  Export as CSV:\n    unit-lister export --csv units.csv\n\n\
                  Export both:\n    unit-lister export --json units.json --csv units.csv")]
pub struct ExportArgs {
    /// Write the full report as indented JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the flattened quantity/unit rows as CSV to this path
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all quantities:\n    unit-lister list\n\n\
                  Include each quantity's units:\n    unit-lister list --detailed")]
pub struct ListArgs {
    /// Show each quantity's units as well
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show by display name:\n    unit-lister show Length\n\n\
                  Show by type id:\n    unit-lister show spec:length-2.0.0")]
pub struct ShowArgs {
    /// Quantity type id or display name (name match is case-insensitive)
    pub quantity: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    unit-lister completions --shell bash > ~/.bash_completion.d/unit-lister\n\n\
                  Generate zsh completions:\n    unit-lister completions --shell zsh > ~/.zfunc/_unit-lister")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_export() {
        let cli = Cli::try_parse_from(["unit-lister", "export", "--json", "out.json"]).unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.json, Some(PathBuf::from("out.json")));
                assert_eq!(args.csv, None);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_parsing_export_both_targets() {
        let cli = Cli::try_parse_from([
            "unit-lister",
            "export",
            "--json",
            "out.json",
            "--csv",
            "out.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert!(args.json.is_some());
                assert!(args.csv.is_some());
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["unit-lister", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => assert!(!args.detailed),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_list_detailed() {
        let cli = Cli::try_parse_from(["unit-lister", "list", "--detailed"]).unwrap();
        match cli.command {
            Commands::List(args) => assert!(args.detailed),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_show() {
        let cli = Cli::try_parse_from(["unit-lister", "show", "Length"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.quantity, "Length"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_parsing_issues() {
        let cli = Cli::try_parse_from(["unit-lister", "issues"]).unwrap();
        assert!(matches!(cli.command, Commands::Issues));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["unit-lister", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "unit-lister",
            "-v",
            "-m",
            "/tmp/model.json",
            "--schemas",
            "/tmp/schemas",
            "list",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.model, PathBuf::from("/tmp/model.json"));
        assert_eq!(cli.schemas, Some(PathBuf::from("/tmp/schemas")));
    }

    #[test]
    fn test_cli_model_defaults_to_conventional_name() {
        let cli = Cli::try_parse_from(["unit-lister", "list"]).unwrap();
        assert_eq!(cli.model, PathBuf::from("units-model.json"));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["unit-lister", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }
}
