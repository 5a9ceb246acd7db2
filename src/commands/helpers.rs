//! Shared helpers for commands that run the collection pipeline

use std::path::Path;

use crate::collector::UnitCollector;
use crate::domain::UnitsReport;
use crate::error::Result;
use crate::host::ModelHost;
use crate::symbols::{default_schema_root, SymbolLoader};

/// Open the model host, load symbols, and run one full collection.
///
/// Every model-backed command goes through here; each invocation builds a
/// fresh report and a fresh symbol cache.
pub fn collect_report(model: &Path, schemas: Option<&Path>, verbose: bool) -> Result<UnitsReport> {
    let host = ModelHost::from_file(model)?;

    let schema_root = schemas
        .map(Path::to_path_buf)
        .unwrap_or_else(default_schema_root);
    let symbols = SymbolLoader::load(&schema_root);
    if verbose && symbols.is_empty() {
        eprintln!(
            "No unit symbol fragments under {}; symbols will be empty",
            schema_root.display()
        );
    }

    UnitCollector::new(symbols)
        .verbose(verbose)
        .collect_all(&host)
}
