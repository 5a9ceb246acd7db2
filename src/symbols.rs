//! Unit symbol loading from schema fragments
//!
//! Symbols ("atm", "m²", ...) live outside the host unit model, in a
//! directory of JSON schema fragments with one symbol constant set per file:
//!
//! ```json
//! {
//!   "typeid": "spec.symbol:atm-1.0.1",
//!   "constants": [
//!     { "id": "unit", "typedValue": { "typeid": "spec:atmospheres-1.0.1" } },
//!     { "id": "text", "value": "atm" }
//!   ]
//! }
//! ```
//!
//! Symbols are cosmetic, so nothing here can fail the run: a missing
//! directory yields an empty mapping, and malformed fragments are skipped
//! one by one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Read-through cache mapping unit type ids to display symbols
///
/// Built once per run and immutable thereafter.
#[derive(Debug, Default)]
pub struct SymbolLoader {
    cache: HashMap<String, String>,
}

/// Default schema root when neither --schemas nor UNIT_LISTER_SCHEMAS is set
pub fn default_schema_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("unit-lister")
        .join("schemas")
}

impl SymbolLoader {
    /// Load symbol fragments from `<schema_root>/unit/symbol`.
    ///
    /// Never fails; an absent directory is the degraded-but-functional mode
    /// where every symbol resolves to the empty string.
    pub fn load(schema_root: &Path) -> Self {
        let symbol_dir = schema_root.join("unit").join("symbol");
        let mut cache = HashMap::new();

        if !symbol_dir.is_dir() {
            return SymbolLoader { cache };
        }

        for entry in WalkDir::new(&symbol_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("json")
            {
                continue;
            }
            if let Some((unit_type_id, symbol)) = parse_fragment(path) {
                cache.insert(unit_type_id, symbol);
            }
        }

        SymbolLoader { cache }
    }

    /// Resolve a symbol, or the empty string when the id is unmapped.
    pub fn symbol(&self, unit_type_id: &str) -> &str {
        self.cache
            .get(unit_type_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of symbols in the cache.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Extract the (unit type id, symbol text) pair from one fragment file.
///
/// A fragment is usable only when its `constants` array has both a `unit`
/// entry and a `text` entry; anything else is skipped.
fn parse_fragment(path: &Path) -> Option<(String, String)> {
    let content = std::fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&content).ok()?;
    let constants = value.get("constants")?.as_array()?;

    let mut unit_type_id: Option<String> = None;
    let mut symbol_text: Option<String> = None;

    for constant in constants {
        match constant.get("id").and_then(|id| id.as_str()) {
            Some("unit") => {
                unit_type_id = constant
                    .get("typedValue")
                    .and_then(|tv| tv.get("typeid"))
                    .and_then(|t| t.as_str())
                    .map(str::to_string);
            }
            Some("text") => {
                symbol_text = constant
                    .get("value")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);
            }
            _ => {}
        }
    }

    match (unit_type_id, symbol_text) {
        (Some(id), Some(text)) if !id.is_empty() && !text.is_empty() => Some((id, text)),
        _ => None,
    }
}
