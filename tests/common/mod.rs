//! Common test utilities for unit-lister integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A clean unit model snapshot: two quantities, three units, no anomalies.
pub const SAMPLE_MODEL: &str = r#"{
    "version": "2026",
    "disciplines": [
        {"typeId": "spec:discipline.common-1.0.0", "name": "Common"},
        {"typeId": "spec:discipline.hvac-1.0.0", "name": "HVAC"}
    ],
    "units": [
        {
            "typeId": "spec:meters-1.0.0",
            "displayName": "Meters",
            "factorFromInternal": 1.0,
            "factorToInternal": 1.0
        },
        {
            "typeId": "spec:feet-1.0.0",
            "displayName": "Feet",
            "factorFromInternal": 3.2808,
            "factorToInternal": 0.3048
        },
        {
            "typeId": "spec:celsius-1.0.0",
            "displayName": "Celsius",
            "factorFromInternal": 1.0,
            "factorToInternal": 1.0
        }
    ],
    "quantities": [
        {
            "typeId": "spec:temperature-1.0.0",
            "displayName": "Temperature",
            "disciplineTypeId": "spec:discipline.hvac-1.0.0",
            "unitTypeIds": ["spec:celsius-1.0.0"]
        },
        {
            "typeId": "spec:length-1.0.0",
            "displayName": "Length",
            "disciplineTypeId": "spec:discipline.common-1.0.0",
            "typeCatalogString": "LENGTH",
            "unitTypeIds": ["spec:meters-1.0.0", "spec:feet-1.0.0"]
        }
    ]
}"#;

/// A test workspace holding a model file and optional schema fragments
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a unit model snapshot and return its path
    pub fn write_model(&self, content: &str) -> PathBuf {
        self.write_file("units-model.json", content);
        self.path.join("units-model.json")
    }

    /// Write a symbol schema fragment under schemas/unit/symbol/
    pub fn write_symbol_fragment(&self, file_name: &str, unit_type_id: &str, text: &str) {
        let fragment = format!(
            r#"{{
                "typeid": "spec.symbol:{}-1.0.0",
                "constants": [
                    {{ "id": "unit", "typedValue": {{ "typeid": "{}" }} }},
                    {{ "id": "text", "value": "{}" }}
                ]
            }}"#,
            text, unit_type_id, text
        );
        self.write_file(&format!("schemas/unit/symbol/{}", file_name), &fragment);
    }

    /// Path to the schema root directory
    pub fn schemas_dir(&self) -> PathBuf {
        self.path.join("schemas")
    }
}
