//! File-backed host implementation
//!
//! [`ModelHost`] serves the [`UnitHost`] trait from a unit model snapshot: a
//! JSON file with a version string, a discipline table, a unit table, and the
//! quantity list referencing units by type id. Dangling references and absent
//! conversion factors surface as `HostError`s on the corresponding calls,
//! exactly like a live host refusing a lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{HostError, HostResult, UnitHost};
use crate::error::{ListerError, Result};

/// A unit entry in the model file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelUnit {
    pub type_id: String,
    pub display_name: String,
    #[serde(default = "default_true")]
    pub is_unit: bool,
    /// Factor applied when converting from internal units; absent means the
    /// host cannot convert in this direction.
    #[serde(default)]
    pub factor_from_internal: Option<f64>,
    #[serde(default)]
    pub factor_to_internal: Option<f64>,
}

/// A quantity entry in the model file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelQuantity {
    pub type_id: String,
    pub display_name: String,
    #[serde(default)]
    pub discipline_type_id: Option<String>,
    #[serde(default)]
    pub type_catalog_string: Option<String>,
    #[serde(default)]
    pub unit_type_ids: Vec<String>,
}

/// A discipline entry in the model file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDiscipline {
    pub type_id: String,
    pub name: String,
}

/// On-disk unit model snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitModel {
    pub version: String,
    #[serde(default)]
    pub disciplines: Vec<ModelDiscipline>,
    #[serde(default)]
    pub units: Vec<ModelUnit>,
    #[serde(default)]
    pub quantities: Vec<ModelQuantity>,
}

fn default_true() -> bool {
    true
}

/// Host implementation backed by a [`UnitModel`]
#[derive(Debug)]
pub struct ModelHost {
    version: String,
    /// Quantity ids in file order; repeated ids are preserved so the
    /// collector sees them again, just like a host enumerating duplicates.
    quantity_order: Vec<String>,
    quantities: HashMap<String, ModelQuantity>,
    units: HashMap<String, ModelUnit>,
    disciplines: HashMap<String, String>,
}

impl ModelHost {
    /// Load a unit model snapshot from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ListerError::ModelNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ListerError::ModelReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let model: UnitModel =
            serde_json::from_str(&content).map_err(|e| ListerError::ModelParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::from_model(model))
    }

    pub fn from_model(model: UnitModel) -> Self {
        let quantity_order: Vec<String> =
            model.quantities.iter().map(|q| q.type_id.clone()).collect();
        // first occurrence wins when a file repeats a quantity id
        let mut quantities = HashMap::new();
        for q in model.quantities {
            quantities.entry(q.type_id.clone()).or_insert(q);
        }
        let units = model
            .units
            .into_iter()
            .map(|u| (u.type_id.clone(), u))
            .collect();
        let disciplines = model
            .disciplines
            .into_iter()
            .map(|d| (d.type_id, d.name))
            .collect();

        ModelHost {
            version: model.version,
            quantity_order,
            quantities,
            units,
            disciplines,
        }
    }

    fn quantity(&self, quantity_id: &str) -> HostResult<&ModelQuantity> {
        self.quantities
            .get(quantity_id)
            .ok_or_else(|| HostError::new(format!("unknown quantity type id: {}", quantity_id)))
    }

    fn unit(&self, unit_id: &str) -> HostResult<&ModelUnit> {
        self.units
            .get(unit_id)
            .ok_or_else(|| HostError::new(format!("unknown unit type id: {}", unit_id)))
    }
}

impl UnitHost for ModelHost {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn measurable_quantities(&self) -> HostResult<Vec<String>> {
        Ok(self.quantity_order.clone())
    }

    fn discipline(&self, quantity_id: &str) -> HostResult<Option<String>> {
        Ok(self.quantity(quantity_id)?.discipline_type_id.clone())
    }

    fn discipline_label(&self, discipline_id: &str) -> HostResult<String> {
        self.disciplines
            .get(discipline_id)
            .cloned()
            .ok_or_else(|| HostError::new(format!("unknown discipline type id: {}", discipline_id)))
    }

    fn quantity_label(&self, quantity_id: &str) -> HostResult<String> {
        Ok(self.quantity(quantity_id)?.display_name.clone())
    }

    fn type_catalog_string(&self, quantity_id: &str) -> HostResult<Option<String>> {
        Ok(self.quantity(quantity_id)?.type_catalog_string.clone())
    }

    fn valid_units(&self, quantity_id: &str) -> HostResult<Vec<String>> {
        Ok(self.quantity(quantity_id)?.unit_type_ids.clone())
    }

    fn unit_label(&self, unit_id: &str) -> HostResult<String> {
        Ok(self.unit(unit_id)?.display_name.clone())
    }

    fn is_unit(&self, unit_id: &str) -> HostResult<bool> {
        Ok(self.unit(unit_id)?.is_unit)
    }

    fn convert_from_internal(&self, value: f64, unit_id: &str) -> HostResult<f64> {
        let unit = self.unit(unit_id)?;
        let factor = unit.factor_from_internal.ok_or_else(|| {
            HostError::new(format!("no conversion from internal units for {}", unit_id))
        })?;
        Ok(value * factor)
    }

    fn convert_to_internal(&self, value: f64, unit_id: &str) -> HostResult<f64> {
        let unit = self.unit(unit_id)?;
        let factor = unit.factor_to_internal.ok_or_else(|| {
            HostError::new(format!("no conversion to internal units for {}", unit_id))
        })?;
        Ok(value * factor)
    }
}
