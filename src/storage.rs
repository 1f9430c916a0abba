use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NuStorageError, Result};
use crate::finance_account::FinanceAccount;
use crate::inventory_list::InventoryRecordList;
use crate::model::Model;
use crate::models::{FinanceRecord, InventoryRecord, Person};
use crate::person_list::UniquePersonList;

/// On-disk shape of the whole model.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredData {
    #[serde(default)]
    inventory: Vec<InventoryRecord>,
    #[serde(default)]
    finance: Vec<FinanceRecord>,
    #[serde(default)]
    persons: Vec<Person>,
}

impl StoredData {
    fn from_model(model: &Model) -> Self {
        Self {
            inventory: model.inventory().records().to_vec(),
            finance: model.finance_account().records().to_vec(),
            persons: model.persons().persons().to_vec(),
        }
    }

    fn into_model(self) -> Result<Model> {
        validate_inventory(&self.inventory)?;

        let mut inventory = InventoryRecordList::new();
        inventory.set_inventory_records(self.inventory);

        let mut finance = FinanceAccount::new();
        finance.set_records(self.finance);

        let mut persons = UniquePersonList::new();
        persons
            .set_persons(self.persons)
            .map_err(|_| NuStorageError::Storage("the address book holds the same person twice".into()))?;

        Ok(Model::from_stores(finance, inventory, persons))
    }
}

fn validate_inventory(records: &[InventoryRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if record.item_name.trim().is_empty() {
            return Err(NuStorageError::Storage("inventory record with a blank item name".into()));
        }
        if !seen.insert(record) {
            return Err(NuStorageError::Storage(format!("duplicate inventory record: {record}")));
        }
    }
    Ok(())
}

/// Read a saved model. A missing file is not an error.
pub fn load(path: &Path) -> Result<Option<Model>> {
    if !path.exists() {
        log::info!("No data file at {}, starting empty", path.display());
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let data: StoredData = serde_json::from_str(&content)?;
    let model = data.into_model()?;
    log::info!(
        "Loaded {} inventory, {} finance, {} person records from {}",
        model.inventory().len(),
        model.finance_account().count(),
        model.persons().len(),
        path.display()
    );
    Ok(Some(model))
}

/// Write the model as pretty JSON, replacing the file in one step.
pub fn save(path: &Path, model: &Model) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(&StoredData::from_model(model))?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, format!("{json}\n"))?;
    std::fs::rename(&tmp, path)?;
    log::info!("Saved data to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::{item, person};
    use chrono::NaiveDate;

    fn sample_model() -> Model {
        let mut model = Model::new();
        model.add_inventory_record(item("Pen", 10));
        model.add_inventory_record(item("Ink", 2));
        let at = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
        model.add_finance_record(FinanceRecord::new(50.0, Some(at)));
        model.add_finance_record(FinanceRecord::new(-20.0, None));
        model.add_person(person("Alice")).unwrap();
        model
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("nustorage.json")).unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_restores_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nustorage.json");
        let model = sample_model();
        save(&path, &model).unwrap();
        let loaded = load(&path).unwrap().unwrap();
        assert_eq!(loaded, model);
        assert_eq!(loaded.finance_account().net_profit(), 30.0);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nustorage.json");
        std::fs::write(&path, "{\"inventory\": [").unwrap();
        assert!(matches!(load(&path), Err(NuStorageError::Json(_))));
    }

    #[test]
    fn test_invalid_person_field_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nustorage.json");
        let json = r#"{"persons": [{"name": "Al*ce", "phone": "123", "email": "a@b.c", "address": "x"}]}"#;
        std::fs::write(&path, json).unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_duplicate_inventory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nustorage.json");
        let data = StoredData {
            inventory: vec![item("Pen", 1), item("Pen", 1)],
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
        assert!(matches!(load(&path), Err(NuStorageError::Storage(_))));
    }

    #[test]
    fn test_sections_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nustorage.json");
        std::fs::write(&path, "{}").unwrap();
        let model = load(&path).unwrap().unwrap();
        assert_eq!(model, Model::new());
    }
}
