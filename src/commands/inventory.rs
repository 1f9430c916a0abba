use super::CommandResult;
use crate::error::{NuStorageError, Result};
use crate::index::Index;
use crate::messages::{MESSAGE_INVALID_INVENTORY_INDEX, MESSAGE_NOT_EDITED};
use crate::model::{KeywordsPredicate, Model};
use crate::models::InventoryRecord;

pub const MESSAGE_DUPLICATE_INVENTORY: &str = "This inventory record already exists in the inventory";

/// Looks up `index` in the displayed inventory.
fn displayed_inventory_record(model: &Model, index: Index) -> Result<InventoryRecord> {
    model
        .filtered_inventory()
        .get(index.zero_based())
        .map(|r| (*r).clone())
        .ok_or_else(|| NuStorageError::Command(MESSAGE_INVALID_INVENTORY_INDEX.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddInventoryRecordCommand {
    pub record: InventoryRecord,
}

impl AddInventoryRecordCommand {
    pub const COMMAND_WORD: &'static str = "add_inventory";
    pub const MESSAGE_USAGE: &'static str = "add_inventory: Adds an inventory record.\n\
        Parameters: n/ITEM_NAME q/QUANTITY [d/YYYY-MM-DD] [t/HH:MM]\n\
        Example: add_inventory n/Pen q/10";

    pub fn new(record: InventoryRecord) -> Self {
        Self { record }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        if model.has_inventory_record(&self.record) {
            return Err(NuStorageError::Command(MESSAGE_DUPLICATE_INVENTORY.to_string()));
        }
        model.add_inventory_record(self.record.clone());
        Ok(CommandResult::new(format!("New inventory record added: {}", self.record)))
    }
}

/// Fields to overwrite on an existing record. Unset fields stay as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditInventoryDescriptor {
    pub item_name: Option<String>,
    pub quantity: Option<u32>,
}

impl EditInventoryDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.item_name.is_some() || self.quantity.is_some()
    }

    pub fn apply(&self, record: &InventoryRecord) -> InventoryRecord {
        InventoryRecord {
            item_name: self.item_name.clone().unwrap_or_else(|| record.item_name.clone()),
            quantity: self.quantity.unwrap_or(record.quantity),
            ..record.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditInventoryCommand {
    pub index: Index,
    pub descriptor: EditInventoryDescriptor,
}

impl EditInventoryCommand {
    pub const COMMAND_WORD: &'static str = "edit_inventory";
    pub const MESSAGE_USAGE: &'static str = "edit_inventory: Edits the inventory record at the \
        given index in the displayed list.\n\
        Parameters: INDEX (must be a positive integer) [n/ITEM_NAME] [q/QUANTITY]\n\
        Example: edit_inventory 1 q/25";

    pub fn new(index: Index, descriptor: EditInventoryDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        if !self.descriptor.is_any_field_edited() {
            return Err(NuStorageError::Command(MESSAGE_NOT_EDITED.to_string()));
        }
        let target = displayed_inventory_record(model, self.index)?;
        let edited = self.descriptor.apply(&target);
        model
            .set_inventory_record(&target, edited.clone())
            .map_err(|e| match e {
                NuStorageError::DuplicateRecord => {
                    NuStorageError::Command(MESSAGE_DUPLICATE_INVENTORY.to_string())
                }
                other => other,
            })?;
        Ok(CommandResult::new(format!("Edited inventory record: {edited}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteInventoryRecordCommand {
    pub index: Index,
}

impl DeleteInventoryRecordCommand {
    pub const COMMAND_WORD: &'static str = "delete_inventory";
    pub const MESSAGE_USAGE: &'static str = "delete_inventory: Deletes the inventory record at the \
        given index in the displayed list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete_inventory 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        let target = displayed_inventory_record(model, self.index)?;
        model.delete_inventory_record(&target)?;
        Ok(CommandResult::new(format!("Deleted inventory record: {target}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindInventoryRecordCommand {
    pub predicate: KeywordsPredicate,
}

impl FindInventoryRecordCommand {
    pub const COMMAND_WORD: &'static str = "find_inventory";
    pub const MESSAGE_USAGE: &'static str = "find_inventory: Finds inventory records whose item \
        name contains any of the given words (case-insensitive).\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find_inventory pen pencil";

    pub fn new(predicate: KeywordsPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_inventory_filter(Some(self.predicate.clone()));
        let shown = model.filtered_inventory().len();
        CommandResult::new(format!("{shown} inventory records listed!"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInventoryCommand;

impl ListInventoryCommand {
    pub const COMMAND_WORD: &'static str = "list_inventory";
    pub const MESSAGE_USAGE: &'static str = "list_inventory: Lists all inventory records.";

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_inventory_filter(None);
        CommandResult::new("Listed all inventory records")
    }
}
