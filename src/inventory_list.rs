use crate::error::{NuStorageError, Result};
use crate::models::InventoryRecord;
use crate::observable::{Listeners, StoreChange};

/// Ordered list of inventory records.
///
/// `add` does not check for duplicates; the caller decides. `set_inventory_record`
/// does, so a list kept duplicate-free stays that way under edits.
#[derive(Debug, Default)]
pub struct InventoryRecordList {
    records: Vec<InventoryRecord>,
    listeners: Listeners,
}

impl InventoryRecordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, record: &InventoryRecord) -> bool {
        self.records.iter().any(|r| r == record)
    }

    pub fn add(&mut self, record: InventoryRecord) {
        log::debug!("inventory: add {record}");
        self.records.push(record);
        self.listeners.notify(StoreChange::Added(self.records.len() - 1));
    }

    pub fn set_inventory_record(
        &mut self,
        target: &InventoryRecord,
        edited: InventoryRecord,
    ) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|r| r == target)
            .ok_or(NuStorageError::RecordNotFound)?;

        if *target != edited && self.contains(&edited) {
            return Err(NuStorageError::DuplicateRecord);
        }

        log::debug!("inventory: replace #{} with {edited}", index + 1);
        self.records[index] = edited;
        self.listeners.notify(StoreChange::Replaced(index));
        Ok(())
    }

    /// Bulk replace. `records` must not contain duplicates.
    pub fn set_inventory_records(&mut self, records: Vec<InventoryRecord>) {
        self.records = records;
        self.listeners.notify(StoreChange::Reset);
    }

    pub fn remove(&mut self, record: &InventoryRecord) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|r| r == record)
            .ok_or(NuStorageError::RecordNotFound)?;
        let removed = self.records.remove(index);
        log::debug!("inventory: removed {removed}");
        self.listeners.notify(StoreChange::Removed(index));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Read-only, order-preserving view for display.
    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn on_change(&mut self, listener: impl FnMut(StoreChange) + 'static) {
        self.listeners.register(listener);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InventoryRecord> {
        self.records.iter()
    }
}

impl PartialEq for InventoryRecordList {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<'a> IntoIterator for &'a InventoryRecordList {
    type Item = &'a InventoryRecord;
    type IntoIter = std::slice::Iter<'a, InventoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
