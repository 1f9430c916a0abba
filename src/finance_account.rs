use crate::index::Index;
use crate::models::FinanceRecord;
use crate::observable::{Listeners, StoreChange};

/// Ordered ledger of finance records. Insertion order is display order.
#[derive(Debug, Default)]
pub struct FinanceAccount {
    records: Vec<FinanceRecord>,
    listeners: Listeners,
}

impl FinanceAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: FinanceRecord) {
        log::debug!("finance: add {record}");
        self.records.push(record);
        self.listeners.notify(StoreChange::Added(self.records.len() - 1));
    }

    /// Replace the first record equal to `target` with `replacement`.
    ///
    /// The caller must have taken `target` from this account; an absent target
    /// is a programming error and panics. Records are not unique, so callers
    /// that know the position use [`FinanceAccount::set_record_at`].
    #[allow(dead_code)]
    pub fn set_finance_record(&mut self, target: &FinanceRecord, replacement: FinanceRecord) {
        let Some(offset) = self.records.iter().position(|r| r == target) else {
            panic!("set_finance_record: target {target} is not in the account");
        };
        self.replace(offset, replacement);
    }

    /// Replace the record at `index`, returning the old one. Like
    /// `set_finance_record`, the index must already have been checked against
    /// this account; out of range panics.
    pub fn set_record_at(&mut self, index: Index, replacement: FinanceRecord) -> FinanceRecord {
        let offset = index.zero_based();
        assert!(
            offset < self.records.len(),
            "set_record_at: index {index} is past the {} records in the account",
            self.records.len()
        );
        self.replace(offset, replacement)
    }

    fn replace(&mut self, offset: usize, replacement: FinanceRecord) -> FinanceRecord {
        log::debug!("finance: replace #{} with {replacement}", offset + 1);
        let old = std::mem::replace(&mut self.records[offset], replacement);
        self.listeners.notify(StoreChange::Replaced(offset));
        old
    }

    #[allow(dead_code)]
    pub fn has_record(&self, record: &FinanceRecord) -> bool {
        self.records.contains(record)
    }

    /// Removes the record at `index`. Out of range is not an error here:
    /// the account is left untouched and `None` comes back.
    pub fn remove_record(&mut self, index: Index) -> Option<FinanceRecord> {
        let offset = index.zero_based();
        if offset >= self.records.len() {
            return None;
        }
        let removed = self.records.remove(offset);
        log::debug!("finance: removed #{index} ({removed})");
        self.listeners.notify(StoreChange::Removed(offset));
        Some(removed)
    }

    pub fn get(&self, index: Index) -> Option<&FinanceRecord> {
        self.records.get(index.zero_based())
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Sum of all amounts.
    pub fn net_profit(&self) -> f64 {
        self.records.iter().map(|r| r.amount).sum()
    }

    pub fn filter_records<P>(&self, predicate: P) -> Vec<FinanceRecord>
    where
        P: Fn(&FinanceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// Read-only, order-preserving view for display.
    pub fn records(&self) -> &[FinanceRecord] {
        &self.records
    }

    pub fn set_records(&mut self, records: Vec<FinanceRecord>) {
        self.records = records;
        self.listeners.notify(StoreChange::Reset);
    }

    pub fn on_change(&mut self, listener: impl FnMut(StoreChange) + 'static) {
        self.listeners.register(listener);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FinanceRecord> {
        self.records.iter()
    }
}

impl PartialEq for FinanceAccount {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<'a> IntoIterator for &'a FinanceAccount {
    type Item = &'a FinanceRecord;
    type IntoIter = std::slice::Iter<'a, FinanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
