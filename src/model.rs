use crate::error::Result;
use crate::finance_account::FinanceAccount;
use crate::index::Index;
use crate::inventory_list::InventoryRecordList;
use crate::models::{FinanceRecord, InventoryRecord, Person};
use crate::observable::StoreChange;
use crate::person_list::UniquePersonList;

/// Whole-word, case-insensitive keyword match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordsPredicate {
    keywords: Vec<String>,
}

impl KeywordsPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// True if any keyword equals any word of `text`, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        self.keywords
            .iter()
            .map(|k| k.to_lowercase())
            .any(|k| words.contains(&k))
    }
}

/// Everything a command can touch: the three stores plus what is currently
/// displayed for the filterable ones.
#[derive(Debug, Default)]
pub struct Model {
    finance: FinanceAccount,
    inventory: InventoryRecordList,
    persons: UniquePersonList,
    inventory_filter: Option<KeywordsPredicate>,
    person_filter: Option<KeywordsPredicate>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stores(
        finance: FinanceAccount,
        inventory: InventoryRecordList,
        persons: UniquePersonList,
    ) -> Self {
        Self {
            finance,
            inventory,
            persons,
            inventory_filter: None,
            person_filter: None,
        }
    }

    /// Register one listener on every store.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(StoreChange) + Clone + 'static,
    {
        self.finance.on_change(listener.clone());
        self.inventory.on_change(listener.clone());
        self.persons.on_change(listener);
    }

    // Finance

    pub fn finance_account(&self) -> &FinanceAccount {
        &self.finance
    }

    pub fn add_finance_record(&mut self, record: FinanceRecord) {
        self.finance.add_record(record);
    }

    pub fn set_finance_record_at(&mut self, index: Index, replacement: FinanceRecord) -> FinanceRecord {
        self.finance.set_record_at(index, replacement)
    }

    pub fn remove_finance_record(&mut self, index: Index) -> Option<FinanceRecord> {
        self.finance.remove_record(index)
    }

    // Inventory

    pub fn inventory(&self) -> &InventoryRecordList {
        &self.inventory
    }

    pub fn has_inventory_record(&self, record: &InventoryRecord) -> bool {
        self.inventory.contains(record)
    }

    pub fn add_inventory_record(&mut self, record: InventoryRecord) {
        self.inventory.add(record);
        self.inventory_filter = None;
    }

    pub fn set_inventory_record(
        &mut self,
        target: &InventoryRecord,
        edited: InventoryRecord,
    ) -> Result<()> {
        self.inventory.set_inventory_record(target, edited)
    }

    pub fn delete_inventory_record(&mut self, target: &InventoryRecord) -> Result<()> {
        self.inventory.remove(target)
    }

    /// Inventory records currently displayed, in store order.
    pub fn filtered_inventory(&self) -> Vec<&InventoryRecord> {
        self.inventory
            .iter()
            .filter(|r| {
                self.inventory_filter
                    .as_ref()
                    .map_or(true, |p| p.matches(&r.item_name))
            })
            .collect()
    }

    pub fn update_inventory_filter(&mut self, filter: Option<KeywordsPredicate>) {
        self.inventory_filter = filter;
    }

    // Persons

    pub fn persons(&self) -> &UniquePersonList {
        &self.persons
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<()> {
        self.persons.add(person)?;
        self.person_filter = None;
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        self.persons.set_person(target, edited)
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<()> {
        self.persons.remove(target)
    }

    pub fn clear_persons(&mut self) {
        self.persons.clear();
        self.person_filter = None;
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.persons
            .persons()
            .iter()
            .filter(|p| {
                self.person_filter
                    .as_ref()
                    .map_or(true, |f| f.matches(p.name.as_str()))
            })
            .collect()
    }

    pub fn update_person_filter(&mut self, filter: Option<KeywordsPredicate>) {
        self.person_filter = filter;
    }
}

/// Two models are equal when their stores hold the same records; what is
/// displayed does not matter.
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.finance == other.finance
            && self.inventory == other.inventory
            && self.persons == other.persons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::{item, person};
    use std::cell::Cell;
    use std::rc::Rc;

    fn keywords(words: &[&str]) -> KeywordsPredicate {
        KeywordsPredicate::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_keywords_match_whole_words_ignoring_case() {
        let p = keywords(&["pen"]);
        assert!(p.matches("Blue PEN"));
        assert!(!p.matches("Pencil"));
        assert!(keywords(&["ink", "pad"]).matches("Stamp Pad"));
        assert!(!keywords(&[]).matches("Pen"));
    }

    #[test]
    fn test_filtered_inventory_follows_filter() {
        let mut model = Model::new();
        model.add_inventory_record(item("Blue Pen", 1));
        model.add_inventory_record(item("Ink", 2));
        model.add_inventory_record(item("Red Pen", 3));
        model.update_inventory_filter(Some(keywords(&["pen"])));
        let shown: Vec<&str> = model.filtered_inventory().iter().map(|r| r.item_name.as_str()).collect();
        assert_eq!(shown, vec!["Blue Pen", "Red Pen"]);
        model.update_inventory_filter(None);
        assert_eq!(model.filtered_inventory().len(), 3);
    }

    #[test]
    fn test_filtered_persons_follows_filter() {
        let mut model = Model::new();
        model.add_person(person("Alice Pauline")).unwrap();
        model.add_person(person("Benson Meier")).unwrap();
        model.update_person_filter(Some(keywords(&["meier"])));
        assert_eq!(model.filtered_persons().len(), 1);
        model.clear_persons();
        assert!(model.filtered_persons().is_empty());
    }

    #[test]
    fn test_on_change_sees_every_store() {
        let count = Rc::new(Cell::new(0));
        let mut model = Model::new();
        let c = Rc::clone(&count);
        model.on_change(move |_| c.set(c.get() + 1));
        model.add_finance_record(FinanceRecord::new(1.0, None));
        model.add_inventory_record(item("Pen", 1));
        model.add_person(person("Alice")).unwrap();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_equality_ignores_filters() {
        let mut a = Model::new();
        let mut b = Model::new();
        a.add_inventory_record(item("Pen", 1));
        b.add_inventory_record(item("Pen", 1));
        a.update_inventory_filter(Some(keywords(&["ink"])));
        assert_eq!(a, b);
    }
}
