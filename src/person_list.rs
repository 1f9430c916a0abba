use crate::error::{NuStorageError, Result};
use crate::models::Person;
use crate::observable::{Listeners, StoreChange};

/// Address book contents. No two entries may be the same person (same name).
#[derive(Debug, Default)]
pub struct UniquePersonList {
    persons: Vec<Person>,
    listeners: Listeners,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(NuStorageError::DuplicatePerson);
        }
        log::debug!("persons: add {}", person.name);
        self.persons.push(person);
        self.listeners.notify(StoreChange::Added(self.persons.len() - 1));
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(NuStorageError::PersonNotFound)?;

        if !target.is_same_person(&edited) && self.contains(&edited) {
            return Err(NuStorageError::DuplicatePerson);
        }

        log::debug!("persons: replace #{} with {}", index + 1, edited.name);
        self.persons[index] = edited;
        self.listeners.notify(StoreChange::Replaced(index));
        Ok(())
    }

    /// Bulk replace, rejecting input that holds the same person twice.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> Result<()> {
        for (i, p) in persons.iter().enumerate() {
            if persons[i + 1..].iter().any(|q| q.is_same_person(p)) {
                return Err(NuStorageError::DuplicatePerson);
            }
        }
        self.persons = persons;
        self.listeners.notify(StoreChange::Reset);
        Ok(())
    }

    pub fn remove(&mut self, person: &Person) -> Result<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p == person)
            .ok_or(NuStorageError::PersonNotFound)?;
        self.persons.remove(index);
        log::debug!("persons: removed {}", person.name);
        self.listeners.notify(StoreChange::Removed(index));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.persons.clear();
        self.listeners.notify(StoreChange::Reset);
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn on_change(&mut self, listener: impl FnMut(StoreChange) + 'static) {
        self.listeners.register(listener);
    }
}

impl PartialEq for UniquePersonList {
    fn eq(&self, other: &Self) -> bool {
        self.persons == other.persons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::person;
    use crate::models::Phone;

    #[test]
    fn test_add_rejects_same_person() {
        let mut list = UniquePersonList::new();
        list.add(person("Alice")).unwrap();
        let mut other = person("Alice");
        other.phone = Phone::try_from("55555".to_string()).unwrap();
        assert!(matches!(list.add(other).unwrap_err(), NuStorageError::DuplicatePerson));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_person_allows_editing_self() {
        let mut list = UniquePersonList::new();
        list.add(person("Alice")).unwrap();
        let mut edited = person("Alice");
        edited.phone = Phone::try_from("55555".to_string()).unwrap();
        list.set_person(&person("Alice"), edited.clone()).unwrap();
        assert_eq!(list.persons(), &[edited]);
    }

    #[test]
    fn test_set_person_rejects_collision() {
        let mut list = UniquePersonList::new();
        list.add(person("Alice")).unwrap();
        list.add(person("Bob")).unwrap();
        let err = list.set_person(&person("Bob"), person("Alice")).unwrap_err();
        assert!(matches!(err, NuStorageError::DuplicatePerson));
    }

    #[test]
    fn test_set_person_missing_target() {
        let mut list = UniquePersonList::new();
        let err = list.set_person(&person("Alice"), person("Bob")).unwrap_err();
        assert!(matches!(err, NuStorageError::PersonNotFound));
    }

    #[test]
    fn test_set_persons_rejects_duplicates() {
        let mut list = UniquePersonList::new();
        let err = list.set_persons(vec![person("Alice"), person("Alice")]).unwrap_err();
        assert!(matches!(err, NuStorageError::DuplicatePerson));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut list = UniquePersonList::new();
        list.add(person("Alice")).unwrap();
        list.add(person("Bob")).unwrap();
        list.remove(&person("Alice")).unwrap();
        assert!(matches!(list.remove(&person("Alice")).unwrap_err(), NuStorageError::PersonNotFound));
        list.clear();
        assert_eq!(list.len(), 0);
    }
}
