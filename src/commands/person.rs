use std::collections::BTreeSet;

use super::CommandResult;
use crate::error::{NuStorageError, Result};
use crate::index::Index;
use crate::messages::{MESSAGE_INVALID_PERSON_INDEX, MESSAGE_NOT_EDITED};
use crate::model::{KeywordsPredicate, Model};
use crate::models::{Address, Email, Name, Person, Phone, Tag};

pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

fn duplicate_as_command_error(e: NuStorageError) -> NuStorageError {
    match e {
        NuStorageError::DuplicatePerson => NuStorageError::Command(MESSAGE_DUPLICATE_PERSON.to_string()),
        other => other,
    }
}

fn displayed_person(model: &Model, index: Index) -> Result<Person> {
    model
        .filtered_persons()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or_else(|| NuStorageError::Command(MESSAGE_INVALID_PERSON_INDEX.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    pub person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book.\n\
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2 t/supplier";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        if model.has_person(&self.person) {
            return Err(NuStorageError::Command(MESSAGE_DUPLICATE_PERSON.to_string()));
        }
        model.add_person(self.person.clone()).map_err(duplicate_as_command_error)?;
        Ok(CommandResult::new(format!("New person added: {}", self.person)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears every tag.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    pub fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self.address.clone().unwrap_or_else(|| person.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the person at the given index in the \
        displayed list. Existing values are overwritten.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        if !self.descriptor.is_any_field_edited() {
            return Err(NuStorageError::Command(MESSAGE_NOT_EDITED.to_string()));
        }
        let target = displayed_person(model, self.index)?;
        let edited = self.descriptor.apply(&target);
        model
            .set_person(&target, edited.clone())
            .map_err(duplicate_as_command_error)?;
        Ok(CommandResult::new(format!("Edited person: {edited}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    pub index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person at the given index in the \
        displayed list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        let target = displayed_person(model, self.index)?;
        model.delete_person(&target)?;
        Ok(CommandResult::new(format!("Deleted person: {target}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    pub predicate: KeywordsPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds persons whose names contain any of the \
        given words (case-insensitive).\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn new(predicate: KeywordsPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_person_filter(Some(self.predicate.clone()));
        CommandResult::new(format!("{} persons listed!", model.filtered_persons().len()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_USAGE: &'static str = "list: Lists all persons.";

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_person_filter(None);
        CommandResult::new("Listed all persons")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_USAGE: &'static str = "clear: Removes every person from the address book.";

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.clear_persons();
        CommandResult::new("Address book has been cleared!")
    }
}
