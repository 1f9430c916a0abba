use std::collections::BTreeSet;

use super::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_TAG,
};
use super::util::{
    format_error, parse_address, parse_email, parse_index, parse_keywords, parse_name, parse_phone,
    parse_tags,
};
use crate::commands::{
    AddCommand, Command, DeleteCommand, EditCommand, EditPersonDescriptor, FindCommand,
};
use crate::error::{NuStorageError, Result};
use crate::messages::MESSAGE_NOT_EDITED;
use crate::model::KeywordsPredicate;
use crate::models::{Person, Tag};

const PERSON_PREFIXES: [Prefix; 5] =
    [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG];

pub fn parse_add(args: &str) -> Result<Command> {
    let map = tokenize(args, &PERSON_PREFIXES);
    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.has_all(&required) || !map.preamble().is_empty() {
        return Err(format_error(AddCommand::MESSAGE_USAGE));
    }

    let person = Person {
        name: parse_name(map.value(PREFIX_NAME).unwrap_or_default())?,
        phone: parse_phone(map.value(PREFIX_PHONE).unwrap_or_default())?,
        email: parse_email(map.value(PREFIX_EMAIL).unwrap_or_default())?,
        address: parse_address(map.value(PREFIX_ADDRESS).unwrap_or_default())?,
        tags: parse_tags(&map.all_values(PREFIX_TAG))?,
    };
    Ok(Command::Add(AddCommand::new(person)))
}

/// A lone empty `t/` means "remove all tags".
fn parse_tags_for_edit(map: &ArgumentMultimap) -> Result<Option<BTreeSet<Tag>>> {
    let tags = map.all_values(PREFIX_TAG);
    if tags.is_empty() {
        return Ok(None);
    }
    if tags.len() == 1 && tags[0].is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    parse_tags(&tags).map(Some)
}

pub fn parse_edit(args: &str) -> Result<Command> {
    let map = tokenize(args, &PERSON_PREFIXES);
    let index = parse_index(map.preamble()).map_err(|_| format_error(EditCommand::MESSAGE_USAGE))?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(parse_email).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
        tags: parse_tags_for_edit(&map)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(NuStorageError::Parse(MESSAGE_NOT_EDITED.to_string()));
    }
    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}

pub fn parse_delete(args: &str) -> Result<Command> {
    let index = parse_index(args).map_err(|_| format_error(DeleteCommand::MESSAGE_USAGE))?;
    Ok(Command::Delete(DeleteCommand::new(index)))
}

pub fn parse_find(args: &str) -> Result<Command> {
    let keywords = parse_keywords(args, FindCommand::MESSAGE_USAGE)?;
    Ok(Command::Find(FindCommand::new(KeywordsPredicate::new(keywords))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Name, Phone};

    #[test]
    fn test_add_all_fields() {
        let cmd = parse_add(" n/Amy Bee p/85355255 e/amy@example.com a/123, Jurong West t/friend t/supplier")
            .unwrap();
        let Command::Add(add) = cmd else { panic!("wrong command kind") };
        assert_eq!(add.person.name.as_str(), "Amy Bee");
        assert_eq!(add.person.address.as_str(), "123, Jurong West");
        assert_eq!(add.person.tags.len(), 2);
    }

    #[test]
    fn test_add_missing_or_invalid() {
        assert!(parse_add(" n/Amy p/85355255 e/amy@example.com").is_err());
        let err = parse_add(" n/Amy p/12 e/amy@example.com a/Road").unwrap_err();
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
        let err = parse_add(" n/Amy* p/123 e/amy@example.com a/Road").unwrap_err();
        assert_eq!(err.to_string(), Name::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_edit_fields_and_tag_reset() {
        let Command::Edit(edit) = parse_edit(" 1 p/91234567 t/").unwrap() else {
            panic!("wrong command kind")
        };
        assert_eq!(edit.index.one_based(), 1);
        assert_eq!(edit.descriptor.phone.as_ref().map(Phone::as_str), Some("91234567"));
        assert_eq!(edit.descriptor.tags, Some(BTreeSet::new()));
        assert!(edit.descriptor.name.is_none());
    }

    #[test]
    fn test_edit_requires_index_and_field() {
        assert!(parse_edit(" n/Amy").is_err());
        assert_eq!(parse_edit(" 1").unwrap_err().to_string(), MESSAGE_NOT_EDITED);
    }

    #[test]
    fn test_delete_and_find() {
        assert!(matches!(parse_delete(" 1"), Ok(Command::Delete(_))));
        assert!(parse_delete(" one").is_err());
        assert!(matches!(parse_find(" alice"), Ok(Command::Find(_))));
        assert!(parse_find("").is_err());
    }
}
