use super::tokenizer::{tokenize, PREFIX_DATE, PREFIX_NAME, PREFIX_QUANTITY, PREFIX_TIME};
use super::util::{
    format_error, now_to_minute, parse_date, parse_index, parse_item_name, parse_keywords,
    parse_quantity, parse_time,
};
use crate::commands::{
    AddInventoryRecordCommand, Command, DeleteInventoryRecordCommand, EditInventoryCommand,
    EditInventoryDescriptor, FindInventoryRecordCommand,
};
use crate::error::{NuStorageError, Result};
use crate::messages::MESSAGE_NOT_EDITED;
use crate::model::KeywordsPredicate;
use crate::models::InventoryRecord;

/// `n/ITEM q/QUANTITY [d/DATE] [t/TIME]`. Missing date or time is taken
/// from the local clock.
pub fn parse_add_inventory(args: &str) -> Result<Command> {
    let usage = AddInventoryRecordCommand::MESSAGE_USAGE;
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_QUANTITY, PREFIX_DATE, PREFIX_TIME]);
    if !map.has_all(&[PREFIX_NAME, PREFIX_QUANTITY]) || !map.preamble().is_empty() {
        return Err(format_error(usage));
    }

    let item_name = parse_item_name(map.value(PREFIX_NAME).unwrap_or_default())?;
    let quantity = parse_quantity(map.value(PREFIX_QUANTITY).unwrap_or_default())?;
    let now = now_to_minute();
    let date = map.value(PREFIX_DATE).map(parse_date).transpose()?.unwrap_or(now.date());
    let time = map.value(PREFIX_TIME).map(parse_time).transpose()?.unwrap_or(now.time());

    let record = InventoryRecord::new(item_name, quantity, date, time);
    Ok(Command::AddInventory(AddInventoryRecordCommand::new(record)))
}

/// `INDEX [n/ITEM] [q/QUANTITY]`, at least one field.
pub fn parse_edit_inventory(args: &str) -> Result<Command> {
    let usage = EditInventoryCommand::MESSAGE_USAGE;
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_QUANTITY]);
    let index = parse_index(map.preamble()).map_err(|_| format_error(usage))?;

    let descriptor = EditInventoryDescriptor {
        item_name: map.value(PREFIX_NAME).map(parse_item_name).transpose()?,
        quantity: map.value(PREFIX_QUANTITY).map(parse_quantity).transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(NuStorageError::Parse(MESSAGE_NOT_EDITED.to_string()));
    }
    Ok(Command::EditInventory(EditInventoryCommand::new(index, descriptor)))
}

pub fn parse_delete_inventory(args: &str) -> Result<Command> {
    let index = parse_index(args).map_err(|_| format_error(DeleteInventoryRecordCommand::MESSAGE_USAGE))?;
    Ok(Command::DeleteInventory(DeleteInventoryRecordCommand::new(index)))
}

pub fn parse_find_inventory(args: &str) -> Result<Command> {
    let keywords = parse_keywords(args, FindInventoryRecordCommand::MESSAGE_USAGE)?;
    Ok(Command::FindInventory(FindInventoryRecordCommand::new(KeywordsPredicate::new(keywords))))
}
