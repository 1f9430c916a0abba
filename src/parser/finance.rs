use super::tokenizer::{tokenize, PREFIX_AMOUNT, PREFIX_DATE_TIME};
use super::util::{format_error, now_to_minute, parse_amount, parse_date_time, parse_index};
use crate::commands::{
    AddFinanceCommand, Command, DeleteFinanceCommand, EditFinanceCommand, EditFinanceDescriptor,
};
use crate::error::{NuStorageError, Result};
use crate::messages::MESSAGE_NOT_EDITED;
use crate::models::FinanceRecord;

/// `amt/AMOUNT [at/YYYY-MM-DD HH:MM]`
pub fn parse_add_finance(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_AMOUNT, PREFIX_DATE_TIME]);
    if !map.has_all(&[PREFIX_AMOUNT]) || !map.preamble().is_empty() {
        return Err(format_error(AddFinanceCommand::MESSAGE_USAGE));
    }

    let amount = parse_amount(map.value(PREFIX_AMOUNT).unwrap_or_default())?;
    let date_time = match map.value(PREFIX_DATE_TIME) {
        Some(dt) => parse_date_time(dt)?,
        None => now_to_minute(),
    };
    Ok(Command::AddFinance(AddFinanceCommand::new(FinanceRecord::new(amount, Some(date_time)))))
}

/// `INDEX [amt/AMOUNT] [at/YYYY-MM-DD HH:MM]`, at least one field.
pub fn parse_edit_finance(args: &str) -> Result<Command> {
    let usage = EditFinanceCommand::MESSAGE_USAGE;
    let map = tokenize(args, &[PREFIX_AMOUNT, PREFIX_DATE_TIME]);
    let index = parse_index(map.preamble()).map_err(|_| format_error(usage))?;

    let descriptor = EditFinanceDescriptor {
        amount: map.value(PREFIX_AMOUNT).map(parse_amount).transpose()?,
        date_time: map.value(PREFIX_DATE_TIME).map(parse_date_time).transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(NuStorageError::Parse(MESSAGE_NOT_EDITED.to_string()));
    }
    Ok(Command::EditFinance(EditFinanceCommand::new(index, descriptor)))
}

pub fn parse_delete_finance(args: &str) -> Result<Command> {
    let index = parse_index(args).map_err(|_| format_error(DeleteFinanceCommand::MESSAGE_USAGE))?;
    Ok(Command::DeleteFinance(DeleteFinanceCommand::new(index)))
}
