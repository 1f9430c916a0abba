use chrono::NaiveDateTime;

use super::CommandResult;
use crate::error::{NuStorageError, Result};
use crate::fmt::money;
use crate::index::Index;
use crate::messages::{MESSAGE_INVALID_FINANCE_INDEX, MESSAGE_NOT_EDITED};
use crate::model::Model;
use crate::models::FinanceRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct AddFinanceCommand {
    pub record: FinanceRecord,
}

impl AddFinanceCommand {
    pub const COMMAND_WORD: &'static str = "add_finance";
    pub const MESSAGE_USAGE: &'static str = "add_finance: Adds a finance record. Negative \
        amounts are expenses.\n\
        Parameters: amt/AMOUNT [at/YYYY-MM-DD HH:MM]\n\
        Example: add_finance amt/-12.50 at/2024-03-01 14:00";

    pub fn new(record: FinanceRecord) -> Self {
        Self { record }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.add_finance_record(self.record.clone());
        CommandResult::new(format!("New finance record added: {}", self.record))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditFinanceDescriptor {
    pub amount: Option<f64>,
    pub date_time: Option<NaiveDateTime>,
}

impl EditFinanceDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.amount.is_some() || self.date_time.is_some()
    }

    pub fn apply(&self, record: &FinanceRecord) -> FinanceRecord {
        FinanceRecord {
            amount: self.amount.unwrap_or(record.amount),
            date_time: self.date_time.or(record.date_time),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditFinanceCommand {
    pub index: Index,
    pub descriptor: EditFinanceDescriptor,
}

impl EditFinanceCommand {
    pub const COMMAND_WORD: &'static str = "edit_finance";
    pub const MESSAGE_USAGE: &'static str = "edit_finance: Edits the finance record at the given \
        index.\n\
        Parameters: INDEX (must be a positive integer) [amt/AMOUNT] [at/YYYY-MM-DD HH:MM]\n\
        Example: edit_finance 2 amt/40";

    pub fn new(index: Index, descriptor: EditFinanceDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        if !self.descriptor.is_any_field_edited() {
            return Err(NuStorageError::Command(MESSAGE_NOT_EDITED.to_string()));
        }
        let target = model
            .finance_account()
            .get(self.index)
            .cloned()
            .ok_or_else(|| NuStorageError::Command(MESSAGE_INVALID_FINANCE_INDEX.to_string()))?;
        let edited = self.descriptor.apply(&target);
        model.set_finance_record_at(self.index, edited.clone());
        Ok(CommandResult::new(format!("Edited finance record: {edited}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFinanceCommand {
    pub index: Index,
}

impl DeleteFinanceCommand {
    pub const COMMAND_WORD: &'static str = "delete_finance";
    pub const MESSAGE_USAGE: &'static str = "delete_finance: Deletes the finance record at the \
        given index.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete_finance 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        let removed = model
            .remove_finance_record(self.index)
            .ok_or_else(|| NuStorageError::Command(MESSAGE_INVALID_FINANCE_INDEX.to_string()))?;
        Ok(CommandResult::new(format!("Deleted finance record: {removed}")))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFinanceRecordsCommand;

impl ListFinanceRecordsCommand {
    pub const COMMAND_WORD: &'static str = "list_finance";
    pub const MESSAGE_USAGE: &'static str = "list_finance: Lists all finance records and the net profit.";

    pub fn execute(&self, model: &mut Model) -> CommandResult {
        let account = model.finance_account();
        CommandResult::new(format!(
            "Listed {} finance records. Net profit: {}",
            account.count(),
            money(account.net_profit())
        ))
    }
}
