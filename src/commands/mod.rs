pub mod finance;
pub mod general;
pub mod inventory;
pub mod person;

use crate::error::Result;
use crate::model::Model;

pub use finance::{
    AddFinanceCommand, DeleteFinanceCommand, EditFinanceCommand, EditFinanceDescriptor,
    ListFinanceRecordsCommand,
};
pub use general::{ExitCommand, HelpCommand};
pub use inventory::{
    AddInventoryRecordCommand, DeleteInventoryRecordCommand, EditInventoryCommand,
    EditInventoryDescriptor, FindInventoryRecordCommand, ListInventoryCommand,
};
pub use person::{
    AddCommand, ClearCommand, DeleteCommand, EditCommand, EditPersonDescriptor, FindCommand,
    ListCommand,
};

/// Outcome of a command, handed to whatever is presenting results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// Only `help` sets this.
    pub show_help: bool,
    /// Only `exit` sets this.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// A parsed, validated instruction. Built once per input line and applied once.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListInventory(ListInventoryCommand),
    AddInventory(AddInventoryRecordCommand),
    EditInventory(EditInventoryCommand),
    DeleteInventory(DeleteInventoryRecordCommand),
    FindInventory(FindInventoryRecordCommand),
    AddFinance(AddFinanceCommand),
    EditFinance(EditFinanceCommand),
    DeleteFinance(DeleteFinanceCommand),
    ListFinance(ListFinanceRecordsCommand),
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
}

impl Command {
    /// Apply the command. On error the model is left as it was.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        match self {
            Command::ListInventory(c) => Ok(c.execute(model)),
            Command::AddInventory(c) => c.execute(model),
            Command::EditInventory(c) => c.execute(model),
            Command::DeleteInventory(c) => c.execute(model),
            Command::FindInventory(c) => Ok(c.execute(model)),
            Command::AddFinance(c) => Ok(c.execute(model)),
            Command::EditFinance(c) => c.execute(model),
            Command::DeleteFinance(c) => c.execute(model),
            Command::ListFinance(c) => Ok(c.execute(model)),
            Command::Add(c) => c.execute(model),
            Command::Edit(c) => c.execute(model),
            Command::Delete(c) => c.execute(model),
            Command::Find(c) => Ok(c.execute(model)),
            Command::List(c) => Ok(c.execute(model)),
            Command::Clear(c) => Ok(c.execute(model)),
            Command::Exit(c) => Ok(c.execute()),
            Command::Help(c) => Ok(c.execute()),
        }
    }
}

/// Usage text for every verb, in help order.
pub fn all_usages() -> Vec<&'static str> {
    vec![
        AddInventoryRecordCommand::MESSAGE_USAGE,
        EditInventoryCommand::MESSAGE_USAGE,
        DeleteInventoryRecordCommand::MESSAGE_USAGE,
        FindInventoryRecordCommand::MESSAGE_USAGE,
        ListInventoryCommand::MESSAGE_USAGE,
        AddFinanceCommand::MESSAGE_USAGE,
        EditFinanceCommand::MESSAGE_USAGE,
        DeleteFinanceCommand::MESSAGE_USAGE,
        ListFinanceRecordsCommand::MESSAGE_USAGE,
        AddCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        FindCommand::MESSAGE_USAGE,
        ListCommand::MESSAGE_USAGE,
        ClearCommand::MESSAGE_USAGE,
        HelpCommand::MESSAGE_USAGE,
        ExitCommand::MESSAGE_USAGE,
    ]
}
