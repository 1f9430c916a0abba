pub mod finance;
pub mod inventory;
pub mod person;
pub mod tokenizer;
pub mod util;

use regex::Regex;

use crate::commands::{
    AddCommand, AddFinanceCommand, AddInventoryRecordCommand, ClearCommand, Command, DeleteCommand,
    DeleteFinanceCommand, DeleteInventoryRecordCommand, EditCommand, EditFinanceCommand,
    EditInventoryCommand, ExitCommand, FindCommand, FindInventoryRecordCommand, HelpCommand,
    ListCommand, ListFinanceRecordsCommand, ListInventoryCommand,
};
use crate::error::{NuStorageError, Result};
use crate::messages::MESSAGE_UNKNOWN_COMMAND;

/// Builds a command from everything after the command word.
pub type ParseFn = fn(&str) -> Result<Command>;

// Zero-argument verbs ignore whatever follows the command word.

fn list_inventory(_: &str) -> Result<Command> {
    Ok(Command::ListInventory(ListInventoryCommand))
}

fn list_finance(_: &str) -> Result<Command> {
    Ok(Command::ListFinance(ListFinanceRecordsCommand))
}

fn clear(_: &str) -> Result<Command> {
    Ok(Command::Clear(ClearCommand))
}

fn list(_: &str) -> Result<Command> {
    Ok(Command::List(ListCommand))
}

fn exit(_: &str) -> Result<Command> {
    Ok(Command::Exit(ExitCommand))
}

fn help(_: &str) -> Result<Command> {
    Ok(Command::Help(HelpCommand))
}

/// Command word to parser. Words are matched exactly, case-sensitively.
pub const COMMAND_TABLE: &[(&str, ParseFn)] = &[
    (ListInventoryCommand::COMMAND_WORD, list_inventory),
    (AddInventoryRecordCommand::COMMAND_WORD, inventory::parse_add_inventory),
    (EditInventoryCommand::COMMAND_WORD, inventory::parse_edit_inventory),
    (DeleteInventoryRecordCommand::COMMAND_WORD, inventory::parse_delete_inventory),
    (FindInventoryRecordCommand::COMMAND_WORD, inventory::parse_find_inventory),
    (AddFinanceCommand::COMMAND_WORD, finance::parse_add_finance),
    (EditFinanceCommand::COMMAND_WORD, finance::parse_edit_finance),
    (AddCommand::COMMAND_WORD, person::parse_add),
    (EditCommand::COMMAND_WORD, person::parse_edit),
    (DeleteFinanceCommand::COMMAND_WORD, finance::parse_delete_finance),
    (DeleteCommand::COMMAND_WORD, person::parse_delete),
    (ListFinanceRecordsCommand::COMMAND_WORD, list_finance),
    (ClearCommand::COMMAND_WORD, clear),
    (FindCommand::COMMAND_WORD, person::parse_find),
    (ListCommand::COMMAND_WORD, list),
    (ExitCommand::COMMAND_WORD, exit),
    (HelpCommand::COMMAND_WORD, help),
];

/// Split trimmed input into the command word and the rest, which keeps its
/// leading whitespace.
fn split_command_word(input: &str) -> Option<(&str, &str)> {
    let re = Regex::new(r"(?s)^(?P<command_word>\S+)(?P<arguments>.*)$").ok()?;
    let caps = re.captures(input)?;
    let word = caps.name("command_word")?.as_str();
    let arguments = caps.name("arguments").map_or("", |m| m.as_str());
    Some((word, arguments))
}

fn lookup(command_word: &str) -> Option<ParseFn> {
    COMMAND_TABLE
        .iter()
        .find(|(word, _)| *word == command_word)
        .map(|(_, parse)| *parse)
}

/// Parse one line of user input into a command.
pub fn parse_command(user_input: &str) -> Result<Command> {
    let (command_word, arguments) = split_command_word(user_input.trim())
        .ok_or_else(|| util::format_error(HelpCommand::MESSAGE_USAGE))?;
    log::debug!("dispatch: {command_word:?} args={arguments:?}");

    let parse = lookup(command_word)
        .ok_or_else(|| NuStorageError::Parse(MESSAGE_UNKNOWN_COMMAND.to_string()))?;
    parse(arguments)
}
