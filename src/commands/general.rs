use super::CommandResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";

    pub fn execute(&self) -> CommandResult {
        CommandResult {
            feedback: "Showing help.".to_string(),
            show_help: true,
            exit: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.";

    pub fn execute(&self) -> CommandResult {
        CommandResult {
            feedback: "Exiting NuStorage as requested ...".to_string(),
            show_help: false,
            exit: true,
        }
    }
}
