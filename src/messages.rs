pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INVENTORY_INDEX: &str = "The inventory record index provided is invalid";
pub const MESSAGE_INVALID_FINANCE_INDEX: &str = "The finance record index provided is invalid";
pub const MESSAGE_INVALID_PERSON_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{usage}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_command_format_appends_usage() {
        assert_eq!(invalid_command_format("list: lists"), "Invalid command format! \nlist: lists");
    }
}
