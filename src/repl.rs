use std::cell::Cell;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use colored::Colorize;

use crate::commands::{all_usages, Command, CommandResult};
use crate::error::{NuStorageError, Result};
use crate::model::Model;
use crate::parser::parse_command;
use crate::storage;
use crate::view;

/// Which list to show after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Inventory,
    Finance,
    Persons,
}

impl Listing {
    fn for_command(command: &Command) -> Option<Self> {
        match command {
            Command::ListInventory(_) | Command::FindInventory(_) => Some(Listing::Inventory),
            Command::ListFinance(_) => Some(Listing::Finance),
            Command::List(_) | Command::Find(_) => Some(Listing::Persons),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub result: CommandResult,
    pub listing: Option<Listing>,
}

/// The model plus where it is saved. Every successful mutation is written
/// back before the next line is read.
pub struct App {
    model: Model,
    data_file: PathBuf,
    dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new(mut model: Model, data_file: PathBuf) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        model.on_change(move |change| {
            log::debug!("store changed: {change:?}");
            flag.set(true);
        });
        Self {
            model,
            data_file,
            dirty,
        }
    }

    /// Load from `data_file`. Unreadable data is logged and replaced by an
    /// empty model rather than aborting start-up.
    pub fn open(data_file: PathBuf) -> Self {
        let model = match storage::load(&data_file) {
            Ok(Some(model)) => model,
            Ok(None) => Model::new(),
            Err(e) => {
                log::warn!(
                    "Data file {} could not be read ({e}). Starting with empty stores.",
                    data_file.display()
                );
                Model::new()
            }
        };
        Self::new(model, data_file)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let command = parse_command(line)?;
        let result = command.execute(&mut self.model)?;
        if self.dirty.get() {
            storage::save(&self.data_file, &self.model).map_err(|e| {
                NuStorageError::Storage(format!(
                    "{}, but the data could not be saved to file: {e}. Saving is retried after the next command.",
                    result.feedback
                ))
            })?;
            self.dirty.set(false);
        }
        Ok(Outcome {
            listing: Listing::for_command(&command),
            result,
        })
    }

    pub fn render(&self, outcome: &Outcome) -> String {
        let mut out = String::new();
        if outcome.result.show_help {
            out.push_str(&help_text());
            out.push('\n');
        }
        match outcome.listing {
            Some(Listing::Inventory) => {
                out.push_str(&format!("{}\n", view::inventory_table(&self.model)));
            }
            Some(Listing::Finance) => {
                out.push_str(&format!("{}\n", view::finance_table(&self.model)));
                out.push_str(&format!("{}\n", view::net_profit_line(&self.model)));
            }
            Some(Listing::Persons) => {
                out.push_str(&format!("{}\n", view::person_table(&self.model)));
            }
            None => {}
        }
        out.push_str(&outcome.result.feedback);
        out
    }
}

pub fn help_text() -> String {
    all_usages().join("\n\n")
}

/// Read commands line by line until `exit` or end of input. Command errors
/// are printed and the loop carries on.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, mut output: W) -> anyhow::Result<()> {
    writeln!(output, "{}", "Welcome to NuStorage. Type `help` for commands.".bold())?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("reading command input")?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }
        match app.execute(&line) {
            Ok(outcome) => {
                writeln!(output, "{}", app.render(&outcome))?;
                if outcome.result.exit {
                    return Ok(());
                }
            }
            Err(e) => writeln!(output, "{}", e.to_string().red())?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::open(dir.path().join("nustorage.json"));
        (dir, app)
    }

    #[test]
    fn test_mutation_is_persisted() {
        let (dir, mut app) = app();
        app.execute("add_inventory n/Pen q/10").unwrap();
        let reloaded = storage::load(&dir.path().join("nustorage.json")).unwrap().unwrap();
        assert_eq!(reloaded.inventory().len(), 1);
    }

    #[test]
    fn test_display_only_command_does_not_write() {
        let (dir, mut app) = app();
        app.execute("list_inventory").unwrap();
        assert!(!dir.path().join("nustorage.json").exists());
    }

    #[test]
    fn test_failed_save_is_reported_and_retried() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("data");
        std::fs::create_dir(&data_file).unwrap();
        let mut app = App::open(data_file.clone());

        let err = app.execute("add_finance amt/5").unwrap_err();
        assert!(err.to_string().starts_with("New finance record added: Amount: $5.00, but"));
        assert!(err.to_string().contains("could not be saved"));
        assert_eq!(app.model().finance_account().count(), 1);

        std::fs::remove_dir(&data_file).unwrap();
        app.execute("list_finance").unwrap();
        let reloaded = storage::load(&data_file).unwrap().unwrap();
        assert_eq!(reloaded.finance_account().count(), 1);
    }

    #[test]
    fn test_failed_command_leaves_model() {
        let (_dir, mut app) = app();
        app.execute("add_inventory n/Pen q/10 d/2024-01-01 t/10:00").unwrap();
        let err = app.execute("add_inventory n/Pen q/10 d/2024-01-01 t/10:00").unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(app.model().inventory().len(), 1);
    }

    #[test]
    fn test_listing_follows_command() {
        let (_dir, mut app) = app();
        assert_eq!(app.execute("find_inventory pen").unwrap().listing, Some(Listing::Inventory));
        assert_eq!(app.execute("list_finance").unwrap().listing, Some(Listing::Finance));
        assert_eq!(app.execute("list").unwrap().listing, Some(Listing::Persons));
        assert_eq!(app.execute("add_finance amt/3").unwrap().listing, None);
    }

    #[test]
    fn test_run_continues_after_errors_and_stops_on_exit() {
        let (_dir, mut app) = app();
        let input = b"foobar\nadd_finance amt/50\n\nadd_finance amt/-20\nexit\nadd_finance amt/1\n";
        let mut output = Vec::new();
        run(&mut app, &input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Unknown command"));
        assert!(text.contains("Exiting NuStorage"));
        assert_eq!(app.model().finance_account().count(), 2);
        assert_eq!(app.model().finance_account().net_profit(), 30.0);
    }

    #[test]
    fn test_help_lists_every_verb() {
        let text = help_text();
        for word in ["add_inventory", "list_finance", "delete", "clear", "exit"] {
            assert!(text.contains(word), "help is missing {word}");
        }
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nustorage.json");
        std::fs::write(&path, "not json").unwrap();
        let app = App::open(path);
        assert_eq!(app.model().inventory().len(), 0);
    }
}
