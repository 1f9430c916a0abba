use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::repl::{self, App};
use crate::settings::{load_settings, save_settings, shellexpand_path, Settings};

#[derive(Parser)]
#[command(name = "nustorage", version, about = "Track inventory and finance records from the command line.")]
pub struct Cli {
    /// Data directory for this run (default: the one in settings.json)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a single command line, e.g. `nustorage run add_inventory n/Pen q/10`.
    Run {
        /// The command text; words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },
    /// Show the data file in use and how many records it holds.
    Status,
    /// Remember a data directory for future runs.
    Load {
        /// Path to the data directory
        path: String,
    },
}

fn resolve_settings(data_dir: Option<&str>) -> Settings {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(dir);
    }
    settings
}

pub fn interactive(data_dir: Option<&str>) -> anyhow::Result<()> {
    let settings = resolve_settings(data_dir);
    let mut app = App::open(settings.data_file_path());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut app, stdin.lock(), stdout.lock())
}

pub fn run(data_dir: Option<&str>, input: &[String]) -> anyhow::Result<()> {
    let settings = resolve_settings(data_dir);
    let mut app = App::open(settings.data_file_path());
    let outcome = app.execute(&input.join(" "))?;
    println!("{}", app.render(&outcome));
    Ok(())
}

pub fn status(data_dir: Option<&str>) -> anyhow::Result<()> {
    let settings = resolve_settings(data_dir);
    let data_file = settings.data_file_path();

    println!("Data dir:    {}", settings.data_dir);
    println!("Data file:   {}", data_file.display());
    if !data_file.exists() {
        println!();
        println!("No data file yet. It is created by the first change.");
        return Ok(());
    }

    let app = App::open(data_file);
    let model = app.model();
    println!();
    println!("Inventory:   {}", model.inventory().len());
    println!("Finance:     {}", model.finance_account().count());
    println!("Persons:     {}", model.persons().len());
    println!("Net profit:  {}", crate::fmt::money(model.finance_account().net_profit()));
    Ok(())
}

pub fn load(path: &str) -> anyhow::Result<()> {
    let dir = PathBuf::from(shellexpand_path(path));
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }
    let mut settings = load_settings();
    settings.data_dir = dir.to_string_lossy().to_string();
    save_settings(&settings).context("saving settings")?;
    println!("Data directory set to {}", dir.display());
    Ok(())
}
