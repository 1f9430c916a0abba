mod cli;
mod commands;
mod error;
mod finance_account;
mod fmt;
mod index;
mod inventory_list;
mod messages;
mod model;
mod models;
mod observable;
mod parser;
mod person_list;
mod repl;
mod settings;
mod storage;
mod view;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    let result = match cli.command {
        None => cli::interactive(data_dir),
        Some(Commands::Run { input }) => cli::run(data_dir, &input),
        Some(Commands::Status) => cli::status(data_dir),
        Some(Commands::Load { path }) => cli::load(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
