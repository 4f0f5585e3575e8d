//! tasklog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use crate::core::session::Session;
use clap::Parser;
use cli::parser::Cli;
use cli::repl::{self, Outcome};
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Resolve the data directory once; every path is bound to it.
    let dir = utils::path::resolve_data_dir(cli.dir.as_deref());
    std::fs::create_dir_all(&dir)?;

    let mut session = Session::open(&dir);

    if !cli.test {
        repl::splash(&session);
    }

    // The tool is always between tasks: a session starts Running.
    if let Outcome::Quit = repl::start_task(&mut session)? {
        return Ok(());
    }

    repl::run_loop(&mut session)
}
