//! punchclock library root.
//! Exposes the CLI parser, the `run()` entry point and the ledger modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::Context;
use cli::parser::{Cli, Commands};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, ctx),
        Commands::PunchIn | Commands::PunchOut => cli::commands::punch::handle(&cli.command, ctx),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, ctx),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, ctx),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::logging::enable_logging();

    let cli = Cli::parse();

    // config is loaded once; --db / --rate / --now overrides land in the context
    let ctx = Context::from_cli(&cli)?;

    dispatch(&cli, &ctx)
}
