//! SCOPE library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! normalize → classify → aggregate → log pipeline.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod text;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::session::SessionLogic;
use db::pool::DbPool;
use errors::AppResult;
use models::Session;
use std::path::Path;

/// Build the effective configuration: file (or defaults), then CLI overrides.
pub fn effective_config(cli: &Cli) -> AppResult<Config> {
    let cfg = Config::load()?;
    Ok(match &cli.data_dir {
        Some(dir) => cfg.with_data_dir(&utils::path::expand_tilde(dir)),
        None => cfg,
    })
}

/// Resolve who is acting for this invocation.
fn resolve_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let mut pool = DbPool::new(&cfg.database)?;
    SessionLogic::resolve(
        &mut pool,
        Path::new(&cfg.session_file),
        cli.user.as_deref(),
    )
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = if cli.command.requires_session() || matches!(cli.command, Commands::Whoami) {
        resolve_session(cli, cfg)?
    } else {
        Session::Anonymous
    };

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::logout::handle(cfg),
        Commands::Whoami => {
            cli::commands::whoami::handle(&session);
            Ok(())
        }
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg, &session),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg, &session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, &session),
        Commands::Trend { .. } => cli::commands::trend::handle(&cli.command, cfg, &session),
        Commands::Model { .. } => cli::commands::model::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = effective_config(&cli)?;
    dispatch(&cli, &cfg)
}
