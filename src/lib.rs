//! rHireDesk library root.
//! Exposes the CLI parser, the high-level run() function and the core
//! list / calendar logic.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use store::MockStore;

/// Everything a command handler needs besides its own arguments.
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    /// Reference date: `--today` or the local date.
    pub today: NaiveDate,
}

impl Context {
    /// The demo dataset anchored on the reference date.
    pub fn store(&self) -> MockStore {
        MockStore::seeded(self.today)
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, ctx),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, ctx),
        Commands::Suggest { .. } => cli::commands::suggest::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = utils::path::resolve_config_path(cli.config.as_deref());

    // `init` and `config` must still work on a broken file.
    let cfg = match Config::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Init { .. } | Commands::Config { .. }) => {
            tracing::warn!(error = %e, "falling back to default configuration");
            Config::default()
        }
        Err(e) => return Err(e),
    };
    ui::messages::set_color(cfg.color);

    let today = match &cli.today {
        Some(d) => utils::date::parse_date(d)?,
        None => utils::date::today(),
    };

    let ctx = Context {
        cfg,
        config_path,
        today,
    };

    dispatch(&cli, &ctx)
}
