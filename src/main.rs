//! QuickBite CLI
//!
//! Usage: quickbite [--data-dir DIR] [--config FILE] [-v...]

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use quickbite::config::{Config, LogLevel};
use quickbite::presentation::{Cli, Console};
use quickbite::{logging, CsvRestaurantStore, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = logging::setup_tracing(LogLevel::default().raised(cli.verbose));

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, warnings) =
        Config::discover(cli.config.as_deref(), &cwd).context("failed to load config")?;
    let mut config = config.with_env_overrides();
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }

    log.set_level(config.log.level.raised(cli.verbose));
    for warning in &warnings {
        warn!("{}", warning);
    }

    let store = CsvRestaurantStore::from_config(&config.data);
    let (mut session, summary) = Session::load(&store);
    if !summary.is_complete() {
        info!(?summary, "started with incomplete data");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), BufWriter::new(stdout.lock()), config.display);
    console.run(&mut session)?;

    info!(orders = session.orders().len(), "session finished");
    Ok(())
}
