//! Duel Arena
//!
//! Plays a batch of duels against the shared match history, then prints
//! aggregate statistics over everything recorded so far.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use duel_logic::{Arena, HistoryStore};
use tracing::info;

use crate::config::{ArenaArgs, ArenaConfig};

fn main() -> Result<()> {
    let config = ArenaConfig::from_args(ArenaArgs::parse())?;
    telemetry::init_tracing(config.json);

    info!(
        seed = config.seed,
        matches = config.matches,
        history = %config.history.display(),
        seats = ?config.seats,
        "starting arena"
    );

    let arena = Arena::new(HistoryStore::new(config.history.clone()), config.seats, config.seed);
    let report = if config.report_only {
        arena.report()
    } else {
        arena.run(config.matches)
    }
    .with_context(|| format!("arena run on {} failed", config.history.display()))?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
