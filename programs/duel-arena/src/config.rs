//! Command-line configuration

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use duel_logic::{StrategyKind, DEFAULT_HISTORY_FILE, PLAYER_COUNT};

/// Matches played when `--matches` is not given.
pub const DEFAULT_MATCHES: u32 = 100;

/// Strategy choice for one seat
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeatStrategy {
    Random,
    Memory,
}

impl From<SeatStrategy> for StrategyKind {
    fn from(strategy: SeatStrategy) -> Self {
        match strategy {
            SeatStrategy::Random => StrategyKind::Random,
            SeatStrategy::Memory => StrategyKind::MemoryWeighted,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "duel-arena",
    about = "Play duels in sequence, record them, and report over the match history"
)]
pub struct ArenaArgs {
    /// Number of matches to play
    #[arg(long, default_value_t = DEFAULT_MATCHES)]
    pub matches: u32,

    /// Match history file
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,

    /// Seed for reproducible runs; derived from the clock when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Strategy of the seat that moves first
    #[arg(long, value_enum, default_value_t = SeatStrategy::Memory)]
    pub first: SeatStrategy,

    /// Strategy of the seat that moves second
    #[arg(long, value_enum, default_value_t = SeatStrategy::Random)]
    pub second: SeatStrategy,

    /// Emit JSON logs and a JSON report
    #[arg(long)]
    pub json: bool,

    /// Only print the report for the existing history
    #[arg(long)]
    pub report_only: bool,
}

/// Validated run settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    pub matches: u32,
    pub history: PathBuf,
    pub seed: u64,
    pub seats: [StrategyKind; PLAYER_COUNT],
    pub json: bool,
    pub report_only: bool,
}

impl ArenaConfig {
    pub fn from_args(args: ArenaArgs) -> Result<Self> {
        if args.matches == 0 && !args.report_only {
            bail!("--matches must be greater than 0");
        }

        Ok(Self {
            matches: args.matches,
            history: args.history,
            seed: args.seed.unwrap_or_else(clock_seed),
            seats: [args.first.into(), args.second.into()],
            json: args.json,
            report_only: args.report_only,
        })
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
