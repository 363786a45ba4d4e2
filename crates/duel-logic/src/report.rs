//! Aggregate statistics over a match history

use std::fmt;

use serde::Serialize;

use crate::play::{Play, PLAY_COUNT};
use crate::player::{Seat, PLAYER_COUNT};
use crate::record::{MatchRecord, Outcome};

/// Summary of a history
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub games: u32,
    /// Indexed by seat.
    pub wins: [u32; PLAYER_COUNT],
    pub draws: u32,
    pub mean_turns: f64,
    /// First seat's share of decisive games; `None` without any.
    pub win_rate: Option<f64>,
    /// First seat's share of all games, draws included.
    pub overall_win_rate: Option<f64>,
    /// Plays made from each seat, indexed by seat then play.
    pub play_usage: [[u32; PLAY_COUNT]; PLAYER_COUNT],
}

impl Report {
    pub fn from_history(history: &[MatchRecord]) -> Self {
        let mut report = Report::default();
        let mut total_turns = 0u64;

        for record in history {
            report.games += 1;
            total_turns += record.turns as u64;
            match record.winner {
                Outcome::Won(seat) => report.wins[seat.index()] += 1,
                Outcome::Draw => report.draws += 1,
            }
            for turn in &record.turns_memory {
                report.play_usage[turn.seat().index()][turn.play.index()] += 1;
            }
        }

        if report.games > 0 {
            report.mean_turns = total_turns as f64 / report.games as f64;
            report.overall_win_rate = Some(report.wins[0] as f64 / report.games as f64);
        }
        let decisive = report.wins[0] + report.wins[1];
        if decisive > 0 {
            report.win_rate = Some(report.wins[0] as f64 / decisive as f64);
        }

        report
    }
}

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.2}%", rate * 100.0),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games played:     {}", self.games)?;
        writeln!(f, "wins (first):     {}", self.wins[0])?;
        writeln!(f, "wins (second):    {}", self.wins[1])?;
        writeln!(f, "draws:            {}", self.draws)?;
        writeln!(f, "mean turns:       {:.2}", self.mean_turns)?;
        writeln!(f, "win rate:         {}", percent(self.win_rate))?;
        writeln!(f, "overall win rate: {}", percent(self.overall_win_rate))?;
        for seat in Seat::BOTH {
            let usage = &self.play_usage[seat.index()];
            let line = Play::ALL
                .iter()
                .map(|play| format!("{}={}", play, usage[play.index()]))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "plays ({:?}): {}", seat, line)?;
        }
        Ok(())
    }
}
