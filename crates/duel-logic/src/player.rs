//! Players, seats and decision strategies

use std::sync::Arc;

use crate::attributes::AttributeVector;
use crate::heuristic;
use crate::play::{Play, PLAY_COUNT};
use crate::random::SeededRng;
use crate::record::MatchRecord;

/// Number of players in a match.
pub const PLAYER_COUNT: usize = 2;

/// Position at the table. The first seat plays on even turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    First = 0,
    Second = 1,
}

impl Seat {
    pub const BOTH: [Seat; PLAYER_COUNT] = [Seat::First, Seat::Second];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Seat that acts on the given zero-based turn
    pub fn for_turn(turn: u32) -> Seat {
        if turn % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        }
    }
}

/// Which strategy a seat uses, without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    /// Uniformly random play each turn.
    Random,
    /// Vote over the loaded match history.
    MemoryWeighted,
}

/// Decision strategy with the data it needs
#[derive(Clone, Debug)]
pub enum Strategy {
    Random,
    /// History snapshot taken when the player was built; never refreshed.
    MemoryWeighted(Arc<[MatchRecord]>),
}

/// A participant in one match
#[derive(Clone, Debug)]
pub struct Player {
    seat: Seat,
    attributes: AttributeVector,
    strategy: Strategy,
}

impl Player {
    /// Create a player with starting attributes
    pub fn new(seat: Seat, strategy: Strategy) -> Self {
        Self::with_attributes(seat, AttributeVector::starting(), strategy)
    }

    pub fn with_attributes(seat: Seat, attributes: AttributeVector, strategy: Strategy) -> Self {
        Self { seat, attributes, strategy }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn attributes(&self) -> &AttributeVector {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeVector {
        &mut self.attributes
    }

    /// Pick this turn's play.
    ///
    /// `opponent` is the other seat's current attributes. A memory-weighted
    /// player with no history plays randomly.
    pub fn choose(&self, opponent: &AttributeVector, rng: &mut SeededRng) -> Play {
        match &self.strategy {
            Strategy::MemoryWeighted(history) if !history.is_empty() => {
                heuristic::choose_play(self.seat, &self.attributes, opponent, history)
            }
            _ => random_play(rng),
        }
    }
}

/// Uniformly random play
pub fn random_play(rng: &mut SeededRng) -> Play {
    // PLAY_COUNT divides 2^32, so next_range is exactly uniform
    Play::ALL[rng.next_range(PLAY_COUNT as u32) as usize]
}
