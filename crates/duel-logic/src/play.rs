//! Play catalog: the four actions and their effects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::{Attribute, AttributeVector};
use crate::error::RecordError;
use crate::record::Integral;

/// Number of plays in the catalog.
pub const PLAY_COUNT: usize = 4;

/// A play available to a player on its turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Integral", into = "i64")]
pub enum Play {
    /// Raise own vitality.
    Strike = 0,
    /// Refill own pools 2 and 3.
    Recover = 1,
    /// Build own pools 1 and 2, drain the opponent's pool 1.
    Channel = 2,
    /// Damage the opponent by the pool balance; a negative balance heals them.
    Burst = 3,
}

impl Play {
    pub const ALL: [Play; PLAY_COUNT] = [Play::Strike, Play::Recover, Play::Channel, Play::Burst];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Play> {
        Play::ALL.get(index).copied()
    }
}

impl TryFrom<i64> for Play {
    type Error = RecordError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Play::from_index)
            .ok_or(RecordError::UnknownPlay(index))
    }
}

impl TryFrom<Integral> for Play {
    type Error = RecordError;

    fn try_from(raw: Integral) -> Result<Self, Self::Error> {
        Play::try_from(raw.0)
    }
}

impl From<Play> for i64 {
    fn from(play: Play) -> Self {
        play.index() as i64
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Play::Strike => "Strike",
            Play::Recover => "Recover",
            Play::Channel => "Channel",
            Play::Burst => "Burst",
        };
        f.write_str(name)
    }
}

/// Damage dealt by Burst: the actor's pools 2/3 against the opponent's pools 1/2.
///
/// May be negative.
pub fn burst_offset(actor: &AttributeVector, opponent: &AttributeVector) -> i64 {
    let attack = (actor.get(Attribute::Pool2) + actor.get(Attribute::Pool3) * 2) * 2;
    let defence = opponent.get(Attribute::Pool1) * 2 + opponent.get(Attribute::Pool2);
    attack - defence
}

/// Apply a play's effects to the acting player and its opponent
pub fn apply_play(play: Play, actor: &mut AttributeVector, opponent: &mut AttributeVector) {
    match play {
        Play::Strike => {
            actor.change(Attribute::Vitality, 256);
        }
        Play::Recover => {
            actor.change(Attribute::Pool2, 32);
            actor.change(Attribute::Pool3, 28);
        }
        Play::Channel => {
            actor.change(Attribute::Pool1, 16);
            actor.change(Attribute::Pool2, 32);
            opponent.change(Attribute::Pool1, -16);
        }
        Play::Burst => {
            let offset = burst_offset(actor, opponent);
            opponent.change(Attribute::Vitality, -offset);
        }
    }
}
