//! Match records: the persisted trace of finished matches

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeVector;
use crate::error::RecordError;
use crate::play::Play;
use crate::player::{Seat, PLAYER_COUNT};

/// An integer read from the history file.
///
/// The history may have been written by tools that store every number as
/// a double, so floats with no fractional part are accepted as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Integral(pub i64);

struct IntegralVisitor;

impl<'de> Visitor<'de> for IntegralVisitor {
    type Value = Integral;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integral number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Integral, E> {
        Ok(Integral(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Integral, E> {
        i64::try_from(v)
            .map(Integral)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Integral, E> {
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(Integral(v as i64))
        } else {
            Err(E::custom(RecordError::NonIntegral(v)))
        }
    }
}

impl<'de> Deserialize<'de> for Integral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IntegralVisitor)
    }
}

fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Integral::deserialize(deserializer)?;
    u32::try_from(raw.0).map_err(|_| de::Error::custom(RecordError::InvalidCount(raw.0)))
}

/// How a match ended. Persisted as 0, 1 (winning seat) or 2 (draw).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Integral", into = "i64")]
pub enum Outcome {
    Won(Seat),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Seat> {
        match self {
            Outcome::Won(seat) => Some(seat),
            Outcome::Draw => None,
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = RecordError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Outcome::Won(Seat::First)),
            1 => Ok(Outcome::Won(Seat::Second)),
            2 => Ok(Outcome::Draw),
            other => Err(RecordError::UnknownWinner(other)),
        }
    }
}

impl TryFrom<Integral> for Outcome {
    type Error = RecordError;

    fn try_from(raw: Integral) -> Result<Self, Self::Error> {
        Outcome::try_from(raw.0)
    }
}

impl From<Outcome> for i64 {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(seat) => seat.index() as i64,
            Outcome::Draw => 2,
        }
    }
}

/// One applied turn and the attributes of both players right after it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Indexed by seat, then attribute.
    pub attributes: [AttributeVector; PLAYER_COUNT],
    pub play: Play,
    /// Zero-based; even turns belong to the first seat.
    #[serde(deserialize_with = "deserialize_count")]
    pub turn: u32,
}

impl TurnRecord {
    pub fn seat(&self) -> Seat {
        Seat::for_turn(self.turn)
    }
}

/// A finished match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(deserialize_with = "deserialize_count")]
    pub turns: u32,
    pub turns_memory: Vec<TurnRecord>,
    pub winner: Outcome,
}

impl MatchRecord {
    /// Turns that were played from `seat`
    pub fn turns_by(&self, seat: Seat) -> impl Iterator<Item = &TurnRecord> {
        self.turns_memory.iter().filter(move |t| t.seat() == seat)
    }
}
