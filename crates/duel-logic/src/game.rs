//! Match execution engine

use tracing::{debug, info};

use crate::attributes::AttributeVector;
use crate::error::MatchError;
use crate::play::{apply_play, Play};
use crate::player::{Player, Seat, Strategy, PLAYER_COUNT};
use crate::random::SeededRng;
use crate::record::{MatchRecord, Outcome, TurnRecord};

/// Turns after which a match is decided on resources.
pub const TURN_LIMIT: u32 = 32;

/// Lifecycle of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchState {
    Running,
    Finished(Outcome),
}

/// A match in progress between two seated players
#[derive(Clone, Debug)]
pub struct Match {
    players: [Player; PLAYER_COUNT],
    turn: u32,
    state: MatchState,
    turns_memory: Vec<TurnRecord>,
}

impl Match {
    /// Seat two players with starting attributes
    pub fn new(first: Strategy, second: Strategy) -> Self {
        Self {
            players: [Player::new(Seat::First, first), Player::new(Seat::Second, second)],
            turn: 0,
            state: MatchState::Running,
            turns_memory: Vec::with_capacity(TURN_LIMIT as usize),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Number of turns applied so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat whose turn it is
    pub fn current_seat(&self) -> Seat {
        Seat::for_turn(self.turn)
    }

    pub fn turns_memory(&self) -> &[TurnRecord] {
        &self.turns_memory
    }

    /// Let the current player choose, then apply its play.
    pub fn step(&mut self, rng: &mut SeededRng) -> Result<MatchState, MatchError> {
        let play = self.choose(rng);
        self.apply_turn(play)
    }

    /// Apply `play` for the current player and advance one turn.
    pub fn apply_turn(&mut self, play: Play) -> Result<MatchState, MatchError> {
        if let MatchState::Finished(_) = self.state {
            return Err(MatchError::AlreadyFinished(self.turn));
        }
        Ok(self.advance(play))
    }

    /// Play until the match is decided and return its record
    pub fn run(mut self, rng: &mut SeededRng) -> MatchRecord {
        loop {
            if let MatchState::Finished(outcome) = self.state {
                return self.finish(outcome);
            }
            let play = self.choose(rng);
            self.advance(play);
        }
    }

    /// Record of the match, once it has finished
    pub fn into_record(self) -> Option<MatchRecord> {
        match self.state {
            MatchState::Finished(outcome) => Some(self.finish(outcome)),
            MatchState::Running => None,
        }
    }

    fn finish(self, outcome: Outcome) -> MatchRecord {
        MatchRecord {
            turns: self.turn,
            turns_memory: self.turns_memory,
            winner: outcome,
        }
    }

    fn choose(&self, rng: &mut SeededRng) -> Play {
        let seat = self.current_seat();
        let opponent = self.player(seat.opponent()).attributes();
        self.player(seat).choose(opponent, rng)
    }

    fn snapshot(&self) -> [AttributeVector; PLAYER_COUNT] {
        [*self.players[0].attributes(), *self.players[1].attributes()]
    }

    fn advance(&mut self, play: Play) -> MatchState {
        let seat = self.current_seat();
        let [first, second] = &mut self.players;
        let (actor, opponent) = match seat {
            Seat::First => (first, second),
            Seat::Second => (second, first),
        };
        apply_play(play, actor.attributes_mut(), opponent.attributes_mut());

        let attributes = self.snapshot();
        debug!(
            turn = self.turn,
            seat = seat.index(),
            %play,
            first = ?attributes[0].values(),
            second = ?attributes[1].values(),
            "turn applied"
        );
        self.turns_memory.push(TurnRecord {
            attributes,
            play,
            turn: self.turn,
        });
        self.turn += 1;

        if let Some(outcome) = evaluate(&attributes, self.turn) {
            info!(turns = self.turn, winner = i64::from(outcome), "match finished");
            self.state = MatchState::Finished(outcome);
        }
        self.state
    }
}

/// Decide whether a match is over after `turns` turns.
///
/// A seat at zero vitality loses; if both are down, or the turn limit is
/// reached, the resource pools decide.
pub fn evaluate(attributes: &[AttributeVector; PLAYER_COUNT], turns: u32) -> Option<Outcome> {
    let [first, second] = attributes;
    match (first.is_defeated(), second.is_defeated()) {
        (true, true) => Some(resolve_by_resources(first, second)),
        (true, false) => Some(Outcome::Won(Seat::Second)),
        (false, true) => Some(Outcome::Won(Seat::First)),
        (false, false) if turns >= TURN_LIMIT => Some(resolve_by_resources(first, second)),
        (false, false) => None,
    }
}

/// Tie-break on summed resource pools; equal sums are a draw
pub fn resolve_by_resources(first: &AttributeVector, second: &AttributeVector) -> Outcome {
    let (a, b) = (first.resource_total(), second.resource_total());
    if a > b {
        Outcome::Won(Seat::First)
    } else if b > a {
        Outcome::Won(Seat::Second)
    } else {
        Outcome::Draw
    }
}

/// Run a complete match between two strategies
pub fn run_match(first: Strategy, second: Strategy, rng: &mut SeededRng) -> MatchRecord {
    Match::new(first, second).run(rng)
}
