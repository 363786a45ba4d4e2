//! Duel Logic
//!
//! Rules for two-player turn-based duels where a player may choose its
//! plays by voting over the outcomes of previously recorded matches.
//! - `game`: match state machine and winner resolution
//! - `heuristic`: memory-weighted play selection
//! - `store`: JSON match history feeding the heuristic across runs

mod attributes;
mod error;
mod game;
mod heuristic;
mod play;
mod player;
mod random;
mod record;
mod report;
mod session;
mod store;

pub use attributes::{
    distance, Attribute, AttributeVector, ATTRIBUTE_COUNT, ATTRIBUTE_LIMIT, INITIAL_VITALITY,
};
pub use error::{MatchError, RecordError, StoreError};
pub use game::{evaluate, resolve_by_resources, run_match, Match, MatchState, TURN_LIMIT};
pub use heuristic::{best_play, choose_play, outcome_weight, play_weights};
pub use play::{apply_play, burst_offset, Play, PLAY_COUNT};
pub use player::{random_play, Player, Seat, Strategy, StrategyKind, PLAYER_COUNT};
pub use random::SeededRng;
pub use record::{Integral, MatchRecord, Outcome, TurnRecord};
pub use report::Report;
pub use session::Arena;
pub use store::{HistoryStore, DEFAULT_HISTORY_FILE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_strike_scenario() {
        let mut game = Match::new(Strategy::Random, Strategy::Random);
        game.apply_turn(Play::Strike).unwrap();
        game.apply_turn(Play::Strike).unwrap();

        let first = &game.turns_memory()[0];
        assert_eq!(first.attributes[0].vitality(), INITIAL_VITALITY + 256);
        assert_eq!(first.attributes[1].vitality(), INITIAL_VITALITY);
    }

    #[test]
    fn test_rule_constants() {
        assert_eq!(ATTRIBUTE_COUNT, 4);
        assert_eq!(PLAYER_COUNT, 2);
        assert_eq!(PLAY_COUNT, Play::ALL.len());
        assert_eq!(ATTRIBUTE_LIMIT, 1024);
        assert_eq!(TURN_LIMIT, 32);
    }
}
