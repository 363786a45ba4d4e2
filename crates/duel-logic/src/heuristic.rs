//! Memory-weighted decision heuristic
//!
//! Every past turn played from the same seat casts a vote for the play it
//! used. The vote is signed by how that match ended for the seat and grows
//! as the past attributes get closer to the present ones:
//!
//! ```text
//! vote = outcome_weight * 256 / (|past - present| + 1)
//! ```
//!
//! summed over all four attributes of both players. The play with the
//! largest total wins, the lowest index taking ties.

use crate::attributes::{distance, Attribute, AttributeVector};
use crate::play::{Play, PLAY_COUNT};
use crate::player::Seat;
use crate::record::{MatchRecord, Outcome};

/// Outcome weight of a past match the seat won.
pub const WIN_WEIGHT: i64 = 4;
/// Outcome weight of a past match the seat lost.
pub const LOSS_WEIGHT: i64 = -4;
/// Outcome weight of a drawn match.
pub const DRAW_WEIGHT: i64 = -1;
/// Vote of a single attribute that matches the present exactly, per unit of outcome weight.
pub const SIMILARITY_SCALE: i64 = 256;

/// Weight of a past match's outcome from `seat`'s point of view
pub fn outcome_weight(outcome: Outcome, seat: Seat) -> i64 {
    match outcome {
        Outcome::Won(winner) if winner == seat => WIN_WEIGHT,
        Outcome::Won(_) => LOSS_WEIGHT,
        Outcome::Draw => DRAW_WEIGHT,
    }
}

/// Vote of one attribute pair. Integer division truncates toward zero.
fn similarity_vote(outcome_weight: i64, past: i64, present: i64) -> i64 {
    let denominator = i64::try_from(distance(past, present)).unwrap_or(i64::MAX - 1) + 1;
    outcome_weight * SIMILARITY_SCALE / denominator
}

/// Accumulated vote for every play
pub fn play_weights(
    seat: Seat,
    own: &AttributeVector,
    opponent: &AttributeVector,
    history: &[MatchRecord],
) -> [i64; PLAY_COUNT] {
    let mut weights = [0i64; PLAY_COUNT];

    for record in history {
        let weight = outcome_weight(record.winner, seat);

        for turn in record.turns_by(seat) {
            let past_own = &turn.attributes[seat.index()];
            let past_opponent = &turn.attributes[seat.opponent().index()];
            let slot = &mut weights[turn.play.index()];

            for attribute in Attribute::ALL {
                *slot += similarity_vote(weight, past_own.get(attribute), own.get(attribute));
                *slot += similarity_vote(
                    weight,
                    past_opponent.get(attribute),
                    opponent.get(attribute),
                );
            }
        }
    }

    weights
}

/// Play with the highest weight; the first one wins ties
pub fn best_play(weights: &[i64; PLAY_COUNT]) -> Play {
    let mut best = 0;
    for (index, weight) in weights.iter().enumerate().skip(1) {
        if *weight > weights[best] {
            best = index;
        }
    }
    Play::ALL[best]
}

/// Choose a play for `seat` from the match history
pub fn choose_play(
    seat: Seat,
    own: &AttributeVector,
    opponent: &AttributeVector,
    history: &[MatchRecord],
) -> Play {
    best_play(&play_weights(seat, own, opponent, history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PLAYER_COUNT;
    use crate::record::TurnRecord;
    use proptest::prelude::*;

    fn attrs(values: [i64; 4]) -> AttributeVector {
        AttributeVector::new(values).unwrap()
    }

    fn turn(turn: u32, play: Play, attributes: [AttributeVector; PLAYER_COUNT]) -> TurnRecord {
        TurnRecord { attributes, play, turn }
    }

    fn record(winner: Outcome, turns_memory: Vec<TurnRecord>) -> MatchRecord {
        MatchRecord {
            turns: turns_memory.len() as u32,
            turns_memory,
            winner,
        }
    }

    fn start() -> AttributeVector {
        AttributeVector::starting()
    }

    #[test]
    fn test_outcome_weights() {
        assert_eq!(outcome_weight(Outcome::Won(Seat::First), Seat::First), 4);
        assert_eq!(outcome_weight(Outcome::Won(Seat::Second), Seat::First), -4);
        assert_eq!(outcome_weight(Outcome::Won(Seat::Second), Seat::Second), 4);
        assert_eq!(outcome_weight(Outcome::Won(Seat::First), Seat::Second), -4);
        assert_eq!(outcome_weight(Outcome::Draw, Seat::First), -1);
        assert_eq!(outcome_weight(Outcome::Draw, Seat::Second), -1);
    }

    #[test]
    fn test_exact_match_gives_maximal_vote() {
        let history = vec![record(
            Outcome::Won(Seat::First),
            vec![turn(0, Play::Burst, [start(), start()])],
        )];
        let weights = play_weights(Seat::First, &start(), &start(), &history);
        // 8 attribute pairs at distance 0
        assert_eq!(weights, [0, 0, 0, 8 * 4 * 256]);
        assert_eq!(best_play(&weights), Play::Burst);
    }

    #[test]
    fn test_distance_scaled_votes() {
        // Own vitality differs by 256: 1024 / 257 = 3, the other 7 pairs give 1024 each
        let history = vec![record(
            Outcome::Won(Seat::First),
            vec![turn(0, Play::Recover, [attrs([288, 0, 0, 0]), start()])],
        )];
        let weights = play_weights(Seat::First, &start(), &start(), &history);
        assert_eq!(weights[Play::Recover.index()], 3 + 7 * 1024);
    }

    #[test]
    fn test_negative_votes_truncate_toward_zero() {
        // -1024 / 257 truncates to -3
        let history = vec![record(
            Outcome::Won(Seat::Second),
            vec![turn(0, Play::Recover, [attrs([288, 0, 0, 0]), start()])],
        )];
        let weights = play_weights(Seat::First, &start(), &start(), &history);
        assert_eq!(weights[Play::Recover.index()], -3 - 7 * 1024);
    }

    #[test]
    fn test_draw_penalty() {
        let history = vec![record(Outcome::Draw, vec![turn(0, Play::Strike, [start(), start()])])];
        let weights = play_weights(Seat::First, &start(), &start(), &history);
        assert_eq!(weights, [-8 * 256, 0, 0, 0]);
        // Strike is now the worst; the first of the zero-weight plays wins
        assert_eq!(best_play(&weights), Play::Recover);
    }

    #[test]
    fn test_only_own_seat_turns_vote() {
        let history = vec![record(
            Outcome::Won(Seat::Second),
            vec![
                turn(0, Play::Strike, [start(), start()]),
                turn(1, Play::Channel, [start(), start()]),
            ],
        )];
        let second = play_weights(Seat::Second, &start(), &start(), &history);
        assert_eq!(second, [0, 0, 8 * 4 * 256, 0]);

        let first = play_weights(Seat::First, &start(), &start(), &history);
        assert_eq!(first, [8 * -4 * 256, 0, 0, 0]);
    }

    #[test]
    fn test_seat_perspective_of_snapshot() {
        // For the second seat, "own" reads slot 1 of the snapshot
        let own = attrs([100, 0, 0, 0]);
        let history = vec![record(
            Outcome::Won(Seat::Second),
            vec![turn(1, Play::Burst, [start(), own])],
        )];
        let weights = play_weights(Seat::Second, &own, &start(), &history);
        assert_eq!(weights[Play::Burst.index()], 8 * 4 * 256);
    }

    #[test]
    fn test_record_without_turns_contributes_nothing() {
        let history = vec![record(Outcome::Won(Seat::First), Vec::new())];
        for seat in Seat::BOTH {
            let weights = play_weights(seat, &attrs([500, 3, 9, 1]), &start(), &history);
            assert_eq!(weights, [0; PLAY_COUNT]);
        }
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let history = vec![record(
            Outcome::Won(Seat::First),
            vec![
                turn(0, Play::Burst, [start(), start()]),
                turn(2, Play::Recover, [start(), start()]),
            ],
        )];
        let weights = play_weights(Seat::First, &start(), &start(), &history);
        assert_eq!(weights[Play::Recover.index()], weights[Play::Burst.index()]);
        assert_eq!(choose_play(Seat::First, &start(), &start(), &history), Play::Recover);
    }

    #[test]
    fn test_all_zero_weights_pick_strike() {
        assert_eq!(best_play(&[0; PLAY_COUNT]), Play::Strike);
    }

    proptest! {
        #[test]
        fn prop_best_play_is_first_maximum(weights in prop::array::uniform4(-50i64..50)) {
            let best = best_play(&weights).index();
            let max = *weights.iter().max().unwrap();
            prop_assert_eq!(weights[best], max);
            prop_assert!(weights[..best].iter().all(|w| *w < max));
        }
    }
}
