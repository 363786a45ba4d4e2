//! Sequential match sessions backed by a history store

use std::sync::Arc;

use tracing::info;

use crate::error::StoreError;
use crate::game::run_match;
use crate::player::{Strategy, StrategyKind, PLAYER_COUNT};
use crate::random::SeededRng;
use crate::record::MatchRecord;
use crate::report::Report;
use crate::store::HistoryStore;

/// Plays matches one after another and records each in the store
#[derive(Clone, Debug)]
pub struct Arena {
    store: HistoryStore,
    seats: [StrategyKind; PLAYER_COUNT],
    seed: u64,
}

impl Arena {
    pub fn new(store: HistoryStore, seats: [StrategyKind; PLAYER_COUNT], seed: u64) -> Self {
        Self { store, seats, seed }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Strategies for a fresh match. History is read now, so every match
    /// sees all matches persisted before it.
    fn strategies(&self) -> Result<[Strategy; PLAYER_COUNT], StoreError> {
        let history: Arc<[MatchRecord]> = if self.seats.contains(&StrategyKind::MemoryWeighted) {
            Arc::from(self.store.load_all()?)
        } else {
            Arc::from(Vec::new())
        };

        Ok(self.seats.map(|kind| match kind {
            StrategyKind::Random => Strategy::Random,
            StrategyKind::MemoryWeighted => Strategy::MemoryWeighted(Arc::clone(&history)),
        }))
    }

    /// Play match number `index` and persist it
    pub fn play_match(&self, index: u32) -> Result<MatchRecord, StoreError> {
        let [first, second] = self.strategies()?;
        let mut rng = SeededRng::new(self.seed, index);
        let record = run_match(first, second, &mut rng);

        let winner = match record.winner.winner() {
            Some(seat) => format!("{:?}", seat),
            None => "draw".to_string(),
        };
        info!(index, turns = record.turns, %winner, "match played");

        self.store.append(record.clone())?;
        Ok(record)
    }

    /// Play `matches` matches and report over the resulting history
    pub fn run(&self, matches: u32) -> Result<Report, StoreError> {
        for index in 0..matches {
            self.play_match(index)?;
        }
        self.report()
    }

    /// Report over the persisted history
    pub fn report(&self) -> Result<Report, StoreError> {
        Ok(Report::from_history(&self.store.load_all()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeVector;
    use crate::play::Play;
    use crate::player::Seat;
    use crate::record::Outcome;
    use crate::record::TurnRecord;
    use crate::store::DEFAULT_HISTORY_FILE;

    fn arena_in(dir: &tempfile::TempDir, seats: [StrategyKind; PLAYER_COUNT]) -> Arena {
        let store = HistoryStore::new(dir.path().join(DEFAULT_HISTORY_FILE));
        Arena::new(store, seats, 2024)
    }

    #[test]
    fn test_run_persists_every_match() {
        let dir = tempfile::tempdir().unwrap();
        let arena = arena_in(&dir, [StrategyKind::Random, StrategyKind::Random]);

        let report = arena.run(5).unwrap();

        assert_eq!(report.games, 5);
        assert_eq!(report.wins[0] + report.wins[1] + report.draws, 5);
        assert_eq!(arena.store().load_all().unwrap().len(), 5);
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let seats = [StrategyKind::MemoryWeighted, StrategyKind::Random];
        let dir1 = tempfile::tempdir().unwrap();
        let dir2 = tempfile::tempdir().unwrap();

        arena_in(&dir1, seats).run(6).unwrap();
        arena_in(&dir2, seats).run(6).unwrap();

        let history1 = arena_in(&dir1, seats).store().load_all().unwrap();
        let history2 = arena_in(&dir2, seats).store().load_all().unwrap();
        assert_eq!(history1, history2);
    }

    #[test]
    fn test_memory_seat_follows_persisted_wins() {
        let dir = tempfile::tempdir().unwrap();
        let arena = arena_in(&dir, [StrategyKind::MemoryWeighted, StrategyKind::Random]);

        let after_channel = [
            AttributeVector::new([32, 16, 32, 0]).unwrap(),
            AttributeVector::starting(),
        ];
        arena
            .store()
            .append(MatchRecord {
                turns: 1,
                turns_memory: vec![TurnRecord {
                    attributes: after_channel,
                    play: Play::Channel,
                    turn: 0,
                }],
                winner: Outcome::Won(Seat::First),
            })
            .unwrap();

        let record = arena.play_match(0).unwrap();
        assert_eq!(record.turns_memory[0].play, Play::Channel);
        assert_eq!(arena.report().unwrap().games, 2);
    }

    #[test]
    fn test_random_seats_skip_history_load() {
        let dir = tempfile::tempdir().unwrap();
        let arena = arena_in(&dir, [StrategyKind::Random, StrategyKind::Random]);
        std::fs::write(arena.store().path(), "garbage").unwrap();

        // Building strategies does not touch the file, appending does
        assert!(arena.strategies().is_ok());
        assert!(matches!(arena.play_match(0), Err(StoreError::Parse { .. })));
    }
}
