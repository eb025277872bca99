//! The leaderboard service.
//!
//! A [`Leaderboard`] pairs an identity table (every entity that ever received
//! a score) with a ranking index (only the entities whose score is positive).
//! Both live behind one reader/writer lock and change together:
//!
//! - `update_score` takes the write lock for the whole remove, mutate,
//!   reinsert sequence, so no reader ever sees a half-moved record.
//! - `get_by_rank` and `get_by_id` take the read lock and may run in parallel.
//!
//! An entity whose score drops to zero or below leaves the ranking but keeps
//! its table entry, so later updates accumulate onto the old total.

mod record;
mod score;

pub use record::EntityId;
pub use record::RankedEntry;
pub use record::ScoreRecord;
pub use score::Score;
pub use score::SCORE_DECIMALS;

use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::index::{LevelGenerator, RandomLevels, SkipList};
use crate::options::Options;

/// The three operations an outer API layer drives.
pub trait ScoreBoard: Send + Sync {
    /// Add `delta` to `id`'s score and return the new total.
    fn update_score(&self, id: EntityId, delta: Score) -> Result<Score>;

    /// Entries ranked `start..=end`, clamped to the ranking.
    fn get_by_rank(&self, start: usize, end: usize) -> Vec<RankedEntry>;

    /// Up to `high` entries above `id`, `id` itself, and up to `low` below.
    fn get_by_id(&self, id: EntityId, high: usize, low: usize) -> Vec<RankedEntry>;
}

/// Everything the lock guards.
struct Standings<L> {
    records: FxHashMap<EntityId, ScoreRecord>,
    ranking: SkipList<ScoreRecord, L>,
}

/// A live leaderboard, safe to share across threads.
pub struct Leaderboard<L = RandomLevels> {
    state: RwLock<Standings<L>>,
}

impl Leaderboard<RandomLevels> {
    /// An empty leaderboard with default options.
    pub fn new() -> Self {
        Self::with_levels(RandomLevels::new())
    }

    /// An empty leaderboard configured by `opts`.
    pub fn with_options(opts: Options) -> Result<Self> {
        opts.validate()?;

        let rng = match opts.level_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let levels = RandomLevels::with_rng(rng, opts.max_level);
        log::info!(
            "leaderboard created: max_level={} seeded={} capacity={}",
            opts.max_level,
            opts.level_seed.is_some(),
            opts.initial_capacity
        );
        Ok(Self::with_capacity_and_levels(opts.initial_capacity, levels))
    }
}

impl Default for Leaderboard<RandomLevels> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Leaderboard<L> {
    /// An empty leaderboard whose ranking draws node heights from `levels`.
    pub fn with_levels(levels: L) -> Self {
        Self::with_capacity_and_levels(0, levels)
    }

    fn with_capacity_and_levels(capacity: usize, levels: L) -> Self {
        let mut records = FxHashMap::default();
        records.reserve(capacity);
        Leaderboard {
            state: RwLock::new(Standings {
                records,
                ranking: SkipList::with_capacity_and_levels(capacity, levels),
            }),
        }
    }

    /// Entries ranked `start..=end` (1-based, inclusive).
    ///
    /// The window is clamped to the current ranking; an inverted or
    /// out-of-range window is empty.
    pub fn get_by_rank(&self, start: usize, end: usize) -> Vec<RankedEntry> {
        let state = self.state.read();
        log::trace!("get_by_rank {}..={} of {}", start, end, state.ranking.len());
        state
            .ranking
            .range(start, end)
            .into_iter()
            .map(|(rank, record)| RankedEntry::new(rank, record))
            .collect()
    }

    /// The contiguous window around `id`: up to `high` entries ranked above
    /// it, `id` itself, and up to `low` entries ranked below.
    ///
    /// Empty if `id` was never scored or is not currently ranked.
    pub fn get_by_id(&self, id: EntityId, high: usize, low: usize) -> Vec<RankedEntry> {
        let state = self.state.read();
        log::trace!("get_by_id {} (high={}, low={})", id, high, low);
        let Some(record) = state.records.get(&id) else {
            return Vec::new();
        };
        if !record.score.is_positive() {
            return Vec::new();
        }
        state
            .ranking
            .neighbors(record, high, low)
            .into_iter()
            .map(|(rank, record)| RankedEntry::new(rank, record))
            .collect()
    }

    /// Current total for `id`, ranked or not.
    pub fn score_of(&self, id: EntityId) -> Option<Score> {
        self.state.read().records.get(&id).map(|record| record.score)
    }

    /// Current 1-based rank of `id`, if it is ranked.
    pub fn rank_of(&self, id: EntityId) -> Option<usize> {
        let state = self.state.read();
        let record = state.records.get(&id)?;
        if !record.score.is_positive() {
            return None;
        }
        state.ranking.rank_of(record)
    }

    /// Number of ranked entities (score > 0).
    pub fn ranked_len(&self) -> usize {
        self.state.read().ranking.len()
    }

    /// Number of entities ever scored.
    pub fn entity_count(&self) -> usize {
        self.state.read().records.len()
    }

    /// Forget every entity.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.records.clear();
        state.ranking.clear();
        log::debug!("leaderboard cleared");
    }

    /// Panic unless the ranking holds exactly the positive-score records of
    /// the identity table, in order, with correct spans. Meant for tests.
    pub fn check_invariants(&self) {
        let state = self.state.read();
        state.ranking.check_invariants();

        let ranked = state.records.values().filter(|r| r.score.is_positive()).count();
        assert_eq!(
            ranked,
            state.ranking.len(),
            "INVARIANT VIOLATED: {} positive records but {} ranked",
            ranked,
            state.ranking.len()
        );
        for record in state.ranking.iter() {
            assert_eq!(
                state.records.get(&record.id),
                Some(record),
                "INVARIANT VIOLATED: stale snapshot for {}",
                record.id
            );
        }
    }
}

impl<L: LevelGenerator> Leaderboard<L> {
    /// Add `delta` to `id`'s score and return the new total.
    ///
    /// A zero delta is rejected. The first update for an id creates its
    /// record at zero. Only positive totals are ranked.
    pub fn update_score(&self, id: EntityId, delta: Score) -> Result<Score> {
        if delta.is_zero() {
            log::warn!("rejected zero score delta for {}", id);
            return Err(Error::ZeroDelta { id });
        }

        let mut state = self.state.write();
        let state = &mut *state;

        let current = match state.records.get(&id) {
            Some(record) => *record,
            None => ScoreRecord::new(id, Score::ZERO),
        };
        let Some(score) = current.score.checked_add(delta) else {
            log::warn!("rejected score delta {} for {}: overflow", delta, id);
            return Err(Error::ScoreOverflow { id });
        };

        // The ranking orders by score, so the old snapshot must come out
        // before the score changes.
        if current.score.is_positive() {
            let removed = state.ranking.remove(&current);
            debug_assert!(removed.is_some(), "ranked record {} missing from index", id);
        }

        let updated = ScoreRecord::new(id, score);
        state.records.insert(id, updated);
        if score.is_positive() {
            state.ranking.insert(updated);
        }

        log::debug!(
            "score for {} changed by {} to {} ({})",
            id,
            delta,
            score,
            if score.is_positive() { "ranked" } else { "unranked" }
        );
        Ok(score)
    }
}

impl<L: LevelGenerator + Send + Sync> ScoreBoard for Leaderboard<L> {
    fn update_score(&self, id: EntityId, delta: Score) -> Result<Score> {
        Leaderboard::update_score(self, id, delta)
    }

    fn get_by_rank(&self, start: usize, end: usize) -> Vec<RankedEntry> {
        Leaderboard::get_by_rank(self, start, end)
    }

    fn get_by_id(&self, id: EntityId, high: usize, low: usize) -> Vec<RankedEntry> {
        Leaderboard::get_by_id(self, id, high, low)
    }
}
