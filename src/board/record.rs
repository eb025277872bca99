//! Score records and ranked results.

use std::cmp::Ordering;

use super::score::Score;

/// Stable identifier of a ranked entity.
pub type EntityId = u64;

/// One entity's score.
///
/// The identity table owns the canonical copy. The ranking holds a snapshot
/// that is only valid while the table copy is unchanged, which is why a score
/// change removes the snapshot, mutates the table, then inserts a new one.
///
/// Records order by score descending, then by id ascending, so rank 1 is the
/// highest score and equal scores rank the lower id first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScoreRecord {
    pub id: EntityId,
    pub score: Score,
}

impl ScoreRecord {
    pub fn new(id: EntityId, score: Score) -> ScoreRecord {
        return ScoreRecord { id, score };
    }
}

impl PartialOrd for ScoreRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl Ord for ScoreRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher score first, then lower id.
        match other.score.cmp(&self.score) {
            Ordering::Equal => self.id.cmp(&other.id),
            other => other,
        }
    }
}

/// A ranked entity as returned by leaderboard queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedEntry {
    pub id: EntityId,
    pub score: Score,
    /// 1-based position in the ranking.
    pub rank: usize,
}

impl RankedEntry {
    pub(crate) fn new(rank: usize, record: &ScoreRecord) -> RankedEntry {
        return RankedEntry {
            id: record.id,
            score: record.score,
            rank,
        };
    }
}
