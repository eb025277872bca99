use std::fmt;

use crate::board::EntityId;

/// Result returning Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the leaderboard.
///
/// Absence is never an error: a query for an unknown id or an out-of-range
/// rank window returns an empty result instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A score update with a zero delta. Nothing was changed.
    ZeroDelta { id: EntityId },
    /// The accumulated score would leave the representable range. Nothing was
    /// changed.
    ScoreOverflow { id: EntityId },
    /// Text that does not parse as a score.
    InvalidScore(String),
    /// An `Options` value out of range.
    InvalidOption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroDelta { id } => write!(f, "Score delta for {id} cannot be zero"),
            Error::ScoreOverflow { id } => write!(f, "Score for {id} would overflow"),
            Error::InvalidScore(s) => write!(f, "Invalid score: {s:?}"),
            Error::InvalidOption(err) => write!(f, "Invalid option: {err}"),
        }
    }
}

impl std::error::Error for Error {}
