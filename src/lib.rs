//! Leaderboard - a live, rank-ordered scoreboard.
//!
//! Scores change constantly and every query is by rank: "who is ranked 10
//! through 20?" and "who sits just above and below entity 42?". Both run in
//! O(log n) expected time on a span-indexed skip list ([`index::SkipList`])
//! that keeps an exact rank for every element.
//!
//! # Quick Start
//!
//! ```
//! use leaderboard::{Leaderboard, Score};
//!
//! let board = Leaderboard::new();
//! board.update_score(15514665, Score::from(124)).unwrap();
//! board.update_score(81546541, Score::from(113)).unwrap();
//! board.update_score(1745431, "100.5".parse().unwrap()).unwrap();
//!
//! let top = board.get_by_rank(1, 2);
//! assert_eq!(top[0].id, 15514665);
//! assert_eq!(top[1].rank, 2);
//!
//! let window = board.get_by_id(81546541, 1, 1);
//! assert_eq!(window.len(), 3);
//! ```

pub mod board;
pub mod error;
pub mod index;
pub mod options;

pub use board::EntityId;
pub use board::Leaderboard;
pub use board::RankedEntry;
pub use board::Score;
pub use board::ScoreBoard;
pub use board::ScoreRecord;
pub use error::Error;
pub use error::Result;
pub use options::Options;
