//! Ordered rank index.
//!
//! A span-annotated skip list ([`SkipList`]) that keeps an exact 1-based rank
//! for every element, plus the height generators ([`LevelGenerator`]) that
//! shape it.

mod level;
mod skip_list;

pub use level::FixedLevels;
pub use level::LevelGenerator;
pub use level::RandomLevels;
pub use skip_list::Iter;
pub use skip_list::SkipList;

/// Maximum node height. With p = 1/2 this covers 2^32 elements.
pub const MAX_LEVEL: usize = 32;
