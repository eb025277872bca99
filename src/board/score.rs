//! Fixed-point scores.
//!
//! Scores carry four decimal places in an `i64`, so accumulation is exact:
//! `0.1 + 0.2 - 0.3` lands on zero and the entity drops out of the ranking.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of decimal places a score keeps.
pub const SCORE_DECIMALS: u32 = 4;

/// Raw units per whole point.
const SCALE: i64 = 10_i64.pow(SCORE_DECIMALS);

/// A signed fixed-point score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i64);

impl Score {
    pub const ZERO: Score = Score(0);

    /// Build a score from raw ten-thousandths of a point.
    pub const fn from_raw(raw: i64) -> Score {
        return Score(raw);
    }

    /// The score in raw ten-thousandths of a point.
    pub const fn raw(self) -> i64 {
        return self.0;
    }

    /// A whole-point score, or `None` if it does not fit.
    pub fn from_points(points: i64) -> Option<Score> {
        return points.checked_mul(SCALE).map(Score);
    }

    pub fn is_zero(self) -> bool {
        return self.0 == 0;
    }

    pub fn is_positive(self) -> bool {
        return self.0 > 0;
    }

    /// Add two scores, or `None` on overflow.
    pub fn checked_add(self, other: Score) -> Option<Score> {
        return self.0.checked_add(other.0).map(Score);
    }
}

impl From<i32> for Score {
    fn from(points: i32) -> Score {
        // i32 * 10^4 always fits in i64.
        return Score(points as i64 * SCALE);
    }
}

impl FromStr for Score {
    type Err = Error;

    /// Parse `"12"`, `"-3.5"`, `"+0.0001"`. More than four decimals is an error.
    fn from_str(s: &str) -> Result<Score, Error> {
        let invalid = || Error::InvalidScore(s.to_string());

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (whole, frac) = match body.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (body, ""),
        };

        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(whole) && !digits(frac) {
            return Err(invalid());
        }
        if (!whole.is_empty() && !digits(whole)) || (!frac.is_empty() && !digits(frac)) {
            return Err(invalid());
        }
        if frac.len() > SCORE_DECIMALS as usize {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut fraction: i64 = if frac.is_empty() {
            0
        } else {
            frac.parse().map_err(|_| invalid())?
        };
        for _ in frac.len()..SCORE_DECIMALS as usize {
            fraction *= 10;
        }

        let magnitude = whole
            .checked_mul(SCALE)
            .and_then(|raw| raw.checked_add(fraction))
            .ok_or_else(invalid)?;
        return Ok(Score(if negative { -magnitude } else { magnitude }));
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = SCALE as u64;
        let whole = magnitude / scale;
        let frac = magnitude % scale;
        if frac == 0 {
            return write!(f, "{}{}", sign, whole);
        }

        let digits = format!("{:0width$}", frac, width = SCORE_DECIMALS as usize);
        return write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'));
    }
}
