//! Size bounds for persistence-facing validation.
//!
//! The engine itself reads no configuration; callers construct a [`Limits`]
//! once (or take the defaults) and pass it where bounded validation is
//! needed. Both bounds exist to keep obviously corrupt feed values out of
//! storage, not to enforce schema-level constraints.

use crate::sanitize::trim;

/// Constructor-time bounds for string and integer validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Longest accepted string, in characters.
    pub max_str_len: usize,
    /// Inclusive symmetric bound for integer fields.
    pub max_int: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_str_len: 256,
            max_int: 10_000,
        }
    }
}

impl Limits {
    pub fn new(max_str_len: usize, max_int: i64) -> Self {
        Self {
            max_str_len,
            max_int,
        }
    }

    /// Non-empty and at most `max_str_len` characters.
    pub fn is_str_ok(&self, s: &str) -> bool {
        let len = s.chars().count();
        len > 0 && len <= self.max_str_len
    }

    /// Within the inclusive symmetric integer bound.
    pub fn is_int_ok(&self, n: i64) -> bool {
        n >= -self.max_int && n <= self.max_int
    }

    /// [`Self::is_int_ok`] restricted to non-negative values.
    pub fn is_pos_int_ok(&self, n: i64) -> bool {
        self.is_int_ok(n) && n >= 0
    }

    /// Signed integer parse of the trimmed input, bounded by
    /// [`Self::is_int_ok`].
    pub fn parse_int(&self, s: &str) -> Option<i64> {
        let n = trim(s).parse::<i64>().ok()?;
        self.is_int_ok(n).then_some(n)
    }

    /// Digit-string parse of the trimmed input, bounded by
    /// [`Self::is_pos_int_ok`]. A leading sign fails the digit check, so
    /// the result is always non-negative.
    pub fn parse_pos_int(&self, s: &str) -> Option<i64> {
        let t = trim(s);
        if !is_numeric_str(t) {
            return None;
        }
        let n = t.parse::<i64>().ok()?;
        self.is_pos_int_ok(n).then_some(n)
    }
}

/// Entirely ASCII digits, at least one. No trimming here; callers decide.
pub fn is_numeric_str(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Strict float parse of the trimmed input, rejecting NaN.
///
/// The legacy validator accepted any leading-numeric prefix ("40.7foo"
/// parsed to 40.7); this parses the whole token or nothing.
pub fn parse_float(s: &str) -> Option<f64> {
    trim(s).parse::<f64>().ok().filter(|f| !f.is_nan())
}
