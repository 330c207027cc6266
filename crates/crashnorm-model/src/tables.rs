//! Ordered rewrite tables for street-name canonicalization.
//!
//! Each table is an ordered list of `(key, value)` pairs, not a map: the
//! street pipeline walks entries front to back and the first match wins, so
//! iteration order is part of the contract. Keys were deduplicated when the
//! tables were lifted from the legacy data (the old list carried `bvd` as a
//! second boulevard key); `tests::no_duplicate_keys` keeps it that way.
//!
//! All keys and values are lowercase because every consumer runs after
//! whitespace/case sanitization.

/// Street-type short code paired with its canonical long form, in match
/// priority order. The collapse stage rewrites at most one entry per call.
pub const STREET_TYPES: &[(&str, &str)] = &[
    ("blvd", "boulevard"),
    ("dr", "drive"),
    ("ct", "court"),
    ("expy", "expressway"),
    ("hwy", "highway"),
    ("la", "lane"),
    ("pky", "parkway"),
    ("pk", "park"),
    ("st", "street"),
    ("sq", "square"),
    ("rd", "road"),
];

/// Known roadway names that collapse to a fixed acronym. Matched by
/// substring containment; a hit replaces the entire value.
pub const STREET_RENAMES: &[(&str, &str)] = &[
    ("brooklyn queens e", "bqe"),
    ("brooklyn qns e", "bqe"),
    ("grand central p", "gcp"),
    ("jackie robinson p", "jrp"),
    ("long island e", "lie"),
];

/// Common feed misspellings, replaced whole-word before renames apply.
pub const SPELLING_FIXES: &[(&str, &str)] = &[
    ("bklyn", "brooklyn"),
    ("bx", "bronx"),
    ("qns", "queens"),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{SPELLING_FIXES, STREET_RENAMES, STREET_TYPES};

    fn assert_unique_keys(name: &str, table: &[(&str, &str)]) {
        let mut seen = BTreeSet::new();
        for (key, _) in table {
            assert!(seen.insert(*key), "{name} has a duplicate key: {key}");
        }
    }

    #[test]
    fn no_duplicate_keys() {
        assert_unique_keys("STREET_TYPES", STREET_TYPES);
        assert_unique_keys("STREET_RENAMES", STREET_RENAMES);
        assert_unique_keys("SPELLING_FIXES", SPELLING_FIXES);
    }

    #[test]
    fn entries_are_lowercase_and_trimmed() {
        for (key, value) in STREET_TYPES
            .iter()
            .chain(STREET_RENAMES)
            .chain(SPELLING_FIXES)
        {
            for s in [key, value] {
                assert_eq!(*s, s.trim().to_lowercase(), "bad table entry: {s:?}");
                assert!(!s.is_empty());
            }
        }
    }

    #[test]
    fn parkway_sorts_before_park() {
        // "pky" must stay ahead of "pk" so parkway names are never split.
        let pky = STREET_TYPES.iter().position(|(k, _)| *k == "pky").unwrap();
        let pk = STREET_TYPES.iter().position(|(k, _)| *k == "pk").unwrap();
        assert!(pky < pk);
    }
}
