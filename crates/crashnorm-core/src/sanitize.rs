//! Whitespace and case sanitization primitives.
//!
//! Every other normalizer starts here. The feed carries more than plain
//! spaces: exported CSVs open with a UTF-8 BOM (U+FEFF) and hand-entered
//! fields contain non-breaking spaces (U+00A0), so "whitespace" throughout
//! this crate means Unicode whitespace plus the BOM. `char::is_whitespace`
//! already covers U+00A0 but not U+FEFF.
//!
//! All functions are total: any input string produces an output string, and
//! an absent input produces an absent output.

/// Whitespace for trimming purposes: Unicode whitespace or the BOM.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Strips leading and trailing whitespace, BOM included.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// [`trim`] lifted over an absent value.
pub fn trim_opt(s: Option<&str>) -> Option<&str> {
    s.map(trim)
}

/// Strips and lowercases.
pub fn trim_lowercase(s: &str) -> String {
    trim(s).to_lowercase()
}

/// Collapses every interior whitespace run to a single space, then strips
/// and lowercases. `"  POLK\u{00A0} AVENUE "` becomes `"polk avenue"`.
pub fn collapse_and_normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split(is_space).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_bom_and_nbsp() {
        assert_eq!(trim("\u{FEFF} main st \u{00A0}"), "main st");
        assert_eq!(trim("  spaced  "), "spaced");
        assert_eq!(trim(""), "");
        assert_eq!(trim("\t\n"), "");
    }

    #[test]
    fn trim_opt_passes_absence_through() {
        assert_eq!(trim_opt(None), None);
        assert_eq!(trim_opt(Some(" x ")), Some("x"));
    }

    #[test]
    fn trim_lowercase_does_both() {
        assert_eq!(trim_lowercase("  Broadway "), "broadway");
        assert_eq!(trim_lowercase("\u{FEFF}QUEENS"), "queens");
    }

    #[test]
    fn collapse_squeezes_interior_runs() {
        assert_eq!(collapse_and_normalize("  GRAND   CENTRAL  PKY "), "grand central pky");
        assert_eq!(collapse_and_normalize("a\u{00A0}\u{00A0}b"), "a b");
        assert_eq!(collapse_and_normalize("one\ttwo\nthree"), "one two three");
        assert_eq!(collapse_and_normalize("   "), "");
    }
}
