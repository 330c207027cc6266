//! Street-name canonicalization.
//!
//! Free-text street names from the feed ("49street", "MCGUINNESS  BLVD
//! Boulevard", "Long Island Expressway") are reduced to one canonical
//! lowercase short form usable as a join key. The pipeline runs five
//! discrete stages, each consuming the previous stage's output and none
//! ever revisited:
//!
//! 1. whitespace/case sanitization ([`collapse_and_normalize`])
//! 2. split a glued house number from the word after it
//!    ([`separate_glued_number`])
//! 3. whole-word spelling fixes ([`apply_spelling_fixes`])
//! 4. known-roadway renames, first match replaces the whole value
//!    ([`find_rename`])
//! 5. street-type collapse, first table entry wins ([`collapse_street_type`])
//!
//! Stage 5 collapses at most one type entry per call. That makes repeated
//! runs over already-canonical names no-ops, but pathological inputs such
//! as `"a st st st"` lose one repetition per call rather than all at once.
//!
//! Each stage is public so its tie-break policy can be tested on its own.

use crashnorm_model::tables::{SPELLING_FIXES, STREET_RENAMES, STREET_TYPES};

use crate::sanitize::{collapse_and_normalize, is_space};

/// Runs the full canonicalization pipeline.
///
/// Returns the canonical short form, or the sanitized input unchanged when
/// no rule applies, or an empty string for empty/blank input. Never fails.
pub fn canonicalize_street_name(name: &str) -> String {
    let sanitized = collapse_and_normalize(name);
    if sanitized.is_empty() {
        return sanitized;
    }
    let spaced = separate_glued_number(&sanitized);
    let fixed = apply_spelling_fixes(&spaced);
    let renamed = match find_rename(&fixed) {
        Some(acronym) => acronym.to_string(),
        None => fixed,
    };
    collapse_street_type(&renamed)
}

/// Inserts a space between the first run of digits and an immediately
/// following lowercase letter: `"49street"` becomes `"49 street"`.
///
/// Only the first such boundary is split; later ones are left for what
/// they are, since a second glued number has never appeared in the feed.
pub fn separate_glued_number(name: &str) -> String {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j < bytes.len() && bytes[j].is_ascii_lowercase() {
                return format!("{} {}", &name[..j], &name[j..]);
            }
            i = j;
        } else {
            i += 1;
        }
    }
    name.to_string()
}

/// Rewrites known feed misspellings, whole-word, in table order. Multiple
/// fixes may land on the same name (`"bklyn qns e"` needs two).
pub fn apply_spelling_fixes(name: &str) -> String {
    let mut fixed = name.to_string();
    for (alias, corrected) in SPELLING_FIXES {
        fixed = replace_whole_word(&fixed, alias, corrected);
    }
    fixed
}

/// Looks for a known roadway name as a substring, in table order.
///
/// A hit means the entire value is replaced by the acronym; the caller
/// performs the replacement so the decision stays separately testable.
pub fn find_rename(name: &str) -> Option<&'static str> {
    STREET_RENAMES
        .iter()
        .find(|(known, _)| name.contains(known))
        .map(|(_, acronym)| *acronym)
}

/// Collapses one street-type entry, first table entry to match wins.
///
/// Per entry, the long form is tried first: the first occurrence of the
/// long word preceded by a space is replaced with the short code, and the
/// trailing-repeat collapse is then attempted once on the result (this is
/// what turns `"mcstreet st street"` into `"mcstreet st"`). If the long
/// form is absent, a trailing `"... st st"` / `"... st street"` repeat
/// collapses to a single trailing code. At most one entry ever fires.
pub fn collapse_street_type(name: &str) -> String {
    for (code, long) in STREET_TYPES {
        if let Some(replaced) = replace_long_form(name, code, long) {
            return collapse_trailing_repeat(&replaced, code, long).unwrap_or(replaced);
        }
        if let Some(collapsed) = collapse_trailing_repeat(name, code, long) {
            return collapsed;
        }
    }
    name.to_string()
}

/// Word characters for boundary checks, matching the legacy matcher's
/// ASCII-only notion of a word.
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replaces every whole-word occurrence of `from` with `to`. Replaced text
/// is not rescanned, so a fix whose output contains another alias cannot
/// cascade within one call.
fn replace_whole_word(text: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find(from) {
        let end = idx + from.len();
        // The preceding char sits at the tail of `out` when the previous
        // match was consumed right up against this one.
        let before = rest[..idx]
            .chars()
            .next_back()
            .or_else(|| out.chars().next_back());
        let before_ok = match before {
            Some(c) => !is_word(c),
            None => true,
        };
        let after_ok = match rest[end..].chars().next() {
            Some(c) => !is_word(c),
            None => true,
        };
        if before_ok && after_ok {
            out.push_str(&rest[..idx]);
            out.push_str(to);
        } else {
            out.push_str(&rest[..end]);
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

/// Replaces the first occurrence of the long form that is preceded by a
/// space and followed by a word boundary: `"queens boulevard"` becomes
/// `"queens blvd"`. A long form at the very start of the value has no
/// leading space and is deliberately not touched.
fn replace_long_form(name: &str, code: &str, long: &str) -> Option<String> {
    let mut from = 0;
    while let Some(offset) = name[from..].find(long) {
        let start = from + offset;
        let end = start + long.len();
        let preceded = start > 0 && name.as_bytes()[start - 1] == b' ';
        let bounded = match name[end..].chars().next() {
            Some(c) => !is_word(c),
            None => true,
        };
        if preceded && bounded {
            let mut out = String::with_capacity(name.len());
            out.push_str(&name[..start - 1]);
            out.push(' ');
            out.push_str(code);
            out.push_str(&name[end..]);
            return Some(out);
        }
        from = start + 1;
    }
    None
}

/// Collapses a trailing `" {code} {long}"` or `" {code} {code}"` repeat to
/// a single `" {code}"`. The value must end with the repeat; a repeat in
/// the middle is left alone.
fn collapse_trailing_repeat(name: &str, code: &str, long: &str) -> Option<String> {
    let rest = name
        .strip_suffix(long)
        .or_else(|| name.strip_suffix(code))?;
    let stripped = rest.trim_end_matches(is_space);
    if stripped.len() == rest.len() {
        return None;
    }
    let before = stripped.strip_suffix(code)?;
    if !before.ends_with(' ') {
        return None;
    }
    Some(stripped.to_string())
}
