//! Property tests over the engine's public surface.
//!
//! Idempotence deliberately runs over feed-shaped names, not arbitrary
//! strings: the type collapse rewrites one trailing repeat per call by
//! contract, so a pathological "x st st st" converges over several calls
//! instead of one. Real feed values carry at most one trailing type word.

use crashnorm_core::{
    ZipCode, canonicalize_street_name, compose_iso, validate_zip, validate_zip_list,
};
use proptest::prelude::*;

/// Stems that hit no rewrite table: not type words, not codes, not
/// aliases, and no rename fragment can be assembled from them.
fn stem() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "atlantic",
        "ocean",
        "fulton",
        "bedford",
        "myrtle",
        "nostrand",
        "union",
        "flatbush",
        "amsterdam",
        "lexington",
    ])
}

/// At most one trailing street-type word or code.
fn type_tail() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec![
        "st",
        "street",
        "blvd",
        "boulevard",
        "rd",
        "road",
        "la",
        "lane",
        "pky",
        "parkway",
        "hwy",
        "highway",
        "sq",
        "square",
        "dr",
        "drive",
        "ct",
        "court",
        "pk",
        "park",
        "expy",
        "expressway",
    ]))
}

/// Feed-shaped street spellings: optional house number (sometimes glued to
/// the next word), one or two stems, at most one trailing type word, messy
/// case and spacing.
fn street_name() -> impl Strategy<Value = String> {
    (
        prop::option::of(1u32..400),
        any::<bool>(),
        prop::collection::vec(stem(), 1..3),
        type_tail(),
        any::<bool>(),
    )
        .prop_map(|(number, glued, stems, tail, shout)| {
            let mut name = String::new();
            if let Some(n) = number {
                name.push_str(&n.to_string());
                if !glued {
                    name.push(' ');
                }
            }
            name.push_str(&stems.join("  "));
            if let Some(t) = tail {
                name.push(' ');
                name.push_str(t);
            }
            if shout { name.to_uppercase() } else { name }
        })
}

proptest! {
    #[test]
    fn canonicalization_is_idempotent_on_feed_shaped_names(name in street_name()) {
        let once = canonicalize_street_name(&name);
        let twice = canonicalize_street_name(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn five_digit_strings_validate_to_themselves(zip in "[0-9]{5}") {
        let validated = validate_zip(&zip);
        prop_assert_eq!(validated.as_ref().map(ZipCode::as_str), Some(zip.as_str()));
    }

    #[test]
    fn two_letter_prefixes_strip(prefix in "[a-zA-Z]{2}", zip in "[0-9]{5}") {
        let raw = format!("{prefix}{zip}");
        prop_assert_eq!(validate_zip(&raw), Some(ZipCode::new(zip.as_str()).unwrap()));
    }

    #[test]
    fn short_numerics_never_validate(zip in "[0-9]{1,4}") {
        prop_assert_eq!(validate_zip(&zip), None);
    }

    #[test]
    fn long_numerics_never_validate(zip in "[0-9]{6,10}") {
        prop_assert_eq!(validate_zip(&zip), None);
    }

    #[test]
    fn list_results_always_match_the_zip_shape(raw in "[0-9a-zA-Z ,-]{0,40}") {
        for zip in validate_zip_list(&raw) {
            prop_assert_eq!(zip.as_str().len(), 5);
            prop_assert!(zip.as_str().bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn composed_timestamps_always_carry_zero_seconds(
        date in "[0-9/ -]{0,12}",
        time in "[0-9: ]{0,8}",
    ) {
        let iso = compose_iso(&date, &time);
        prop_assert!(iso.ends_with(":00"));
        prop_assert!(iso.contains('T'));
    }
}
