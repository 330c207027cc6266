//! Record-level normalization pass.
//!
//! Applies the engine field by field to one raw feed record, producing the
//! persistence-ready shape. This is the one place the individual
//! normalizers meet; each field follows the sentinel contract, so a value
//! that fails its validator comes out `None` and the rest of the record is
//! untouched.

use crashnorm_model::{Borough, CrashRecord, NormalizedCrash};

use crate::datetime::compose_iso;
use crate::limits::{Limits, parse_float};
use crate::sanitize::trim;
use crate::street::canonicalize_street_name;
use crate::zip::validate_zip;

/// Normalizes one raw record under the given bounds.
///
/// Pure function of its arguments; no field ever borrows from `raw`.
pub fn normalize_record(raw: &CrashRecord, limits: &Limits) -> NormalizedCrash {
    NormalizedCrash {
        unique_key: raw
            .unique_key
            .as_deref()
            .and_then(|s| trim(s).parse().ok()),
        timestamp: compose_timestamp(raw.date.as_deref(), raw.time.as_deref()),
        // A missing borough field and an empty one both mean "not provided";
        // non-empty text that matches no borough prefix stays None.
        borough: Borough::from_name(raw.borough.as_deref().unwrap_or("")),
        zip_code: raw.zip_code.as_deref().and_then(validate_zip),
        latitude: raw.latitude.as_deref().and_then(parse_float),
        longitude: raw.longitude.as_deref().and_then(parse_float),
        on_street: street_field(raw.on_street_name.as_deref(), limits),
        off_street: street_field(raw.off_street_name.as_deref(), limits),
        cross_street: street_field(raw.cross_street_name.as_deref(), limits),
        number_of_persons_injured: count_field(raw.number_of_persons_injured.as_deref(), limits),
        number_of_persons_killed: count_field(raw.number_of_persons_killed.as_deref(), limits),
        number_of_pedestrians_injured: count_field(
            raw.number_of_pedestrians_injured.as_deref(),
            limits,
        ),
        number_of_pedestrians_killed: count_field(
            raw.number_of_pedestrians_killed.as_deref(),
            limits,
        ),
        number_of_cyclists_injured: count_field(raw.number_of_cyclists_injured.as_deref(), limits),
        number_of_cyclists_killed: count_field(raw.number_of_cyclists_killed.as_deref(), limits),
        number_of_motorists_injured: count_field(
            raw.number_of_motorists_injured.as_deref(),
            limits,
        ),
        number_of_motorists_killed: count_field(raw.number_of_motorists_killed.as_deref(), limits),
    }
}

/// Both halves must be present and non-blank; composing around a missing
/// half would manufacture zero fields the feed never delivered.
fn compose_timestamp(date: Option<&str>, time: Option<&str>) -> Option<String> {
    match (date, time) {
        (Some(d), Some(t)) if !trim(d).is_empty() && !trim(t).is_empty() => {
            Some(compose_iso(d, t))
        }
        _ => None,
    }
}

fn street_field(raw: Option<&str>, limits: &Limits) -> Option<String> {
    raw.map(canonicalize_street_name)
        .filter(|name| limits.is_str_ok(name))
}

fn count_field(raw: Option<&str>, limits: &Limits) -> Option<i64> {
    raw.and_then(|s| limits.parse_pos_int(s))
}
