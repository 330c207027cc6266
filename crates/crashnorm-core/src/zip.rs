//! Zip-code validation and extraction.
//!
//! Police-entered zip fields carry three usable shapes: a plain 5-digit
//! code, a state-prefixed code ("NY11102"), and comma-separated lists of
//! either. Everything else, zip+4 included, is rejected outright; there is
//! no truncation or partial salvage, so a returned value is always a
//! complete [`ZipCode`].

use crashnorm_model::ZipCode;

use crate::sanitize::trim_lowercase;

/// Validates a single zip value.
///
/// The input is sanitized first. A two-letter alphabetic prefix glued to
/// exactly five digits is stripped ("NY11102" becomes "11102"); exactly
/// five digits pass as-is; anything else is `None`.
pub fn validate_zip(raw: &str) -> Option<ZipCode> {
    let cleaned = trim_lowercase(raw);
    if cleaned.chars().count() < 5 {
        return None;
    }
    let bytes = cleaned.as_bytes();
    if bytes.len() == 7
        && bytes[..2].iter().all(u8::is_ascii_alphabetic)
        && bytes[2..].iter().all(u8::is_ascii_digit)
    {
        return ZipCode::new(&cleaned[2..]).ok();
    }
    if bytes.len() == 5 && bytes.iter().all(u8::is_ascii_digit) {
        return ZipCode::new(cleaned).ok();
    }
    None
}

/// Validates a comma-separated list of zip values, keeping only the ones
/// that validate. Order and duplicates are preserved; elements that fail
/// simply drop out.
pub fn validate_zip_list(raw: &str) -> Vec<ZipCode> {
    raw.split(',').filter_map(validate_zip).collect()
}

/// [`validate_zip_list`] for inputs that are already split.
pub fn validate_zips<'a, I>(values: I) -> Vec<ZipCode>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().filter_map(validate_zip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(zips: &[ZipCode]) -> Vec<&str> {
        zips.iter().map(ZipCode::as_str).collect()
    }

    #[test]
    fn five_digits_pass_through() {
        assert_eq!(validate_zip("11102").unwrap().as_str(), "11102");
        assert_eq!(validate_zip(" 11102 ").unwrap().as_str(), "11102");
        assert_eq!(validate_zip("\u{FEFF}10001").unwrap().as_str(), "10001");
    }

    #[test]
    fn two_letter_prefix_is_stripped() {
        assert_eq!(validate_zip("NY11102").unwrap().as_str(), "11102");
        assert_eq!(validate_zip("ny11102").unwrap().as_str(), "11102");
        assert_eq!(validate_zip("NJ07030").unwrap().as_str(), "07030");
    }

    #[test]
    fn everything_else_is_rejected() {
        assert_eq!(validate_zip("1234"), None);
        assert_eq!(validate_zip("112233"), None);
        assert_eq!(validate_zip("11102-1234"), None);
        assert_eq!(validate_zip("N11102"), None);
        assert_eq!(validate_zip("NYC11102"), None);
        assert_eq!(validate_zip("NY1234"), None);
        assert_eq!(validate_zip(""), None);
        assert_eq!(validate_zip("no zip"), None);
    }

    #[test]
    fn list_keeps_valid_elements_in_order() {
        let zips = validate_zip_list("11102, NY11103, bad");
        assert_eq!(codes(&zips), vec!["11102", "11103"]);

        let zips = validate_zip_list("11102,11102 , 1");
        assert_eq!(codes(&zips), vec!["11102", "11102"]);

        assert!(validate_zip_list("nope").is_empty());
        assert!(validate_zip_list("").is_empty());
    }

    #[test]
    fn pre_split_lists_behave_the_same() {
        let zips = validate_zips(["11102", "NY11103", "bad"]);
        assert_eq!(codes(&zips), vec!["11102", "11103"]);
    }
}
