//! Borough codes for NYC crash records.
//!
//! The upstream feed spells boroughs as free text ("BROOKLYN", "Bklyn HQ",
//! sometimes blank). Storage and aggregation key on a closed set of one- or
//! two-letter codes instead. The free-text matcher is a prefix table kept in
//! the legacy matcher's priority order; the `"broo"`/`"bron"` split means a
//! bare `"br"` matches nothing.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The five NYC boroughs plus an explicit not-provided value.
///
/// Two distinct "no borough" outcomes exist and are never merged:
/// an empty input maps to [`Borough::Unknown`], while non-empty text that
/// matches no prefix maps to nothing at all (`None`). Callers that coerce
/// the second case into the first lose the ability to flag bad feed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Borough {
    Manhattan,
    Queens,
    Brooklyn,
    Bronx,
    StatenIsland,
    /// Explicitly absent in the feed (blank borough field).
    Unknown,
}

impl Borough {
    /// Every variant, in prefix-match priority order.
    pub const ALL: [Borough; 6] = [
        Borough::Manhattan,
        Borough::Queens,
        Borough::Brooklyn,
        Borough::Bronx,
        Borough::StatenIsland,
        Borough::Unknown,
    ];

    /// Returns the storage code (one or two letters).
    pub fn as_code(&self) -> &'static str {
        match self {
            Borough::Manhattan => "m",
            Borough::Queens => "q",
            Borough::Brooklyn => "bn",
            Borough::Bronx => "bx",
            Borough::StatenIsland => "s",
            Borough::Unknown => "u",
        }
    }

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Queens => "Queens",
            Borough::Brooklyn => "Brooklyn",
            Borough::Bronx => "Bronx",
            Borough::StatenIsland => "Staten Island",
            Borough::Unknown => "Not Provided",
        }
    }

    /// Case-insensitive lookup by storage code. A code outside the closed
    /// set is a miss.
    pub fn from_code(code: &str) -> Option<Borough> {
        let lowered = code.to_lowercase();
        Borough::ALL
            .into_iter()
            .find(|b| b.as_code() == lowered)
    }

    /// Matches free text to a borough by prefix, in fixed priority order.
    ///
    /// Empty input is `Some(Unknown)`; non-empty input matching no prefix is
    /// `None`. The input is lowercased but deliberately not trimmed, so
    /// `" brooklyn"` does not match.
    pub fn from_name(text: &str) -> Option<Borough> {
        if text.is_empty() {
            return Some(Borough::Unknown);
        }
        let lowered = text.to_lowercase();
        if lowered.starts_with('m') {
            Some(Borough::Manhattan)
        } else if lowered.starts_with('q') {
            Some(Borough::Queens)
        } else if lowered.starts_with("broo") || lowered.starts_with("bn") {
            Some(Borough::Brooklyn)
        } else if lowered.starts_with("bron") || lowered.starts_with("bx") {
            Some(Borough::Bronx)
        } else if lowered.starts_with('s') {
            Some(Borough::StatenIsland)
        } else if lowered.starts_with('u') {
            Some(Borough::Unknown)
        } else {
            None
        }
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Borough {
    type Err = ModelError;

    /// Parse either a storage code or a display name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(b) = Borough::from_code(trimmed) {
            return Ok(b);
        }
        Borough::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownBorough(s.to_string()))
    }
}

// Stored and exchanged as the code string, never the variant name.
impl serde::Serialize for Borough {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> serde::Deserialize<'de> for Borough {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Borough::from_code(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown borough code: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_matches_prefixes() {
        assert_eq!(Borough::from_name("Brooklyn"), Some(Borough::Brooklyn));
        assert_eq!(Borough::from_name("bklyn"), None);
        assert_eq!(Borough::from_name("BRONX"), Some(Borough::Bronx));
        assert_eq!(Borough::from_name("bx"), Some(Borough::Bronx));
        assert_eq!(Borough::from_name("bn"), Some(Borough::Brooklyn));
        assert_eq!(Borough::from_name("manhattan"), Some(Borough::Manhattan));
        assert_eq!(Borough::from_name("Queens"), Some(Borough::Queens));
        assert_eq!(
            Borough::from_name("staten island"),
            Some(Borough::StatenIsland)
        );
    }

    #[test]
    fn from_name_empty_is_unknown_but_unmatched_is_none() {
        assert_eq!(Borough::from_name(""), Some(Borough::Unknown));
        assert_eq!(Borough::from_name("Xanadu"), None);
        // Prefix match is not trimmed first.
        assert_eq!(Borough::from_name(" brooklyn"), None);
        // "br" reaches neither the "broo" nor the "bron" prefix.
        assert_eq!(Borough::from_name("br"), None);
    }

    #[test]
    fn code_round_trips_every_variant() {
        for b in Borough::ALL {
            assert_eq!(Borough::from_code(b.as_code()), Some(b));
        }
        assert_eq!(Borough::from_code("BX"), Some(Borough::Bronx));
        assert_eq!(Borough::from_code("zz"), None);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Borough::Bronx.to_string(), "Bronx");
        assert_eq!(Borough::Unknown.to_string(), "Not Provided");
        assert_eq!("bn".parse::<Borough>().unwrap(), Borough::Brooklyn);
        assert_eq!(
            "Staten Island".parse::<Borough>().unwrap(),
            Borough::StatenIsland
        );
        assert!("nowhere".parse::<Borough>().is_err());
    }

    #[test]
    fn serde_uses_code_string() {
        let json = serde_json::to_string(&Borough::Brooklyn).unwrap();
        assert_eq!(json, "\"bn\"");
        let back: Borough = serde_json::from_str("\"s\"").unwrap();
        assert_eq!(back, Borough::StatenIsland);
        assert!(serde_json::from_str::<Borough>("\"xx\"").is_err());
    }
}
