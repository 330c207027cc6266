//! Raw and normalized crash-record shapes.
//!
//! [`CrashRecord`] mirrors the upstream feed. The city has renamed columns
//! across API revisions (`unique_key`→`collision_id`, `date`→`accident_date`
//! →`crash_date`, and the singular `cyclist`/`motorist` count columns), so
//! every historical spelling is accepted as a serde alias and the current
//! normalized spelling is canonical. Everything arrives as optional text;
//! nothing is validated at this layer.
//!
//! [`NormalizedCrash`] is the persistence-ready shape produced by the
//! normalization pass: parsed key, composed timestamp, borough code,
//! validated zip, canonical street names, bounded counts. A field that
//! failed validation is absent, never defaulted.

use serde::{Deserialize, Serialize};

use crate::enums::Borough;
use crate::zip::ZipCode;

/// One crash record as delivered by the upstream feed, any revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrashRecord {
    #[serde(default, alias = "collision_id")]
    pub unique_key: Option<String>,
    #[serde(default, alias = "accident_date", alias = "crash_date")]
    pub date: Option<String>,
    #[serde(default, alias = "accident_time", alias = "crash_time")]
    pub time: Option<String>,
    #[serde(default)]
    pub borough: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub on_street_name: Option<String>,
    #[serde(default)]
    pub off_street_name: Option<String>,
    #[serde(default)]
    pub cross_street_name: Option<String>,
    #[serde(default)]
    pub number_of_persons_injured: Option<String>,
    #[serde(default)]
    pub number_of_persons_killed: Option<String>,
    #[serde(default)]
    pub number_of_pedestrians_injured: Option<String>,
    #[serde(default)]
    pub number_of_pedestrians_killed: Option<String>,
    /// The feed spells this `number_of_cyclist_injured`.
    #[serde(default, alias = "number_of_cyclist_injured")]
    pub number_of_cyclists_injured: Option<String>,
    #[serde(default, alias = "number_of_cyclist_killed")]
    pub number_of_cyclists_killed: Option<String>,
    #[serde(default, alias = "number_of_motorist_injured")]
    pub number_of_motorists_injured: Option<String>,
    #[serde(default, alias = "number_of_motorist_killed")]
    pub number_of_motorists_killed: Option<String>,
}

/// The normalized, persistence-ready record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCrash {
    pub unique_key: Option<i64>,
    /// Composed `YYYY-MM-DDTHH:MM:00` string; kept as text, not parsed.
    pub timestamp: Option<String>,
    pub borough: Option<Borough>,
    pub zip_code: Option<ZipCode>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub on_street: Option<String>,
    pub off_street: Option<String>,
    pub cross_street: Option<String>,
    pub number_of_persons_injured: Option<i64>,
    pub number_of_persons_killed: Option<i64>,
    pub number_of_pedestrians_injured: Option<i64>,
    pub number_of_pedestrians_killed: Option<i64>,
    pub number_of_cyclists_injured: Option<i64>,
    pub number_of_cyclists_killed: Option<i64>,
    pub number_of_motorists_injured: Option<i64>,
    pub number_of_motorists_killed: Option<i64>,
}
