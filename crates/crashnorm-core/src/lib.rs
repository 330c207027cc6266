//! Normalization engine for NYC crash-report data.
//!
//! Upstream crash records spell the same street a dozen ways, mix zip
//! formats, label boroughs as free text, and split every timestamp across
//! two fields whose layout changed between API revisions. This crate
//! reconciles those into canonical forms usable as join keys and
//! timestamps:
//!
//! - [`sanitize`]: whitespace/case primitives the rest builds on
//! - [`street`]: ordered rewrite pipeline to canonical short names
//! - [`zip`]: 5-digit zip validation and extraction
//! - [`datetime`]: date+time composition into one timestamp string
//! - [`limits`]: constructor-time string/integer bounds
//! - [`record`]: the field-by-field pass over a whole record
//!
//! Every operation is pure and synchronous: a closed function of its own
//! arguments, safe to call from any number of threads without
//! coordination. Validation failure is a sentinel (`None`), never an
//! error; see the module docs for each component's exact contract.

pub mod datetime;
pub mod limits;
pub mod record;
pub mod sanitize;
pub mod street;
pub mod zip;

pub use crashnorm_model::{Borough, CrashRecord, NormalizedCrash, ZipCode};
pub use datetime::{compose_iso, to_datetime, to_local_date_value};
pub use limits::{Limits, parse_float};
pub use record::normalize_record;
pub use sanitize::{collapse_and_normalize, trim, trim_lowercase, trim_opt};
pub use street::canonicalize_street_name;
pub use zip::{validate_zip, validate_zip_list, validate_zips};
