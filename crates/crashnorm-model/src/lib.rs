pub mod enums;
pub mod error;
pub mod record;
pub mod tables;
pub mod zip;

pub use enums::Borough;
pub use error::{ModelError, Result};
pub use record::{CrashRecord, NormalizedCrash};
pub use zip::ZipCode;
