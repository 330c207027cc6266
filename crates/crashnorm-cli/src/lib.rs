//! CLI library components for the crash-report normalizer.

pub mod logging;
pub mod pipeline;
