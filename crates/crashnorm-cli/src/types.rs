use std::path::PathBuf;

use crate::pipeline::FieldCounts;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written output path; None on a dry run.
    pub output: Option<PathBuf>,
    /// Records read from the input.
    pub records: usize,
    pub counts: FieldCounts,
}
