//! File-in/file-out normalization pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Read**: Load raw crash records from a CSV or JSON file
//! 2. **Normalize**: Run the record-level normalization pass
//! 3. **Write**: Store normalized records as CSV or JSON
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Stage functions are plain synchronous functions so they stay
//! testable without any runtime.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use crashnorm_core::{Limits, normalize_record};
use crashnorm_model::{CrashRecord, NormalizedCrash};

/// File formats the pipeline reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    Json,
}

impl RecordFormat {
    /// Pick the format from a path's extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Fails for any extension other than `.csv` or `.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => bail!(
                "unsupported extension for {}: expected .csv or .json",
                path.display()
            ),
        }
    }
}

// ============================================================================
// Stage 1: Read
// ============================================================================

/// Read raw crash records from a CSV or JSON file.
///
/// CSV headers and JSON keys from every historical feed revision are
/// accepted; see the aliases on [`CrashRecord`].
pub fn read_records(path: &Path) -> Result<Vec<CrashRecord>> {
    let read_span = info_span!("read", input = %path.display());
    let _read_guard = read_span.enter();
    let read_start = Instant::now();
    let format = RecordFormat::from_path(path)?;
    let records = match format {
        RecordFormat::Csv => read_csv(path)?,
        RecordFormat::Json => read_json(path)?,
    };
    info!(
        input = %path.display(),
        format = ?format,
        record_count = records.len(),
        duration_ms = read_start.elapsed().as_millis(),
        "read complete"
    );
    Ok(records)
}

fn read_csv(path: &Path) -> Result<Vec<CrashRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    let mut records = Vec::new();
    for row in reader.deserialize::<CrashRecord>() {
        records.push(row.with_context(|| format!("parse {}", path.display()))?);
    }
    Ok(records)
}

fn read_json(path: &Path) -> Result<Vec<CrashRecord>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse {}", path.display()))
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Per-field tallies of how many normalized records carry a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCounts {
    pub unique_key: usize,
    pub timestamp: usize,
    pub borough: usize,
    pub zip_code: usize,
    pub latitude: usize,
    pub longitude: usize,
    pub on_street: usize,
    pub off_street: usize,
    pub cross_street: usize,
    pub persons_injured: usize,
    pub persons_killed: usize,
    pub pedestrians_injured: usize,
    pub pedestrians_killed: usize,
    pub cyclists_injured: usize,
    pub cyclists_killed: usize,
    pub motorists_injured: usize,
    pub motorists_killed: usize,
}

impl FieldCounts {
    fn observe(&mut self, record: &NormalizedCrash) {
        self.unique_key += usize::from(record.unique_key.is_some());
        self.timestamp += usize::from(record.timestamp.is_some());
        self.borough += usize::from(record.borough.is_some());
        self.zip_code += usize::from(record.zip_code.is_some());
        self.latitude += usize::from(record.latitude.is_some());
        self.longitude += usize::from(record.longitude.is_some());
        self.on_street += usize::from(record.on_street.is_some());
        self.off_street += usize::from(record.off_street.is_some());
        self.cross_street += usize::from(record.cross_street.is_some());
        self.persons_injured += usize::from(record.number_of_persons_injured.is_some());
        self.persons_killed += usize::from(record.number_of_persons_killed.is_some());
        self.pedestrians_injured += usize::from(record.number_of_pedestrians_injured.is_some());
        self.pedestrians_killed += usize::from(record.number_of_pedestrians_killed.is_some());
        self.cyclists_injured += usize::from(record.number_of_cyclists_injured.is_some());
        self.cyclists_killed += usize::from(record.number_of_cyclists_killed.is_some());
        self.motorists_injured += usize::from(record.number_of_motorists_injured.is_some());
        self.motorists_killed += usize::from(record.number_of_motorists_killed.is_some());
    }

    /// Output field name and populated count, in record order.
    pub fn rows(&self) -> [(&'static str, usize); 17] {
        [
            ("unique_key", self.unique_key),
            ("timestamp", self.timestamp),
            ("borough", self.borough),
            ("zip_code", self.zip_code),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("on_street", self.on_street),
            ("off_street", self.off_street),
            ("cross_street", self.cross_street),
            ("number_of_persons_injured", self.persons_injured),
            ("number_of_persons_killed", self.persons_killed),
            ("number_of_pedestrians_injured", self.pedestrians_injured),
            ("number_of_pedestrians_killed", self.pedestrians_killed),
            ("number_of_cyclists_injured", self.cyclists_injured),
            ("number_of_cyclists_killed", self.cyclists_killed),
            ("number_of_motorists_injured", self.motorists_injured),
            ("number_of_motorists_killed", self.motorists_killed),
        ]
    }
}

/// Result of the normalization stage.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeResult {
    /// Normalized records, one per input record, in input order.
    pub records: Vec<NormalizedCrash>,
    /// How many records carry each output field.
    pub counts: FieldCounts,
}

/// Run the record-level normalization pass over every raw record.
///
/// Validation failures inside a record leave the offending field absent
/// and are reflected in the counts; they never fail the pass.
pub fn normalize_records(raw: &[CrashRecord], limits: &Limits) -> NormalizeResult {
    let normalize_span = info_span!("normalize", record_count = raw.len());
    let _normalize_guard = normalize_span.enter();
    let normalize_start = Instant::now();
    debug!(
        max_str_len = limits.max_str_len,
        max_int = limits.max_int,
        "normalizing records"
    );
    let mut counts = FieldCounts::default();
    let mut records = Vec::with_capacity(raw.len());
    for record in raw {
        let normalized = normalize_record(record, limits);
        counts.observe(&normalized);
        records.push(normalized);
    }
    info!(
        record_count = records.len(),
        timestamp_count = counts.timestamp,
        borough_count = counts.borough,
        zip_count = counts.zip_code,
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalization complete"
    );
    NormalizeResult { records, counts }
}

// ============================================================================
// Stage 3: Write
// ============================================================================

/// Write normalized records to a CSV or JSON file.
pub fn write_records(path: &Path, records: &[NormalizedCrash]) -> Result<()> {
    let write_span = info_span!("write", output = %path.display());
    let _write_guard = write_span.enter();
    let write_start = Instant::now();
    let format = RecordFormat::from_path(path)?;
    match format {
        RecordFormat::Csv => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("create {}", path.display()))?;
            for record in records {
                writer
                    .serialize(record)
                    .with_context(|| format!("write {}", path.display()))?;
            }
            writer
                .flush()
                .with_context(|| format!("flush {}", path.display()))?;
        }
        RecordFormat::Json => {
            let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, records)
                .with_context(|| format!("write {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("flush {}", path.display()))?;
        }
    }
    info!(
        output = %path.display(),
        format = ?format,
        record_count = records.len(),
        duration_ms = write_start.elapsed().as_millis(),
        "write complete"
    );
    Ok(())
}
