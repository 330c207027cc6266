use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use crashnorm_core::Limits;
use crashnorm_model::Borough;

use crate::cli::NormalizeArgs;
use crate::pipeline::{NormalizeResult, normalize_records, read_records, write_records};
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_boroughs() {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Name"]);
    apply_table_style(&mut table);
    for borough in Borough::ALL {
        table.add_row(vec![borough.as_code(), borough.as_str()]);
    }
    println!("{table}");
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<RunResult> {
    let run_span = info_span!("run", input = %args.input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let limits = Limits::new(args.max_str_len, args.max_int);
    let raw = read_records(&args.input).context("read input")?;
    let record_count = raw.len();
    let NormalizeResult { records, counts } = normalize_records(&raw, &limits);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let output = if args.dry_run {
        info!(output = %output_path.display(), "write skipped (dry run)");
        None
    } else {
        write_records(&output_path, &records).context("write output")?;
        Some(output_path)
    };

    info!(
        record_count,
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        input: args.input.clone(),
        output,
        records: record_count,
        counts,
    })
}

/// Default destination beside the input: `crashes.csv` -> `crashes.normalized.json`.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("normalized.json")
}
