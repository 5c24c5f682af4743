use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use pal_scan::{run_batch, to_canonical_json_bytes, BatchConfig, BatchReport};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// YAML batch configuration.
    #[arg(long)]
    pub config: PathBuf,
    /// Output directory for `batch_report.json` and `spans.csv`.
    #[arg(long)]
    pub out: PathBuf,
    /// Suppress the status line.
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: &BatchArgs) -> Result<(), Box<dyn Error>> {
    let config = BatchConfig::load(&args.config)?;
    let base_dir = args
        .config
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let report = run_batch(&config, &base_dir)?;

    fs::create_dir_all(&args.out)?;
    fs::write(
        args.out.join("batch_report.json"),
        to_canonical_json_bytes(&report)?,
    )?;
    write_spans_csv(&args.out.join("spans.csv"), &report)?;

    if !args.quiet {
        println!(
            "scanned {} inputs, batch hash {}",
            report.entries.len(),
            report.batch_hash
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct SpanRow<'a> {
    index: usize,
    label: &'a str,
    input_len: usize,
    start: usize,
    len: usize,
    expansion_steps: usize,
}

fn write_spans_csv(path: &Path, report: &BatchReport) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for (index, entry) in report.entries.iter().enumerate() {
        writer.serialize(SpanRow {
            index,
            label: entry.provenance.label.as_deref().unwrap_or(""),
            input_len: entry.input_len,
            start: entry.span.start,
            len: entry.span.len,
            expansion_steps: entry.expansion_steps,
        })?;
    }
    writer.flush()?;
    Ok(())
}
