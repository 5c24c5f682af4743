use std::path::Path;

use pal_core::errors::PalError;
use pal_core::provenance::SchemaVersion;
use serde::{Deserialize, Serialize};

use crate::config::{BatchConfig, BatchInput};
use crate::hash::stable_hash_string;
use crate::report::{scan_text, ScanReport};

/// Reports for every input of a batch, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Report schema version.
    pub schema_version: SchemaVersion,
    /// One report per input.
    pub entries: Vec<ScanReport>,
    /// Index of the entry holding the longest palindrome (first on ties).
    pub longest: Option<usize>,
    /// Hash over the per-entry report hashes.
    pub batch_hash: String,
}

/// Scans every input of `config`; relative file paths resolve against `base_dir`.
pub fn run_batch(config: &BatchConfig, base_dir: &Path) -> Result<BatchReport, PalError> {
    config.validate()?;
    let mut entries = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let (text, label) = match input {
            BatchInput::Text { text, label } => (text.clone(), label.clone()),
            BatchInput::File { file, label } => {
                let path = base_dir.join(file);
                let text = std::fs::read_to_string(&path)
                    .map_err(|err| PalError::io("batch-read", &path, err))?;
                let label = label.clone().unwrap_or_else(|| file.display().to_string());
                (text, Some(label))
            }
        };
        let mut report = scan_text(&text, &config.scan)?;
        if let Some(label) = label {
            report.provenance = report.provenance.with_label(label);
        }
        entries.push(report);
    }

    let mut longest: Option<usize> = None;
    for (idx, entry) in entries.iter().enumerate() {
        let better = match longest {
            Some(best) => entry.span.len > entries[best].span.len,
            None => true,
        };
        if better {
            longest = Some(idx);
        }
    }

    let hashes: Vec<&str> = entries.iter().map(|e| e.report_hash.as_str()).collect();
    let batch_hash = stable_hash_string(&hashes)?;
    Ok(BatchReport {
        schema_version: SchemaVersion::default(),
        entries,
        longest,
        batch_hash,
    })
}
