use pal_core::errors::PalError;
use pal_core::provenance::{RunProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::config::{ScanConfig, SymbolUnit};
use crate::hash::{input_hash, stable_hash_string};
use crate::radius::{palindrome_radii, RadiusTable};
use crate::search::byte_range;
use crate::span::PalindromeSpan;

/// Result of scanning one text, as emitted by the CLI and batch runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Report schema version.
    pub schema_version: SchemaVersion,
    /// Where the input came from.
    pub provenance: RunProvenance,
    /// Symbol granularity of the scan.
    pub unit: SymbolUnit,
    /// Input length in symbols.
    pub input_len: usize,
    /// Transformed sequence length, `2 * input_len + 3`.
    pub transformed_len: usize,
    /// Longest palindrome, in symbols.
    pub span: PalindromeSpan,
    /// The palindrome itself (lossy for byte spans splitting a `char`).
    pub palindrome: String,
    /// Successful expansion comparisons; never exceeds `transformed_len`.
    pub expansion_steps: usize,
    /// Number of non-empty palindromic substrings.
    pub palindromic_substrings: u64,
    /// Full radius table when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radii: Option<Vec<usize>>,
    /// Hash over input hash, unit and span.
    pub report_hash: String,
}

/// Scans `text` under `config`.
///
/// Fails only when the text exceeds `config.max_input_len`.
pub fn scan_text(text: &str, config: &ScanConfig) -> Result<ScanReport, PalError> {
    config.check_len(text)?;
    let (table, palindrome) = match config.unit {
        SymbolUnit::Char => {
            let symbols: Vec<char> = text.chars().collect();
            let table = palindrome_radii(&symbols);
            let (start, end) = byte_range(text, table.best());
            (table, text[start..end].to_string())
        }
        SymbolUnit::Byte => {
            let table = palindrome_radii(text.as_bytes());
            let bytes = table.best().slice(text.as_bytes());
            let palindrome = String::from_utf8_lossy(bytes).into_owned();
            (table, palindrome)
        }
    };
    build_report(text, config, &table, palindrome)
}

fn build_report(
    text: &str,
    config: &ScanConfig,
    table: &RadiusTable,
    palindrome: String,
) -> Result<ScanReport, PalError> {
    let digest = input_hash(text.as_bytes());
    let span = table.best();
    let report_hash = stable_hash_string(&(&digest, config.unit, span))?;
    Ok(ScanReport {
        schema_version: SchemaVersion::default(),
        provenance: RunProvenance::for_input(digest),
        unit: config.unit,
        input_len: table.input_len(),
        transformed_len: table.len(),
        span,
        palindrome,
        expansion_steps: table.expansion_steps(),
        palindromic_substrings: table.palindrome_count(),
        radii: config.emit_radii.then(|| table.as_slice().to_vec()),
        report_hash,
    })
}
