use std::path::{Path, PathBuf};

use pal_core::errors::{ErrorInfo, PalError};
use serde::{Deserialize, Serialize};

use crate::serde::from_yaml_slice;

/// Atomic symbol the scanner operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolUnit {
    /// Unicode scalar values (`char`).
    #[default]
    Char,
    /// Raw UTF-8 bytes.
    Byte,
}

impl SymbolUnit {
    /// Number of symbols `text` contains under this unit.
    pub fn count(&self, text: &str) -> usize {
        match self {
            SymbolUnit::Char => text.chars().count(),
            SymbolUnit::Byte => text.len(),
        }
    }
}

/// Options shared by single scans and batch runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Symbol granularity.
    #[serde(default)]
    pub unit: SymbolUnit,
    /// Attach the full radius table to each report.
    #[serde(default)]
    pub emit_radii: bool,
    /// Reject inputs longer than this many symbols.
    #[serde(default)]
    pub max_input_len: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            unit: SymbolUnit::Char,
            emit_radii: false,
            max_input_len: None,
        }
    }
}

impl ScanConfig {
    /// Checks option consistency.
    pub fn validate(&self) -> Result<(), PalError> {
        if self.max_input_len == Some(0) {
            return Err(PalError::Config(
                ErrorInfo::new("max-input-len-zero", "max_input_len must be positive")
                    .with_hint("omit the field to disable the limit"),
            ));
        }
        Ok(())
    }

    /// Rejects `text` when it exceeds `max_input_len`.
    pub fn check_len(&self, text: &str) -> Result<(), PalError> {
        let Some(limit) = self.max_input_len else {
            return Ok(());
        };
        let len = self.unit.count(text);
        if len > limit {
            return Err(PalError::Input(
                ErrorInfo::new("input-too-long", "input exceeds max_input_len")
                    .with_context("len", len.to_string())
                    .with_context("limit", limit.to_string()),
            ));
        }
        Ok(())
    }
}

/// One entry of a batch: inline text or a file to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchInput {
    /// Inline text.
    Text {
        /// Text to scan.
        text: String,
        /// Optional report label.
        #[serde(default)]
        label: Option<String>,
    },
    /// UTF-8 file, relative paths resolved against the config directory.
    File {
        /// Path of the file to scan.
        file: PathBuf,
        /// Optional report label, defaults to the path.
        #[serde(default)]
        label: Option<String>,
    },
}

/// YAML document driving `run_batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BatchConfig {
    /// Scan options applied to every input.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Inputs scanned in order.
    #[serde(default)]
    pub inputs: Vec<BatchInput>,
}

impl BatchConfig {
    /// Loads and validates a batch configuration file.
    pub fn load(path: &Path) -> Result<Self, PalError> {
        let bytes = std::fs::read(path).map_err(|err| PalError::io("config-read", path, err))?;
        let config: BatchConfig = from_yaml_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the scan options and that at least one input is listed.
    pub fn validate(&self) -> Result<(), PalError> {
        self.scan.validate()?;
        if self.inputs.is_empty() {
            return Err(PalError::Config(ErrorInfo::new(
                "empty-batch",
                "batch configuration lists no inputs",
            )));
        }
        Ok(())
    }
}
