use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use pal_core::PalError;
use pal_scan::{from_yaml_slice, scan_text, ScanConfig};

use super::{print_canonical, UnitArg};

#[derive(Args, Debug)]
pub struct LongestArgs {
    /// Text to scan.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,
    /// UTF-8 file to scan.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Symbol granularity; overrides the config file.
    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,
    /// Include the full radius table in the report.
    #[arg(long)]
    pub radii: bool,
    /// YAML scan configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &LongestArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            let bytes = fs::read(path).map_err(|err| PalError::io("config-read", path, err))?;
            from_yaml_slice::<ScanConfig>(&bytes)?
        }
        None => ScanConfig::default(),
    };
    if let Some(unit) = args.unit {
        config.unit = unit.into();
    }
    config.emit_radii |= args.radii;
    config.validate()?;

    let (text, label) = match (&args.text, &args.file) {
        (Some(text), _) => (text.clone(), None),
        (None, Some(path)) => {
            let text =
                fs::read_to_string(path).map_err(|err| PalError::io("read-input", path, err))?;
            (text, Some(path.display().to_string()))
        }
        (None, None) => return Err("provide --text or --file".into()),
    };

    let mut report = scan_text(&text, &config)?;
    if let Some(label) = label {
        report.provenance = report.provenance.with_label(label);
    }
    print_canonical(&report)
}
