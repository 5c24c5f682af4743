use std::error::Error;

use clap::Args;
use pal_core::RngHandle;
use pal_scan::workload::random_text;
use pal_scan::{scan_text, ScanConfig};

use super::{print_canonical, UnitArg};

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of symbols to generate.
    #[arg(long, default_value_t = 64)]
    pub len: usize,
    /// Symbols to draw from.
    #[arg(long, default_value = "ab")]
    pub alphabet: String,
    /// Master seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Optional substream of the master seed.
    #[arg(long)]
    pub substream: Option<u64>,
    /// Symbol granularity.
    #[arg(long, value_enum, default_value = "char")]
    pub unit: UnitArg,
    /// Include the generated text in the report label.
    #[arg(long)]
    pub show_text: bool,
}

pub fn run(args: &SampleArgs) -> Result<(), Box<dyn Error>> {
    let mut rng = match args.substream {
        Some(substream) => RngHandle::from_substream(args.seed, substream),
        None => RngHandle::from_seed(args.seed),
    };
    let alphabet: Vec<char> = args.alphabet.chars().collect();
    let text = random_text(args.len, &alphabet, &mut rng)?;
    let config = ScanConfig {
        unit: args.unit.into(),
        ..ScanConfig::default()
    };
    let mut report = scan_text(&text, &config)?;
    report.provenance = report.provenance.with_seed(rng.seed());
    if args.show_text {
        report.provenance = report.provenance.with_label(text);
    }
    print_canonical(&report)
}
