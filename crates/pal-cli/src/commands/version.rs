use std::error::Error;
use std::process::Command;

use clap::Args;
use serde::Serialize;

use super::print_canonical;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit crate versions and toolchain information as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    core_version: String,
    rustc: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let rustc = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_else(|| "rustc unavailable".into());
    print_canonical(&VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        core_version: pal_core::TOOL_VERSION.into(),
        rustc,
    })
}
