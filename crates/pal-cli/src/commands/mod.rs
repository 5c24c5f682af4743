use std::error::Error;

use clap::ValueEnum;
use pal_scan::{to_canonical_json_bytes, SymbolUnit};
use serde::Serialize;

pub mod batch;
pub mod corpus;
pub mod count;
pub mod longest;
pub mod sample;
pub mod version;

/// Symbol granularity accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum UnitArg {
    Char,
    Byte,
}

impl From<UnitArg> for SymbolUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Char => SymbolUnit::Char,
            UnitArg::Byte => SymbolUnit::Byte,
        }
    }
}

pub fn print_canonical<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
