use std::error::Error;

use clap::{Args, ValueEnum};
use pal_corpus::{
    fibonacci, ladder_length, majority_element, schedule_scan, validate_brackets, BracketPolicy,
    Direction,
};
use serde_json::json;

use super::print_canonical;

#[derive(Args, Debug)]
pub struct MajorityArgs {
    /// Comma separated integers.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<i64>,
}

#[derive(Args, Debug)]
pub struct FibArgs {
    /// Index of the Fibonacci number.
    #[arg(long, allow_hyphen_values = true)]
    pub n: i64,
}

#[derive(Args, Debug)]
pub struct BracketsArgs {
    /// Text to check.
    #[arg(long)]
    pub text: String,
    /// Fail on symbols other than brackets instead of skipping them.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct LadderArgs {
    /// First word of the ladder.
    #[arg(long)]
    pub start: String,
    /// Last word of the ladder.
    #[arg(long)]
    pub end: String,
    /// Comma separated dictionary.
    #[arg(long, value_delimiter = ',')]
    pub words: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DirectionArg {
    Up,
    Down,
}

#[derive(Args, Debug)]
pub struct DiskArgs {
    /// Current head cylinder.
    #[arg(long)]
    pub head: u64,
    /// Current direction of travel.
    #[arg(long, value_enum, default_value = "up")]
    pub direction: DirectionArg,
    /// Number of cylinders on the disk.
    #[arg(long)]
    pub bound: u64,
    /// Comma separated pending cylinders.
    #[arg(long, value_delimiter = ',')]
    pub requests: Vec<u64>,
}

pub fn run_majority(args: &MajorityArgs) -> Result<(), Box<dyn Error>> {
    print_canonical(&json!({ "majority": majority_element(&args.values) }))
}

pub fn run_fib(args: &FibArgs) -> Result<(), Box<dyn Error>> {
    let value = fibonacci(args.n)?;
    // u128 exceeds what JSON numbers carry losslessly
    print_canonical(&json!({ "n": args.n, "value": value.to_string() }))
}

pub fn run_brackets(args: &BracketsArgs) -> Result<(), Box<dyn Error>> {
    let policy = if args.strict {
        BracketPolicy::Strict
    } else {
        BracketPolicy::IgnoreOthers
    };
    let balanced = validate_brackets(&args.text, policy)?;
    print_canonical(&json!({ "balanced": balanced, "policy": policy }))
}

pub fn run_ladder(args: &LadderArgs) -> Result<(), Box<dyn Error>> {
    let length = ladder_length(&args.start, &args.end, &args.words);
    print_canonical(&json!({ "length": length }))
}

pub fn run_disk(args: &DiskArgs) -> Result<(), Box<dyn Error>> {
    let direction = match args.direction {
        DirectionArg::Up => Direction::Up,
        DirectionArg::Down => Direction::Down,
    };
    let schedule = schedule_scan(args.head, direction, args.bound, &args.requests)?;
    print_canonical(&schedule)
}
