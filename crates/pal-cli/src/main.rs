use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    batch::{self, BatchArgs},
    corpus::{self, BracketsArgs, DiskArgs, FibArgs, LadderArgs, MajorityArgs},
    count::{self, CountArgs},
    longest::{self, LongestArgs},
    sample::{self, SampleArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "pal", about = "Palindrome scanner and textbook routines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the longest palindrome of a text or file.
    Longest(LongestArgs),
    /// Count palindromic substrings and list maximal palindromes.
    Count(CountArgs),
    /// Scan every input listed in a YAML batch configuration.
    Batch(BatchArgs),
    /// Scan a seeded random text.
    Sample(SampleArgs),
    /// Find the strict majority of a list of integers.
    Majority(MajorityArgs),
    /// Compute a Fibonacci number.
    Fib(FibArgs),
    /// Check that brackets are balanced.
    Brackets(BracketsArgs),
    /// Length of the shortest word ladder.
    Ladder(LadderArgs),
    /// Order disk requests with the SCAN policy.
    Disk(DiskArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Longest(args) => longest::run(&args),
        Command::Count(args) => count::run(&args),
        Command::Batch(args) => batch::run(&args),
        Command::Sample(args) => sample::run(&args),
        Command::Majority(args) => corpus::run_majority(&args),
        Command::Fib(args) => corpus::run_fib(&args),
        Command::Brackets(args) => corpus::run_brackets(&args),
        Command::Ladder(args) => corpus::run_ladder(&args),
        Command::Disk(args) => corpus::run_disk(&args),
        Command::Version(args) => version::run(&args),
    }
}
