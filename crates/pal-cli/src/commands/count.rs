use std::error::Error;

use clap::Args;
use pal_scan::{count_palindromic_substrings, maximal_palindromes};
use serde_json::json;

use super::print_canonical;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Text to analyse, one `char` per symbol.
    #[arg(long)]
    pub text: String,
}

pub fn run(args: &CountArgs) -> Result<(), Box<dyn Error>> {
    let symbols: Vec<char> = args.text.chars().collect();
    let maximal: Vec<_> = maximal_palindromes(&symbols)
        .into_iter()
        .map(|span| {
            let text: String = span.slice(&symbols).iter().collect();
            json!({ "start": span.start, "len": span.len, "text": text })
        })
        .collect();
    print_canonical(&json!({
        "count": count_palindromic_substrings(&symbols),
        "maximal": maximal,
    }))
}
