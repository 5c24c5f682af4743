//! Balanced `()`, `[]` and `{}` checking.

use pal_core::errors::{ErrorInfo, PalError};
use serde::{Deserialize, Serialize};

/// Treatment of symbols that are not brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BracketPolicy {
    /// Any other symbol is an error.
    Strict,
    /// Other symbols are skipped.
    #[default]
    IgnoreOthers,
}

fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Whether every bracket of `text` is closed by its partner in nesting order.
pub fn validate(text: &str, policy: BracketPolicy) -> Result<bool, PalError> {
    let mut expected = Vec::new();
    for (idx, symbol) in text.chars().enumerate() {
        if let Some(closer) = closer_for(symbol) {
            expected.push(closer);
            continue;
        }
        match symbol {
            ')' | ']' | '}' => {
                if expected.pop() != Some(symbol) {
                    return Ok(false);
                }
            }
            _ if policy == BracketPolicy::Strict => {
                return Err(PalError::Corpus(
                    ErrorInfo::new("non-bracket-symbol", "strict validation saw a non-bracket")
                        .with_context("symbol", symbol.to_string())
                        .with_context("index", idx.to_string()),
                ));
            }
            _ => {}
        }
    }
    Ok(expected.is_empty())
}
