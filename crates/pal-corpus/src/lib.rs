//! Independent textbook routines sharing the toolkit's error type.

pub mod brackets;
pub mod disk;
pub mod fib;
pub mod ladder;
pub mod majority;

pub use brackets::{validate as validate_brackets, BracketPolicy};
pub use disk::{schedule_scan, Direction, Schedule};
pub use fib::{fibonacci, FibMemo, MAX_FIB_INDEX};
pub use ladder::ladder_length;
pub use majority::majority_element;
