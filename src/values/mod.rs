//! Value helpers
//!
//! Small named value types used as scratch storage between calls, plus the
//! numeric helpers that operate on them:
//! - `Pair` for comparing two values by text or by number
//! - `Scratch` for the current item array and an accumulated list
//! - `max_of` and `parse_delimited` for numeric input

mod numbers;
mod pair;
mod scratch;

pub use numbers::{max_of, parse_delimited};
pub use pair::Pair;
pub use scratch::Scratch;
