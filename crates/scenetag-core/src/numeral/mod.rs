pub mod grammar;
pub mod parse;

pub use parse::{parse_numeral, parse_roman, parse_word, to_roman};
