//! Parsing of textual term syntax.

mod parser;

pub use parser::{parse_term, parse_term_with_depth, ParseError, DEFAULT_MAX_DEPTH};
