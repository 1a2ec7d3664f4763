//! Recursive-descent parser for textual first-order terms.
//!
//! Grammar:
//! - lowercase-leading identifier → variable (`x`, `who`)
//! - uppercase-leading identifier → constant (`Apple`, `John`)
//! - `name(args)` → application; arguments are split on top-level commas
//!   only, tracked by a running paren-depth counter.

use thiserror::Error;

use crate::syntax::Term;

/// Default nesting-depth guard for [`parse_term`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Malformed term text. Local to one input; batch processing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty term")]
    Empty,
    #[error("invalid identifier: `{0}`")]
    InvalidIdentifier(String),
    #[error("unbalanced parentheses in `{0}`")]
    UnbalancedParens(String),
    #[error("trailing characters after term: `{0}`")]
    TrailingInput(String),
    #[error("empty argument list in `{0}`")]
    EmptyArgList(String),
    #[error("empty argument in `{0}`")]
    EmptyArgument(String),
    #[error("term nesting exceeds depth limit of {limit}")]
    DepthExceeded { limit: usize },
}

/// Parse a term, with the default nesting-depth guard.
///
/// All whitespace is stripped before classification, so `f( x , A )` and
/// `f(x,A)` parse to the same term.
pub fn parse_term(text: &str) -> Result<Term, ParseError> {
    parse_term_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Parse a term with an explicit nesting-depth guard.
pub fn parse_term_with_depth(text: &str, max_depth: usize) -> Result<Term, ParseError> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    TermParser { max_depth }.parse(&stripped, 0)
}

struct TermParser {
    max_depth: usize,
}

impl TermParser {
    fn parse(&self, s: &str, depth: usize) -> Result<Term, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        if s.chars().all(is_ident_char) {
            return classify_identifier(s);
        }

        match s.find('(') {
            Some(open) => self.parse_application(s, open, depth),
            // No '(' but also not a plain identifier: a stray ')' or a
            // junk character.
            None if s.contains(')') => Err(ParseError::UnbalancedParens(s.to_string())),
            None => Err(ParseError::InvalidIdentifier(s.to_string())),
        }
    }

    fn parse_application(&self, s: &str, open: usize, depth: usize) -> Result<Term, ParseError> {
        let functor = &s[..open];
        if functor.is_empty() || !functor.chars().all(is_ident_char) {
            return Err(ParseError::InvalidIdentifier(functor.to_string()));
        }

        // Locate the parenthesis matching `open`; it must close the term.
        let mut paren_depth = 0usize;
        let mut close = None;
        for (offset, ch) in s[open..].char_indices() {
            match ch {
                '(' => paren_depth += 1,
                ')' => {
                    paren_depth -= 1;
                    if paren_depth == 0 {
                        close = Some(open + offset);
                        break;
                    }
                }
                _ => {}
            }
        }
        let close = match close {
            Some(close) => close,
            None => return Err(ParseError::UnbalancedParens(s.to_string())),
        };
        if close + 1 != s.len() {
            return Err(ParseError::TrailingInput(s[close + 1..].to_string()));
        }

        let inside = &s[open + 1..close];
        if inside.is_empty() {
            return Err(ParseError::EmptyArgList(s.to_string()));
        }

        let mut args = Vec::new();
        for piece in split_top_level(inside) {
            if piece.is_empty() {
                return Err(ParseError::EmptyArgument(s.to_string()));
            }
            args.push(self.parse(piece, depth + 1)?);
        }

        Ok(Term::app(functor, args))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn classify_identifier(s: &str) -> Result<Term, ParseError> {
    match s.chars().next() {
        Some(c) if c.is_ascii_lowercase() => Ok(Term::var(s)),
        Some(c) if c.is_ascii_uppercase() => Ok(Term::constant(s)),
        _ => Err(ParseError::InvalidIdentifier(s.to_string())),
    }
}

/// Split on commas at paren depth zero; commas inside nested `(...)` belong
/// to their argument.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                pieces.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&s[start..]);
    pieces
}
