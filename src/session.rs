//! Session: end-to-end API for unifying textual term pairs.

use crate::parser::{parse_term, ParseError};
use crate::render::{format_pair_line, format_result};
use crate::unify::{unify_with, Substitution, UnifyConfig, UnifyResult};

/// Unify two textual terms under the default configuration.
///
/// Parse errors are reported separately from unification failures: a
/// `UnifyResult::Failure` is an ordinary outcome (the terms do not unify),
/// while `Err(ParseError)` means the input never reached the unifier.
pub fn unify_from_text(a: &str, b: &str) -> Result<UnifyResult, ParseError> {
    Session::new().unify_texts(a, b)
}

/// A session holds the unifier configuration and runs text pairs through
/// parse → unify → render. It keeps no state between pairs.
pub struct Session {
    config: UnifyConfig,
}

impl Session {
    /// Create a session with default limits.
    pub fn new() -> Self {
        Session {
            config: UnifyConfig::default(),
        }
    }

    /// Create a session with the given configuration.
    pub fn with_config(config: UnifyConfig) -> Self {
        Session { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &UnifyConfig {
        &self.config
    }

    /// Change the unifier step budget.
    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.config.max_steps = max_steps;
    }

    /// Parse both sides and unify them.
    pub fn unify_texts(&self, a: &str, b: &str) -> Result<UnifyResult, ParseError> {
        let t1 = parse_term(a)?;
        let t2 = parse_term(b)?;
        Ok(unify_with(&t1, &t2, Substitution::empty(), &self.config))
    }

    /// Produce one batch output line for a pair of term texts.
    ///
    /// A parse error is absorbed into the line so a batch can continue
    /// past bad pairs.
    pub fn run_pair(&self, a: &str, b: &str) -> String {
        let rendered = match self.unify_texts(a, b) {
            Ok(result) => format_result(&result),
            Err(err) => format!("parse error: {}", err),
        };
        format_pair_line(a.trim(), b.trim(), &rendered)
    }

    /// Run a batch of term-text pairs, one output line per pair in input
    /// order. Pairs are caller-owned data; a failing pair never aborts
    /// the rest of the batch.
    pub fn run_batch<'a, I>(&self, pairs: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .map(|(a, b)| self.run_pair(a, b))
            .collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
