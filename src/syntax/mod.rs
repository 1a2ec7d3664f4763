//! Syntax of first-order terms.

mod term;

pub use term::{FnSym, Term, Var};
