//! Unilog: Robinson unification with occurs-check over first-order terms.
//!
//! This crate parses textual terms (`f(x, Apple)`, `Knows(John, x)`),
//! computes most general unifiers via a worklist algorithm, and renders
//! substitutions as fully resolved bindings for diagnostics.

pub mod parser;
pub mod render;
pub mod repl;
pub mod session;
pub mod syntax;
pub mod unify;
