//! Interactive REPL.

mod repl;

pub use repl::{Repl, ReplError};
