//! REPL implementation.

use std::io::{self, BufRead, Write};

use crate::session::Session;

/// REPL error.
#[derive(Debug)]
pub struct ReplError {
    pub message: String,
}

impl ReplError {
    fn new(message: impl Into<String>) -> Self {
        ReplError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ReplError {}

const HELP: &str = "\
Enter a pair of terms separated by =?= to unify them:
  f(x, Apple) =?= f(Riya, y)
Directives:
  :set max_steps <n>   change the unifier step budget
  :help                show this message
  :quit                exit";

/// Interactive unification loop over a [`Session`].
pub struct Repl {
    session: Session,
}

impl Repl {
    /// Create a new REPL with default limits.
    pub fn new() -> Self {
        Repl {
            session: Session::new(),
        }
    }

    /// Process a line of input, returning the text to print.
    /// `:quit` is handled by [`run`](Repl::run), not here.
    pub fn process_line(&mut self, line: &str) -> Result<String, ReplError> {
        let line = line.trim();

        if let Some(directive) = line.strip_prefix(':') {
            return self.process_directive(directive);
        }

        match line.split_once("=?=") {
            Some((a, b)) => Ok(self.session.run_pair(a, b)),
            None => Err(ReplError::new(
                "expected `<term> =?= <term>` or a directive (:help)",
            )),
        }
    }

    fn process_directive(&mut self, directive: &str) -> Result<String, ReplError> {
        let mut words = directive.split_whitespace();
        match words.next() {
            Some("help") => Ok(HELP.to_string()),
            Some("set") => match (words.next(), words.next()) {
                (Some("max_steps"), Some(value)) => {
                    let steps: usize = value
                        .parse()
                        .map_err(|_| ReplError::new(format!("invalid step count: {}", value)))?;
                    self.session.set_max_steps(steps);
                    Ok(format!("max_steps = {}", steps))
                }
                (Some(key), _) => Err(ReplError::new(format!("unknown setting: {}", key))),
                (None, _) => Err(ReplError::new("usage: :set max_steps <n>")),
            },
            Some(other) => Err(ReplError::new(format!("unknown directive: :{}", other))),
            None => Err(ReplError::new("expected directive name after ':'")),
        }
    }

    /// Run the REPL interactively until `:quit` or end of input.
    pub fn run(&mut self) -> Result<(), ReplError> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("> ");
            stdout
                .flush()
                .map_err(|e| ReplError::new(format!("io error: {}", e)))?;

            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|e| ReplError::new(format!("io error: {}", e)))?;
            if read == 0 {
                return Ok(()); // EOF
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == ":quit" {
                return Ok(());
            }

            match self.process_line(line) {
                Ok(output) => println!("{}", output),
                Err(e) => eprintln!("error: {}", e),
            }
        }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
