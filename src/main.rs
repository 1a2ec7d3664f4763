//! Unilog CLI - unify term pairs from a file, or interactively.

use std::env;
use std::fs;

use unilog::repl::Repl;
use unilog::session::Session;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [] => {
            println!("Unilog - first-order term unification");
            println!("Type :help for help, :quit to exit.\n");

            let mut repl = Repl::new();
            if let Err(e) = repl.run() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        [path] => {
            if let Err(e) = run_file(path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Usage: unilog [pair-file]");
            std::process::exit(2);
        }
    }
}

/// Process a file of `<term> =?= <term>` lines, one result line each.
/// Blank lines and `//` comments are skipped; a bad pair only fails its
/// own line.
fn run_file(path: &str) -> Result<(), std::io::Error> {
    let text = fs::read_to_string(path)?;
    let session = Session::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        match line.split_once("=?=") {
            Some((a, b)) => println!("{}", session.run_pair(a, b)),
            None => println!("{} => line error: expected `<term> =?= <term>`", line),
        }
    }

    Ok(())
}
