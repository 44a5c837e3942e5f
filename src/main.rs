//! LL(1) grammar analyzer
//!
//! Takes a context-free grammar in a simple textual format and produces:
//! - the grammar after left factoring and left-recursion removal
//! - FIRST and FOLLOW sets for every non-terminal
//! - an LL(1) predictive-parsing table, with any conflicts reported
//!
//! # References
//! Aho, Alfred V. et al. "Compilers: Principles, Techniques, and Tools" (2nd Edition).
//! Addison-Wesley, 2006.

mod cli;
mod error;
mod factor;
mod first_follow;
mod grammar;
mod reader;
mod recursion;
mod render;
mod symbol;
mod table;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
