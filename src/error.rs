//! Error types shared by the grammar reader and the analytical core.
//!
//! LL(1) conflicts are *not* represented here: the table builder never
//! aborts, so a conflict is ordinary data (see [`crate::table::Conflict`]),
//! not a [`GrammarError`] variant.

use thiserror::Error;

/// Errors that can occur while reading or loading a grammar.
#[derive(Error, Debug)]
pub enum GrammarError {
    /// A grammar line was neither a comment nor of the form `LHS -> RHS`.
    #[error("malformed grammar line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },

    /// `eps` was used as a non-terminal name on a left-hand side.
    #[error("line {line}: \"eps\" is reserved and cannot be a non-terminal")]
    ReservedNameAsNonTerminal { line: usize },

    /// `$` appeared anywhere in the input grammar.
    #[error("line {line}: \"$\" is reserved and cannot appear in a grammar file")]
    ReservedEndMarkerUsed { line: usize },

    /// The input contained no productions at all.
    #[error("grammar input is empty")]
    EmptyInput,

    /// A production's right-hand side had an alternative with no tokens and
    /// no explicit `eps`.
    #[error("line {line}: alternative of \"{head}\" has no symbols (use \"eps\")")]
    EmptyAlternative { line: usize, head: String },

    /// Failure opening or reading the grammar file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for `Result`s returned by the reader and core.
pub type Result<T> = std::result::Result<T, GrammarError>;
