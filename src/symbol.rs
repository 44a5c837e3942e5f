//! Symbol types for context-free grammars.
//!
//! A [`Symbol`] is a reference into one of two disjoint interned-name
//! universes owned by a [`crate::grammar::Grammar`]: terminals and
//! non-terminals. Interning collapses name equality to integer-id equality,
//! so a `Symbol` never carries a `String` of its own.

use std::cmp::Ordering;
use std::fmt;

/// Id of an interned terminal name, unique within one [`crate::grammar::Grammar`].
pub type TerminalId = u32;

/// Id of an interned non-terminal name, unique within one [`crate::grammar::Grammar`].
pub type NonTerminalId = u32;

/// A symbol referenced from a production body.
///
/// # Grammar Conventions
/// - `Terminal`/`NonTerminal` carry the id assigned by the grammar's
///   interner, not the name itself.
/// - `Epsilon` is legal only inside production bodies and FIRST sets.
/// - `EndMarker` is legal only inside FOLLOW sets and as a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A terminal symbol.
    Terminal(TerminalId),
    /// A non-terminal symbol.
    NonTerminal(NonTerminalId),
    /// The empty string (ε).
    Epsilon,
    /// The end-of-input marker ($).
    EndMarker,
}

impl Symbol {
    /// Checks if this symbol is a terminal.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Checks if this symbol is a non-terminal.
    #[inline]
    pub const fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }

    /// Checks if this symbol is epsilon (ε).
    #[inline]
    pub const fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Checks if this symbol is the end marker ($).
    #[inline]
    pub const fn is_end_marker(&self) -> bool {
        matches!(self, Symbol::EndMarker)
    }
}

/// Ordering used only to keep table columns and rendered sets deterministic.
///
/// Order: Epsilon < Terminal < NonTerminal < EndMarker, ties broken by id.
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(s: &Symbol) -> u8 {
            match s {
                Symbol::Epsilon => 0,
                Symbol::Terminal(_) => 1,
                Symbol::NonTerminal(_) => 2,
                Symbol::EndMarker => 3,
            }
        }

        match (self, other) {
            (Symbol::Terminal(a), Symbol::Terminal(b)) => a.cmp(b),
            (Symbol::NonTerminal(a), Symbol::NonTerminal(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Symbol {
    /// Displays the raw id; callers that need the interned name should go
    /// through [`crate::grammar::Grammar::symbol_name`] instead. This impl
    /// exists so `Symbol` is printable in debug contexts without a `Grammar`
    /// at hand.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(id) => write!(f, "t{}", id),
            Symbol::NonTerminal(id) => write!(f, "n{}", id),
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::EndMarker => write!(f, "$"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates() {
        assert!(Symbol::Terminal(0).is_terminal());
        assert!(Symbol::NonTerminal(0).is_nonterminal());
        assert!(Symbol::Epsilon.is_epsilon());
        assert!(Symbol::EndMarker.is_end_marker());
        assert!(!Symbol::Terminal(0).is_nonterminal());
    }

    #[test]
    fn id_equality_not_variant_crossing() {
        assert_ne!(Symbol::Terminal(0), Symbol::NonTerminal(0));
        assert_eq!(Symbol::Terminal(3), Symbol::Terminal(3));
    }

    #[test]
    fn ordering_matches_spec() {
        assert!(Symbol::Epsilon < Symbol::Terminal(0));
        assert!(Symbol::Terminal(100) < Symbol::NonTerminal(0));
        assert!(Symbol::NonTerminal(100) < Symbol::EndMarker);
    }
}
