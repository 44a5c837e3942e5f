//! Grammar store: symbol interning, production storage, and the structured
//! `load` entry point (§4.1, §6 of the design).
//!
//! A [`Grammar`] owns two disjoint interned-name universes (terminals and
//! non-terminals) and, per non-terminal, an ordered list of alternative
//! productions. Non-terminals are appended in definition order and never
//! removed, so a `NonTerminalId` doubles as an index into
//! `non_terminals_in_definition_order()`.

use crate::error::{GrammarError, Result};
use crate::symbol::{NonTerminalId, Symbol, TerminalId};
use std::collections::HashMap;
use std::fmt;

/// One already-tokenised production, as handed to [`Grammar::load`] by the
/// (non-core) reader.
///
/// `alternatives` is a list of alternatives, each a whitespace-split list of
/// symbol-name tokens; the literal token `"eps"` denotes ε. `line` is kept
/// for error reporting.
#[derive(Debug, Clone)]
pub struct RawProduction {
    pub line: usize,
    pub head: String,
    pub alternatives: Vec<Vec<String>>,
}

/// A production's right-hand side, paired with its head, for display and
/// conflict reporting. Productions are otherwise stored bare (`Vec<Symbol>`)
/// inside [`NonTerminalEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub head: NonTerminalId,
    pub body: Vec<Symbol>,
}

#[derive(Debug, Clone)]
struct NonTerminalEntry {
    name: String,
    alternatives: Vec<Vec<Symbol>>,
}

/// A context-free grammar: interned symbols plus per-non-terminal production
/// lists, built by [`Grammar::load`] and mutated in place by the left
/// factorer and left-recursion remover.
#[derive(Debug, Clone)]
pub struct Grammar {
    terminal_names: Vec<String>,
    terminal_index: HashMap<String, TerminalId>,
    non_terminals: Vec<NonTerminalEntry>,
    non_terminal_index: HashMap<String, NonTerminalId>,
}

impl Grammar {
    /// Creates an empty grammar with no symbols and no start symbol.
    pub fn new() -> Self {
        Self {
            terminal_names: Vec::new(),
            terminal_index: HashMap::new(),
            non_terminals: Vec::new(),
            non_terminal_index: HashMap::new(),
        }
    }

    /// Interns a terminal name, creating it on first sight.
    pub fn intern_terminal(&mut self, name: &str) -> TerminalId {
        if let Some(&id) = self.terminal_index.get(name) {
            return id;
        }
        let id = self.terminal_names.len() as TerminalId;
        self.terminal_names.push(name.to_string());
        self.terminal_index.insert(name.to_string(), id);
        id
    }

    /// Returns the rule head for `name`, creating it (and, if this is the
    /// first non-terminal ever added, establishing it as the start symbol)
    /// on first sight. Idempotent.
    pub fn add_non_terminal(&mut self, name: &str) -> NonTerminalId {
        if let Some(&id) = self.non_terminal_index.get(name) {
            return id;
        }
        let id = self.non_terminals.len() as NonTerminalId;
        self.non_terminals.push(NonTerminalEntry {
            name: name.to_string(),
            alternatives: Vec::new(),
        });
        self.non_terminal_index.insert(name.to_string(), id);
        id
    }

    /// Appends one alternative to `head`'s production list. An empty `body`
    /// is normalised to `[Epsilon]`.
    pub fn add_production(&mut self, head: NonTerminalId, mut body: Vec<Symbol>) {
        if body.is_empty() {
            body.push(Symbol::Epsilon);
        }
        self.non_terminals[head as usize].alternatives.push(body);
    }

    /// Looks up a non-terminal by name.
    pub fn find_non_terminal(&self, name: &str) -> Option<NonTerminalId> {
        self.non_terminal_index.get(name).copied()
    }

    /// Looks up a terminal by name.
    pub fn find_terminal(&self, name: &str) -> Option<TerminalId> {
        self.terminal_index.get(name).copied()
    }

    /// The start symbol: the first non-terminal defined. Panics if the
    /// grammar has no non-terminals, which cannot happen for a grammar
    /// produced by [`Grammar::load`] on non-empty input.
    pub fn start_symbol(&self) -> NonTerminalId {
        0
    }

    /// All non-terminal ids, in definition order (fresh non-terminals
    /// introduced by the transformers are appended at the end).
    pub fn non_terminals_in_definition_order(&self) -> impl Iterator<Item = NonTerminalId> {
        0..self.non_terminals.len() as NonTerminalId
    }

    /// All terminal ids, in interning order.
    pub fn terminals(&self) -> impl Iterator<Item = TerminalId> {
        0..self.terminal_names.len() as TerminalId
    }

    /// The alternatives currently recorded for `nt`.
    pub fn alternatives(&self, nt: NonTerminalId) -> &[Vec<Symbol>] {
        &self.non_terminals[nt as usize].alternatives
    }

    /// Every production in the grammar, head-qualified, in definition order
    /// (non-terminals outer, alternatives inner). Used by the FIRST/FOLLOW
    /// engines and the table builder, which only ever need a flat sweep.
    pub fn all_productions(&self) -> impl Iterator<Item = Production> + '_ {
        self.non_terminals.iter().enumerate().flat_map(|(i, nt)| {
            let head = i as NonTerminalId;
            nt.alternatives
                .iter()
                .map(move |body| Production {
                    head,
                    body: body.clone(),
                })
        })
    }

    /// The interned name of a non-terminal.
    pub fn non_terminal_name(&self, nt: NonTerminalId) -> &str {
        &self.non_terminals[nt as usize].name
    }

    /// The interned name of a terminal.
    pub fn terminal_name(&self, t: TerminalId) -> &str {
        &self.terminal_names[t as usize]
    }

    /// Renders any symbol to its source-level name (`"ε"`/`"$"` for the two
    /// reserved literals). Not a substitute for the (non-core) renderer,
    /// which formats whole grammars/sets/tables; this is a one-symbol
    /// lookup used internally for error messages and tests.
    pub fn symbol_name(&self, sym: Symbol) -> String {
        match sym {
            Symbol::Terminal(id) => self.terminal_name(id).to_string(),
            Symbol::NonTerminal(id) => self.non_terminal_name(id).to_string(),
            Symbol::Epsilon => "ε".to_string(),
            Symbol::EndMarker => "$".to_string(),
        }
    }

    /// Requests a fresh non-terminal derived from `base`, appending `_prime`
    /// suffixes until the name collides with neither namespace. Collisions
    /// are checked against both namespaces combined, since the two must
    /// stay disjoint.
    pub fn fresh_non_terminal(&mut self, base: &str) -> NonTerminalId {
        let mut candidate = format!("{base}_prime");
        while self.terminal_index.contains_key(&candidate)
            || self.non_terminal_index.contains_key(&candidate)
        {
            candidate.push_str("_prime");
        }
        self.add_non_terminal(&candidate)
    }

    /// Overwrites `nt`'s alternative list wholesale. Used by the left
    /// factorer and left-recursion remover, the only two components
    /// permitted to rewrite the grammar in place after `load`.
    pub(crate) fn set_alternatives(&mut self, nt: NonTerminalId, alts: Vec<Vec<Symbol>>) {
        self.non_terminals[nt as usize].alternatives = alts;
    }

    /// Builds a grammar from an already-tokenised list of productions,
    /// interning symbols and checking for reserved-name misuse. This is the
    /// boundary the (non-core) reader crosses into the core.
    ///
    /// The first `RawProduction`'s head becomes the start symbol.
    pub fn load(productions: &[RawProduction]) -> Result<Self> {
        if productions.is_empty() {
            return Err(GrammarError::EmptyInput);
        }

        let mut grammar = Grammar::new();

        // Pass 1: register every head as a non-terminal first, so that a
        // right-hand-side reference to a not-yet-seen non-terminal is
        // still classified correctly in pass 2.
        for raw in productions {
            if raw.head == "eps" {
                return Err(GrammarError::ReservedNameAsNonTerminal { line: raw.line });
            }
            if raw.head == "$" {
                return Err(GrammarError::ReservedEndMarkerUsed { line: raw.line });
            }
            grammar.add_non_terminal(&raw.head);
        }

        let declared_heads: std::collections::HashSet<&str> =
            productions.iter().map(|p| p.head.as_str()).collect();

        for raw in productions {
            let head = grammar.find_non_terminal(&raw.head).unwrap();

            for alt in &raw.alternatives {
                if alt.is_empty() {
                    return Err(GrammarError::EmptyAlternative {
                        line: raw.line,
                        head: raw.head.clone(),
                    });
                }

                let mut body = Vec::with_capacity(alt.len());
                for token in alt {
                    if token == "$" {
                        return Err(GrammarError::ReservedEndMarkerUsed { line: raw.line });
                    }
                    let symbol = if token == "eps" {
                        Symbol::Epsilon
                    } else if declared_heads.contains(token.as_str()) {
                        Symbol::NonTerminal(grammar.add_non_terminal(token))
                    } else {
                        Symbol::Terminal(grammar.intern_terminal(token))
                    };
                    body.push(symbol);
                }

                // `eps` written alongside other symbols normalises away:
                // only a lone `eps` alternative denotes the empty string.
                if body.len() > 1 {
                    body.retain(|s| !s.is_epsilon());
                }

                grammar.add_production(head, body);
            }
        }

        Ok(grammar)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Production {
    /// Debug-oriented rendering using raw ids; human-facing rendering goes
    /// through the (non-core) renderer, which has a `Grammar` to resolve
    /// names against.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{} ->", self.head)?;
        for sym in &self.body {
            write!(f, " {sym}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line: usize, head: &str, alts: &[&[&str]]) -> RawProduction {
        RawProduction {
            line,
            head: head.to_string(),
            alternatives: alts
                .iter()
                .map(|alt| alt.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn load_simple_grammar() {
        let productions = vec![
            raw(1, "S", &[&["A", "B"]]),
            raw(2, "A", &[&["a"]]),
            raw(3, "B", &[&["b"]]),
        ];
        let grammar = Grammar::load(&productions).unwrap();
        assert_eq!(grammar.all_productions().count(), 3);
        assert_eq!(
            grammar.start_symbol(),
            grammar.find_non_terminal("S").unwrap()
        );
        assert!(grammar.find_terminal("a").is_some());
    }

    #[test]
    fn load_rejects_empty_input() {
        assert!(matches!(Grammar::load(&[]), Err(GrammarError::EmptyInput)));
    }

    #[test]
    fn load_rejects_eps_as_head() {
        let productions = vec![raw(1, "eps", &[&["a"]])];
        assert!(matches!(
            Grammar::load(&productions),
            Err(GrammarError::ReservedNameAsNonTerminal { line: 1 })
        ));
    }

    #[test]
    fn load_rejects_dollar_anywhere() {
        let productions = vec![raw(1, "S", &[&["a", "$"]])];
        assert!(matches!(
            Grammar::load(&productions),
            Err(GrammarError::ReservedEndMarkerUsed { line: 1 })
        ));
    }

    #[test]
    fn eps_alternative_normalises_to_epsilon() {
        let productions = vec![raw(1, "S", &[&["eps"]])];
        let grammar = Grammar::load(&productions).unwrap();
        let s = grammar.find_non_terminal("S").unwrap();
        assert_eq!(grammar.alternatives(s), &[vec![Symbol::Epsilon]]);
    }

    #[test]
    fn fresh_non_terminal_avoids_collisions() {
        let mut grammar = Grammar::new();
        grammar.add_non_terminal("S");
        grammar.add_non_terminal("S_prime");
        let fresh = grammar.fresh_non_terminal("S");
        assert_eq!(grammar.non_terminal_name(fresh), "S_prime_prime");
    }

    #[test]
    fn rhs_nonterminal_forward_reference_is_classified_correctly() {
        // B is used in S's body before B's own production line appears.
        let productions = vec![raw(1, "S", &[&["B"]]), raw(2, "B", &[&["b"]])];
        let grammar = Grammar::load(&productions).unwrap();
        let s = grammar.find_non_terminal("S").unwrap();
        let b = grammar.find_non_terminal("B").unwrap();
        assert_eq!(grammar.alternatives(s), &[vec![Symbol::NonTerminal(b)]]);
    }
}
