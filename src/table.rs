//! LL(1) parse table construction (§4.6).
//!
//! For every production `A -> alpha`, FIRST(alpha) decides which terminal
//! columns of row A get `A -> alpha`; if alpha is nullable, FOLLOW(A) decides
//! additional columns. A second distinct production landing on the same
//! cell is a conflict: non-fatal, recorded alongside the best-effort table
//! (the first-winning entry stays).

use crate::first_follow::{first_of_string, FirstSets, FollowSets};
use crate::grammar::{Grammar, Production};
use crate::symbol::{NonTerminalId, Symbol};
use std::collections::HashMap;

/// Two distinct productions landing on the same `(non-terminal, terminal)`
/// cell. Carries pre-rendered names/production text so it can be reported
/// without a `Grammar` at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub non_terminal: String,
    pub terminal: String,
    pub production_a: String,
    pub production_b: String,
}

/// The LL(1) predictive-parsing table: a partial map from
/// `(non-terminal, terminal-or-end-marker)` to the production to expand.
#[derive(Debug, Clone, Default)]
pub struct ParseTable {
    entries: HashMap<(NonTerminalId, Symbol), Production>,
}

impl ParseTable {
    /// The production to expand when looking at `nt` with `terminal` next,
    /// if the table has an entry for that cell.
    pub fn get(&self, nt: NonTerminalId, terminal: Symbol) -> Option<&Production> {
        self.entries.get(&(nt, terminal))
    }

    /// All populated cells.
    pub fn entries(&self) -> impl Iterator<Item = (&(NonTerminalId, Symbol), &Production)> {
        self.entries.iter()
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the LL(1) parse table from a grammar and its FIRST/FOLLOW sets.
///
/// Always returns a table, even when the grammar is not LL(1): conflicting
/// cells keep their first-assigned production and are additionally reported
/// in the returned conflict list. An empty conflict list certifies LL(1).
pub fn build_table(
    grammar: &Grammar,
    first_sets: &FirstSets,
    follow_sets: &FollowSets,
) -> (ParseTable, Vec<Conflict>) {
    let mut entries: HashMap<(NonTerminalId, Symbol), Production> = HashMap::new();
    let mut conflicts = Vec::new();

    for production in grammar.all_productions() {
        let head = production.head;
        let first_alpha = first_of_string(first_sets, &production.body);

        for terminal in first_alpha.iter().copied().filter(|s| !s.is_epsilon()) {
            assign(grammar, &mut entries, &mut conflicts, head, terminal, &production);
        }

        if first_alpha.contains(&Symbol::Epsilon) {
            if let Some(follow) = follow_sets.get(&head) {
                for terminal in follow.iter().copied() {
                    assign(grammar, &mut entries, &mut conflicts, head, terminal, &production);
                }
            }
        }
    }

    (ParseTable { entries }, conflicts)
}

fn assign(
    grammar: &Grammar,
    entries: &mut HashMap<(NonTerminalId, Symbol), Production>,
    conflicts: &mut Vec<Conflict>,
    head: NonTerminalId,
    terminal: Symbol,
    production: &Production,
) {
    let key = (head, terminal);
    match entries.get(&key) {
        Some(existing) if existing != production => {
            log::warn!(
                "LL(1) conflict at M[{}, {}]",
                grammar.non_terminal_name(head),
                grammar.symbol_name(terminal)
            );
            conflicts.push(Conflict {
                non_terminal: grammar.non_terminal_name(head).to_string(),
                terminal: grammar.symbol_name(terminal),
                production_a: render_production(grammar, existing),
                production_b: render_production(grammar, production),
            });
        }
        Some(_) => {}
        None => {
            entries.insert(key, production.clone());
        }
    }
}

fn render_production(grammar: &Grammar, production: &Production) -> String {
    let body = production
        .body
        .iter()
        .map(|s| grammar.symbol_name(*s))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} -> {}", grammar.non_terminal_name(production.head), body)
}
