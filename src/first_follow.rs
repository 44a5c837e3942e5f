//! FIRST and FOLLOW set computation for context-free grammars (§4.4, §4.5).
//!
//! Both are fixed-point computations over the frozen (post-factoring,
//! post-recursion-removal) grammar. FIRST is computed first and FOLLOW
//! consumes it; neither mutates the grammar.

use crate::grammar::Grammar;
use crate::symbol::{NonTerminalId, Symbol};
use std::collections::{HashMap, HashSet};

/// FIRST(A) for every non-terminal A, keyed by id.
pub type FirstSets = HashMap<NonTerminalId, HashSet<Symbol>>;

/// FOLLOW(A) for every non-terminal A, keyed by id.
pub type FollowSets = HashMap<NonTerminalId, HashSet<Symbol>>;

/// Computes FIRST(gamma) for a symbol string, given already-settled (or
/// still-converging) FIRST sets for non-terminals.
///
/// Iterates prefix symbols, accumulating FIRST(Xi) \ {eps}, stopping at the
/// first Xi whose FIRST set lacks eps. If every symbol is nullable (or the
/// string is empty), eps is included in the result.
pub fn first_of_string(first_sets: &FirstSets, symbols: &[Symbol]) -> HashSet<Symbol> {
    let mut result = HashSet::new();
    let mut nullable_so_far = true;

    for symbol in symbols {
        if !nullable_so_far {
            break;
        }

        let first_of_symbol = first_of_single(first_sets, *symbol);
        for &s in &first_of_symbol {
            if !s.is_epsilon() {
                result.insert(s);
            }
        }
        nullable_so_far = first_of_symbol.contains(&Symbol::Epsilon);
    }

    if nullable_so_far {
        result.insert(Symbol::Epsilon);
    }

    result
}

fn first_of_single(first_sets: &FirstSets, symbol: Symbol) -> HashSet<Symbol> {
    match symbol {
        Symbol::Terminal(_) => HashSet::from([symbol]),
        Symbol::Epsilon => HashSet::from([Symbol::Epsilon]),
        Symbol::EndMarker => HashSet::from([Symbol::EndMarker]),
        // Unknown non-terminal reference (defensive, §4.4): contributes
        // nothing and is treated as non-nullable.
        Symbol::NonTerminal(id) => first_sets.get(&id).cloned().unwrap_or_default(),
    }
}

/// Computes FIRST(A) for every non-terminal A in the grammar by fixed-point
/// iteration. Terminates in at most `|non-terminals| * (|terminals| + 1)`
/// sweeps because each FIRST set is bounded and grows monotonically.
pub fn compute_first(grammar: &Grammar) -> FirstSets {
    let mut first_sets: FirstSets = grammar
        .non_terminals_in_definition_order()
        .map(|nt| (nt, HashSet::new()))
        .collect();

    let mut sweep = 0usize;
    loop {
        let mut changed = false;
        sweep += 1;

        for production in grammar.all_productions() {
            let rhs_first = first_of_string(&first_sets, &production.body);
            let entry = first_sets.get_mut(&production.head).unwrap();
            let before = entry.len();
            entry.extend(rhs_first);
            if entry.len() != before {
                changed = true;
            }
        }

        log::trace!("FIRST fixed-point sweep {sweep}, changed={changed}");
        if !changed {
            break;
        }
    }

    first_sets
}

/// Computes FOLLOW(A) for every non-terminal A in the grammar by fixed-point
/// iteration, seeding FOLLOW(start) with the end marker.
pub fn compute_follow(grammar: &Grammar, first_sets: &FirstSets) -> FollowSets {
    let mut follow_sets: FollowSets = grammar
        .non_terminals_in_definition_order()
        .map(|nt| (nt, HashSet::new()))
        .collect();

    follow_sets
        .get_mut(&grammar.start_symbol())
        .unwrap()
        .insert(Symbol::EndMarker);

    let productions: Vec<_> = grammar.all_productions().collect();

    let mut sweep = 0usize;
    loop {
        let mut changed = false;
        sweep += 1;

        for production in &productions {
            let lhs = production.head;
            let body = &production.body;

            for (i, symbol) in body.iter().enumerate() {
                let Symbol::NonTerminal(target) = symbol else {
                    continue;
                };

                let beta = &body[i + 1..];
                let first_beta = first_of_string(first_sets, beta);

                let mut additions: Vec<Symbol> = first_beta
                    .iter()
                    .copied()
                    .filter(|s| !s.is_epsilon())
                    .collect();

                if beta.is_empty() || first_beta.contains(&Symbol::Epsilon) {
                    additions.extend(follow_sets.get(&lhs).unwrap().iter().copied());
                }

                let entry = follow_sets.get_mut(target).unwrap();
                let before = entry.len();
                entry.extend(additions);
                if entry.len() != before {
                    changed = true;
                }
            }
        }

        log::trace!("FOLLOW fixed-point sweep {sweep}, changed={changed}");
        if !changed {
            break;
        }
    }

    follow_sets
}
