//! Direct left-recursion elimination (§4.3).
//!
//! For a non-terminal `A -> A a1 | A a2 | ... | b1 | b2 | ...` where no `bj`
//! itself starts with `A`, rewrites to `A -> b1 A' | b2 A' | ...` and
//! `A' -> a1 A' | a2 A' | ... | eps`. Indirect recursion (through another
//! non-terminal) is out of scope and left untouched.

use crate::grammar::Grammar;
use crate::symbol::{NonTerminalId, Symbol};

/// Removes direct left recursion from every non-terminal in the grammar, in
/// definition order. Non-terminals with no left-recursive alternative are
/// untouched; no `A'` is introduced for them.
pub fn remove_left_recursion(grammar: &mut Grammar) {
    let targets: Vec<NonTerminalId> = grammar.non_terminals_in_definition_order().collect();
    for nt in targets {
        remove_left_recursion_for(grammar, nt);
    }
}

fn remove_left_recursion_for(grammar: &mut Grammar, nt: NonTerminalId) {
    let alternatives = grammar.alternatives(nt).to_vec();

    let (recursive, non_recursive): (Vec<_>, Vec<_>) = alternatives
        .into_iter()
        .partition(|body| body[0] == Symbol::NonTerminal(nt));

    if recursive.is_empty() {
        return;
    }

    let base_name = grammar.non_terminal_name(nt).to_string();
    let fresh = grammar.fresh_non_terminal(&base_name);

    // A -> b1 A' | b2 A' | ... (language is empty if non_recursive is empty,
    // which the table builder will surface as a row with no entries).
    let rewritten_a: Vec<Vec<Symbol>> = non_recursive
        .into_iter()
        .map(|mut body| {
            if body == [Symbol::Epsilon] {
                body.clear();
            }
            body.push(Symbol::NonTerminal(fresh));
            body
        })
        .collect();
    grammar.set_alternatives(nt, rewritten_a);

    // A' -> a1 A' | a2 A' | ... | eps
    for body in recursive {
        let tail = &body[1..];
        let mut new_body = if tail.is_empty() {
            // `A -> A` alone: alpha is the empty string, but the degenerate
            // rewrite is `A' -> A'`, not `A' -> eps A'`.
            Vec::new()
        } else {
            tail.to_vec()
        };
        new_body.push(Symbol::NonTerminal(fresh));
        grammar.add_production(fresh, new_body);
    }
    grammar.add_production(fresh, Vec::new());
}
