//! Human-readable rendering of grammars, FIRST/FOLLOW sets, and parse tables
//! (§4.8). Used only by the CLI; the core never calls into this module.

use crate::first_follow::{FirstSets, FollowSets};
use crate::grammar::Grammar;
use crate::symbol::Symbol;
use crate::table::{Conflict, ParseTable};
use std::fmt::Write as _;

/// Renders every production of `grammar`, one alternative-group per line,
/// in definition order.
pub fn render_grammar(grammar: &Grammar) -> String {
    let mut out = String::new();
    for nt in grammar.non_terminals_in_definition_order() {
        let bodies: Vec<String> = grammar
            .alternatives(nt)
            .iter()
            .map(|body| render_body(grammar, body))
            .collect();
        let _ = writeln!(
            out,
            "{} -> {}",
            grammar.non_terminal_name(nt),
            bodies.join(" | ")
        );
    }
    out
}

fn render_body(grammar: &Grammar, body: &[Symbol]) -> String {
    body.iter()
        .map(|s| grammar.symbol_name(*s))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders `FIRST(A) = { ... }` for every non-terminal A, in definition
/// order, with set members sorted for stable output.
pub fn render_first_sets(grammar: &Grammar, first_sets: &FirstSets) -> String {
    render_sets(grammar, first_sets, "FIRST")
}

/// Renders `FOLLOW(A) = { ... }` for every non-terminal A, in definition
/// order, with set members sorted for stable output.
pub fn render_follow_sets(grammar: &Grammar, follow_sets: &FollowSets) -> String {
    render_sets(grammar, follow_sets, "FOLLOW")
}

fn render_sets(
    grammar: &Grammar,
    sets: &std::collections::HashMap<crate::symbol::NonTerminalId, std::collections::HashSet<Symbol>>,
    label: &str,
) -> String {
    let mut out = String::new();
    for nt in grammar.non_terminals_in_definition_order() {
        let mut names: Vec<String> = sets
            .get(&nt)
            .map(|set| set.iter().map(|s| grammar.symbol_name(*s)).collect())
            .unwrap_or_default();
        names.sort();
        let _ = writeln!(
            out,
            "{label}({}) = {{ {} }}",
            grammar.non_terminal_name(nt),
            names.join(", ")
        );
    }
    out
}

/// Renders the parse table as one `M[A, a] = production` line per populated
/// cell, sorted by non-terminal then terminal name for stable output.
pub fn render_table(grammar: &Grammar, table: &ParseTable) -> String {
    let mut rows: Vec<(String, String, String)> = table
        .entries()
        .map(|((nt, terminal), production)| {
            (
                grammar.non_terminal_name(*nt).to_string(),
                grammar.symbol_name(*terminal),
                render_body_with_head(grammar, production),
            )
        })
        .collect();
    rows.sort();

    let mut out = String::new();
    for (nt, terminal, production) in rows {
        let _ = writeln!(out, "M[{nt}, {terminal}] = {production}");
    }
    out
}

fn render_body_with_head(grammar: &Grammar, production: &crate::grammar::Production) -> String {
    format!(
        "{} -> {}",
        grammar.non_terminal_name(production.head),
        render_body(grammar, &production.body)
    )
}

/// Renders the conflict list, one `conflict at M[A, a]: ... vs ...` line per
/// entry. Returns an empty string (not even a header) when there are none,
/// since an empty conflict list is the expected, unremarkable case.
pub fn render_conflicts(conflicts: &[Conflict]) -> String {
    let mut out = String::new();
    for conflict in conflicts {
        let _ = writeln!(
            out,
            "conflict at M[{}, {}]: {} vs {}",
            conflict.non_terminal, conflict.terminal, conflict.production_a, conflict.production_b
        );
    }
    out
}
