//! Left factoring (§4.2): hoists a common first symbol shared by two or
//! more alternatives of a non-terminal into a fresh non-terminal.
//!
//! One pass visits each non-terminal once and performs at most one level of
//! factoring per non-terminal; iterating to a fixed point is the caller's
//! responsibility (see the idempotence test below, which does exactly
//! that).

use crate::grammar::Grammar;
use crate::symbol::{NonTerminalId, Symbol};

/// What to do with alternative `i` of the non-terminal being factored,
/// decided during the single left-to-right scan.
enum Action {
    /// Alternative was never grouped with another; keep it unchanged.
    Keep,
    /// Alternative was the group's representative; replace its body with
    /// `[x, fresh]`.
    Replace(Vec<Symbol>),
    /// Alternative was consumed into a group led by some other index;
    /// drop it from this non-terminal (its suffix lives on `fresh` now).
    Drop,
}

/// Applies one level of left factoring to every non-terminal in the
/// grammar, in definition order.
pub fn left_factor(grammar: &mut Grammar) {
    let targets: Vec<NonTerminalId> = grammar.non_terminals_in_definition_order().collect();
    for nt in targets {
        left_factor_non_terminal(grammar, nt);
    }
}

fn left_factor_non_terminal(grammar: &mut Grammar, nt: NonTerminalId) {
    let alternatives = grammar.alternatives(nt).to_vec();
    if alternatives.len() < 2 {
        return;
    }

    let mut processed = vec![false; alternatives.len()];
    let mut actions: Vec<Action> = (0..alternatives.len()).map(|_| Action::Keep).collect();
    let mut fresh_productions: Vec<(NonTerminalId, Vec<Symbol>)> = Vec::new();

    for i in 0..alternatives.len() {
        if processed[i] {
            continue;
        }
        let x = alternatives[i][0];

        let group: Vec<usize> = (i..alternatives.len())
            .filter(|&j| !processed[j] && alternatives[j][0] == x)
            .collect();

        if group.len() == 1 {
            processed[i] = true;
            continue;
        }

        let base_name = grammar.non_terminal_name(nt).to_string();
        let fresh = grammar.fresh_non_terminal(&base_name);

        for &j in &group {
            let suffix = if alternatives[j].len() > 1 {
                alternatives[j][1..].to_vec()
            } else {
                vec![Symbol::Epsilon]
            };
            fresh_productions.push((fresh, suffix));
            processed[j] = true;
            if j != i {
                actions[j] = Action::Drop;
            }
        }

        actions[i] = Action::Replace(vec![x, Symbol::NonTerminal(fresh)]);
    }

    let mut rebuilt = Vec::new();
    for (i, action) in actions.into_iter().enumerate() {
        match action {
            Action::Keep => rebuilt.push(alternatives[i].clone()),
            Action::Replace(body) => rebuilt.push(body),
            Action::Drop => {}
        }
    }
    grammar.set_alternatives(nt, rebuilt);

    for (fresh, body) in fresh_productions {
        grammar.add_production(fresh, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Grammar, RawProduction};

    fn load(lines: &[(&str, &[&[&str]])]) -> Grammar {
        let productions = lines
            .iter()
            .enumerate()
            .map(|(i, (head, alts))| RawProduction {
                line: i + 1,
                head: head.to_string(),
                alternatives: alts
                    .iter()
                    .map(|alt| alt.iter().map(|s| s.to_string()).collect())
                    .collect(),
            })
            .collect::<Vec<_>>();
        Grammar::load(&productions).unwrap()
    }

    #[test]
    fn factors_two_alternatives_sharing_a_prefix() {
        // S -> a b | a c
        let mut grammar = load(&[("S", &[&["a", "b"], &["a", "c"]])]);
        left_factor(&mut grammar);

        let s = grammar.find_non_terminal("S").unwrap();
        assert_eq!(grammar.alternatives(s).len(), 1);
        let sp_name = "S_prime";
        let sp = grammar.find_non_terminal(sp_name).unwrap();
        assert_eq!(grammar.alternatives(s)[0][1], Symbol::NonTerminal(sp));

        let mut suffixes = grammar.alternatives(sp).to_vec();
        suffixes.sort_by_key(|s| grammar.symbol_name(s[0]));
        let b = Symbol::Terminal(grammar.find_terminal("b").unwrap());
        let c = Symbol::Terminal(grammar.find_terminal("c").unwrap());
        assert_eq!(suffixes, vec![vec![b], vec![c]]);
    }

    #[test]
    fn empty_suffix_becomes_epsilon() {
        // S -> a | a b
        let mut grammar = load(&[("S", &[&["a"], &["a", "b"]])]);
        left_factor(&mut grammar);

        let sp = grammar.find_non_terminal("S_prime").unwrap();
        let alts = grammar.alternatives(sp);
        assert!(alts.iter().any(|a| a == &[Symbol::Epsilon]));
    }

    #[test]
    fn ungrouped_singleton_is_untouched() {
        // S -> a b | c
        let mut grammar = load(&[("S", &[&["a", "b"], &["c"]])]);
        left_factor(&mut grammar);
        let s = grammar.find_non_terminal("S").unwrap();
        // no common prefix shared by two alternatives -> nothing changes
        assert_eq!(grammar.alternatives(s).len(), 2);
        assert!(grammar.find_non_terminal("S_prime").is_none());
    }

    #[test]
    fn fewer_than_two_alternatives_is_a_no_op() {
        let mut grammar = load(&[("S", &[&["a"]])]);
        left_factor(&mut grammar);
        let s = grammar.find_non_terminal("S").unwrap();
        assert_eq!(grammar.alternatives(s).len(), 1);
    }

    #[test]
    fn epsilon_starting_alternatives_group_together() {
        // S -> eps | eps a
        let mut grammar = load(&[("S", &[&["eps"], &["eps", "a"]])]);
        left_factor(&mut grammar);
        let s = grammar.find_non_terminal("S").unwrap();
        assert_eq!(grammar.alternatives(s).len(), 1);
        assert_eq!(grammar.alternatives(s)[0][0], Symbol::Epsilon);
    }

    #[test]
    fn factoring_twice_is_idempotent_up_to_fresh_name_choice() {
        let mut grammar = load(&[("S", &[&["a", "b"], &["a", "c"]])]);
        left_factor(&mut grammar);
        let before = grammar.alternatives(grammar.find_non_terminal("S").unwrap()).to_vec();
        left_factor(&mut grammar);
        let after = grammar.alternatives(grammar.find_non_terminal("S").unwrap()).to_vec();
        assert_eq!(before, after);
    }
}
