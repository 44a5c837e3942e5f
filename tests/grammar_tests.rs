//! Integration tests for the grammar store, driven through the textual
//! reader the same way the CLI does.

use ll1gen::reader::parse_grammar_text;
use ll1gen::symbol::Symbol;
use ll1gen::{Grammar, GrammarError};

fn load(text: &str) -> Grammar {
    let raw = parse_grammar_text(text).unwrap();
    Grammar::load(&raw).unwrap()
}

#[test]
fn parses_simple_grammar() {
    let grammar = load("S -> A B\nA -> a\n");
    assert_eq!(grammar.all_productions().count(), 2);
    assert!(grammar.find_non_terminal("S").is_some());
    assert!(grammar.find_terminal("a").is_some());
}

#[test]
fn parses_pipe_separated_alternatives() {
    let grammar = load("S -> a | b | c\n");
    let s = grammar.find_non_terminal("S").unwrap();
    assert_eq!(grammar.alternatives(s).len(), 3);
}

#[test]
fn empty_grammar_is_an_error() {
    let raw = parse_grammar_text("").unwrap();
    assert!(matches!(Grammar::load(&raw), Err(GrammarError::EmptyInput)));
}

#[test]
fn first_non_terminal_defined_is_the_start_symbol() {
    let grammar = load("S -> a\n");
    assert_eq!(
        grammar.start_symbol(),
        grammar.find_non_terminal("S").unwrap()
    );
}

#[test]
fn eps_alternative_is_normalised_to_a_single_epsilon_symbol() {
    let grammar = load("S -> eps\n");
    let s = grammar.find_non_terminal("S").unwrap();
    assert_eq!(grammar.alternatives(s), &[vec![Symbol::Epsilon]]);
}

#[test]
fn classic_arithmetic_grammar_has_expected_shape() {
    let grammar = load("E -> E + T | T\nT -> T * F | F\nF -> ( E ) | id\n");
    assert_eq!(grammar.all_productions().count(), 6);
    for terminal in ["+", "*", "(", ")", "id"] {
        assert!(
            grammar.find_terminal(terminal).is_some(),
            "missing terminal {terminal}"
        );
    }
}

#[test]
fn reserved_dollar_token_is_rejected() {
    let raw = parse_grammar_text("S -> a $\n").unwrap();
    assert!(matches!(
        Grammar::load(&raw),
        Err(GrammarError::ReservedEndMarkerUsed { .. })
    ));
}
