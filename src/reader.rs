//! Tokenises the textual grammar format (§6) into [`RawProduction`]s.
//!
//! This module owns line-oriented syntax only: comment stripping, `->`/`|`
//! splitting, whitespace tokenisation. It never decides whether a token
//! names a terminal or a non-terminal; that classification happens in
//! [`crate::grammar::Grammar::load`].

use crate::error::{GrammarError, Result};
use crate::grammar::RawProduction;

/// Parses the full text of a grammar file into a list of [`RawProduction`]s,
/// one per non-comment, non-blank line.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. Every other line must contain `->`; anything else is rejected
/// with the 1-based line number.
pub fn parse_grammar_text(text: &str) -> Result<Vec<RawProduction>> {
    let mut productions = Vec::new();

    for (offset, raw_line) in text.lines().enumerate() {
        let line = offset + 1;
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        productions.push(parse_line(line, trimmed)?);
    }

    Ok(productions)
}

fn parse_line(line: usize, text: &str) -> Result<RawProduction> {
    let Some((head_part, rhs_part)) = text.split_once("->") else {
        return Err(GrammarError::MalformedLine {
            line,
            text: text.to_string(),
        });
    };

    let head = head_part.trim();
    if head.is_empty() || head.split_whitespace().count() != 1 {
        return Err(GrammarError::MalformedLine {
            line,
            text: text.to_string(),
        });
    }

    let mut alternatives = Vec::new();
    for alt_text in rhs_part.split('|') {
        let tokens: Vec<String> = alt_text.split_whitespace().map(String::from).collect();
        if tokens.is_empty() {
            return Err(GrammarError::EmptyAlternative {
                line,
                head: head.to_string(),
            });
        }
        alternatives.push(tokens);
    }

    Ok(RawProduction {
        line,
        head: head.to_string(),
        alternatives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_classic_arithmetic_grammar() {
        let text = "E -> E + T | T\nT -> T * F | F\nF -> ( E ) | id\n";
        let productions = parse_grammar_text(text).unwrap();
        assert_eq!(productions.len(), 3);
        assert_eq!(productions[0].head, "E");
        assert_eq!(productions[0].alternatives.len(), 2);
        assert_eq!(
            productions[0].alternatives[0],
            vec!["E".to_string(), "+".to_string(), "T".to_string()]
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# a comment\n\nS -> a\n   \n# trailing\n";
        let productions = parse_grammar_text(text).unwrap();
        assert_eq!(productions.len(), 1);
        assert_eq!(productions[0].line, 3);
    }

    #[test]
    fn rejects_line_without_arrow() {
        let text = "S a\n";
        let err = parse_grammar_text(text).unwrap_err();
        assert!(matches!(err, GrammarError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn rejects_multi_token_head() {
        let text = "S T -> a\n";
        let err = parse_grammar_text(text).unwrap_err();
        assert!(matches!(err, GrammarError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn rejects_empty_alternative() {
        let text = "S -> a | \n";
        let err = parse_grammar_text(text).unwrap_err();
        assert!(matches!(err, GrammarError::EmptyAlternative { line: 1, .. }));
    }

    #[test]
    fn parses_eps_alternative() {
        let text = "A -> a | eps\n";
        let productions = parse_grammar_text(text).unwrap();
        assert_eq!(productions[0].alternatives[1], vec!["eps".to_string()]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let productions = parse_grammar_text("").unwrap();
        assert!(productions.is_empty());
    }
}
