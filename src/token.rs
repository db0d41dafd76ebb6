//! Tokenizer
//!
//! Splits source text into identifiers, the structural single characters
//! `~` `(` `)`, and maximal runs of symbol characters (which is what turns
//! `->`, `<->`, `==>` and the Unicode glyphs into single tokens).
//! Whitespace is discarded. Runs that match nothing known are still emitted
//! as opaque tokens so the parser, not the tokenizer, reports the precise
//! syntax error — tokenization itself never fails.

use regex::Regex;
use std::sync::OnceLock;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        Regex::new(r"[A-Za-z]\w*|[~()]|[^~()\w\s]+").expect("token pattern is valid")
    })
}

/// Split source text into a flat token sequence
pub fn tokenize(source: &str) -> Vec<String> {
    token_pattern()
        .find_iter(source)
        .map(|token| token.as_str().to_string())
        .collect()
}

/// A variable identifier: a letter followed by letters, digits, or
/// underscores
pub(crate) fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<String> {
        tokenize(source)
    }

    #[test]
    fn splits_identifiers_and_symbols() {
        assert_eq!(tokens("p ^ q"), ["p", "^", "q"]);
        assert_eq!(tokens("p->q"), ["p", "->", "q"]);
        assert_eq!(tokens("p<->q"), ["p", "<->", "q"]);
        assert_eq!(tokens("~(p v q)"), ["~", "(", "p", "v", "q", ")"]);
        assert_eq!(tokens("p ^~q"), ["p", "^", "~", "q"]);
    }

    #[test]
    fn multi_character_aliases_stay_whole() {
        assert_eq!(tokens("p ==> q"), ["p", "==>", "q"]);
        assert_eq!(tokens("p <=> q"), ["p", "<=>", "q"]);
        assert_eq!(tokens("p NAND q"), ["p", "NAND", "q"]);
    }

    #[test]
    fn identifiers_can_carry_digits_and_underscores() {
        assert_eq!(tokens("p1 ^ var_two"), ["p1", "^", "var_two"]);
    }

    #[test]
    fn whitespace_is_discarded() {
        assert_eq!(tokens("  p\t^\n q "), ["p", "^", "q"]);
        assert!(tokens("   ").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn unknown_runs_become_opaque_tokens() {
        // the parser turns these into syntax errors; tokenization never fails
        assert_eq!(tokens("p @# q"), ["p", "@#", "q"]);
        assert_eq!(tokens("p ^& q"), ["p", "^&", "q"]);
    }

    #[test]
    fn identifier_check() {
        assert!(is_identifier("p"));
        assert!(is_identifier("p1_x"));
        assert!(is_identifier("AND"));
        assert!(!is_identifier("1p"));
        assert!(!is_identifier("_p"));
        assert!(!is_identifier("->"));
        assert!(!is_identifier(""));
    }
}
