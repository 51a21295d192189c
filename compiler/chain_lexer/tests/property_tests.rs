//! Property-based tests for the chain lexer.
//!
//! Whatever the input, the lexer must be lossless and must never produce an
//! empty token.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use chain_lexer::{lex, lex_fragment};
use proptest::prelude::*;

/// Source-like text: PHP punctuation, quotes, comment starters, tags, and
/// some non-ASCII, mixed with arbitrary strings.
fn source_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("<?php\n".to_string()),
        Just("?>\n".to_string()),
        Just("$q".to_string()),
        Just("->".to_string()),
        Just("?->".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("'".to_string()),
        Just("\"".to_string()),
        Just("\\".to_string()),
        Just("/*".to_string()),
        Just("*/".to_string()),
        Just("//".to_string()),
        Just("#".to_string()),
        Just("<<<EOT\n".to_string()),
        Just("EOT".to_string()),
        Just("\r\n".to_string()),
        Just("\n    ".to_string()),
        Just("é".to_string()),
        "[a-zA-Z0-9_ ;,.]{0,6}",
        any::<String>(),
    ];
    prop::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn lex_is_lossless(source in source_strategy()) {
        prop_assert_eq!(lex(&source).to_source(), source);
    }

    #[test]
    fn lex_fragment_is_lossless(source in source_strategy()) {
        prop_assert_eq!(lex_fragment(&source).to_source(), source);
    }

    #[test]
    fn tokens_are_never_empty(source in source_strategy()) {
        for token in lex_fragment(&source).iter() {
            prop_assert!(!token.text.is_empty());
        }
    }
}
