use super::*;
use chain_ir::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn lex_starts_in_html_mode() {
    let tokens = lex("$q->a();");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.at(0).kind, TokenKind::InlineHtml);
}

#[test]
fn lex_fragment_starts_in_code_mode() {
    let tokens = lex_fragment("$q->a();");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Variable,
            TokenKind::ObjectOperator,
            TokenKind::Ident,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn empty_source() {
    assert!(lex("").is_empty());
    assert!(lex_fragment("").is_empty());
}

#[test]
fn file_round_trips() {
    let source = "<html>\n<?php\n\n$q = $db\n    ->select('x') // pick\n    ->from(\"t\");\n?>\n</html>\n";
    assert_eq!(lex(source).to_source(), source);
}
