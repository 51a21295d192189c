use super::*;
use chain_ir::DelimiterError;
use chain_lexer::{lex, lex_fragment};
use pretty_assertions::assert_eq;

fn fix_with(source: &str, config: &IndentConfig) -> String {
    let mut tokens = lex_fragment(source);
    fix_tokens(&mut tokens, config).unwrap();
    tokens.to_source()
}

fn fix(source: &str) -> String {
    fix_with(source, &IndentConfig::default())
}

#[test]
fn marked_chain_is_split_and_nested() {
    let mut tokens = lex("<?php\n$q->andWhere(1)->andClause()->andWhere(2)->endClause();\n");
    let summary = fix_tokens(&mut tokens, &IndentConfig::default()).unwrap();
    assert_eq!(
        tokens.to_source(),
        "<?php\n$q->andWhere(1)\n    ->andClause()\n        ->andWhere(2)\n    ->endClause();\n"
    );
    assert_eq!(
        summary,
        RewriteSummary {
            calls: 4,
            reindented: 3,
            breaks_inserted: 3,
        }
    );
}

#[test]
fn plain_single_line_chain_is_untouched() {
    let mut tokens = lex_fragment("$q->a()->b();");
    let summary = fix_tokens(&mut tokens, &IndentConfig::default()).unwrap();
    assert_eq!(tokens.to_source(), "$q->a()->b();");
    assert_eq!(summary.calls, 2);
    assert!(!summary.changed());
}

#[test]
fn misindented_chain_is_aligned() {
    assert_eq!(
        fix("$q\n->a()\n        ->b();"),
        "$q\n    ->a()\n    ->b();"
    );
}

#[test]
fn blank_lines_before_link_collapse() {
    assert_eq!(fix("$q\n\n->a();"), "$q\n    ->a();");
}

#[test]
fn property_access_is_skipped() {
    assert_eq!(fix("$q\n->prop;"), "$q\n->prop;");
}

#[test]
fn nullsafe_link() {
    assert_eq!(fix("$q\n?->a();"), "$q\n    ?->a();");
}

#[test]
fn comment_before_link_forces_break() {
    assert_eq!(
        fix("$q->a()\n/* c */ ->b();"),
        "$q->a()\n/* c */\n    ->b();"
    );
}

#[test]
fn trailing_comment_does_not_force_break() {
    let source = "$q->a() // c\n    ->b();";
    assert_eq!(fix(source), source);
}

#[test]
fn arguments_move_with_their_call() {
    assert_eq!(
        fix("$q\n->where(\n    $x,\n      $y\n);"),
        "$q\n    ->where(\n        $x,\n          $y\n    );"
    );
}

#[test]
fn split_call_moves_its_arguments() {
    let expected = "$q->a()\n    ->andClause()\n        ->where(\n            1\n        )\n    ->endClause();";
    assert_eq!(
        fix("$q->a()->andClause()->where(\n    1\n)->endClause();"),
        expected
    );
    assert_eq!(
        fix("$q->a()\n->andClause()\n->where(\n    1\n)\n->endClause();"),
        expected
    );
}

#[test]
fn split_call_moves_its_arguments_in_indented_body() {
    let expected = "function f() {\n    $q->a()\n        ->andClause()\n            ->where(\n                1\n            )\n        ->endClause();\n}";
    assert_eq!(
        fix("function f() {\n    $q->a()->andClause()->where(\n        1\n    )->endClause();\n}"),
        expected
    );
    assert_eq!(
        fix("function f() {\n    $q->a()\n    ->andClause()\n    ->where(\n        1\n    )\n    ->endClause();\n}"),
        expected
    );
}

#[test]
fn marked_breaks_can_be_disabled() {
    let config = IndentConfig::default().with_break_marked_chains(false);
    let source = "$q->a()->andClause()->b()->endClause();";
    assert_eq!(fix_with(source, &config), source);
}

#[test]
fn configured_line_ending_and_unit() {
    let config = IndentConfig::default()
        .with_indent("\t")
        .with_line_ending("\r\n");
    assert_eq!(
        fix_with("$q->a()->orClause()->b();", &config),
        "$q->a()\r\n\t->orClause()\r\n\t\t->b();"
    );
}

#[test]
fn link_right_after_open_tag() {
    let mut tokens = lex("<?php\n  ->a();");
    fix_tokens(&mut tokens, &IndentConfig::default()).unwrap();
    assert_eq!(tokens.to_source(), "<?php\n    ->a();");
}

#[test]
fn unclosed_arguments_abort() {
    let mut tokens = lex_fragment("$q\n->a(1;");
    let err = fix_tokens(&mut tokens, &IndentConfig::default()).unwrap_err();
    assert_eq!(err, FixError::Delimiter(DelimiterError::Unclosed { index: 4 }));
}

#[test]
fn second_pass_is_a_no_op() {
    let once = fix("$q->andWhere(1)->andClause()->andWhere(2)->orClause()->x()->endClause()->endClause();");
    let mut tokens = lex_fragment(&once);
    let summary = fix_tokens(&mut tokens, &IndentConfig::default()).unwrap();
    assert!(!summary.changed());
    assert_eq!(tokens.to_source(), once);
}
