use super::*;
use chain_ir::DelimiterError;
use chain_lexer::lex_fragment;
use pretty_assertions::assert_eq;

fn links(tokens: &TokenBuffer) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| is_chain_link(t))
        .map(|(i, _)| i)
        .collect()
}

/// Resolve `expected_indent` for the `nth` link of `source`.
fn expected(source: &str, nth: usize) -> String {
    let tokens = lex_fragment(source);
    let config = IndentConfig::default();
    let link = links(&tokens)[nth];
    Resolver::new(&tokens, &config).expected_indent(link).unwrap()
}

// === Anchoring ===

#[test]
fn no_line_start_defaults_to_one_level() {
    assert_eq!(expected("$q->a()\n->b()", 1), "    ");
}

#[test]
fn continuation_of_receiver_line_adds_level() {
    assert_eq!(expected("\n  $q->a()\n->b()", 1), "      ");
}

#[test]
fn argument_lists_are_skipped_when_anchoring() {
    let source = "\n$q->a(\n        1\n)\n->b()";
    assert_eq!(expected(source, 1), "    ");
}

#[test]
fn consecutive_links_share_a_level() {
    let tokens = lex_fragment("\n->a(1)\n->b()");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    // ws, ->, a, (, 1, ), ws, ->
    assert!(!resolver.requires_extra_level(0, 5).unwrap());
    assert_eq!(resolver.anchored_indent(7).unwrap(), "");
}

#[test]
fn link_line_with_open_arguments_adds_level() {
    let tokens = lex_fragment("\n->a($x\n->d())");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    // ws, ->, a, (, $x, ws, ->
    assert!(resolver.requires_extra_level(0, 4).unwrap());
    assert_eq!(resolver.anchored_indent(6).unwrap(), "    ");
}

#[test]
fn nested_chain_in_arguments() {
    let source = "\n$q->where(\n    $x->c()\n->d())";
    assert_eq!(expected(source, 2), "        ");
}

#[test]
fn unbalanced_close_paren_is_an_error() {
    let tokens = lex_fragment("$q)\n->b()");
    let config = IndentConfig::default();
    let err = Resolver::new(&tokens, &config)
        .anchored_indent(3)
        .unwrap_err();
    assert_eq!(err, FixError::Delimiter(DelimiterError::Unopened { index: 1 }));
}

// === Markers ===

#[test]
fn open_marker_indents_next_link() {
    let source = "\n$q->a()\n    ->andClause()\n->b()";
    assert_eq!(expected(source, 2), "        ");
}

#[test]
fn close_marker_returns_one_level() {
    let source = "\n$q->a()\n    ->andClause()\n        ->b()\n->endClause()";
    assert_eq!(expected(source, 3), "    ");
}

#[test]
fn close_marker_after_bare_variable_keeps_indent() {
    assert_eq!(expected("\n$q\n->endClause()", 0), "    ");
}

#[test]
fn close_marker_strip_needs_matching_suffix() {
    let tokens = lex_fragment("$q->a()\n->endClause()");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    let link = links(&tokens)[1];
    assert_eq!(resolver.apply_markers(link, "  ".to_string()).unwrap(), "  ");
    assert_eq!(resolver.apply_markers(link, "      ".to_string()).unwrap(), "  ");
}

#[test]
fn open_marker_wins_over_close_marker() {
    let tokens = lex_fragment("$q->orClause()\n->endClause()");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    let link = links(&tokens)[1];
    assert_eq!(resolver.apply_markers(link, "    ".to_string()).unwrap(), "        ");
}

#[test]
fn comment_between_name_and_parens() {
    let tokens = lex_fragment("$q->andClause /* x */ ()\n->b()");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    let link = links(&tokens)[1];
    let name = resolver.previous_call_name(link).unwrap().unwrap();
    assert_eq!(tokens.at(name).text(), "andClause");
}

#[test]
fn previous_call_name_requires_call() {
    let tokens = lex_fragment("$q\n->b()");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    assert_eq!(resolver.previous_call_name(2).unwrap(), None);
}

#[test]
fn custom_marker_names() {
    let tokens = lex_fragment("$q->begin()\n->b()");
    let config = IndentConfig::default()
        .with_markers(crate::config::MarkerSet::new(["begin"], ["end"]));
    let link = links(&tokens)[1];
    let indent = Resolver::new(&tokens, &config).expected_indent(link).unwrap();
    assert_eq!(indent, "        ");
}

// === Chain marker detection ===

#[test]
fn marker_found_in_either_direction() {
    let tokens = lex_fragment("$q->a()->andClause()->b()");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    for link in links(&tokens) {
        assert!(resolver.chain_has_marker(link).unwrap(), "link {link}");
    }
}

#[test]
fn plain_chain_has_no_marker() {
    let tokens = lex_fragment("$q->a()->b(1)->c()");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    for link in links(&tokens) {
        assert!(!resolver.chain_has_marker(link).unwrap());
    }
}

#[test]
fn argument_chains_are_separate() {
    let tokens = lex_fragment("$q->where($x->a()->b())->andClause()");
    let config = IndentConfig::default();
    let resolver = Resolver::new(&tokens, &config);
    let all = links(&tokens);
    // ->where, ->a, ->b, ->andClause
    assert!(resolver.chain_has_marker(all[0]).unwrap());
    assert!(!resolver.chain_has_marker(all[1]).unwrap());
    assert!(!resolver.chain_has_marker(all[2]).unwrap());
    assert!(resolver.chain_has_marker(all[3]).unwrap());
}
