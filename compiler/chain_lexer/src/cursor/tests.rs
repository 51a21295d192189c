use super::*;

#[test]
fn current_and_peek() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek_at(2), 0);
}

#[test]
fn advance_stops_at_eof() {
    let mut cursor = Cursor::new("abc");
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn eat_while_and_slice() {
    let mut cursor = Cursor::new("   x");
    cursor.eat_while(|b| b == b' ');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.slice_from(0), "   ");
}

#[test]
fn starts_with_ignore_case() {
    let cursor = Cursor::new("<?PHP\n");
    assert!(cursor.starts_with_ignore_case("<?php"));
    assert!(!cursor.starts_with("<?php"));
    assert!(!Cursor::new("<?p").starts_with_ignore_case("<?php"));
}

#[test]
fn eat_until_str_found_and_missing() {
    let mut cursor = Cursor::new("abc */ d");
    assert!(cursor.eat_until_str("*/"));
    assert_eq!(cursor.pos(), 4);

    let mut cursor = Cursor::new("abc");
    assert!(!cursor.eat_until_str("*/"));
    assert!(cursor.is_eof());
}

#[test]
fn line_breaks() {
    let mut cursor = Cursor::new("ab\r\ncd");
    cursor.eat_until_line_break();
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.eat_line_break());
    assert_eq!(cursor.pos(), 4);
    assert!(!cursor.eat_line_break());
}

#[test]
fn line_comment_stops_at_close_tag() {
    let mut cursor = Cursor::new("// a ? b ?> rest");
    cursor.eat_line_comment_body();
    assert_eq!(cursor.slice_from(0), "// a ? b ");
}

#[test]
fn line_comment_stops_at_newline() {
    let mut cursor = Cursor::new("# hi\nnext");
    cursor.eat_line_comment_body();
    assert_eq!(cursor.slice_from(0), "# hi");
}

#[test]
fn quoted_with_escapes() {
    let mut cursor = Cursor::new(r#""a\"b" rest"#);
    cursor.advance();
    cursor.eat_quoted(b'"');
    assert_eq!(cursor.slice_from(0), r#""a\"b""#);
}

#[test]
fn unterminated_quote_runs_to_eof() {
    let mut cursor = Cursor::new("'abc");
    cursor.advance();
    cursor.eat_quoted(b'\'');
    assert!(cursor.is_eof());
}
