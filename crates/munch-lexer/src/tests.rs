use expect_test::expect;

use super::*;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestKind {
    IF_KW,
    PLUS_EQ,
    PLUS,
    EQ,
    NUMBER,
    STRING,
    NAME,
    WHITESPACE,
    UNKNOWN,
}

use TestKind::*;

fn lexer() -> Lexer<TestKind> {
    Lexer::new()
        .matchers([
            Matcher::keyword(IF_KW, "if", CharSet::IDENTIFIER),
            Matcher::symbol(PLUS_EQ, "+="),
            Matcher::symbol(PLUS, "+"),
            Matcher::symbol(EQ, "="),
            Matcher::run(NUMBER, CharSet::DIGITS),
            Matcher::quoted(STRING, '"'),
            Matcher::run(NAME, CharSet::IDENTIFIER),
            Matcher::run(WHITESPACE, CharSet::WHITESPACE),
        ])
        .matcher(Matcher::unknown(UNKNOWN))
        .ignore(WHITESPACE)
}

fn kinds(text: &str) -> Vec<TestKind> {
    lexer().tokenize(text).unwrap().iter().map(|token| token.kind).collect()
}

fn dump(tokens: &[Token<'_, TestKind>]) -> String {
    tokens.iter().map(|token| format!("{:?}@{:?} {:?}\n", token.kind, token.range, token.text)).collect()
}

#[test]
fn tokenize_mixed_input() {
    let tokens = lexer().tokenize(r#"if ifx += 12+x "a\"b" @"#).unwrap();

    expect![[r#"
        IF_KW@0..2 "if"
        NAME@3..6 "ifx"
        PLUS_EQ@7..9 "+="
        NUMBER@10..12 "12"
        PLUS@12..13 "+"
        NAME@13..14 "x"
        STRING@15..21 "\"a\\\"b\""
        UNKNOWN@22..23 "@"
    "#]]
    .assert_eq(&dump(&tokens));
}

#[test]
fn keyword_boundaries() {
    let inputs = vec![
        ("if", vec![IF_KW]),
        ("if(", vec![IF_KW, UNKNOWN]),
        ("if_", vec![NAME]),
        ("iff", vec![NAME]),
        ("if if", vec![IF_KW, IF_KW]),
    ];

    for (input, expected) in inputs {
        assert_eq!(kinds(input), expected, "Input: '{input}'");
    }
}

#[test]
fn maximal_munch() {
    for len in 1..20 {
        let digits = "7".repeat(len);
        let input = format!("{digits}x");
        let mut cursor = Cursor::new(&input);

        let token = Matcher::run(NUMBER, CharSet::DIGITS).apply(&mut cursor).unwrap();
        assert_eq!(token.text, digits);
        assert_eq!(cursor.rest(), "x");
    }
}

#[test]
fn failed_matchers_leave_cursor_alone() {
    let cases = vec![
        (Matcher::run(NUMBER, CharSet::DIGITS), "x1"),
        (Matcher::symbol(PLUS_EQ, "+="), "+x"),
        (Matcher::keyword(IF_KW, "if", CharSet::IDENTIFIER), "ifx"),
        (Matcher::quoted(STRING, '"'), "'a'"),
        (Matcher::unknown(UNKNOWN), ""),
    ];

    for (matcher, input) in cases {
        let mut cursor = Cursor::new(input);
        assert_eq!(matcher.apply(&mut cursor), None, "Input: '{input}'");
        assert_eq!(cursor.offset(), TextSize::new(0), "Input: '{input}'");
    }
}

#[test]
fn empty_literals_never_match() {
    let mut cursor = Cursor::new("+");
    assert_eq!(Matcher::symbol(PLUS, "").apply(&mut cursor), None);
    assert_eq!(Matcher::run(NAME, CharSet::EMPTY).apply(&mut cursor), None);
    assert!(!cursor.is_eof());
}

#[test]
fn unterminated_quote_runs_to_end_of_input() {
    let tokens = lexer().tokenize(r#"x "abc"#).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, STRING);
    assert_eq!(tokens[1].text, r#""abc"#);
}

#[test]
fn registration_order_decides_overlaps() {
    assert_eq!(kinds("+="), vec![PLUS_EQ]);

    let shadowed = Lexer::new()
        .matcher(Matcher::symbol(PLUS, "+"))
        .matcher(Matcher::symbol(PLUS_EQ, "+="))
        .matcher(Matcher::symbol(EQ, "="));
    let kinds = shadowed.tokenize("+=").unwrap().iter().map(|t| t.kind).collect::<Vec<_>>();
    assert_eq!(kinds, vec![PLUS, EQ]);
}

#[test]
fn ignored_kind_is_optional() {
    let lexer = Lexer::new()
        .matcher(Matcher::run(NAME, CharSet::IDENTIFIER))
        .matcher(Matcher::run(WHITESPACE, CharSet::WHITESPACE));
    let tokens = lexer.tokenize("a b").unwrap();
    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![NAME, WHITESPACE, NAME]);
}

#[test]
fn unknown_consumes_one_character() {
    let tokens = lexer().tokenize("é").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, UNKNOWN);
    assert_eq!(tokens[0].range, TextRange::new(0.into(), 2.into()));
}

#[test]
fn stalls_without_catch_all() {
    let lexer = Lexer::new().matcher(Matcher::run(NUMBER, CharSet::DIGITS));
    assert_eq!(lexer.tokenize("12a"), Err(LexError::Stalled { offset: 2 }));
    assert_eq!(lexer.tokenize(""), Ok(Vec::new()));
}
