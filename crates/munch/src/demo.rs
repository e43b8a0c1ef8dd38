//! A small C-like language of function declarations and expressions.

use munch_lexer::{CharSet, Lexer, Matcher};
use munch_parse::{Grammar, Rule, TemplateId, node, token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    FUNC_KW,
    CONST_KW,
    VAR_KW,
    STATIC_KW,
    IF_KW,
    FOR_KW,
    STRUCT_KW,

    COLON2,
    L_PAREN,
    R_PAREN,
    L_BRACE,
    R_BRACE,
    L_BRACKET,
    R_BRACKET,
    COLON,
    SEMICOLON,
    COMMA,
    PLUS_EQ,
    MINUS_EQ,
    STAR_EQ,
    SLASH_EQ,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    NEQ,
    EQ2,
    LTEQ,
    GTEQ,
    EQ,
    LT,
    GT,

    NUMBER,
    TEXT,
    NAME,
    WHITESPACE,
    UNKNOWN,

    PAGE,
    FUNC_IMPL,
    FUNC_DECL,
    FUNC_ARGS_BLOCK,
    FUNC_ARGS,
    FUNC_BLOCK,
    EXPR_BLOCK,
    EXPR,
    ASSIGN_EXPR,
    SUB_PRIMARY,
    PLUS_EXPR,
    MINUS_EXPR,
    PRIMARY,
    MUL_EXPR,
    DIV_EXPR,
    FUNC_CALL,
    LITERAL,
    IDENT,
}

use SyntaxKind::*;

const KEYWORDS: [(SyntaxKind, &str); 7] = [
    (FUNC_KW, "func"),
    (CONST_KW, "const"),
    (VAR_KW, "var"),
    (STATIC_KW, "static"),
    (IF_KW, "if"),
    (FOR_KW, "for"),
    (STRUCT_KW, "struct"),
];

// Longer symbols come before their prefixes.
const SYMBOLS: [(SyntaxKind, &str); 25] = [
    (COLON2, "::"),
    (L_PAREN, "("),
    (R_PAREN, ")"),
    (L_BRACE, "{"),
    (R_BRACE, "}"),
    (L_BRACKET, "["),
    (R_BRACKET, "]"),
    (COLON, ":"),
    (SEMICOLON, ";"),
    (COMMA, ","),
    (PLUS_EQ, "+="),
    (MINUS_EQ, "-="),
    (STAR_EQ, "*="),
    (SLASH_EQ, "/="),
    (PLUS, "+"),
    (MINUS, "-"),
    (STAR, "*"),
    (SLASH, "/"),
    (NEQ, "!="),
    (EQ2, "=="),
    (LTEQ, "<="),
    (GTEQ, ">="),
    (EQ, "="),
    (LT, "<"),
    (GT, ">"),
];

pub fn lexer() -> Lexer<SyntaxKind> {
    Lexer::new()
        .matchers(
            KEYWORDS.into_iter().map(|(kind, word)| Matcher::keyword(kind, word, CharSet::IDENTIFIER)),
        )
        .matchers(SYMBOLS.into_iter().map(|(kind, word)| Matcher::symbol(kind, word)))
        .matcher(Matcher::run(NUMBER, CharSet::DIGITS))
        .matcher(Matcher::quoted(TEXT, '"'))
        .matcher(Matcher::run(NAME, CharSet::IDENTIFIER))
        .matcher(Matcher::run(WHITESPACE, CharSet::WHITESPACE))
        .matcher(Matcher::unknown(UNKNOWN))
        .ignore(WHITESPACE)
}

/// The grammar together with the template a whole file is parsed as.
#[derive(Debug)]
pub struct Language {
    pub grammar: Grammar<SyntaxKind, SyntaxKind>,
    pub page: TemplateId,
}

pub fn language() -> Language {
    let mut grammar: Grammar<SyntaxKind, SyntaxKind> = Grammar::new();

    let page = grammar.template(PAGE);
    let func_impl = grammar.template(FUNC_IMPL);
    let func_decl = grammar.template(FUNC_DECL);
    let func_args_block = grammar.template(FUNC_ARGS_BLOCK);
    let func_args = grammar.template(FUNC_ARGS);
    let func_block = grammar.template(FUNC_BLOCK);
    let expr_block = grammar.template(EXPR_BLOCK);
    let expr = grammar.template(EXPR);
    let assign = grammar.template(ASSIGN_EXPR);
    let sub_primary = grammar.template(SUB_PRIMARY);
    let plus = grammar.template(PLUS_EXPR);
    let minus = grammar.template(MINUS_EXPR);
    let primary = grammar.template(PRIMARY);
    let mul = grammar.template(MUL_EXPR);
    let div = grammar.template(DIV_EXPR);
    let func_call = grammar.template(FUNC_CALL);
    let literal = grammar.template(LITERAL);
    let ident = grammar.template(IDENT);

    grammar
        .alternative(
            page,
            Rule::sequence(
                func_impl,
                [token(FUNC_KW), token(NAME), node(func_args_block), node(func_block)],
            ),
        )
        .alternative(
            page,
            Rule::sequence(
                func_decl,
                [token(FUNC_KW), token(NAME), node(func_args_block), token(SEMICOLON)],
            ),
        );

    grammar.alternative(func_args_block, Rule::bracket(L_PAREN, func_args, R_PAREN));
    grammar.alternative(func_args, Rule::slice(expr, COMMA));
    grammar.alternative(func_block, Rule::bracket(L_BRACE, expr_block, R_BRACE));

    grammar
        .alternative(expr_block, Rule::bracket(L_BRACE, expr_block, R_BRACE))
        .alternative(expr_block, Rule::until(expr, SEMICOLON));

    grammar
        .alternative(expr, Rule::binary_operator(assign, expr, EQ, expr))
        .alternative(expr, Rule::sequence(sub_primary, [node(sub_primary)]));

    grammar
        .alternative(sub_primary, Rule::binary_operator(plus, sub_primary, PLUS, sub_primary))
        .alternative(sub_primary, Rule::binary_operator(minus, sub_primary, MINUS, sub_primary))
        .alternative(sub_primary, Rule::sequence(primary, [node(primary)]));

    grammar
        .alternative(primary, Rule::binary_operator(mul, primary, STAR, primary))
        .alternative(primary, Rule::binary_operator(div, primary, SLASH, primary))
        .alternative(primary, Rule::bracket(L_PAREN, expr, R_PAREN))
        .alternative(primary, Rule::terminal(literal, [NUMBER]))
        .alternative(primary, Rule::terminal(literal, [TEXT]))
        .alternative(primary, Rule::sequence(func_call, [token(NAME), node(func_args_block)]))
        .alternative(primary, Rule::terminal(ident, [NAME]));

    Language { grammar, page }
}
