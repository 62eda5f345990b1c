// Integration tests for the Monkey lexer

use monkey::parser::lexer::Lexer;
use monkey::parser::token::{Token, TokenKind};

fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    lex(source).into_iter().map(|t| (t.kind, t.literal)).collect()
}

#[test]
fn test_single_character_tokens() {
    let kinds: Vec<TokenKind> = lex("=+(){},;").iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_equality_is_one_token() {
    let tokens = lex("==");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Eq);
    assert_eq!(tokens[0].literal, "==");
}

#[test]
fn test_bang_and_not_equal() {
    let tokens = lex("!=");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::NotEq);
    assert_eq!(tokens[0].literal, "!=");

    let tokens = lex("!");
    assert_eq!(tokens[0].kind, TokenKind::Bang);
    assert_eq!(tokens[0].literal, "!");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_keywords_are_not_prefix_matched() {
    assert_eq!(lex("let")[0].kind, TokenKind::Let);

    let tokens = lex("lettuce");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].literal, "lettuce");
}

#[test]
fn test_integer_run() {
    let tokens = lex("12345");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "12345");
}

#[test]
fn test_full_program() {
    let source = r#"
        let five = 5;
        let ten = 10;

        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);
        !-/*5;
        5 < 10 > 5;

        if (5 < 10) {
            return true;
        } else {
            return false;
        }

        10 == 10;
        10 != 9;
    "#;

    let expected: Vec<(TokenKind, &str)> = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Bang, "!"),
        (TokenKind::Minus, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Gt, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::LParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Eq, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEq, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    let actual = pairs(source);
    assert_eq!(actual.len(), expected.len());
    for (i, ((kind, literal), (want_kind, want_literal))) in
        actual.iter().zip(expected.iter()).enumerate()
    {
        assert_eq!(kind, want_kind, "token {} kind", i);
        assert_eq!(literal, want_literal, "token {} literal", i);
    }
}

#[test]
fn test_every_input_reaches_eof() {
    let inputs = [
        "",
        "   \t\r\n",
        "@#$%^&",
        "let x = 5",
        "a1b2c3",
        "ünïcödé ✓",
        "\0\0",
        "=!=!==",
    ];

    for input in inputs {
        let mut lexer = Lexer::new(input);
        let mut calls = 0;
        while lexer.next_token().kind != TokenKind::Eof {
            calls += 1;
            assert!(calls <= input.chars().count(), "no EOF for {:?}", input);
        }
        for _ in 0..3 {
            assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }
}

#[test]
fn test_iterator_matches_tokenize() {
    let source = "let a = b != c;";
    let collected: Vec<Token> = Lexer::new(source).collect();
    assert_eq!(collected, lex(source));
    assert_eq!(collected.last().map(|t| t.kind), Some(TokenKind::Eof));
}
