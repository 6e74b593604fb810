// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Token search tests over realistic token streams.

use cxxform_core::types::SourceLocation;
use cxxform_tokens::{find_token, find_tokens, Token, TokenKind, TokenLike, TokenPattern};

use cxxform_tokens::TokenKind::{Identifier as Ident, Keyword, Literal, Punctuation as Punct};

/// Tokens of:
///
/// ```text
/// CONCORE_ASSERT(q.empty());
/// auto t = concore::spawn([] { return 1; });
/// ```
fn statement_tokens() -> Vec<Token> {
    let raw: &[(TokenKind, &str)] = &[
        (Ident, "CONCORE_ASSERT"),
        (Punct, "("),
        (Ident, "q"),
        (Punct, "."),
        (Ident, "empty"),
        (Punct, "("),
        (Punct, ")"),
        (Punct, ")"),
        (Punct, ";"),
        (Keyword, "auto"),
        (Ident, "t"),
        (Punct, "="),
        (Ident, "concore"),
        (Punct, "::"),
        (Ident, "spawn"),
        (Punct, "("),
        (Punct, "["),
        (Punct, "]"),
        (Punct, "{"),
        (Keyword, "return"),
        (Literal, "1"),
        (Punct, ";"),
        (Punct, "}"),
        (Punct, ")"),
        (Punct, ";"),
    ];
    raw.iter()
        .enumerate()
        .map(|(i, (kind, text))| {
            Token::new(*kind, *text).at(SourceLocation::new("tasks.cpp", 1, i as u32 + 1))
        })
        .collect()
}

#[test]
fn find_token_examples() {
    let empty: Vec<Token> = Vec::new();
    assert_eq!(find_token(Ident, "x", &empty, 0), None);

    let tokens = [(Ident, "a"), (Ident, "x"), (Ident, "x")];
    assert_eq!(find_token(Ident, "x", &tokens, 2), Some(2));
}

#[test]
fn find_tokens_examples() {
    let tokens = [(Ident, "a"), (Ident, "a"), (Ident, "b")];
    assert_eq!(find_tokens(&[(Ident, "a"), (Ident, "b")], &tokens, 0), Some(1));
}

#[test]
fn short_remainder_is_not_found_for_every_start() {
    let tokens = statement_tokens();
    let pattern = [(Punct, "}"), (Punct, ")"), (Punct, ";")];
    for start in 0..tokens.len() + 2 {
        let remaining = tokens.len().saturating_sub(start);
        let found = find_tokens(&pattern, &tokens, start);
        if remaining < pattern.len() {
            assert_eq!(found, None, "start {}", start);
        }
    }
    assert_eq!(find_tokens(&pattern, &tokens, 0), Some(22));
}

#[test]
fn locate_macro_call_and_its_closing_paren() {
    let tokens = statement_tokens();
    let open = find_tokens(&[(Ident, "CONCORE_ASSERT"), (Punct, "(")], &tokens, 0).unwrap();
    assert_eq!(open, 0);

    // Walk to the matching ')' by counting parens after the macro name.
    let mut depth = 0;
    let mut close = None;
    for (i, token) in tokens.iter().enumerate().skip(open + 1) {
        match token.spelling() {
            "(" => depth += 1,
            ")" => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    assert_eq!(close, Some(7));
    assert_eq!(find_token(Punct, ";", &tokens, 7), Some(8));
}

#[test]
fn successive_searches_enumerate_all_occurrences() {
    let tokens = statement_tokens();
    let mut found = Vec::new();
    let mut start = 0;
    while let Some(i) = find_token(Punct, ";", &tokens, start) {
        found.push(i);
        start = i + 1;
    }
    assert_eq!(found, [8, 21, 24]);
}

#[test]
fn parsed_pattern_finds_qualified_call() {
    let tokens = statement_tokens();
    let pattern: TokenPattern = "ident:concore punct::: ident:spawn punct:(".parse().unwrap();
    let at = pattern.find_in(&tokens, 0).unwrap();
    assert_eq!(at, 12);
    assert_eq!(tokens[at].location.column, 13);
    assert_eq!(pattern.find_in(&tokens, at + 1), None);
}

#[test]
fn keyword_and_identifier_with_same_spelling_differ() {
    let tokens = statement_tokens();
    assert_eq!(find_token(Keyword, "auto", &tokens, 0), Some(9));
    assert_eq!(find_token(Ident, "auto", &tokens, 0), None);
}

#[test]
fn searches_do_not_modify_tokens() {
    let tokens = statement_tokens();
    let before = tokens.clone();
    let _ = find_tokens(&[(Keyword, "return"), (Literal, "1")], &tokens, 0);
    let _ = find_token(Punct, "{", &tokens, 3);
    assert_eq!(tokens, before);
}

#[test]
fn token_dump_from_json() {
    let json = r#"[
        {"kind": "keyword", "spelling": "co_await",
         "location": {"file": "a.cpp", "line": 4, "column": 3}},
        {"kind": "identifier", "spelling": "sched"},
        {"kind": "punctuation", "spelling": ";"}
    ]"#;
    let tokens: Vec<Token> = serde_json::from_str(json).unwrap();
    assert_eq!(
        find_tokens(&[(Keyword, "co_await"), (Ident, "sched")], &tokens, 0),
        Some(0)
    );
    assert_eq!(tokens[0].location.line, 4);
}
