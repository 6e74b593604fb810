// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Linear search over token slices.
//!
//! Token lists handed to these functions are single translation units or
//! macro expansions, so the multi-token search is a plain sliding-window
//! scan with no preprocessing. Matching is exact: same kind, byte-identical
//! spelling.
//!
//! A `start` at or past the end of the slice and an empty pattern both
//! yield `None`.

use tracing::{debug, trace};

use crate::token::{TokenKind, TokenLike};

/// Index of the first token at or after `start` with the given kind and
/// spelling.
///
/// ```
/// use cxxform_tokens::{find_token, Token, TokenKind};
///
/// let tokens = [
///     Token::new(TokenKind::Identifier, "a"),
///     Token::new(TokenKind::Identifier, "x"),
///     Token::new(TokenKind::Identifier, "x"),
/// ];
/// assert_eq!(find_token(TokenKind::Identifier, "x", &tokens, 2), Some(2));
/// assert_eq!(find_token(TokenKind::Keyword, "x", &tokens, 0), None);
/// ```
pub fn find_token<T: TokenLike>(
    kind: TokenKind,
    text: &str,
    tokens: &[T],
    start: usize,
) -> Option<usize> {
    let Some(rest) = tokens.get(start..) else {
        trace!(start, len = tokens.len(), "search starts past the end of the tokens");
        return None;
    };
    rest.iter()
        .position(|token| token.matches(kind, text))
        .map(|offset| start + offset)
}

/// Index where `pattern` first matches contiguously, at or after `start`.
///
/// ```
/// use cxxform_tokens::{find_tokens, Token, TokenKind};
///
/// let k = TokenKind::Identifier;
/// let tokens = [Token::new(k, "a"), Token::new(k, "a"), Token::new(k, "b")];
/// assert_eq!(find_tokens(&[(k, "a"), (k, "b")], &tokens, 0), Some(1));
/// ```
pub fn find_tokens<P: TokenLike, T: TokenLike>(
    pattern: &[P],
    tokens: &[T],
    start: usize,
) -> Option<usize> {
    if pattern.is_empty() {
        debug!("empty token pattern; reporting no match");
        return None;
    }
    let Some(rest) = tokens.get(start..) else {
        trace!(start, len = tokens.len(), "search starts past the end of the tokens");
        return None;
    };
    rest.windows(pattern.len())
        .position(|window| window_matches(pattern, window))
        .map(|offset| start + offset)
}

/// Returns true if `pattern` matches `tokens` starting exactly at `index`.
///
/// An empty pattern never matches.
pub fn matches_at<P: TokenLike, T: TokenLike>(pattern: &[P], tokens: &[T], index: usize) -> bool {
    if pattern.is_empty() {
        return false;
    }
    index
        .checked_add(pattern.len())
        .and_then(|end| tokens.get(index..end))
        .is_some_and(|window| window_matches(pattern, window))
}

fn window_matches<P: TokenLike, T: TokenLike>(pattern: &[P], window: &[T]) -> bool {
    pattern
        .iter()
        .zip(window)
        .all(|(expected, token)| token.matches(expected.kind(), expected.spelling()))
}
