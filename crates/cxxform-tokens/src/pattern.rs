// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Owned multi-token patterns.
//!
//! A pattern is a non-empty list of `(kind, spelling)` pairs. Its textual form
//! is a whitespace-separated list of `<kind>:<spelling>` items, for example
//! `ident:CONCORE_ASSERT punct:(`. Everything after the first `:` is the
//! spelling, so `punct::` is the `::` token. Spellings containing whitespace
//! cannot be written in the textual form; build those patterns with
//! [`TokenPattern::new`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scan::{find_tokens, matches_at};
use crate::token::{TokenKind, TokenLike};

/// Errors from building or parsing a [`TokenPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("token pattern is empty")]
    Empty,

    #[error("pattern item '{item}' is not of the form <kind>:<spelling>")]
    MissingSeparator { item: String },

    #[error("unknown token kind '{kind}' (expected punct, keyword, ident, literal or comment)")]
    UnknownKind { kind: String },

    #[error("pattern item '{item}' has an empty spelling")]
    EmptySpelling { item: String },
}

/// A non-empty, owned sequence of `(kind, spelling)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenPattern {
    items: Vec<(TokenKind, String)>,
}

impl TokenPattern {
    /// Build a pattern from pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Empty`] if `items` is empty.
    pub fn new<I, S>(items: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (TokenKind, S)>,
        S: Into<String>,
    {
        let items: Vec<_> = items
            .into_iter()
            .map(|(kind, text)| (kind, text.into()))
            .collect();
        if items.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(TokenPattern { items })
    }

    /// Append one more token to the pattern.
    pub fn then(mut self, kind: TokenKind, text: impl Into<String>) -> Self {
        self.items.push((kind, text.into()));
        self
    }

    pub fn items(&self) -> &[(TokenKind, String)] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a pattern built through `new` or parsing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First index at or after `start` where the pattern matches.
    pub fn find_in<T: TokenLike>(&self, tokens: &[T], start: usize) -> Option<usize> {
        find_tokens(&self.items, tokens, start)
    }

    /// Returns true if the pattern matches `tokens` exactly at `index`.
    pub fn matches_at<T: TokenLike>(&self, tokens: &[T], index: usize) -> bool {
        matches_at(&self.items, tokens, index)
    }
}

fn parse_item(item: &str) -> Result<(TokenKind, String), PatternError> {
    let (kind, text) = item
        .split_once(':')
        .ok_or_else(|| PatternError::MissingSeparator {
            item: item.to_string(),
        })?;
    if text.is_empty() {
        return Err(PatternError::EmptySpelling {
            item: item.to_string(),
        });
    }
    Ok((kind.parse()?, text.to_string()))
}

impl FromStr for TokenPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let items = s
            .split_whitespace()
            .map(parse_item)
            .collect::<Result<Vec<_>, _>>()?;
        TokenPattern::new(items)
    }
}

impl TryFrom<String> for TokenPattern {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TokenPattern> for String {
    fn from(pattern: TokenPattern) -> Self {
        pattern.to_string()
    }
}

impl fmt::Display for TokenPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (kind, text)) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", kind, text)?;
        }
        Ok(())
    }
}
