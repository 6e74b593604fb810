// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tokens and token kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cxxform_core::types::{Extent, SourceLocation};

use crate::pattern::PatternError;

/// Lexical category of a token, as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Punctuation,
    Keyword,
    Identifier,
    Literal,
    Comment,
}

impl TokenKind {
    /// Short name used in textual patterns.
    pub fn short_name(self) -> &'static str {
        match self {
            TokenKind::Punctuation => "punct",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "ident",
            TokenKind::Literal => "literal",
            TokenKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for TokenKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "punct" | "punctuation" => Ok(TokenKind::Punctuation),
            "keyword" | "kw" => Ok(TokenKind::Keyword),
            "ident" | "identifier" => Ok(TokenKind::Identifier),
            "literal" | "lit" => Ok(TokenKind::Literal),
            "comment" => Ok(TokenKind::Comment),
            other => Err(PatternError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Anything that has a token kind and a spelling.
///
/// Implemented for owned [`Token`]s, for references, and for
/// `(TokenKind, &str)` / `(TokenKind, String)` pairs so that patterns and
/// token streams are compared through the same interface.
pub trait TokenLike {
    fn kind(&self) -> TokenKind;

    fn spelling(&self) -> &str;

    /// Exact comparison: same kind and byte-identical spelling.
    fn matches(&self, kind: TokenKind, text: &str) -> bool {
        self.kind() == kind && self.spelling() == text
    }
}

impl<T: TokenLike + ?Sized> TokenLike for &T {
    fn kind(&self) -> TokenKind {
        (**self).kind()
    }

    fn spelling(&self) -> &str {
        (**self).spelling()
    }
}

impl TokenLike for (TokenKind, &str) {
    fn kind(&self) -> TokenKind {
        self.0
    }

    fn spelling(&self) -> &str {
        self.1
    }
}

impl TokenLike for (TokenKind, String) {
    fn kind(&self) -> TokenKind {
        self.0
    }

    fn spelling(&self) -> &str {
        &self.1
    }
}

/// An owned token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
    /// Where the token starts.
    #[serde(default)]
    pub location: SourceLocation,
    /// What the token covers.
    #[serde(default)]
    pub extent: Extent,
}

impl Token {
    /// Create a token without position information.
    pub fn new(kind: TokenKind, spelling: impl Into<String>) -> Self {
        Token {
            kind,
            spelling: spelling.into(),
            location: SourceLocation::synthetic(),
            extent: Extent::default(),
        }
    }

    /// Set the location (and a point extent at that location).
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.extent = Extent::new(location.clone(), location.clone());
        self.location = location;
        self
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = extent;
        self
    }
}

impl TokenLike for Token {
    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn spelling(&self) -> &str {
        &self.spelling
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.spelling)
    }
}
