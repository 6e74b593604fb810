// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Token search over C/C++ token streams.
//!
//! The token stream of a translation unit (or of a sub-range such as one
//! macro expansion) is produced by an external parser. This crate searches it
//! without modifying it:
//!
//! - [`find_token`] finds the first token with a given kind and spelling.
//! - [`find_tokens`] finds the first place a contiguous run of tokens matches
//!   a pattern.
//!
//! Both return `None` when nothing matches; a miss is never an error.
//!
//! # Quick Start
//!
//! ```
//! use cxxform_tokens::{find_tokens, Token, TokenKind, TokenPattern};
//!
//! let tokens = vec![
//!     Token::new(TokenKind::Identifier, "CONCORE_ASSERT"),
//!     Token::new(TokenKind::Punctuation, "("),
//!     Token::new(TokenKind::Identifier, "ok"),
//!     Token::new(TokenKind::Punctuation, ")"),
//! ];
//!
//! let pattern: TokenPattern = "ident:CONCORE_ASSERT punct:(".parse().unwrap();
//! assert_eq!(pattern.find_in(&tokens, 0), Some(0));
//! assert_eq!(find_tokens(&[(TokenKind::Punctuation, ")")], &tokens, 0), Some(3));
//! ```

/// Token kinds, the token trait, and the owned token type.
pub mod token;
pub use token::{Token, TokenKind, TokenLike};

/// Multi-token patterns and their textual form.
pub mod pattern;
pub use pattern::{PatternError, TokenPattern};

/// The search routines.
pub mod scan;
pub use scan::{find_token, find_tokens, matches_at};

/// `From<PatternError> for CxxformError`.
mod error_bridges;
