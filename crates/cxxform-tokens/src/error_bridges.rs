// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Conversion from pattern errors to the unified `CxxformError`.
//!
//! The impl lives here rather than in the root crate: `CxxformError` is
//! defined in `cxxform-core`, so only a crate that owns one side of the
//! conversion may provide it.

use cxxform_core::error::CxxformError;

use crate::pattern::PatternError;

impl From<PatternError> for CxxformError {
    fn from(err: PatternError) -> Self {
        match err {
            PatternError::Empty => CxxformError::invalid_pattern("", "pattern is empty"),
            PatternError::MissingSeparator { item } => {
                CxxformError::invalid_pattern(item, "expected <kind>:<spelling>")
            }
            PatternError::UnknownKind { kind } => CxxformError::invalid_pattern(
                kind,
                "unknown token kind (expected punct, keyword, ident, literal or comment)",
            ),
            PatternError::EmptySpelling { item } => {
                CxxformError::invalid_pattern(item, "empty spelling")
            }
        }
    }
}
