//! cxxform: AST traversal and token search for C/C++ source generators.
//!
//! A code generator that rewrites C/C++ sources needs two things from the
//! parser output: a way to walk the AST with control over which subtrees are
//! explored, and a way to find token sequences (macro calls, markers) in the
//! lexical stream. This crate bundles both and adds loading of serialized
//! translation units.

// Core infrastructure - re-exported from cxxform-core
pub use cxxform_core::config;
pub use cxxform_core::error;
pub use cxxform_core::output;
pub use cxxform_core::types;

// Traversal engine and token scanner
pub use cxxform_ast as ast;
pub use cxxform_tokens as tokens;

// Serialized translation units
pub mod unit;
pub use unit::TranslationUnit;
