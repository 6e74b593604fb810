//! Core infrastructure for cxxform.
//!
//! This crate provides the pieces shared by the traversal and token crates:
//! - Source locations and extents reported by the external C/C++ parser
//! - Error types and error codes
//! - Walk options (traversal policy configuration)
//! - JSON output types for CLI responses

pub mod config;
pub mod error;
pub mod output;
pub mod types;
