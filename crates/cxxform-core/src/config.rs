//! Walk configuration.
//!
//! A walk is configured by a [`WalkPolicy`] and, optionally, an explicit file
//! to scope the walk to. Options deserialize from JSON so generator drivers
//! can keep them next to their other settings.
//!
//! ```
//! use cxxform_core::config::{WalkOptions, WalkPolicy};
//!
//! let options = WalkOptions::default()
//!     .with_policy(WalkPolicy::CurrentFile)
//!     .with_scope_file("executor.cpp");
//! assert_eq!(options.scope_file.as_deref(), Some("executor.cpp"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which nodes a walk is allowed to reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalkPolicy {
    /// Every reachable node, including nodes from included headers.
    #[default]
    Unrestricted,
    /// Only nodes located in the root's own file. Nodes from other files are
    /// skipped together with their subtrees; synthetic nodes are kept.
    CurrentFile,
}

impl WalkPolicy {
    /// Returns true if this policy filters nodes by file.
    pub fn is_scoped(self) -> bool {
        self == WalkPolicy::CurrentFile
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WalkPolicy::Unrestricted => "unrestricted",
            WalkPolicy::CurrentFile => "current-file",
        }
    }
}

impl fmt::Display for WalkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unrestricted" | "all" => Ok(WalkPolicy::Unrestricted),
            "current-file" | "scoped" => Ok(WalkPolicy::CurrentFile),
            other => Err(format!(
                "unknown walk policy '{}', expected 'unrestricted' or 'current-file'",
                other
            )),
        }
    }
}

impl From<bool> for WalkPolicy {
    /// `true` selects the file-scoped policy.
    fn from(scoped: bool) -> Self {
        if scoped {
            WalkPolicy::CurrentFile
        } else {
            WalkPolicy::Unrestricted
        }
    }
}

/// Options for a single walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkOptions {
    /// Traversal policy.
    pub policy: WalkPolicy,
    /// File to scope a [`WalkPolicy::CurrentFile`] walk to. When unset, the
    /// root node's own file is used. Ignored for unrestricted walks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_file: Option<String>,
}

impl WalkOptions {
    /// Options for an unrestricted walk.
    pub fn unrestricted() -> Self {
        WalkOptions::default()
    }

    /// Options for a walk scoped to the root's file.
    pub fn current_file() -> Self {
        WalkOptions::default().with_policy(WalkPolicy::CurrentFile)
    }

    pub fn with_policy(mut self, policy: WalkPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_scope_file(mut self, file: impl Into<String>) -> Self {
        self.scope_file = Some(file.into());
        self
    }
}

impl From<WalkPolicy> for WalkOptions {
    fn from(policy: WalkPolicy) -> Self {
        WalkOptions::default().with_policy(policy)
    }
}

impl From<bool> for WalkOptions {
    fn from(scoped: bool) -> Self {
        WalkOptions::from(WalkPolicy::from(scoped))
    }
}
