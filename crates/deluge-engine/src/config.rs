//! Engine configuration and validation.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_recursion_depth` is zero, leaving the recursive traversal no
    /// room to expand even the sources.
    ZeroRecursionDepth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRecursionDepth => write!(f, "max_recursion_depth must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Tunables for a [`FloodEngine`](crate::FloodEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Deepest call nesting the recursive traversal may reach. Cells
    /// admitted at this depth are expanded later from an explicit overflow
    /// stack instead of by deeper recursion. Default: 1024.
    pub max_recursion_depth: usize,
}

impl EngineConfig {
    /// Default recursion ceiling. Small enough for a 2 MiB thread stack.
    pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1024;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_recursion_depth == 0 {
            return Err(ConfigError::ZeroRecursionDepth);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: Self::DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}
