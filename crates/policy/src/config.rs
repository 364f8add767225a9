//! Configuration for the replacement policy.
//!
//! This module defines the configuration structures and enums used to
//! parameterize the policy. It provides:
//! 1. **Defaults:** Baseline constants matching the fixed insertion/promotion vector.
//! 2. **Structures:** The root `ReplacementConfig` supplied by the enclosing cache controller.
//! 3. **Enums:** The explicit mismatch-discipline selection.
//!
//! Configuration is supplied as a value by the controller or deserialized from
//! JSON via [`ReplacementConfig::from_json`]; use `ReplacementConfig::default()`
//! for the vector's native 16-way shape.

use serde::Deserialize;

use crate::ipv::table::IPV_WAYS;

/// Default configuration constants for the policy.
///
/// These values define the baseline configuration when not explicitly
/// overridden by the enclosing cache controller.
mod defaults {
    /// Associativity the insertion/promotion vector is built for.
    pub const WAYS: usize = super::IPV_WAYS;
}

/// Discipline applied when the configured associativity does not match the
/// insertion/promotion vector.
///
/// The two behaviors are mutually exclusive and must be chosen explicitly per
/// deployment; a mismatch is never resolved silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MismatchPolicy {
    /// Treat the mismatch as a fatal configuration error.
    ///
    /// Construction fails with
    /// [`AssociativityMismatch`](crate::ReplacementError::AssociativityMismatch)
    /// and the policy is never created.
    #[default]
    Fatal,
    /// Treat the mismatch as a recoverable degradation.
    ///
    /// Construction logs a warning and continues in fallback mode: a classic
    /// bounded-counter recency approximation using the configured
    /// associativity instead of the vector.
    #[serde(alias = "Warn")]
    Degrade,
}

/// Root configuration structure for the replacement policy.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use lru_ipv::config::{MismatchPolicy, ReplacementConfig};
///
/// let config = ReplacementConfig::default();
/// assert_eq!(config.ways, 16);
/// assert_eq!(config.on_mismatch, MismatchPolicy::Fatal);
/// ```
///
/// Deserializing from JSON (typical controller usage):
///
/// ```
/// use lru_ipv::config::{MismatchPolicy, ReplacementConfig};
///
/// let json = r#"{ "ways": 2, "on_mismatch": "Degrade" }"#;
/// let config = ReplacementConfig::from_json(json)?;
/// assert_eq!(config.ways, 2);
/// assert_eq!(config.on_mismatch, MismatchPolicy::Degrade);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReplacementConfig {
    /// Associativity (number of ways) of the governed cache.
    #[serde(default = "ReplacementConfig::default_ways")]
    pub ways: usize,

    /// Discipline applied when `ways` does not match the vector.
    #[serde(default)]
    pub on_mismatch: MismatchPolicy,
}

impl ReplacementConfig {
    /// Returns the default associativity (the vector's native shape).
    fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Deserializes a configuration from a JSON string.
    ///
    /// Missing fields take their documented defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the input is not
    /// valid JSON or a field has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ReplacementConfig {
    /// Creates a default configuration.
    ///
    /// Matches the vector's native 16-way shape with the fail-fast mismatch
    /// discipline.
    fn default() -> Self {
        Self {
            ways: defaults::WAYS,
            on_mismatch: MismatchPolicy::default(),
        }
    }
}
