//! Walker configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Configuration for a [`Walker`](crate::Walker).
///
/// The default configuration walks trees of any depth, bounded only by the
/// call stack. Set `max_depth` when the tree comes from untrusted or
/// generated input.
///
/// ```rust
/// use jswalk::WalkConfig;
///
/// let config = WalkConfig::from_json(r#"{ "maxDepth": 512 }"#).unwrap();
/// assert_eq!(config.max_depth.map(|d| d.get()), Some(512));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct WalkConfig {
    /// Maximum nesting depth, counting the root as depth 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<NonZeroUsize>,
}

impl WalkConfig {
    /// A configuration without a depth limit.
    #[inline]
    pub const fn unlimited() -> Self {
        Self { max_depth: None }
    }

    /// A configuration that rejects nodes nested deeper than `limit`.
    #[inline]
    pub const fn with_max_depth(limit: NonZeroUsize) -> Self {
        Self {
            max_depth: Some(limit),
        }
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
