//! Resource limits applied while decoding.
//!
//! Decoding is a depth-first recursive descent, so nesting depth is bounded
//! by [`Limits::max_depth`] instead of by the call stack.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth for objects and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default maximum input size in bytes (64 MiB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

/// Limits enforced by the decoder.
///
/// The top-level object counts as depth 1; every nested object or array adds
/// one level.
///
/// ```
/// use orderedmap::{OrderedMap, codec::Limits};
///
/// let limits = Limits::default().with_max_depth(2);
/// assert!(OrderedMap::decode_with_limits(r#"{"a":{"b":1}}"#, limits).is_ok());
/// assert!(OrderedMap::decode_with_limits(r#"{"a":{"b":[1]}}"#, limits).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum nesting depth for objects and arrays
    pub max_depth: usize,
    /// Maximum total input size in bytes
    pub max_input_size: usize,
}

impl Limits {
    /// Limits used by [`crate::OrderedMap::decode`].
    pub const fn standard() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }

    /// Small limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_depth: 32,
            max_input_size: 1024 * 1024,
        }
    }

    /// Builder method to set the maximum nesting depth
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder method to set the maximum input size
    pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}
