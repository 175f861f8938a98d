//! Error types for typed access to map values.

use thiserror::Error;

/// Structured error types for [`super::OrderedMap`] value access.
///
/// Missing keys and out-of-range positions are reported as `None` by the map
/// itself; this type only covers values that exist but have the wrong shape.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A value exists but is not of the requested type
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl MapError {
    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, MapError::TypeMismatch { .. })
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
