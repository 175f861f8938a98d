//! Error types for the structural JSON codec.
//!
//! Every failure the encoder or decoder can report is a variant of
//! [`CodecError`]. Decode variants carry the byte offset of the offending
//! token so callers can point at the problem in the original text.

use thiserror::Error;

/// Structured error types for encode and decode operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input bytes are not valid UTF-8
    #[error("input is not valid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },

    /// Input is larger than the configured limit
    #[error("input of {size} bytes exceeds the limit of {max} bytes")]
    InputTooLarge { size: usize, max: usize },

    /// Input ended in the middle of a value
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    /// A character that cannot start or continue a token
    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    /// Malformed or lone-surrogate escape sequence inside a string
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape { offset: usize },

    /// A number literal that cannot be represented
    #[error("invalid number {literal:?} at byte {offset}")]
    InvalidNumber { literal: String, offset: usize },

    /// The document does not start with `{`
    #[error("expect JSON object open with '{{', got {found} at byte {offset}")]
    ExpectedObjectOpen { found: String, offset: usize },

    /// The document's top-level object is not closed by `}`
    #[error("expect JSON object close with '}}', got {found} at byte {offset}")]
    ExpectedObjectClose { found: String, offset: usize },

    /// An object member key is not a string
    #[error("key must be a string, got {found} at byte {offset}")]
    NonStringKey { found: String, offset: usize },

    /// A closing delimiter appeared where a value was expected
    #[error("unexpected '{delimiter}' at byte {offset}")]
    UnexpectedDelimiter { delimiter: char, offset: usize },

    /// A `:` or `,` separator was missing
    #[error("expected {expected}, got {found} at byte {offset}")]
    ExpectedSeparator {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    /// Tokens follow the closing brace of the top-level object
    #[error("trailing data after JSON object at byte {offset}")]
    TrailingData { offset: usize },

    /// Objects and arrays are nested deeper than the configured limit
    #[error("nesting depth {depth} exceeds the limit of {max}")]
    NestingTooDeep { depth: usize, max: usize },

    /// Writing encoded output failed
    #[error("JSON encoding failed: {reason}")]
    Encode { reason: String },
}

impl CodecError {
    /// Check if this error was produced while decoding
    pub fn is_parse_error(&self) -> bool {
        !self.is_encode_error()
    }

    /// Check if this error was produced while encoding
    pub fn is_encode_error(&self) -> bool {
        matches!(self, CodecError::Encode { .. })
    }

    /// Check if this error is a configured limit being exceeded
    pub fn is_limit_error(&self) -> bool {
        matches!(
            self,
            CodecError::NestingTooDeep { .. } | CodecError::InputTooLarge { .. }
        )
    }

    /// Check if this error is about the structure of the top-level document
    /// rather than an individual token
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            CodecError::ExpectedObjectOpen { .. }
                | CodecError::ExpectedObjectClose { .. }
                | CodecError::NonStringKey { .. }
                | CodecError::UnexpectedDelimiter { .. }
                | CodecError::ExpectedSeparator { .. }
                | CodecError::TrailingData { .. }
        )
    }

    /// Byte offset into the input where decoding failed, if known
    pub fn offset(&self) -> Option<usize> {
        match self {
            CodecError::InvalidUtf8 { offset }
            | CodecError::UnexpectedEof { offset }
            | CodecError::UnexpectedCharacter { offset, .. }
            | CodecError::InvalidEscape { offset }
            | CodecError::InvalidNumber { offset, .. }
            | CodecError::ExpectedObjectOpen { offset, .. }
            | CodecError::ExpectedObjectClose { offset, .. }
            | CodecError::NonStringKey { offset, .. }
            | CodecError::UnexpectedDelimiter { offset, .. }
            | CodecError::ExpectedSeparator { offset, .. }
            | CodecError::TrailingData { offset } => Some(*offset),
            CodecError::InputTooLarge { .. }
            | CodecError::NestingTooDeep { .. }
            | CodecError::Encode { .. } => None,
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Encode {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Encode {
            reason: err.to_string(),
        }
    }
}

// Conversion from CodecError to the main Error type
impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
