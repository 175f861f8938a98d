//!
//! orderedmap: a string-keyed map that remembers insertion order.
//!
//! ## Core Concepts
//!
//! * **OrderedMap (`map::OrderedMap`)**: Keys are kept in an order list next to a hash
//!   map of entries. Keys can be read and written by name or by position, and every
//!   iteration, positional lookup and encoding follows the order list.
//! * **Value (`map::Value`)**: The value stored under a key: null, bool, number, text,
//!   a nested `OrderedMap`, or a list of values.
//! * **Codec (`codec`)**: Encodes a map to compact JSON with members in key order, and
//!   decodes JSON objects with a streaming token parser so the source key order is kept.
//!
//! ```
//! use orderedmap::OrderedMap;
//!
//! let mut map: OrderedMap = r#"{"b":1,"a":{"y":true,"x":null}}"#.parse()?;
//! map.set("c", vec![1, 2, 3]);
//! map.delete("b");
//!
//! assert_eq!(map.keys(), ["a", "c"]);
//! assert_eq!(map.to_string(), r#"{"a":{"y":true,"x":null},"c":[1,2,3]}"#);
//! # Ok::<(), orderedmap::Error>(())
//! ```
//!
//! `OrderedMap` performs no internal locking; wrap it in a `RwLock` or `Mutex` to share
//! it between threads.

pub mod codec;
pub mod map;

pub use codec::{CodecError, Limits};
pub use map::{MapError, OrderedMap, Value};

/// Result type used throughout the orderedmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the orderedmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured encode/decode errors from the codec module
    #[error(transparent)]
    Codec(codec::CodecError),

    /// Structured value access errors from the map module
    #[error(transparent)]
    Map(map::MapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Codec(_) => "codec",
            Error::Map(_) => "map",
        }
    }

    /// Check if this error came from decoding malformed input.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_parse_error(),
            _ => false,
        }
    }

    /// Check if this error came from encoding.
    pub fn is_encode_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_encode_error(),
            Error::Serialize(_) => true,
            _ => false,
        }
    }

    /// Check if this error is a configured decode limit being exceeded.
    pub fn is_limit_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_limit_error(),
            _ => false,
        }
    }

    /// Check if this error is a value type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Byte offset into the decoded input where the error occurred, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Codec(codec_err) => codec_err.offset(),
            _ => None,
        }
    }
}
