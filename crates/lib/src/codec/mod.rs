//! Structural JSON codec for [`OrderedMap`].
//!
//! Encoding walks the key order and writes each member in turn, so the output
//! object lists members exactly in [`OrderedMap::keys`] order. Decoding runs a
//! hand-written token stream through a recursive descent parser and stores
//! members with [`OrderedMap::set`] as they arrive, which preserves the source
//! order. A generic decode into a hash map would lose it.
//!
//! ```
//! use orderedmap::OrderedMap;
//!
//! let map = OrderedMap::decode(r#"{"z":1,"a":[true,null],"m":{"y":"x"}}"#)?;
//! assert_eq!(map.keys(), ["z", "a", "m"]);
//! assert_eq!(map.encode()?, r#"{"z":1,"a":[true,null],"m":{"y":"x"}}"#);
//! # Ok::<(), orderedmap::Error>(())
//! ```

use std::{io, str::FromStr};

pub mod errors;
mod lexer;
pub mod limits;
mod parser;

pub use errors::CodecError;
pub use limits::Limits;

use crate::map::{OrderedMap, Value};
use parser::Decoder;

/// Write `map` as a compact JSON object in key order.
fn write_map<W: io::Write>(writer: &mut W, map: &OrderedMap) -> Result<(), CodecError> {
    writer.write_all(b"{")?;
    for (idx, (key, value)) in map.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b",")?;
        }
        serde_json::to_writer(&mut *writer, key.as_str())?;
        writer.write_all(b":")?;
        write_value(writer, value)?;
    }
    writer.write_all(b"}")?;
    Ok(())
}

fn write_value<W: io::Write>(writer: &mut W, value: &Value) -> Result<(), CodecError> {
    match value {
        Value::Null => writer.write_all(b"null")?,
        Value::Bool(true) => writer.write_all(b"true")?,
        Value::Bool(false) => writer.write_all(b"false")?,
        Value::Number(n) => serde_json::to_writer(&mut *writer, n)?,
        Value::Text(s) => serde_json::to_writer(&mut *writer, s.as_str())?,
        Value::Map(map) => write_map(writer, map)?,
        Value::List(items) => {
            writer.write_all(b"[")?;
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    writer.write_all(b",")?;
                }
                write_value(writer, item)?;
            }
            writer.write_all(b"]")?;
        }
    }
    Ok(())
}

fn into_string(buf: Vec<u8>) -> crate::Result<String> {
    String::from_utf8(buf).map_err(|e| {
        CodecError::Encode {
            reason: e.to_string(),
        }
        .into()
    })
}

impl OrderedMap {
    /// Encodes the map as compact JSON with members in key order.
    pub fn encode(&self) -> crate::Result<String> {
        let mut buf = Vec::with_capacity(self.len() * 16);
        write_map(&mut buf, self)?;
        into_string(buf)
    }

    /// Encodes the map as compact JSON into `writer`.
    ///
    /// Write failures surface as [`CodecError::Encode`]; anything already
    /// written to `writer` before the failure is not valid output.
    pub fn encode_to_writer<W: io::Write>(&self, mut writer: W) -> crate::Result<()> {
        write_map(&mut writer, self)?;
        Ok(())
    }

    /// Encodes the map as indented JSON, keeping key order.
    pub fn encode_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a JSON object using the default [`Limits`].
    pub fn decode(input: impl AsRef<[u8]>) -> crate::Result<Self> {
        Self::decode_with_limits(input, Limits::default())
    }

    /// Decodes a JSON object using explicit [`Limits`].
    pub fn decode_with_limits(input: impl AsRef<[u8]>, limits: Limits) -> crate::Result<Self> {
        let mut map = OrderedMap::new();
        map.decode_into(input, limits)?;
        Ok(map)
    }

    /// Decodes a JSON object into this map, merging with existing entries.
    ///
    /// Members are applied with [`OrderedMap::set`], so keys already present
    /// keep their position. If decoding fails the map keeps the members stored
    /// before the error and should be discarded by the caller.
    pub fn decode_into(&mut self, input: impl AsRef<[u8]>, limits: Limits) -> crate::Result<()> {
        let input = input.as_ref();
        tracing::trace!(
            input_len = input.len(),
            max_depth = limits.max_depth,
            "Decoding JSON object"
        );

        let mut decoder = Decoder::new(input, limits)?;
        let result = decoder
            .decode_object(self)
            .and_then(|()| decoder.finish());

        if let Err(err) = &result {
            tracing::debug!(
                error = %err,
                offset = err.offset().unwrap_or_else(|| decoder.position()),
                "Failed to decode JSON object"
            );
        }
        Ok(result?)
    }

    /// Reads `reader` to the end and decodes the bytes as a JSON object.
    pub fn decode_from_reader<R: io::Read>(mut reader: R, limits: Limits) -> crate::Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::decode_with_limits(buf, limits)
    }
}

impl FromStr for OrderedMap {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Value {
    /// Encodes the value as compact JSON; nested maps keep their key order.
    pub fn encode(&self) -> crate::Result<String> {
        let mut buf = Vec::new();
        write_value(&mut buf, self)?;
        into_string(buf)
    }
}
