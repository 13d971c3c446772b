//! The codec abstraction shared by both formats.

use std::fmt;

use binlog_core::Record;
use serde::Serialize;

use crate::binary::BinaryCodec;
use crate::error::CodecError;
use crate::json::JsonCodec;

/// Wire formats under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    #[serde(rename = "binlog")]
    Binary,
    #[serde(rename = "json")]
    Json,
}

impl Format {
    /// Parse a format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "binlog" | "binary" => Some(Format::Binary),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Display name, also used as the chart series label.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Binary => "binlog",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A paired encode/decode implementation for one wire format.
pub trait Codec {
    /// The format this codec reads and writes.
    fn format(&self) -> Format;

    /// Encode an ordered record sequence into a fresh buffer.
    fn encode(&self, records: &[Record]) -> Result<Vec<u8>, CodecError>;

    /// Decode a buffer produced by [`Codec::encode`], preserving order.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Record>, CodecError>;
}

/// The built-in codec for a format.
pub fn codec_for(format: Format) -> Box<dyn Codec> {
    match format {
        Format::Binary => Box::new(BinaryCodec),
        Format::Json => Box::new(JsonCodec),
    }
}
