//! JSON reference codec.

use binlog_core::Record;

use crate::codec::{Codec, Format};
use crate::error::CodecError;

/// Encodes records as a JSON array of `{"id", "name", "value"}` objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(records)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Record>, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
