//! binlog binary format implementation.
//!
//! Every field is a little-endian `i32` or a run of UTF-8 bytes whose length
//! was given by the preceding prefix. Decoding walks the buffer with a cursor
//! and stops only when the cursor lands exactly on the end.

use binlog_core::Record;

use crate::codec::{Codec, Format};
use crate::error::{CodecError, Field};

/// Width of every fixed-size field (id and both length prefixes).
pub const FIELD_WIDTH: usize = 4;

/// Fixed bytes per record: id + name length + value length.
pub const RECORD_OVERHEAD: usize = 3 * FIELD_WIDTH;

/// Exact binary size of `records`, without encoding them.
pub fn encoded_len(records: &[Record]) -> usize {
    records
        .iter()
        .map(|r| RECORD_OVERHEAD + r.content_len())
        .sum()
}

/// The length-prefixed binary codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl BinaryCodec {
    /// Append the encoding of `records` to `buf`.
    pub fn encode_into(&self, records: &[Record], buf: &mut Vec<u8>) -> Result<(), CodecError> {
        for record in records {
            buf.extend_from_slice(&record.id().to_le_bytes());
            write_text(buf, record.id(), Field::Name, record.name())?;
            write_text(buf, record.id(), Field::Value, record.value())?;
        }
        Ok(())
    }

    /// Count the records in `bytes` by walking the framing without
    /// materializing any text.
    pub fn record_count(&self, bytes: &[u8]) -> Result<usize, CodecError> {
        let mut cursor = Cursor::new(bytes);
        let mut count = 0;
        while !cursor.is_at_end() {
            cursor.read_i32(Field::Id)?;
            let name_len = cursor.read_len(Field::NameLength)?;
            cursor.read_bytes(name_len, Field::Name)?;
            let value_len = cursor.read_len(Field::ValueLength)?;
            cursor.read_bytes(value_len, Field::Value)?;
            count += 1;
        }
        Ok(count)
    }
}

impl Codec for BinaryCodec {
    fn format(&self) -> Format {
        Format::Binary
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::with_capacity(encoded_len(records));
        self.encode_into(records, &mut buf)?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Record>, CodecError> {
        let mut cursor = Cursor::new(bytes);
        let mut records = Vec::new();
        while !cursor.is_at_end() {
            let id = cursor.read_i32(Field::Id)?;
            let name_len = cursor.read_len(Field::NameLength)?;
            let name = cursor.read_str(name_len, Field::Name)?;
            let value_len = cursor.read_len(Field::ValueLength)?;
            let value = cursor.read_str(value_len, Field::Value)?;
            records.push(Record::new(id, name, value));
        }
        Ok(records)
    }
}

/// Write a length prefix followed by the text bytes.
fn write_text(buf: &mut Vec<u8>, id: i32, field: Field, text: &str) -> Result<(), CodecError> {
    let len = i32::try_from(text.len()).map_err(|_| CodecError::FieldTooLong {
        id,
        field,
        len: text.len(),
    })?;
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(text.as_bytes());
    Ok(())
}

/// Read position over an encoded buffer.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.data.len()
    }

    fn read_bytes(&mut self, len: usize, field: Field) -> Result<&'a [u8], CodecError> {
        let offset = self.pos;
        let bytes = offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(CodecError::Truncated { offset, field })?;
        self.pos += len;
        Ok(bytes)
    }

    fn read_i32(&mut self, field: Field) -> Result<i32, CodecError> {
        let bytes = self.read_bytes(FIELD_WIDTH, field)?;
        let mut raw = [0u8; FIELD_WIDTH];
        raw.copy_from_slice(bytes);
        Ok(i32::from_le_bytes(raw))
    }

    /// Read a length prefix, rejecting negative values before any read is attempted.
    fn read_len(&mut self, field: Field) -> Result<usize, CodecError> {
        let offset = self.pos;
        let length = self.read_i32(field)?;
        usize::try_from(length).map_err(|_| CodecError::InvalidLength {
            offset,
            field,
            length,
        })
    }

    fn read_str(&mut self, len: usize, field: Field) -> Result<&'a str, CodecError> {
        let offset = self.pos;
        let bytes = self.read_bytes(len, field)?;
        std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidText { offset, field })
    }
}
