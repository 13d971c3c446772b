//! Record codecs for the binlog serialization benchmark.
//!
//! Two formats encode the same ordered record sequence: the length-prefixed
//! binary format implemented by [`BinaryCodec`], and JSON via [`JsonCodec`],
//! which stands in for any off-the-shelf self-describing encoder.
//!
//! ## Binary Layout
//!
//! ```text
//! binlog record (repeated until end of buffer):
//! ┌──────────────────────────────┐
//! │ id: i32 LE                   │  4 bytes
//! │ name_len: i32 LE             │  4 bytes
//! │ name (UTF-8)                 │  name_len bytes
//! │ value_len: i32 LE            │  4 bytes
//! │ value (UTF-8)                │  value_len bytes
//! └──────────────────────────────┘
//! ```
//!
//! There is no header, record count, version tag or terminator: the end of
//! the buffer is the end of the data. This is a benchmarking simplification;
//! a format meant to outlive its writer would need at least a version tag.

mod binary;
mod codec;
mod error;
mod json;

pub use binary::{encoded_len, BinaryCodec, FIELD_WIDTH, RECORD_OVERHEAD};
pub use codec::{codec_for, Codec, Format};
pub use error::{CodecError, Field};
pub use json::JsonCodec;
