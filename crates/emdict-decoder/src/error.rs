use std::fmt;
use std::str::Utf8Error;

use emdict_wire::{Codec, WireError};

/// The grammar position a failing read belonged to.
///
/// Record and tag indices are zero-based, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    RecordCount,
    Symbol { record: u32 },
    Description { record: u32 },
    Category { record: u32 },
    TagCount { record: u32 },
    Tag { record: u32, tag: u32 },
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordCount => f.write_str("record count"),
            Self::Symbol { record } => write!(f, "symbol of record {record}"),
            Self::Description { record } => write!(f, "description of record {record}"),
            Self::Category { record } => write!(f, "category of record {record}"),
            Self::TagCount { record } => write!(f, "tag count of record {record}"),
            Self::Tag { record, tag } => write!(f, "tag {tag} of record {record}"),
        }
    }
}

/// Errors that can occur while decompressing or decoding a dictionary.
///
/// Every variant is fatal for the call that produced it: no records are
/// returned alongside an error.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── TruncatedHeader     ← container shorter than the 4-byte size header
///   ├── CorruptPayload      ← codec rejected the compressed bytes
///   ├── SizeMismatch        ← decompressed length ≠ declared length
///   ├── DecompressionBomb   ← declared length above the configured ceiling
///   ├── UnexpectedEof       ← a primitive read ran past the buffer
///   ├── InvalidEncoding     ← string field is not UTF-8
///   ├── TrailingData        ← strict mode: bytes left after the last record
///   └── Wire(WireError)     ← any other byte-level failure
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The container is shorter than its 4-byte size header.
    #[error("container too short: {len} bytes, size header needs 4")]
    TruncatedHeader { len: usize },

    /// The codec could not decode the payload after the size header.
    ///
    /// `reason` is the codec's own message. Common causes: the file was
    /// written with a different codec, the payload was cut short, or
    /// the bytes are not a compressed stream at all.
    #[error("{codec} payload is corrupt: {reason}")]
    CorruptPayload { codec: Codec, reason: String },

    /// The payload decompressed to a different length than the header
    /// declared. Neither padding nor truncation is applied.
    #[error("size header declares {declared} bytes but payload decompressed to {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    /// The declared uncompressed size is above
    /// [`DecodeOptions::max_decompressed_size`](crate::DecodeOptions).
    ///
    /// Checked before any decompression work or allocation happens.
    #[error("declared size {declared} exceeds limit {limit}")]
    DecompressionBomb { declared: usize, limit: usize },

    /// A primitive read needed more bytes than remained.
    #[error(
        "unexpected end of input reading {field} at offset {offset}: needed {needed} bytes, {available} available"
    )]
    UnexpectedEof {
        field: Field,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A string field was not valid UTF-8. No replacement characters are
    /// substituted.
    #[error("invalid UTF-8 in {field} at offset {offset}")]
    InvalidEncoding {
        field: Field,
        offset: usize,
        #[source]
        source: Utf8Error,
    },

    /// Bytes remained after the declared records were read and the
    /// caller asked for [`TrailingBytes::Reject`](crate::TrailingBytes).
    #[error("unexpected data after last record at offset {offset} ({extra_bytes} bytes)")]
    TrailingData { offset: usize, extra_bytes: usize },

    /// A byte-level failure without a grammar position.
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl DecodeError {
    /// Attach the grammar position to a failed primitive read.
    pub(crate) fn at(err: WireError, field: Field) -> Self {
        match err {
            WireError::UnexpectedEof {
                offset,
                needed,
                available,
            } => Self::UnexpectedEof {
                field,
                offset,
                needed,
                available,
            },
            WireError::InvalidUtf8 { offset, source } => Self::InvalidEncoding {
                field,
                offset,
                source,
            },
            other => Self::Wire(other),
        }
    }

    /// The offending byte offset, when the error has one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEof { offset, .. }
            | Self::InvalidEncoding { offset, .. }
            | Self::TrailingData { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// The field being read when the error occurred, if any.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::UnexpectedEof { field, .. } | Self::InvalidEncoding { field, .. } => Some(*field),
            _ => None,
        }
    }
}
