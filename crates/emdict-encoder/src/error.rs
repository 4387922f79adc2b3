use emdict_wire::WireError;

/// Errors that can occur while encoding a dictionary.
///
/// Every length on the wire is a `u32`, so most variants report a value
/// that does not fit. Compression failures carry the codec's I/O error.
///
/// Error hierarchy:
///
/// ```text
///   EncodeError
///   ├── FieldTooLong      ← a string is longer than u32::MAX bytes
///   ├── TooManyRecords    ← record count does not fit a u32
///   ├── TooManyTags       ← a record's tag count does not fit a u32
///   ├── PayloadTooLarge   ← raw stream too long for the size header
///   ├── OrphanTag         ← with_tag called before any record was added
///   ├── Compress(io)      ← codec failed while compressing
///   └── Wire(WireError)   ← from emdict-wire serialization
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("{field} is {len} bytes, longer than a u32 length prefix allows")]
    FieldTooLong { field: &'static str, len: usize },

    #[error("{count} records do not fit a u32 record count")]
    TooManyRecords { count: usize },

    #[error("record {record} has {count} tags, more than a u32 tag count allows")]
    TooManyTags { record: usize, count: usize },

    #[error("raw stream is {len} bytes, larger than the u32 size header allows")]
    PayloadTooLarge { len: usize },

    #[error("with_tag called but no records have been added yet")]
    OrphanTag,

    #[error("compression failed")]
    Compress(#[source] std::io::Error),

    #[error(transparent)]
    Wire(#[from] WireError),
}
