use std::str::Utf8Error;

/// Byte-level failures shared by every layer that touches the wire.
///
/// Offsets are always relative to the start of the buffer the reader was
/// constructed over: the container for header errors, the decompressed
/// record stream for everything else.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A read needed more bytes than the buffer had left.
    ///
    /// `needed` is the size of the read that was attempted and
    /// `available` is what remained at `offset`. A declared string length
    /// that would run past the end of the buffer lands here before any
    /// UTF-8 validation happens.
    #[error("unexpected end of input at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A string field was not valid UTF-8.
    ///
    /// `offset` points at the first byte of the string body (after the
    /// 4-byte length prefix).
    #[error("invalid UTF-8 at offset {offset}: {source}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: Utf8Error,
    },

    /// A length does not fit the 32-bit prefix the grammar uses.
    #[error("length {len} does not fit a 32-bit length prefix")]
    LengthOverflow { len: usize },
}
