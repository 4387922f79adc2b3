use crate::error::WireError;

/// Size of every length prefix and fixed-width integer in the record
/// stream.
pub const WORD_SIZE: usize = 4;

/// Forward-only cursor over a decompressed record stream.
///
/// Every primitive either consumes exactly the bytes it needs or returns
/// an error; there is no peek and no seek, so `position()` never goes
/// backwards. All multi-byte integers are little-endian.
///
/// ```text
///   u32     │ 4 bytes LE
///   i32     │ 4 bytes LE, two's complement
///   string  │ u32 length L │ L bytes of UTF-8
/// ```
///
/// Bounds are checked with `checked_add` before slicing, so a hostile
/// length prefix near `u32::MAX` fails as [`WireError::UnexpectedEof`]
/// instead of wrapping the cursor.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Consume exactly `len` bytes and return them.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than `len` bytes
    /// remain. The cursor does not move on failure.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or(WireError::UnexpectedEof {
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            })?;

        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_word(&mut self) -> Result<[u8; WORD_SIZE], WireError> {
        let bytes = self.read_bytes(WORD_SIZE)?;
        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(bytes);
        Ok(word)
    }

    /// Read a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        self.read_word().map(u32::from_le_bytes)
    }

    /// Read a little-endian two's complement `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        self.read_word().map(i32::from_le_bytes)
    }

    /// Read a length-prefixed UTF-8 string.
    ///
    /// A zero length yields an empty string; the grammar has no null
    /// marker. The body is bounds-checked before it is validated, so a
    /// short buffer always reports `UnexpectedEof` rather than
    /// `InvalidUtf8`.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the prefix or the body is cut short.
    /// - [`WireError::InvalidUtf8`] if the body is not valid UTF-8.
    pub fn read_string(&mut self) -> Result<String, WireError> {
        let declared = self.read_u32()?;
        let body_offset = self.pos;
        let len = usize::try_from(declared).map_err(|_| WireError::UnexpectedEof {
            offset: body_offset,
            needed: usize::MAX,
            available: self.remaining(),
        })?;

        let bytes = self.read_bytes(len)?;
        let text = std::str::from_utf8(bytes).map_err(|source| WireError::InvalidUtf8 {
            offset: body_offset,
            source,
        })?;
        Ok(text.to_owned())
    }
}
