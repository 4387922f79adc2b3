use emdict_types::Record;
use emdict_wire::ByteReader;
use emdict_wire::reader::WORD_SIZE;

use crate::error::{DecodeError, Field};

/// Smallest possible encoded record: empty symbol, empty description,
/// category, zero tag count.
pub const MIN_RECORD_SIZE: usize = 4 * WORD_SIZE;

/// Smallest possible encoded tag: an empty string.
pub const MIN_TAG_SIZE: usize = WORD_SIZE;

/// Cursor-based record reader over a decompressed buffer.
///
/// `RecordReader` wraps a [`ByteReader`] and walks the record grammar,
/// attaching a [`Field`] to every failed primitive read so errors say
/// which part of which record was cut short.
///
/// ```text
///   record_count (u32)
///   repeat record_count:
///     symbol       string
///     description  string
///     category     i32
///     tag_count    u32
///     repeat tag_count:
///       tag        string
/// ```
///
/// # Usage pattern
///
/// ```text
///   let mut reader = RecordReader::new(raw);
///   let count = reader.read_count()?;
///   for index in 0..count {
///       let record = reader.next_record(index)?;
///   }
/// ```
pub struct RecordReader<'a> {
    inner: ByteReader<'a>,
}

impl<'a> RecordReader<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            inner: ByteReader::new(buf),
        }
    }

    /// Read the leading record count.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_count(&mut self) -> Result<u32, DecodeError> {
        self.u32(Field::RecordCount)
    }

    /// Read one complete record. `index` is used only for error context.
    ///
    /// The record is assembled after its last tag has been read; on
    /// error nothing is returned.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnexpectedEof`] if any field is cut short.
    /// - [`DecodeError::InvalidEncoding`] if a string is not UTF-8.
    pub fn next_record(&mut self, index: u32) -> Result<Record, DecodeError> {
        let symbol = self.string(Field::Symbol { record: index })?;
        let description = self.string(Field::Description { record: index })?;
        let category = self.i32(Field::Category { record: index })?;
        let tag_count = self.u32(Field::TagCount { record: index })?;

        let mut tags = Vec::with_capacity(capacity_hint(tag_count, self.remaining(), MIN_TAG_SIZE));
        for tag in 0..tag_count {
            tags.push(self.string(Field::Tag { record: index, tag })?);
        }

        Ok(Record {
            symbol,
            category,
            description,
            tags,
        })
    }

    /// Return the number of bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    /// Return the number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    fn u32(&mut self, field: Field) -> Result<u32, DecodeError> {
        self.inner.read_u32().map_err(|e| DecodeError::at(e, field))
    }

    fn i32(&mut self, field: Field) -> Result<i32, DecodeError> {
        self.inner.read_i32().map_err(|e| DecodeError::at(e, field))
    }

    fn string(&mut self, field: Field) -> Result<String, DecodeError> {
        self.inner.read_string().map_err(|e| DecodeError::at(e, field))
    }
}

/// Capacity to reserve for `count` items of at least `min_size` bytes
/// each, given `remaining` unread bytes. A count the buffer cannot
/// possibly satisfy is clamped so it cannot drive a huge allocation.
#[must_use]
pub fn capacity_hint(count: u32, remaining: usize, min_size: usize) -> usize {
    usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(remaining / min_size)
}
