use emdict_types::Record;
use emdict_wire::header::{SIZE_HEADER_LEN, SizeHeader};
use emdict_wire::reader::WORD_SIZE;
use emdict_wire::writer::{put_i32, put_string, put_u32};
use emdict_wire::Codec;
use tracing::debug;

use crate::compression::{compress, default_level};
use crate::error::EncodeError;

/// Dictionary encoder: builds a record stream or a full container.
///
/// Records are appended with [`add_record`](Self::add_record) or
/// [`push`](Self::push); [`with_tag`](Self::with_tag) and
/// [`with_tags`](Self::with_tags) attach tags to the most recently added
/// record. Every builder method returns `&mut Self` for chaining.
///
/// # Usage
///
/// ```rust
/// use emdict_encoder::{Codec, DictEncoder};
///
/// let container = DictEncoder::new()
///     .add_record("😀", 1, "grinning face")
///     .with_tags(["smile", "happy"])
///     .add_record("🔥", 2, "fire")
///     .codec(Codec::Zlib)
///     .encode()
///     .unwrap();
/// assert_eq!(&container[..4], &[0, 0, 0, 79]);
/// ```
///
/// # Output layout
///
/// [`encode_raw`](Self::encode_raw) produces the record stream alone:
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────┐
/// │ [4 bytes]    │ record count (u32 LE)                        │
/// │ [N bytes]    │ record 0: symbol, description, category,     │
/// │              │           tag count, tags                    │
/// │ ...          │                                              │
/// └──────────────┴──────────────────────────────────────────────┘
/// ```
///
/// [`encode`](Self::encode) wraps it in the container:
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────┐
/// │ [4 bytes]    │ raw stream length (u32 BE)                   │
/// │ [N bytes]    │ codec(raw stream)                            │
/// └──────────────┴──────────────────────────────────────────────┘
/// ```
pub struct DictEncoder {
    records: Vec<Record>,
    codec: Codec,
    /// `None` means the codec's default level.
    level: Option<i32>,
    /// Set when a tag was attached before any record existed. Reported
    /// by `encode_raw` so the builder chain itself never fails.
    orphan_tag: bool,
}

impl DictEncoder {
    /// Create an empty encoder using zlib at its default level.
    ///
    /// An encoder with no records is valid and encodes a zero count.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            codec: Codec::default(),
            level: None,
            orphan_tag: false,
        }
    }

    // ── Record addition methods ─────────────────────────────────────────

    /// Append a record with no tags.
    pub fn add_record(&mut self, symbol: &str, category: i32, description: &str) -> &mut Self {
        self.records.push(Record::new(symbol, category, description));
        self
    }

    /// Append a complete record.
    pub fn push(&mut self, record: Record) -> &mut Self {
        self.records.push(record);
        self
    }

    /// Append many complete records.
    pub fn extend<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = Record>,
    {
        self.records.extend(records);
        self
    }

    // ── Modifier methods ────────────────────────────────────────────────

    /// Attach a tag to the most recently added record.
    ///
    /// Called with no records, the mistake is reported as
    /// [`EncodeError::OrphanTag`] at encode time.
    pub fn with_tag(&mut self, tag: &str) -> &mut Self {
        self.with_tags([tag])
    }

    /// Attach several tags to the most recently added record.
    pub fn with_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.records.last_mut() {
            Some(record) => record.tags.extend(tags.into_iter().map(Into::into)),
            None => self.orphan_tag = true,
        }
        self
    }

    /// Select the payload codec used by [`encode`](Self::encode).
    pub fn codec(&mut self, codec: Codec) -> &mut Self {
        self.codec = codec;
        self
    }

    /// Override the codec's default compression level.
    pub fn compression_level(&mut self, level: i32) -> &mut Self {
        self.level = Some(level);
        self
    }

    /// Records added so far.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    // ── Serialization ───────────────────────────────────────────────────

    /// Serialize the records as a raw (uncompressed) record stream.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::OrphanTag`] if a tag was attached with no record.
    /// - [`EncodeError::TooManyRecords`] / [`EncodeError::TooManyTags`]
    ///   if a count does not fit a `u32`.
    /// - [`EncodeError::FieldTooLong`] if a string does not fit a `u32`
    ///   length prefix.
    pub fn encode_raw(&self) -> Result<Vec<u8>, EncodeError> {
        if self.orphan_tag {
            return Err(EncodeError::OrphanTag);
        }

        let count = u32::try_from(self.records.len()).map_err(|_| EncodeError::TooManyRecords {
            count: self.records.len(),
        })?;

        let mut buf = Vec::with_capacity(WORD_SIZE + self.estimated_size());
        put_u32(&mut buf, count);

        for (index, record) in self.records.iter().enumerate() {
            write_record(&mut buf, index, record)?;
        }

        debug!(records = count, bytes = buf.len(), "encoded record stream");
        Ok(buf)
    }

    /// Serialize and compress the records into a container.
    ///
    /// # Errors
    ///
    /// All errors from [`encode_raw`](Self::encode_raw), plus
    /// [`EncodeError::PayloadTooLarge`] if the raw stream does not fit
    /// the size header and [`EncodeError::Compress`] if the codec fails.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let raw = self.encode_raw()?;
        let header = SizeHeader::new(
            u32::try_from(raw.len()).map_err(|_| EncodeError::PayloadTooLarge { len: raw.len() })?,
        );

        let level = self.level.unwrap_or_else(|| default_level(self.codec));
        let payload = compress(&raw, self.codec, level).map_err(EncodeError::Compress)?;

        let mut container = vec![0u8; SIZE_HEADER_LEN];
        header.write_to(&mut container)?;
        container.extend_from_slice(&payload);

        debug!(
            codec = %self.codec,
            level,
            raw = raw.len(),
            compressed = payload.len(),
            "encoded container"
        );
        Ok(container)
    }

    fn estimated_size(&self) -> usize {
        self.records
            .iter()
            .map(|r| {
                4 * WORD_SIZE
                    + r.symbol.len()
                    + r.description.len()
                    + r.tags.iter().map(|t| WORD_SIZE + t.len()).sum::<usize>()
            })
            .sum()
    }
}

impl Default for DictEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Append one record in wire order: symbol, description, category, tag
/// count, tags.
fn write_record(buf: &mut Vec<u8>, index: usize, record: &Record) -> Result<(), EncodeError> {
    write_field(buf, "symbol", &record.symbol)?;
    write_field(buf, "description", &record.description)?;
    put_i32(buf, record.category);

    let tag_count = u32::try_from(record.tags.len()).map_err(|_| EncodeError::TooManyTags {
        record: index,
        count: record.tags.len(),
    })?;
    put_u32(buf, tag_count);
    for tag in &record.tags {
        write_field(buf, "tag", tag)?;
    }
    Ok(())
}

fn write_field(buf: &mut Vec<u8>, field: &'static str, value: &str) -> Result<(), EncodeError> {
    put_string(buf, value).map_err(|_| EncodeError::FieldTooLong {
        field,
        len: value.len(),
    })
}
