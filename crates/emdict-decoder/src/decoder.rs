use emdict_types::Record;
use tracing::debug;

use crate::config::{DecodeOptions, TrailingBytes};
use crate::decompression::decompress;
use crate::error::DecodeError;
use crate::record_reader::{MIN_RECORD_SIZE, capacity_hint};
use crate::streaming::{DecoderEvent, RecordStream};

/// The result of decoding a dictionary.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │ DecodedDictionary                                       │
/// │   records:        Vec<Record> ← wire order, all fields  │
/// │   trailing_bytes: usize       ← unread bytes at the end │
/// └─────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedDictionary {
    /// Records in the order they appeared on the wire. Duplicates are
    /// kept.
    pub records: Vec<Record>,

    /// Bytes left over after the last declared record. Always zero when
    /// decoding with [`TrailingBytes::Reject`].
    pub trailing_bytes: usize,
}

impl DecodedDictionary {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Synchronous dictionary decoder.
///
/// Two entry points, one per layer:
///
/// ```text
/// ┌────────────────────────┬──────────────────────────────────────────┐
/// │ Method                 │ Input                                    │
/// ├────────────────────────┼──────────────────────────────────────────┤
/// │ decode / decode_with   │ raw record stream (already decompressed) │
/// │ decode_container[_with]│ size header + compressed payload         │
/// └────────────────────────┴──────────────────────────────────────────┘
/// ```
///
/// Decoding is all-or-nothing: on any error no records are returned.
/// For partial progress use [`RecordStream`] directly.
///
/// # Example
///
/// ```rust
/// use emdict_encoder::DictEncoder;
/// use emdict_decoder::DictDecoder;
///
/// let container = DictEncoder::new()
///     .add_record("😀", 1, "grinning face")
///     .encode()
///     .unwrap();
///
/// let decoded = DictDecoder::decode_container(&container).unwrap();
/// assert_eq!(decoded.records[0].description, "grinning face");
/// ```
pub struct DictDecoder;

impl DictDecoder {
    /// Decode a raw (decompressed) record stream with default options.
    ///
    /// Bytes after the last record are ignored and reported in
    /// [`DecodedDictionary::trailing_bytes`].
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnexpectedEof`] if any field is cut short.
    /// - [`DecodeError::InvalidEncoding`] if a string is not UTF-8.
    pub fn decode(raw: &[u8]) -> Result<DecodedDictionary, DecodeError> {
        Self::decode_with(raw, &DecodeOptions::default())
    }

    /// Decode a raw record stream.
    ///
    /// Only `options.trailing_bytes` applies at this layer.
    ///
    /// # Errors
    ///
    /// All errors from [`decode`](Self::decode), plus
    /// [`DecodeError::TrailingData`] when bytes remain and
    /// `options.trailing_bytes` is [`TrailingBytes::Reject`].
    pub fn decode_with(raw: &[u8], options: &DecodeOptions) -> Result<DecodedDictionary, DecodeError> {
        let mut stream = RecordStream::new(raw);
        let mut records = Vec::new();

        while let Some(event) = stream.next() {
            match event? {
                DecoderEvent::Count(count) => {
                    records.reserve(capacity_hint(count, stream.remaining(), MIN_RECORD_SIZE));
                }
                DecoderEvent::Record(record) => records.push(record),
            }
        }

        let trailing_bytes = stream.remaining();
        if trailing_bytes > 0 {
            match options.trailing_bytes {
                TrailingBytes::Reject => {
                    return Err(DecodeError::TrailingData {
                        offset: stream.position(),
                        extra_bytes: trailing_bytes,
                    });
                }
                TrailingBytes::Ignore => {
                    debug!(
                        offset = stream.position(),
                        trailing_bytes, "ignoring bytes after last record"
                    );
                }
            }
        }

        debug!(records = records.len(), "decoded record stream");
        Ok(DecodedDictionary {
            records,
            trailing_bytes,
        })
    }

    /// Decompress and decode a container with default options.
    ///
    /// # Errors
    ///
    /// Any error from [`decompress`](crate::decompress) or
    /// [`decode`](Self::decode).
    pub fn decode_container(blob: &[u8]) -> Result<DecodedDictionary, DecodeError> {
        Self::decode_container_with(blob, &DecodeOptions::default())
    }

    /// Decompress and decode a container.
    ///
    /// # Errors
    ///
    /// Any error from [`decompress`](crate::decompress) or
    /// [`decode_with`](Self::decode_with).
    pub fn decode_container_with(
        blob: &[u8],
        options: &DecodeOptions,
    ) -> Result<DecodedDictionary, DecodeError> {
        let raw = decompress(blob, options)?;
        Self::decode_with(&raw, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use emdict_encoder::DictEncoder;
    use emdict_wire::Codec;

    fn bytes(hex_str: &str) -> Vec<u8> {
        hex::decode(hex_str).unwrap()
    }

    #[test]
    fn decodes_single_record() {
        // count 1, "😀", "grinning face", category 1, no tags
        let raw = bytes(concat!(
            "01000000",
            "04000000f09f9880",
            "0d0000006772696e6e696e672066616365",
            "01000000",
            "00000000",
        ));
        let decoded = DictDecoder::decode(&raw).unwrap();
        assert_eq!(decoded.records, vec![Record::new("😀", 1, "grinning face")]);
        assert_eq!(decoded.trailing_bytes, 0);
    }

    #[test]
    fn zero_records() {
        let decoded = DictDecoder::decode(&[0, 0, 0, 0]).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn empty_input_is_eof_on_count() {
        let err = DictDecoder::decode(&[]).unwrap_err();
        assert_eq!(err.field(), Some(Field::RecordCount));
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn huge_count_fails_without_allocating() {
        // count = u32::MAX, then nothing
        let err = DictDecoder::decode(&bytes("ffffffff")).unwrap_err();
        assert_eq!(err.field(), Some(Field::Symbol { record: 0 }));
    }

    #[test]
    fn collects_every_streamed_record() {
        let mut encoder = DictEncoder::new();
        for i in 0..200 {
            encoder.add_record(&format!("s{i}"), i, &format!("record {i}"));
        }
        let raw = encoder.encode_raw().unwrap();

        let decoded = DictDecoder::decode(&raw).unwrap();
        let streamed: Vec<Record> = RecordStream::new(&raw)
            .filter_map(|event| match event.unwrap() {
                DecoderEvent::Record(record) => Some(record),
                DecoderEvent::Count(_) => None,
            })
            .collect();
        assert_eq!(decoded.len(), 200);
        assert_eq!(decoded.records, streamed);
        assert_eq!(decoded.records[199].category, 199);
    }

    #[test]
    fn count_beyond_buffer_fails_after_last_present_record() {
        // count 3, one minimal record present
        let raw = bytes("0300000000000000000000000000000000000000");
        let err = DictDecoder::decode(&raw).unwrap_err();
        assert_eq!(err.field(), Some(Field::Symbol { record: 1 }));
        assert_eq!(err.offset(), Some(20));
    }

    #[test]
    fn huge_string_length_is_eof() {
        let raw = bytes("01000000ffffffff");
        let err = DictDecoder::decode(&raw).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedEof {
                offset: 8,
                needed: 0xffff_ffff,
                available: 0,
                ..
            }
        ));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let raw = bytes("0100000002000000c328");
        let err = DictDecoder::decode(&raw).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidEncoding {
                field: Field::Symbol { record: 0 },
                offset: 8,
                ..
            }
        ));
    }

    #[test]
    fn trailing_bytes_ignored_by_default() {
        let mut raw = DictEncoder::new().add_record("🔥", 2, "fire").encode_raw().unwrap();
        raw.extend_from_slice(&[0xde, 0xad]);

        let decoded = DictDecoder::decode(&raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.trailing_bytes, 2);
    }

    #[test]
    fn trailing_bytes_rejected_when_strict() {
        let mut raw = DictEncoder::new().add_record("🔥", 2, "fire").encode_raw().unwrap();
        let end = raw.len();
        raw.extend_from_slice(&[0xde, 0xad]);

        let err = DictDecoder::decode_with(&raw, &DecodeOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TrailingData { offset, extra_bytes: 2 } if offset == end
        ));
    }

    #[test]
    fn roundtrip_with_tags() {
        let raw = DictEncoder::new()
            .add_record("🎉", 3, "party popper")
            .with_tags(["celebration", "tada"])
            .add_record("😀", 1, "grinning face")
            .encode_raw()
            .unwrap();

        let decoded = DictDecoder::decode(&raw).unwrap();
        assert_eq!(decoded.records[0].tags, vec!["celebration", "tada"]);
        assert!(decoded.records[1].tags.is_empty());
    }

    #[test]
    fn container_roundtrip_both_codecs() {
        for codec in [Codec::Zlib, Codec::Zstd] {
            let blob = DictEncoder::new()
                .add_record("😀", 1, "grinning face")
                .add_record("😀", 1, "grinning face")
                .codec(codec)
                .encode()
                .unwrap();

            let options = DecodeOptions::default().with_codec(codec);
            let decoded = DictDecoder::decode_container_with(&blob, &options).unwrap();
            assert_eq!(decoded.len(), 2, "codec {codec}");
            assert_eq!(decoded.records[0], decoded.records[1]);
        }
    }

    #[test]
    fn decoding_is_idempotent() {
        let blob = DictEncoder::new()
            .add_record("🔥", 2, "fire")
            .with_tag("hot")
            .encode()
            .unwrap();
        let first = DictDecoder::decode_container(&blob).unwrap();
        let second = DictDecoder::decode_container(&blob).unwrap();
        assert_eq!(first, second);
    }
}
