use std::iter::FusedIterator;

use emdict_types::Record;
use tracing::trace;

use crate::error::DecodeError;
use crate::record_reader::RecordReader;

/// Events emitted by the record stream.
///
/// The stream yields a `Count` event first, then one `Record` event per
/// record in wire order, then ends.
///
/// ```text
///   Count(3)
///   Record(Record)
///   Record(Record)
///   Record(Record)
///   ... (stream ends)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecoderEvent {
    /// The leading record count has been read.
    Count(u32),

    /// A record has been fully decoded.
    Record(Record),
}

/// Lazy decoder: yields records one at a time from a raw buffer.
///
/// Where [`DictDecoder::decode`](crate::DictDecoder::decode) is
/// all-or-nothing, `RecordStream` hands out each record as soon as its
/// last field is read. A consumer that wants to show progress up to a
/// corrupt record (the `inspect` command does) can keep everything it
/// received before the `Err`.
///
/// After the first error the stream yields nothing more.
///
/// # Example
///
/// ```rust
/// use emdict_decoder::{DecoderEvent, RecordStream};
///
/// let raw = [0u8, 0, 0, 0];
/// let mut stream = RecordStream::new(&raw);
/// assert_eq!(stream.next().unwrap().unwrap(), DecoderEvent::Count(0));
/// assert!(stream.next().is_none());
/// ```
pub struct RecordStream<'a> {
    reader: RecordReader<'a>,
    state: StreamState,
}

/// Internal state machine for the record stream.
///
/// ```text
///   ReadCount → ReadRecords → Done
/// ```
///
/// A count of zero goes straight from `ReadCount` to `Done`. Any error
/// moves to `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
    ReadCount,
    ReadRecords { next: u32, total: u32 },
    Done,
}

impl<'a> RecordStream<'a> {
    #[must_use]
    pub fn new(raw: &'a [u8]) -> Self {
        Self {
            reader: RecordReader::new(raw),
            state: StreamState::ReadCount,
        }
    }

    /// Return the number of bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Return the number of unread bytes. Once the stream has finished
    /// successfully, these are the trailing bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    /// Whether the stream has ended, either after the last record or
    /// after an error.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == StreamState::Done
    }

    fn read_count(&mut self) -> Result<DecoderEvent, DecodeError> {
        let total = self.reader.read_count()?;
        trace!(total, "record count");
        self.state = if total == 0 {
            StreamState::Done
        } else {
            StreamState::ReadRecords { next: 0, total }
        };
        Ok(DecoderEvent::Count(total))
    }

    fn read_record(&mut self, next: u32, total: u32) -> Result<DecoderEvent, DecodeError> {
        let offset = self.reader.position();
        let record = self.reader.next_record(next)?;
        trace!(index = next, offset, symbol = %record.symbol, "record decoded");

        let after = next + 1;
        self.state = if after == total {
            StreamState::Done
        } else {
            StreamState::ReadRecords { next: after, total }
        };
        Ok(DecoderEvent::Record(record))
    }
}

impl Iterator for RecordStream<'_> {
    type Item = Result<DecoderEvent, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.state {
            StreamState::ReadCount => self.read_count(),
            StreamState::ReadRecords { next, total } => self.read_record(next, total),
            StreamState::Done => return None,
        };

        if result.is_err() {
            self.state = StreamState::Done;
        }
        Some(result)
    }
}

impl FusedIterator for RecordStream<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use emdict_encoder::DictEncoder;

    #[test]
    fn yields_count_then_records() {
        let raw = DictEncoder::new()
            .add_record("😀", 1, "grinning face")
            .add_record("🔥", 2, "fire")
            .encode_raw()
            .unwrap();

        let events: Vec<_> = RecordStream::new(&raw).map(Result::unwrap).collect();
        assert_eq!(
            events,
            vec![
                DecoderEvent::Count(2),
                DecoderEvent::Record(Record::new("😀", 1, "grinning face")),
                DecoderEvent::Record(Record::new("🔥", 2, "fire")),
            ]
        );
    }

    #[test]
    fn zero_count_ends_immediately() {
        let raw = [0u8; 4];
        let mut stream = RecordStream::new(&raw);
        assert_eq!(stream.next().unwrap().unwrap(), DecoderEvent::Count(0));
        assert!(stream.is_done());
        assert!(stream.next().is_none());
    }

    #[test]
    fn keeps_records_before_error() {
        let mut raw = DictEncoder::new()
            .add_record("🎉", 3, "party popper")
            .add_record("🔥", 2, "fire")
            .encode_raw()
            .unwrap();
        raw.truncate(raw.len() - 2);

        let mut stream = RecordStream::new(&raw);
        assert!(matches!(stream.next(), Some(Ok(DecoderEvent::Count(2)))));
        assert!(matches!(stream.next(), Some(Ok(DecoderEvent::Record(_)))));
        assert!(matches!(
            stream.next(),
            Some(Err(DecodeError::UnexpectedEof { .. }))
        ));
        assert!(stream.next().is_none());
    }

    #[test]
    fn error_on_count_ends_stream() {
        let raw = [0x01u8, 0x00];
        let mut stream = RecordStream::new(&raw);
        assert!(matches!(stream.next(), Some(Err(_))));
        assert!(stream.next().is_none());
    }

    #[test]
    fn remaining_reports_trailing_bytes() {
        let mut raw = DictEncoder::new().add_record("a", 0, "b").encode_raw().unwrap();
        raw.extend_from_slice(b"xyz");

        let mut stream = RecordStream::new(&raw);
        for event in &mut stream {
            event.unwrap();
        }
        assert_eq!(stream.remaining(), 3);
    }
}
