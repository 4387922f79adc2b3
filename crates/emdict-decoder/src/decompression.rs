use std::io::{self, Read};

use emdict_wire::Codec;
use emdict_wire::header::{SIZE_HEADER_LEN, SizeHeader};
use flate2::read::ZlibDecoder;
use tracing::debug;

use crate::config::DecodeOptions;
use crate::error::DecodeError;

/// Upper bound on the up-front allocation for the output buffer. The
/// declared size is attacker-controlled, so anything beyond this grows
/// on demand as the codec actually produces bytes.
const MAX_PREALLOC: usize = 1024 * 1024;

/// Strip the size header and decompress the container payload.
///
/// ```text
///   blob ──▶ SizeHeader (BE u32 = N) ──▶ codec(payload) ──▶ exactly N bytes
/// ```
///
/// A 4-byte container declaring `N = 0` with no payload is the empty
/// buffer, matching what `qCompress` writes for empty input.
///
/// # Errors
///
/// - [`DecodeError::TruncatedHeader`] if `blob` is shorter than 4 bytes.
/// - [`DecodeError::DecompressionBomb`] if `N` exceeds
///   `options.max_decompressed_size`.
/// - [`DecodeError::CorruptPayload`] if the codec rejects the payload, or
///   the payload is missing while `N > 0`.
/// - [`DecodeError::SizeMismatch`] if the codec produced a length other
///   than `N`.
pub fn decompress(blob: &[u8], options: &DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    let header = SizeHeader::read_from(blob)
        .map_err(|_| DecodeError::TruncatedHeader { len: blob.len() })?;
    let declared = header.len();

    if declared > options.max_decompressed_size {
        return Err(DecodeError::DecompressionBomb {
            declared,
            limit: options.max_decompressed_size,
        });
    }

    let payload = &blob[SIZE_HEADER_LEN..];
    let codec = options.codec;

    if payload.is_empty() {
        if header.is_empty() {
            debug!("empty container");
            return Ok(Vec::new());
        }
        return Err(DecodeError::CorruptPayload {
            codec,
            reason: "no compressed payload after size header".to_string(),
        });
    }

    debug!(
        %codec,
        compressed = payload.len(),
        declared,
        "decompressing container payload"
    );

    match codec {
        Codec::Zlib => read_exactly(ZlibDecoder::new(payload), declared, codec),
        Codec::Zstd => {
            let decoder =
                zstd::stream::read::Decoder::new(payload).map_err(|e| corrupt(codec, &e))?;
            read_exactly(decoder, declared, codec)
        }
    }
}

/// Drain `reader` expecting exactly `declared` bytes.
///
/// At most `declared + 1` bytes are buffered. If the stream is longer,
/// the excess is counted into a sink so the error can report the real
/// length without holding it in memory.
fn read_exactly<R: Read>(mut reader: R, declared: usize, codec: Codec) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(declared.min(MAX_PREALLOC));
    (&mut reader)
        .take(declared as u64 + 1)
        .read_to_end(&mut out)
        .map_err(|e| corrupt(codec, &e))?;

    if out.len() > declared {
        let excess = io::copy(&mut reader, &mut io::sink()).map_err(|e| corrupt(codec, &e))?;
        let actual = usize::try_from(excess)
            .ok()
            .and_then(|excess| out.len().checked_add(excess))
            .unwrap_or(usize::MAX);
        return Err(DecodeError::SizeMismatch { declared, actual });
    }

    if out.len() < declared {
        return Err(DecodeError::SizeMismatch {
            declared,
            actual: out.len(),
        });
    }

    Ok(out)
}

fn corrupt(codec: Codec, err: &io::Error) -> DecodeError {
    DecodeError::CorruptPayload {
        codec,
        reason: err.to_string(),
    }
}
