use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use emdict_decoder::{Codec, DecodeOptions, DecodedDictionary, DictDecoder, TrailingBytes};

/// Build decoder options from the global flags.
///
/// # Errors
///
/// Returns an error for an unrecognised codec name.
pub fn decode_options(codec: &str, strict: bool, max_size: Option<usize>) -> Result<DecodeOptions> {
    let mut options = DecodeOptions::default().with_codec(parse_codec(codec)?);
    if strict {
        options.trailing_bytes = TrailingBytes::Reject;
    }
    if let Some(limit) = max_size {
        options = options.with_max_decompressed_size(limit);
    }
    Ok(options)
}

/// Parses the `--codec` string to a [`Codec`].
///
/// # Errors
///
/// Returns an error for unrecognised codec names.
fn parse_codec(s: &str) -> Result<Codec> {
    Codec::from_name(s).ok_or_else(|| anyhow!("unknown codec {s:?}, expected zlib|zstd"))
}

/// Read a container from disk and decode it completely.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn decode_file(path: &Path, options: &DecodeOptions) -> Result<DecodedDictionary> {
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    DictDecoder::decode_container_with(&bytes, options)
        .with_context(|| format!("failed to decode {}", path.display()))
}
