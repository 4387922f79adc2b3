use std::io::{self, Write};

use emdict_wire::Codec;
use flate2::Compression;
use flate2::write::ZlibEncoder;

/// Default zstd compression level (1–22 scale).
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Default zlib compression level (0–9 scale), the level `qCompress`
/// picks when asked for `-1`.
pub const DEFAULT_ZLIB_LEVEL: i32 = 6;

/// The level used when the caller does not pick one.
#[must_use]
pub fn default_level(codec: Codec) -> i32 {
    match codec {
        Codec::Zlib => DEFAULT_ZLIB_LEVEL,
        Codec::Zstd => DEFAULT_ZSTD_LEVEL,
    }
}

/// Compress `data` with `codec` at `level`.
///
/// Levels outside a codec's range are clamped: zlib takes 0–9 (a
/// negative level means the default), zstd takes whatever the linked
/// library accepts.
///
/// # Example
///
/// ```rust
/// use emdict_encoder::Codec;
/// use emdict_encoder::compression::{compress, default_level};
///
/// let data = "grinning face ".repeat(100);
/// let compressed = compress(data.as_bytes(), Codec::Zlib, default_level(Codec::Zlib)).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
///
/// # Errors
///
/// Returns the codec's I/O error if compression fails.
pub fn compress(data: &[u8], codec: Codec, level: i32) -> io::Result<Vec<u8>> {
    match codec {
        Codec::Zlib => {
            let level = u32::try_from(level).map_or(DEFAULT_ZLIB_LEVEL.unsigned_abs(), |l| l.min(9));
            let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::new(level));
            encoder.write_all(data)?;
            encoder.finish()
        }
        Codec::Zstd => zstd::encode_all(data, level),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::ZlibDecoder;

    use super::*;

    #[test]
    fn zlib_output_has_zlib_header() {
        let compressed = compress(b"fire", Codec::Zlib, DEFAULT_ZLIB_LEVEL).unwrap();
        // CMF byte: deflate, 32K window
        assert_eq!(compressed[0], 0x78);
    }

    #[test]
    fn zlib_roundtrip() {
        let data = "party popper\n".repeat(50);
        let compressed = compress(data.as_bytes(), Codec::Zlib, 9).unwrap();
        let mut out = String::new();
        ZlibDecoder::new(&compressed[..]).read_to_string(&mut out).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn zstd_roundtrip() {
        let data = "grinning face\n".repeat(50);
        let compressed = compress(data.as_bytes(), Codec::Zstd, DEFAULT_ZSTD_LEVEL).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(zstd::decode_all(&compressed[..]).unwrap(), data.as_bytes());
    }

    #[test]
    fn out_of_range_zlib_levels_are_clamped() {
        let data = b"abcabcabc".repeat(10);
        for level in [-1, 0, 42] {
            let compressed = compress(&data, Codec::Zlib, level).unwrap();
            let mut out = Vec::new();
            ZlibDecoder::new(&compressed[..]).read_to_end(&mut out).unwrap();
            assert_eq!(out, data, "level {level}");
        }
    }

    #[test]
    fn empty_input_still_produces_a_stream() {
        assert!(!compress(&[], Codec::Zlib, DEFAULT_ZLIB_LEVEL).unwrap().is_empty());
        assert!(!compress(&[], Codec::Zstd, DEFAULT_ZSTD_LEVEL).unwrap().is_empty());
    }
}
