use crate::error::WireError;

/// Size of the container's leading size header.
pub const SIZE_HEADER_LEN: usize = 4;

/// The 4-byte header in front of every compressed container.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────────────┐
/// │ Offset │ Size    │ Description                              │
/// ├────────┼─────────┼──────────────────────────────────────────┤
/// │ 0x00   │ 4 bytes │ Uncompressed length, big-endian u32      │
/// │ 0x04   │ N bytes │ Compressed payload (codec-specific)      │
/// └────────┴─────────┴──────────────────────────────────────────┘
/// ```
///
/// This header is the only big-endian field in the format. Everything
/// inside the decompressed record stream is little-endian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeHeader {
    pub uncompressed_len: u32,
}

impl SizeHeader {
    #[must_use]
    pub fn new(uncompressed_len: u32) -> Self {
        Self { uncompressed_len }
    }

    /// Write the 4-byte header into the front of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if `buf` is shorter than
    /// [`SIZE_HEADER_LEN`].
    pub fn write_to(&self, buf: &mut [u8]) -> Result<(), WireError> {
        if buf.len() < SIZE_HEADER_LEN {
            return Err(WireError::UnexpectedEof {
                offset: 0,
                needed: SIZE_HEADER_LEN,
                available: buf.len(),
            });
        }

        buf[..SIZE_HEADER_LEN].copy_from_slice(&self.uncompressed_len.to_be_bytes());
        Ok(())
    }

    /// Parse the header from the first 4 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if `buf` is shorter than
    /// [`SIZE_HEADER_LEN`].
    pub fn read_from(buf: &[u8]) -> Result<Self, WireError> {
        let Some(raw) = buf.first_chunk::<SIZE_HEADER_LEN>() else {
            return Err(WireError::UnexpectedEof {
                offset: 0,
                needed: SIZE_HEADER_LEN,
                available: buf.len(),
            });
        };

        Ok(Self {
            uncompressed_len: u32::from_be_bytes(*raw),
        })
    }

    /// The declared length as a `usize`, for sizing buffers.
    #[must_use]
    pub fn len(&self) -> usize {
        // u32 -> usize is lossless on every target we build for.
        self.uncompressed_len as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uncompressed_len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian() {
        let header = SizeHeader::read_from(&[0x00, 0x00, 0x01, 0x02, 0xAA]).unwrap();
        assert_eq!(header.uncompressed_len, 0x0102);
        assert_eq!(header.len(), 258);
    }

    #[test]
    fn writes_big_endian() {
        let mut buf = [0u8; SIZE_HEADER_LEN];
        SizeHeader::new(0x0A0B_0C0D).write_to(&mut buf).unwrap();
        assert_eq!(hex::encode(buf), "0a0b0c0d");
    }

    #[test]
    fn roundtrip_header() {
        let header = SizeHeader::new(u32::MAX);
        let mut buf = [0u8; 8];
        header.write_to(&mut buf).unwrap();
        assert_eq!(SizeHeader::read_from(&buf).unwrap(), header);
    }

    #[test]
    fn zero_header_is_empty() {
        let header = SizeHeader::read_from(&[0, 0, 0, 0]).unwrap();
        assert!(header.is_empty());
    }

    #[test]
    fn reject_buffer_too_short() {
        let result = SizeHeader::read_from(&[0x00, 0x01, 0x02]);
        assert!(matches!(
            result,
            Err(WireError::UnexpectedEof {
                offset: 0,
                needed: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn write_rejects_short_buffer() {
        let mut buf = [0u8; 2];
        let result = SizeHeader::new(1).write_to(&mut buf);
        assert!(matches!(result, Err(WireError::UnexpectedEof { .. })));
    }
}
