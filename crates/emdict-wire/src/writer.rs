use crate::error::WireError;

// ── Encoding helpers ──────────────────────────────────────────────────
//
// Each helper appends one primitive of the record grammar to a `Vec<u8>`.
// They are the exact inverse of the `ByteReader` primitives: integers are
// little-endian, strings are a u32 length followed by raw UTF-8.

/// Append a little-endian `u32`.
pub fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Append a little-endian `i32`.
pub fn put_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Append a count or length as a `u32`.
///
/// # Errors
///
/// Returns [`WireError::LengthOverflow`] if `len` exceeds `u32::MAX`.
pub fn put_len(buf: &mut Vec<u8>, len: usize) -> Result<(), WireError> {
    let value = u32::try_from(len).map_err(|_| WireError::LengthOverflow { len })?;
    put_u32(buf, value);
    Ok(())
}

/// Append a length-prefixed UTF-8 string.
///
/// Wire layout:
/// ```text
///   length (u32 LE) │ bytes [length]
/// ```
///
/// # Errors
///
/// Returns [`WireError::LengthOverflow`] if the string is longer than
/// `u32::MAX` bytes.
pub fn put_string(buf: &mut Vec<u8>, value: &str) -> Result<(), WireError> {
    put_len(buf, value.len())?;
    buf.extend_from_slice(value.as_bytes());
    Ok(())
}
