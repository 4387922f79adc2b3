#![no_main]

use emdict_wire::ByteReader;
use libfuzzer_sys::fuzz_target;

// Fuzz target: ByteReader::read_string.
//
// The cursor must never move past the buffer, and a failed read must
// leave it within bounds.
fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    while reader.read_string().is_ok() {}
    assert!(reader.position() <= data.len());
});
