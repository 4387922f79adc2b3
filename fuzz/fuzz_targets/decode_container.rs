#![no_main]

use emdict_decoder::{Codec, DecodeOptions, DictDecoder};
use libfuzzer_sys::fuzz_target;

// Fuzz target: DictDecoder::decode_container_with on arbitrary bytes.
//
// Input format:
//   byte 0: codec selector (even = zlib, odd = zstd)
//   bytes 1..: container
//
// The size limit is kept small so hostile headers are refused early
// instead of exhausting memory.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, blob)) = data.split_first() else {
        return;
    };
    let codec = if selector % 2 == 0 { Codec::Zlib } else { Codec::Zstd };
    let options = DecodeOptions::default()
        .with_codec(codec)
        .with_max_decompressed_size(1 << 20);

    let _ = DictDecoder::decode_container_with(blob, &options);
});
