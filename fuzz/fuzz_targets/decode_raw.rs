#![no_main]

use emdict_decoder::{DecoderEvent, DictDecoder, RecordStream};
use libfuzzer_sys::fuzz_target;

// Fuzz target: raw record stream decoding.
//
// Catches bugs in:
// - Length prefixes near u32::MAX
// - Record and tag counts larger than the buffer
// - UTF-8 validation
//
// Also checks that the lazy stream and the collecting decoder agree.
fuzz_target!(|data: &[u8]| {
    let collected = DictDecoder::decode(data);

    let mut streamed = Vec::new();
    let mut failed = false;
    for event in RecordStream::new(data) {
        match event {
            Ok(DecoderEvent::Record(record)) => streamed.push(record),
            Ok(DecoderEvent::Count(_)) => {}
            Err(_) => failed = true,
        }
    }

    match collected {
        Ok(decoded) => {
            assert!(!failed);
            assert_eq!(decoded.records, streamed);
        }
        Err(_) => assert!(failed),
    }
});
