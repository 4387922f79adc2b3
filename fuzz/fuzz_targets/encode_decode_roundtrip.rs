#![no_main]

use arbitrary::Arbitrary;
use emdict_decoder::{Codec, DecodeOptions, DictDecoder};
use emdict_encoder::DictEncoder;
use emdict_types::Record;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzRecord {
    symbol: String,
    category: i32,
    description: String,
    tags: Vec<String>,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    records: Vec<FuzzRecord>,
    use_zstd: bool,
    level: u8,
}

// Fuzz target: arbitrary records → encoder → container → decoder.
//
// The decoded sequence must equal the encoded one exactly.
fuzz_target!(|input: FuzzInput| {
    let records: Vec<Record> = input
        .records
        .into_iter()
        .map(|r| Record::new(r.symbol, r.category, r.description).with_tags(r.tags))
        .collect();

    let codec = if input.use_zstd { Codec::Zstd } else { Codec::Zlib };
    let blob = DictEncoder::new()
        .extend(records.iter().cloned())
        .codec(codec)
        .compression_level(i32::from(input.level % 10))
        .encode()
        .unwrap();

    let options = DecodeOptions::strict().with_codec(codec);
    let decoded = DictDecoder::decode_container_with(&blob, &options).unwrap();
    assert_eq!(decoded.records, records);
});
