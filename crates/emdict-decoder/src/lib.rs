#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod record_reader;
pub mod streaming;

mod decompression;

pub use config::{DEFAULT_MAX_DECOMPRESSED_SIZE, DecodeOptions, TrailingBytes};
pub use decoder::{DecodedDictionary, DictDecoder};
pub use decompression::decompress;
pub use emdict_wire::Codec;
pub use error::{DecodeError, Field};
pub use streaming::{DecoderEvent, RecordStream};
