#![warn(clippy::pedantic)]

pub mod compression;
pub mod encoder;
pub mod error;

pub use emdict_wire::Codec;
pub use encoder::DictEncoder;
pub use error::EncodeError;
