#![warn(clippy::pedantic)]

pub mod codec;
pub mod error;
pub mod header;
pub mod reader;
pub mod writer;

pub use codec::Codec;
pub use error::WireError;
pub use header::SizeHeader;
pub use reader::ByteReader;
