#![warn(clippy::pedantic)]

pub mod record;
pub mod search;

pub use record::Record;
pub use search::search;
