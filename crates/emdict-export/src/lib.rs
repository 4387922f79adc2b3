#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod exporter;
pub mod render_json;
pub mod render_lines;
pub mod render_tsv;

mod entry;

pub use config::{ExportConfig, ExportFormat, Projection};
pub use error::ExportError;
pub use exporter::{DefaultExporter, Exporter};
