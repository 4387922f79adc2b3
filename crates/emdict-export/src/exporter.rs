use emdict_types::Record;
use tracing::debug;

use crate::config::{ExportConfig, ExportFormat};
use crate::error::ExportError;
use crate::render_json::JsonRenderer;
use crate::render_lines::LinesRenderer;
use crate::render_tsv::TsvRenderer;

/// Core export interface: renders decoded records into interchange text.
///
/// Implementations are stateless; everything comes through
/// [`ExportConfig`].
///
/// ```text
/// &[Record] ──▶ Exporter::export() ──▶ String
///                      │
///                ExportConfig
///                (format, projection, pretty)
/// ```
pub trait Exporter {
    /// Render a decoded dictionary.
    ///
    /// An empty slice is valid input and renders as the format's empty
    /// document (`[]` for JSON, the empty string otherwise).
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if a record cannot be represented in the
    /// chosen format.
    fn export(&self, records: &[Record], config: &ExportConfig) -> Result<String, ExportError>;
}

/// Default exporter that dispatches on [`ExportConfig::format`].
///
/// ```text
/// ┌─────────────┐     ┌──────────┐     ┌───────────────┐
/// │ &[Record]   │────▶│ dispatch │────▶│ JsonRenderer  │
/// │             │     │          │     │ LinesRenderer │
/// │             │     │          │     │ TsvRenderer   │
/// └─────────────┘     └──────────┘     └───────────────┘
///                          │                   │
///                    ExportConfig        String output
/// ```
pub struct DefaultExporter;

impl Exporter for DefaultExporter {
    fn export(&self, records: &[Record], config: &ExportConfig) -> Result<String, ExportError> {
        debug!(
            records = records.len(),
            format = ?config.format,
            projection = ?config.projection,
            "exporting records"
        );

        match config.format {
            ExportFormat::Json => JsonRenderer::render_all(records, config.projection, config.pretty),
            ExportFormat::JsonLines => LinesRenderer::render_all(records, config.projection),
            ExportFormat::Tsv => TsvRenderer::render_all(records, config.projection),
        }
    }
}
