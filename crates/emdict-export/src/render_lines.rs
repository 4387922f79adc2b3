use emdict_types::Record;

use crate::config::Projection;
use crate::entry::Entry;
use crate::error::ExportError;

/// JSON Lines renderer: one compact object per record.
///
/// ```text
/// {"emoji":"😀","category":1,"name":"grinning face"}
/// {"emoji":"🔥","category":2,"name":"fire"}
/// ```
///
/// Lines are joined with `\n`; there is no trailing newline, and an
/// empty dictionary renders as the empty string.
pub struct LinesRenderer;

impl LinesRenderer {
    /// Render every record as its own JSON line.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if serde_json fails.
    pub fn render_all(records: &[Record], projection: Projection) -> Result<String, ExportError> {
        let mut lines = Vec::with_capacity(records.len());
        for record in records {
            lines.push(serde_json::to_string(&Entry::project(record, projection))?);
        }
        Ok(lines.join("\n"))
    }
}
