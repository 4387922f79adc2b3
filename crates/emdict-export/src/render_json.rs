use emdict_types::Record;

use crate::config::Projection;
use crate::entry::Entry;
use crate::error::ExportError;

/// JSON renderer: the whole dictionary as one array.
///
/// Non-ASCII text is written as-is, never `\u` escaped, so emoji stay
/// readable. Pretty output indents by two spaces:
///
/// ```text
/// [
///   {
///     "emoji": "😀",
///     "category": 1,
///     "name": "grinning face"
///   }
/// ]
/// ```
///
/// An empty dictionary renders as `[]`.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render every record as one JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if serde_json fails.
    pub fn render_all(records: &[Record], projection: Projection, pretty: bool) -> Result<String, ExportError> {
        let entries: Vec<Entry<'_>> = records
            .iter()
            .map(|r| Entry::project(r, projection))
            .collect();

        let text = if pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };
        Ok(text)
    }
}
