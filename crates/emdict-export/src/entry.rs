use emdict_types::Record;
use serde::Serialize;

use crate::config::Projection;

/// Borrowed view of a record in interchange shape.
///
/// Field order here is the key order in the output.
#[derive(Serialize)]
pub(crate) struct Entry<'a> {
    emoji: &'a str,
    category: i32,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
}

impl<'a> Entry<'a> {
    pub(crate) fn project(record: &'a Record, projection: Projection) -> Self {
        Self {
            emoji: &record.symbol,
            category: record.category,
            name: &record.description,
            tags: projection.includes_tags().then_some(record.tags.as_slice()),
        }
    }
}
