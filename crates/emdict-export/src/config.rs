/// Configuration for the exporter.
///
/// Controls which interchange format decoded records are rendered into
/// and which fields each entry carries.
///
/// ```text
/// ┌────────────┬─────────────┬─────────────────────────────────────────┐
/// │ Field      │ Default     │ Purpose                                 │
/// ├────────────┼─────────────┼─────────────────────────────────────────┤
/// │ format     │ Json        │ JSON array, JSON Lines, or TSV          │
/// │ projection │ Interchange │ emoji/category/name, or those plus tags │
/// │ pretty     │ true        │ two-space indentation (JSON only)       │
/// └────────────┴─────────────┴─────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub projection: Projection,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            projection: Projection::default(),
            pretty: true,
        }
    }
}

/// Output formats.
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────────────┐
/// │ Format    │ Shape                                                │
/// ├───────────┼──────────────────────────────────────────────────────┤
/// │ Json      │ [{"emoji": "😀", "category": 1, "name": "..."}, ...] │
/// │ JsonLines │ {"emoji":"😀","category":1,"name":"..."} per line    │
/// │ Tsv       │ 😀<TAB>1<TAB>grinning face per line                  │
/// └───────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    JsonLines,
    Tsv,
}

/// Which record fields appear in each exported entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Projection {
    /// `emoji`, `category`, `name`: the interchange shape consumers of
    /// the dictionary expect.
    #[default]
    Interchange,
    /// The interchange fields plus `tags`.
    Full,
}

impl Projection {
    #[must_use]
    pub fn includes_tags(self) -> bool {
        self == Self::Full
    }
}
