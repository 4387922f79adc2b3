/// Errors that can occur while exporting records.
///
/// ```text
/// ┌──────────────┬───────────────────────────────────────────────────┐
/// │ Variant      │ Cause                                             │
/// ├──────────────┼───────────────────────────────────────────────────┤
/// │ Serialize    │ serde_json failed to write an entry               │
/// │ UnsafeField  │ TSV field contains a tab or line break            │
/// └──────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    #[error("{field} of record {index} contains a tab or line break and cannot be written as TSV")]
    UnsafeField { index: usize, field: &'static str },
}
