/// One dictionary entry.
///
/// ```text
/// ┌─────────────┬────────┬──────────────────────────────────────────┐
/// │ Field       │ Type   │ Wire order / meaning                     │
/// ├─────────────┼────────┼──────────────────────────────────────────┤
/// │ symbol      │ String │ 1st: the glyph, e.g. "😀"                │
/// │ description │ String │ 2nd: label, e.g. "grinning face"         │
/// │ category    │ i32    │ 3rd: opaque category code                │
/// │ tags        │ Vec    │ 4th: count + strings, wire order kept    │
/// └─────────────┴────────┴──────────────────────────────────────────┘
/// ```
///
/// Note the wire order puts `description` before `category`. The struct
/// field order follows the interchange projection instead
/// (symbol, category, description).
///
/// Decoders build a `Record` only after every field has been read, so a
/// half-filled record is never observable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Record {
  pub symbol: String,
  pub category: i32,
  pub description: String,
  pub tags: Vec<String>,
}

impl Record {
  /// Build a record without tags.
  #[must_use]
  pub fn new(symbol: impl Into<String>, category: i32, description: impl Into<String>) -> Self {
    Self {
      symbol: symbol.into(),
      category,
      description: description.into(),
      tags: Vec::new(),
    }
  }

  /// Replace the tag list, keeping the iterator's order.
  #[must_use]
  pub fn with_tags<I, S>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.tags = tags.into_iter().map(Into::into).collect();
    self
  }

  /// Case-insensitive substring match against the description and every
  /// tag. An empty query matches everything.
  #[must_use]
  pub fn matches(&self, query: &str) -> bool {
    let needle = query.to_lowercase();
    self.description.to_lowercase().contains(&needle)
      || self
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(&needle))
  }
}
