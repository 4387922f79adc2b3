use crate::record::Record;

/// Keyword lookup over a decoded dictionary.
///
/// Returns every record whose description or tags contain `query`
/// (case-insensitive), in dictionary order. Leading and trailing
/// whitespace in the query is ignored.
pub fn search<'a>(records: &'a [Record], query: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
  let query = query.trim();
  records.iter().filter(move |record| record.matches(query))
}
