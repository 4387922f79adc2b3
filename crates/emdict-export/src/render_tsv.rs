use std::fmt::Write;

use emdict_types::Record;

use crate::config::Projection;
use crate::error::ExportError;

/// Separator between tags in the fourth TSV column.
pub const TAG_SEPARATOR: &str = ", ";

/// TSV renderer: one tab-separated line per record.
///
/// ```text
/// 😀<TAB>1<TAB>grinning face
/// 🔥<TAB>2<TAB>fire<TAB>hot, flame      (Projection::Full)
/// ```
///
/// There is no header row and no quoting. A field that contains a tab
/// or a line break would corrupt the table, so it is rejected instead.
pub struct TsvRenderer;

impl TsvRenderer {
    /// Render every record as a TSV row.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsafeField`] for the first field holding
    /// `\t`, `\n` or `\r`.
    pub fn render_all(records: &[Record], projection: Projection) -> Result<String, ExportError> {
        let mut out = String::new();
        for (index, record) in records.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            Self::render_row(&mut out, index, record, projection)?;
        }
        Ok(out)
    }

    fn render_row(out: &mut String, index: usize, record: &Record, projection: Projection) -> Result<(), ExportError> {
        let symbol = checked(&record.symbol, index, "symbol")?;
        let description = checked(&record.description, index, "description")?;
        let _ = write!(out, "{symbol}\t{}\t{description}", record.category);

        if projection.includes_tags() {
            for tag in &record.tags {
                checked(tag, index, "tag")?;
            }
            out.push('\t');
            out.push_str(&record.tags.join(TAG_SEPARATOR));
        }
        Ok(())
    }
}

fn checked<'a>(value: &'a str, index: usize, field: &'static str) -> Result<&'a str, ExportError> {
    if value.contains(['\t', '\n', '\r']) {
        return Err(ExportError::UnsafeField { index, field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_three_columns() {
        let records = [
            Record::new("😀", 1, "grinning face"),
            Record::new("🎉", -3, "party popper"),
        ];
        let text = TsvRenderer::render_all(&records, Projection::Interchange).unwrap();
        assert_eq!(text, "😀\t1\tgrinning face\n🎉\t-3\tparty popper");
    }

    #[test]
    fn full_projection_adds_tag_column() {
        let records = [
            Record::new("🔥", 2, "fire").with_tags(["hot", "flame"]),
            Record::new("😀", 1, "grinning face"),
        ];
        let text = TsvRenderer::render_all(&records, Projection::Full).unwrap();
        assert_eq!(text, "🔥\t2\tfire\thot, flame\n😀\t1\tgrinning face\t");
    }

    #[test]
    fn tab_in_description_is_rejected() {
        let records = [Record::new("a", 0, "ok"), Record::new("b", 0, "not\tok")];
        let result = TsvRenderer::render_all(&records, Projection::Interchange);
        assert!(matches!(
            result,
            Err(ExportError::UnsafeField {
                index: 1,
                field: "description"
            })
        ));
    }

    #[test]
    fn newline_in_tag_is_rejected_only_when_tags_are_written() {
        let records = [Record::new("a", 0, "b").with_tags(["x\ny"])];
        assert!(TsvRenderer::render_all(&records, Projection::Interchange).is_ok());
        assert!(matches!(
            TsvRenderer::render_all(&records, Projection::Full),
            Err(ExportError::UnsafeField { field: "tag", .. })
        ));
    }
}
