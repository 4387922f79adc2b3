/// Implementation of `emdict search`.
///
/// Decodes a dictionary and prints every record whose description or
/// tags contain the query, case-insensitively, in dictionary order:
///
/// ```text
/// 🔥  fire  [hot, flame]
/// 🧯  fire extinguisher
/// ```
use anyhow::Result;
use emdict_decoder::DecodeOptions;
use emdict_types::{Record, search};

use crate::SearchArgs;
use crate::options::decode_file;

/// Run the `emdict search` command.
///
/// A search with no matches is not an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn run(args: &SearchArgs, options: &DecodeOptions) -> Result<()> {
    let decoded = decode_file(&args.file, options)?;

    let limit = args.limit.unwrap_or(usize::MAX);
    for record in search(&decoded.records, &args.query).take(limit) {
        println!("{}", format_match(record));
    }

    Ok(())
}

fn format_match(record: &Record) -> String {
    if record.tags.is_empty() {
        format!("{}  {}", record.symbol, record.description)
    } else {
        format!(
            "{}  {}  [{}]",
            record.symbol,
            record.description,
            record.tags.join(", ")
        )
    }
}
