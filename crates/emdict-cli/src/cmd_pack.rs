/// Implementation of `emdict pack`.
///
/// Parses a JSON manifest of entries and encodes them into a compressed
/// dictionary with `DictEncoder`. The manifest path is the sole
/// positional argument; the output file is required via `-o`.
///
/// # Manifest format
///
/// ```json
/// [
///   { "emoji": "😀", "category": 1, "name": "grinning face", "tags": ["smile"] },
///   { "emoji": "🔥", "category": 2, "name": "fire" }
/// ]
/// ```
///
/// This is the shape `emdict export --tags` writes, so export and pack
/// round-trip. `tags` is optional.
///
/// The global `--codec` flag selects the payload codec; `--level`
/// overrides its default compression level.
use std::fs;

use anyhow::{Context, Result};
use emdict_decoder::Codec;
use emdict_encoder::DictEncoder;
use emdict_types::Record;
use tracing::debug;

use crate::PackArgs;

// ── Manifest serde types ──────────────────────────────────────────────────────

/// A single entry in the JSON manifest.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    emoji: String,
    category: i32,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<ManifestEntry> for Record {
    fn from(entry: ManifestEntry) -> Self {
        Record::new(entry.emoji, entry.category, entry.name).with_tags(entry.tags)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Run the `emdict pack` command.
///
/// Prints a one-line summary (`Wrote N bytes (K records) to <path>`) on
/// success. The output file is written only after encoding succeeds.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, encoding
/// fails, or the output cannot be written.
pub fn run(args: &PackArgs, codec: Codec) -> Result<()> {
    let manifest_src = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let entries: Vec<ManifestEntry> = serde_json::from_str(&manifest_src)
        .with_context(|| format!("failed to parse manifest {}", args.input.display()))?;
    let count = entries.len();
    debug!(count, %codec, "parsed manifest");

    let mut encoder = DictEncoder::new();
    encoder.extend(entries.into_iter().map(Record::from)).codec(codec);
    if let Some(level) = args.level {
        encoder.compression_level(level);
    }

    let bytes = encoder.encode().context("DictEncoder::encode failed")?;

    fs::write(&args.output, &bytes)
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    println!(
        "Wrote {} bytes ({count} record{}) to {}",
        bytes.len(),
        if count == 1 { "" } else { "s" },
        args.output.display()
    );
    Ok(())
}
