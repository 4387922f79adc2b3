/// Implementation of `emdict export`.
///
/// Decodes a dictionary with `DictDecoder`, renders the records through
/// `DefaultExporter`, and writes the text to stdout or `-o <file>`.
///
/// # Output formats
///
/// ```text
/// ┌───────┬─────────────────────────────────────────────────────────┐
/// │ Name  │ Shape                                                   │
/// ├───────┼─────────────────────────────────────────────────────────┤
/// │ json  │ [{"emoji": ..., "category": ..., "name": ...}] (default)│
/// │ jsonl │ one compact object per line                             │
/// │ tsv   │ emoji<TAB>category<TAB>name                             │
/// └───────┴─────────────────────────────────────────────────────────┘
/// ```
///
/// The output file is only created once decoding and rendering have both
/// succeeded.
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result, anyhow};
use emdict_decoder::DecodeOptions;
use emdict_export::{DefaultExporter, ExportConfig, ExportFormat, Exporter, Projection};
use tracing::debug;

use crate::ExportArgs;
use crate::options::decode_file;

/// Run the `emdict export` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, the format
/// name is unrecognised, rendering fails, or the output cannot be
/// written.
pub fn run(args: &ExportArgs, options: &DecodeOptions) -> Result<()> {
    let config = ExportConfig {
        format: parse_format(&args.format)?,
        projection: if args.tags {
            Projection::Full
        } else {
            Projection::Interchange
        },
        pretty: !args.compact,
    };

    let decoded = decode_file(&args.file, options)?;

    let mut rendered = DefaultExporter
        .export(&decoded.records, &config)
        .context("export failed")?;
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    debug!(records = decoded.len(), bytes = rendered.len(), "rendered export");

    if let Some(path) = &args.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("cannot write to stdout")?;
    }

    Ok(())
}

// ── Flag parsers ──────────────────────────────────────────────────────────────

/// Parses the `--format` string to an [`ExportFormat`].
///
/// # Errors
///
/// Returns an error for unrecognised format names.
fn parse_format(s: &str) -> Result<ExportFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(ExportFormat::Json),
        "jsonl" | "ndjson" => Ok(ExportFormat::JsonLines),
        "tsv" => Ok(ExportFormat::Tsv),
        _ => Err(anyhow!("unknown format {s:?}, expected json|jsonl|tsv")),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use emdict_decoder::DecodeError;
    use emdict_encoder::DictEncoder;

    use super::*;

    fn export_args(file: &Path, output: &Path) -> ExportArgs {
        ExportArgs {
            file: file.to_path_buf(),
            format: "json".to_string(),
            tags: false,
            compact: true,
            output: Some(output.to_path_buf()),
        }
    }

    fn write_container(dir: &Path, blob: &[u8]) -> std::path::PathBuf {
        let path = dir.join("emoji.dict");
        fs::write(&path, blob).unwrap();
        path
    }

    #[test]
    fn writes_json_projection_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let blob = DictEncoder::new()
            .add_record("😀", 1, "grinning face")
            .with_tag("smile")
            .encode()
            .unwrap();
        let input = write_container(dir.path(), &blob);
        let output = dir.path().join("out.json");

        run(&export_args(&input, &output), &DecodeOptions::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "[{\"emoji\":\"😀\",\"category\":1,\"name\":\"grinning face\"}]\n"
        );
    }

    #[test]
    fn no_output_file_when_decoding_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut blob = DictEncoder::new()
            .add_record("🔥", 2, "fire")
            .encode()
            .unwrap();
        // Declare one byte more than the payload inflates to.
        let declared = u32::from_be_bytes([blob[0], blob[1], blob[2], blob[3]]) + 1;
        blob[..4].copy_from_slice(&declared.to_be_bytes());
        let input = write_container(dir.path(), &blob);
        let output = dir.path().join("out.json");

        let err = run(&export_args(&input, &output), &DecodeOptions::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DecodeError>(),
            Some(DecodeError::SizeMismatch { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn parses_known_formats() {
        assert_eq!(parse_format("json").unwrap(), ExportFormat::Json);
        assert_eq!(parse_format("NDJSON").unwrap(), ExportFormat::JsonLines);
        assert_eq!(parse_format("tsv").unwrap(), ExportFormat::Tsv);
        assert!(parse_format("csv").is_err());
    }
}
