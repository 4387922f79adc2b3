/// Implementation of `emdict validate`.
///
/// Runs both decoding stages and reports either a series of success
/// checkmarks (`✓`) or a diagnostic failure line (`✗`). The command
/// exits with code 0 on a valid file and code 1 on any error (the main
/// dispatcher in `main.rs` converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Header: declares 110 bytes
/// ✓ Payload: zlib stream inflates to exactly 110 bytes
/// ✓ Records: 3 records decoded
/// ✓ Trailing: none
/// ```
///
/// # Failure output
///
/// The header line is printed whenever the size header parses, so a
/// payload failure still shows the declared size:
///
/// ```text
/// ✓ Header: declares 110 bytes
/// ✗ Error: size mismatch, size header declares 110 bytes but payload decompressed to 96
/// ```
///
/// ```text
/// ✗ Error: truncated stream, end of input reading tag 0 of record 2 at offset 96
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use emdict_decoder::{DecodeError, DecodeOptions, DictDecoder, decompress};
use emdict_wire::SizeHeader;

use crate::ValidateArgs;

/// Run the `emdict validate` command.
///
/// Prints a validation report to stdout and returns `Ok(())` on success.
/// On any structural error, prints a `✗` diagnostic to stdout and returns
/// `Err`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if the dictionary
/// fails any structural check.
pub fn run(args: &ValidateArgs, options: &DecodeOptions) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    if let Some(line) = header_line(&bytes) {
        println!("{line}");
    }

    let outcome = decompress(&bytes, options).and_then(|raw| {
        println!(
            "✓ Payload: {} stream inflates to exactly {} bytes",
            options.codec,
            raw.len()
        );
        DictDecoder::decode_with(&raw, options)
    });

    match outcome {
        Ok(decoded) => {
            println!(
                "✓ Records: {} record{} decoded",
                decoded.len(),
                if decoded.len() == 1 { "" } else { "s" }
            );
            if decoded.trailing_bytes == 0 {
                println!("✓ Trailing: none");
            } else {
                println!(
                    "✓ Trailing: {} byte{} after last record (ignored)",
                    decoded.trailing_bytes,
                    if decoded.trailing_bytes == 1 { "" } else { "s" }
                );
            }
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {}", decode_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

/// The `✓ Header` line, or `None` when the blob is too short to hold a
/// size header.
fn header_line(bytes: &[u8]) -> Option<String> {
    let header = SizeHeader::read_from(bytes).ok()?;
    Some(format!("✓ Header: declares {} bytes", header.len()))
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a `DecodeError` into a human-readable diagnostic string.
///
/// ```text
/// ┌───────────────────┬────────────────────────────────────────────────┐
/// │ DecodeError       │ Diagnostic message prefix                      │
/// ├───────────────────┼────────────────────────────────────────────────┤
/// │ TruncatedHeader   │ "not a dictionary, "                           │
/// │ CorruptPayload    │ "corrupt payload, "                            │
/// │ SizeMismatch      │ "size mismatch, "                              │
/// │ DecompressionBomb │ "refusing to decompress, "                     │
/// │ UnexpectedEof     │ "truncated stream, "                           │
/// │ InvalidEncoding   │ "bad text, "                                   │
/// │ TrailingData      │ "trailing data, "                              │
/// │ Wire              │ "<error Display>"                              │
/// └───────────────────┴────────────────────────────────────────────────┘
/// ```
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::TruncatedHeader { .. } => format!("not a dictionary, {e}"),
        DecodeError::CorruptPayload { .. } => format!("corrupt payload, {e}"),
        DecodeError::SizeMismatch { .. } => format!("size mismatch, {e}"),
        DecodeError::DecompressionBomb { .. } => format!("refusing to decompress, {e}"),
        DecodeError::UnexpectedEof {
            field, offset, ..
        } => format!("truncated stream, end of input reading {field} at offset {offset}"),
        DecodeError::InvalidEncoding { field, offset, .. } => {
            format!("bad text, {field} at offset {offset} is not valid UTF-8")
        }
        DecodeError::TrailingData {
            offset,
            extra_bytes,
        } => format!("trailing data, {extra_bytes} bytes after last record at offset {offset}"),
        DecodeError::Wire(inner) => inner.to_string(),
    }
}
