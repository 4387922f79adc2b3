/// Implementation of `emdict inspect`.
///
/// Decompresses a dictionary and walks the record stream with
/// `RecordStream`, printing each record the moment it is decoded. When
/// the stream fails part-way, every record before the failure has
/// already been printed and the error names the field and offset.
///
/// # Output format
///
/// ```text
/// Container: 74 bytes, zlib, 110 bytes uncompressed
/// Records: 3
/// Record 0: 😀 category=1 "grinning face"
/// Record 1: 🔥 category=2 "fire"
///           Tags: hot, flame
/// Record 2: 🎉 category=3 "party popper"
/// ---
/// Stream end at offset 110, 0 trailing bytes
/// ```
use std::fs;

use anyhow::{Context, Result, bail};
use emdict_decoder::{DecodeError, DecodeOptions, DecoderEvent, RecordStream, TrailingBytes, decompress};
use emdict_types::Record;

use crate::InspectArgs;

/// Run the `emdict inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the container does not
/// decompress, a record fails to decode, `--strict` is set and bytes
/// remain after the last record, or `--record N` is out of range.
pub fn run(args: &InspectArgs, options: &DecodeOptions) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let raw = decompress(&bytes, options)
        .with_context(|| format!("failed to decompress {}", args.file.display()))?;

    println!(
        "Container: {} bytes, {}, {} bytes uncompressed",
        bytes.len(),
        options.codec,
        raw.len()
    );

    let mut stream = RecordStream::new(&raw);
    let mut index = 0u32;
    for event in &mut stream {
        match event.with_context(|| format!("failed to decode {}", args.file.display()))? {
            DecoderEvent::Count(count) => println!("Records: {count}"),
            DecoderEvent::Record(record) => {
                // When --record N is specified, skip all other indices.
                if args.record.is_none_or(|target| target == index) {
                    print_record(index, &record, args.show_tags);
                }
                index += 1;
            }
        }
    }

    let trailing = stream.remaining();
    println!("---");
    println!(
        "Stream end at offset {}, {trailing} trailing byte{}",
        stream.position(),
        if trailing == 1 { "" } else { "s" }
    );

    if trailing > 0 && options.trailing_bytes == TrailingBytes::Reject {
        return Err(DecodeError::TrailingData {
            offset: stream.position(),
            extra_bytes: trailing,
        })
        .with_context(|| format!("failed to decode {}", args.file.display()));
    }

    if let Some(target) = args.record
        && target >= index
    {
        bail!("record {target} not found ({index} records)");
    }

    Ok(())
}

fn print_record(index: u32, record: &Record, show_tags: bool) {
    println!(
        "Record {index}: {} category={} {:?}",
        record.symbol, record.category, record.description
    );
    if show_tags && !record.tags.is_empty() {
        println!("          Tags: {}", record.tags.join(", "));
    }
}
