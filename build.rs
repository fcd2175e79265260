#[path = "shared/constants.rs"]
mod shared_constants;
use shared_constants::{
    COMPRESSED_POS_LEXICON_FILE_NAME, COMPRESSED_SENTIMENT_LEXICON_FILE_NAME,
    MAX_SENTIMENT_LEXICON_COLUMN_COUNT, MIN_SENTIMENT_LEXICON_COLUMN_COUNT,
    POS_LEXICON_COLUMN_COUNT, POS_LEXICON_TSV_FILE_PATH, SENTIMENT_LEXICON_FILE_PATH,
};

use csv::ReaderBuilder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::{self, File};
use std::io::{self, Cursor};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Shape of a lexicon file on disk.
struct LexiconLayout {
    has_headers: bool,
    column_counts: RangeInclusive<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set the output directory for generated files
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    // Headerless, like the published `vader_lexicon.txt`
    embed_lexicon(
        &SENTIMENT_LEXICON_FILE_PATH,
        &out_dir.join(COMPRESSED_SENTIMENT_LEXICON_FILE_NAME),
        &LexiconLayout {
            has_headers: false,
            column_counts: MIN_SENTIMENT_LEXICON_COLUMN_COUNT..=MAX_SENTIMENT_LEXICON_COLUMN_COUNT,
        },
        |value| value.parse::<f64>().is_ok(),
    )?;

    embed_lexicon(
        &POS_LEXICON_TSV_FILE_PATH,
        &out_dir.join(COMPRESSED_POS_LEXICON_FILE_NAME),
        &LexiconLayout {
            has_headers: true,
            column_counts: POS_LEXICON_COLUMN_COUNT..=POS_LEXICON_COLUMN_COUNT,
        },
        |value| {
            !value.is_empty()
                && value
                    .split('|')
                    .all(|tag| !tag.is_empty() && tag.chars().all(|c| c.is_ascii_uppercase() || c == '$'))
        },
    )?;

    Ok(())
}

/// Validates a tab-separated lexicon and writes a gzip-compressed copy of it.
///
/// The value checked is always the second column; any further columns are carried along.
///
/// Malformed rows fail the build, so the embedded copy can be parsed at runtime
/// without a recoverable error path.
fn embed_lexicon(
    input_path: &Path,
    output_path: &Path,
    layout: &LexiconLayout,
    is_valid_value: impl Fn(&str) -> bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!("cargo:rerun-if-changed={}", input_path.display());

    let contents = fs::read_to_string(input_path)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(layout.has_headers)
        .flexible(true)
        .quoting(false)
        .from_reader(Cursor::new(contents.as_bytes()));

    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;

        if !layout.column_counts.contains(&record.len()) {
            return Err(format!(
                "{}: row {} has {} columns, expected {} to {}",
                input_path.display(),
                row_idx + 1,
                record.len(),
                layout.column_counts.start(),
                layout.column_counts.end()
            )
            .into());
        }

        let value = record.get(1).unwrap_or_default();
        if !is_valid_value(value) {
            return Err(format!(
                "{}: row {} has an invalid value {:?}",
                input_path.display(),
                row_idx + 1,
                value
            )
            .into());
        }
    }

    let mut output_file = File::create(output_path)?;

    // Compress the data with GzEncoder
    let mut encoder = GzEncoder::new(&mut output_file, Compression::default());
    io::copy(&mut Cursor::new(contents.as_bytes()), &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
