use crate::constants::BATCH_HEADER_NAMES;
use crate::Error;
use csv::{ReaderBuilder, StringRecord, Trim};

/// Rows this short (in characters) carry no reviewable text and are dropped.
const MIN_BATCH_TEXT_CHARS: usize = 4;

/// Turns the contents of an uploaded review table into one text per line.
///
/// - A leading UTF-8 byte order mark is ignored, as are blank lines.
/// - A line wrapped in double quotes becomes its inner text, verbatim.
/// - Any other line is split on commas, trimmed, and its non-empty parts rejoined
///   with `", "`. Quotes inside such a line are kept as-is.
/// - A first line reading `text`, `review`, `comment` or `sentence` is treated as a header.
/// - Rows shorter than four characters are dropped.
///
/// Each line is parsed on its own, so an unbalanced quote never spills into the
/// lines after it.
pub fn read_batch_texts(csv: &str) -> Result<Vec<String>, Error> {
    let content = csv.trim_start_matches('\u{feff}').trim();

    let mut texts = Vec::new();

    for (line_idx, line) in content.lines().map(str::trim).enumerate() {
        if line.is_empty() {
            continue;
        }

        if line_idx == 0 && BATCH_HEADER_NAMES.contains(&line.to_lowercase().as_str()) {
            continue;
        }

        let text = if line.starts_with('"') && line.ends_with('"') {
            line.get(1..line.len() - 1).unwrap_or_default().to_string()
        } else {
            join_comma_separated(line)?
        };

        if text.chars().count() >= MIN_BATCH_TEXT_CHARS {
            texts.push(text);
        }
    }

    Ok(texts)
}

/// Splits a single line on commas and rejoins its non-empty, trimmed parts.
fn join_comma_separated(line: &str) -> Result<String, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|e| Error::ParserError(format!("Failed to read row {:?}: {}", line, e)))?;

    Ok(record
        .iter()
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(", "))
}
