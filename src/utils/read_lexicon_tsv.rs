use crate::Error;
use csv::ReaderBuilder;
use std::io::Cursor;

/// Reads a tab-separated lexicon into `(token, value)` pairs.
///
/// Only the first two columns are read; any further columns (such as the standard
/// deviation and raw ratings of the published VADER lexicon) are ignored.
/// Tokens are lower-cased; values are passed through `parse_value`.
pub fn read_lexicon_tsv<V, F>(
    tsv: &str,
    has_headers: bool,
    parse_value: F,
) -> Result<Vec<(String, V)>, Error>
where
    F: Fn(&str) -> Result<V, Error>,
{
    let mut entries = Vec::new();

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .flexible(true)
        .quoting(false)
        .from_reader(Cursor::new(tsv));

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let token = record
            .get(0)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::ParserError("Missing token field".to_string()))?;

        let raw_value = record
            .get(1)
            .ok_or_else(|| Error::ParserError(format!("Missing value field for {:?}", token)))?;

        entries.push((token.to_lowercase(), parse_value(raw_value)?));
    }

    Ok(entries)
}
