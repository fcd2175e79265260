use crate::Error;
use flate2::read::GzDecoder;
use std::io::Read;

/// Inflates gzip-compressed bytes (as embedded by `build.rs`) into a UTF-8 string.
pub fn decompress_gzip_to_string(compressed: &[u8]) -> Result<String, Error> {
    let mut decoder = GzDecoder::new(compressed);
    let mut decompressed = String::new();
    decoder.read_to_string(&mut decompressed)?;

    Ok(decompressed)
}
