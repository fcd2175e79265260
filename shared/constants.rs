#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static SENTIMENT_LEXICON_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "vader_lexicon.txt"));

pub static POS_LEXICON_TSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "pos_lexicon.tsv"));

pub static COMPRESSED_SENTIMENT_LEXICON_FILE_NAME: &str = "vader_lexicon.txt.gz";

pub static COMPRESSED_POS_LEXICON_FILE_NAME: &str = "pos_lexicon.tsv.gz";

/// Columns of a sentiment lexicon row, in the published VADER layout
/// (`token`, mean valence, standard deviation, raw ratings). Only the first two are required.
pub const MIN_SENTIMENT_LEXICON_COLUMN_COUNT: usize = 2;
pub const MAX_SENTIMENT_LEXICON_COLUMN_COUNT: usize = 4;

/// Number of columns every part-of-speech lexicon row must carry (`token`, tags).
pub const POS_LEXICON_COLUMN_COUNT: usize = 2;
