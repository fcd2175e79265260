use crate::models::{PosTag, SentimentLabel};
use std::collections::BTreeMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A noun or adjective + noun phrase a text is likely about (e.g. "camera" or "great value").
pub type Aspect = String;

/// The sentiment intensity of a single word, as stored in the sentiment lexicon
/// (roughly -4.0 to 4.0).
pub type Valence = f64;

/// The normalized, aggregate polarity of a text in the closed range `[-1.0, 1.0]`.
pub type CompoundScore = f64;

/// The number of times a sentiment label occurs within a collection of results.
pub type LabelFrequency = usize;

/// Represents a map of sentiment labels to their frequency counts, ordered from
/// `VeryNegative` to `VeryPositive`.
pub type LabelFrequencyMap = BTreeMap<SentimentLabel, LabelFrequency>;

/// Every part-of-speech reading a word may take, most frequent first.
pub type PosTagCandidates = Vec<PosTag>;
