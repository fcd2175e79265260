use crate::types::{Token, TokenRef, Valence};
use crate::utils::{decompress_gzip_to_string, read_lexicon_tsv};
use crate::Error;
use std::collections::HashMap;

/// Gzip-compressed `token<TAB>valence` table, generated by `build.rs` from
/// `data/vader_lexicon.txt`.
const COMPRESSED_SENTIMENT_LEXICON_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/vader_lexicon.txt.gz"));

/// Maps lower-cased words (and emoticons) to their mean sentiment valence.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    valences: HashMap<Token, Valence>,
}

impl SentimentLexicon {
    /// Loads the lexicon embedded in the library at build time.
    pub fn from_embedded() -> Result<Self, Error> {
        let tsv = decompress_gzip_to_string(COMPRESSED_SENTIMENT_LEXICON_BYTES)?;

        Self::from_tsv(&tsv)
    }

    /// Parses a headerless `token<TAB>valence[<TAB>std<TAB>ratings]` table, the layout
    /// of the published `vader_lexicon.txt`.
    pub fn from_tsv(tsv: &str) -> Result<Self, Error> {
        let entries = read_lexicon_tsv(tsv, false, |raw_value| {
            raw_value
                .trim()
                .parse::<Valence>()
                .map_err(|e| Error::ParserError(format!("Invalid valence {:?}: {}", raw_value, e)))
        })?;

        Ok(Self::from_entries(entries))
    }

    /// Builds a lexicon from `(token, valence)` pairs. Later duplicates win.
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, Valence)>,
        T: Into<Token>,
    {
        let valences = entries
            .into_iter()
            .map(|(token, valence)| (token.into().to_lowercase(), valence))
            .collect();

        Self { valences }
    }

    /// Returns the valence of an already lower-cased token.
    pub fn valence(&self, token: &TokenRef) -> Option<Valence> {
        self.valences.get(token).copied()
    }

    pub fn contains(&self, token: &TokenRef) -> bool {
        self.valences.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
