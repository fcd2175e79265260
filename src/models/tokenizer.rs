use crate::types::{Token, TokenRef};

/// Contraction endings split off into their own tokens, Penn Treebank style
/// ("don't" -> "do" + "n't", "it's" -> "it" + "'s").
const CONTRACTION_SUFFIXES: &[&str] = &["n't", "'s", "'re", "'ll", "'ve", "'d", "'m"];

/// A utility struct for tokenizing text, with configurable options for
/// word-level (tagging) and verbatim (sentiment scoring) parsing.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Whether to split on whitespace only, keeping emoticons and case intact.
    as_verbatim: bool,

    /// Whether tokens are lower-cased.
    lowercase: bool,
}

impl Tokenizer {
    /// Creates a tokenizer configured for part-of-speech tagging.
    ///
    /// Lower-cases text, drops punctuation, keeps hyphenated words whole, and
    /// splits contractions into separate tokens.
    pub fn word_parser() -> Self {
        Self {
            as_verbatim: false,
            lowercase: true,
        }
    }

    /// Creates a tokenizer configured for sentiment scoring.
    ///
    /// Splits on whitespace and strips surrounding punctuation from words, unless
    /// doing so would leave two characters or fewer (so emoticons such as `:)` survive).
    /// Case is preserved, as ALL-CAPS words carry emphasis.
    pub fn verbatim_doc_parser() -> Self {
        Self {
            as_verbatim: true,
            lowercase: false,
        }
    }

    /// Splits the input text into tokens based on the tokenizer's configuration.
    ///
    /// # Arguments
    /// * `text` - The input text to tokenize.
    ///
    /// # Returns
    /// * A vector of tokens as strings.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        if self.as_verbatim {
            return text
                .split_whitespace() // Split into words
                .map(|word| self.normalize_case(Self::strip_punctuation_if_word(word)))
                .collect();
        }

        // Preprocess and tokenize the text
        text.replace("-\n", "") // Merge hyphenated words across lines
            .replace("--", " ") // Replace standalone double hyphens
            .replace(['\u{2018}', '\u{2019}'], "'") // Normalize curly apostrophes
            .split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '\''))
            .map(|word| word.trim_matches(|c| c == '-' || c == '\''))
            .filter(|word| !word.is_empty())
            .flat_map(Self::split_contraction)
            .map(|word| self.normalize_case(&word))
            .collect()
    }

    /// Strips leading and trailing ASCII punctuation from a word, unless the result
    /// would be two characters or fewer.
    ///
    /// # Arguments
    /// * `token` - A whitespace-delimited chunk of text.
    ///
    /// # Returns
    /// * The stripped word, or the original token when it is likely an emoticon.
    pub fn strip_punctuation_if_word(token: &TokenRef) -> &TokenRef {
        let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());

        if stripped.chars().count() <= 2 {
            token
        } else {
            stripped
        }
    }

    /// Splits a trailing contraction off a word.
    ///
    /// # Arguments
    /// * `word` - A punctuation-free word which may end in a contraction.
    ///
    /// # Returns
    /// * The stem and contraction as two tokens, or the word by itself.
    fn split_contraction(word: &TokenRef) -> Vec<Token> {
        for suffix in CONTRACTION_SUFFIXES {
            if word.len() <= suffix.len() {
                continue;
            }

            let split_idx = word.len() - suffix.len();

            if let (Some(stem), Some(tail)) = (word.get(..split_idx), word.get(split_idx..)) {
                if tail.eq_ignore_ascii_case(suffix) {
                    return vec![stem.to_string(), tail.to_string()];
                }
            }
        }

        vec![word.to_string()]
    }

    fn normalize_case(&self, token: &TokenRef) -> Token {
        if self.lowercase {
            token.to_lowercase()
        } else {
            token.to_string()
        }
    }
}
