use crate::models::{PosTag, Tokenizer};
use crate::types::{PosTagCandidates, Token, TokenRef};
use crate::utils::{decompress_gzip_to_string, read_lexicon_tsv};
use crate::Error;
use log::trace;
use serde::Serialize;
use std::collections::HashMap;

/// Gzip-compressed `token<TAB>tags` table, generated by `build.rs` from
/// `data/pos_lexicon.tsv`. Tags are `|`-separated, most frequent reading first.
const COMPRESSED_POS_LEXICON_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/pos_lexicon.tsv.gz"));

// Suffix heuristics for words missing from the lexicon, checked in order.
const ADVERB_SUFFIXES: &[&str] = &["ly"];
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism", "ist", "hood", "dom",
];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ical", "ic", "ish", "ary", "al",
];

/// A token together with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: PosTag,
}

/// Maps lower-cased words to every tag they may take.
#[derive(Debug, Clone, Default)]
pub struct PosLexicon {
    candidates: HashMap<Token, PosTagCandidates>,
}

impl PosLexicon {
    /// Loads the lexicon embedded in the library at build time.
    pub fn from_embedded() -> Result<Self, Error> {
        let tsv = decompress_gzip_to_string(COMPRESSED_POS_LEXICON_BYTES)?;

        Self::from_tsv(&tsv)
    }

    /// Parses a `token<TAB>TAG|TAG` table with a header row.
    pub fn from_tsv(tsv: &str) -> Result<Self, Error> {
        let entries = read_lexicon_tsv(tsv, true, |raw_tags| {
            raw_tags
                .split('|')
                .map(|code| code.trim().parse::<PosTag>())
                .collect::<Result<PosTagCandidates, Error>>()
        })?;

        Ok(Self {
            candidates: entries.into_iter().collect(),
        })
    }

    pub fn candidates(&self, token: &TokenRef) -> Option<&[PosTag]> {
        self.candidates.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Lexicon and rule-based part-of-speech tagger.
///
/// Each word first takes its most frequent lexicon reading (or a guess from its
/// shape and suffix), then a left-to-right pass of context rules picks between
/// ambiguous readings, e.g. "the change" (noun) versus "will change" (verb).
#[derive(Debug, Clone)]
pub struct PosTagger {
    lexicon: PosLexicon,
    tokenizer: Tokenizer,
    max_token_chars: usize,
}

impl PosTagger {
    pub fn new(lexicon: PosLexicon, max_token_chars: usize) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::word_parser(),
            max_token_chars,
        }
    }

    /// Tokenizes and tags `text`.
    ///
    /// # Errors
    /// * `Error::TaggerError` if the text holds no word tokens, or a token is longer
    ///   than the tagger accepts.
    pub fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, Error> {
        let tokens = self.tokenizer.tokenize(text);

        if tokens.is_empty() {
            return Err(Error::TaggerError("No taggable tokens".to_string()));
        }

        if let Some(token) = tokens
            .iter()
            .find(|token| token.chars().count() > self.max_token_chars)
        {
            return Err(Error::TaggerError(format!(
                "Token exceeds {} characters: {:?}",
                self.max_token_chars, token
            )));
        }

        let candidates: Vec<PosTagCandidates> = tokens
            .iter()
            .map(|token| self.lookup_candidates(token))
            .collect();

        let mut tags: Vec<PosTag> = candidates.iter().map(|readings| readings[0]).collect();

        for idx in 1..tokens.len() {
            tags[idx] = Self::apply_context_rules(tags[idx - 1], &candidates[idx], tags[idx]);
        }

        let tagged: Vec<TaggedToken> = tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken { token, tag })
            .collect();

        trace!("Tagged tokens: {:?}", tagged);

        Ok(tagged)
    }

    /// Every reading of a token, most likely first. Never empty.
    fn lookup_candidates(&self, token: &TokenRef) -> PosTagCandidates {
        if let Some(readings) = self.lexicon.candidates(token) {
            if !readings.is_empty() {
                return readings.to_vec();
            }
        }

        // Inflected forms of known words
        if let Some(stem) = Self::plural_stem(token) {
            if let Some(readings) = self.lexicon.candidates(&stem) {
                let inflected: PosTagCandidates = readings
                    .iter()
                    .filter_map(|tag| match tag {
                        PosTag::Noun => Some(PosTag::PluralNoun),
                        PosTag::Verb | PosTag::PresentVerb => Some(PosTag::ThirdPersonPresentVerb),
                        _ => None,
                    })
                    .collect();

                if !inflected.is_empty() {
                    return inflected;
                }
            }
        }

        vec![Self::guess_by_shape(token)]
    }

    /// "batteries" -> "battery", "cameras" -> "camera"; `None` for non-plural shapes.
    fn plural_stem(token: &TokenRef) -> Option<Token> {
        if token.chars().count() <= 3 || token.ends_with("ss") || token.ends_with("us") {
            return None;
        }

        if let Some(stem) = token.strip_suffix("ies") {
            return Some(format!("{}y", stem));
        }

        token.strip_suffix('s').map(str::to_string)
    }

    /// Tags a word missing from the lexicon from its shape and suffix.
    fn guess_by_shape(token: &TokenRef) -> PosTag {
        if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
            && token.chars().any(|c| c.is_ascii_digit())
        {
            return PosTag::CardinalNumber;
        }

        if !token.chars().any(char::is_alphabetic) {
            return PosTag::Symbol;
        }

        if token.contains("n't") {
            return PosTag::Adverb;
        }

        // Hyphenated compounds ("mind-blowing", "well-made") modify nouns
        if token.contains('-') {
            return PosTag::Adjective;
        }

        let char_count = token.chars().count();
        if char_count <= 3 {
            return PosTag::Noun;
        }

        let has_suffix = |suffixes: &[&str]| suffixes.iter().any(|suffix| token.ends_with(suffix));

        if has_suffix(ADVERB_SUFFIXES) {
            PosTag::Adverb
        } else if token.ends_with("ing") {
            PosTag::Gerund
        } else if token.ends_with("ed") {
            PosTag::PastTenseVerb
        } else if char_count > 4 && token.ends_with("est") {
            PosTag::SuperlativeAdjective
        } else if has_suffix(NOUN_SUFFIXES) {
            PosTag::Noun
        } else if has_suffix(ADJECTIVE_SUFFIXES) {
            PosTag::Adjective
        } else if token.ends_with('s') && !token.ends_with("ss") && !token.ends_with("us") {
            PosTag::PluralNoun
        } else {
            PosTag::Noun
        }
    }

    /// Picks among a word's readings given the tag of the word before it.
    fn apply_context_rules(previous: PosTag, readings: &[PosTag], current: PosTag) -> PosTag {
        let find = |wanted: &[PosTag]| readings.iter().copied().find(|tag| wanted.contains(tag));

        match previous {
            // "the change", "great value", "worst purchase"
            prev if prev.is_noun_phrase_modifier() => {
                if current.is_verb() {
                    if let Some(noun) = find(&[PosTag::Noun, PosTag::PluralNoun]) {
                        return noun;
                    }
                    // Unknown "-ing" words after a determiner are nouns ("the building")
                    if current == PosTag::Gerund && readings.len() == 1 {
                        return PosTag::Noun;
                    }
                }
                current
            }
            // "to launch", "will change"
            PosTag::To | PosTag::Modal => {
                find(&[PosTag::Verb, PosTag::PresentVerb]).map_or(current, |_| PosTag::Verb)
            }
            // "i love", "they hate"
            PosTag::PersonalPronoun => find(&[
                PosTag::PresentVerb,
                PosTag::PastTenseVerb,
                PosTag::ThirdPersonPresentVerb,
                PosTag::Verb,
            ])
            .map(|tag| {
                if tag == PosTag::Verb {
                    PosTag::PresentVerb
                } else {
                    tag
                }
            })
            .unwrap_or(current),
            // "have tried", "had made"
            PosTag::PresentVerb | PosTag::ThirdPersonPresentVerb | PosTag::PastTenseVerb
                if current == PosTag::PastTenseVerb =>
            {
                find(&[PosTag::PastParticiple]).unwrap_or(current)
            }
            _ => current,
        }
    }
}
