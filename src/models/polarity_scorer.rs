use crate::constants::{
    BOOSTER_DAMPING_DISTANCE_2, BOOSTER_DAMPING_DISTANCE_3, BOOSTER_WORDS, BUT_POST_SCALAR,
    BUT_PRE_SCALAR, CAPS_INCREMENT, EXCLAMATION_INCREMENT, MAX_EXCLAMATION_COUNT,
    MAX_QUESTION_AMPLIFIER, NEGATION_SCALAR, NEGATION_WORDS, NEVER_EMPHASIS_SCALAR,
    NORMALIZATION_ALPHA, QUESTION_INCREMENT, SENTIMENT_IDIOMS,
};
use crate::models::{SentimentLexicon, Tokenizer};
use crate::types::{CompoundScore, Token, TokenRef, Valence};
use log::trace;
use serde::Serialize;

/// Proportions of positive, neutral and negative sentiment in a text, plus the
/// normalized compound score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: CompoundScore,
}

/// Rule-based sentiment intensity scorer (a reimplementation of VADER).
///
/// Word valences come from a `SentimentLexicon` and are adjusted for boosters,
/// negation, ALL-CAPS emphasis, idioms, contrastive "but", and `!` / `?` emphasis.
#[derive(Debug, Clone)]
pub struct PolarityScorer {
    lexicon: SentimentLexicon,
    tokenizer: Tokenizer,
}

/// A text split into scoring words, with lower-cased copies for lookups.
struct ScoringWords {
    words: Vec<Token>,
    lowered: Vec<Token>,
    /// True when some, but not all, words are ALL-CAPS.
    is_caps_differential: bool,
}

impl ScoringWords {
    fn new(words: Vec<Token>) -> Self {
        let lowered: Vec<Token> = words.iter().map(|word| word.to_lowercase()).collect();

        let caps_count = words.iter().filter(|word| is_all_caps(word)).count();
        let is_caps_differential = caps_count > 0 && caps_count < words.len();

        Self {
            words,
            lowered,
            is_caps_differential,
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn lower(&self, idx: usize) -> &TokenRef {
        &self.lowered[idx]
    }

    /// Lower-cased word at `idx`, or an empty string when out of range.
    fn lower_or_empty(&self, idx: usize) -> &TokenRef {
        self.lowered.get(idx).map(String::as_str).unwrap_or("")
    }
}

impl PolarityScorer {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::verbatim_doc_parser(),
        }
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Computes only the compound score of `text`.
    pub fn compound(&self, text: &str) -> CompoundScore {
        self.polarity_scores(text).compound
    }

    /// Scores `text`, returning the compound score and the pos/neu/neg proportions.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words = ScoringWords::new(self.tokenizer.tokenize(text));

        let mut sentiments: Vec<Valence> = Vec::with_capacity(words.len());

        for idx in 0..words.len() {
            let lowered = words.lower(idx);

            // Boosters carry no sentiment of their own
            if booster_valence(lowered).is_some() {
                sentiments.push(0.0);
                continue;
            }

            if lowered == "kind" && words.lower_or_empty(idx + 1) == "of" {
                sentiments.push(0.0);
                continue;
            }

            sentiments.push(self.sentiment_valence(&words, idx));
        }

        apply_but_contrast(&words, &mut sentiments);

        trace!("Word sentiments for {:?}: {:?}", text, sentiments);

        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, words: &ScoringWords, idx: usize) -> Valence {
        let lowered = words.lower(idx);

        let lexicon_valence = match self.lexicon.valence(lowered) {
            Some(valence) => valence,
            None => return 0.0,
        };

        let mut valence = lexicon_valence;

        // "no" directly before another lexicon word negates it rather than scoring itself
        if lowered == "no"
            && idx + 1 < words.len()
            && self.lexicon.contains(words.lower(idx + 1))
        {
            valence = 0.0;
        }

        if (idx > 0 && words.lower(idx - 1) == "no")
            || (idx > 1 && words.lower(idx - 2) == "no")
            || (idx > 2
                && words.lower(idx - 3) == "no"
                && matches!(words.lower(idx - 1), "or" | "nor"))
        {
            valence = lexicon_valence * NEGATION_SCALAR;
        }

        if words.is_caps_differential && is_all_caps(&words.words[idx]) {
            if valence > 0.0 {
                valence += CAPS_INCREMENT;
            } else {
                valence -= CAPS_INCREMENT;
            }
        }

        for distance in 0..3 {
            if idx <= distance {
                break;
            }

            let preceding_idx = idx - (distance + 1);
            if self.lexicon.contains(words.lower(preceding_idx)) {
                continue;
            }

            let mut scalar = booster_scalar(words, preceding_idx, valence);
            if distance == 1 && scalar != 0.0 {
                scalar *= BOOSTER_DAMPING_DISTANCE_2;
            }
            if distance == 2 && scalar != 0.0 {
                scalar *= BOOSTER_DAMPING_DISTANCE_3;
            }
            valence += scalar;

            valence = apply_negation(valence, words, distance, idx);

            if distance == 2 {
                valence = apply_idioms(valence, words, idx);
            }
        }

        apply_least(valence, &self.lexicon, words, idx)
    }
}

/// Python's `str.isupper`: at least one cased character, none lower-case.
fn is_all_caps(word: &TokenRef) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn booster_valence(phrase: &TokenRef) -> Option<Valence> {
    BOOSTER_WORDS
        .iter()
        .find(|(booster, _)| *booster == phrase)
        .map(|(_, scalar)| *scalar)
}

fn idiom_valence(phrase: &TokenRef) -> Option<Valence> {
    SENTIMENT_IDIOMS
        .iter()
        .find(|(idiom, _)| *idiom == phrase)
        .map(|(_, valence)| *valence)
}

fn is_negated(word: &TokenRef) -> bool {
    NEGATION_WORDS.contains(&word) || word.contains("n't")
}

/// Intensity contributed by a booster word preceding a sentiment word of `valence`.
fn booster_scalar(words: &ScoringWords, booster_idx: usize, valence: Valence) -> Valence {
    let mut scalar = match booster_valence(words.lower(booster_idx)) {
        Some(scalar) => scalar,
        None => return 0.0,
    };

    if valence < 0.0 {
        scalar = -scalar;
    }

    if words.is_caps_differential && is_all_caps(&words.words[booster_idx]) {
        if valence > 0.0 {
            scalar += CAPS_INCREMENT;
        } else {
            scalar -= CAPS_INCREMENT;
        }
    }

    scalar
}

/// Applies negation from the word `distance + 1` positions before `idx`.
fn apply_negation(valence: Valence, words: &ScoringWords, distance: usize, idx: usize) -> Valence {
    match distance {
        0 => {
            if is_negated(words.lower(idx - 1)) {
                return valence * NEGATION_SCALAR;
            }
        }
        1 => {
            let (w2, w1) = (words.lower(idx - 2), words.lower(idx - 1));
            if w2 == "never" && matches!(w1, "so" | "this") {
                return valence * NEVER_EMPHASIS_SCALAR;
            } else if w2 == "without" && w1 == "doubt" {
                return valence;
            } else if is_negated(w2) {
                return valence * NEGATION_SCALAR;
            }
        }
        2 => {
            let (w3, w2, w1) = (
                words.lower(idx - 3),
                words.lower(idx - 2),
                words.lower(idx - 1),
            );
            if w3 == "never" && (matches!(w2, "so" | "this") || matches!(w1, "so" | "this")) {
                return valence * NEVER_EMPHASIS_SCALAR;
            } else if w3 == "without" && (w2 == "doubt" || w1 == "doubt") {
                return valence;
            } else if is_negated(w3) {
                return valence * NEGATION_SCALAR;
            }
        }
        _ => {}
    }

    valence
}

/// Overrides valence with a matching idiom, then adds booster bigrams.
///
/// Only called for `idx >= 3`.
fn apply_idioms(mut valence: Valence, words: &ScoringWords, idx: usize) -> Valence {
    let w = |offset: usize| words.lower(idx - offset);

    let one_zero = format!("{} {}", w(1), w(0));
    let two_one_zero = format!("{} {} {}", w(2), w(1), w(0));
    let two_one = format!("{} {}", w(2), w(1));
    let three_two_one = format!("{} {} {}", w(3), w(2), w(1));
    let three_two = format!("{} {}", w(3), w(2));

    for sequence in [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two] {
        if let Some(idiom) = idiom_valence(sequence) {
            valence = idiom;
            break;
        }
    }

    if words.len() > idx + 1 {
        let zero_one = format!("{} {}", w(0), words.lower(idx + 1));
        if let Some(idiom) = idiom_valence(&zero_one) {
            valence = idiom;
        }
    }

    if words.len() > idx + 2 {
        let zero_one_two = format!(
            "{} {} {}",
            w(0),
            words.lower(idx + 1),
            words.lower(idx + 2)
        );
        if let Some(idiom) = idiom_valence(&zero_one_two) {
            valence = idiom;
        }
    }

    for n_gram in [&three_two_one, &three_two, &two_one] {
        if let Some(scalar) = booster_valence(n_gram) {
            valence += scalar;
        }
    }

    valence
}

/// "least" before a sentiment word negates it, except in "at least" / "very least".
fn apply_least(
    valence: Valence,
    lexicon: &SentimentLexicon,
    words: &ScoringWords,
    idx: usize,
) -> Valence {
    if idx == 0 {
        return valence;
    }

    let previous = words.lower(idx - 1);
    if previous != "least" || lexicon.contains(previous) {
        return valence;
    }

    if idx > 1 && matches!(words.lower(idx - 2), "at" | "very") {
        valence
    } else {
        valence * NEGATION_SCALAR
    }
}

/// Dampens sentiments before the first "but" and emphasizes those after it.
fn apply_but_contrast(words: &ScoringWords, sentiments: &mut [Valence]) {
    let but_idx = match words.lowered.iter().position(|word| word == "but") {
        Some(but_idx) => but_idx,
        None => return,
    };

    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_idx {
            *sentiment *= BUT_PRE_SCALAR;
        } else if idx > but_idx {
            *sentiment *= BUT_POST_SCALAR;
        }
    }
}

fn punctuation_emphasis(text: &str) -> Valence {
    let exclamation_count = text.matches('!').count().min(MAX_EXCLAMATION_COUNT);
    let exclamation_amplifier = exclamation_count as Valence * EXCLAMATION_INCREMENT;

    let question_count = text.matches('?').count();
    let question_amplifier = match question_count {
        0 | 1 => 0.0,
        2..=3 => question_count as Valence * QUESTION_INCREMENT,
        _ => MAX_QUESTION_AMPLIFIER,
    };

    exclamation_amplifier + question_amplifier
}

/// Normalizes a valence sum into `[-1.0, 1.0]`.
pub fn normalize_valence(score: Valence) -> CompoundScore {
    let normalized = score / (score * score + NORMALIZATION_ALPHA).sqrt();

    normalized.clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[Valence], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let punctuation_amplifier = punctuation_emphasis(text);

    let mut sum: Valence = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punctuation_amplifier;
    } else if sum < 0.0 {
        sum -= punctuation_amplifier;
    }

    let compound = normalize_valence(sum);

    // Neutral words count as 1; sentiment words are offset by 1 to compensate
    let mut pos_sum: Valence = 0.0;
    let mut neg_sum: Valence = 0.0;
    let mut neu_count: Valence = 0.0;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += punctuation_amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punctuation_amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;

    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}
