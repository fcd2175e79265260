use crate::config::DEFAULT_ASPECT_EXTRACTOR_CONFIG;
use crate::models::{
    AspectExtractor, AspectExtractorConfig, PolarityScorer, PosLexicon, PosTagger,
    SentimentLabel, SentimentLexicon,
};
use crate::types::{Aspect, CompoundScore};
use crate::Error;
use log::debug;
use serde::Serialize;

/// The sentiment portion of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub label: SentimentLabel,
    pub color: &'static str,
    /// Absolute value of the compound score; direction is carried by `label`.
    pub score: f64,
}

impl SentimentSummary {
    pub fn from_compound(compound: CompoundScore) -> Self {
        let label = SentimentLabel::from_compound(compound);

        Self {
            label,
            color: label.color(),
            score: compound.abs(),
        }
    }

    pub fn neutral() -> Self {
        Self::from_compound(0.0)
    }
}

/// The structured result of analyzing a single text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub sentiment: SentimentSummary,
    /// Never empty; holds the fallback aspect when nothing specific was found.
    pub aspects: Vec<Aspect>,
    /// The analyzed text, attached in batch context only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Composes polarity scoring, label mapping and aspect extraction into a single
/// per-text analysis.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    scorer: PolarityScorer,
    extractor: AspectExtractor,
}

impl TextAnalyzer {
    /// Builds an analyzer from the lexicons embedded at build time.
    pub fn new() -> Result<Self, Error> {
        Self::with_custom_config(DEFAULT_ASPECT_EXTRACTOR_CONFIG)
    }

    pub fn with_custom_config(aspect_extractor_config: &AspectExtractorConfig) -> Result<Self, Error> {
        let sentiment_lexicon = SentimentLexicon::from_embedded()?;
        let pos_lexicon = PosLexicon::from_embedded()?;

        debug!(
            "Loaded {} sentiment and {} part-of-speech lexicon entries",
            sentiment_lexicon.len(),
            pos_lexicon.len()
        );

        Ok(Self::from_lexicons(
            sentiment_lexicon,
            pos_lexicon,
            aspect_extractor_config,
        ))
    }

    pub fn from_lexicons(
        sentiment_lexicon: SentimentLexicon,
        pos_lexicon: PosLexicon,
        aspect_extractor_config: &AspectExtractorConfig,
    ) -> Self {
        let tagger = PosTagger::new(
            pos_lexicon,
            aspect_extractor_config.max_taggable_token_chars,
        );

        Self {
            scorer: PolarityScorer::new(sentiment_lexicon),
            extractor: AspectExtractor::new(tagger, aspect_extractor_config),
        }
    }

    pub fn scorer(&self) -> &PolarityScorer {
        &self.scorer
    }

    pub fn extractor(&self) -> &AspectExtractor {
        &self.extractor
    }

    /// Analyzes a single text.
    ///
    /// Blank input is Neutral with a score of 0 and the fallback aspect; neither the
    /// scorer nor the extractor is invoked for it.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult {
                sentiment: SentimentSummary::neutral(),
                aspects: self.extractor.fallback(),
                text: None,
            };
        }

        let compound = self.scorer.compound(text);

        AnalysisResult {
            sentiment: SentimentSummary::from_compound(compound),
            aspects: self.extractor.extract_aspects(text),
            text: None,
        }
    }
}
