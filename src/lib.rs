mod config;
pub use config::{DEFAULT_ASPECT_EXTRACTOR_CONFIG, DEFAULT_FEED_SAMPLER_CONFIG};
mod constants;
pub use constants::SAMPLE_REVIEWS_CSV;
pub mod models;
pub use models::{
    AnalysisResult, AspectExtractor, AspectExtractorConfig, BatchAggregator, Error, FeedPool,
    FeedPost, FeedResult, FeedSampler, FeedSamplerConfig, PolarityScorer, PolarityScores,
    PosLexicon, PosTag, PosTagger, SentimentBreakdown, SentimentLabel, SentimentLexicon,
    SentimentSummary, TaggedToken, TextAnalyzer, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{Aspect, CompoundScore, LabelFrequencyMap, Token, TokenRef, Valence};
pub use utils::read_batch_texts;

use std::sync::LazyLock;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

// The embedded lexicons are validated by `build.rs`, so parsing them cannot fail
// for a successfully built crate.
static DEFAULT_TEXT_ANALYZER: LazyLock<TextAnalyzer> = LazyLock::new(|| {
    TextAnalyzer::new().expect("Embedded lexicons should parse after build-time validation")
});

static DEFAULT_FEED_POOL: LazyLock<FeedPool> = LazyLock::new(|| {
    FeedPool::new(
        DEFAULT_FEED_SAMPLER_CONFIG.template_repeat_count,
        &mut rand::thread_rng(),
    )
});

/// The process-wide analyzer used by the free functions in this crate.
pub fn default_text_analyzer() -> &'static TextAnalyzer {
    &DEFAULT_TEXT_ANALYZER
}

/// The process-wide feed pool, shuffled once on first use.
pub fn default_feed_pool() -> &'static FeedPool {
    &DEFAULT_FEED_POOL
}

/// Classifies `text` on the five-level sentiment scale and extracts its aspects.
pub fn analyze_text(text: &str) -> AnalysisResult {
    DEFAULT_TEXT_ANALYZER.analyze(text)
}

/// Extracts up to four aspects from `text`, falling back to `["general"]`.
pub fn extract_aspects(text: &str) -> Vec<Aspect> {
    DEFAULT_TEXT_ANALYZER.extractor().extract_aspects(text)
}

/// Samples the simulated social feed. `query` is accepted but does not affect the sample.
pub fn analyze_feed(query: &str, limit: usize) -> FeedResult {
    FeedSampler::new(
        &DEFAULT_TEXT_ANALYZER,
        &DEFAULT_FEED_POOL,
        DEFAULT_FEED_SAMPLER_CONFIG,
    )
    .sample_feed(query, limit, &mut rand::thread_rng())
}

/// Analyzes every non-blank text, keeping input order and attaching each text to its result.
pub fn analyze_batch<S: AsRef<str>>(texts: &[S]) -> Vec<AnalysisResult> {
    BatchAggregator::new(&DEFAULT_TEXT_ANALYZER).analyze_batch(texts)
}
