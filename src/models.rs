pub mod aspect_extractor;
pub use aspect_extractor::{AspectExtractor, AspectExtractorConfig};

pub mod batch_aggregator;
pub use batch_aggregator::BatchAggregator;

pub mod error;
pub use error::Error;

pub mod feed_sampler;
pub use feed_sampler::{FeedPool, FeedPost, FeedResult, FeedSampler, FeedSamplerConfig};

pub mod polarity_scorer;
pub use polarity_scorer::{PolarityScorer, PolarityScores};

pub mod pos_tag;
pub use pos_tag::PosTag;

pub mod pos_tagger;
pub use pos_tagger::{PosLexicon, PosTagger, TaggedToken};

pub mod sentiment_breakdown;
pub use sentiment_breakdown::SentimentBreakdown;

pub mod sentiment_label;
pub use sentiment_label::SentimentLabel;

pub mod sentiment_lexicon;
pub use sentiment_lexicon::SentimentLexicon;

pub mod text_analyzer;
pub use text_analyzer::{AnalysisResult, SentimentSummary, TextAnalyzer};

pub mod tokenizer;
pub use tokenizer::Tokenizer;
