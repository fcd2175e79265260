use crate::constants::FEED_POST_TEMPLATES;
use crate::models::{SentimentBreakdown, SentimentLabel, TextAnalyzer};
use crate::types::LabelFrequencyMap;
use crate::utils::dedup_vector_by_key;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct FeedSamplerConfig {
    /// How many posts are drawn per requested post, before deduplication.
    pub oversample_factor: usize,
    /// How many times each template post appears in the pool.
    pub template_repeat_count: usize,
    /// Posts requested when the caller does not say.
    pub default_limit: usize,
}

/// A post in the simulated social feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeedPost {
    pub text: String,
    pub likes: u32,
}

/// The outcome of a simulated feed fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedResult {
    pub tweets_analyzed: usize,
    pub overall_sentiment: SentimentLabel,
    pub sentiment_breakdown: LabelFrequencyMap,
    /// The sampled posts themselves, unanalyzed.
    pub tweets: Vec<FeedPost>,
}

/// The fixed pool of posts a simulated feed draws from. Shuffled once, at construction.
#[derive(Debug, Clone)]
pub struct FeedPool {
    posts: Vec<FeedPost>,
}

impl FeedPool {
    /// Builds the pool from the built-in template posts.
    pub fn new<R: Rng + ?Sized>(template_repeat_count: usize, rng: &mut R) -> Self {
        Self::from_templates(FEED_POST_TEMPLATES, template_repeat_count, rng)
    }

    /// Repeats each `(text, likes)` template `repeat_count` times and shuffles the result.
    pub fn from_templates<R: Rng + ?Sized>(
        templates: &[(&str, u32)],
        repeat_count: usize,
        rng: &mut R,
    ) -> Self {
        let mut posts: Vec<FeedPost> = (0..repeat_count)
            .flat_map(|_| templates.iter())
            .map(|(text, likes)| FeedPost {
                text: text.to_string(),
                likes: *likes,
            })
            .collect();

        posts.shuffle(rng);

        Self { posts }
    }

    pub fn posts(&self) -> &[FeedPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Simulates fetching posts from a social feed by sampling a `FeedPool`.
pub struct FeedSampler<'a> {
    analyzer: &'a TextAnalyzer,
    pool: &'a FeedPool,
    oversample_factor: usize,
}

impl<'a> FeedSampler<'a> {
    pub fn new(analyzer: &'a TextAnalyzer, pool: &'a FeedPool, config: &FeedSamplerConfig) -> Self {
        Self {
            analyzer,
            pool,
            oversample_factor: config.oversample_factor,
        }
    }

    /// Draws up to `limit` distinct posts and tallies their sentiment.
    ///
    /// `query` does not influence the sample; the feed is simulated.
    pub fn sample_feed<R: Rng + ?Sized>(&self, query: &str, limit: usize, rng: &mut R) -> FeedResult {
        debug!("Sampling feed for query {:?} (limit {})", query, limit);

        let sample_size = limit
            .saturating_mul(self.oversample_factor)
            .min(self.pool.len());

        let sampled: Vec<FeedPost> = self
            .pool
            .posts()
            .choose_multiple(rng, sample_size)
            .cloned()
            .collect();

        let mut tweets = dedup_vector_by_key(&sampled, |post| post.text.clone());
        tweets.truncate(limit);

        let breakdown = SentimentBreakdown::from_labels(
            tweets
                .iter()
                .map(|post| self.analyzer.analyze(&post.text).sentiment.label),
        );

        debug!(
            "Sampled {} posts ({} distinct kept), dominant sentiment {}",
            sampled.len(),
            tweets.len(),
            breakdown.dominant
        );

        FeedResult {
            tweets_analyzed: tweets.len(),
            overall_sentiment: breakdown.dominant,
            sentiment_breakdown: breakdown.counts,
            tweets,
        }
    }
}
