use rand::rngs::StdRng;
use rand::SeedableRng;
use sentiment_sniffer::{
    analyze_feed, default_feed_pool, default_text_analyzer, FeedPool, FeedResult, FeedSampler,
    SentimentBreakdown, SentimentLabel, DEFAULT_FEED_SAMPLER_CONFIG,
};
use std::collections::HashSet;

fn sample_with_seed(query: &str, limit: usize, seed: u64) -> FeedResult {
    let pool = FeedPool::new(
        DEFAULT_FEED_SAMPLER_CONFIG.template_repeat_count,
        &mut StdRng::seed_from_u64(seed),
    );

    FeedSampler::new(default_text_analyzer(), &pool, DEFAULT_FEED_SAMPLER_CONFIG).sample_feed(
        query,
        limit,
        &mut StdRng::seed_from_u64(seed),
    )
}

fn assert_feed_invariants(feed: &FeedResult, limit: usize) {
    assert!(feed.tweets_analyzed <= limit);
    assert_eq!(feed.tweets.len(), feed.tweets_analyzed);

    let distinct: HashSet<&str> = feed.tweets.iter().map(|post| post.text.as_str()).collect();
    assert_eq!(distinct.len(), feed.tweets.len(), "Duplicate posts in {:?}", feed.tweets);

    let counted: usize = feed.sentiment_breakdown.values().sum();
    assert_eq!(counted, feed.tweets_analyzed);

    if feed.tweets_analyzed == 0 {
        assert_eq!(feed.overall_sentiment, SentimentLabel::Neutral);
    } else {
        let dominant_count = feed.sentiment_breakdown[&feed.overall_sentiment];
        assert!(feed
            .sentiment_breakdown
            .values()
            .all(|count| *count <= dominant_count));
    }
}

#[cfg(test)]
mod feed_pool_tests {
    use super::*;

    #[test]
    fn test_pool_repeats_each_template() {
        let pool = FeedPool::new(20, &mut StdRng::seed_from_u64(7));

        assert_eq!(pool.len(), 100);

        let distinct: HashSet<&str> = pool.posts().iter().map(|post| post.text.as_str()).collect();
        assert_eq!(distinct.len(), 5);

        for text in distinct {
            let count = pool.posts().iter().filter(|post| post.text == text).count();
            assert_eq!(count, 20);
        }
    }

    #[test]
    fn test_default_pool() {
        let pool = default_feed_pool();

        assert_eq!(
            pool.len(),
            5 * DEFAULT_FEED_SAMPLER_CONFIG.template_repeat_count
        );
    }

    #[test]
    fn test_empty_templates() {
        let pool = FeedPool::from_templates(&[], 20, &mut StdRng::seed_from_u64(7));

        assert!(pool.is_empty());
    }
}

#[cfg(test)]
mod feed_sampler_tests {
    use super::*;

    #[test]
    fn test_seeded_samples_are_reproducible() {
        assert_eq!(
            sample_with_seed("@elonmusk", 12, 42),
            sample_with_seed("@elonmusk", 12, 42)
        );
    }

    #[test]
    fn test_query_does_not_affect_sample() {
        assert_eq!(
            sample_with_seed("@elonmusk", 3, 9),
            sample_with_seed("rust", 3, 9)
        );
    }

    #[test]
    fn test_invariants_across_limits() {
        for limit in 0..=20 {
            for seed in 0..5 {
                let feed = sample_with_seed("@elonmusk", limit, seed);
                assert_feed_invariants(&feed, limit);
            }
        }
    }

    #[test]
    fn test_zero_limit() {
        let feed = sample_with_seed("@elonmusk", 0, 1);

        assert_eq!(feed.tweets_analyzed, 0);
        assert!(feed.tweets.is_empty());
        assert!(feed.sentiment_breakdown.is_empty());
        assert_eq!(feed.overall_sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn test_large_limit_returns_every_distinct_post() {
        // A limit of 34 or more samples the whole pool
        let feed = sample_with_seed("@elonmusk", 50, 3);

        assert_eq!(feed.tweets_analyzed, 5);
    }

    #[test]
    fn test_single_post_limit() {
        let feed = sample_with_seed("@elonmusk", 1, 11);

        assert_eq!(feed.tweets_analyzed, 1);
        assert_eq!(feed.sentiment_breakdown.values().sum::<usize>(), 1);
    }

    #[test]
    fn test_custom_templates() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = FeedPool::from_templates(&[("Awful service, truly horrible.", 3)], 10, &mut rng);

        let feed = FeedSampler::new(default_text_analyzer(), &pool, DEFAULT_FEED_SAMPLER_CONFIG)
            .sample_feed("anything", 4, &mut rng);

        assert_eq!(feed.tweets_analyzed, 1);
        assert_eq!(feed.tweets[0].likes, 3);
        assert!(feed.overall_sentiment.is_negative());
    }

    #[test]
    fn test_analyze_feed_with_thread_rng() {
        let feed = analyze_feed("@elonmusk", 12);

        assert_feed_invariants(&feed, 12);
        assert!(feed.tweets_analyzed >= 1);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample_with_seed("@elonmusk", 12, 42)).unwrap();

        assert!(json["tweets_analyzed"].is_u64());
        assert!(json["overall_sentiment"].is_string());
        assert!(json["sentiment_breakdown"].is_object());
        assert!(json["tweets"][0]["text"].is_string());
        assert!(json["tweets"][0]["likes"].is_u64());
    }
}

#[cfg(test)]
mod sentiment_breakdown_tests {
    use super::*;

    #[test]
    fn test_dominant_label() {
        let breakdown = SentimentBreakdown::from_labels([
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
            SentimentLabel::Positive,
        ]);

        assert_eq!(breakdown.dominant, SentimentLabel::Positive);
        assert_eq!(breakdown.count(SentimentLabel::Positive), 2);
        assert_eq!(breakdown.count(SentimentLabel::Negative), 0);
        assert_eq!(breakdown.total, 3);
    }

    #[test]
    fn test_tie_goes_to_first_encountered() {
        let breakdown = SentimentBreakdown::from_labels([
            SentimentLabel::Negative,
            SentimentLabel::Positive,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ]);

        assert_eq!(breakdown.dominant, SentimentLabel::Negative);

        let breakdown = SentimentBreakdown::from_labels([
            SentimentLabel::VeryPositive,
            SentimentLabel::Neutral,
        ]);

        assert_eq!(breakdown.dominant, SentimentLabel::VeryPositive);
    }

    #[test]
    fn test_empty_is_neutral() {
        let breakdown = SentimentBreakdown::from_labels(Vec::new());

        assert_eq!(breakdown.dominant, SentimentLabel::Neutral);
        assert_eq!(breakdown.total, 0);
        assert!(breakdown.counts.is_empty());
    }
}
