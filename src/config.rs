use crate::models::{AspectExtractorConfig, FeedSamplerConfig};

pub const DEFAULT_ASPECT_EXTRACTOR_CONFIG: &AspectExtractorConfig = &AspectExtractorConfig {
    max_aspects: 4,
    min_aspect_chars: 3,
    max_taggable_token_chars: 64,
    stop_aspects: &["thing", "one", "item"],
    fallback_aspect: "general",
};

pub const DEFAULT_FEED_SAMPLER_CONFIG: &FeedSamplerConfig = &FeedSamplerConfig {
    oversample_factor: 3,
    template_repeat_count: 20,
    default_limit: 12,
};
