use sentiment_sniffer::{
    SentimentLabel, DEFAULT_ASPECT_EXTRACTOR_CONFIG, DEFAULT_FEED_SAMPLER_CONFIG,
};

const EPSILON: f64 = 1e-9;

#[cfg(test)]
mod sentiment_label_tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(SentimentLabel::from_compound(-0.6), SentimentLabel::VeryNegative);
        assert_eq!(
            SentimentLabel::from_compound(-0.6 + EPSILON),
            SentimentLabel::Negative
        );
        assert_eq!(SentimentLabel::from_compound(-0.2), SentimentLabel::Negative);
        assert_eq!(
            SentimentLabel::from_compound(-0.2 + EPSILON),
            SentimentLabel::Neutral
        );
        assert_eq!(
            SentimentLabel::from_compound(0.2 - EPSILON),
            SentimentLabel::Neutral
        );
        assert_eq!(SentimentLabel::from_compound(0.2), SentimentLabel::Positive);
        assert_eq!(
            SentimentLabel::from_compound(0.6 - EPSILON),
            SentimentLabel::Positive
        );
        assert_eq!(SentimentLabel::from_compound(0.6), SentimentLabel::VeryPositive);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(SentimentLabel::from_compound(-1.0), SentimentLabel::VeryNegative);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(1.0), SentimentLabel::VeryPositive);
    }

    #[test]
    fn test_nan_is_neutral() {
        assert_eq!(SentimentLabel::from_compound(f64::NAN), SentimentLabel::Neutral);
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let mut previous = SentimentLabel::from_compound(-1.0);

        for step in 0..=200 {
            let compound = -1.0 + step as f64 * 0.01;
            let label = SentimentLabel::from_compound(compound);

            assert!(label >= previous, "{} mapped below {:?}", compound, previous);
            previous = label;
        }
    }

    #[test]
    fn test_names_and_colors() {
        let expected = [
            ("Very Negative", "darkred"),
            ("Negative", "red"),
            ("Neutral", "gray"),
            ("Positive", "blue"),
            ("Very Positive", "darkblue"),
        ];

        for (label, (name, color)) in SentimentLabel::ALL.iter().zip(expected) {
            assert_eq!(label.name(), name);
            assert_eq!(label.to_string(), name);
            assert_eq!(label.color(), color);
        }
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(SentimentLabel::default(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_default_configs_are_debug() {
        let aspect_config = format!("{:?}", DEFAULT_ASPECT_EXTRACTOR_CONFIG);
        let feed_config = format!("{:?}", DEFAULT_FEED_SAMPLER_CONFIG);

        assert!(aspect_config.contains("max_aspects: 4"));
        assert!(feed_config.contains("oversample_factor: 3"));
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&SentimentLabel::VeryPositive).unwrap();

        assert_eq!(json, "\"Very Positive\"");
    }
}
