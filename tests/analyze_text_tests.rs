use sentiment_sniffer::{
    analyze_text, default_text_analyzer, extract_aspects, AspectExtractorConfig, SentimentLabel,
    TextAnalyzer, DEFAULT_ASPECT_EXTRACTOR_CONFIG,
};
use test_utils::constants::SCORE_EPSILON;

const ASSORTED_TEXTS: &[&str] = &[
    "I love the camera quality!",
    "Terrible support, never again.",
    "The food was amazing, but the service was slow.",
    "Great value for money.",
    "It's okay.",
    "Battery dies fast.",
    "!!!",
    "a b c",
    "the thing one item",
    "\u{1F600}\u{1F600}\u{1F600}",
    "Tesla FSD is mind-blowing! \u{1F680}",
    "The screen, the keyboard, the speakers, the trackpad and the hinge are all fine.",
];

#[cfg(test)]
mod analyze_text_tests {
    use super::*;

    #[test]
    fn test_blank_input_is_neutral() {
        for text in ["", " ", "\n\t  "] {
            let result = analyze_text(text);

            assert_eq!(result.sentiment.label, SentimentLabel::Neutral);
            assert_eq!(result.sentiment.color, "gray");
            assert_eq!(result.sentiment.score, 0.0);
            assert_eq!(result.aspects, vec!["general"]);
            assert_eq!(result.text, None);
        }
    }

    #[test]
    fn test_love_camera_quality() {
        let result = analyze_text("I love the camera quality!");

        assert!(result.sentiment.label.is_positive());
        assert!(result.aspects.contains(&"camera".to_string()));
        assert!(result.aspects.contains(&"quality".to_string()));
    }

    #[test]
    fn test_terrible_support() {
        let result = analyze_text("Terrible support, never again.");

        assert!(result.sentiment.label.is_negative());
        assert_eq!(result.sentiment.color, result.sentiment.label.color());
        assert!(result.aspects.contains(&"terrible support".to_string()));
    }

    #[test]
    fn test_score_is_absolute_compound() {
        let analyzer = default_text_analyzer();

        for text in ASSORTED_TEXTS {
            let result = analyzer.analyze(text);
            let compound = analyzer.scorer().compound(text);

            assert!((result.sentiment.score - compound.abs()).abs() < SCORE_EPSILON);
            assert!((0.0..=1.0).contains(&result.sentiment.score));
            assert_eq!(result.sentiment.label, SentimentLabel::from_compound(compound));
            assert_eq!(result.sentiment.color, result.sentiment.label.color());
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        for text in ASSORTED_TEXTS {
            assert_eq!(analyze_text(text), analyze_text(text));
        }
    }

    #[test]
    fn test_text_is_not_attached_outside_batches() {
        assert_eq!(analyze_text("Great value!").text, None);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(analyze_text("Great value!")).unwrap();

        assert_eq!(json["sentiment"]["label"], "Very Positive");
        assert_eq!(json["sentiment"]["color"], "darkblue");
        assert_eq!(json["aspects"][0], "great value");
        assert!(json.get("text").is_none());
    }
}

#[cfg(test)]
mod aspect_extraction_tests {
    use super::*;

    #[test]
    fn test_aspect_properties() {
        for text in ASSORTED_TEXTS {
            let aspects = extract_aspects(text);

            assert!(!aspects.is_empty(), "{:?} produced no aspects", text);
            assert!(aspects.len() <= 4, "{:?} produced {:?}", text, aspects);

            if aspects != vec!["general"] {
                for aspect in &aspects {
                    assert!(aspect.chars().count() >= 3, "{:?} in {:?}", aspect, aspects);
                    assert!(!["thing", "one", "item"].contains(&aspect.as_str()));
                }
            }

            let mut unique = aspects.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), aspects.len(), "{:?} has duplicates", aspects);
        }
    }

    #[test]
    fn test_adjective_noun_phrases() {
        assert_eq!(extract_aspects("Worst purchase ever."), vec!["worst purchase"]);
        assert_eq!(extract_aspects("Great value!"), vec!["great value"]);
    }

    #[test]
    fn test_nouns_in_order_of_appearance() {
        assert_eq!(
            extract_aspects("The food was amazing, but the service was slow."),
            vec!["food", "service"]
        );
    }

    #[test]
    fn test_caps_at_four_aspects() {
        let aspects = extract_aspects(
            "The screen, the keyboard, the speakers, the trackpad and the hinge are all fine.",
        );

        assert_eq!(aspects.len(), 4);
        assert_eq!(aspects[0], "screen");
    }

    #[test]
    fn test_repeated_nouns_are_deduplicated() {
        assert_eq!(
            extract_aspects("The battery, the battery, the battery!"),
            vec!["battery"]
        );
    }

    #[test]
    fn test_stop_aspects_fall_back() {
        assert_eq!(extract_aspects("the thing one item"), vec!["general"]);
    }

    #[test]
    fn test_no_nouns_fall_back() {
        assert_eq!(extract_aspects("It's okay."), vec!["general"]);
        assert_eq!(extract_aspects("!!!"), vec!["general"]);
    }

    #[test]
    fn test_tagging_failure_falls_back() {
        let text = format!("The {} is great", "x".repeat(100));

        assert_eq!(extract_aspects(&text), vec!["general"]);
    }

    #[test]
    fn test_custom_config() {
        let config = AspectExtractorConfig {
            max_aspects: 1,
            fallback_aspect: "overall",
            ..*DEFAULT_ASPECT_EXTRACTOR_CONFIG
        };
        let analyzer = TextAnalyzer::with_custom_config(&config).unwrap();

        assert_eq!(
            analyzer.analyze("I love the camera quality!").aspects,
            vec!["camera"]
        );
        assert_eq!(analyzer.analyze("").aspects, vec!["overall"]);
    }
}
