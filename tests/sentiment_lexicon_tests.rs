use sentiment_sniffer::{analyze_text, PolarityScorer, SentimentLabel, SentimentLexicon};

#[cfg(test)]
mod sentiment_lexicon_tests {
    use super::*;

    #[test]
    fn test_embedded_lexicon_loads() {
        let lexicon = SentimentLexicon::from_embedded().unwrap();

        assert_eq!(lexicon.valence("love"), Some(3.2));
        assert_eq!(lexicon.valence("worst"), Some(-3.1));
        assert_eq!(lexicon.valence(":)"), Some(2.0));
        assert!(lexicon.valence("tuesday").is_none());
    }

    #[test]
    fn test_common_review_words_are_scored() {
        let result = analyze_text("The pasta was delicious.");

        assert_eq!(result.sentiment.label, SentimentLabel::Positive);
        assert!(result.sentiment.score > 0.0);

        for text in [
            "The staff were rude.",
            "Such a hassle to set up.",
            "The fit feels flimsy.",
        ] {
            assert!(
                analyze_text(text).sentiment.label.is_negative(),
                "{:?} was not negative",
                text
            );
        }

        for text in [
            "Very comfortable and durable.",
            "Courteous, attentive staff.",
        ] {
            assert!(
                analyze_text(text).sentiment.label.is_positive(),
                "{:?} was not positive",
                text
            );
        }
    }

    #[test]
    fn test_reads_published_vader_layout() {
        let lexicon = SentimentLexicon::from_tsv(
            "delicious\t2.7\t0.64031\t[3, 3, 2, 3, 3, 2, 3, 3, 2, 3]\n\
             bland\t-1.2\t0.6\t[-1, -1, -2, -1, -1, -2, -1, 0, -2, -1]\n\
             :D\t2.3\t0.9\t[2, 3, 3, 2, 1, 3, 3, 2, 1, 3]\n",
        )
        .unwrap();

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.valence("delicious"), Some(2.7));
        assert_eq!(lexicon.valence("bland"), Some(-1.2));
        assert_eq!(lexicon.valence(":d"), Some(2.3));
    }

    #[test]
    fn test_reads_two_column_rows() {
        let lexicon = SentimentLexicon::from_tsv("tasty\t2.3\nstale\t-1.5\n").unwrap();

        let scorer = PolarityScorer::new(lexicon);

        assert!(scorer.compound("tasty bread") > 0.0);
        assert!(scorer.compound("stale bread") < 0.0);
    }

    #[test]
    fn test_invalid_valence_is_an_error() {
        assert!(SentimentLexicon::from_tsv("tasty\tvery\n").is_err());
        assert!(SentimentLexicon::from_tsv("tasty\n").is_err());
    }
}
