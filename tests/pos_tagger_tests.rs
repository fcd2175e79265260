use sentiment_sniffer::{Error, PosLexicon, PosTag, PosTagger, DEFAULT_ASPECT_EXTRACTOR_CONFIG};
use std::str::FromStr;

fn tagger() -> PosTagger {
    PosTagger::new(
        PosLexicon::from_embedded().expect("Embedded lexicon should parse"),
        DEFAULT_ASPECT_EXTRACTOR_CONFIG.max_taggable_token_chars,
    )
}

fn tag_codes(text: &str) -> Vec<&'static str> {
    tagger()
        .tag(text)
        .expect("Text should be taggable")
        .iter()
        .map(|tagged| tagged.tag.as_str())
        .collect()
}

#[cfg(test)]
mod pos_tagger_tests {
    use super::*;

    #[test]
    fn test_tags_simple_sentence() {
        assert_eq!(
            tag_codes("i love the camera quality"),
            vec!["PRP", "VBP", "DT", "NN", "NN"]
        );
    }

    #[test]
    fn test_verb_after_modal() {
        assert_eq!(
            tag_codes("ai will change humanity"),
            vec!["NN", "MD", "VB", "NN"]
        );
    }

    #[test]
    fn test_noun_after_determiner() {
        let codes = tag_codes("the change was good");

        assert_eq!(codes[1], "NN");
        assert_eq!(codes[3], "JJ");
    }

    #[test]
    fn test_adjective_noun_phrase() {
        assert_eq!(tag_codes("great value"), vec!["JJ", "NN"]);
        assert_eq!(tag_codes("worst purchase ever"), vec!["JJS", "NN", "RB"]);
    }

    #[test]
    fn test_plural_of_known_noun() {
        assert_eq!(tag_codes("the batteries"), vec!["DT", "NNS"]);
    }

    #[test]
    fn test_guesses_unknown_words_by_suffix() {
        let codes = tag_codes("works flawlessly");

        assert_eq!(codes[1], "RB");
    }

    #[test]
    fn test_contractions_are_tagged() {
        assert_eq!(tag_codes("it's okay"), vec!["PRP", "VBZ", "JJ"]);
    }

    #[test]
    fn test_no_tokens_is_an_error() {
        assert!(matches!(tagger().tag("!!! ..."), Err(Error::TaggerError(_))));
        assert!(matches!(tagger().tag(""), Err(Error::TaggerError(_))));
    }

    #[test]
    fn test_overlong_token_is_an_error() {
        let text = format!("the {}", "a".repeat(100));

        assert!(matches!(tagger().tag(&text), Err(Error::TaggerError(_))));
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = PosLexicon::from_tsv("token\ttags\nwidget\tNN\nrocks\tVBZ|NNS\n")
            .expect("Lexicon should parse");
        let tagger = PosTagger::new(lexicon, 64);

        let tagged = tagger.tag("Widget rocks").expect("Text should be taggable");

        assert_eq!(tagged[0].token, "widget");
        assert_eq!(tagged[0].tag, PosTag::Noun);
        assert_eq!(tagged[1].tag, PosTag::ThirdPersonPresentVerb);
    }

    #[test]
    fn test_invalid_lexicon_tag() {
        assert!(PosLexicon::from_tsv("token\ttags\nwidget\tXYZ\n").is_err());
    }

    #[test]
    fn test_tag_codes_round_trip() {
        for code in ["NN", "NNS", "JJ", "JJS", "PRP$", "VBZ", "MD"] {
            let tag = PosTag::from_str(code).expect("Code should parse");
            assert_eq!(tag.as_str(), code);
        }
    }
}
