use crate::models::{PosTagger, TaggedToken};
use crate::types::Aspect;
use crate::utils::dedup_vector;
use log::{debug, warn};

#[derive(Debug, Clone)]
pub struct AspectExtractorConfig {
    /// Upper bound on the number of aspects returned.
    pub max_aspects: usize,
    /// Candidates shorter than this many characters are dropped.
    pub min_aspect_chars: usize,
    /// Tokens longer than this many characters make tagging fail.
    pub max_taggable_token_chars: usize,
    /// Candidates too generic to describe what a text is about.
    pub stop_aspects: &'static [&'static str],
    /// Returned alone when no candidate survives, or tagging fails.
    pub fallback_aspect: &'static str,
}

/// Extracts the nouns and adjective + noun phrases a text is most likely about.
#[derive(Debug, Clone)]
pub struct AspectExtractor {
    tagger: PosTagger,
    max_aspects: usize,
    min_aspect_chars: usize,
    stop_aspects: &'static [&'static str],
    fallback_aspect: &'static str,
}

impl AspectExtractor {
    pub fn new(tagger: PosTagger, config: &AspectExtractorConfig) -> Self {
        Self {
            tagger,
            max_aspects: config.max_aspects,
            min_aspect_chars: config.min_aspect_chars,
            stop_aspects: config.stop_aspects,
            fallback_aspect: config.fallback_aspect,
        }
    }

    /// The list returned when nothing specific is found.
    pub fn fallback(&self) -> Vec<Aspect> {
        vec![self.fallback_aspect.to_string()]
    }

    /// Extracts up to `max_aspects` aspects from `text`, in order of first appearance.
    ///
    /// Never fails: an empty result, or a tagging error, yields the fallback list.
    pub fn extract_aspects(&self, text: &str) -> Vec<Aspect> {
        let tagged = match self.tagger.tag(&text.to_lowercase()) {
            Ok(tagged) => tagged,
            Err(err) => {
                warn!("Falling back to {:?}: {}", self.fallback_aspect, err);
                return self.fallback();
            }
        };

        let candidates: Vec<Aspect> = Self::collect_candidates(&tagged)
            .into_iter()
            .filter(|candidate| self.is_viable(candidate))
            .collect();

        let mut aspects = dedup_vector(&candidates);
        aspects.truncate(self.max_aspects);

        debug!("Extracted aspects: {:?}", aspects);

        if aspects.is_empty() {
            self.fallback()
        } else {
            aspects
        }
    }

    /// Emits every noun, joined with the adjective directly before it when there is one.
    fn collect_candidates(tagged: &[TaggedToken]) -> Vec<Aspect> {
        tagged
            .iter()
            .enumerate()
            .filter(|(_, tagged_token)| tagged_token.tag.is_noun())
            .map(|(idx, noun)| match idx.checked_sub(1).map(|prev| &tagged[prev]) {
                Some(previous) if previous.tag.is_adjective() => {
                    format!("{} {}", previous.token, noun.token)
                }
                _ => noun.token.clone(),
            })
            .collect()
    }

    fn is_viable(&self, candidate: &str) -> bool {
        candidate.chars().count() >= self.min_aspect_chars
            && !self.stop_aspects.contains(&candidate)
    }
}
