use crate::models::{AnalysisResult, SentimentLabel};
use crate::types::{LabelFrequency, LabelFrequencyMap};
use crate::utils::count_label_frequencies;
use serde::Serialize;

/// Label counts over a collection of analyses, plus the dominant label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SentimentBreakdown {
    pub counts: LabelFrequencyMap,
    /// The most frequent label. Ties go to the label encountered first; an empty
    /// collection is Neutral.
    pub dominant: SentimentLabel,
    pub total: usize,
}

impl SentimentBreakdown {
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = SentimentLabel>,
    {
        let (counts, first_seen) = count_label_frequencies(labels);

        let mut dominant = SentimentLabel::Neutral;
        let mut dominant_count: LabelFrequency = 0;
        for label in first_seen {
            let count = counts.get(&label).copied().unwrap_or(0);
            if count > dominant_count {
                dominant = label;
                dominant_count = count;
            }
        }

        let total = counts.values().sum();

        Self {
            counts,
            dominant,
            total,
        }
    }

    pub fn from_results(results: &[AnalysisResult]) -> Self {
        Self::from_labels(results.iter().map(|result| result.sentiment.label))
    }

    pub fn count(&self, label: SentimentLabel) -> LabelFrequency {
        self.counts.get(&label).copied().unwrap_or(0)
    }
}
