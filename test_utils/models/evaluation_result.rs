use sentiment_sniffer::{AnalysisResult, Aspect, SentimentLabel};
use std::collections::HashSet;

#[derive(Debug)]
pub struct EvaluationResult {
    /// Any of these labels is accepted.
    pub expected_labels: Vec<SentimentLabel>,
    pub actual_label: SentimentLabel,
    pub expected_aspects: Vec<Aspect>,
    /// Expected aspects absent from the result.
    pub false_negatives: Vec<Aspect>,
}

impl EvaluationResult {
    pub fn new(
        expected_labels: &[SentimentLabel],
        expected_aspects: &[Aspect],
        result: &AnalysisResult,
    ) -> Self {
        let result_aspects: HashSet<&Aspect> = result.aspects.iter().collect();

        let false_negatives: Vec<Aspect> = expected_aspects
            .iter()
            .filter(|aspect| !result_aspects.contains(aspect))
            .cloned()
            .collect();

        Self {
            expected_labels: expected_labels.to_vec(),
            actual_label: result.sentiment.label,
            expected_aspects: expected_aspects.to_vec(),
            false_negatives,
        }
    }

    pub fn is_label_match(&self) -> bool {
        self.expected_labels.is_empty() || self.expected_labels.contains(&self.actual_label)
    }

    pub fn is_success(&self) -> bool {
        self.is_label_match() && self.false_negatives.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Expected labels: {:?}, Actual label: {:?}, Missing aspects: {:?}",
            self.expected_labels, self.actual_label, self.false_negatives
        )
    }
}
