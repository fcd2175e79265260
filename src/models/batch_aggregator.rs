use crate::models::{AnalysisResult, SentimentBreakdown, TextAnalyzer};
use log::debug;

/// Runs a `TextAnalyzer` over many rows and summarizes the results.
pub struct BatchAggregator<'a> {
    analyzer: &'a TextAnalyzer,
}

impl<'a> BatchAggregator<'a> {
    pub fn new(analyzer: &'a TextAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Analyzes every non-blank text, attaching the original text to its result.
    ///
    /// Blank rows are skipped; the remaining results keep input order.
    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        let results: Vec<AnalysisResult> = texts
            .iter()
            .map(AsRef::as_ref)
            .filter(|text| !text.trim().is_empty())
            .map(|text| AnalysisResult {
                text: Some(text.to_string()),
                ..self.analyzer.analyze(text)
            })
            .collect();

        debug!(
            "Analyzed {} of {} batch rows",
            results.len(),
            texts.len()
        );

        results
    }

    /// Tallies the labels of `results` into a breakdown.
    pub fn summarize(results: &[AnalysisResult]) -> SentimentBreakdown {
        SentimentBreakdown::from_results(results)
    }
}
