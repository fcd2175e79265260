pub mod constants;
pub mod models;

use constants::{COMMENT_PREFIX, EXPECTED_ASPECT_PREFIX, EXPECTED_LABEL_PREFIX};
use models::EvaluationResult;
use sentiment_sniffer::{Aspect, SentimentLabel, TextAnalyzer};
use std::{fs, path::Path};

/// Parses a label display name ("Very Negative", "Neutral", ...).
pub fn parse_label(name: &str) -> Option<SentimentLabel> {
    SentimentLabel::ALL
        .iter()
        .copied()
        .find(|label| label.name().eq_ignore_ascii_case(name.trim()))
}

// Helper function to collect the values of lines starting with `prefix`
fn get_prefixed_values(file_path: &Path, prefix: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix(prefix))
        .map(|value| value.trim().to_string())
        .collect()
}

/// Labels accepted for the fixture; `EXPECTED_LABEL: Negative|Very Negative` allows either.
pub fn get_expected_labels(file_path: &Path) -> Vec<SentimentLabel> {
    get_prefixed_values(file_path, EXPECTED_LABEL_PREFIX)
        .iter()
        .flat_map(|value| value.split('|').map(str::to_string).collect::<Vec<_>>())
        .map(|name| {
            parse_label(&name)
                .unwrap_or_else(|| panic!("{:?} - Unknown label {:?}", file_path, name))
        })
        .collect()
}

pub fn get_expected_aspects(file_path: &Path) -> Vec<Aspect> {
    get_prefixed_values(file_path, EXPECTED_ASPECT_PREFIX)
}

/// The fixture's text, without its `EXPECTED_*:` and `COMMENT:` lines.
pub fn get_fixture_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(EXPECTED_LABEL_PREFIX)
                && !line.starts_with(EXPECTED_ASPECT_PREFIX)
                && !line.starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(
    test_file_path: &Path,
    analyzer: &TextAnalyzer,
    use_assertions: bool,
) -> EvaluationResult {
    let text = get_fixture_text(test_file_path);

    // Log the filtered text
    eprintln!("Filtered text: {}", text);

    let result = analyzer.analyze(&text);

    let evaluation_result = EvaluationResult::new(
        &get_expected_labels(test_file_path),
        &get_expected_aspects(test_file_path),
        &result,
    );

    if use_assertions {
        assert!(
            evaluation_result.is_label_match(),
            "{:?} - Expected one of {:?}, but got {:?} (score {})",
            test_file_path,
            evaluation_result.expected_labels,
            evaluation_result.actual_label,
            result.sentiment.score
        );

        assert!(
            evaluation_result.false_negatives.is_empty(),
            "{:?} - Expected aspects {:?} were not found in {:?}",
            test_file_path,
            evaluation_result.false_negatives,
            result.aspects
        );
    }

    evaluation_result
}
