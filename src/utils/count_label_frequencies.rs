use crate::models::SentimentLabel;
use crate::types::LabelFrequencyMap;

/// Tallies how often each sentiment label occurs.
///
/// Also returns the distinct labels in the order they were first encountered, which
/// is what ties between equally frequent labels are resolved against.
pub fn count_label_frequencies<I>(labels: I) -> (LabelFrequencyMap, Vec<SentimentLabel>)
where
    I: IntoIterator<Item = SentimentLabel>,
{
    let mut frequencies = LabelFrequencyMap::new();
    let mut first_seen = Vec::new();

    for label in labels {
        let count = frequencies.entry(label).or_insert(0);
        if *count == 0 {
            first_seen.push(label);
        }
        *count += 1;
    }

    (frequencies, first_seen)
}
