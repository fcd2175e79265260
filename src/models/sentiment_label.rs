use crate::types::CompoundScore;
use serde::{Serialize, Serializer};
use std::fmt;

/// One of five ordered sentiment categories, each bound to a display color.
///
/// Ordering follows the underlying compound score, from `VeryNegative` to `VeryPositive`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    #[default]
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentLabel {
    /// Every label, in ascending score order.
    pub const ALL: [SentimentLabel; 5] = [
        SentimentLabel::VeryNegative,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
        SentimentLabel::VeryPositive,
    ];

    /// Maps a compound score to its label.
    ///
    /// | condition           | label         |
    /// |---------------------|---------------|
    /// | c <= -0.6           | Very Negative |
    /// | -0.6 < c <= -0.2    | Negative      |
    /// | -0.2 < c < 0.2      | Neutral       |
    /// | 0.2 <= c < 0.6      | Positive      |
    /// | c >= 0.6            | Very Positive |
    ///
    /// A NaN score is Neutral.
    pub fn from_compound(compound: CompoundScore) -> Self {
        if compound.is_nan() {
            SentimentLabel::Neutral
        } else if compound <= -0.6 {
            SentimentLabel::VeryNegative
        } else if compound <= -0.2 {
            SentimentLabel::Negative
        } else if compound < 0.2 {
            SentimentLabel::Neutral
        } else if compound < 0.6 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::VeryPositive
        }
    }

    /// The display name ("Very Negative", "Neutral", ...).
    pub fn name(&self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "Very Negative",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::VeryPositive => "Very Positive",
        }
    }

    /// The display color bound to the label.
    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "darkred",
            SentimentLabel::Negative => "red",
            SentimentLabel::Neutral => "gray",
            SentimentLabel::Positive => "blue",
            SentimentLabel::VeryPositive => "darkblue",
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, SentimentLabel::Positive | SentimentLabel::VeryPositive)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, SentimentLabel::Negative | SentimentLabel::VeryNegative)
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for SentimentLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
