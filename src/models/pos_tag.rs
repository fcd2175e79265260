use crate::Error;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A Penn Treebank part-of-speech tag.
///
/// Variant names spell the category out; `as_str` / `FromStr` use the Treebank
/// codes (`NN`, `JJR`, `PRP$`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    CoordinatingConjunction,
    CardinalNumber,
    Determiner,
    ExistentialThere,
    Preposition,
    Adjective,
    ComparativeAdjective,
    SuperlativeAdjective,
    Modal,
    Noun,
    PluralNoun,
    ProperNoun,
    PluralProperNoun,
    PossessiveEnding,
    PersonalPronoun,
    PossessivePronoun,
    Adverb,
    ComparativeAdverb,
    SuperlativeAdverb,
    Particle,
    To,
    Interjection,
    Verb,
    PastTenseVerb,
    Gerund,
    PastParticiple,
    PresentVerb,
    ThirdPersonPresentVerb,
    WhDeterminer,
    WhPronoun,
    PossessiveWhPronoun,
    WhAdverb,
    Symbol,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CoordinatingConjunction => "CC",
            PosTag::CardinalNumber => "CD",
            PosTag::Determiner => "DT",
            PosTag::ExistentialThere => "EX",
            PosTag::Preposition => "IN",
            PosTag::Adjective => "JJ",
            PosTag::ComparativeAdjective => "JJR",
            PosTag::SuperlativeAdjective => "JJS",
            PosTag::Modal => "MD",
            PosTag::Noun => "NN",
            PosTag::PluralNoun => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::PluralProperNoun => "NNPS",
            PosTag::PossessiveEnding => "POS",
            PosTag::PersonalPronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::Adverb => "RB",
            PosTag::ComparativeAdverb => "RBR",
            PosTag::SuperlativeAdverb => "RBS",
            PosTag::Particle => "RP",
            PosTag::To => "TO",
            PosTag::Interjection => "UH",
            PosTag::Verb => "VB",
            PosTag::PastTenseVerb => "VBD",
            PosTag::Gerund => "VBG",
            PosTag::PastParticiple => "VBN",
            PosTag::PresentVerb => "VBP",
            PosTag::ThirdPersonPresentVerb => "VBZ",
            PosTag::WhDeterminer => "WDT",
            PosTag::WhPronoun => "WP",
            PosTag::PossessiveWhPronoun => "WP$",
            PosTag::WhAdverb => "WRB",
            PosTag::Symbol => "SYM",
        }
    }

    /// Common or proper noun, singular or plural (`NN`, `NNS`, `NNP`, `NNPS`).
    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::PluralNoun | PosTag::ProperNoun | PosTag::PluralProperNoun
        )
    }

    /// Adjective in any degree (`JJ`, `JJR`, `JJS`).
    pub fn is_adjective(&self) -> bool {
        matches!(
            self,
            PosTag::Adjective | PosTag::ComparativeAdjective | PosTag::SuperlativeAdjective
        )
    }

    /// Any verb form (`VB`, `VBD`, `VBG`, `VBN`, `VBP`, `VBZ`).
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::Verb
                | PosTag::PastTenseVerb
                | PosTag::Gerund
                | PosTag::PastParticiple
                | PosTag::PresentVerb
                | PosTag::ThirdPersonPresentVerb
        )
    }

    /// Tags after which a word reads as the head of a noun phrase.
    pub fn is_noun_phrase_modifier(&self) -> bool {
        self.is_adjective()
            || matches!(
                self,
                PosTag::Determiner
                    | PosTag::PossessivePronoun
                    | PosTag::PossessiveEnding
                    | PosTag::CardinalNumber
            )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PosTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let tag = match code {
            "CC" => PosTag::CoordinatingConjunction,
            "CD" => PosTag::CardinalNumber,
            "DT" | "PDT" => PosTag::Determiner,
            "EX" => PosTag::ExistentialThere,
            "IN" => PosTag::Preposition,
            "JJ" => PosTag::Adjective,
            "JJR" => PosTag::ComparativeAdjective,
            "JJS" => PosTag::SuperlativeAdjective,
            "MD" => PosTag::Modal,
            "NN" => PosTag::Noun,
            "NNS" => PosTag::PluralNoun,
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::PluralProperNoun,
            "POS" => PosTag::PossessiveEnding,
            "PRP" => PosTag::PersonalPronoun,
            "PRP$" => PosTag::PossessivePronoun,
            "RB" => PosTag::Adverb,
            "RBR" => PosTag::ComparativeAdverb,
            "RBS" => PosTag::SuperlativeAdverb,
            "RP" => PosTag::Particle,
            "TO" => PosTag::To,
            "UH" => PosTag::Interjection,
            "VB" => PosTag::Verb,
            "VBD" => PosTag::PastTenseVerb,
            "VBG" => PosTag::Gerund,
            "VBN" => PosTag::PastParticiple,
            "VBP" => PosTag::PresentVerb,
            "VBZ" => PosTag::ThirdPersonPresentVerb,
            "WDT" => PosTag::WhDeterminer,
            "WP" => PosTag::WhPronoun,
            "WP$" => PosTag::PossessiveWhPronoun,
            "WRB" => PosTag::WhAdverb,
            "SYM" => PosTag::Symbol,
            other => {
                return Err(Error::ParserError(format!(
                    "Unknown part-of-speech tag: {:?}",
                    other
                )))
            }
        };

        Ok(tag)
    }
}
