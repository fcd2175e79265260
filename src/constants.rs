use crate::types::Valence;

// Scalar increase/decrease applied by booster words ("very", "barely", ...).
pub const BOOSTER_INCREMENT: Valence = 0.293;
pub const BOOSTER_DECREMENT: Valence = -0.293;

/// Added to the valence of an ALL-CAPS sentiment word when the text mixes case.
pub const CAPS_INCREMENT: Valence = 0.733;

/// Multiplier applied to the valence of a negated sentiment word.
pub const NEGATION_SCALAR: Valence = -0.74;

/// Approximates the maximum expected sum of valences for normalization.
pub const NORMALIZATION_ALPHA: Valence = 15.0;

pub const EXCLAMATION_INCREMENT: Valence = 0.292;
pub const MAX_EXCLAMATION_COUNT: usize = 4;

pub const QUESTION_INCREMENT: Valence = 0.18;
pub const MAX_QUESTION_AMPLIFIER: Valence = 0.96;

/// Sentiments before a contrastive "but" are dampened, those after it emphasized.
pub const BUT_PRE_SCALAR: Valence = 0.5;
pub const BUT_POST_SCALAR: Valence = 1.5;

/// "never so good" / "never this bad" read as emphasis rather than negation.
pub const NEVER_EMPHASIS_SCALAR: Valence = 1.25;

// Booster influence decays with distance from the sentiment word.
pub const BOOSTER_DAMPING_DISTANCE_2: Valence = 0.95;
pub const BOOSTER_DAMPING_DISTANCE_3: Valence = 0.9;

pub const NEGATION_WORDS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

/// Words (and short phrases) that scale the intensity of the sentiment word they precede.
pub const BOOSTER_WORDS: &[(&str, Valence)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("amazingly", BOOSTER_INCREMENT),
    ("awfully", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("considerable", BOOSTER_INCREMENT),
    ("considerably", BOOSTER_INCREMENT),
    ("decidedly", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("enormous", BOOSTER_INCREMENT),
    ("enormously", BOOSTER_INCREMENT),
    ("entirely", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT),
    ("exceptional", BOOSTER_INCREMENT),
    ("exceptionally", BOOSTER_INCREMENT),
    ("extreme", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("fabulously", BOOSTER_INCREMENT),
    ("flipping", BOOSTER_INCREMENT),
    ("flippin", BOOSTER_INCREMENT),
    ("fully", BOOSTER_INCREMENT),
    ("greatly", BOOSTER_INCREMENT),
    ("hella", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("hugely", BOOSTER_INCREMENT),
    ("incredible", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("intensely", BOOSTER_INCREMENT),
    ("major", BOOSTER_INCREMENT),
    ("majorly", BOOSTER_INCREMENT),
    ("more", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("particularly", BOOSTER_INCREMENT),
    ("purely", BOOSTER_INCREMENT),
    ("quite", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("remarkably", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("substantially", BOOSTER_INCREMENT),
    ("thoroughly", BOOSTER_INCREMENT),
    ("total", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("tremendous", BOOSTER_INCREMENT),
    ("tremendously", BOOSTER_INCREMENT),
    ("uber", BOOSTER_INCREMENT),
    ("unbelievably", BOOSTER_INCREMENT),
    ("unusually", BOOSTER_INCREMENT),
    ("utter", BOOSTER_INCREMENT),
    ("utterly", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("almost", BOOSTER_DECREMENT),
    ("barely", BOOSTER_DECREMENT),
    ("hardly", BOOSTER_DECREMENT),
    ("just enough", BOOSTER_DECREMENT),
    ("kind of", BOOSTER_DECREMENT),
    ("kinda", BOOSTER_DECREMENT),
    ("kindof", BOOSTER_DECREMENT),
    ("kind-of", BOOSTER_DECREMENT),
    ("less", BOOSTER_DECREMENT),
    ("little", BOOSTER_DECREMENT),
    ("marginal", BOOSTER_DECREMENT),
    ("marginally", BOOSTER_DECREMENT),
    ("occasional", BOOSTER_DECREMENT),
    ("occasionally", BOOSTER_DECREMENT),
    ("partly", BOOSTER_DECREMENT),
    ("scarce", BOOSTER_DECREMENT),
    ("scarcely", BOOSTER_DECREMENT),
    ("slight", BOOSTER_DECREMENT),
    ("slightly", BOOSTER_DECREMENT),
    ("somewhat", BOOSTER_DECREMENT),
    ("sort of", BOOSTER_DECREMENT),
    ("sorta", BOOSTER_DECREMENT),
    ("sortof", BOOSTER_DECREMENT),
    ("sort-of", BOOSTER_DECREMENT),
];

/// Multiword expressions whose meaning overrides the valence of their final word.
pub const SENTIMENT_IDIOMS: &[(&str, Valence)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
];

/// Template posts replayed by the simulated social feed, as `(text, likes)`.
pub const FEED_POST_TEMPLATES: &[(&str, u32)] = &[
    ("Tesla FSD is mind-blowing!", 3200),
    ("AI will change humanity.", 2800),
    ("Starship launch perfect!", 5000),
    ("Traffic is awful.", 900),
    ("Neuralink success!", 4200),
];

/// Header names recognized on the first line of an uploaded review table.
pub const BATCH_HEADER_NAMES: &[&str] = &["text", "review", "comment", "sentence"];

/// A small review table, in the format accepted by `read_batch_texts`.
pub const SAMPLE_REVIEWS_CSV: &str = r#"text
"The food was amazing, but the service was slow."
"I love the camera quality!"
"Terrible support, never again."
"It's okay."
"Battery dies fast."
"Great value!"
"Worst purchase ever.""#;
