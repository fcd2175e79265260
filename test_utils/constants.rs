pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const EXPECTED_LABEL_PREFIX: &str = "EXPECTED_LABEL:";
pub const EXPECTED_ASPECT_PREFIX: &str = "EXPECTED_ASPECT:";
pub const COMMENT_PREFIX: &str = "COMMENT:";

/// Tolerance when comparing scores of repeated analyses.
pub const SCORE_EPSILON: f64 = 1e-9;
