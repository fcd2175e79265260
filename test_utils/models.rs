pub mod evaluation_result;
pub use evaluation_result::EvaluationResult;
