//! Calorie analysis service.

mod prompt;
mod service;

pub use prompt::ANALYSIS_PROMPT;
pub use service::CalorieAnalyzer;
