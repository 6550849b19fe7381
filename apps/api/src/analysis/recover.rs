//! Response recovery — turns whatever text the model produced into a
//! guaranteed-shape `AnalysisResult`.
//!
//! Three-step fallback chain, terminal on first success:
//! 1. parse the whole response as JSON;
//! 2. parse the substring between the first `{` and the last `}` (models
//!    like to wrap JSON in prose or markdown fences);
//! 3. give up and return a fixed sentinel result.
//!
//! Step 2 is a heuristic, not a brace matcher: a response containing two
//! unrelated JSON fragments is parsed from the first open brace to the last
//! close brace and will usually fall through to the sentinel. That matches
//! the documented contract; do not replace it with anything smarter.

use serde::{Deserialize, Serialize};

pub const PARSE_FAILURE_FEEDBACK: &str = "Error parsing AI response. Please try again.";

/// The shape every analysis caller is guaranteed, even when the model
/// misbehaves. Unknown fields in the model's JSON are ignored; missing
/// fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub score: u32,
    pub feedback: Vec<String>,
    pub keywords: Vec<String>,
}

impl AnalysisResult {
    /// The sentinel returned when no JSON could be recovered from the
    /// model's response.
    pub fn degraded() -> Self {
        AnalysisResult {
            score: 50,
            feedback: vec![PARSE_FAILURE_FEEDBACK.to_string()],
            keywords: vec![],
        }
    }
}

/// Recovers an `AnalysisResult` from raw model output. Pure and total:
/// same input, same output, and it never fails.
pub fn recover_analysis(raw: &str) -> AnalysisResult {
    // Step 1: the whole response is valid JSON
    if let Ok(result) = serde_json::from_str::<AnalysisResult>(raw) {
        return result;
    }

    // Step 2: first `{` to last `}` — strips prose and code fences
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(result) = serde_json::from_str::<AnalysisResult>(&raw[start..=end]) {
                return result;
            }
        }
    }

    // Step 3: nothing recoverable
    AnalysisResult::degraded()
}
