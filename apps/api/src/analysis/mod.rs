// ATS analysis pipeline: prompt construction, one model invocation, response
// recovery. All model calls go through llm_client — no direct HTTP here.

pub mod handlers;
pub mod prompts;
pub mod recover;

use crate::errors::AppError;
use crate::llm_client::GenerativeModel;

use self::prompts::build_analysis_prompt;
use self::recover::{recover_analysis, AnalysisResult};

/// Runs one ATS analysis against the model.
///
/// Malformed model *output* never fails this function — the recoverer
/// degrades it to a sentinel result. Only a transport-level failure reaching
/// the model surfaces as an error.
pub async fn analyze_resume(
    resume_text: &str,
    job_description: &str,
    oracle: &dyn GenerativeModel,
) -> Result<AnalysisResult, AppError> {
    let prompt = build_analysis_prompt(resume_text, job_description);
    let raw = oracle.generate(&prompt).await?;
    Ok(recover_analysis(&raw))
}
