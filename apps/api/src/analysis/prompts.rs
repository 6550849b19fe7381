// Prompt constants for the analysis module.

/// ATS analysis prompt. Replace `{resume_text}` and `{job_description}`
/// before sending. The trailing instruction asks for bare JSON; the model
/// ignores it often enough that recovery is handled downstream.
pub const ATS_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert ATS (Applicant Tracking System) analyzer.

RESUME TEXT:
{resume_text}

JOB DESCRIPTION:
{job_description}

Analyze the resume against the job description and provide:
1. An ATS compatibility score from 0-100
2. A list of specific improvement suggestions
3. A list of important keywords from the job description that are present in the resume

Format your response as a JSON object with the following structure:
{
    "score": <number>,
    "feedback": [<string>, <string>, ...],
    "keywords": [<string>, <string>, ...]
}

The response should be strictly in valid JSON format with no additional text."#;

pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ATS_ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_inputs_verbatim() {
        let prompt = build_analysis_prompt("RESUME BODY HERE", "JD BODY HERE");
        assert!(prompt.contains("RESUME BODY HERE"));
        assert!(prompt.contains("JD BODY HERE"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_prompt_keeps_json_shape_braces() {
        let prompt = build_analysis_prompt("r", "j");
        assert!(prompt.contains(r#""score": <number>"#));
        assert!(prompt.contains("strictly in valid JSON format"));
    }
}
