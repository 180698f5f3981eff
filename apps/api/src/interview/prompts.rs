// Interview LLM prompt templates.
// All prompts for the interview module are defined here.

use crate::models::resume::JobPreferences;

/// Résumé text beyond this many characters is dropped before prompting.
pub const MAX_RESUME_CHARS: usize = 3000;

/// Substituted for questions the candidate left unanswered.
pub const MISSING_ANSWER: &str = "(no answer provided)";

pub const QUESTION_PROMPT: &str = r#"Generate 5 professional interview questions based on this resume:

Resume Content:
{resume_text}

Job Preferences: {job_preferences}

Guidelines:
1. Create targeted, role-specific questions
2. Cover technical and behavioral aspects
3. Relate questions to the resume's experience
4. Ensure questions reveal candidate's capabilities

Only give the questions, one per line. No intro, no outro; start directly with the first question."#;

pub const EVALUATION_PROMPT: &str = r#"Provide a detailed evaluation of the candidate's interview performance:

{transcript}

Please structure your response exactly as follows:

Overall Performance Score: [Score]/100

Technical Skills Assessment:
[Detailed analysis of technical capabilities]

Communication Skills:
[Analysis of communication effectiveness]

Problem-Solving Approach:
[Evaluation of problem-solving methodology]

Key Strengths:
- [Strength 1]
- [Strength 2]
- [Strength 3]

Areas for Improvement:
- [Improvement 1]
- [Improvement 2]
- [Improvement 3]

Detailed Feedback:
[Comprehensive evaluation of all aspects]"#;

/// Keeps at most `MAX_RESUME_CHARS` characters, never splitting a character.
pub fn truncate_resume_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_RESUME_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_question_prompt(resume_text: &str, preferences: &JobPreferences) -> String {
    let preferences_json = serde_json::to_string(preferences).unwrap_or_else(|_| "{}".into());
    QUESTION_PROMPT
        .replace("{job_preferences}", &preferences_json)
        .replace("{resume_text}", truncate_resume_text(resume_text))
}

pub fn build_evaluation_prompt(questions: &[String], answers: &[String]) -> String {
    EVALUATION_PROMPT.replace("{transcript}", &format_answers(questions, answers))
}

/// "Question N: …\nAnswer: …" blocks separated by blank lines.
fn format_answers(questions: &[String], answers: &[String]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let answer = answers
                .get(i)
                .map(String::as_str)
                .filter(|a| !a.trim().is_empty())
                .unwrap_or(MISSING_ANSWER);
            format!("Question {}: {}\nAnswer: {}", i + 1, question, answer)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
