//! Transcript extraction: pulls scores, bullet lists and named sections out of the
//! free-text evaluation the model returns.
//!
//! Every function here is total: missing structure yields an empty list, an empty
//! string or the default score, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Score reported when the transcript carries no usable overall score.
pub const DEFAULT_OVERALL_SCORE: u32 = 75;
pub const MAX_SCORE: u32 = 100;
/// Cap applied to bullets recovered by the fallback scan.
const FALLBACK_BULLET_LIMIT: usize = 3;

const BULLET_MARKERS: &[char] = &['-', '*', '•'];

static STRENGTHS_MARKER: Lazy<Regex> = Lazy::new(|| marker("Key Strengths:"));
static IMPROVEMENTS_MARKER: Lazy<Regex> = Lazy::new(|| marker("Areas for Improvement:"));
static DETAILED_FEEDBACK_MARKER: Lazy<Regex> = Lazy::new(|| marker("Detailed Feedback:"));

/// Any line starting with a dash, anywhere in the transcript.
static DASH_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^-[ \t]*([^\r\n]*)").expect("valid bullet pattern"));

/// Tried in order; the first pattern that matches decides the score.
static SCORE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)Overall Performance Score:[*\s]*([0-9]+)\s*/\s*100",
        r"(?i)Overall Performance Score:[*\s]*([0-9]+)",
        r"(?i)Overall Score:[*\s]*([0-9]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid score pattern"))
    .collect()
});

static TECHNICAL_SECTION: Lazy<Regex> = Lazy::new(|| section("Technical Skills Assessment:"));
static COMMUNICATION_SECTION: Lazy<Regex> = Lazy::new(|| section("Communication Skills:"));
static PROBLEM_SOLVING_SECTION: Lazy<Regex> = Lazy::new(|| section("Problem-Solving Approach:"));
static OVERALL_SECTION: Lazy<Regex> = Lazy::new(|| section("Detailed Feedback:"));

/// The four free-text feedback sections of an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedFeedback {
    pub technical: String,
    pub communication: String,
    pub problem_solving: String,
    pub overall: String,
}

/// Everything recovered from one evaluation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFeedback {
    pub overall_score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub detailed_feedback: DetailedFeedback,
}

pub fn extract_feedback(text: &str) -> ExtractedFeedback {
    ExtractedFeedback {
        overall_score: extract_score(text),
        strengths: extract_strengths(text),
        improvements: extract_improvements(text),
        detailed_feedback: extract_detailed_feedback(text),
    }
}

/// Bullets under "Key Strengths:" up to "Areas for Improvement:".
///
/// Without the heading, the first three dash bullets of the whole transcript are
/// used instead. The heading branch is not capped.
pub fn extract_strengths(text: &str) -> Vec<String> {
    match marked_span(text, &STRENGTHS_MARKER, &IMPROVEMENTS_MARKER) {
        Some(span) => span_bullets(span),
        None => dash_bullets(text)
            .take(FALLBACK_BULLET_LIMIT)
            .map(String::from)
            .collect(),
    }
}

/// Bullets under "Areas for Improvement:" up to "Detailed Feedback:".
///
/// Without the heading, falls back to the first three dash bullets that mention
/// "improve".
pub fn extract_improvements(text: &str) -> Vec<String> {
    match marked_span(text, &IMPROVEMENTS_MARKER, &DETAILED_FEEDBACK_MARKER) {
        Some(span) => span_bullets(span),
        None => dash_bullets(text)
            .filter(|b| b.to_lowercase().contains("improve"))
            .take(FALLBACK_BULLET_LIMIT)
            .map(String::from)
            .collect(),
    }
}

pub fn extract_score(text: &str) -> u32 {
    for pattern in SCORE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            // Out of range (or too many digits to parse) falls back to the default.
            return caps[1]
                .parse::<u32>()
                .ok()
                .filter(|score| *score <= MAX_SCORE)
                .unwrap_or(DEFAULT_OVERALL_SCORE);
        }
    }
    DEFAULT_OVERALL_SCORE
}

/// Captures each named section independently, up to the next blank line.
pub fn extract_detailed_feedback(text: &str) -> DetailedFeedback {
    DetailedFeedback {
        technical: section_text(text, &TECHNICAL_SECTION),
        communication: section_text(text, &COMMUNICATION_SECTION),
        problem_solving: section_text(text, &PROBLEM_SOLVING_SECTION),
        overall: section_text(text, &OVERALL_SECTION),
    }
}

fn marker(heading: &str) -> Regex {
    Regex::new(&format!("(?i){}", regex::escape(heading))).expect("valid marker pattern")
}

fn section(heading: &str) -> Regex {
    Regex::new(&format!(
        r"(?is){}(.*?)(?:\r?\n[ \t]*\r?\n|\z)",
        regex::escape(heading)
    ))
    .expect("valid section pattern")
}

/// Text after `open` and before the first `close` that follows it (or end of text).
fn marked_span<'a>(text: &'a str, open: &Regex, close: &Regex) -> Option<&'a str> {
    let start = open.find(text)?.end();
    let rest = &text[start..];
    let end = close.find(rest).map_or(rest.len(), |m| m.start());
    Some(&rest[..end])
}

fn span_bullets(span: &str) -> Vec<String> {
    span.lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Drops a single leading bullet marker. A `*` only counts when followed by
/// whitespace, so markdown bold (`**text**`) is left intact.
fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    let mut chars = line.chars();
    match chars.next() {
        Some('*') if !chars.as_str().starts_with(char::is_whitespace) => line,
        Some(marker) if BULLET_MARKERS.contains(&marker) => chars.as_str().trim(),
        _ => line,
    }
}

fn dash_bullets(text: &str) -> impl Iterator<Item = &str> {
    DASH_BULLET
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|b| !b.is_empty())
}

fn section_text(text: &str, pattern: &Regex) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        // Markdown bold headings leave a dangling `**` after the colon.
        .map(|m| m.as_str().trim().trim_start_matches('*').trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_TRANSCRIPT: &str = "\
Overall Performance Score: 78/100

Technical Skills Assessment:
Solid grasp of distributed systems fundamentals.

Communication Skills:
Excellent, concise explanations throughout.

Problem-Solving Approach:
Fair. Jumped to solutions before clarifying constraints.

Key Strengths:
- Clear communicator
- Deep Rust experience
- Good testing instincts

Areas for Improvement:
- Ask clarifying questions
- Quantify impact
- Discuss trade-offs

Detailed Feedback:
A capable candidate who would benefit from slowing down.";

    #[test]
    fn test_end_to_end_scenario() {
        let transcript = "Overall Performance Score: 82/100\n\nKey Strengths:\n- Clear communicator\n- Strong technical depth\n\nAreas for Improvement:\n- Needs more examples\n";
        let feedback = extract_feedback(transcript);
        assert_eq!(feedback.overall_score, 82);
        assert_eq!(
            feedback.strengths,
            vec!["Clear communicator", "Strong technical depth"]
        );
        assert_eq!(feedback.improvements, vec!["Needs more examples"]);
    }

    #[test]
    fn test_full_transcript_sections() {
        let feedback = extract_feedback(FULL_TRANSCRIPT);
        assert_eq!(feedback.overall_score, 78);
        assert_eq!(feedback.strengths.len(), 3);
        assert_eq!(
            feedback.improvements,
            vec![
                "Ask clarifying questions",
                "Quantify impact",
                "Discuss trade-offs"
            ]
        );
        assert_eq!(
            feedback.detailed_feedback.technical,
            "Solid grasp of distributed systems fundamentals."
        );
        assert_eq!(
            feedback.detailed_feedback.communication,
            "Excellent, concise explanations throughout."
        );
        assert_eq!(
            feedback.detailed_feedback.problem_solving,
            "Fair. Jumped to solutions before clarifying constraints."
        );
        assert_eq!(
            feedback.detailed_feedback.overall,
            "A capable candidate who would benefit from slowing down."
        );
    }

    #[test]
    fn test_score_exact_for_every_valid_value() {
        for n in 0..=100 {
            let text = format!("Intro\nOverall Performance Score: {n}/100\nMore");
            assert_eq!(extract_score(&text), n);
        }
    }

    #[test]
    fn test_score_defaults_without_pattern() {
        assert_eq!(extract_score("The candidate did fine."), DEFAULT_OVERALL_SCORE);
        assert_eq!(extract_score(""), DEFAULT_OVERALL_SCORE);
    }

    #[test]
    fn test_score_out_of_range_defaults() {
        assert_eq!(extract_score("Overall Performance Score: 150/100"), 75);
        assert_eq!(
            extract_score("Overall Performance Score: 99999999999999999999"),
            75
        );
    }

    #[test]
    fn test_score_first_matching_pattern_decides() {
        // The "/100" form is out of range, so the later "Overall Score" is never consulted.
        let text = "Overall Performance Score: 120/100\nOverall Score: 60";
        assert_eq!(extract_score(text), 75);
    }

    #[test]
    fn test_score_alternate_forms() {
        assert_eq!(extract_score("overall performance score: 64"), 64);
        assert_eq!(extract_score("Overall Score:   91 out of 100"), 91);
        assert_eq!(extract_score("**Overall Performance Score:** 88/100"), 88);
    }

    #[test]
    fn test_strengths_heading_is_case_insensitive_and_uncapped() {
        let text = "key strengths:\n- One\n-Two\n  - Three\n- Four\n\nareas for improvement:\n- X";
        assert_eq!(extract_strengths(text), vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_strengths_without_improvements_runs_to_end() {
        let text = "Key Strengths:\n* Curious\n• Calm under pressure";
        assert_eq!(extract_strengths(text), vec!["Curious", "Calm under pressure"]);
    }

    #[test]
    fn test_bold_lines_keep_their_markup() {
        let text = "Key Strengths:\n**Clear communicator**\n* **Owns outcomes**\n- - nested dash";
        assert_eq!(
            extract_strengths(text),
            vec!["**Clear communicator**", "**Owns outcomes**", "- nested dash"]
        );
    }

    #[test]
    fn test_strengths_fallback_takes_first_three_bullets() {
        let text = "Summary\n- Alpha\n- Beta\n-   \n- Gamma\n- Delta";
        assert_eq!(extract_strengths(text), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_strengths_empty_without_heading_or_bullets() {
        assert!(extract_strengths("No structure here at all.").is_empty());
    }

    #[test]
    fn test_improvements_stop_at_detailed_feedback() {
        let text = "Areas for Improvement:\n- Be concise\n\nDetailed Feedback:\n- not an improvement";
        assert_eq!(extract_improvements(text), vec!["Be concise"]);
    }

    #[test]
    fn test_improvements_fallback_filters_on_improve() {
        let text = "- Good energy\n- Could improve pacing\n- IMPROVE examples\n- Needs to improve depth\n- Improvement in SQL";
        assert_eq!(
            extract_improvements(text),
            vec![
                "Could improve pacing",
                "IMPROVE examples",
                "Needs to improve depth"
            ]
        );
    }

    #[test]
    fn test_detailed_feedback_missing_sections_are_empty() {
        let feedback = extract_detailed_feedback("Communication Skills: clear and direct");
        assert_eq!(feedback.communication, "clear and direct");
        assert_eq!(feedback.technical, "");
        assert_eq!(feedback.problem_solving, "");
        assert_eq!(feedback.overall, "");
    }

    #[test]
    fn test_detailed_feedback_sections_may_overlap() {
        // No blank line between sections: the technical capture runs into the next header.
        let text = "Technical Skills Assessment: strong\nCommunication Skills: good";
        let feedback = extract_detailed_feedback(text);
        assert_eq!(
            feedback.technical,
            "strong\nCommunication Skills: good"
        );
        assert_eq!(feedback.communication, "good");
    }

    #[test]
    fn test_detailed_feedback_handles_markdown_bold_and_crlf() {
        let text = "**Technical Skills Assessment:**\r\nAdequate depth.\r\n\r\nNext";
        assert_eq!(
            extract_detailed_feedback(text).technical,
            "Adequate depth."
        );
    }
}
