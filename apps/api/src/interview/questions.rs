//! Interview question handling: parsing the model's reply and normalising stored
//! questions for reads.

/// Lines this short are headings, numbering or noise rather than questions.
const MIN_QUESTION_CHARS: usize = 10;

pub const NO_QUESTIONS_PLACEHOLDER: &str = "No interview questions available";

/// Splits the question-generation reply into one question per non-trivial line.
pub fn parse_questions(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_QUESTION_CHARS)
        .map(String::from)
        .collect()
}

/// Drops blank entries; an empty result becomes the single placeholder question.
pub fn normalize_questions(stored: &[String]) -> Vec<String> {
    let questions: Vec<String> = stored
        .iter()
        .filter(|q| !q.trim().is_empty())
        .cloned()
        .collect();

    if questions.is_empty() {
        vec![NO_QUESTIONS_PLACEHOLDER.to_string()]
    } else {
        questions
    }
}
