//! Keyword scoring of feedback sections and the composite scores derived from them.

use serde::{Deserialize, Serialize};

use crate::interview::extract::DetailedFeedback;

/// Score used when a section mentions none of the rating keywords.
pub const DEFAULT_CATEGORY_SCORE: u32 = 70;

/// Rating keywords in priority order; the first one present wins.
const KEYWORD_SCORES: &[(&str, u32)] = &[
    ("excellent", 90),
    ("strong", 85),
    ("good", 80),
    ("solid", 75),
    ("adequate", 70),
    ("average", 65),
    ("fair", 60),
    ("poor", 50),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Technical,
    Communication,
    ProblemSolving,
}

/// Per-category and composite scores for one interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub technical_score: u32,
    pub communication_score: u32,
    pub problem_solving_score: u32,
    pub cultural_fit_score: u32,
    pub leadership_score: u32,
}

/// Maps qualitative wording to a 0–100 score.
///
/// Every category shares the same keyword table, so `_category` does not change
/// the result.
pub fn calculate_score(section_text: &str, _category: Category) -> u32 {
    let text = section_text.to_lowercase();
    KEYWORD_SCORES
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_CATEGORY_SCORE)
}

/// Average of two scores, halves rounded up.
pub fn composite_score(a: u32, b: u32) -> u32 {
    (a + b + 1) / 2
}

impl ScoreCard {
    pub fn from_feedback(feedback: &DetailedFeedback) -> Self {
        let technical = calculate_score(&feedback.technical, Category::Technical);
        let communication = calculate_score(&feedback.communication, Category::Communication);
        let problem_solving =
            calculate_score(&feedback.problem_solving, Category::ProblemSolving);

        Self {
            technical_score: technical,
            communication_score: communication,
            problem_solving_score: problem_solving,
            cultural_fit_score: composite_score(technical, communication),
            leadership_score: composite_score(communication, problem_solving),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_maps_to_its_score() {
        for (keyword, expected) in KEYWORD_SCORES {
            let text = format!("The candidate showed {keyword} judgement.");
            assert_eq!(calculate_score(&text, Category::Technical), *expected);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(calculate_score("EXCELLENT work", Category::Technical), 90);
        assert_eq!(calculate_score("Solid", Category::Communication), 75);
    }

    #[test]
    fn test_priority_order_beats_position() {
        let text = "Poor structure at first, but excellent recovery.";
        assert_eq!(calculate_score(text, Category::Technical), 90);
        assert_eq!(calculate_score("fair but good", Category::Communication), 80);
    }

    #[test]
    fn test_category_does_not_change_score() {
        let text = "A strong but poor answer";
        let scores: Vec<u32> = [
            Category::Technical,
            Category::Communication,
            Category::ProblemSolving,
        ]
        .into_iter()
        .map(|c| calculate_score(text, c))
        .collect();
        assert_eq!(scores, vec![85, 85, 85]);
    }

    #[test]
    fn test_substring_match() {
        // "strongly" contains "strong"
        assert_eq!(calculate_score("strongly agree", Category::Technical), 85);
    }

    #[test]
    fn test_no_keyword_defaults() {
        assert_eq!(calculate_score("", Category::Technical), DEFAULT_CATEGORY_SCORE);
        assert_eq!(
            calculate_score("Nothing notable.", Category::ProblemSolving),
            DEFAULT_CATEGORY_SCORE
        );
    }

    #[test]
    fn test_composite_is_rounded_average_over_full_range() {
        for a in 0..=100u32 {
            for b in 0..=100u32 {
                let expected = ((a + b) as f64 / 2.0).round() as u32;
                assert_eq!(composite_score(a, b), expected, "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_score_card_from_feedback() {
        let feedback = DetailedFeedback {
            technical: "Excellent depth".to_string(),
            communication: "Good clarity".to_string(),
            problem_solving: "Fair approach".to_string(),
            overall: String::new(),
        };
        let card = ScoreCard::from_feedback(&feedback);
        assert_eq!(card.technical_score, 90);
        assert_eq!(card.communication_score, 80);
        assert_eq!(card.problem_solving_score, 60);
        assert_eq!(card.cultural_fit_score, 85);
        assert_eq!(card.leadership_score, 70);
    }

    #[test]
    fn test_empty_feedback_uses_defaults() {
        let card = ScoreCard::from_feedback(&DetailedFeedback::default());
        assert_eq!(card.technical_score, 70);
        assert_eq!(card.cultural_fit_score, 70);
        assert_eq!(card.leadership_score, 70);
    }
}
