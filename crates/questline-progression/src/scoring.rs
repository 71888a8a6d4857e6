//! Skill scorer: quiz answers to a coarse [`SkillLevel`].
//!
//! Each quiz option is worth 0 to [`MAX_OPTION_SCORE`] points. The chosen
//! options' scores are summed per goal and bucketed by fixed thresholds:
//!
//! | Total score | Level          |
//! |-------------|----------------|
//! | 0--3        | `beginner`     |
//! | 4--7        | `familiar`     |
//! | 8--11       | `intermediate` |
//! | 12+         | `advanced`     |
//!
//! Scores are unsigned, so the negative totals the app never produces
//! cannot be expressed here at all.

use questline_types::{SkillAssessment, SkillLevel, SkillQuestion};

use crate::error::ProgressionError;

/// Highest score a single quiz option may carry.
pub const MAX_OPTION_SCORE: u8 = 3;

/// Lowest total score that rates as [`SkillLevel::Familiar`].
pub const FAMILIAR_MIN_SCORE: u32 = 4;

/// Lowest total score that rates as [`SkillLevel::Intermediate`].
pub const INTERMEDIATE_MIN_SCORE: u32 = 8;

/// Lowest total score that rates as [`SkillLevel::Advanced`].
pub const ADVANCED_MIN_SCORE: u32 = 12;

/// Map a quiz's total score to a skill level.
pub const fn score_to_level(total_score: u32) -> SkillLevel {
    if total_score >= ADVANCED_MIN_SCORE {
        SkillLevel::Advanced
    } else if total_score >= INTERMEDIATE_MIN_SCORE {
        SkillLevel::Intermediate
    } else if total_score >= FAMILIAR_MIN_SCORE {
        SkillLevel::Familiar
    } else {
        SkillLevel::Beginner
    }
}

/// Lowest total score that rates as `level`.
pub const fn min_score_for(level: SkillLevel) -> u32 {
    match level {
        SkillLevel::Beginner => 0,
        SkillLevel::Familiar => FAMILIAR_MIN_SCORE,
        SkillLevel::Intermediate => INTERMEDIATE_MIN_SCORE,
        SkillLevel::Advanced => ADVANCED_MIN_SCORE,
    }
}

/// Score a completed quiz and derive the goal's assessment.
///
/// `answers` holds one chosen option index per question, in question order.
/// Every question must be answered exactly once.
pub fn assess_answers(
    goal_id: &str,
    questions: &[SkillQuestion],
    answers: &[usize],
) -> Result<SkillAssessment, ProgressionError> {
    if questions.len() != answers.len() {
        return Err(ProgressionError::AnswerCountMismatch {
            goal_id: String::from(goal_id),
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let mut total_score: u32 = 0;
    for (question, &index) in questions.iter().zip(answers) {
        let option = question
            .options
            .get(index)
            .ok_or_else(|| ProgressionError::AnswerOutOfRange {
                question_id: question.id.clone(),
                index,
                option_count: question.options.len(),
            })?;

        if option.score > MAX_OPTION_SCORE {
            return Err(ProgressionError::InvalidOptionScore {
                question_id: question.id.clone(),
                index,
                score: option.score,
                max: MAX_OPTION_SCORE,
            });
        }

        total_score = total_score.checked_add(u32::from(option.score)).ok_or_else(|| {
            ProgressionError::ArithmeticOverflow {
                context: format!("quiz score overflow for goal {goal_id}"),
            }
        })?;
    }

    let level = score_to_level(total_score);
    tracing::debug!(goal_id, total_score, level = %level, "quiz assessed");

    Ok(SkillAssessment {
        goal_id: String::from(goal_id),
        level,
        answers: answers.to_vec(),
        total_score,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use questline_types::SkillOption;

    use super::*;

    fn question(id: &str, scores: &[u8]) -> SkillQuestion {
        SkillQuestion {
            id: String::from(id),
            prompt: format!("prompt for {id}"),
            options: scores
                .iter()
                .enumerate()
                .map(|(i, &score)| SkillOption {
                    label: format!("option {i}"),
                    score,
                })
                .collect(),
        }
    }

    // -----------------------------------------------------------------------
    // score_to_level
    // -----------------------------------------------------------------------

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(score_to_level(0), SkillLevel::Beginner);
        assert_eq!(score_to_level(3), SkillLevel::Beginner);
        assert_eq!(score_to_level(4), SkillLevel::Familiar);
        assert_eq!(score_to_level(7), SkillLevel::Familiar);
        assert_eq!(score_to_level(8), SkillLevel::Intermediate);
        assert_eq!(score_to_level(11), SkillLevel::Intermediate);
        assert_eq!(score_to_level(12), SkillLevel::Advanced);
        assert_eq!(score_to_level(u32::MAX), SkillLevel::Advanced);
    }

    #[test]
    fn level_is_monotonic_in_score() {
        for a in 0..=20_u32 {
            for b in a..=20 {
                assert!(score_to_level(a) <= score_to_level(b), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn min_score_roundtrips_through_scorer() {
        for level in SkillLevel::ALL {
            assert_eq!(score_to_level(min_score_for(level)), level);
        }
    }

    // -----------------------------------------------------------------------
    // assess_answers
    // -----------------------------------------------------------------------

    #[test]
    fn assess_sums_chosen_scores() {
        let quiz = vec![question("q1", &[0, 1, 2, 3]), question("q2", &[0, 1, 2, 3])];
        let assessment = assess_answers("guitar", &quiz, &[3, 2]).unwrap();
        assert_eq!(assessment.goal_id, "guitar");
        assert_eq!(assessment.total_score, 5);
        assert_eq!(assessment.level, SkillLevel::Familiar);
        assert_eq!(assessment.answers, vec![3, 2]);
    }

    #[test]
    fn assess_full_marks_is_advanced() {
        let quiz: Vec<_> = (0..4).map(|i| question(&format!("q{i}"), &[0, 3])).collect();
        let assessment = assess_answers("fullstack", &quiz, &[1, 1, 1, 1]).unwrap();
        assert_eq!(assessment.level, SkillLevel::Advanced);
    }

    #[test]
    fn assess_rejects_missing_answers() {
        let quiz = vec![question("q1", &[0, 1]), question("q2", &[0, 1])];
        let result = assess_answers("spanish", &quiz, &[1]);
        assert_eq!(
            result,
            Err(ProgressionError::AnswerCountMismatch {
                goal_id: String::from("spanish"),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn assess_rejects_out_of_range_index() {
        let quiz = vec![question("q1", &[0, 1, 2])];
        let result = assess_answers("spanish", &quiz, &[3]);
        assert_eq!(
            result,
            Err(ProgressionError::AnswerOutOfRange {
                question_id: String::from("q1"),
                index: 3,
                option_count: 3,
            })
        );
    }

    #[test]
    fn assess_rejects_oversized_option_score() {
        let quiz = vec![question("q1", &[0, 9])];
        let result = assess_answers("spanish", &quiz, &[1]);
        assert!(matches!(
            result,
            Err(ProgressionError::InvalidOptionScore { score: 9, .. })
        ));
    }

    #[test]
    fn empty_quiz_is_beginner() {
        let assessment = assess_answers("fitness", &[], &[]).unwrap();
        assert_eq!(assessment.level, SkillLevel::Beginner);
    }
}
