//! Error types for the questline-progression crate.
//!
//! The calculators themselves are total over their input domain. Errors
//! arise only from malformed caller input (quiz answers, catalog entries,
//! configuration) and are returned as typed values rather than panics.

/// Errors that can occur while scoring quizzes, building catalogs, or
/// validating progression configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    /// The number of answers does not match the number of quiz questions.
    #[error("quiz for goal {goal_id} has {expected} questions but {actual} answers were given")]
    AnswerCountMismatch {
        /// Goal whose quiz was answered.
        goal_id: String,
        /// Number of questions in the quiz.
        expected: usize,
        /// Number of answers supplied.
        actual: usize,
    },

    /// An answer index does not refer to an option of its question.
    #[error("answer {index} to question {question_id} is out of range ({option_count} options)")]
    AnswerOutOfRange {
        /// Question that was answered.
        question_id: String,
        /// The chosen option index.
        index: usize,
        /// Number of options the question offers.
        option_count: usize,
    },

    /// A quiz option carries a score above the allowed maximum.
    #[error("option {index} of question {question_id} scores {score}, above the maximum of {max}")]
    InvalidOptionScore {
        /// Question owning the option.
        question_id: String,
        /// Option index.
        index: usize,
        /// Offending score.
        score: u8,
        /// Maximum allowed score.
        max: u8,
    },

    /// Two catalog entries share the same identifier.
    #[error("duplicate achievement id: {0}")]
    DuplicateAchievement(String),

    /// A configuration value is outside its valid range.
    #[error("invalid progression config: {reason}")]
    InvalidConfig {
        /// Description of the invalid setting.
        reason: String,
    },

    /// An arithmetic overflow occurred while accumulating a counter.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
