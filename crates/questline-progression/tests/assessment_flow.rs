//! End-to-end checks across the scorer, estimator, and mismatch detector
//! using the built-in goal and quiz catalog.

// Panicking on failure is the correct behavior in test code.
#![allow(clippy::unwrap_used)]

use std::num::NonZeroU32;

use questline_progression::{
    assess_answers, calculate_estimate, detect_mismatch, find_goal, skill_quiz,
};
use questline_types::{MismatchSeverity, SkillLevel};

fn answer_all(goal_id: &str, choice: usize) -> Vec<usize> {
    let quiz = skill_quiz(goal_id).unwrap();
    vec![choice; quiz.len()]
}

#[test]
fn quiz_answers_drive_the_estimate() {
    let goals = vec![find_goal("fullstack").unwrap()];
    let quiz = skill_quiz("fullstack").unwrap();

    // Five questions answered "use it regularly": 15 points -> advanced.
    let expert = assess_answers("fullstack", &quiz, &answer_all("fullstack", 3)).unwrap();
    assert_eq!(expert.level, SkillLevel::Advanced);

    // Five questions answered "played around a little": 5 points -> familiar.
    let dabbler = assess_answers("fullstack", &quiz, &answer_all("fullstack", 1)).unwrap();
    assert_eq!(dabbler.level, SkillLevel::Familiar);

    let expert_weeks = calculate_estimate(&goals, &[expert], 30);
    let dabbler_weeks = calculate_estimate(&goals, &[dabbler], 30);

    // 24 * 0.3 = 7.2 -> 8, 24 * 0.75 = 18
    assert_eq!(expert_weeks.total_weeks, 8);
    assert_eq!(dabbler_weeks.total_weeks, 18);
}

#[test]
fn ambitious_plan_flags_significant_mismatch() {
    let goals: Vec<_> = ["fullstack", "data-science", "spanish"]
        .iter()
        .filter_map(|id| find_goal(id))
        .collect();
    assert_eq!(goals.len(), 3);

    // Unassessed -> beginner; spanish (32 weeks) dominates at 30 min/day.
    let summary = calculate_estimate(&goals, &[], 30);
    assert_eq!(summary.total_weeks, 32);

    let report = detect_mismatch(summary.total_weeks, NonZeroU32::MIN.saturating_add(2));
    assert!(report.has_mismatch);
    assert_eq!(report.severity, MismatchSeverity::Significant);

    // Doubling daily time halves the estimate: 32 * 30 / 60 = 16.
    let faster = calculate_estimate(&goals, &[], 60);
    assert_eq!(faster.total_weeks, 16);
    let report = detect_mismatch(faster.total_weeks, NonZeroU32::MIN.saturating_add(2));
    assert_eq!(report.severity, MismatchSeverity::Mild);
}
