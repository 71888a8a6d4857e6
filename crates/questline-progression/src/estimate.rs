//! Timeline estimator and target mismatch detector.
//!
//! A goal's duration scales with three factors:
//!
//! ```text
//! weeks = max(1, ceil(base_weeks * skill_multiplier * baseline_minutes / daily_minutes))
//! ```
//!
//! where `daily_minutes` is first clamped to `[15, 120]` and the baseline is
//! 30 minutes a day. Goals are learned in parallel, so the plan's total is
//! the slowest goal, not the sum.
//!
//! All arithmetic uses [`Decimal`]. The division is performed last so that
//! exact quotients (e.g. `360 / 45`) never pick up a rounding residue that
//! would push `ceil` up by a week.

use std::num::NonZeroU32;

use questline_types::{
    EstimateSummary, GoalData, GoalEstimate, MismatchReport, MismatchSeverity, SkillAssessment,
    SkillLevel,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::EstimateConfig;

/// Duration multiplier for a skill level (lower skill takes longer).
///
/// `beginner = 1.0`, `familiar = 0.75`, `intermediate = 0.5`, `advanced = 0.3`.
pub fn skill_multiplier(level: SkillLevel) -> Decimal {
    match level {
        SkillLevel::Beginner => Decimal::ONE,
        SkillLevel::Familiar => Decimal::new(75, 2),
        SkillLevel::Intermediate => Decimal::new(5, 1),
        SkillLevel::Advanced => Decimal::new(3, 1),
    }
}

/// Clamp raw daily minutes into the configured range.
pub fn clamp_daily_minutes(daily_minutes: u32, config: &EstimateConfig) -> u32 {
    daily_minutes
        .max(config.min_daily_minutes)
        .min(config.max_daily_minutes)
}

/// Estimate every goal with the default parameters.
///
/// Goals without an assessment are treated as [`SkillLevel::Beginner`].
pub fn calculate_estimate(
    goals: &[GoalData],
    assessments: &[SkillAssessment],
    daily_minutes: u32,
) -> EstimateSummary {
    calculate_estimate_with(&EstimateConfig::default(), goals, assessments, daily_minutes)
}

/// Estimate every goal with explicit parameters.
pub fn calculate_estimate_with(
    config: &EstimateConfig,
    goals: &[GoalData],
    assessments: &[SkillAssessment],
    daily_minutes: u32,
) -> EstimateSummary {
    let minutes = clamp_daily_minutes(daily_minutes, config);

    let per_goal: Vec<GoalEstimate> = goals
        .iter()
        .map(|goal| {
            let level = assessed_level(&goal.id, assessments);
            let base_weeks = if goal.estimated_weeks == 0 {
                config.default_base_weeks
            } else {
                goal.estimated_weeks
            };
            let weeks = goal_weeks(base_weeks, level, minutes, config.baseline_daily_minutes)
                .unwrap_or(u32::MAX);
            GoalEstimate {
                goal_id: goal.id.clone(),
                label: goal.label.clone(),
                level,
                weeks,
            }
        })
        .collect();

    let total_weeks = per_goal.iter().map(|e| e.weeks).max().unwrap_or(0);

    tracing::debug!(
        goal_count = per_goal.len(),
        daily_minutes = minutes,
        total_weeks,
        "timeline estimated"
    );

    EstimateSummary {
        per_goal,
        total_weeks,
        daily_minutes: minutes,
    }
}

/// Level of the most recent assessment for `goal_id`, or beginner.
fn assessed_level(goal_id: &str, assessments: &[SkillAssessment]) -> SkillLevel {
    assessments
        .iter()
        .rev()
        .find(|a| a.goal_id == goal_id)
        .map_or(SkillLevel::Beginner, |a| a.level)
}

/// Weeks for a single goal. Returns `None` on overflow or a zero divisor.
fn goal_weeks(
    base_weeks: u32,
    level: SkillLevel,
    daily_minutes: u32,
    baseline_minutes: u32,
) -> Option<u32> {
    let numerator = Decimal::from(base_weeks)
        .checked_mul(skill_multiplier(level))?
        .checked_mul(Decimal::from(baseline_minutes))?;
    let weeks = numerator.checked_div(Decimal::from(daily_minutes))?.ceil();
    Some(weeks.to_u32()?.max(1))
}

/// Compare an estimate with a target timeline using the default parameters.
///
/// A zero-month target is rejected by the type; callers validate it at the
/// input boundary.
pub fn detect_mismatch(estimate_weeks: u32, target_months: NonZeroU32) -> MismatchReport {
    detect_mismatch_with(&EstimateConfig::default(), estimate_weeks, target_months)
}

/// Compare an estimate with a target timeline using explicit parameters.
///
/// - `ratio <= tolerance_ratio` (1.15): no mismatch
/// - `ratio <= significant_ratio` (1.5): mild mismatch
/// - otherwise: significant mismatch
pub fn detect_mismatch_with(
    config: &EstimateConfig,
    estimate_weeks: u32,
    target_months: NonZeroU32,
) -> MismatchReport {
    let target_weeks = Decimal::from(target_months.get())
        .checked_mul(config.weeks_per_month)
        .unwrap_or(Decimal::MAX);
    let ratio = Decimal::from(estimate_weeks)
        .checked_div(target_weeks)
        .unwrap_or(Decimal::MAX);

    let severity = if ratio <= config.tolerance_ratio {
        MismatchSeverity::None
    } else if ratio <= config.significant_ratio {
        MismatchSeverity::Mild
    } else {
        MismatchSeverity::Significant
    };

    let suggestions = match severity {
        MismatchSeverity::None => Vec::new(),
        MismatchSeverity::Mild => vec![
            format!(
                "Add {} minutes to your daily study time",
                config.mild_extra_minutes
            ),
            String::from("Extend your target by 1-2 months"),
        ],
        MismatchSeverity::Significant => vec![
            String::from("Significantly increase your daily study time"),
            String::from("Extend your target timeline"),
            String::from("Focus on fewer goals at once"),
        ],
    };

    if severity != MismatchSeverity::None {
        tracing::debug!(
            estimate_weeks,
            target_months = target_months.get(),
            %ratio,
            ?severity,
            "estimate exceeds target"
        );
    }

    MismatchReport {
        has_mismatch: severity != MismatchSeverity::None,
        severity,
        target_weeks,
        ratio: ratio.round_dp(2),
        suggestions,
    }
}
