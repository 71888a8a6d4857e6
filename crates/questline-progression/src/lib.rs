//! Progression and assessment calculators for Questline.
//!
//! This crate is the logic layer behind onboarding and the dashboard:
//! everything here is a pure computation over caller-supplied data, with no
//! I/O and no shared state. The only non-determinism is the bonus XP roll,
//! which takes its RNG as a parameter.
//!
//! # Modules
//!
//! - [`achievements`] -- Achievement catalog and idempotent evaluation ([`AchievementCatalog`])
//! - [`catalog`] -- Built-in goals and skill quizzes
//! - [`config`] -- Tunable parameters ([`ProgressionConfig`])
//! - [`error`] -- Error types ([`ProgressionError`])
//! - [`estimate`] -- Timeline estimator and mismatch detector
//! - [`leveling`] -- Player XP curve
//! - [`rewards`] -- Quest reward templates and the bonus XP roll
//! - [`scoring`] -- Quiz scoring and skill level derivation

pub mod achievements;
pub mod catalog;
pub mod config;
pub mod error;
pub mod estimate;
pub mod leveling;
pub mod rewards;
pub mod scoring;

// Re-export primary items at crate root for convenience.
pub use achievements::{AchievementCatalog, counter_value, rule_satisfied};
pub use catalog::{find_goal, goal_catalog, skill_quiz};
pub use config::{EstimateConfig, OnboardingConfig, ProgressionConfig, RewardConfig};
pub use error::ProgressionError;
pub use estimate::{
    calculate_estimate, calculate_estimate_with, clamp_daily_minutes, detect_mismatch,
    detect_mismatch_with, skill_multiplier,
};
pub use leveling::{
    LevelProgress, MAX_PLAYER_LEVEL, apply_xp, level_for_xp, level_progress, total_xp_for_level,
    xp_for_next_level,
};
pub use rewards::{quest_from_template, roll_bonus_xp, roll_bonus_xp_default};
pub use scoring::{assess_answers, min_score_for, score_to_level};
