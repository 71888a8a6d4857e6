//! Tunable parameters for estimation, rewards, and onboarding.
//!
//! The defaults reproduce the behavior the app ships with. The
//! `progression` section of `questline-config.yaml` deserializes into
//! [`ProgressionConfig`]; any key left out keeps its default.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ProgressionError;

/// All progression tunables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Timeline estimation parameters.
    #[serde(default)]
    pub estimate: EstimateConfig,

    /// Quest reward parameters.
    #[serde(default)]
    pub rewards: RewardConfig,

    /// Onboarding limits.
    #[serde(default)]
    pub onboarding: OnboardingConfig,
}

impl ProgressionConfig {
    /// Check every section for values that would make the calculators
    /// divide by zero or clamp to an empty range.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        self.estimate.validate()?;
        self.rewards.validate()?;
        self.onboarding.validate()
    }
}

/// Parameters of the timeline estimator and mismatch detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Lower bound daily minutes are clamped to (default: 15).
    #[serde(default = "default_min_daily_minutes")]
    pub min_daily_minutes: u32,

    /// Upper bound daily minutes are clamped to (default: 120).
    #[serde(default = "default_max_daily_minutes")]
    pub max_daily_minutes: u32,

    /// Daily minutes at which a goal's `estimated_weeks` holds as-is (default: 30).
    #[serde(default = "default_baseline_daily_minutes")]
    pub baseline_daily_minutes: u32,

    /// Base weeks for goals without an estimate (default: 12).
    #[serde(default = "default_base_weeks")]
    pub default_base_weeks: u32,

    /// Average weeks per month used to convert targets (default: 4.33).
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: Decimal,

    /// Estimate/target ratio up to which there is no mismatch (default: 1.15).
    #[serde(default = "default_tolerance_ratio")]
    pub tolerance_ratio: Decimal,

    /// Ratio above which a mismatch is significant (default: 1.5).
    #[serde(default = "default_significant_ratio")]
    pub significant_ratio: Decimal,

    /// Extra daily minutes proposed for a mild mismatch (default: 15).
    #[serde(default = "default_mild_extra_minutes")]
    pub mild_extra_minutes: u32,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            min_daily_minutes: default_min_daily_minutes(),
            max_daily_minutes: default_max_daily_minutes(),
            baseline_daily_minutes: default_baseline_daily_minutes(),
            default_base_weeks: default_base_weeks(),
            weeks_per_month: default_weeks_per_month(),
            tolerance_ratio: default_tolerance_ratio(),
            significant_ratio: default_significant_ratio(),
            mild_extra_minutes: default_mild_extra_minutes(),
        }
    }
}

impl EstimateConfig {
    fn validate(&self) -> Result<(), ProgressionError> {
        if self.min_daily_minutes == 0 {
            return Err(invalid("estimate.min_daily_minutes must be at least 1"));
        }
        if self.min_daily_minutes > self.max_daily_minutes {
            return Err(invalid(
                "estimate.min_daily_minutes must not exceed estimate.max_daily_minutes",
            ));
        }
        if self.baseline_daily_minutes == 0 {
            return Err(invalid("estimate.baseline_daily_minutes must be at least 1"));
        }
        if self.default_base_weeks == 0 {
            return Err(invalid("estimate.default_base_weeks must be at least 1"));
        }
        if self.weeks_per_month <= Decimal::ZERO {
            return Err(invalid("estimate.weeks_per_month must be positive"));
        }
        if self.tolerance_ratio > self.significant_ratio {
            return Err(invalid(
                "estimate.tolerance_ratio must not exceed estimate.significant_ratio",
            ));
        }
        Ok(())
    }
}

/// Parameters of the quest bonus roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Bonus probability per completion, in units of 1/10000 (default: 2000).
    #[serde(default = "default_bonus_chance_per_10000")]
    pub bonus_chance_per_10000: u32,

    /// Bonus size as a percentage of base XP (default: 50).
    #[serde(default = "default_bonus_pct")]
    pub bonus_pct: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            bonus_chance_per_10000: default_bonus_chance_per_10000(),
            bonus_pct: default_bonus_pct(),
        }
    }
}

impl RewardConfig {
    fn validate(&self) -> Result<(), ProgressionError> {
        if self.bonus_chance_per_10000 > 10_000 {
            return Err(invalid("rewards.bonus_chance_per_10000 must be at most 10000"));
        }
        Ok(())
    }
}

/// Onboarding limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    /// Maximum number of goals a learner can pursue at once (default: 3).
    #[serde(default = "default_max_goals")]
    pub max_goals: usize,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            max_goals: default_max_goals(),
        }
    }
}

impl OnboardingConfig {
    fn validate(&self) -> Result<(), ProgressionError> {
        if self.max_goals == 0 {
            return Err(invalid("onboarding.max_goals must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ProgressionError {
    ProgressionError::InvalidConfig {
        reason: String::from(reason),
    }
}

// ---------------------------------------------------------------------------
// Default value functions (used by serde)
// ---------------------------------------------------------------------------

const fn default_min_daily_minutes() -> u32 {
    15
}

const fn default_max_daily_minutes() -> u32 {
    120
}

const fn default_baseline_daily_minutes() -> u32 {
    30
}

const fn default_base_weeks() -> u32 {
    12
}

fn default_weeks_per_month() -> Decimal {
    Decimal::new(433, 2)
}

fn default_tolerance_ratio() -> Decimal {
    Decimal::new(115, 2)
}

fn default_significant_ratio() -> Decimal {
    Decimal::new(15, 1)
}

const fn default_mild_extra_minutes() -> u32 {
    15
}

const fn default_bonus_chance_per_10000() -> u32 {
    2000
}

const fn default_bonus_pct() -> u32 {
    50
}

const fn default_max_goals() -> usize {
    3
}
