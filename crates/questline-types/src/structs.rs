//! Core data records: goals, quizzes, estimates, quests, and achievements.
//!
//! Everything here is plain data. The arithmetic that derives estimates,
//! levels, and rewards lives in `questline-progression`.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AchievementCategory, Counter, GoalCategory, MismatchSeverity, QuestKind, Rarity, SkillLevel,
};
use crate::ids::QuestId;

/// Icon shown for goals that do not specify one.
pub const DEFAULT_GOAL_ICON: &str = "target";

// ---------------------------------------------------------------------------
// Goals and quizzes
// ---------------------------------------------------------------------------

/// A learning objective the user can select during onboarding.
///
/// Optional metadata is allowed to be missing: `estimated_weeks == 0` means
/// "no estimate" and the estimator substitutes its default, and a missing
/// `icon` renders as [`DEFAULT_GOAL_ICON`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GoalData {
    /// Stable identifier (e.g. `"fullstack"`).
    pub id: String,
    /// Display label.
    pub label: String,
    /// Picker grouping.
    pub category: GoalCategory,
    /// Relative popularity used to order the picker (higher first).
    #[serde(default)]
    pub popularity: u32,
    /// Typical weeks to reach proficiency from scratch at 30 minutes a day.
    #[serde(default)]
    pub estimated_weeks: u32,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
}

impl GoalData {
    /// Icon name, falling back to [`DEFAULT_GOAL_ICON`].
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_GOAL_ICON)
    }
}

/// One answer choice in a skill quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillOption {
    /// Display text.
    pub label: String,
    /// Points contributed to the goal's total score (0 to 3).
    pub score: u8,
}

/// A single question of a goal's skill quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillQuestion {
    /// Stable identifier, unique within the goal's quiz.
    pub id: String,
    /// Question text.
    pub prompt: String,
    /// Answer choices in display order.
    pub options: Vec<SkillOption>,
}

/// Result of one goal's skill quiz.
///
/// `level` is always derived from `total_score`, which is in turn the sum of
/// the scores of the options chosen in `answers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillAssessment {
    /// Goal the quiz was taken for.
    pub goal_id: String,
    /// Derived proficiency.
    pub level: SkillLevel,
    /// Chosen option index for each question, in question order.
    pub answers: Vec<usize>,
    /// Sum of the chosen options' scores.
    pub total_score: u32,
}

// ---------------------------------------------------------------------------
// Estimates
// ---------------------------------------------------------------------------

/// Estimated time to reach a single goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GoalEstimate {
    /// Goal the estimate is for.
    pub goal_id: String,
    /// Goal display label.
    pub label: String,
    /// Level the estimate assumed.
    pub level: SkillLevel,
    /// Estimated duration in whole weeks (at least 1).
    pub weeks: u32,
}

/// Per-goal estimates plus the aggregate for the whole plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EstimateSummary {
    /// One entry per input goal, in input order.
    pub per_goal: Vec<GoalEstimate>,
    /// Longest per-goal estimate; goals are learned in parallel.
    pub total_weeks: u32,
    /// Daily minutes after clamping, as actually used.
    pub daily_minutes: u32,
}

/// Comparison of an estimate against the learner's target timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MismatchReport {
    /// `true` when the estimate exceeds the target beyond tolerance.
    pub has_mismatch: bool,
    /// Size of the overshoot.
    pub severity: MismatchSeverity,
    /// Target timeline converted to weeks.
    #[ts(as = "String")]
    pub target_weeks: Decimal,
    /// `estimate_weeks / target_weeks`, rounded to two decimal places.
    #[ts(as = "String")]
    pub ratio: Decimal,
    /// Human-readable adjustments, empty when there is no mismatch.
    pub suggestions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Quests and rewards
// ---------------------------------------------------------------------------

/// A concrete learning task offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Quest {
    /// Instance identifier.
    pub id: QuestId,
    /// Goal the quest belongs to.
    pub goal_id: String,
    /// Display title.
    pub title: String,
    /// Task format.
    pub kind: QuestKind,
    /// Reward tier.
    pub rarity: Rarity,
    /// Base XP before any bonus.
    pub xp_reward: u32,
    /// Coins granted on completion.
    pub coin_reward: u32,
}

/// XP award for one quest completion, including the random bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BonusResult {
    /// Extra XP granted by the bonus roll (0 when no bonus).
    pub bonus: u32,
    /// Base XP plus bonus.
    pub total: u32,
    /// Whether the bonus roll succeeded.
    pub has_bonus: bool,
}

/// Entry in a player's quest history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QuestRecord {
    /// Completed quest.
    pub quest_id: QuestId,
    /// Quest title at completion time.
    pub title: String,
    /// Total XP awarded, bonus included.
    pub xp_awarded: u32,
    /// Bonus part of `xp_awarded`.
    pub bonus_xp: u32,
    /// Coins awarded.
    pub coins_awarded: u32,
    /// When the quest was completed.
    pub completed_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// Declarative unlock condition: `counter >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AchievementRule {
    /// Counter read from the snapshot.
    pub counter: Counter,
    /// Minimum value that satisfies the rule.
    pub threshold: u32,
}

/// An entry in the achievement catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Achievement {
    /// Stable identifier (e.g. `"first-quest"`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// How to earn it.
    pub description: String,
    /// Trophy-case grouping.
    pub category: AchievementCategory,
    /// Reward tier.
    pub rarity: Rarity,
    /// XP credited when the achievement unlocks.
    pub xp_reward: u32,
    /// Unlock condition.
    pub rule: AchievementRule,
}

/// Snapshot of progression counters that achievement rules are checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AchievementCheckState {
    /// Number of completed quests.
    pub quests_completed: u32,
    /// Consecutive active days ending today.
    pub current_streak: u32,
    /// Best streak reached.
    pub longest_streak: u32,
    /// Player level.
    pub level: u32,
    /// Lifetime XP.
    pub total_xp: u32,
    /// Coin balance.
    pub coins: u32,
    /// Skills marked mastered.
    pub mastered_skills: u32,
    /// Spaced-review sessions completed.
    pub reviews_completed: u32,
    /// Days with every daily quest completed.
    pub perfect_days: u32,
    /// Achievement ids already unlocked; these are never re-evaluated.
    pub unlocked_achievements: BTreeSet<String>,
}

/// Notification payload for a freshly unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UnlockedAchievement {
    /// Achievement id.
    pub achievement_id: String,
    /// Display title.
    pub title: String,
    /// Reward tier.
    pub rarity: Rarity,
    /// XP credited for the unlock.
    pub xp_reward: u32,
    /// When the unlock happened.
    pub unlocked_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn goal_defaults_apply_when_fields_missing() {
        let json = r#"{"id":"piano","label":"Piano","category":"creative"}"#;
        let goal: GoalData = serde_json::from_str(json).unwrap();
        assert_eq!(goal.estimated_weeks, 0);
        assert_eq!(goal.popularity, 0);
        assert_eq!(goal.icon_or_default(), DEFAULT_GOAL_ICON);
    }

    #[test]
    fn explicit_icon_wins() {
        let goal = GoalData {
            id: String::from("spanish"),
            label: String::from("Spanish"),
            category: GoalCategory::Language,
            popularity: 10,
            estimated_weeks: 20,
            icon: Some(String::from("globe")),
        };
        assert_eq!(goal.icon_or_default(), "globe");
    }

    #[test]
    fn achievement_rule_deserializes() {
        let json = r#"{"counter":"quests_completed","threshold":10}"#;
        let rule: AchievementRule = serde_json::from_str(json).unwrap();
        assert_eq!(
            rule,
            AchievementRule {
                counter: Counter::QuestsCompleted,
                threshold: 10,
            }
        );
    }

    #[test]
    fn check_state_default_is_empty() {
        let state = AchievementCheckState::default();
        assert_eq!(state.quests_completed, 0);
        assert!(state.unlocked_achievements.is_empty());
    }
}
