//! Enumeration types shared between the progression engine and the app.
//!
//! Closed enums stand in for the string-keyed lookup tables the app uses,
//! so every `match` over a level, rarity, or counter is exhaustive.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Skill levels
// ---------------------------------------------------------------------------

/// Coarse proficiency for one goal, derived from the onboarding quiz.
///
/// Variants are declared in ascending order so the derived [`Ord`] matches
/// the ordinal sense `Beginner < Familiar < Intermediate < Advanced`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SkillLevel {
    /// Little or no prior exposure. Also the level assumed for unassessed goals.
    #[default]
    Beginner,
    /// Has dabbled; knows the vocabulary.
    Familiar,
    /// Comfortable with the fundamentals.
    Intermediate,
    /// Practitioner looking to deepen existing skills.
    Advanced,
}

impl SkillLevel {
    /// Every level, lowest first.
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Familiar,
        Self::Intermediate,
        Self::Advanced,
    ];

    /// Stable lowercase name, matching the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Familiar => "familiar",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl core::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Five-tier reward classification shared by quests and achievements.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// Everyday rewards.
    Common,
    /// Slightly harder to come by.
    Uncommon,
    /// Requires sustained effort.
    Rare,
    /// Long-term milestones.
    Epic,
    /// Reserved for the most dedicated learners.
    Legendary,
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

/// Broad grouping used to organize the goal picker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum GoalCategory {
    /// Programming, data, and infrastructure skills.
    Technology,
    /// Design, music, writing, and other creative crafts.
    Creative,
    /// Spoken and written foreign languages.
    Language,
    /// Marketing, finance, and entrepreneurship.
    Business,
    /// Fitness, mindfulness, and personal health.
    Wellness,
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

/// The format of a learning task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum QuestKind {
    /// Read an article or documentation page.
    Article,
    /// Watch a video lesson.
    Video,
    /// Answer a short knowledge check.
    Quiz,
    /// Build something hands-on.
    Project,
}

/// Presentation phase of a quest card around a completion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum QuestPhase {
    /// The quest is shown and can be completed.
    #[default]
    Viewing,
    /// Rewards are being celebrated.
    Celebrating,
    /// The reward summary is shown.
    Summary,
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// Grouping of achievements in the trophy case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum AchievementCategory {
    /// Quest-count milestones.
    Quests,
    /// Daily streak milestones.
    Streak,
    /// Player level milestones.
    Level,
    /// Lifetime XP milestones.
    Experience,
    /// Skill mastery and spaced-review milestones.
    Mastery,
    /// Days on which every daily quest was completed.
    PerfectDay,
    /// Coin balance milestones.
    Economy,
}

/// A progression counter an achievement rule can compare against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Counter {
    /// Length of the quest history.
    QuestsCompleted,
    /// Consecutive active days ending today.
    CurrentStreak,
    /// Best streak ever reached.
    LongestStreak,
    /// Current player level.
    Level,
    /// Lifetime XP earned.
    TotalXp,
    /// Current coin balance.
    Coins,
    /// Number of skills marked mastered.
    MasteredSkills,
    /// Number of spaced-review sessions completed.
    ReviewsCompleted,
    /// Number of days with every daily quest completed.
    PerfectDays,
}

// ---------------------------------------------------------------------------
// Estimates
// ---------------------------------------------------------------------------

/// How far an estimate overshoots the learner's target timeline.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum MismatchSeverity {
    /// Within tolerance of the target.
    #[default]
    None,
    /// Slightly over; small adjustments close the gap.
    Mild,
    /// Well over; the plan needs rethinking.
    Significant,
}
