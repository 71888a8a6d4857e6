//! Shared type definitions for the Questline progression engine.
//!
//! This crate is the single source of truth for the records exchanged
//! between the progression engine and the web/mobile app. Types flow to
//! `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for players and quests
//! - [`enums`] -- Skill levels, rarities, categories, counters, phases
//! - [`structs`] -- Goals, quizzes, estimates, quests, achievements

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AchievementCategory, Counter, GoalCategory, MismatchSeverity, QuestKind, QuestPhase, Rarity,
    SkillLevel,
};
pub use ids::{PlayerId, QuestId};
pub use structs::{
    Achievement, AchievementCheckState, AchievementRule, BonusResult, DEFAULT_GOAL_ICON,
    EstimateSummary, GoalData, GoalEstimate, MismatchReport, Quest, QuestRecord, SkillAssessment,
    SkillOption, SkillQuestion, UnlockedAchievement,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::PlayerId::export_all();
        let _ = crate::ids::QuestId::export_all();

        // Enums
        let _ = crate::enums::SkillLevel::export_all();
        let _ = crate::enums::Rarity::export_all();
        let _ = crate::enums::GoalCategory::export_all();
        let _ = crate::enums::QuestKind::export_all();
        let _ = crate::enums::QuestPhase::export_all();
        let _ = crate::enums::AchievementCategory::export_all();
        let _ = crate::enums::Counter::export_all();
        let _ = crate::enums::MismatchSeverity::export_all();

        // Structs
        let _ = crate::structs::GoalData::export_all();
        let _ = crate::structs::SkillQuestion::export_all();
        let _ = crate::structs::SkillAssessment::export_all();
        let _ = crate::structs::EstimateSummary::export_all();
        let _ = crate::structs::MismatchReport::export_all();
        let _ = crate::structs::Quest::export_all();
        let _ = crate::structs::BonusResult::export_all();
        let _ = crate::structs::QuestRecord::export_all();
        let _ = crate::structs::Achievement::export_all();
        let _ = crate::structs::AchievementCheckState::export_all();
        let _ = crate::structs::UnlockedAchievement::export_all();
    }
}
