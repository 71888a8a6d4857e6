//! Achievement catalog and evaluation.
//!
//! Every achievement carries a declarative [`AchievementRule`]
//! (`counter >= threshold`) instead of a predicate closure, so the catalog
//! is plain data that can be serialized, overridden from configuration,
//! and evaluated by the single interpreter in [`rule_satisfied`].
//!
//! Evaluation scans the whole catalog in order on every call. One state
//! change can satisfy several rules at once (ten quests completed in one
//! sync unlocks the 1-, 5- and 10-quest badges together), and achievements
//! never depend on each other. Ids already present in
//! [`AchievementCheckState::unlocked_achievements`] are skipped, so each
//! achievement is awarded at most once.

use std::collections::BTreeSet;

use questline_types::{
    Achievement, AchievementCategory, AchievementCheckState, AchievementRule, Counter, Rarity,
};

use crate::error::ProgressionError;

/// Read one counter from a progression snapshot.
pub const fn counter_value(state: &AchievementCheckState, counter: Counter) -> u32 {
    match counter {
        Counter::QuestsCompleted => state.quests_completed,
        Counter::CurrentStreak => state.current_streak,
        Counter::LongestStreak => state.longest_streak,
        Counter::Level => state.level,
        Counter::TotalXp => state.total_xp,
        Counter::Coins => state.coins,
        Counter::MasteredSkills => state.mastered_skills,
        Counter::ReviewsCompleted => state.reviews_completed,
        Counter::PerfectDays => state.perfect_days,
    }
}

/// Whether `state` satisfies `rule`.
pub const fn rule_satisfied(rule: &AchievementRule, state: &AchievementCheckState) -> bool {
    counter_value(state, rule.counter) >= rule.threshold
}

/// An ordered, id-unique list of achievements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementCatalog {
    entries: Vec<Achievement>,
}

impl AchievementCatalog {
    /// The catalog the app ships with: 28 achievements in 7 categories.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD.iter().map(Def::to_achievement).collect(),
        }
    }

    /// Build a catalog from custom entries, preserving their order.
    pub fn from_entries(entries: Vec<Achievement>) -> Result<Self, ProgressionError> {
        {
            let mut seen = BTreeSet::new();
            for entry in &entries {
                if !seen.insert(entry.id.as_str()) {
                    return Err(ProgressionError::DuplicateAchievement(entry.id.clone()));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Look up an achievement by id.
    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.entries.iter().find(|a| a.id == id)
    }

    /// All achievements in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.entries.iter()
    }

    /// Number of achievements.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Achievements not yet unlocked whose rules `state` satisfies.
    ///
    /// Does not modify the state; see [`evaluate`](Self::evaluate).
    pub fn pending<'a>(&'a self, state: &AchievementCheckState) -> Vec<&'a Achievement> {
        self.entries
            .iter()
            .filter(|a| !state.unlocked_achievements.contains(&a.id))
            .filter(|a| rule_satisfied(&a.rule, state))
            .collect()
    }

    /// Unlock every newly satisfied achievement.
    ///
    /// Each returned achievement is inserted into
    /// `state.unlocked_achievements`, so evaluating the same state again
    /// returns nothing.
    pub fn evaluate<'a>(&'a self, state: &mut AchievementCheckState) -> Vec<&'a Achievement> {
        let unlocked = self.pending(state);
        for achievement in &unlocked {
            state.unlocked_achievements.insert(achievement.id.clone());
            tracing::info!(
                achievement_id = %achievement.id,
                rarity = ?achievement.rarity,
                xp_reward = achievement.xp_reward,
                "achievement unlocked"
            );
        }
        unlocked
    }

    /// Achievements in one category, in catalog order.
    pub fn by_category(&self, category: AchievementCategory) -> Vec<&Achievement> {
        self.entries
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ---------------------------------------------------------------------------
// Standard catalog
// ---------------------------------------------------------------------------

struct Def {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: AchievementCategory,
    rarity: Rarity,
    xp_reward: u32,
    counter: Counter,
    threshold: u32,
}

impl Def {
    fn to_achievement(&self) -> Achievement {
        Achievement {
            id: String::from(self.id),
            title: String::from(self.title),
            description: String::from(self.description),
            category: self.category,
            rarity: self.rarity,
            xp_reward: self.xp_reward,
            rule: AchievementRule {
                counter: self.counter,
                threshold: self.threshold,
            },
        }
    }
}

macro_rules! def {
    (
        $id:literal, $title:literal, $desc:literal, $cat:ident, $rarity:ident, $xp:literal,
        $counter:ident >= $threshold:literal
    ) => {
        Def {
            id: $id,
            title: $title,
            description: $desc,
            category: AchievementCategory::$cat,
            rarity: Rarity::$rarity,
            xp_reward: $xp,
            counter: Counter::$counter,
            threshold: $threshold,
        }
    };
}

#[rustfmt::skip]
const STANDARD: &[Def] = &[
    // Quests
    def!("first-quest", "First Steps", "Complete your first quest", Quests, Common, 25, QuestsCompleted >= 1),
    def!("five-quests", "Getting Started", "Complete 5 quests", Quests, Common, 50, QuestsCompleted >= 5),
    def!("ten-quests", "Quest Seeker", "Complete 10 quests", Quests, Uncommon, 100, QuestsCompleted >= 10),
    def!("twenty-five-quests", "Adventurer", "Complete 25 quests", Quests, Rare, 200, QuestsCompleted >= 25),
    def!("fifty-quests", "Veteran", "Complete 50 quests", Quests, Epic, 400, QuestsCompleted >= 50),
    def!("hundred-quests", "Living Legend", "Complete 100 quests", Quests, Legendary, 1000, QuestsCompleted >= 100),
    // Streak
    def!("streak-3", "Warming Up", "Keep a 3-day streak", Streak, Common, 30, CurrentStreak >= 3),
    def!("streak-7", "On Fire", "Keep a 7-day streak", Streak, Uncommon, 75, CurrentStreak >= 7),
    def!("streak-14", "Unstoppable", "Keep a 14-day streak", Streak, Rare, 150, CurrentStreak >= 14),
    def!("streak-30", "Habit Formed", "Keep a 30-day streak", Streak, Epic, 400, CurrentStreak >= 30),
    def!("streak-100", "Centurion", "Keep a 100-day streak", Streak, Legendary, 1500, CurrentStreak >= 100),
    // Level
    def!("level-5", "Apprentice", "Reach level 5", Level, Common, 50, Level >= 5),
    def!("level-10", "Journeyman", "Reach level 10", Level, Uncommon, 150, Level >= 10),
    def!("level-25", "Expert", "Reach level 25", Level, Epic, 500, Level >= 25),
    def!("level-50", "Grandmaster", "Reach level 50", Level, Legendary, 1500, Level >= 50),
    // Experience
    def!("xp-1000", "Thousand Club", "Earn 1,000 XP", Experience, Common, 50, TotalXp >= 1000),
    def!("xp-5000", "Knowledge Hoarder", "Earn 5,000 XP", Experience, Uncommon, 150, TotalXp >= 5000),
    def!("xp-10000", "Scholar", "Earn 10,000 XP", Experience, Rare, 300, TotalXp >= 10000),
    def!("xp-50000", "Sage", "Earn 50,000 XP", Experience, Legendary, 1000, TotalXp >= 50000),
    // Mastery and review
    def!("first-mastery", "Skill Unlocked", "Master your first skill", Mastery, Uncommon, 100, MasteredSkills >= 1),
    def!("five-masteries", "Polymath", "Master 5 skills", Mastery, Epic, 500, MasteredSkills >= 5),
    def!("first-review", "Look Back", "Complete your first review session", Mastery, Common, 25, ReviewsCompleted >= 1),
    def!("fifty-reviews", "Memory Palace", "Complete 50 review sessions", Mastery, Rare, 250, ReviewsCompleted >= 50),
    // Perfect days
    def!("perfect-day", "Flawless", "Finish every daily quest in one day", PerfectDay, Uncommon, 75, PerfectDays >= 1),
    def!("perfect-week", "Perfect Week", "Have 7 perfect days", PerfectDay, Epic, 350, PerfectDays >= 7),
    // Economy
    def!("coins-100", "Pocket Change", "Hold 100 coins", Economy, Common, 25, Coins >= 100),
    def!("coins-1000", "Treasure Chest", "Hold 1,000 coins", Economy, Rare, 150, Coins >= 1000),
    def!("coins-10000", "Dragon Hoard", "Hold 10,000 coins", Economy, Legendary, 750, Coins >= 10000),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(achievements: &[&Achievement]) -> Vec<String> {
        achievements.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn standard_catalog_shape() {
        let catalog = AchievementCatalog::standard();
        assert_eq!(catalog.len(), 28);

        let categories: BTreeSet<_> = catalog.iter().map(|a| a.category).collect();
        assert_eq!(categories.len(), 7);

        let unique: BTreeSet<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn empty_state_unlocks_nothing() {
        let catalog = AchievementCatalog::standard();
        let mut state = AchievementCheckState::default();
        assert!(catalog.evaluate(&mut state).is_empty());
        assert!(state.unlocked_achievements.is_empty());
    }

    #[test]
    fn simultaneous_quest_milestones_unlock_together() {
        let catalog = AchievementCatalog::standard();
        let mut state = AchievementCheckState {
            quests_completed: 10,
            ..AchievementCheckState::default()
        };

        let unlocked = catalog.evaluate(&mut state);
        assert_eq!(ids(&unlocked), vec!["first-quest", "five-quests", "ten-quests"]);
        assert!(state.unlocked_achievements.contains("ten-quests"));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let catalog = AchievementCatalog::standard();
        let mut state = AchievementCheckState {
            quests_completed: 1,
            current_streak: 3,
            ..AchievementCheckState::default()
        };

        let first = ids(&catalog.evaluate(&mut state));
        assert_eq!(first, vec!["first-quest", "streak-3"]);
        assert!(catalog.evaluate(&mut state).is_empty());
    }

    #[test]
    fn already_unlocked_are_skipped_even_when_satisfied() {
        let catalog = AchievementCatalog::standard();
        let mut state = AchievementCheckState {
            quests_completed: 5,
            ..AchievementCheckState::default()
        };
        state.unlocked_achievements.insert(String::from("first-quest"));

        let unlocked = catalog.evaluate(&mut state);
        assert_eq!(ids(&unlocked), vec!["five-quests"]);
    }

    #[test]
    fn scan_covers_every_category() {
        let catalog = AchievementCatalog::standard();
        let mut state = AchievementCheckState {
            quests_completed: 1,
            current_streak: 3,
            longest_streak: 3,
            level: 5,
            total_xp: 1000,
            coins: 100,
            mastered_skills: 1,
            reviews_completed: 1,
            perfect_days: 1,
            ..AchievementCheckState::default()
        };

        let unlocked = catalog.evaluate(&mut state);
        assert_eq!(
            ids(&unlocked),
            vec![
                "first-quest",
                "streak-3",
                "level-5",
                "xp-1000",
                "first-mastery",
                "first-review",
                "perfect-day",
                "coins-100",
            ]
        );
    }

    #[test]
    fn pending_does_not_mutate() {
        let catalog = AchievementCatalog::standard();
        let state = AchievementCheckState {
            perfect_days: 7,
            ..AchievementCheckState::default()
        };
        assert_eq!(ids(&catalog.pending(&state)), vec!["perfect-day", "perfect-week"]);
        assert!(state.unlocked_achievements.is_empty());
    }

    #[test]
    fn rule_threshold_is_inclusive() {
        let rule = AchievementRule {
            counter: Counter::Coins,
            threshold: 100,
        };
        let mut state = AchievementCheckState {
            coins: 99,
            ..AchievementCheckState::default()
        };
        assert!(!rule_satisfied(&rule, &state));
        state.coins = 100;
        assert!(rule_satisfied(&rule, &state));
    }

    #[test]
    fn custom_catalog_rejects_duplicates() {
        let standard = AchievementCatalog::standard();
        let mut entries: Vec<Achievement> = standard.iter().take(2).cloned().collect();
        entries.extend(standard.iter().take(1).cloned());
        assert_eq!(
            AchievementCatalog::from_entries(entries),
            Err(ProgressionError::DuplicateAchievement(String::from("first-quest")))
        );
    }

    #[test]
    fn lookup_and_category_filter() {
        let catalog = AchievementCatalog::standard();
        assert_eq!(catalog.get("streak-7").map(|a| a.rarity), Some(Rarity::Uncommon));
        assert!(catalog.get("nope").is_none());
        assert_eq!(catalog.by_category(AchievementCategory::Economy).len(), 3);
    }
}
