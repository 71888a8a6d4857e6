//! Progress tracker: applies quest completions and activity to a player.
//!
//! A completion is processed in a fixed order:
//!
//! 1. Roll the bonus and credit XP (level is re-derived from lifetime XP)
//! 2. Credit coins
//! 3. Update the daily streak on the player's local calendar day
//! 4. Append the quest history entry and sync it
//! 5. Evaluate the achievement catalog against the new snapshot, credit
//!    unlock XP, and sync each unlock
//!
//! Achievement XP is credited after evaluation, so an XP milestone crossed
//! only by unlock XP is picked up on the next evaluation.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use questline_progression::{
    AchievementCatalog, RewardConfig, apply_xp, level_for_xp, roll_bonus_xp,
};
use questline_types::{
    AchievementCheckState, BonusResult, PlayerId, Quest, QuestId, QuestRecord,
    UnlockedAchievement,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sync::{SyncEvent, SyncSink, submit_best_effort};

/// Errors from tracker operations that can be refused.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// Not enough coins for a purchase.
    #[error("insufficient coins: wanted {requested} but only have {available}")]
    InsufficientCoins {
        /// Coins the purchase costs.
        requested: u32,
        /// Coins the player holds.
        available: u32,
    },
}

/// Persistent progression state of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    /// Owner of this progress.
    pub player_id: PlayerId,
    /// Lifetime XP, including bonuses and achievement rewards.
    pub total_xp: u32,
    /// Coin balance.
    pub coins: u32,
    /// Consecutive active days ending on `last_active_day`.
    pub current_streak: u32,
    /// Best streak reached.
    pub longest_streak: u32,
    /// Last day a quest was completed.
    pub last_active_day: Option<NaiveDate>,
    /// Skills marked mastered.
    pub mastered_skills: u32,
    /// Spaced-review sessions completed.
    pub reviews_completed: u32,
    /// Days with every daily quest completed.
    pub perfect_days: u32,
    /// Completed quests, oldest first.
    pub quest_history: Vec<QuestRecord>,
    /// Unlocked achievement ids.
    pub unlocked_achievements: BTreeSet<String>,
}

impl PlayerProgress {
    /// Fresh progress for a new player.
    pub const fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            total_xp: 0,
            coins: 0,
            current_streak: 0,
            longest_streak: 0,
            last_active_day: None,
            mastered_skills: 0,
            reviews_completed: 0,
            perfect_days: 0,
            quest_history: Vec::new(),
            unlocked_achievements: BTreeSet::new(),
        }
    }

    /// Current level, derived from lifetime XP.
    pub fn level(&self) -> u32 {
        level_for_xp(self.total_xp)
    }

    /// Snapshot of the counters achievement rules read.
    pub fn check_state(&self) -> AchievementCheckState {
        AchievementCheckState {
            quests_completed: u32::try_from(self.quest_history.len()).unwrap_or(u32::MAX),
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            level: self.level(),
            total_xp: self.total_xp,
            coins: self.coins,
            mastered_skills: self.mastered_skills,
            reviews_completed: self.reviews_completed,
            perfect_days: self.perfect_days,
            unlocked_achievements: self.unlocked_achievements.clone(),
        }
    }

    /// Advance the daily streak for activity on `today`.
    ///
    /// Same day: unchanged. Next day: +1. Any gap (or first activity): 1.
    fn touch_streak(&mut self, today: NaiveDate) {
        self.current_streak = match self.last_active_day {
            Some(last) if last == today => self.current_streak.max(1),
            Some(last) if last.succ_opt() == Some(today) => self.current_streak.saturating_add(1),
            Some(last) if last > today => self.current_streak,
            _ => 1,
        };
        if self.last_active_day.is_none_or(|last| last < today) {
            self.last_active_day = Some(today);
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
    }
}

/// Everything that happened as a result of one quest completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestCompletion {
    /// Completed quest.
    pub quest_id: QuestId,
    /// Quest XP with the bonus roll.
    pub bonus: BonusResult,
    /// Coins credited for the quest.
    pub coins_awarded: u32,
    /// Achievements unlocked by this completion, in catalog order.
    pub achievements: Vec<UnlockedAchievement>,
    /// XP credited from those achievements.
    pub achievement_xp: u32,
    /// New level if the completion raised it.
    pub level_up: Option<u32>,
    /// Streak after the completion.
    pub streak: u32,
}

/// Result of recording a review, mastery, or perfect day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityOutcome {
    /// Achievements unlocked by the activity, in catalog order.
    pub achievements: Vec<UnlockedAchievement>,
    /// XP credited from those achievements.
    pub achievement_xp: u32,
    /// New level if the unlock XP raised it.
    pub level_up: Option<u32>,
}

/// Applies progression events to one player's [`PlayerProgress`].
#[derive(Debug)]
pub struct ProgressTracker<S> {
    progress: PlayerProgress,
    catalog: AchievementCatalog,
    rewards: RewardConfig,
    sink: S,
}

impl<S: SyncSink> ProgressTracker<S> {
    /// Create a tracker over existing progress.
    pub const fn new(
        progress: PlayerProgress,
        catalog: AchievementCatalog,
        rewards: RewardConfig,
        sink: S,
    ) -> Self {
        Self {
            progress,
            catalog,
            rewards,
            sink,
        }
    }

    /// Current progress.
    pub const fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    /// The sync sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the tracker, returning the progress and the sink.
    pub fn into_parts(self) -> (PlayerProgress, S) {
        (self.progress, self.sink)
    }

    /// Complete `quest` at `now`.
    ///
    /// `now` carries the player's offset: the streak advances on the
    /// player's local calendar day, while history stores the UTC instant.
    pub fn complete_quest<Tz: TimeZone>(
        &mut self,
        quest: &Quest,
        now: &DateTime<Tz>,
        rng: &mut impl Rng,
    ) -> QuestCompletion {
        let level_before = self.progress.level();
        let local_day = now.date_naive();
        let now = now.with_timezone(&Utc);

        let bonus = roll_bonus_xp(quest.xp_reward, &self.rewards, rng);
        self.progress.total_xp = apply_xp(self.progress.total_xp, bonus.total).0;
        self.progress.coins = self.progress.coins.saturating_add(quest.coin_reward);
        self.progress.touch_streak(local_day);

        let record = QuestRecord {
            quest_id: quest.id,
            title: quest.title.clone(),
            xp_awarded: bonus.total,
            bonus_xp: bonus.bonus,
            coins_awarded: quest.coin_reward,
            completed_at: now,
        };
        self.progress.quest_history.push(record.clone());
        submit_best_effort(
            &mut self.sink,
            &SyncEvent::QuestCompleted {
                player_id: self.progress.player_id,
                record,
            },
        );

        let (achievements, achievement_xp) = self.unlock_achievements(now);

        let level_after = self.progress.level();
        let level_up = (level_after > level_before).then_some(level_after);

        tracing::info!(
            player_id = %self.progress.player_id,
            quest_id = %quest.id,
            xp = bonus.total,
            has_bonus = bonus.has_bonus,
            unlocked = achievements.len(),
            streak = self.progress.current_streak,
            "quest completed"
        );

        QuestCompletion {
            quest_id: quest.id,
            bonus,
            coins_awarded: quest.coin_reward,
            achievements,
            achievement_xp,
            level_up,
            streak: self.progress.current_streak,
        }
    }

    /// Record a finished spaced-review session.
    pub fn record_review(&mut self, now: DateTime<Utc>) -> ActivityOutcome {
        let level_before = self.progress.level();
        self.progress.reviews_completed = self.progress.reviews_completed.saturating_add(1);
        self.activity_outcome(level_before, now)
    }

    /// Record a skill reaching mastery.
    pub fn record_mastery(&mut self, now: DateTime<Utc>) -> ActivityOutcome {
        let level_before = self.progress.level();
        self.progress.mastered_skills = self.progress.mastered_skills.saturating_add(1);
        self.activity_outcome(level_before, now)
    }

    /// Record a day on which every daily quest was completed.
    pub fn record_perfect_day(&mut self, now: DateTime<Utc>) -> ActivityOutcome {
        let level_before = self.progress.level();
        self.progress.perfect_days = self.progress.perfect_days.saturating_add(1);
        self.activity_outcome(level_before, now)
    }

    fn activity_outcome(&mut self, level_before: u32, now: DateTime<Utc>) -> ActivityOutcome {
        let (achievements, achievement_xp) = self.unlock_achievements(now);
        let level_after = self.progress.level();
        ActivityOutcome {
            achievements,
            achievement_xp,
            level_up: (level_after > level_before).then_some(level_after),
        }
    }

    /// Spend coins on a purchase.
    pub fn spend_coins(&mut self, amount: u32) -> Result<u32, TrackerError> {
        let remaining =
            self.progress
                .coins
                .checked_sub(amount)
                .ok_or(TrackerError::InsufficientCoins {
                    requested: amount,
                    available: self.progress.coins,
                })?;
        self.progress.coins = remaining;
        Ok(remaining)
    }

    /// Evaluate the catalog, credit unlock XP, and sync each unlock.
    fn unlock_achievements(&mut self, now: DateTime<Utc>) -> (Vec<UnlockedAchievement>, u32) {
        let mut state = self.progress.check_state();
        let unlocked: Vec<UnlockedAchievement> = self
            .catalog
            .evaluate(&mut state)
            .into_iter()
            .map(|a| UnlockedAchievement {
                achievement_id: a.id.clone(),
                title: a.title.clone(),
                rarity: a.rarity,
                xp_reward: a.xp_reward,
                unlocked_at: now,
            })
            .collect();
        self.progress.unlocked_achievements = state.unlocked_achievements;

        let mut xp: u32 = 0;
        for achievement in &unlocked {
            xp = xp.saturating_add(achievement.xp_reward);
            submit_best_effort(
                &mut self.sink,
                &SyncEvent::AchievementUnlocked {
                    player_id: self.progress.player_id,
                    achievement: achievement.clone(),
                },
            );
        }
        self.progress.total_xp = apply_xp(self.progress.total_xp, xp).0;

        (unlocked, xp)
    }
}
