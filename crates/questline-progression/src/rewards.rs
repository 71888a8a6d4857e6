//! Quest rewards: base XP and coins per template, plus the random bonus.
//!
//! The bonus follows a variable-ratio schedule: every completion rolls
//! independently, and a successful roll adds half the base XP (rounded half
//! up). Rolls use integer chances per 10000 so no floating-point comparison
//! is involved.

use questline_types::{BonusResult, Quest, QuestId, QuestKind, Rarity};
use rand::Rng;

use crate::config::RewardConfig;

// ---------------------------------------------------------------------------
// Quest templates
// ---------------------------------------------------------------------------

/// Base XP for a quest of the given kind at [`Rarity::Common`].
pub const fn base_xp_for_kind(kind: QuestKind) -> u32 {
    match kind {
        QuestKind::Article => 20,
        QuestKind::Video => 25,
        QuestKind::Quiz => 30,
        QuestKind::Project => 60,
    }
}

/// Reward scaling per rarity, as a percentage.
pub const fn rarity_reward_pct(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::Common => 100,
        Rarity::Uncommon => 125,
        Rarity::Rare => 150,
        Rarity::Epic => 200,
        Rarity::Legendary => 300,
    }
}

/// Coins granted for completing a quest of the given rarity.
pub const fn coins_for_rarity(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::Common => 5,
        Rarity::Uncommon => 10,
        Rarity::Rare => 20,
        Rarity::Epic => 40,
        Rarity::Legendary => 100,
    }
}

/// Build a quest from its template parameters, deriving the rewards.
pub fn quest_from_template(goal_id: &str, title: &str, kind: QuestKind, rarity: Rarity) -> Quest {
    Quest {
        id: QuestId::new(),
        goal_id: String::from(goal_id),
        title: String::from(title),
        kind,
        rarity,
        xp_reward: percent_of(base_xp_for_kind(kind), rarity_reward_pct(rarity)),
        coin_reward: coins_for_rarity(rarity),
    }
}

// ---------------------------------------------------------------------------
// Bonus roll
// ---------------------------------------------------------------------------

/// `value * pct / 100`, rounded half up, saturating at `u32::MAX`.
pub fn percent_of(value: u32, pct: u32) -> u32 {
    let scaled = u64::from(value)
        .saturating_mul(u64::from(pct))
        .saturating_add(50)
        .checked_div(100)
        .unwrap_or(0);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Roll the completion bonus for `base_xp`.
///
/// With probability `bonus_chance_per_10000 / 10000` the result carries a
/// bonus of `bonus_pct` percent of the base; otherwise the bonus is zero.
pub fn roll_bonus_xp(base_xp: u32, config: &RewardConfig, rng: &mut impl Rng) -> BonusResult {
    let roll: u32 = rng.random_range(0..10_000);
    let has_bonus = roll < config.bonus_chance_per_10000;
    let bonus = if has_bonus {
        percent_of(base_xp, config.bonus_pct)
    } else {
        0
    };

    if has_bonus {
        tracing::debug!(base_xp, bonus, "bonus XP rolled");
    }

    BonusResult {
        bonus,
        total: base_xp.saturating_add(bonus),
        has_bonus,
    }
}

/// Roll the completion bonus with default settings and the thread-local RNG.
pub fn roll_bonus_xp_default(base_xp: u32) -> BonusResult {
    roll_bonus_xp(base_xp, &RewardConfig::default(), &mut rand::rng())
}
