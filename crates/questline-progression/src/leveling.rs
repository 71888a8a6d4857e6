//! Player leveling: XP curve and level derivation.
//!
//! XP required to advance from level N to level N+1 is `N * 100`, so level 2
//! needs 100 lifetime XP, level 3 needs 300, level 4 needs 600, and so on.
//! Players start at level 1 and cap at [`MAX_PLAYER_LEVEL`].
//!
//! The level is always re-derived from lifetime XP rather than stored and
//! incremented, so it can never drift from its input.

use serde::{Deserialize, Serialize};

/// Highest level a player can reach.
pub const MAX_PLAYER_LEVEL: u32 = 100;

/// XP needed per level step, multiplied by the current level.
pub const XP_PER_LEVEL_STEP: u32 = 100;

/// Where a lifetime XP total sits on the level curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level (1 to [`MAX_PLAYER_LEVEL`]).
    pub level: u32,
    /// XP earned since reaching `level`.
    pub xp_into_level: u32,
    /// XP needed to reach the next level, or `None` at the cap.
    pub xp_for_next_level: Option<u32>,
}

/// XP needed to go from `level` to `level + 1`.
///
/// Returns `None` at [`MAX_PLAYER_LEVEL`] or on overflow.
pub const fn xp_for_next_level(level: u32) -> Option<u32> {
    if level >= MAX_PLAYER_LEVEL {
        return None;
    }
    // Level 0 is not a real level; treat it as level 1.
    let effective = if level == 0 { 1 } else { level };
    effective.checked_mul(XP_PER_LEVEL_STEP)
}

/// Place a lifetime XP total on the level curve.
pub const fn level_progress(total_xp: u32) -> LevelProgress {
    let mut level = 1_u32;
    let mut remaining = total_xp;

    while let Some(threshold) = xp_for_next_level(level) {
        if remaining < threshold {
            return LevelProgress {
                level,
                xp_into_level: remaining,
                xp_for_next_level: Some(threshold),
            };
        }
        remaining = remaining.saturating_sub(threshold);
        level = level.saturating_add(1);
    }

    LevelProgress {
        level,
        xp_into_level: 0,
        xp_for_next_level: None,
    }
}

/// Level reached with `total_xp` lifetime XP.
pub const fn level_for_xp(total_xp: u32) -> u32 {
    level_progress(total_xp).level
}

/// Lifetime XP at which `level` is reached (0 for level 1 and below).
pub fn total_xp_for_level(level: u32) -> Option<u32> {
    let capped = level.min(MAX_PLAYER_LEVEL);
    (1..capped).try_fold(0_u32, |acc, l| acc.checked_add(xp_for_next_level(l)?))
}

/// Apply an XP award and report the new level if it changed.
///
/// Returns `(new_total_xp, Some(new_level))` when the award crosses one or
/// more level thresholds, `(new_total_xp, None)` otherwise. The total
/// saturates at `u32::MAX`.
pub fn apply_xp(total_xp: u32, award: u32) -> (u32, Option<u32>) {
    let before = level_for_xp(total_xp);
    let new_total = total_xp.saturating_add(award);
    let after = level_for_xp(new_total);
    if after > before {
        tracing::info!(from = before, to = after, total_xp = new_total, "level up");
        (new_total, Some(after))
    } else {
        (new_total, None)
    }
}
