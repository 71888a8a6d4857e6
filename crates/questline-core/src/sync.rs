//! Background sync seam for progression events.
//!
//! Local progress is authoritative. After a quest completion or achievement
//! unlock the tracker hands an event to a [`SyncSink`], which forwards it to
//! the remote backend. Delivery is best effort: a failed submission is
//! logged with `warn!` and never blocks or rolls back local state.
//! Ordering and deduplication against concurrent remote writes are the
//! backend's concern.

use questline_types::{PlayerId, QuestRecord, UnlockedAchievement};
use serde::Serialize;

/// Errors a sink can report for a single submission.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The backend could not be reached.
    #[error("sync backend unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },

    /// The backend refused the event.
    #[error("sync event rejected: {message}")]
    Rejected {
        /// Reason given by the backend.
        message: String,
    },
}

/// A progression change to mirror on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncEvent {
    /// A quest was completed.
    QuestCompleted {
        /// Player who completed it.
        player_id: PlayerId,
        /// History entry for the completion.
        record: QuestRecord,
    },
    /// An achievement was unlocked.
    AchievementUnlocked {
        /// Player who unlocked it.
        player_id: PlayerId,
        /// Unlock details.
        achievement: UnlockedAchievement,
    },
}

impl SyncEvent {
    /// Short name used in log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::QuestCompleted { .. } => "quest_completed",
            Self::AchievementUnlocked { .. } => "achievement_unlocked",
        }
    }
}

/// Destination for progression events.
///
/// Implementations must not block for long; a network-backed sink should
/// enqueue the event and return.
pub trait SyncSink {
    /// Submit one event.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] if the event could not be handed off. The
    /// caller logs the error and carries on.
    fn submit(&mut self, event: &SyncEvent) -> Result<(), SyncError>;
}

/// A sink that discards every event. Used for offline play and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSyncSink;

impl NullSyncSink {
    /// Create a new null sink.
    pub const fn new() -> Self {
        Self
    }
}

impl SyncSink for NullSyncSink {
    fn submit(&mut self, _event: &SyncEvent) -> Result<(), SyncError> {
        Ok(())
    }
}

/// Submit `event`, logging and swallowing any failure.
///
/// Returns `true` if the sink accepted the event.
pub fn submit_best_effort<S: SyncSink + ?Sized>(sink: &mut S, event: &SyncEvent) -> bool {
    match sink.submit(event) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                event = event.kind(),
                error = %e,
                "background sync failed; keeping local state"
            );
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use questline_types::{QuestId, Rarity};

    use super::*;

    struct FailingSink;

    impl SyncSink for FailingSink {
        fn submit(&mut self, _event: &SyncEvent) -> Result<(), SyncError> {
            Err(SyncError::Unavailable {
                message: String::from("offline"),
            })
        }
    }

    fn unlock_event() -> SyncEvent {
        SyncEvent::AchievementUnlocked {
            player_id: PlayerId::new(),
            achievement: UnlockedAchievement {
                achievement_id: String::from("first-quest"),
                title: String::from("First Steps"),
                rarity: Rarity::Common,
                xp_reward: 25,
                unlocked_at: Utc::now(),
            },
        }
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSyncSink::new();
        assert!(submit_best_effort(&mut sink, &unlock_event()));
    }

    #[test]
    fn failures_are_swallowed() {
        let mut sink = FailingSink;
        assert!(!submit_best_effort(&mut sink, &unlock_event()));
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = SyncEvent::QuestCompleted {
            player_id: PlayerId::new(),
            record: QuestRecord {
                quest_id: QuestId::new(),
                title: String::from("Read the HTTP guide"),
                xp_awarded: 30,
                bonus_xp: 10,
                coins_awarded: 5,
                completed_at: Utc::now(),
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "quest_completed");
        assert_eq!(event.kind(), "quest_completed");
        assert_eq!(unlock_event().kind(), "achievement_unlocked");
    }
}
