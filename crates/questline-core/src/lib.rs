//! Player-facing state machines and configuration for Questline.
//!
//! This crate wires the pure calculators in `questline-progression` into
//! the stateful flows the app drives: onboarding, quest completion, and
//! background sync.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `questline-config.yaml` into
//!   strongly-typed structs.
//! - [`flow`] -- Viewing / celebrating / summary phase machine for a quest.
//! - [`onboarding`] -- Goal selection, skill quizzes, and the study plan.
//! - [`sync`] -- [`SyncSink`] trait and [`NullSyncSink`].
//! - [`tracker`] -- Applies completions and activity to [`PlayerProgress`].
//!
//! [`SyncSink`]: sync::SyncSink
//! [`NullSyncSink`]: sync::NullSyncSink
//! [`PlayerProgress`]: tracker::PlayerProgress

pub mod config;
pub mod flow;
pub mod onboarding;
pub mod sync;
pub mod tracker;
