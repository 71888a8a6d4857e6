//! Quest completion phase machine.
//!
//! ```text
//! Viewing --complete--> Celebrating --advance--> Summary --advance--> Viewing
//! ```
//!
//! The completion result is held from `Celebrating` through `Summary` so the
//! reward screen and the summary screen show the same numbers.

use questline_types::QuestPhase;

use crate::tracker::QuestCompletion;

/// Errors from out-of-order phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// A quest can only be completed while it is being viewed.
    #[error("cannot complete a quest during the {phase:?} phase")]
    NotViewing {
        /// Phase the flow was in.
        phase: QuestPhase,
    },

    /// There is nothing to advance past while viewing.
    #[error("no completion to advance past")]
    NothingToAdvance,
}

/// Phase state for one quest screen.
#[derive(Debug, Clone, Default)]
pub struct QuestFlow {
    phase: QuestPhase,
    completion: Option<QuestCompletion>,
}

impl QuestFlow {
    /// A flow in the viewing phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub const fn phase(&self) -> QuestPhase {
        self.phase
    }

    /// The completion being celebrated or summarized.
    pub const fn completion(&self) -> Option<&QuestCompletion> {
        self.completion.as_ref()
    }

    /// Enter the celebration phase with a finished completion.
    pub fn complete(&mut self, completion: QuestCompletion) -> Result<(), FlowError> {
        if self.phase != QuestPhase::Viewing {
            return Err(FlowError::NotViewing { phase: self.phase });
        }
        self.completion = Some(completion);
        self.phase = QuestPhase::Celebrating;
        Ok(())
    }

    /// Move to the next phase. Returns the phase entered.
    pub fn advance(&mut self) -> Result<QuestPhase, FlowError> {
        self.phase = match self.phase {
            QuestPhase::Viewing => return Err(FlowError::NothingToAdvance),
            QuestPhase::Celebrating => QuestPhase::Summary,
            QuestPhase::Summary => {
                self.completion = None;
                QuestPhase::Viewing
            }
        };
        Ok(self.phase)
    }
}
