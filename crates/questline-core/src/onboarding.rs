//! Onboarding session: goal selection, skill quizzes, and the study plan.
//!
//! The session validates input at the boundary (known goal ids, the goal
//! limit, a non-zero target) so the calculators only ever see well-formed
//! data. Submitting a quiz for a goal twice replaces the first result.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::num::NonZeroU32;

use questline_progression::{
    EstimateConfig, ProgressionConfig, ProgressionError, assess_answers,
    calculate_estimate_with, detect_mismatch_with, find_goal, skill_quiz,
};
use questline_types::{EstimateSummary, GoalData, MismatchReport, SkillAssessment};
use serde::{Deserialize, Serialize};

const DEFAULT_DAILY_MINUTES: u32 = 30;
const DEFAULT_TARGET_MONTHS: NonZeroU32 = NonZeroU32::MIN.saturating_add(5);

/// Errors from onboarding input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The goal id is not in the catalog.
    #[error("unknown goal: {0}")]
    UnknownGoal(String),

    /// The goal is already selected.
    #[error("goal already selected: {0}")]
    DuplicateGoal(String),

    /// The selection is full.
    #[error("at most {limit} goals can be selected")]
    GoalLimitReached {
        /// Configured maximum.
        limit: usize,
    },

    /// The goal is not part of the selection.
    #[error("goal not selected: {0}")]
    GoalNotSelected(String),

    /// The goal has no skill quiz.
    #[error("no skill quiz for goal: {0}")]
    NoQuiz(String),

    /// A plan needs at least one goal.
    #[error("no goals selected")]
    NoGoalsSelected,

    /// Target timelines are at least one month.
    #[error("target months must be at least 1")]
    InvalidTargetMonths,

    /// The quiz answers were rejected.
    #[error(transparent)]
    Quiz(#[from] ProgressionError),
}

/// Serialized onboarding answers, as read by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRequest {
    /// Selected goal ids, in selection order.
    pub goals: Vec<String>,
    /// Chosen option indices per goal id.
    #[serde(default)]
    pub answers: BTreeMap<String, Vec<usize>>,
    /// Daily study minutes.
    #[serde(default = "default_daily_minutes")]
    pub daily_minutes: u32,
    /// Target timeline in months.
    #[serde(default = "default_target_months")]
    pub target_months: u32,
}

const fn default_daily_minutes() -> u32 {
    DEFAULT_DAILY_MINUTES
}

const fn default_target_months() -> u32 {
    DEFAULT_TARGET_MONTHS.get()
}

/// The result of onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingPlan {
    /// Selected goals, in selection order.
    pub goals: Vec<GoalData>,
    /// Submitted assessments, one per assessed goal.
    pub assessments: Vec<SkillAssessment>,
    /// Timeline estimate.
    pub estimate: EstimateSummary,
    /// Target months the plan was checked against.
    pub target_months: u32,
    /// Comparison with the target timeline.
    pub mismatch: MismatchReport,
}

/// In-progress onboarding for one player.
#[derive(Debug, Clone)]
pub struct OnboardingSession {
    estimate: EstimateConfig,
    max_goals: usize,
    goals: Vec<GoalData>,
    assessments: BTreeMap<String, SkillAssessment>,
    daily_minutes: u32,
    target_months: NonZeroU32,
}

impl Default for OnboardingSession {
    fn default() -> Self {
        Self::new(&ProgressionConfig::default())
    }
}

impl OnboardingSession {
    /// Start an empty session.
    pub fn new(config: &ProgressionConfig) -> Self {
        Self {
            estimate: config.estimate.clone(),
            max_goals: config.onboarding.max_goals,
            goals: Vec::new(),
            assessments: BTreeMap::new(),
            daily_minutes: DEFAULT_DAILY_MINUTES,
            target_months: DEFAULT_TARGET_MONTHS,
        }
    }

    /// Replay a serialized request against the built-in catalog.
    pub fn from_request(
        config: &ProgressionConfig,
        request: &OnboardingRequest,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(config);
        for goal_id in &request.goals {
            session.select_catalog_goal(goal_id)?;
        }
        for (goal_id, answers) in &request.answers {
            session.submit_quiz(goal_id, answers)?;
        }
        session.set_daily_minutes(request.daily_minutes);
        session.set_target_months(request.target_months)?;
        Ok(session)
    }

    /// Selected goals.
    pub fn goals(&self) -> &[GoalData] {
        &self.goals
    }

    /// Daily minutes as entered (clamped only when estimating).
    pub const fn daily_minutes(&self) -> u32 {
        self.daily_minutes
    }

    /// Target timeline in months.
    pub const fn target_months(&self) -> NonZeroU32 {
        self.target_months
    }

    /// Assessment for a goal, if its quiz was submitted.
    pub fn assessment(&self, goal_id: &str) -> Option<&SkillAssessment> {
        self.assessments.get(goal_id)
    }

    /// Add a goal to the selection.
    pub fn select_goal(&mut self, goal: GoalData) -> Result<(), SessionError> {
        if self.goals.iter().any(|g| g.id == goal.id) {
            return Err(SessionError::DuplicateGoal(goal.id));
        }
        if self.goals.len() >= self.max_goals {
            return Err(SessionError::GoalLimitReached {
                limit: self.max_goals,
            });
        }
        tracing::debug!(goal_id = %goal.id, "goal selected");
        self.goals.push(goal);
        Ok(())
    }

    /// Add a goal from the built-in catalog by id.
    pub fn select_catalog_goal(&mut self, goal_id: &str) -> Result<(), SessionError> {
        let goal = find_goal(goal_id).ok_or_else(|| SessionError::UnknownGoal(goal_id.into()))?;
        self.select_goal(goal)
    }

    /// Remove a goal and any assessment submitted for it.
    pub fn remove_goal(&mut self, goal_id: &str) -> Result<GoalData, SessionError> {
        let index = self
            .goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| SessionError::GoalNotSelected(goal_id.into()))?;
        self.assessments.remove(goal_id);
        Ok(self.goals.remove(index))
    }

    /// Score the goal's quiz and store the assessment.
    pub fn submit_quiz(
        &mut self,
        goal_id: &str,
        answers: &[usize],
    ) -> Result<&SkillAssessment, SessionError> {
        if !self.goals.iter().any(|g| g.id == goal_id) {
            return Err(SessionError::GoalNotSelected(goal_id.into()));
        }
        let questions = skill_quiz(goal_id).ok_or_else(|| SessionError::NoQuiz(goal_id.into()))?;
        let assessment = assess_answers(goal_id, &questions, answers)?;
        tracing::info!(
            goal_id,
            level = %assessment.level,
            score = assessment.total_score,
            "skill quiz submitted"
        );
        let slot = match self.assessments.entry(String::from(goal_id)) {
            Entry::Occupied(mut existing) => {
                existing.insert(assessment);
                existing.into_mut()
            }
            Entry::Vacant(empty) => empty.insert(assessment),
        };
        Ok(slot)
    }

    /// Set daily study minutes. Out-of-range values are clamped by the estimator.
    pub const fn set_daily_minutes(&mut self, minutes: u32) {
        self.daily_minutes = minutes;
    }

    /// Set the target timeline.
    pub fn set_target_months(&mut self, months: u32) -> Result<(), SessionError> {
        self.target_months = NonZeroU32::new(months).ok_or(SessionError::InvalidTargetMonths)?;
        Ok(())
    }

    /// Current estimate for the selection.
    pub fn estimate(&self) -> EstimateSummary {
        let assessments: Vec<SkillAssessment> = self.assessments.values().cloned().collect();
        calculate_estimate_with(&self.estimate, &self.goals, &assessments, self.daily_minutes)
    }

    /// Produce the plan: estimate plus mismatch against the target.
    pub fn plan(&self) -> Result<OnboardingPlan, SessionError> {
        if self.goals.is_empty() {
            return Err(SessionError::NoGoalsSelected);
        }
        let estimate = self.estimate();
        let mismatch =
            detect_mismatch_with(&self.estimate, estimate.total_weeks, self.target_months);
        let assessments = self
            .goals
            .iter()
            .filter_map(|g| self.assessments.get(&g.id).cloned())
            .collect();

        tracing::info!(
            goals = self.goals.len(),
            total_weeks = estimate.total_weeks,
            target_months = self.target_months.get(),
            severity = ?mismatch.severity,
            "onboarding plan produced"
        );

        Ok(OnboardingPlan {
            goals: self.goals.clone(),
            assessments,
            estimate,
            target_months: self.target_months.get(),
            mismatch,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use questline_types::{MismatchSeverity, SkillLevel};

    use super::*;

    fn session_with(goal_ids: &[&str]) -> OnboardingSession {
        let mut session = OnboardingSession::default();
        for id in goal_ids {
            session.select_catalog_goal(id).unwrap();
        }
        session
    }

    #[test]
    fn defaults() {
        let session = OnboardingSession::default();
        assert_eq!(session.daily_minutes(), 30);
        assert_eq!(session.target_months().get(), 6);
        assert!(session.goals().is_empty());
    }

    #[test]
    fn rejects_unknown_duplicate_and_excess_goals() {
        let mut session = session_with(&["fullstack"]);
        assert_eq!(
            session.select_catalog_goal("basket-weaving"),
            Err(SessionError::UnknownGoal(String::from("basket-weaving")))
        );
        assert_eq!(
            session.select_catalog_goal("fullstack"),
            Err(SessionError::DuplicateGoal(String::from("fullstack")))
        );
        session.select_catalog_goal("spanish").unwrap();
        session.select_catalog_goal("guitar").unwrap();
        assert_eq!(
            session.select_catalog_goal("fitness"),
            Err(SessionError::GoalLimitReached { limit: 3 })
        );
    }

    #[test]
    fn quiz_requires_selected_goal() {
        let mut session = session_with(&["fullstack"]);
        assert_eq!(
            session.submit_quiz("spanish", &[0, 0, 0, 0]).err(),
            Some(SessionError::GoalNotSelected(String::from("spanish")))
        );
    }

    #[test]
    fn quiz_errors_propagate() {
        let mut session = session_with(&["fitness"]);
        assert!(matches!(
            session.submit_quiz("fitness", &[0]),
            Err(SessionError::Quiz(ProgressionError::AnswerCountMismatch { .. }))
        ));
        assert!(session.assessment("fitness").is_none());
    }

    #[test]
    fn resubmitting_overwrites() {
        let mut session = session_with(&["fullstack"]);
        let first = session.submit_quiz("fullstack", &[3, 3, 3, 3, 3]).unwrap();
        assert_eq!(first.level, SkillLevel::Advanced);
        let second = session.submit_quiz("fullstack", &[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(second.level, SkillLevel::Beginner);
        assert_eq!(session.assessment("fullstack").unwrap().total_score, 0);
    }

    #[test]
    fn removing_goal_drops_assessment() {
        let mut session = session_with(&["fullstack", "spanish"]);
        session.submit_quiz("fullstack", &[3, 3, 3, 3, 3]).unwrap();
        assert_eq!(session.remove_goal("fullstack").unwrap().id, "fullstack");
        assert!(session.assessment("fullstack").is_none());
        assert_eq!(session.goals().len(), 1);
        assert_eq!(
            session.remove_goal("fullstack").err(),
            Some(SessionError::GoalNotSelected(String::from("fullstack")))
        );
    }

    #[test]
    fn zero_target_months_rejected() {
        let mut session = OnboardingSession::default();
        assert_eq!(
            session.set_target_months(0),
            Err(SessionError::InvalidTargetMonths)
        );
        assert_eq!(session.target_months().get(), 6);
    }

    #[test]
    fn plan_requires_goals() {
        assert_eq!(
            OnboardingSession::default().plan().err(),
            Some(SessionError::NoGoalsSelected)
        );
    }

    #[test]
    fn plan_combines_estimate_and_mismatch() {
        let mut session = session_with(&["marketing"]);
        // Beginner marketing at 30 min/day: 12 weeks, well inside 6 months.
        let plan = session.plan().unwrap();
        assert_eq!(plan.estimate.total_weeks, 12);
        assert_eq!(plan.mismatch.severity, MismatchSeverity::None);

        session.set_target_months(2).unwrap();
        let plan = session.plan().unwrap();
        assert_eq!(plan.target_months, 2);
        assert!(plan.mismatch.has_mismatch);
    }

    #[test]
    fn request_replays_into_session() {
        let request = OnboardingRequest {
            goals: vec![String::from("fullstack")],
            answers: BTreeMap::from([(String::from("fullstack"), vec![3, 3, 3, 3, 3])]),
            daily_minutes: 30,
            target_months: 3,
        };
        let session =
            OnboardingSession::from_request(&ProgressionConfig::default(), &request).unwrap();
        assert_eq!(session.plan().unwrap().estimate.total_weeks, 8);

        let bad = OnboardingRequest {
            target_months: 0,
            ..request
        };
        assert!(matches!(
            OnboardingSession::from_request(&ProgressionConfig::default(), &bad),
            Err(SessionError::InvalidTargetMonths)
        ));
    }
}
