//! Built-in reference data: learning goals and their skill quizzes.
//!
//! Quizzes have between 2 and 5 questions depending on the goal. Every
//! option is worth 0 to 3 points, with options listed from least to most
//! experienced.

use std::cmp::Reverse;

use questline_types::{GoalCategory, GoalData, SkillOption, SkillQuestion};

/// `(id, label, category, popularity, estimated_weeks, icon)`
type GoalRow = (&'static str, &'static str, GoalCategory, u32, u32, Option<&'static str>);

/// `(question id, prompt, [(option label, score)])`
type QuestionRow = (&'static str, &'static str, &'static [(&'static str, u8)]);

const GOALS: &[GoalRow] = &[
    ("fullstack", "Full-Stack Dev", GoalCategory::Technology, 95, 24, Some("code")),
    ("data-science", "Data Science", GoalCategory::Technology, 82, 28, Some("chart")),
    ("ui-design", "UI/UX Design", GoalCategory::Creative, 70, 16, Some("palette")),
    ("spanish", "Spanish", GoalCategory::Language, 76, 32, Some("globe")),
    ("marketing", "Digital Marketing", GoalCategory::Business, 55, 12, Some("megaphone")),
    ("fitness", "Strength Training", GoalCategory::Wellness, 61, 10, Some("dumbbell")),
    ("guitar", "Guitar", GoalCategory::Creative, 48, 20, None),
    ("public-speaking", "Public Speaking", GoalCategory::Business, 37, 0, None),
];

const EXPERIENCE: &[(&str, u8)] = &[
    ("Never tried it", 0),
    ("Played around a little", 1),
    ("Use it now and then", 2),
    ("Use it regularly", 3),
];

const FULLSTACK_QUIZ: &[QuestionRow] = &[
    ("html-css", "How comfortable are you with HTML and CSS?", EXPERIENCE),
    ("javascript", "How well do you know JavaScript?", EXPERIENCE),
    (
        "backend",
        "Have you built a backend service?",
        &[
            ("No", 0),
            ("Followed a tutorial", 1),
            ("Built a small API", 2),
            ("Run one in production", 3),
        ],
    ),
    (
        "database",
        "How do you work with databases?",
        &[
            ("I don't", 0),
            ("Simple queries", 1),
            ("Design schemas", 2),
            ("Tune and migrate", 3),
        ],
    ),
    ("deploy", "Have you deployed a web app?", EXPERIENCE),
];

const DATA_SCIENCE_QUIZ: &[QuestionRow] = &[
    ("python", "How well do you know Python?", EXPERIENCE),
    (
        "statistics",
        "How is your statistics background?",
        &[
            ("None", 0),
            ("Averages and charts", 1),
            ("Hypothesis tests", 2),
            ("Regression and beyond", 3),
        ],
    ),
    ("pandas", "Have you analyzed data with pandas or similar?", EXPERIENCE),
    (
        "ml",
        "Have you trained a machine learning model?",
        &[
            ("No", 0),
            ("In a course", 1),
            ("On my own data", 2),
            ("Shipped one", 3),
        ],
    ),
];

const UI_DESIGN_QUIZ: &[QuestionRow] = &[
    ("tools", "Do you use a design tool like Figma?", EXPERIENCE),
    (
        "principles",
        "How familiar are you with layout and typography?",
        &[
            ("Not at all", 0),
            ("Know the basics", 1),
            ("Apply them deliberately", 2),
            ("Teach them", 3),
        ],
    ),
    ("research", "Have you run user research?", EXPERIENCE),
];

const SPANISH_QUIZ: &[QuestionRow] = &[
    (
        "vocabulary",
        "How much Spanish vocabulary do you know?",
        &[
            ("A few words", 0),
            ("Common phrases", 1),
            ("Everyday topics", 2),
            ("Most topics", 3),
        ],
    ),
    ("reading", "Can you read a Spanish article?", EXPERIENCE),
    ("listening", "Can you follow spoken Spanish?", EXPERIENCE),
    (
        "speaking",
        "Can you hold a conversation?",
        &[
            ("No", 0),
            ("Greetings only", 1),
            ("Simple chats", 2),
            ("Comfortably", 3),
        ],
    ),
];

const MARKETING_QUIZ: &[QuestionRow] = &[
    ("social", "Have you run a social media account for a brand?", EXPERIENCE),
    ("ads", "Have you managed paid ad campaigns?", EXPERIENCE),
    (
        "analytics",
        "Do you track campaign metrics?",
        &[
            ("No", 0),
            ("Look at likes", 1),
            ("Use analytics dashboards", 2),
            ("Run A/B tests", 3),
        ],
    ),
];

const FITNESS_QUIZ: &[QuestionRow] = &[
    (
        "frequency",
        "How often do you train?",
        &[
            ("Rarely", 0),
            ("Once a week", 1),
            ("2-3 times a week", 2),
            ("4+ times a week", 3),
        ],
    ),
    ("lifts", "Do you know the main barbell lifts?", EXPERIENCE),
];

const GUITAR_QUIZ: &[QuestionRow] = &[
    (
        "chords",
        "How many chords can you play?",
        &[
            ("None", 0),
            ("A few", 1),
            ("Most open chords", 2),
            ("Barre chords too", 3),
        ],
    ),
    ("songs", "Can you play a full song?", EXPERIENCE),
    ("theory", "Do you know music theory?", EXPERIENCE),
];

const PUBLIC_SPEAKING_QUIZ: &[QuestionRow] = &[
    ("audience", "Have you spoken in front of a group?", EXPERIENCE),
    (
        "nerves",
        "How do you feel before presenting?",
        &[
            ("Terrified", 0),
            ("Very nervous", 1),
            ("A bit nervous", 2),
            ("Excited", 3),
        ],
    ),
];

/// All built-in goals, most popular first.
pub fn goal_catalog() -> Vec<GoalData> {
    let mut goals: Vec<GoalData> = GOALS.iter().map(goal_from_row).collect();
    goals.sort_by_key(|g| Reverse(g.popularity));
    goals
}

/// Look up a built-in goal by id.
pub fn find_goal(goal_id: &str) -> Option<GoalData> {
    GOALS
        .iter()
        .find(|row| row.0 == goal_id)
        .map(goal_from_row)
}

/// The skill quiz for a built-in goal.
pub fn skill_quiz(goal_id: &str) -> Option<Vec<SkillQuestion>> {
    let rows = match goal_id {
        "fullstack" => FULLSTACK_QUIZ,
        "data-science" => DATA_SCIENCE_QUIZ,
        "ui-design" => UI_DESIGN_QUIZ,
        "spanish" => SPANISH_QUIZ,
        "marketing" => MARKETING_QUIZ,
        "fitness" => FITNESS_QUIZ,
        "guitar" => GUITAR_QUIZ,
        "public-speaking" => PUBLIC_SPEAKING_QUIZ,
        _ => return None,
    };
    Some(rows.iter().map(question_from_row).collect())
}

fn goal_from_row(row: &GoalRow) -> GoalData {
    let (id, label, category, popularity, estimated_weeks, icon) = *row;
    GoalData {
        id: String::from(id),
        label: String::from(label),
        category,
        popularity,
        estimated_weeks,
        icon: icon.map(String::from),
    }
}

fn question_from_row(row: &QuestionRow) -> SkillQuestion {
    let (id, prompt, options) = *row;
    SkillQuestion {
        id: String::from(id),
        prompt: String::from(prompt),
        options: options
            .iter()
            .map(|&(label, score)| SkillOption {
                label: String::from(label),
                score,
            })
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use questline_types::DEFAULT_GOAL_ICON;

    use super::*;
    use crate::scoring::MAX_OPTION_SCORE;

    #[test]
    fn catalog_sorted_by_popularity() {
        let goals = goal_catalog();
        assert_eq!(goals.len(), GOALS.len());
        assert!(goals.windows(2).all(|w| {
            matches!((w.first(), w.get(1)), (Some(a), Some(b)) if a.popularity >= b.popularity)
        }));
        assert_eq!(goals.first().map(|g| g.id.as_str()), Some("fullstack"));
    }

    #[test]
    fn every_goal_has_a_valid_quiz() {
        for goal in goal_catalog() {
            let quiz = skill_quiz(&goal.id).unwrap();
            assert!((2..=5).contains(&quiz.len()), "{} has {} questions", goal.id, quiz.len());
            for question in &quiz {
                assert!(!question.options.is_empty(), "{}", question.id);
                assert!(question.options.iter().all(|o| o.score <= MAX_OPTION_SCORE));
            }
        }
    }

    #[test]
    fn missing_metadata_stays_missing() {
        let goal = find_goal("public-speaking");
        assert_eq!(goal.as_ref().map(|g| g.estimated_weeks), Some(0));
        assert_eq!(goal.as_ref().map(GoalData::icon_or_default), Some(DEFAULT_GOAL_ICON));
    }

    #[test]
    fn unknown_goal() {
        assert!(find_goal("basket-weaving").is_none());
        assert!(skill_quiz("basket-weaving").is_none());
    }
}
