// src/models/question.rs

use std::collections::HashMap;

use serde::Serialize;

use crate::models::dimension::Dimension;

/// One assessment question.
///
/// `weights` maps each scored dimension to its coefficient; the chosen
/// option's 0-based index is multiplied by the weight when scoring.
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: i64,
    pub text: String,
    /// Ordered answer choices, 2 to 5 per question. For agreement-scale
    /// questions the order runs from "strongly disagree" to "strongly agree".
    pub options: Vec<String>,
    pub weights: HashMap<Dimension, f64>,
}

impl Question {
    /// Highest option index offered, i.e. the top of this question's scale.
    pub fn max_option_index(&self) -> usize {
        self.options.len() - 1
    }
}

/// DTO for sending a question to the client (excludes the weight map).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            text: q.text.clone(),
            options: q.options.clone(),
        }
    }
}

/// The fixed, ordered set of questions served to every session.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

const AGREEMENT_SCALE: [&str; 5] = [
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

fn question(id: i64, text: &str, options: &[&str], weights: &[(Dimension, f64)]) -> Question {
    Question {
        id,
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        weights: weights.iter().copied().collect(),
    }
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The embedded question set. Pure: the data is hardcoded, so there is
    /// no load failure path.
    pub fn builtin() -> Self {
        use Dimension::*;

        Self::new(vec![
            question(
                1,
                "When developing long-term strategies, how do you balance innovation \
                 against operational stability?",
                &[
                    "Prioritize innovation for competitive advantage",
                    "Maintain stability with incremental improvements",
                    "Create separate teams for innovation and operations",
                    "Integrate innovation within stable operational frameworks",
                ],
                &[(SL, 0.40), (IN, 0.30), (PM, 0.20), (CO, 0.10)],
            ),
            question(
                2,
                "How much do you agree: \"I regularly analyze industry trends to \
                 anticipate future challenges\"?",
                &AGREEMENT_SCALE,
                &[(SL, 0.45), (IN, 0.25), (PM, 0.20), (EI, 0.10)],
            ),
            question(
                3,
                "How much do you agree: \"I can read the mood of a room and adjust \
                 my approach before tensions escalate\"?",
                &AGREEMENT_SCALE,
                &[(EI, 0.50), (CO, 0.30), (SL, 0.10), (ET, 0.10)],
            ),
            question(
                4,
                "How much do you agree: \"Team members bring problems to me before \
                 they become critical\"?",
                &AGREEMENT_SCALE,
                &[(EI, 0.40), (CO, 0.35), (PM, 0.25)],
            ),
            question(
                5,
                "A direct report has repeatedly missed agreed deadlines. What is \
                 your first move?",
                &[
                    "Tighten reporting and track their work daily",
                    "Restate expectations and the consequences of slipping again",
                    "Review their workload and reassign what does not fit",
                    "Explore the underlying blockers together in a one-on-one",
                ],
                &[(PM, 0.45), (EI, 0.25), (CO, 0.20), (ET, 0.10)],
            ),
            question(
                6,
                "How much do you agree: \"I experiment with new tools and methods \
                 even when the current ones still work\"?",
                &AGREEMENT_SCALE,
                &[(IN, 0.55), (SL, 0.20), (PM, 0.15), (CO, 0.10)],
            ),
            question(
                7,
                "How much do you agree: \"I openly share the reasoning behind \
                 unpopular decisions with my team\"?",
                &AGREEMENT_SCALE,
                &[(CO, 0.45), (ET, 0.30), (EI, 0.15), (SL, 0.10)],
            ),
            question(
                8,
                "You discover a reporting error that makes your team's results look \
                 better than they are. What do you do?",
                &[
                    "Quietly fix the error going forward",
                    "Fix it and mention it if anyone asks",
                    "Correct the record with your manager",
                    "Correct the record and walk the team through the fix",
                ],
                &[(ET, 0.60), (CO, 0.20), (PM, 0.20)],
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Highest score a dimension can reach across the whole bank:
    /// the sum of `top option index × weight` over every question.
    pub fn max_score(&self, dimension: Dimension) -> f64 {
        self.questions
            .iter()
            .filter_map(|q| {
                q.weights
                    .get(&dimension)
                    .map(|w| q.max_option_index() as f64 * w)
            })
            .sum()
    }
}
