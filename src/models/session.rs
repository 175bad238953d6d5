// src/models/session.rs

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        dimension::Dimension,
        question::{PublicQuestion, Question, QuestionBank},
        report::ResultsReport,
    },
};

/// One user's in-progress or completed assessment.
///
/// `current` ranges over `[0, bank.len()]`; the top value is the terminal
/// results state. Scores are never cached: every read recomputes them from
/// `answers`, so re-answering a question replaces its earlier contribution
/// instead of stacking on top of it.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    current: usize,
    /// Question index -> chosen option index. At most one entry per
    /// question; overwritten on re-answer.
    answers: HashMap<usize, usize>,
    created_at: DateTime<Utc>,
    last_active: DateTime<Utc>,
}

impl AssessmentSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            current: 0,
            answers: HashMap::new(),
            created_at: now,
            last_active: now,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Stamps the session as just used; the store calls this on every access.
    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.last_active > ttl
    }

    /// Shifts the activity stamp into the past, for expiry tests.
    #[cfg(test)]
    pub fn backdate(&mut self, by: Duration) {
        self.last_active -= by;
    }

    /// True once navigation has moved past the last question.
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        self.current >= bank.len()
    }

    /// Records the answer for the question currently shown.
    ///
    /// * Rejected with 409 once the session has reached the results state.
    /// * `option_index` must index into the current question's options.
    /// * Re-answering overwrites the previous choice for this question.
    pub fn select_option(&mut self, bank: &QuestionBank, option_index: usize) -> Result<(), AppError> {
        // Past the last question means the results state: terminal until reset.
        let Some(question) = self.bank_current(bank) else {
            return Err(AppError::Conflict(
                "Assessment already completed; reset to retake".to_string(),
            ));
        };
        if option_index >= question.options.len() {
            return Err(AppError::BadRequest(format!(
                "Option index {} out of range for question {} ({} options)",
                option_index,
                question.id,
                question.options.len()
            )));
        }
        self.answers.insert(self.current, option_index);
        Ok(())
    }

    /// Advances to the next question, or into the results state when
    /// already on the last question. No-op once complete.
    pub fn go_next(&mut self, bank: &QuestionBank) {
        if self.current < bank.len() {
            self.current += 1;
        }
    }

    /// Steps back one question. No-op at the first question and in the
    /// results state (results are terminal until reset).
    pub fn go_previous(&mut self, bank: &QuestionBank) {
        if self.current > 0 && !self.is_complete(bank) {
            self.current -= 1;
        }
    }

    /// Returns to the first question with all answers cleared. Scores are
    /// derived from the answers, so this zeroes them as well.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.clear();
    }

    /// Accumulated score per dimension, recomputed from the answer record.
    pub fn scores(&self, bank: &QuestionBank) -> HashMap<Dimension, f64> {
        weighted_scores(bank, &self.answers)
    }

    /// Renders the view for the current state: the question card while
    /// answering, the full report once complete. Every mutation is followed
    /// by exactly this rendering, so clients always see the new state.
    pub fn view(&self, bank: &QuestionBank) -> SessionView {
        match self.bank_current(bank) {
            Some(question) => SessionView::Question(QuestionView {
                question: question.into(),
                selected_option: self.answers.get(&self.current).copied(),
                progress: Progress {
                    position: self.current + 1,
                    total: bank.len(),
                    answered: self.answers.len(),
                },
                has_previous: self.current > 0,
                is_last: self.current + 1 == bank.len(),
            }),
            None => SessionView::Results {
                report: ResultsReport::build(bank, &self.scores(bank)),
            },
        }
    }

    /// The completed-session report. 409 while questions remain.
    pub fn results(&self, bank: &QuestionBank) -> Result<ResultsReport, AppError> {
        if !self.is_complete(bank) {
            return Err(AppError::Conflict(format!(
                "Assessment not completed yet ({} of {} questions remain)",
                bank.len() - self.current,
                bank.len()
            )));
        }
        Ok(ResultsReport::build(bank, &self.scores(bank)))
    }

    fn bank_current<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        bank.get(self.current)
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure scoring: for every answered question, add
/// `chosen option index × weight` into each weighted dimension.
pub fn weighted_scores(
    bank: &QuestionBank,
    answers: &HashMap<usize, usize>,
) -> HashMap<Dimension, f64> {
    let mut scores = HashMap::new();
    for (question_index, option_index) in answers {
        let Some(question) = bank.get(*question_index) else {
            continue;
        };
        for (dimension, weight) in &question.weights {
            *scores.entry(*dimension).or_insert(0.0) += *option_index as f64 * weight;
        }
    }
    scores
}

/// What the client renders after any read or mutation.
#[derive(Debug, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum SessionView {
    Question(QuestionView),
    Results { report: ResultsReport },
}

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub question: PublicQuestion,
    /// The option previously chosen for this question, if any.
    pub selected_option: Option<usize>,
    pub progress: Progress,
    pub has_previous: bool,
    pub is_last: bool,
}

#[derive(Debug, Serialize)]
pub struct Progress {
    /// 1-based position of the question being shown.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
}

/// Response to session creation.
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub view: SessionView,
}
