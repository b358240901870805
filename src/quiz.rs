//! Multiple-choice quiz built from parsed cards.
//!
//! The engine moves through three phases: `NotStarted`, `InProgress` and
//! `Completed`. Completion is not a separate flag; a quiz is complete once
//! the current index has moved past the last question. Submitting an answer
//! and advancing are separate steps so feedback can be shown in between.

use crate::config::{MAX_QUIZ_LENGTH, MIN_QUIZ_LENGTH};
use crate::error::{FlashcardError, MIN_CARDS_FOR_QUIZ, Result};
use crate::models::Card;
use rand::Rng;
use rand::seq::{SliceRandom, index};

pub const MAX_DISTRACTORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Completed,
}

impl QuizPhase {
    fn describe(self) -> &'static str {
        match self {
            QuizPhase::NotStarted => "before the quiz has started",
            QuizPhase::InProgress => "while a quiz is in progress",
            QuizPhase::Completed => "after the quiz is finished",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }
}

/// Result of the most recent submission for the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub chosen: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    KeepPracticing,
}

impl ScoreBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            ScoreBand::Excellent
        } else if percentage >= 60.0 {
            ScoreBand::Good
        } else {
            ScoreBand::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent!",
            ScoreBand::Good => "Good job!",
            ScoreBand::KeepPracticing => "Keep practicing!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub band: ScoreBand,
}

/// Builds one question: the correct answer plus up to three answers from
/// other cards whose text differs, in random order.
pub fn build_question<R: Rng + ?Sized>(
    card: &Card,
    all_cards: &[Card],
    rng: &mut R,
) -> QuizQuestion {
    let pool: Vec<&str> = all_cards
        .iter()
        .map(|c| c.answer.as_str())
        .filter(|answer| *answer != card.answer)
        .collect();

    let wanted = MAX_DISTRACTORS.min(pool.len());
    let mut options = Vec::with_capacity(wanted + 1);
    options.push(card.answer.clone());
    options.extend(pool.choose_multiple(rng, wanted).map(|answer| answer.to_string()));
    options.shuffle(rng);

    QuizQuestion {
        question: card.question.clone(),
        correct_answer: card.answer.clone(),
        options,
    }
}

/// Inclusive range offered when picking the number of questions.
pub fn quiz_length_bounds(total_cards: usize) -> (usize, usize) {
    let upper = MAX_QUIZ_LENGTH.min(total_cards);
    (MIN_QUIZ_LENGTH.min(upper), upper)
}

#[derive(Debug, Clone)]
struct QuizState {
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<String>>,
    current_index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct QuizEngine {
    state: Option<QuizState>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuizPhase {
        match &self.state {
            None => QuizPhase::NotStarted,
            Some(state) if state.current_index < state.questions.len() => QuizPhase::InProgress,
            Some(_) => QuizPhase::Completed,
        }
    }

    fn require(&self, phase: QuizPhase, action: &'static str) -> Result<()> {
        let current = self.phase();
        if current == phase {
            Ok(())
        } else {
            Err(FlashcardError::InvalidState {
                action,
                state: current.describe(),
            })
        }
    }

    fn in_progress_mut(&mut self, action: &'static str) -> Result<&mut QuizState> {
        self.require(QuizPhase::InProgress, action)?;
        self.state.as_mut().ok_or(FlashcardError::InvalidState {
            action,
            state: QuizPhase::NotStarted.describe(),
        })
    }

    pub fn start<R: Rng + ?Sized>(
        &mut self,
        cards: &[Card],
        num_questions: usize,
        rng: &mut R,
    ) -> Result<()> {
        self.require(QuizPhase::NotStarted, "Start quiz")?;

        if cards.is_empty() {
            return Err(FlashcardError::EmptyStore);
        }
        if cards.len() < MIN_CARDS_FOR_QUIZ {
            return Err(FlashcardError::InsufficientData {
                found: cards.len(),
                required: MIN_CARDS_FOR_QUIZ,
            });
        }

        let count = num_questions.clamp(1, cards.len());
        let questions: Vec<QuizQuestion> = index::sample(rng, cards.len(), count)
            .into_iter()
            .map(|i| build_question(&cards[i], cards, rng))
            .collect();

        self.state = Some(QuizState {
            answers: vec![None; questions.len()],
            questions,
            current_index: 0,
        });
        Ok(())
    }

    /// Records `choice` for the current question and reports whether it was
    /// right. Submitting again for the same question replaces the answer.
    pub fn submit_answer(&mut self, choice: &str) -> Result<bool> {
        let state = self.in_progress_mut("Submit")?;
        let index = state.current_index;
        state.answers[index] = Some(choice.to_string());
        Ok(state.questions[index].is_correct(choice))
    }

    pub fn advance(&mut self) -> Result<()> {
        let state = self.in_progress_mut("Next")?;
        state.current_index += 1;
        Ok(())
    }

    pub fn retry(&mut self) -> Result<()> {
        if self.phase() == QuizPhase::NotStarted {
            return Err(FlashcardError::InvalidState {
                action: "Retry",
                state: QuizPhase::NotStarted.describe(),
            });
        }
        self.state = None;
        Ok(())
    }

    pub fn score(&self) -> Result<QuizScore> {
        self.require(QuizPhase::Completed, "Score")?;
        let state = self.state.as_ref().ok_or(FlashcardError::InvalidState {
            action: "Score",
            state: QuizPhase::NotStarted.describe(),
        })?;

        let correct = state
            .questions
            .iter()
            .zip(&state.answers)
            .filter(|(question, answer)| {
                answer
                    .as_deref()
                    .is_some_and(|choice| question.is_correct(choice))
            })
            .count();
        let total = state.questions.len();
        let percentage = 100.0 * correct as f64 / total as f64;

        Ok(QuizScore {
            correct,
            total,
            percentage,
            band: ScoreBand::from_percentage(percentage),
        })
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.current_index)
    }

    pub fn total(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.questions.len())
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.state
            .as_ref()
            .and_then(|s| s.questions.get(s.current_index))
    }

    /// Feedback for the current question once it has been answered.
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        let state = self.state.as_ref()?;
        let question = state.questions.get(state.current_index)?;
        let chosen = state.answers.get(state.current_index)?.as_ref()?;

        Some(AnswerFeedback {
            correct: question.is_correct(chosen),
            chosen: chosen.clone(),
            correct_answer: question.correct_answer.clone(),
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        self.state
            .as_ref()
            .map(|s| s.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.state
            .as_ref()
            .and_then(|s| s.answers.get(index))
            .and_then(|a| a.as_deref())
    }
}
