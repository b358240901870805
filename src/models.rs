/// A single question/answer record parsed from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Flashcards,
    Quiz,
}

/// Discrete user intents the renderer hands to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Next,
    Prev,
    First,
    StartQuiz(usize),
    Submit(String),
    Advance,
    Retry,
}
