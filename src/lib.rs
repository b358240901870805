pub mod config;
pub mod deck;
pub mod document;
pub mod error;
pub mod logger;
pub mod models;
pub mod navigator;
pub mod parser;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod utils;

mod ui_tests;

// Re-exports for convenience
pub use config::{AppConfig, DocumentFormat};
pub use deck::{shuffled_deck, CardStore};
pub use document::{document_files, load_cards, read_paragraphs, LoadedDocument};
pub use error::{FlashcardError, LoadError};
pub use models::{Action, AppState, Card};
pub use navigator::Navigator;
pub use parser::{parse_lines, parse_text};
pub use quiz::{AnswerFeedback, QuizEngine, QuizPhase, QuizQuestion, QuizScore, ScoreBand};
pub use session::{handle_flashcard_input, handle_quiz_input, Session};
pub use ui::{draw_flashcards, draw_menu, draw_quiz, draw_summary};
