//! Error types for document loading and session actions.

use std::path::PathBuf;
use thiserror::Error;

/// Minimum number of parsed cards needed before a quiz can start.
pub const MIN_CARDS_FOR_QUIZ: usize = 4;

/// Errors raised while turning a source document into cards.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid Word document: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("malformed document XML in {}: {message}", .path.display())]
    Xml { path: PathBuf, message: String },

    #[error("unsupported document type: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Errors raised by navigator and quiz actions. None of them are fatal;
/// the session reports them and leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlashcardError {
    #[error("No flashcards found. Check that the document uses the expected question and answer markers.")]
    EmptyStore,

    #[error("Need at least {required} flashcards for a quiz (found {found}).")]
    InsufficientData { found: usize, required: usize },

    #[error("'{action}' is not available {state}.")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
