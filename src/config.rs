use crate::logger;
use std::path::PathBuf;

pub const DEFAULT_DOCUMENTS_DIR: &str = "flashcards";
pub const DEFAULT_QUIZ_LENGTH: usize = 5;
pub const MIN_QUIZ_LENGTH: usize = 3;
pub const MAX_QUIZ_LENGTH: usize = 10;

/// Literal prefixes that mark question and answer paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFormat {
    pub question_marker: String,
    pub answer_marker: String,
}

impl DocumentFormat {
    pub fn new(question_marker: impl Into<String>, answer_marker: impl Into<String>) -> Self {
        Self {
            question_marker: question_marker.into(),
            answer_marker: answer_marker.into(),
        }
    }

    /// `Q:` / `A (English):`
    pub fn bilingual() -> Self {
        Self::new("Q:", "A (English):")
    }

    /// `QUESTION:` / `ANSWER:`
    pub fn labelled() -> Self {
        Self::new("QUESTION:", "ANSWER:")
    }

    pub fn presets() -> [DocumentFormat; 2] {
        [Self::bilingual(), Self::labelled()]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bilingual" => Some(Self::bilingual()),
            "labelled" | "labeled" => Some(Self::labelled()),
            _ => None,
        }
    }

    /// Picks the preset whose markers match the most lines. Ties, including
    /// documents matching nothing, fall back to the default preset.
    pub fn detect<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut best = Self::default();
        let mut best_hits = best.marker_hits(lines);

        for preset in Self::presets() {
            let hits = preset.marker_hits(lines);
            if hits > best_hits {
                best_hits = hits;
                best = preset;
            }
        }

        best
    }

    fn marker_hits<S: AsRef<str>>(&self, lines: &[S]) -> usize {
        lines
            .iter()
            .map(|line| line.as_ref().trim())
            .filter(|line| {
                line.starts_with(&self.question_marker) || line.starts_with(&self.answer_marker)
            })
            .count()
    }
}

impl Default for DocumentFormat {
    fn default() -> Self {
        Self::bilingual()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub documents_dir: PathBuf,
    /// `None` means detect the format per document.
    pub format: Option<DocumentFormat>,
    pub quiz_length: usize,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            documents_dir: PathBuf::from(DEFAULT_DOCUMENTS_DIR),
            format: None,
            quiz_length: DEFAULT_QUIZ_LENGTH,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Values that fail
    /// to parse are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("FLASHCARDS_DIR").filter(|d| !d.trim().is_empty()) {
            config.documents_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup("FLASHCARDS_FORMAT") {
            match DocumentFormat::from_name(&name) {
                Some(format) => config.format = Some(format),
                None => logger::log(&format!("Ignoring unknown FLASHCARDS_FORMAT '{}'", name)),
            }
        }

        match (
            lookup("FLASHCARDS_QUESTION_MARKER"),
            lookup("FLASHCARDS_ANSWER_MARKER"),
        ) {
            (Some(q), Some(a)) if !q.trim().is_empty() && !a.trim().is_empty() => {
                config.format = Some(DocumentFormat::new(q.trim(), a.trim()));
            }
            (None, None) => {}
            _ => logger::log(
                "Custom markers need both FLASHCARDS_QUESTION_MARKER and FLASHCARDS_ANSWER_MARKER",
            ),
        }

        if let Some(raw) = lookup("FLASHCARDS_QUIZ_LENGTH") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.quiz_length = n,
                _ => logger::log(&format!("Ignoring invalid FLASHCARDS_QUIZ_LENGTH '{}'", raw)),
            }
        }

        if let Some(raw) = lookup("FLASHCARDS_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => logger::log(&format!("Ignoring invalid FLASHCARDS_SEED '{}'", raw)),
            }
        }

        config
    }
}
