use crate::config::{AppConfig, DocumentFormat};
use crate::deck::CardStore;
use crate::document::{deck_name, load_cards};
use crate::error::{FlashcardError, Result};
use crate::logger;
use crate::models::{Action, AppState, Card};
use crate::navigator::Navigator;
use crate::quiz::{QuizEngine, QuizPhase, quiz_length_bounds};
use crossterm::event::{KeyCode, KeyEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

/// All state for one user working through one document.
#[derive(Debug)]
pub struct Session {
    pub deck_name: String,
    format: DocumentFormat,
    store: CardStore,
    navigator: Navigator,
    quiz: QuizEngine,
    quiz_length: usize,
    selected_option: usize,
    notice: Option<String>,
    load_error: Option<String>,
    rng: StdRng,
}

pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Session {
    /// Loads `path` into a new session. A document that cannot be read
    /// produces an empty session carrying the load error.
    pub fn open(path: &Path, config: &AppConfig) -> Self {
        let name = deck_name(path);
        let rng = rng_from_seed(config.seed);

        match load_cards(path, config.format.as_ref()) {
            Ok(loaded) => {
                logger::log(&format!(
                    "Loaded {} cards from {} using '{}' / '{}'",
                    loaded.cards.len(),
                    path.display(),
                    loaded.format.question_marker,
                    loaded.format.answer_marker
                ));
                let mut session = Self::from_cards(name, loaded.cards, config.quiz_length, rng);
                session.format = loaded.format;
                session
            }
            Err(e) => {
                logger::log(&format!("Error loading document: {}", e));
                let mut session = Self::from_cards(name, Vec::new(), config.quiz_length, rng);
                if let Some(format) = &config.format {
                    session.format = format.clone();
                }
                session.load_error = Some(format!("Error loading document: {}", e));
                session
            }
        }
    }

    pub fn from_cards(
        deck_name: impl Into<String>,
        cards: Vec<Card>,
        quiz_length: usize,
        mut rng: StdRng,
    ) -> Self {
        let store = CardStore::load(cards, &mut rng);
        let navigator = Navigator::new(store.len());
        let (min, max) = quiz_length_bounds(store.len());

        Self {
            deck_name: deck_name.into(),
            format: DocumentFormat::default(),
            store,
            navigator,
            quiz: QuizEngine::new(),
            quiz_length: quiz_length.clamp(min, max),
            selected_option: 0,
            notice: None,
            load_error: None,
            rng,
        }
    }

    /// Markers the document was parsed with.
    pub fn format(&self) -> &DocumentFormat {
        &self.format
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.navigator.current(&self.store)
    }

    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Applies one action. A rejected action leaves state as it was and
    /// becomes the session notice.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        self.notice = None;
        let result = self.apply(action.clone());
        if let Err(e) = &result {
            logger::log(&format!("Rejected {:?}: {}", action, e));
            self.notice = Some(e.to_string());
        }
        result
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        if self.store.is_empty() {
            return Err(FlashcardError::EmptyStore);
        }

        match action {
            Action::Reveal => self.navigator.reveal(),
            Action::Next => self.navigator.next(),
            Action::Prev => self.navigator.prev(),
            Action::First => self.navigator.first(),
            Action::StartQuiz(n) => {
                self.quiz.start(self.store.cards(), n, &mut self.rng)?;
                self.selected_option = 0;
                logger::log(&format!(
                    "Started quiz with {} questions from {}",
                    self.quiz.total(),
                    self.deck_name
                ));
                Ok(())
            }
            Action::Submit(choice) => self.quiz.submit_answer(&choice).map(|_| ()),
            Action::Advance => {
                self.quiz.advance()?;
                self.selected_option = 0;
                if self.quiz.phase() == QuizPhase::Completed
                    && let Ok(score) = self.quiz.score()
                {
                    logger::log(&format!(
                        "Quiz finished: {}/{} ({:.1}%)",
                        score.correct, score.total, score.percentage
                    ));
                }
                Ok(())
            }
            Action::Retry => {
                self.quiz.retry()?;
                self.selected_option = 0;
                Ok(())
            }
        }
    }

    pub fn adjust_quiz_length(&mut self, delta: isize) {
        let (min, max) = quiz_length_bounds(self.store.len());
        self.quiz_length = self.quiz_length.saturating_add_signed(delta).clamp(min, max);
    }

    pub fn move_selection(&mut self, delta: isize) {
        let count = self
            .quiz
            .current_question()
            .map_or(0, |q| q.options.len());
        if count == 0 {
            return;
        }
        self.selected_option = self
            .selected_option
            .saturating_add_signed(delta)
            .min(count - 1);
    }

    pub fn select_option(&mut self, index: usize) {
        if let Some(question) = self.quiz.current_question()
            && index < question.options.len()
        {
            self.selected_option = index;
        }
    }

    pub fn selected_choice(&self) -> Option<String> {
        self.quiz
            .current_question()
            .and_then(|q| q.options.get(self.selected_option))
            .cloned()
    }
}

pub fn handle_flashcard_input(
    session: &mut Session,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
            Ok(())
        }
        KeyCode::Tab => {
            *app_state = AppState::Quiz;
            Ok(())
        }
        KeyCode::Enter | KeyCode::Char(' ') => session.dispatch(Action::Reveal),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => session.dispatch(Action::Next),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => session.dispatch(Action::Prev),
        KeyCode::Home | KeyCode::Char('f') => session.dispatch(Action::First),
        _ => Ok(()),
    }
}

pub fn handle_quiz_input(
    session: &mut Session,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
            return Ok(());
        }
        KeyCode::Tab => {
            *app_state = AppState::Flashcards;
            return Ok(());
        }
        _ => {}
    }

    match session.quiz().phase() {
        QuizPhase::NotStarted => match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                session.adjust_quiz_length(-1);
                Ok(())
            }
            KeyCode::Right | KeyCode::Char('l') => {
                session.adjust_quiz_length(1);
                Ok(())
            }
            KeyCode::Enter => {
                let n = session.quiz_length();
                session.dispatch(Action::StartQuiz(n))
            }
            _ => Ok(()),
        },
        QuizPhase::InProgress => {
            let answered = session.quiz().feedback().is_some();
            match key.code {
                KeyCode::Up | KeyCode::Char('k') if !answered => {
                    session.move_selection(-1);
                    Ok(())
                }
                KeyCode::Down | KeyCode::Char('j') if !answered => {
                    session.move_selection(1);
                    Ok(())
                }
                KeyCode::Char(c @ '1'..='9') if !answered => {
                    session.select_option(c as usize - '1' as usize);
                    Ok(())
                }
                KeyCode::Enter if answered => session.dispatch(Action::Advance),
                KeyCode::Enter => match session.selected_choice() {
                    Some(choice) => session.dispatch(Action::Submit(choice)),
                    None => Ok(()),
                },
                _ => Ok(()),
            }
        }
        QuizPhase::Completed => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => session.dispatch(Action::Retry),
            _ => Ok(()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_QUIZ_LENGTH;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("Question {}", i), format!("Answer {}", i)))
            .collect()
    }

    fn create_test_session(n: usize) -> Session {
        Session::from_cards(
            "Test Deck",
            sample_cards(n),
            DEFAULT_QUIZ_LENGTH,
            rng_from_seed(Some(42)),
        )
    }

    #[test]
    fn test_flashcard_actions_through_dispatch() {
        let mut session = create_test_session(3);

        session.dispatch(Action::Reveal).unwrap();
        assert!(session.navigator().is_revealed());

        session.dispatch(Action::Prev).unwrap();
        assert_eq!(session.navigator().position(), Some(2));
        assert!(!session.navigator().is_revealed());

        session.dispatch(Action::Next).unwrap();
        session.dispatch(Action::Next).unwrap();
        assert_eq!(session.navigator().position(), Some(1));

        session.dispatch(Action::First).unwrap();
        assert_eq!(session.navigator().position(), Some(0));
        assert_eq!(
            session.current_card(),
            Some(&session.store().cards()[session.store().deck()[0]])
        );
    }

    #[test]
    fn test_empty_session_turns_every_action_into_notice() {
        let mut session = create_test_session(0);

        for action in [
            Action::Reveal,
            Action::Next,
            Action::Prev,
            Action::First,
            Action::StartQuiz(5),
            Action::Submit("x".to_string()),
            Action::Advance,
            Action::Retry,
        ] {
            assert_eq!(session.dispatch(action), Err(FlashcardError::EmptyStore));
            assert!(session.notice().unwrap().starts_with("No flashcards found"));
        }
        assert!(session.current_card().is_none());
        assert_eq!(session.quiz().phase(), QuizPhase::NotStarted);
    }

    #[test]
    fn test_insufficient_cards_notice() {
        let mut session = create_test_session(3);
        let result = session.dispatch(Action::StartQuiz(5));

        assert!(matches!(result, Err(FlashcardError::InsufficientData { found: 3, .. })));
        assert_eq!(session.quiz().phase(), QuizPhase::NotStarted);
        assert_eq!(
            session.notice(),
            Some("Need at least 4 flashcards for a quiz (found 3).")
        );
    }

    #[test]
    fn test_successful_action_clears_notice() {
        let mut session = create_test_session(5);
        let _ = session.dispatch(Action::Advance);
        assert!(session.notice().is_some());

        session.dispatch(Action::Next).unwrap();
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_invalid_state_is_a_noop() {
        let mut session = create_test_session(6);
        let before = session.navigator().clone();

        assert!(matches!(
            session.dispatch(Action::Submit("Answer 1".to_string())),
            Err(FlashcardError::InvalidState { .. })
        ));
        assert_eq!(session.quiz().phase(), QuizPhase::NotStarted);
        assert_eq!(session.navigator(), &before);
    }

    #[test]
    fn test_quiz_length_defaults_and_clamps() {
        let mut session = create_test_session(20);
        assert_eq!(session.quiz_length(), 5);

        for _ in 0..20 {
            session.adjust_quiz_length(1);
        }
        assert_eq!(session.quiz_length(), 10);

        for _ in 0..20 {
            session.adjust_quiz_length(-1);
        }
        assert_eq!(session.quiz_length(), 3);

        let small = create_test_session(4);
        assert_eq!(small.quiz_length(), 4);
    }

    #[test]
    fn test_full_quiz_through_keys() {
        let mut session = create_test_session(8);
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, key(KeyCode::Left), &mut app_state).unwrap();
        assert_eq!(session.quiz_length(), 4);
        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut app_state).unwrap();
        assert_eq!(session.quiz().phase(), QuizPhase::InProgress);
        assert_eq!(session.quiz().total(), 4);

        for _ in 0..4 {
            let correct = session.quiz().current_question().unwrap().correct_answer.clone();
            let index = session
                .quiz()
                .current_question()
                .unwrap()
                .options
                .iter()
                .position(|o| *o == correct)
                .unwrap();
            for _ in 0..index {
                handle_quiz_input(&mut session, key(KeyCode::Down), &mut app_state).unwrap();
            }
            assert_eq!(session.selected_choice(), Some(correct));

            handle_quiz_input(&mut session, key(KeyCode::Enter), &mut app_state).unwrap();
            assert!(session.quiz().feedback().unwrap().correct);

            // Selection is frozen once feedback is showing.
            handle_quiz_input(&mut session, key(KeyCode::Down), &mut app_state).unwrap();
            assert_eq!(session.selected_option(), index);

            handle_quiz_input(&mut session, key(KeyCode::Enter), &mut app_state).unwrap();
            assert_eq!(session.selected_option(), 0);
        }

        assert_eq!(session.quiz().phase(), QuizPhase::Completed);
        assert_eq!(session.quiz().score().unwrap().percentage, 100.0);

        handle_quiz_input(&mut session, key(KeyCode::Char('r')), &mut app_state).unwrap();
        assert_eq!(session.quiz().phase(), QuizPhase::NotStarted);
    }

    #[test]
    fn test_number_keys_pick_options() {
        let mut session = create_test_session(6);
        let mut app_state = AppState::Quiz;
        session.dispatch(Action::StartQuiz(3)).unwrap();

        handle_quiz_input(&mut session, key(KeyCode::Char('3')), &mut app_state).unwrap();
        assert_eq!(session.selected_option(), 2);

        handle_quiz_input(&mut session, key(KeyCode::Char('9')), &mut app_state).unwrap();
        assert_eq!(session.selected_option(), 2);

        session.move_selection(10);
        assert_eq!(session.selected_option(), 3);
        session.move_selection(-10);
        assert_eq!(session.selected_option(), 0);
    }

    #[test]
    fn test_flashcard_keys() {
        let mut session = create_test_session(4);
        let mut app_state = AppState::Flashcards;

        handle_flashcard_input(&mut session, key(KeyCode::Char(' ')), &mut app_state).unwrap();
        assert!(session.navigator().is_revealed());

        handle_flashcard_input(&mut session, key(KeyCode::Left), &mut app_state).unwrap();
        assert_eq!(session.navigator().position(), Some(3));

        handle_flashcard_input(&mut session, key(KeyCode::Home), &mut app_state).unwrap();
        assert_eq!(session.navigator().position(), Some(0));

        handle_flashcard_input(&mut session, key(KeyCode::Tab), &mut app_state).unwrap();
        assert_eq!(app_state, AppState::Quiz);

        handle_quiz_input(&mut session, key(KeyCode::Tab), &mut app_state).unwrap();
        assert_eq!(app_state, AppState::Flashcards);

        handle_flashcard_input(&mut session, key(KeyCode::Esc), &mut app_state).unwrap();
        assert_eq!(app_state, AppState::Menu);
    }

    #[test]
    fn test_deck_order_survives_navigation_and_quiz() {
        let mut session = create_test_session(6);
        let deck = session.store().deck().to_vec();

        for action in [Action::Next, Action::Next, Action::Prev, Action::Reveal, Action::First] {
            session.dispatch(action).unwrap();
            assert_eq!(session.store().deck(), deck.as_slice());
        }

        session.dispatch(Action::StartQuiz(4)).unwrap();
        session.dispatch(Action::Retry).unwrap();
        assert_eq!(session.store().deck(), deck.as_slice());
    }

    #[test]
    fn test_open_missing_document_keeps_load_error() {
        let config = AppConfig {
            seed: Some(1),
            ..AppConfig::default()
        };
        let session = Session::open(Path::new("/no/such/Law Preparation.docx"), &config);

        assert_eq!(session.deck_name, "Law Preparation");
        assert!(session.store().is_empty());
        assert!(session.load_error().unwrap().starts_with("Error loading document"));
    }

    #[test]
    fn test_open_reads_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("law.txt");
        std::fs::write(
            &path,
            "Q: One?\nA (English): 1\nQ: Two?\nA (English): 2\nQ: Three?\nA (English): 3\nQ: Four?\nA (English): 4\n",
        )
        .unwrap();

        let session = Session::open(&path, &AppConfig::default());
        assert_eq!(session.store().len(), 4);
        assert_eq!(session.format(), &DocumentFormat::bilingual());
        assert!(session.load_error().is_none());
        assert_eq!(session.quiz_length(), 4);
    }
}
