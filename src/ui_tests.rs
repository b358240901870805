#[cfg(test)]
mod ui_render_tests {
    use crate::config::DEFAULT_QUIZ_LENGTH;
    use crate::session::{rng_from_seed, Session};
    use crate::ui::{draw_flashcards, draw_menu, draw_quiz};
    use crate::{Action, Card};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::path::{Path, PathBuf};

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render<F>(draw: F) -> String
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(draw).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn create_test_session(n: usize) -> Session {
        let cards = (0..n)
            .map(|i| Card::new(format!("Question {}", i), format!("Answer {}", i)))
            .collect();
        Session::from_cards("Law Preparation", cards, DEFAULT_QUIZ_LENGTH, rng_from_seed(Some(5)))
    }

    #[test]
    fn test_flashcard_hides_answer_until_revealed() {
        let mut session = create_test_session(3);
        let card = session.current_card().unwrap().clone();

        let screen = render(|f| draw_flashcards(f, &session));
        assert!(screen.contains(&card.question));
        assert!(!screen.contains(&card.answer));
        assert!(screen.contains("Card 1 of 3"));

        session.dispatch(Action::Reveal).unwrap();
        let screen = render(|f| draw_flashcards(f, &session));
        assert!(screen.contains(&card.answer));
    }

    #[test]
    fn test_flashcard_empty_state_shows_markers() {
        let session = create_test_session(0);
        let screen = render(|f| draw_flashcards(f, &session));

        assert!(screen.contains("No flashcards found"));
        assert!(screen.contains("Q: What is law?"));
        assert!(screen.contains("A (English): Law is a system of rules..."));
    }

    #[test]
    fn test_load_error_is_rendered() {
        let session = Session::open(
            Path::new("/missing/Law Preparation.docx"),
            &Default::default(),
        );
        let screen = render(|f| draw_flashcards(f, &session));
        assert!(screen.contains("Error loading document"));
    }

    #[test]
    fn test_quiz_setup_shows_insufficient_notice() {
        let mut session = create_test_session(3);
        let _ = session.dispatch(Action::StartQuiz(3));

        let screen = render(|f| draw_quiz(f, &session));
        assert!(screen.contains("Need at least 4 flashcards for a quiz"));
    }

    #[test]
    fn test_quiz_question_and_feedback() {
        let mut session = create_test_session(6);
        session.dispatch(Action::StartQuiz(3)).unwrap();
        let question = session.quiz().current_question().unwrap().clone();

        let screen = render(|f| draw_quiz(f, &session));
        assert!(screen.contains("Question 1 of 3"));
        assert!(screen.contains(&question.question));
        for option in &question.options {
            assert!(screen.contains(option.as_str()));
        }

        let wrong = question
            .options
            .iter()
            .find(|o| **o != question.correct_answer)
            .unwrap()
            .clone();
        session.dispatch(Action::Submit(wrong)).unwrap();

        let screen = render(|f| draw_quiz(f, &session));
        assert!(screen.contains("Incorrect"));
        assert!(screen.contains(&format!("Correct answer: {}", question.correct_answer)));
    }

    #[test]
    fn test_summary_shows_score_and_band() {
        let mut session = create_test_session(6);
        session.dispatch(Action::StartQuiz(5)).unwrap();
        for i in 0..5 {
            let question = session.quiz().current_question().unwrap().clone();
            let choice = if i < 3 {
                question.correct_answer.clone()
            } else {
                question
                    .options
                    .iter()
                    .find(|o| **o != question.correct_answer)
                    .unwrap()
                    .clone()
            };
            session.dispatch(Action::Submit(choice)).unwrap();
            session.dispatch(Action::Advance).unwrap();
        }

        let screen = render(|f| draw_quiz(f, &session));
        assert!(screen.contains("Score: 60.0% (3/5)"));
        assert!(screen.contains("Good job!"));
        assert!(screen.contains("Review"));
    }

    #[test]
    fn test_menu_lists_documents() {
        let documents = vec![
            PathBuf::from("flashcards/Contract Law.docx"),
            PathBuf::from("flashcards/Torts.txt"),
        ];
        let screen = render(|f| draw_menu(f, &documents, 1, Path::new("flashcards"), None));
        assert!(screen.contains("Contract Law"));
        assert!(screen.contains("Torts"));
    }

    #[test]
    fn test_menu_empty_directory_hint() {
        let screen =
            render(|f| draw_menu(f, &[], 0, Path::new("flashcards"), Some("Could not open")));
        assert!(screen.contains("No documents found in flashcards"));
        assert!(screen.contains("Could not open"));
    }
}
