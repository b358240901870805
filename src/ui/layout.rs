use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct FlashcardLayout {
    pub tabs_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub tabs_area: Rect,
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub tabs_area: Rect,
    pub score_area: Rect,
    pub band_area: Rect,
    pub review_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_flashcard_chunks(area: Rect) -> FlashcardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    FlashcardLayout {
        tabs_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        status_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        tabs_area: chunks[0],
        header_area: chunks[1],
        question_area: chunks[2],
        options_area: chunks[3],
        feedback_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        tabs_area: chunks[0],
        score_area: chunks[1],
        band_area: chunks[2],
        review_area: chunks[3],
        help_area: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_layout() {
        let layout = calculate_flashcard_chunks(Rect::new(0, 0, 100, 40));

        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.status_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.question_area.height >= 5);
        assert!(layout.answer_area.height > 0);
    }

    #[test]
    fn test_quiz_layout() {
        let layout = calculate_quiz_chunks(Rect::new(0, 0, 100, 40));

        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.options_area.height, 8);
        assert_eq!(layout.feedback_area.height, 5);
        assert_eq!(layout.help_area.height, 3);
        // Margin 1 leaves 38 rows, fixed rows take 22.
        assert_eq!(layout.question_area.height, 16);
    }

    #[test]
    fn test_summary_layout() {
        let layout = calculate_summary_chunks(Rect::new(0, 0, 100, 40));

        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.score_area.height, 3);
        assert_eq!(layout.band_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.review_area.height, 38 - 12);
        assert_eq!(layout.review_area.width, 98);
    }
}
