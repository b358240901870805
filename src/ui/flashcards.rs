use super::layout::calculate_flashcard_chunks;
use super::{draw_help, draw_tabs, notice_line};
use crate::session::Session;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn empty_state_text(session: &Session) -> Text<'static> {
    let format = session.format();
    let mut text = Text::default();

    if let Some(error) = session.load_error() {
        text.push_line(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
    }

    text.push_line(notice_line(&format!(
        "No flashcards found. Ensure your document uses {} and {} lines.",
        format.question_marker, format.answer_marker
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from("Example:"));
    text.push_line(Line::from(Span::styled(
        format!("{} What is law?", format.question_marker),
        Style::default().fg(Color::Green),
    )));
    text.push_line(Line::from(Span::styled(
        format!("{} Law is a system of rules...", format.answer_marker),
        Style::default().fg(Color::Green),
    )));
    text
}

pub fn draw_flashcards(f: &mut Frame, session: &Session) {
    let layout = calculate_flashcard_chunks(f.area());
    draw_tabs(f, layout.tabs_area, &session.deck_name, 0);

    let Some(card) = session.current_card() else {
        let empty = Paragraph::new(empty_state_text(session))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Flashcards"));
        f.render_widget(empty, layout.question_area.union(layout.answer_area));
        draw_help(f, layout.help_area, &[("Esc", "Menu"), ("Ctrl+C", "Exit App")]);
        return;
    };

    let question = Paragraph::new(Text::from(vec![Line::from(vec![
        Span::styled(
            "Q: ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            card.question.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])]))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let revealed = session.navigator().is_revealed();
    let answer_content = if revealed {
        let mut text = Text::default();
        text.push_line(Line::from(Span::styled(
            "A:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(card.answer.clone()));
        text
    } else {
        Text::from(Span::styled(
            "[Press Space to show the answer]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    };
    let answer_border = if revealed {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let answer = Paragraph::new(answer_content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(answer_border)
                .title("Answer"),
        );
    f.render_widget(answer, layout.answer_area);

    let status_line = match (session.notice(), session.navigator().progress()) {
        (Some(notice), _) => notice_line(notice),
        (None, Some((position, total))) => Line::from(format!("Card {} of {}", position, total)),
        (None, None) => Line::from(""),
    };
    let status = Paragraph::new(status_line)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, layout.status_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("Space", "Show Answer"),
            ("←/→", "Prev/Next"),
            ("Home", "First"),
            ("Tab", "Quiz"),
            ("Esc", "Menu"),
        ],
    );
}
