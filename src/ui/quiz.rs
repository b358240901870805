use super::layout::calculate_quiz_chunks;
use super::summary::draw_summary;
use super::{draw_help, draw_tabs, notice_line};
use crate::quiz::{QuizPhase, quiz_length_bounds};
use crate::session::Session;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &Session) {
    match session.quiz().phase() {
        QuizPhase::NotStarted => draw_quiz_setup(f, session),
        QuizPhase::InProgress => draw_quiz_question(f, session),
        QuizPhase::Completed => draw_summary(f, session),
    }
}

fn draw_quiz_setup(f: &mut Frame, session: &Session) {
    let layout = calculate_quiz_chunks(f.area());
    draw_tabs(f, layout.tabs_area, &session.deck_name, 1);

    let body = layout.header_area.union(layout.feedback_area);
    let mut text = Text::default();

    if session.store().is_empty() {
        text.push_line(notice_line(
            "No flashcards loaded. Check the document on the Flashcards tab first.",
        ));
    } else {
        let (min, max) = quiz_length_bounds(session.store().len());
        text.push_line(Line::from(Span::styled(
            "Test your knowledge!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(format!(
            "{} flashcards available",
            session.store().len()
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(vec![
            Span::from("Number of questions:  ◀ "),
            Span::styled(
                session.quiz_length().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(format!(" ▶   ({}-{})", min, max)),
        ]));
        if let Some(notice) = session.notice() {
            text.push_line(Line::from(""));
            text.push_line(notice_line(notice));
        }
    }

    let setup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Quiz"));
    f.render_widget(setup, body);

    draw_help(
        f,
        layout.help_area,
        &[
            ("←/→", "Questions"),
            ("Enter", "Start Quiz"),
            ("Tab", "Flashcards"),
            ("Esc", "Menu"),
        ],
    );
}

fn draw_quiz_question(f: &mut Frame, session: &Session) {
    let layout = calculate_quiz_chunks(f.area());
    draw_tabs(f, layout.tabs_area, &session.deck_name, 1);

    let quiz = session.quiz();
    let (Some(question), Some(index)) = (quiz.current_question(), quiz.current_index()) else {
        return;
    };
    let feedback = quiz.feedback();

    let header = Paragraph::new(format!("Question {} of {}", index + 1, quiz.total()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_text = Paragraph::new(Span::styled(
        question.question.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_text, layout.question_area);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let selected = i == session.selected_option();
            let marker = if selected { "▸" } else { " " };
            let style = match &feedback {
                Some(_) if question.is_correct(option) => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Some(fb) if *option == fb.chosen => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default().fg(Color::DarkGray),
                None if selected => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                None => Style::default(),
            };
            ListItem::new(format!("{} {}. {}", marker, i + 1, option)).style(style)
        })
        .collect();
    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Choose your answer"),
    );
    f.render_widget(options, layout.options_area);

    let mut feedback_text = Text::default();
    match &feedback {
        Some(fb) if fb.correct => {
            feedback_text.push_line(Line::from(Span::styled(
                "Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Some(fb) => {
            feedback_text.push_line(Line::from(Span::styled(
                "Incorrect",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            feedback_text.push_line(Line::from(vec![
                Span::styled(
                    "Correct answer: ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::from(fb.correct_answer.clone()),
            ]));
        }
        None => {
            if let Some(notice) = session.notice() {
                feedback_text.push_line(notice_line(notice));
            }
        }
    }
    let feedback_widget = Paragraph::new(feedback_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Feedback"));
    f.render_widget(feedback_widget, layout.feedback_area);

    let last = index + 1 == quiz.total();
    let help: &[(&str, &str)] = match (&feedback, last) {
        (Some(_), true) => &[("Enter", "Finish"), ("Tab", "Flashcards"), ("Esc", "Menu")],
        (Some(_), false) => &[("Enter", "Next"), ("Tab", "Flashcards"), ("Esc", "Menu")],
        (None, _) => &[
            ("↑/↓", "Choose"),
            ("1-4", "Pick"),
            ("Enter", "Submit"),
            ("Tab", "Flashcards"),
            ("Esc", "Menu"),
        ],
    };
    draw_help(f, layout.help_area, help);
}
