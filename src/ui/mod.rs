pub mod layout;
mod flashcards;
mod menu;
mod quiz;
mod summary;

pub use flashcards::draw_flashcards;
pub use layout::{calculate_flashcard_chunks, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::draw_quiz;
pub use summary::draw_summary;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

const TAB_TITLES: [&str; 2] = ["Flashcards", "Quiz"];

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// One line of `key description` pairs for the help bar.
fn help_line(entries: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, description) in entries {
        spans.push(Span::styled(key.to_string(), key_style()));
        spans.push(Span::from(format!(" {}  ", description)));
    }
    Line::from(spans)
}

fn draw_help(f: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let help = Paragraph::new(help_line(entries))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn draw_tabs(f: &mut Frame, area: Rect, deck_name: &str, selected: usize) {
    let tabs = Tabs::new(TAB_TITLES.to_vec())
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", deck_name)),
        );
    f.render_widget(tabs, area);
}

fn notice_line(notice: &str) -> Line<'static> {
    Line::from(Span::styled(
        notice.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}
