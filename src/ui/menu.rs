use super::{draw_help, notice_line};
use crate::document::deck_name;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::path::{Path, PathBuf};

pub fn draw_menu(
    f: &mut Frame,
    documents: &[PathBuf],
    selected_index: usize,
    documents_dir: &Path,
    notice: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Document Flashcards & Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = if documents.is_empty() {
        vec![
            ListItem::new(format!("No documents found in {}", documents_dir.display())).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            ListItem::new("Add .docx, .txt or .md files with Q: / A (English): lines").style(
                Style::default().fg(Color::DarkGray),
            ),
        ]
    } else {
        documents
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(deck_name(path)).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select a Document"),
    );
    f.render_widget(list, chunks[1]);

    let status = Paragraph::new(notice.map(notice_line).unwrap_or_else(|| Line::from("")))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    draw_help(
        f,
        chunks[3],
        &[("↑/↓", "Navigate"), ("Enter", "Open"), ("r", "Rescan"), ("q/Esc", "Quit")],
    );
}
