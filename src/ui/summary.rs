use super::layout::calculate_summary_chunks;
use super::{draw_help, draw_tabs};
use crate::quiz::ScoreBand;
use crate::session::Session;
use crate::utils::{format_percentage, truncate_string};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::KeepPracticing => Color::Yellow,
    }
}

pub fn draw_summary(f: &mut Frame, session: &Session) {
    let layout = calculate_summary_chunks(f.area());
    draw_tabs(f, layout.tabs_area, &session.deck_name, 1);

    let quiz = session.quiz();
    let Ok(score) = quiz.score() else {
        return;
    };
    let color = band_color(score.band);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quiz Completed!"),
        )
        .gauge_style(Style::default().fg(color))
        .ratio((score.percentage / 100.0).clamp(0.0, 1.0))
        .label(format!(
            "Score: {} ({}/{})",
            format_percentage(score.percentage),
            score.correct,
            score.total
        ));
    f.render_widget(gauge, layout.score_area);

    let band = Paragraph::new(score.band.message())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(band, layout.band_area);

    let width = layout.review_area.width.saturating_sub(8) as usize;
    let mut review = Text::default();
    for (i, question) in quiz.questions().iter().enumerate() {
        let answer = quiz.answer(i);
        let correct = answer.is_some_and(|a| question.is_correct(a));
        let (mark, mark_style) = if correct {
            ("[✓]", Style::default().fg(Color::Green))
        } else {
            ("[✗]", Style::default().fg(Color::Red))
        };

        review.push_line(Line::from(vec![
            Span::styled(mark, mark_style.add_modifier(Modifier::BOLD)),
            Span::from(format!(
                " {}. {}",
                i + 1,
                truncate_string(&question.question, width)
            )),
        ]));
        review.push_line(Line::from(format!(
            "    Your answer: {}",
            truncate_string(answer.unwrap_or("(skipped)"), width.saturating_sub(13))
        )));
        if !correct {
            review.push_line(Line::from(Span::styled(
                format!(
                    "    Correct answer: {}",
                    truncate_string(&question.correct_answer, width.saturating_sub(16))
                ),
                Style::default().fg(Color::Green),
            )));
        }
        review.push_line(Line::from(""));
    }

    let review_widget = Paragraph::new(review)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Review"));
    f.render_widget(review_widget, layout.review_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("r/Enter", "Retry Quiz"),
            ("Tab", "Flashcards"),
            ("Esc", "Menu"),
        ],
    );
}
