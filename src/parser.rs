//! Extracts question/answer cards from document paragraphs.
//!
//! ```text
//! Q: What is consideration?
//! A (English): Something of value exchanged between the parties.
//!
//! Q: What is a tort?
//! A (English): A civil wrong.
//! ```
//!
//! Lines that match neither marker are ignored. A question that never gets
//! an answer is dropped when the next question starts.

use crate::config::DocumentFormat;
use crate::models::Card;

enum LineType<'a> {
    Question(&'a str),
    Answer(&'a str),
    Other,
}

fn classify<'a>(line: &'a str, format: &DocumentFormat) -> LineType<'a> {
    if let Some(rest) = line.strip_prefix(format.question_marker.as_str()) {
        LineType::Question(rest.trim())
    } else if let Some(rest) = line.strip_prefix(format.answer_marker.as_str()) {
        LineType::Answer(rest.trim())
    } else {
        LineType::Other
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[derive(Default)]
struct PendingCard {
    question: Option<String>,
    answer: Option<String>,
}

impl PendingCard {
    fn take_complete(&mut self) -> Option<Card> {
        match (&self.question, &self.answer) {
            (Some(_), Some(_)) => {
                let question = self.question.take()?;
                let answer = self.answer.take()?;
                Some(Card { question, answer })
            }
            _ => None,
        }
    }
}

/// Parses ordered paragraphs into cards, preserving source order.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], format: &DocumentFormat) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut pending = PendingCard::default();

    for line in lines {
        let text = line.as_ref().trim();
        if text.is_empty() {
            continue;
        }

        match classify(text, format) {
            LineType::Question(rest) => {
                if let Some(card) = pending.take_complete() {
                    cards.push(card);
                }
                pending.question = non_empty(rest);
                pending.answer = None;
            }
            LineType::Answer(rest) if pending.question.is_some() => {
                pending.answer = non_empty(rest);
            }
            LineType::Answer(_) | LineType::Other => {}
        }
    }

    if let Some(card) = pending.take_complete() {
        cards.push(card);
    }

    cards
}

/// Convenience wrapper for newline separated text.
pub fn parse_text(content: &str, format: &DocumentFormat) -> Vec<Card> {
    let lines: Vec<&str> = content.lines().collect();
    parse_lines(&lines, format)
}
