use crate::deck::CardStore;
use crate::error::{FlashcardError, Result};
use crate::models::Card;

/// Position and reveal state over a deck of fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    len: usize,
    position: usize,
    revealed: bool,
}

impl Navigator {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            position: 0,
            revealed: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `None` when there are no cards to show.
    pub fn position(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.position)
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// One-based position and deck length, for "Card i of n".
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.position().map(|p| (p + 1, self.len))
    }

    pub fn current<'a>(&self, store: &'a CardStore) -> Option<&'a Card> {
        self.position().and_then(|p| store.card_at(p))
    }

    fn ensure_cards(&self) -> Result<()> {
        if self.is_empty() {
            Err(FlashcardError::EmptyStore)
        } else {
            Ok(())
        }
    }

    fn move_to(&mut self, position: usize) {
        self.position = position;
        self.revealed = false;
    }

    pub fn reveal(&mut self) -> Result<()> {
        self.ensure_cards()?;
        self.revealed = true;
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        self.ensure_cards()?;
        self.move_to((self.position + 1) % self.len);
        Ok(())
    }

    pub fn prev(&mut self) -> Result<()> {
        self.ensure_cards()?;
        self.move_to((self.position + self.len - 1) % self.len);
        Ok(())
    }

    pub fn first(&mut self) -> Result<()> {
        self.ensure_cards()?;
        self.move_to(0);
        Ok(())
    }
}
