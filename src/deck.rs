use crate::models::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly shuffled permutation of `0..count`.
pub fn shuffled_deck<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<usize> {
    let mut deck: Vec<usize> = (0..count).collect();
    deck.shuffle(rng);
    deck
}

/// Parsed cards plus the presentation order fixed at load time.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    deck: Vec<usize>,
}

impl CardStore {
    pub fn load<R: Rng + ?Sized>(cards: Vec<Card>, rng: &mut R) -> Self {
        let deck = shuffled_deck(cards.len(), rng);
        Self { cards, deck }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn deck(&self) -> &[usize] {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `position` in presentation order.
    pub fn card_at(&self, position: usize) -> Option<&Card> {
        self.deck
            .get(position)
            .and_then(|&index| self.cards.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("Q{}", i), format!("A{}", i)))
            .collect()
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 2, 5, 37, 100] {
            let mut deck = shuffled_deck(n, &mut rng);
            assert_eq!(deck.len(), n);
            deck.sort_unstable();
            assert_eq!(deck, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_shuffled_deck_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(shuffled_deck(0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = shuffled_deck(20, &mut StdRng::seed_from_u64(99));
        let b = shuffled_deck(20, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_card_at_follows_deck_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let store = CardStore::load(sample_cards(6), &mut rng);

        for (position, &index) in store.deck().iter().enumerate() {
            assert_eq!(store.card_at(position), Some(&store.cards()[index]));
        }
        assert_eq!(store.card_at(6), None);
    }

    #[test]
    fn test_empty_store() {
        let store = CardStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.card_at(0), None);
    }
}
