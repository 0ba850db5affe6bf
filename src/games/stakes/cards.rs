use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::{seq::SliceRandom, Rng};

use super::error::GameError;

// Point cards and hand cards share this representation but never each other's
// values in play.
pub type Card = i32;

const POINT_CARDS: RangeInclusive<Card> = -5..=10;
const HAND_CARDS: RangeInclusive<Card> = 1..=15;

// Every point card in the deck, in ascending order
pub fn point_deck() -> Vec<Card> {
    POINT_CARDS.filter(|&c| c != 0).collect()
}

// A freshly shuffled hand of 1 through 15. Every call gives a new independent
// copy.
pub fn shuffled_hand<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut hand: Vec<Card> = HAND_CARDS.collect();
    hand.shuffle(rng);
    hand
}

// Point cards still to be revealed, front first.
#[derive(Debug, Clone)]
pub struct PointPool {
    cards: VecDeque<Card>,
}

impl PointPool {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = point_deck();
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards: cards.into() }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyPool)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_point_deck_skips_zero() {
        let deck = point_deck();
        assert_eq!(deck.len(), 15);
        assert!(!deck.contains(&0));
        assert_eq!(deck.first(), Some(&-5));
        assert_eq!(deck.last(), Some(&10));
        assert_eq!(deck.iter().sum::<Card>(), 40);
    }

    #[test]
    fn test_pool_draws_every_card_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = PointPool::new(&mut rng);
        assert_eq!(pool.len(), 15);

        let mut drawn = Vec::new();
        while !pool.is_empty() {
            drawn.push(pool.draw().unwrap());
        }
        drawn.sort();
        assert_eq!(drawn, point_deck());
        assert_eq!(pool.draw(), Err(GameError::EmptyPool));
    }

    #[test]
    fn test_pool_draws_front_first() {
        let mut pool = PointPool::from_cards(vec![3, -2]);
        assert_eq!(pool.draw(), Ok(3));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.draw(), Ok(-2));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_hands_are_independent_shuffles() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = shuffled_hand(&mut rng);
        let b = shuffled_hand(&mut rng);

        let mut sorted_a = a.clone();
        sorted_a.sort();
        assert_eq!(sorted_a, (1..=15).collect::<Vec<Card>>());
        // Two consecutive shuffles of 15 cards matching would be astronomically unlikely
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut rng_a = StdRng::seed_from_u64(3);
        let mut rng_b = StdRng::seed_from_u64(3);
        assert_eq!(shuffled_hand(&mut rng_a), shuffled_hand(&mut rng_b));
    }
}
