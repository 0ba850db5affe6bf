use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin};

use serde::Serialize;

use super::cards::Card;
use super::error::GameError;

// What a player may see of another player while deciding: copied at the start
// of the round, never what they are about to play.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerCards {
    pub player: usize,
    pub point_cards: Vec<Card>,
    pub hand: Vec<Card>,
}

// Everything handed to a player when it is asked for a card
pub struct RoundView<'a> {
    pub player: usize,
    pub stake: Card,
    pub hand: &'a [Card],
    pub opponents: &'a [PlayerCards],
}

pub trait Player {
    fn kind(&self) -> &'static str;

    // Pick one card out of `view.hand`. The seat checks the choice and takes
    // the card out of the hand, a player never edits its own cards.
    fn choose_card(&mut self, view: &RoundView) -> Result<Card, GameError>;
}

// Plays its hand front to back. The hand was shuffled when dealt so this is a
// uniformly random pick.
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn kind(&self) -> &'static str {
        "random"
    }

    fn choose_card(&mut self, view: &RoundView) -> Result<Card, GameError> {
        view.hand
            .first()
            .copied()
            .ok_or(GameError::EmptyHand { player: view.player })
    }
}

// Reads one integer per round from a line based input
pub struct HumanPlayer<R> {
    input: R,
}

impl HumanPlayer<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_card(&mut self) -> Result<Card, GameError> {
        let mut line = String::new();
        let n_read = self
            .input
            .read_line(&mut line)
            .map_err(|err| GameError::Input(err.to_string()))?;

        if n_read == 0 {
            return Err(GameError::Input("input closed".to_string()));
        }

        let line = line.trim();
        line.parse::<Card>()
            .map_err(|_| GameError::Unparseable(line.to_string()))
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn kind(&self) -> &'static str {
        "human"
    }

    fn choose_card(&mut self, view: &RoundView) -> Result<Card, GameError> {
        let mut sorted_hand = view.hand.to_vec();
        sorted_hand.sort();

        println!("Round card: {}", view.stake);
        for other in view.opponents {
            let mut earned = other.point_cards.clone();
            earned.sort();
            println!("  player#{} earned = {:?}, cards left = {}", other.player, earned, other.hand.len());
        }
        println!("Choose a card from your hand, player#{}: {:?}", view.player, sorted_hand);

        let card = self.read_card()?;
        if !view.hand.contains(&card) {
            return Err(GameError::InvalidMove { player: view.player, card });
        }

        Ok(card)
    }
}

// A player's cards at the table together with whoever decides for them
pub struct Seat {
    number: usize,
    hand: Vec<Card>,
    point_cards: Vec<Card>,
    player: Box<dyn Player>,
}

impl Seat {
    pub fn new(number: usize, hand: Vec<Card>, player: Box<dyn Player>) -> Self {
        Self {
            number,
            hand,
            point_cards: Vec::new(),
            player,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn kind(&self) -> &'static str {
        self.player.kind()
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn point_cards(&self) -> &[Card] {
        &self.point_cards
    }

    pub fn score(&self) -> Card {
        self.point_cards.iter().sum()
    }

    pub fn snapshot(&self) -> PlayerCards {
        PlayerCards {
            player: self.number,
            point_cards: self.point_cards.clone(),
            hand: self.hand.clone(),
        }
    }

    // Ask the player for a card and take it out of the hand. Fails if the hand
    // is empty or the player names a card it doesn't hold.
    pub fn play_card(&mut self, stake: Card, opponents: &[PlayerCards]) -> Result<Card, GameError> {
        if self.hand.is_empty() {
            return Err(GameError::EmptyHand { player: self.number });
        }

        let view = RoundView {
            player: self.number,
            stake,
            hand: &self.hand,
            opponents,
        };
        let card = self.player.choose_card(&view)?;

        let idx = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::InvalidMove { player: self.number, card })?;
        self.hand.remove(idx);

        Ok(card)
    }

    pub fn award(&mut self, card: Card) {
        self.point_cards.push(card);
    }

    pub fn description(&self) -> String {
        let mut cards = self.hand.clone();
        cards.sort();
        let mut earned = self.point_cards.clone();
        earned.sort();

        format!("cards = {:?}, earned = {:?}, score = {}", cards, earned, self.score())
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.number)
    }
}

// Plays a fixed list of cards in order, whether they are in hand or not
#[cfg(test)]
pub struct ScriptedPlayer {
    cards: std::collections::VecDeque<Card>,
}

#[cfg(test)]
impl ScriptedPlayer {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards: cards.into() }
    }
}

#[cfg(test)]
impl Player for ScriptedPlayer {
    fn kind(&self) -> &'static str {
        "scripted"
    }

    fn choose_card(&mut self, view: &RoundView) -> Result<Card, GameError> {
        self.cards
            .pop_front()
            .ok_or(GameError::EmptyHand { player: view.player })
    }
}
