use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::cards::Card;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    // A player committed a card that is not in their hand
    InvalidMove { player: usize, card: Card },
    EmptyPool,
    EmptyHand { player: usize },
    Unparseable(String),
    Input(String),
    InvalidRoster(String),
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameError::InvalidMove { player, card } => {
                write!(f, "player#{player} picked card {card} that isn't in their hand")
            }
            GameError::EmptyPool => write!(f, "no point cards left to draw"),
            GameError::EmptyHand { player } => write!(f, "player#{player} has no cards left to play"),
            GameError::Unparseable(s) => write!(f, "could not read a card from {s:?}"),
            GameError::Input(s) => write!(f, "input error: {s}"),
            GameError::InvalidRoster(s) => write!(f, "invalid roster: {s}"),
        }
    }
}

impl Error for GameError {}
