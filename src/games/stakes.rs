// Every round the dealer turns over a point card and all players commit one
// of their hand cards at the same time. The highest card played by exactly one
// player takes the point card (the lowest one when the point card is
// negative). Once the point cards run out the biggest total wins.

pub mod cards;
pub mod dealer;
pub mod error;
pub mod events;
pub mod player;
pub mod round;

pub use dealer::Dealer;
pub use events::{GameEvent, LogSink};
pub use player::{HumanPlayer, Player, RandomPlayer};
