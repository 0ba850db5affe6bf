use std::cmp::Reverse;

use anyhow::Result;
use rand::Rng;

use super::cards::{shuffled_hand, Card, PointPool};
use super::error::GameError;
use super::events::{EventSink, GameEvent};
use super::player::{Player, PlayerCards, Seat};
use super::round::resolve_round;
use crate::games::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete,
}

// Owns the table: the point cards still to come and every seat. Seats are
// numbered from 1 in roster order.
pub struct Dealer<S> {
    seats: Vec<Seat>,
    pool: PointPool,
    discarded: Vec<Card>,
    rounds: usize,
    sink: S,
}

impl<S: EventSink> Dealer<S> {
    // Shuffle a new point pool and deal every player a fresh hand
    pub fn new<R: Rng + ?Sized>(players: Vec<Box<dyn Player>>, rng: &mut R, sink: S) -> Self {
        let pool = PointPool::new(rng);

        let mut roster = Vec::with_capacity(players.len());
        for player in players {
            roster.push((shuffled_hand(rng), player));
        }

        Self::from_parts(roster, pool, sink)
    }

    // Set up a table with hands and point cards already decided
    pub fn from_parts(roster: Vec<(Vec<Card>, Box<dyn Player>)>, pool: PointPool, sink: S) -> Self {
        let seats = roster
            .into_iter()
            .enumerate()
            .map(|(idx, (hand, player))| Seat::new(idx + 1, hand, player))
            .collect();

        Self {
            seats,
            pool,
            discarded: Vec::new(),
            rounds: 0,
            sink,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.pool.is_empty() {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    // Stakes nobody won because every card played was tied
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // Draw a stake, collect one card from every seat and hand the stake to the
    // winner if there is one. Returns the winner's number.
    pub fn play_round(&mut self) -> Result<Option<usize>, GameError> {
        let stake = self.pool.draw()?;
        self.rounds += 1;
        let round = self.rounds;
        self.sink.record(GameEvent::RoundStarted { round, stake });

        // Everyone decides on what the table looked like before anyone played
        let snapshots: Vec<PlayerCards> = self.seats.iter().map(Seat::snapshot).collect();

        let mut commits = Vec::with_capacity(self.seats.len());
        for (idx, seat) in self.seats.iter_mut().enumerate() {
            let opponents: Vec<PlayerCards> = snapshots
                .iter()
                .enumerate()
                .filter(|&(other, _)| other != idx)
                .map(|(_, cards)| cards.clone())
                .collect();

            let card = seat.play_card(stake, &opponents)?;
            self.sink.record(GameEvent::CardPlayed { round, player: seat.number(), card });
            commits.push((seat.number(), card));
        }

        match resolve_round(stake, &commits) {
            Some(player) => {
                self.seats[player - 1].award(stake);
                self.sink.record(GameEvent::RoundWon { round, player, stake });
                Ok(Some(player))
            }
            None => {
                self.discarded.push(stake);
                self.sink.record(GameEvent::RoundTied { round, stake });
                Ok(None)
            }
        }
    }

    // Play rounds until the point cards run out and return the winner
    pub fn play_game(&mut self) -> Result<&Seat, GameError> {
        while self.status() == GameStatus::InProgress {
            self.play_round()?;
        }

        let idx = self
            .winner_index()
            .ok_or_else(|| GameError::InvalidRoster("nobody at the table".to_string()))?;

        let winner = &self.seats[idx];
        self.sink.record(GameEvent::GameWon {
            player: winner.number(),
            score: winner.score(),
            point_cards: winner.point_cards().to_vec(),
            hand: winner.hand().to_vec(),
        });

        Ok(&self.seats[idx])
    }

    // Highest score first, equal scores stay in roster order
    pub fn standings(&self) -> Vec<&Seat> {
        let mut ranked: Vec<&Seat> = self.seats.iter().collect();
        ranked.sort_by_key(|seat| Reverse(seat.score()));
        ranked
    }

    // First seat with the top score, so ties go to the lowest player number
    fn winner_index(&self) -> Option<usize> {
        let mut best: Option<(usize, Card)> = None;
        for (idx, seat) in self.seats.iter().enumerate() {
            match best {
                Some((_, score)) if seat.score() <= score => {}
                _ => best = Some((idx, seat.score())),
            }
        }

        best.map(|(idx, _)| idx)
    }
}

impl<S: EventSink> Validate for Dealer<S> {
    fn validate(&self) -> Result<()> {
        if self.seats.is_empty() {
            return Err(GameError::InvalidRoster("a game needs at least one player".to_string()).into());
        }

        for seat in &self.seats {
            if seat.hand().len() < self.pool.len() {
                return Err(GameError::InvalidRoster(format!(
                    "{} holds {} cards for {} rounds",
                    seat,
                    seat.hand().len(),
                    self.pool.len()
                ))
                .into());
            }
        }

        Ok(())
    }
}
