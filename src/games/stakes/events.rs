use serde::Serialize;

use super::cards::Card;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted { round: usize, stake: Card },
    CardPlayed { round: usize, player: usize, card: Card },
    RoundWon { round: usize, player: usize, stake: Card },
    // Nobody played a unique card, the stake is discarded
    RoundTied { round: usize, stake: Card },
    GameWon { player: usize, score: Card, point_cards: Vec<Card>, hand: Vec<Card> },
}

// Where the dealer reports what happens at the table
pub trait EventSink {
    fn record(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn record(&mut self, event: GameEvent) {
        self.push(event);
    }
}

// Writes every event to the log at info level
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::RoundStarted { round, stake } => {
                log::info!("Round {}, card: {}", round, stake)
            }
            GameEvent::CardPlayed { player, card, .. } => {
                log::info!("player#{} played card: {}", player, card)
            }
            GameEvent::RoundWon { player, .. } => log::info!("player#{} wins the round", player),
            GameEvent::RoundTied { stake, .. } => {
                log::info!("No winner, card {} is discarded", stake)
            }
            GameEvent::GameWon { player, score, mut point_cards, mut hand } => {
                point_cards.sort();
                hand.sort();
                log::info!(
                    "Winner: player#{} (cards = {:?}, earned = {:?}, score = {})",
                    player, hand, point_cards, score
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_kind_tag() {
        let event = GameEvent::CardPlayed { round: 2, player: 3, card: 11 };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "kind": "card_played", "round": 2, "player": 3, "card": 11 })
        );

        let tied = serde_json::to_value(GameEvent::RoundTied { round: 1, stake: -5 }).unwrap();
        assert_eq!(tied["kind"], "round_tied");
        assert_eq!(tied["stake"], -5);
    }

    #[test]
    fn test_vec_records_in_order() {
        let mut sink: Vec<GameEvent> = Vec::new();
        sink.record(GameEvent::RoundStarted { round: 1, stake: 4 });
        sink.record(GameEvent::RoundTied { round: 1, stake: 4 });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0], GameEvent::RoundStarted { round: 1, stake: 4 });
    }
}
