use std::collections::BTreeMap;

use super::cards::Card;

// Pick the round winner from `(player, card)` commits. A positive stake goes to
// the highest card, anything else to the lowest. Cards played by more than one
// player knock each other out and the next best card is tried. Returns None
// when every card played was tied.
pub fn resolve_round(stake: Card, commits: &[(usize, Card)]) -> Option<usize> {
    let mut by_card: BTreeMap<Card, Vec<usize>> = BTreeMap::new();
    for &(player, card) in commits {
        by_card.entry(card).or_default().push(player);
    }

    let unique = |(_, players): (&Card, &Vec<usize>)| match players.as_slice() {
        [player] => Some(*player),
        _ => None,
    };

    if stake > 0 {
        by_card.iter().rev().find_map(unique)
    } else {
        by_card.iter().find_map(unique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_unique_card_takes_positive_stake() {
        assert_eq!(resolve_round(7, &[(1, 3), (2, 9), (3, 9), (4, 5)]), Some(4));
    }

    #[test]
    fn test_lowest_unique_card_takes_negative_stake() {
        assert_eq!(resolve_round(-4, &[(1, 2), (2, 8), (3, 1)]), Some(3));
    }

    #[test]
    fn test_lowest_tie_skipped_for_negative_stake() {
        assert_eq!(resolve_round(-1, &[(1, 1), (2, 1), (3, 4), (4, 2)]), Some(4));
    }

    #[test]
    fn test_total_tie_has_no_winner() {
        assert_eq!(resolve_round(6, &[(1, 10), (2, 10)]), None);
        assert_eq!(resolve_round(-3, &[(1, 2), (2, 5), (3, 2), (4, 5)]), None);
    }

    #[test]
    fn test_single_player_always_wins() {
        assert_eq!(resolve_round(-5, &[(1, 15)]), Some(1));
    }

    #[test]
    fn test_zero_stake_favors_lowest() {
        assert_eq!(resolve_round(0, &[(1, 3), (2, 9)]), Some(1));
    }

    #[test]
    fn test_no_commits() {
        assert_eq!(resolve_round(3, &[]), None);
    }
}
