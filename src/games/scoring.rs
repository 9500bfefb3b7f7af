//! Hand valuation: candidate totals and the best-under-21 rule.
//!
//! A hand does not have one total; every ace forks the candidate set into
//! a hard (+1) and a soft (+11) branch. Totals are kept as a deduplicated
//! ordered set so many aces stay cheap, and they are always recomputed
//! over the whole hand rather than patched incrementally.

use std::collections::BTreeSet;

use super::types::{Card, Rank};

/// Upper bound of a valid blackjack total.
pub const BLACKJACK: u32 = 21;

/// Compute every candidate total for a hand.
///
/// Starts from `{0}` and folds each card in order: numerals and faces
/// shift every candidate, an ace replaces each candidate with both its
/// hard and soft reading.
pub fn hand_totals(cards: &[Card]) -> BTreeSet<u32> {
    let mut totals = BTreeSet::from([0]);
    for card in cards {
        totals = fold_card(&totals, card);
    }
    totals
}

fn fold_card(totals: &BTreeSet<u32>, card: &Card) -> BTreeSet<u32> {
    match card.rank() {
        Rank::Numeral(n) => totals.iter().map(|t| t + n).collect(),
        Rank::Face => totals.iter().map(|t| t + 10).collect(),
        Rank::Ace => totals.iter().flat_map(|t| [t + 1, t + 11]).collect(),
    }
}

/// The highest candidate that does not exceed 21, or 0 when every
/// candidate busts.
///
/// 0 is a sentinel: a legitimate hand always carries at least the empty
/// total, so callers must distinguish "bust" from "no cards" themselves.
pub fn best_under_21(totals: &BTreeSet<u32>) -> u32 {
    totals
        .iter()
        .copied()
        .filter(|t| *t <= BLACKJACK)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(value: &str) -> Card {
        Card::new("SPADES", "XS", value)
    }

    #[test]
    fn test_empty_hand_is_zero() {
        let totals = hand_totals(&[]);
        assert_eq!(totals, BTreeSet::from([0]));
        assert_eq!(best_under_21(&totals), 0);
    }

    #[test]
    fn test_numeral_cards_shift_every_candidate() {
        // Non-ace draws never change the candidate count.
        let totals = hand_totals(&[card("ACE"), card("5")]);
        assert_eq!(totals, BTreeSet::from([6, 16]));
        let totals = hand_totals(&[card("ACE"), card("5"), card("3")]);
        assert_eq!(totals, BTreeSet::from([9, 19]));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_face_cards_count_ten() {
        assert_eq!(
            hand_totals(&[card("JACK"), card("QUEEN"), card("KING")]),
            BTreeSet::from([30])
        );
    }

    #[test]
    fn test_single_ace_is_one_or_eleven() {
        assert_eq!(hand_totals(&[card("ACE")]), BTreeSet::from([1, 11]));
    }

    #[test]
    fn test_multiple_aces_dedupe() {
        // 1+1, 1+11/11+1, 11+11 — four branches, three distinct totals.
        assert_eq!(
            hand_totals(&[card("ACE"), card("ACE")]),
            BTreeSet::from([2, 12, 22])
        );
    }

    #[test]
    fn test_blackjack_hand() {
        let totals = hand_totals(&[card("ACE"), card("KING")]);
        assert_eq!(totals, BTreeSet::from([11, 21]));
        assert_eq!(best_under_21(&totals), 21);
    }

    #[test]
    fn test_best_under_21_bust_sentinel() {
        assert_eq!(best_under_21(&BTreeSet::from([22, 23])), 0);
        assert_eq!(best_under_21(&BTreeSet::from([18, 21])), 21);
        assert_eq!(best_under_21(&BTreeSet::new()), 0);
    }

    #[test]
    fn test_recompute_matches_fold_order() {
        // [10, 9] then drawing a 5 busts the only candidate.
        let totals = hand_totals(&[card("10"), card("9"), card("5")]);
        assert_eq!(totals, BTreeSet::from([24]));
        assert_eq!(best_under_21(&totals), 0);
    }
}
