//! Winner determination: pure functions over best-total values.
//!
//! All inputs are `best_under_21` results, so 0 always means bust. No
//! I/O, no state: the orchestrator owns the draw loop, this module only
//! answers "who won" and "should the dealer draw".

use super::types::Winner;

/// Dealer stands at or above this total (unless chasing a player 21).
const DEALER_STAND: u32 = 17;

/// Resolve naturals immediately after the opening deal.
///
/// The dealer total includes the secret card.
pub fn resolve_at_start(best_player: u32, best_dealer: u32) -> Winner {
    if best_player == 21 {
        if best_dealer == 21 {
            Winner::Both
        } else {
            Winner::Player
        }
    } else if best_dealer == 21 {
        Winner::Dealer
    } else {
        Winner::None
    }
}

/// Resolve after the player takes a card: only a bust ends the game
/// here, the dealer's hand is not reconsidered.
pub fn resolve_after_player_hit(best_player: u32) -> Winner {
    if best_player == 0 {
        Winner::Dealer
    } else {
        Winner::None
    }
}

/// One step of the dealer's drawing policy.
///
/// A busted dealer (0) never draws again — this check comes first so the
/// play-out always terminates, even against a player holding 21. With the
/// player at 21 the dealer chases: it keeps drawing unless it has 21 as
/// well. Otherwise the house rule applies: draw below 17, stand at 17+.
pub fn dealer_should_hit(best_player: u32, best_dealer: u32) -> bool {
    if best_dealer == 0 {
        return false;
    }
    if best_player == 21 {
        return best_dealer != 21;
    }
    best_dealer < DEALER_STAND
}

/// Showdown once the dealer stops drawing.
///
/// 21 beats everything except another 21 (push); equal totals push; a
/// bust (0) loses to any standing total.
pub fn resolve_at_end(best_player: u32, best_dealer: u32) -> Winner {
    if best_player == 21 {
        if best_dealer == 21 {
            Winner::Both
        } else {
            Winner::Player
        }
    } else if best_dealer == 21 {
        Winner::Dealer
    } else if best_player == best_dealer {
        Winner::Both
    } else if best_player > best_dealer {
        Winner::Player
    } else {
        Winner::Dealer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_double_natural_is_push() {
        assert_eq!(resolve_at_start(21, 21), Winner::Both);
    }

    #[test]
    fn test_start_player_natural_wins() {
        assert_eq!(resolve_at_start(21, 17), Winner::Player);
    }

    #[test]
    fn test_start_dealer_natural_wins() {
        assert_eq!(resolve_at_start(20, 21), Winner::Dealer);
    }

    #[test]
    fn test_start_no_natural_continues() {
        assert_eq!(resolve_at_start(15, 17), Winner::None);
        assert_eq!(resolve_at_start(20, 20), Winner::None);
    }

    #[test]
    fn test_player_bust_resolves_immediately() {
        assert_eq!(resolve_after_player_hit(0), Winner::Dealer);
        assert_eq!(resolve_after_player_hit(20), Winner::None);
        assert_eq!(resolve_after_player_hit(21), Winner::None);
    }

    #[test]
    fn test_dealer_policy_decision_table() {
        // player 21 / dealer 21 -> stand
        assert!(!dealer_should_hit(21, 21));
        // player 21 / dealer below 21 -> chase, even past 17
        assert!(dealer_should_hit(21, 17));
        assert!(dealer_should_hit(21, 20));
        assert!(dealer_should_hit(21, 5));
        // dealer at 17+ -> stand
        assert!(!dealer_should_hit(20, 17));
        assert!(!dealer_should_hit(16, 19));
        // dealer bust -> stand, regardless of the player
        assert!(!dealer_should_hit(21, 0));
        assert!(!dealer_should_hit(18, 0));
        // below 17 -> draw
        assert!(dealer_should_hit(20, 16));
        assert!(dealer_should_hit(12, 2));
    }

    #[test]
    fn test_end_resolution() {
        assert_eq!(resolve_at_end(21, 21), Winner::Both);
        assert_eq!(resolve_at_end(21, 19), Winner::Player);
        assert_eq!(resolve_at_end(18, 21), Winner::Dealer);
        assert_eq!(resolve_at_end(18, 18), Winner::Both);
        assert_eq!(resolve_at_end(20, 19), Winner::Player);
        assert_eq!(resolve_at_end(17, 19), Winner::Dealer);
    }

    #[test]
    fn test_end_bust_counts_lowest() {
        // 0 is the bust sentinel and loses to any standing hand.
        assert_eq!(resolve_at_end(0, 18), Winner::Dealer);
        assert_eq!(resolve_at_end(18, 0), Winner::Player);
        // Double bust is a push by the equal-totals rule.
        assert_eq!(resolve_at_end(0, 0), Winner::Both);
    }
}
