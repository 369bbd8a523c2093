//! Participation state transitions. Value semantics: transitions return a new
//! registry so replay never aliases shared state.

use crate::models::{PlayStatus, Player, Round};

/// Apply one accepted round to the registry, returning the updated registry.
/// Players in any match play; everyone else rests. No other field changes.
pub fn apply_round(players: &[Player], round: &Round) -> Vec<Player> {
    players
        .iter()
        .map(|p| {
            let mut p = p.clone();
            if round.playing_ids().any(|id| id == p.id) {
                p.play_count += 1;
                p.last_status = PlayStatus::Played;
            } else {
                p.rest_count += 1;
                p.last_status = PlayStatus::Rested;
            }
            p
        })
        .collect()
}

/// Rebuild current player state from the initial registry by replaying every
/// round in order.
pub fn replay_rounds(players: &[Player], rounds: &[Round]) -> Vec<Player> {
    let mut state = players.to_vec();
    for round in rounds {
        state = apply_round(&state, round);
    }
    state
}
