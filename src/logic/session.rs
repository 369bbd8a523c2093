//! Session orchestration: initial batch and history-replaying extension.

use crate::logic::generator::generate_rounds;
use crate::logic::state::replay_rounds;
use crate::models::{ScheduleError, ScheduleSession};
use rand::Rng;

/// Generate the session's initial batch of three rounds.
pub fn start_session<R: Rng>(
    session: &mut ScheduleSession,
    rng: &mut R,
) -> Result<(), ScheduleError> {
    if !session.rounds.is_empty() {
        return Err(ScheduleError::AlreadyStarted);
    }
    session.rounds = generate_rounds(
        &session.players,
        &session.court_config,
        session.pattern,
        &session.fixed_pairs,
        &[],
        1,
        rng,
    );
    Ok(())
}

/// Extend the session by three more rounds.
///
/// Current player state is reconstructed by replaying every historical round
/// from the initial all-zero registry, and the full history is passed to the
/// generator so repeat checks see the whole schedule. Nothing is cached between
/// calls; correctness rests on rounds being immutable once appended.
pub fn extend_session<R: Rng>(
    session: &mut ScheduleSession,
    rng: &mut R,
) -> Result<(), ScheduleError> {
    if session.rounds.is_empty() {
        return Err(ScheduleError::NotStarted);
    }
    let current = replay_rounds(&session.players, &session.rounds);
    let new_rounds = generate_rounds(
        &current,
        &session.court_config,
        session.pattern,
        &session.fixed_pairs,
        &session.rounds,
        session.last_round_index() + 1,
        rng,
    );
    session.rounds.extend(new_rounds);
    Ok(())
}
