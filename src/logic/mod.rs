//! Scheduling logic: penalty scoring, round generation, state replay, sessions.

mod generator;
mod penalty;
mod session;
mod state;

pub use generator::{generate_all_rounds, generate_round, generate_rounds, ROUNDS_PER_BATCH};
pub use penalty::{score_match, score_round};
pub use session::{extend_session, start_session};
pub use state::{apply_round, replay_rounds};
