//! Tennis court round scheduler: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{
    apply_round, extend_session, generate_all_rounds, generate_round, generate_rounds,
    replay_rounds, score_match, score_round, start_session, ROUNDS_PER_BATCH,
};
pub use models::{
    CourtConfig, FixedPair, Group, Match, MatchKind, Pattern, PlayStatus, Player, PlayerId,
    PlayerSummary, Round, ScheduleError, ScheduleSession, SessionId,
};
