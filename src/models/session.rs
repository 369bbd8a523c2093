//! ScheduleSession and the session-boundary error taxonomy.

use crate::models::player::{Player, PlayerId, PlayerSummary};
use crate::models::round::{CourtConfig, FixedPair, Pattern, Round};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a schedule session.
pub type SessionId = Uuid;

/// Errors raised at the session boundary (preconditions the caller must satisfy).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Court config has no courts at all.
    NoCourts,
    /// Filling every court needs more players than the pool holds.
    NotEnoughPlayers { required: usize, available: usize },
    /// A fixed pair references a player that is not in the pool.
    PlayerNotFound(PlayerId),
    /// A player appears in more than one fixed pair (or twice in the same pair).
    PairPlayerReused(PlayerId),
    /// More fixed pairs than doubles courts.
    TooManyFixedPairs { pairs: usize, doubles_courts: u32 },
    /// Rounds have already been generated for this session.
    AlreadyStarted,
    /// No rounds have been generated yet.
    NotStarted,
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::NoCourts => write!(f, "At least one court is required"),
            ScheduleError::NotEnoughPlayers { required, available } => {
                write!(f, "Court configuration needs {} players but only {} are available", required, available)
            }
            ScheduleError::PlayerNotFound(id) => {
                write!(f, "Fixed pair references unknown player {}", id)
            }
            ScheduleError::PairPlayerReused(id) => {
                write!(f, "Player {} appears in more than one fixed pair", id)
            }
            ScheduleError::TooManyFixedPairs { pairs, doubles_courts } => {
                write!(f, "{} fixed pair(s) configured but only {} doubles court(s)", pairs, doubles_courts)
            }
            ScheduleError::AlreadyStarted => write!(f, "Session already has rounds"),
            ScheduleError::NotStarted => write!(f, "Session has no rounds yet"),
        }
    }
}

/// A scheduling session: the immutable inputs plus every round generated so far.
///
/// Current player state is never stored. It is rederived by replaying the round
/// history from the initial registry, so rounds must stay immutable once appended.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleSession {
    pub id: SessionId,
    /// Initial registry (all-zero counters); replay starts here.
    pub players: Vec<Player>,
    pub court_config: CourtConfig,
    pub pattern: Pattern,
    pub fixed_pairs: Vec<FixedPair>,
    /// Accumulated schedule.
    pub rounds: Vec<Round>,
}

impl ScheduleSession {
    /// Create a session, checking the preconditions the engine itself assumes.
    pub fn new(
        players: Vec<Player>,
        court_config: CourtConfig,
        pattern: Pattern,
        fixed_pairs: Vec<FixedPair>,
    ) -> Result<Self, ScheduleError> {
        if court_config.total_courts() == 0 {
            return Err(ScheduleError::NoCourts);
        }
        let required = court_config.required_players();
        if required > players.len() {
            return Err(ScheduleError::NotEnoughPlayers {
                required,
                available: players.len(),
            });
        }
        if fixed_pairs.len() > court_config.doubles as usize {
            return Err(ScheduleError::TooManyFixedPairs {
                pairs: fixed_pairs.len(),
                doubles_courts: court_config.doubles,
            });
        }
        let mut used: Vec<PlayerId> = Vec::new();
        for fp in &fixed_pairs {
            for id in [fp.player1, fp.player2] {
                if !players.iter().any(|p| p.id == id) {
                    return Err(ScheduleError::PlayerNotFound(id));
                }
                if used.contains(&id) {
                    return Err(ScheduleError::PairPlayerReused(id));
                }
                used.push(id);
            }
        }
        Ok(Self {
            id: Uuid::new_v4(),
            players,
            court_config,
            pattern,
            fixed_pairs,
            rounds: Vec::new(),
        })
    }

    /// Index of the most recent round (0 when none have been generated).
    pub fn last_round_index(&self) -> u32 {
        self.rounds.last().map(|r| r.index).unwrap_or(0)
    }

    /// Player state after replaying every generated round, in order.
    pub fn current_players(&self) -> Vec<Player> {
        crate::logic::replay_rounds(&self.players, &self.rounds)
    }

    /// Per-player participation over the generated rounds (for display).
    pub fn player_summaries(&self) -> Vec<PlayerSummary> {
        let total = self.rounds.len();
        self.current_players()
            .iter()
            .map(|p| PlayerSummary::from_player(p, total))
            .collect()
    }
}
