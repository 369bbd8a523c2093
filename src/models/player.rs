//! Player identity, group label, and participation counters.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player (small stable integer, assigned at session start).
pub type PlayerId = u32;

/// Optional skill/level group used by the pairing patterns.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    A,
    B,
    #[default]
    None,
}

/// What the player did in the most recently applied round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayStatus {
    /// Also the fresh-player default, so the first round carries no repeat-rest penalty.
    #[default]
    Played,
    Rested,
}

/// A player in the scheduling pool.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub group: Group,
    pub play_count: u32,
    pub rest_count: u32,
    pub last_status: PlayStatus,
}

impl Player {
    /// Create a fresh player with zeroed participation counters and no group.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group: Group::None,
            play_count: 0,
            rest_count: 0,
            last_status: PlayStatus::Played,
        }
    }

    /// Create a fresh player with a group label.
    pub fn with_group(id: PlayerId, name: impl Into<String>, group: Group) -> Self {
        Self {
            group,
            ..Self::new(id, name)
        }
    }
}

/// Participation summary of one player over a session (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub group: Group,
    pub play_count: u32,
    pub rest_count: u32,
    /// Percentage of the session's rounds this player was on court (rounded).
    pub participation_pct: u32,
}

impl PlayerSummary {
    pub fn from_player(p: &Player, total_rounds: usize) -> Self {
        let participation_pct = if total_rounds > 0 {
            (f64::from(p.play_count) / total_rounds as f64 * 100.0).round() as u32
        } else {
            0
        };
        Self {
            id: p.id,
            name: p.name.clone(),
            group: p.group,
            play_count: p.play_count,
            rest_count: p.rest_count,
            participation_pct,
        }
    }
}
