//! Court configuration, matches, rounds, fixed pairs, and pairing patterns.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Singles (1v1) or doubles (2v2) court.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Singles,
    Doubles,
}

/// How match scoring treats group labels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Ignore groups entirely.
    #[default]
    Random,
    /// Keep every match within a single group.
    Separate,
    /// Prefer cross-group opponents and cross-group doubles teams.
    Mixed,
}

/// Number of courts per kind. Callers ensure at least one court in total.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CourtConfig {
    pub singles: u32,
    pub doubles: u32,
}

impl CourtConfig {
    pub fn total_courts(&self) -> u32 {
        self.singles + self.doubles
    }

    /// Players needed to fill every court.
    pub fn required_players(&self) -> usize {
        (self.singles * 2 + self.doubles * 4) as usize
    }
}

/// Two players who must team up whenever both land in the same doubles match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixedPair {
    pub player1: PlayerId,
    pub player2: PlayerId,
}

impl FixedPair {
    pub fn contains(&self, id: PlayerId) -> bool {
        self.player1 == id || self.player2 == id
    }
}

/// One court's assignment for a round.
/// Doubles positions 0-1 and 2-3 are the two teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub court_index: u32,
    pub kind: MatchKind,
    pub players: Vec<PlayerId>,
}

/// One scheduling unit: every pool player is either in exactly one match or resting.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub index: u32,
    pub matches: Vec<Match>,
    pub resting: Vec<PlayerId>,
}

impl Round {
    /// Ids of everyone on court this round.
    pub fn playing_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.matches.iter().flat_map(|m| m.players.iter().copied())
    }
}
