//! Penalty scoring for candidate matches and rounds.

use crate::models::{Group, MatchKind, Pattern, PlayStatus, Player, PlayerId, Round};

/// Score one candidate match against history and the active pattern.
/// Pure function; lower is better, 0 is ideal. All rules that apply are summed.
///
/// Scores are `f64`: the participation-imbalance rule deviates from the match
/// mean, whose denominators (2 and 4) stay exact in binary floating point.
pub fn score_match(
    match_players: &[PlayerId],
    kind: MatchKind,
    players: &[Player],
    past_rounds: &[Round],
    pattern: Pattern,
) -> f64 {
    let find = |id: PlayerId| players.iter().find(|p| p.id == id);
    let group_of = |id: PlayerId| find(id).map(|p| p.group).unwrap_or(Group::None);

    let mut penalty = 0.0;

    // Repeated doubles team: +10 per past team with the same (unordered) pair.
    if kind == MatchKind::Doubles {
        let pairs: Vec<&[PlayerId]> = match_players.chunks_exact(2).collect();
        for round in past_rounds {
            for m in &round.matches {
                if m.kind != MatchKind::Doubles {
                    continue;
                }
                for past in m.players.chunks_exact(2) {
                    for pair in &pairs {
                        if (pair[0] == past[0] && pair[1] == past[1])
                            || (pair[0] == past[1] && pair[1] == past[0])
                        {
                            penalty += 10.0;
                        }
                    }
                }
            }
        }
    }

    // Repeated matchup: +8 per past match (any kind) with the same player set.
    for round in past_rounds {
        for m in &round.matches {
            if m.players.len() == match_players.len()
                && m.players.iter().all(|p| match_players.contains(p))
            {
                penalty += 8.0;
            }
        }
    }

    // Playing right after a rest: +5 per player.
    for &id in match_players {
        if find(id).is_some_and(|p| p.last_status == PlayStatus::Rested) {
            penalty += 5.0;
        }
    }

    // Participation imbalance: +3 per unit of deviation from the match mean.
    let counts: Vec<f64> = match_players
        .iter()
        .map(|&id| find(id).map(|p| f64::from(p.play_count)).unwrap_or(0.0))
        .collect();
    if !counts.is_empty() {
        let avg = counts.iter().sum::<f64>() / counts.len() as f64;
        for c in &counts {
            penalty += (c - avg).abs() * 3.0;
        }
    }

    // Pattern violation: +15.
    match pattern {
        Pattern::Random => {}
        Pattern::Separate => {
            let has = |g: Group| match_players.iter().any(|&id| group_of(id) == g);
            if has(Group::A) && has(Group::B) {
                penalty += 15.0;
            }
        }
        Pattern::Mixed => match kind {
            MatchKind::Singles => {
                if let [a, b] = match_players {
                    let (ga, gb) = (group_of(*a), group_of(*b));
                    if ga != Group::None && ga == gb {
                        penalty += 15.0;
                    }
                }
            }
            MatchKind::Doubles => {
                if let [a, b, c, d] = match_players {
                    let cross = |x: PlayerId, y: PlayerId| {
                        let (gx, gy) = (group_of(x), group_of(y));
                        gx != gy && gx != Group::None && gy != Group::None
                    };
                    if !(cross(*a, *b) && cross(*c, *d)) {
                        penalty += 15.0;
                    }
                }
            }
        },
    }

    // Group B on a singles court: +12 per such player, regardless of pattern.
    if kind == MatchKind::Singles {
        for &id in match_players {
            if group_of(id) == Group::B {
                penalty += 12.0;
            }
        }
    }

    penalty
}

/// Total penalty for a candidate round: every match scored with [`score_match`],
/// plus +5 for each resting player who also rested the previous round.
/// The overlap with the in-match repeat-rest rule is intentional: resting twice
/// in a row is penalized independently of the match-assignment rules.
pub fn score_round(
    round: &Round,
    players: &[Player],
    past_rounds: &[Round],
    pattern: Pattern,
) -> f64 {
    let mut total = 0.0;
    for m in &round.matches {
        total += score_match(&m.players, m.kind, players, past_rounds, pattern);
    }
    for &id in &round.resting {
        let rested_before = players
            .iter()
            .find(|p| p.id == id)
            .is_some_and(|p| p.last_status == PlayStatus::Rested);
        if rested_before {
            total += 5.0;
        }
    }
    total
}
