//! Round generation: bounded randomized search over candidate court assignments.

use crate::logic::penalty::score_round;
use crate::logic::state::apply_round;
use crate::models::{
    CourtConfig, FixedPair, Group, Match, MatchKind, Pattern, Player, PlayerId, Round,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Candidate rounds tried per call before settling for the best found.
const MAX_ATTEMPTS: u32 = 100;

/// Rounds produced per generation batch.
pub const ROUNDS_PER_BATCH: usize = 3;

/// Generate one round (bounded stochastic search, early exit on a zero-penalty
/// candidate).
///
/// 1. Bucket the pool by group and shuffle each bucket independently.
/// 2. Concatenate A, none, B. The order is a deliberate selection bias: group A
///    fills singles courts first, group B is pushed toward doubles and rest.
/// 3. Slice off the singles pool, then the doubles pool; the tail rests.
/// 4. Chunk the pools into matches; a fixed pair drawn into one doubles match
///    is moved to the team-1 positions before scoring.
/// 5. Keep the lowest-penalty candidate; the first found wins ties.
///
/// A pool too small for the configuration fills as many courts as it can; the
/// remainder rests.
pub fn generate_round<R: Rng>(
    players: &[Player],
    courts: &CourtConfig,
    pattern: Pattern,
    fixed_pairs: &[FixedPair],
    past_rounds: &[Round],
    round_index: u32,
    rng: &mut R,
) -> Round {
    let mut best: Option<Round> = None;
    let mut best_penalty = f64::INFINITY;

    for _ in 0..MAX_ATTEMPTS {
        let candidate = build_candidate(players, courts, fixed_pairs, round_index, rng);
        let penalty = score_round(&candidate, players, past_rounds, pattern);
        if penalty < best_penalty {
            best_penalty = penalty;
            best = Some(candidate);
        }
        if best_penalty == 0.0 {
            break;
        }
    }

    best.unwrap_or_else(|| Round {
        index: round_index,
        matches: Vec::new(),
        resting: players.iter().map(|p| p.id).collect(),
    })
}

/// One shuffled candidate assignment.
fn build_candidate<R: Rng>(
    players: &[Player],
    courts: &CourtConfig,
    fixed_pairs: &[FixedPair],
    round_index: u32,
    rng: &mut R,
) -> Round {
    let mut bucket = |group: Group| -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = players
            .iter()
            .filter(|p| p.group == group)
            .map(|p| p.id)
            .collect();
        ids.shuffle(rng);
        ids
    };

    let mut prioritized = bucket(Group::A);
    prioritized.extend(bucket(Group::None));
    prioritized.extend(bucket(Group::B));

    let singles_take = (courts.singles as usize * 2).min(prioritized.len());
    let doubles_take = (courts.doubles as usize * 4).min(prioritized.len() - singles_take);
    let playing = &prioritized[..singles_take + doubles_take];

    let mut matches = Vec::new();
    let mut idx = 0;

    for court in 0..courts.singles {
        if idx + 2 > playing.len() {
            break;
        }
        matches.push(Match {
            court_index: court + 1,
            kind: MatchKind::Singles,
            players: playing[idx..idx + 2].to_vec(),
        });
        idx += 2;
    }

    for court in 0..courts.doubles {
        if idx + 4 > playing.len() {
            break;
        }
        let mut match_players = playing[idx..idx + 4].to_vec();
        seat_fixed_pairs(&mut match_players, fixed_pairs);
        matches.push(Match {
            court_index: courts.singles + court + 1,
            kind: MatchKind::Doubles,
            players: match_players,
        });
        idx += 4;
    }

    // Everyone not consumed into a match rests, including any pool remainder a
    // half-filled court could not use; the partition invariant is unconditional.
    let resting = prioritized[idx..].to_vec();

    Round {
        index: round_index,
        matches,
        resting,
    }
}

/// Move any fixed pair fully contained in a doubles match to the team-1
/// positions. Team composition must be settled before the pair-repeat check in
/// scoring, since it determines which pairs are compared.
fn seat_fixed_pairs(match_players: &mut Vec<PlayerId>, fixed_pairs: &[FixedPair]) {
    for fp in fixed_pairs {
        if match_players.contains(&fp.player1) && match_players.contains(&fp.player2) {
            let others: Vec<PlayerId> = match_players
                .iter()
                .copied()
                .filter(|&id| !fp.contains(id))
                .collect();
            let mut seated = vec![fp.player1, fp.player2];
            seated.extend(others);
            *match_players = seated;
        }
    }
}

/// Generate one batch of three rounds. Each accepted round joins the history
/// seen by the next and its state update is applied to a working copy of the
/// players.
pub fn generate_rounds<R: Rng>(
    players: &[Player],
    courts: &CourtConfig,
    pattern: Pattern,
    fixed_pairs: &[FixedPair],
    past_rounds: &[Round],
    start_index: u32,
    rng: &mut R,
) -> Vec<Round> {
    let mut state = players.to_vec();
    let mut history = past_rounds.to_vec();
    let mut batch = Vec::with_capacity(ROUNDS_PER_BATCH);

    for i in 0..ROUNDS_PER_BATCH {
        let round = generate_round(
            &state,
            courts,
            pattern,
            fixed_pairs,
            &history,
            start_index + i as u32,
            rng,
        );
        state = apply_round(&state, &round);
        history.push(round.clone());
        batch.push(round);
    }

    batch
}

/// Batch generation with no prior history, so repeat checks only look within
/// the batch. The session layer passes the full history via [`generate_rounds`].
pub fn generate_all_rounds<R: Rng>(
    players: &[Player],
    courts: &CourtConfig,
    pattern: Pattern,
    fixed_pairs: &[FixedPair],
    start_index: u32,
    rng: &mut R,
) -> Vec<Round> {
    generate_rounds(players, courts, pattern, fixed_pairs, &[], start_index, rng)
}
