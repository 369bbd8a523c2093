//! Integration tests for schedule sessions: boundary validation, batch
//! generation, and history replay.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tennis_schedule_web::{
    apply_round, extend_session, start_session, CourtConfig, FixedPair, Group, Match, MatchKind,
    Pattern, PlayStatus, Player, Round, ScheduleError, ScheduleSession, ROUNDS_PER_BATCH,
};

fn fresh_players(n: u32) -> Vec<Player> {
    (1..=n).map(|id| Player::new(id, format!("P{id}"))).collect()
}

fn session(n: u32, singles: u32, doubles: u32) -> ScheduleSession {
    ScheduleSession::new(
        fresh_players(n),
        CourtConfig { singles, doubles },
        Pattern::Random,
        Vec::new(),
    )
    .unwrap()
}

fn pair(player1: u32, player2: u32) -> FixedPair {
    FixedPair { player1, player2 }
}

#[test]
fn new_rejects_empty_court_config() {
    let result = ScheduleSession::new(
        fresh_players(4),
        CourtConfig { singles: 0, doubles: 0 },
        Pattern::Random,
        Vec::new(),
    );
    assert!(matches!(result, Err(ScheduleError::NoCourts)));
}

#[test]
fn new_rejects_undersized_pool() {
    let result = ScheduleSession::new(
        fresh_players(4),
        CourtConfig { singles: 1, doubles: 1 },
        Pattern::Random,
        Vec::new(),
    );
    assert!(matches!(
        result,
        Err(ScheduleError::NotEnoughPlayers { required: 6, available: 4 })
    ));
}

#[test]
fn new_rejects_more_pairs_than_doubles_courts() {
    let result = ScheduleSession::new(
        fresh_players(8),
        CourtConfig { singles: 0, doubles: 1 },
        Pattern::Random,
        vec![pair(1, 2), pair(3, 4)],
    );
    assert!(matches!(
        result,
        Err(ScheduleError::TooManyFixedPairs { pairs: 2, doubles_courts: 1 })
    ));
}

#[test]
fn new_rejects_player_in_two_pairs() {
    let result = ScheduleSession::new(
        fresh_players(8),
        CourtConfig { singles: 0, doubles: 2 },
        Pattern::Random,
        vec![pair(1, 2), pair(2, 3)],
    );
    assert!(matches!(result, Err(ScheduleError::PairPlayerReused(2))));
}

#[test]
fn new_rejects_pair_of_one_player() {
    let result = ScheduleSession::new(
        fresh_players(4),
        CourtConfig { singles: 0, doubles: 1 },
        Pattern::Random,
        vec![pair(3, 3)],
    );
    assert!(matches!(result, Err(ScheduleError::PairPlayerReused(3))));
}

#[test]
fn new_rejects_pair_referencing_unknown_player() {
    let result = ScheduleSession::new(
        fresh_players(4),
        CourtConfig { singles: 0, doubles: 1 },
        Pattern::Random,
        vec![pair(3, 9)],
    );
    assert!(matches!(result, Err(ScheduleError::PlayerNotFound(9))));
}

#[test]
fn start_generates_one_batch() {
    let mut s = session(4, 0, 1);
    let mut rng = StdRng::seed_from_u64(1);
    start_session(&mut s, &mut rng).unwrap();
    assert_eq!(s.rounds.len(), ROUNDS_PER_BATCH);
    assert_eq!(s.rounds.iter().map(|r| r.index).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(s.last_round_index(), 3);
}

#[test]
fn start_twice_is_rejected() {
    let mut s = session(4, 0, 1);
    let mut rng = StdRng::seed_from_u64(1);
    start_session(&mut s, &mut rng).unwrap();
    assert!(matches!(
        start_session(&mut s, &mut rng),
        Err(ScheduleError::AlreadyStarted)
    ));
}

#[test]
fn extend_requires_a_started_session() {
    let mut s = session(4, 0, 1);
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        extend_session(&mut s, &mut rng),
        Err(ScheduleError::NotStarted)
    ));
}

#[test]
fn extend_appends_the_next_batch() {
    let mut s = session(6, 1, 1);
    let mut rng = StdRng::seed_from_u64(5);
    start_session(&mut s, &mut rng).unwrap();
    extend_session(&mut s, &mut rng).unwrap();
    assert_eq!(s.rounds.len(), 2 * ROUNDS_PER_BATCH);
    assert_eq!(
        s.rounds.iter().map(|r| r.index).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn apply_round_updates_exactly_one_counter_per_player() {
    let players = fresh_players(4);
    let round = Round {
        index: 1,
        matches: vec![Match {
            court_index: 1,
            kind: MatchKind::Singles,
            players: vec![1, 2],
        }],
        resting: vec![3, 4],
    };

    let updated = apply_round(&players, &round);

    for p in &updated[..2] {
        assert_eq!(p.play_count, 1);
        assert_eq!(p.rest_count, 0);
        assert_eq!(p.last_status, PlayStatus::Played);
    }
    for p in &updated[2..] {
        assert_eq!(p.play_count, 0);
        assert_eq!(p.rest_count, 1);
        assert_eq!(p.last_status, PlayStatus::Rested);
    }
    for (before, after) in players.iter().zip(&updated) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.name, after.name);
        assert_eq!(before.group, after.group);
    }
    // Value semantics: the input registry is untouched.
    assert!(players.iter().all(|p| p.play_count == 0 && p.rest_count == 0));
}

#[test]
fn replayed_state_matches_incremental_application() {
    let mut s = session(8, 1, 1);
    let mut rng = StdRng::seed_from_u64(42);
    start_session(&mut s, &mut rng).unwrap();
    extend_session(&mut s, &mut rng).unwrap();

    let mut incremental = fresh_players(8);
    for round in &s.rounds {
        incremental = apply_round(&incremental, round);
    }
    assert_eq!(s.current_players(), incremental);
}

#[test]
fn identical_seeds_reproduce_identical_sessions() {
    let build = || {
        let players: Vec<Player> = (1..=6)
            .map(|id| {
                let group = if id <= 3 { Group::A } else { Group::B };
                Player::with_group(id, format!("P{id}"), group)
            })
            .collect();
        ScheduleSession::new(
            players,
            CourtConfig { singles: 1, doubles: 1 },
            Pattern::Separate,
            Vec::new(),
        )
        .unwrap()
    };

    let mut a = build();
    let mut b = build();
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    start_session(&mut a, &mut rng_a).unwrap();
    start_session(&mut b, &mut rng_b).unwrap();
    extend_session(&mut a, &mut rng_a).unwrap();
    extend_session(&mut b, &mut rng_b).unwrap();
    assert_eq!(a.rounds, b.rounds);
}

#[test]
fn summaries_account_for_every_round() {
    let mut s = session(6, 0, 1);
    let mut rng = StdRng::seed_from_u64(11);
    start_session(&mut s, &mut rng).unwrap();

    for summary in s.player_summaries() {
        assert_eq!(summary.play_count + summary.rest_count, ROUNDS_PER_BATCH as u32);
    }
}

#[test]
fn full_participation_reads_as_one_hundred_percent() {
    let mut s = session(4, 0, 1);
    let mut rng = StdRng::seed_from_u64(2);
    start_session(&mut s, &mut rng).unwrap();

    for summary in s.player_summaries() {
        assert_eq!(summary.play_count, 3);
        assert_eq!(summary.rest_count, 0);
        assert_eq!(summary.participation_pct, 100);
    }
}
