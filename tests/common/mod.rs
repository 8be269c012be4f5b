//! Shared helpers for integration tests.
//!
//! Logging is controlled by `TEST_LOG`, then `RUST_LOG`, defaulting to
//! `warn`. Property tests read `PROPTEST_CASES`.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_codenames::{Game, GameRng, GuessOutcome, Phase, Role, Seat, TeamId, WordRole};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(32)
        .max(1);

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        ..base
    }
}

/// `n` distinct words.
pub fn word_pool(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word{i}")).collect()
}

/// Seeded game with players `0..players` in setup.
pub fn game_with_players(players: u32, seed: u64) -> Game<u32> {
    init_logging();
    let mut game = Game::new().with_rng(GameRng::new(seed));
    for p in 0..players {
        game.add_player(p).unwrap();
    }
    game
}

/// Seeded game with players `0..players`, started, hinters chosen, ready
/// for the first hint.
pub fn playing_game(players: u32, seed: u64) -> Game<u32> {
    let mut game = game_with_players(players, seed);
    game.start(&word_pool(25)).unwrap();
    for team in TeamId::all() {
        if !game.team(team).picked_roles() {
            let first = *game.team(team).users().next().unwrap();
            game.choose_hinter(&first, false).unwrap();
        }
    }
    game
}

/// Hint 0 every turn and guess the first face-down word until someone wins.
/// Returns the game-ending guess.
pub fn play_out(game: &mut Game<u32>) -> GuessOutcome {
    loop {
        let team = game.current_team();
        let clue_giver = hinter(game, team);
        game.give_hint(&clue_giver, "clue", 0).unwrap();
        let player = guesser(game, team);
        while game.phase() == Phase::Guess {
            let word = game.public_words().unguessed[0].clone();
            let outcome = game.guess(&player, &word).unwrap();
            if outcome.is_game_over() {
                return outcome;
            }
            if outcome.turn_ends {
                break;
            }
        }
    }
}

pub fn hinter(game: &Game<u32>, team: TeamId) -> u32 {
    *game.team(team).hinters()[0]
}

/// A guesser able to guess for `team`.
pub fn guesser(game: &Game<u32>, team: TeamId) -> u32 {
    *game
        .users()
        .find(|p| {
            game.role_of(p) == Some(Role::Guesser)
                && game.seat_of(p).is_some_and(|seat| seat.is_on(team))
        })
        .unwrap()
}

/// Some unrevealed word with `role`.
pub fn unrevealed(game: &Game<u32>, role: WordRole) -> String {
    game.hinter_words(true)[&role][0].clone()
}

pub fn shared_guesser(game: &Game<u32>) -> Option<u32> {
    game.users()
        .find(|p| game.seat_of(p) == Some(Seat::Both))
        .copied()
}
