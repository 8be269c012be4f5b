//! Team assignment through `Game::start`, for every supported player count.

mod common;

use proptest::prelude::*;

use common::{game_with_players, proptest_config, shared_guesser, word_pool};
use rust_codenames::{GameError, GameRng, Phase, Role, Seat, TeamAssigner, TeamId};

proptest! {
    #![proptest_config(proptest_config())]

    /// Undecided players split as evenly as possible, and everyone is seated.
    #[test]
    fn prop_undecided_players_split_evenly(players in 4u32..=100, seed in any::<u64>()) {
        let mut game = game_with_players(players, seed);
        game.start(&word_pool(25)).unwrap();

        prop_assert_eq!(game.phase(), Phase::ChooseHinter);
        let mut sizes = [game.team(TeamId::FIRST).size(), game.team(TeamId::SECOND).size()];
        sizes.sort_unstable();
        let n = players as usize;
        prop_assert_eq!(sizes, [n / 2, n - n / 2]);
        prop_assert!(game.users().all(|p| matches!(game.seat_of(p), Some(Seat::Team(_)))));
        prop_assert!(game.users().all(|p| game.role_of(p).is_none()));
    }

    /// Players who asked for the same team end up together.
    #[test]
    fn prop_preferences_group_players(
        prefs in prop::collection::vec(prop::option::of(0usize..2), 4..40),
        seed in any::<u64>(),
    ) {
        let mut game = game_with_players(prefs.len() as u32, seed);
        for (player, pref) in prefs.iter().enumerate() {
            game.prefer_team(&(player as u32), *pref).unwrap();
        }

        match game.start(&word_pool(25)) {
            Ok(()) => {
                for wanted in 0..2 {
                    let seats: Vec<_> = (0..prefs.len())
                        .filter(|&p| prefs[p] == Some(wanted))
                        .map(|p| game.seat_of(&(p as u32)))
                        .collect();
                    prop_assert!(seats.windows(2).all(|w| w[0] == w[1]));
                }
                for team in TeamId::all() {
                    prop_assert!(game.team(team).size() >= 2);
                }
            }
            Err(GameError::NoGuesser(_)) => {
                prop_assert_eq!(game.phase(), Phase::Setup);
            }
            Err(other) => {
                prop_assert!(false, "unexpected error {:?}", other);
            }
        }
    }

    /// Three undecided players always get one hinter each and a shared guesser.
    #[test]
    fn prop_three_players_share_a_guesser(seed in any::<u64>()) {
        let mut game = game_with_players(3, seed);
        game.start(&word_pool(25)).unwrap();

        prop_assert_eq!(game.phase(), Phase::Hint);
        prop_assert_eq!(game.turn_number(), 1);
        let shared: Vec<_> = game.users().filter(|p| game.seat_of(p) == Some(Seat::Both)).collect();
        prop_assert_eq!(shared.len(), 1);
        prop_assert_eq!(game.role_of(shared[0]), Some(Role::Guesser));
        for team in TeamId::all() {
            prop_assert_eq!(game.team(team).hinters().len(), 1);
            prop_assert_eq!(game.team(team).size(), 2);
        }
    }
}

/// Two of three players asking for the same team cannot be satisfied.
#[test]
fn test_three_players_same_team_rejected() {
    for team in 0..2 {
        let mut game = game_with_players(3, 10);
        game.prefer_team(&0, Some(team)).unwrap();
        game.prefer_team(&2, Some(team)).unwrap();
        assert_eq!(
            game.start(&word_pool(25)),
            Err(GameError::NoGuesser(TeamId::new(team).unwrap()))
        );
        assert_eq!(game.phase(), Phase::Setup);
    }
}

/// A three-player preference makes that player a hinter, never the guesser.
#[test]
fn test_three_players_preference_makes_hinter() {
    for seed in 0..16 {
        let mut game = game_with_players(3, seed);
        game.prefer_team(&1, Some(1)).unwrap();
        game.start(&word_pool(25)).unwrap();
        assert_eq!(game.role_of(&1), Some(Role::Hinter));
        assert_ne!(shared_guesser(&game), Some(1));
    }
}

/// Opposite preferences in a three-player game: the undecided player guesses.
#[test]
fn test_three_players_opposite_preferences() {
    let mut game = game_with_players(3, 11);
    game.prefer_team(&0, Some(0)).unwrap();
    game.prefer_team(&1, Some(1)).unwrap();
    game.start(&word_pool(25)).unwrap();
    assert_eq!(shared_guesser(&game), Some(2));
    assert_eq!(game.role_of(&0), Some(Role::Hinter));
    assert_eq!(game.role_of(&1), Some(Role::Hinter));
}

/// Four players all wanting one team leaves the other with nobody to guess.
#[test]
fn test_lopsided_preferences_rejected() {
    let mut game = game_with_players(4, 12);
    for p in 0..4 {
        game.prefer_team(&p, Some(1)).unwrap();
    }
    assert!(matches!(
        game.start(&word_pool(25)),
        Err(GameError::NoGuesser(_))
    ));
}

/// Undecided players top up the smaller preference group first.
#[test]
fn test_undecided_fill_smaller_group() {
    let mut rng = GameRng::new(13);
    let t1 = Some(TeamId::SECOND);
    let prefs = [t1, t1, t1, t1, None, None, None, None];
    let teams = TeamAssigner::balanced(&prefs, &mut rng).unwrap();

    let big = if teams[TeamId::FIRST].contains(&0) { TeamId::FIRST } else { TeamId::SECOND };
    assert_eq!(teams[big].len(), 4);
    assert_eq!(teams[big.other()].len(), 4);
    assert!(teams[big.other()].iter().all(|&p| p >= 4));
}

/// Choosing hinters moves the game to the hint phase on turn 1.
#[test]
fn test_choose_hinters_then_play() {
    let mut game = game_with_players(6, 14);
    game.start(&word_pool(25)).unwrap();

    let first = *game.team(TeamId::FIRST).users().next().unwrap();
    let second = *game.team(TeamId::SECOND).users().next().unwrap();

    assert_eq!(game.choose_hinter(&first, true), Ok(false));
    assert_eq!(game.phase(), Phase::ChooseHinter);
    assert_eq!(game.choose_hinter(&first, false), Err(GameError::AlreadyChoseHinter));
    assert_eq!(game.choose_hinter(&second, false), Ok(true));

    assert_eq!(game.phase(), Phase::Hint);
    assert_eq!(game.turn_number(), 1);
    assert_eq!(game.role_of(&second), Some(Role::Hinter));
    for team in TeamId::all() {
        let roster = game.team(team);
        assert_eq!(roster.hinters().len(), 1);
        assert_eq!(roster.guessers().len(), 2);
    }
    assert_eq!(game.choose_hinter(&second, false), Err(GameError::AlreadyChoseHinter));
}

/// A random pick can land on any teammate, but never outside the team.
#[test]
fn test_random_hinter_picks_among_teammates() {
    let mut picked_someone_else = 0;
    for seed in 0..60 {
        let mut game = game_with_players(6, seed);
        game.start(&word_pool(25)).unwrap();
        let caller = *game.team(TeamId::FIRST).users().next().unwrap();
        assert_eq!(game.choose_hinter(&caller, true), Ok(false));

        let roster = game.team(TeamId::FIRST);
        assert_eq!(roster.hinters().len(), 1);
        let chosen = *roster.hinters()[0];
        assert!(roster.users().any(|p| *p == chosen));
        if chosen != caller {
            picked_someone_else += 1;
        }
    }
    assert!(picked_someone_else > 0 && picked_someone_else < 60, "{picked_someone_else}/60");
}

/// Preferences decide who plays together, not which team index they get.
#[test]
fn test_preferred_group_lands_on_either_team() {
    let mut seated = [0; 2];
    for seed in 0..40 {
        let mut game = game_with_players(6, seed);
        game.prefer_team(&0, Some(0)).unwrap();
        game.prefer_team(&1, Some(0)).unwrap();
        game.start(&word_pool(25)).unwrap();

        let Some(Seat::Team(team)) = game.seat_of(&0) else {
            panic!("player 0 was not seated on a team");
        };
        assert_eq!(game.seat_of(&1), Some(Seat::Team(team)));
        seated[team.index()] += 1;
    }
    assert!(seated.iter().all(|&n| n > 0), "{seated:?}");
}

/// Three-player seats are random: anyone can end up guessing, and a
/// preferring hinter can hint for either team.
#[test]
fn test_three_player_seats_are_shuffled() {
    let mut guessed = [0; 3];
    for seed in 0..60 {
        let mut game = game_with_players(3, seed);
        game.start(&word_pool(25)).unwrap();
        let shared = shared_guesser(&game).unwrap();
        guessed[shared as usize] += 1;
    }
    assert!(guessed.iter().all(|&n| n > 0), "{guessed:?}");

    let mut hinting_for = [0; 2];
    for seed in 0..40 {
        let mut game = game_with_players(3, seed);
        game.prefer_team(&1, Some(0)).unwrap();
        game.start(&word_pool(25)).unwrap();

        let Some(Seat::Team(team)) = game.seat_of(&1) else {
            panic!("player 1 was not seated on a team");
        };
        assert_eq!(game.role_of(&1), Some(Role::Hinter));
        hinting_for[team.index()] += 1;
    }
    assert!(hinting_for.iter().all(|&n| n > 0), "{hinting_for:?}");
}
