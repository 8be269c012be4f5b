//! The game state machine.
//!
//! ```text
//! Setup -> ChooseHinter -> Hint <-> Guess -> GameOver
//! ```
//!
//! Three-player games skip `ChooseHinter`: the assigner already fixed every
//! role.
//!
//! ## Validation
//!
//! Every mutating operation checks all of its preconditions before touching
//! any state, so a rejected action leaves the game exactly as it was. Actions
//! taken by a hinter or guesser are checked in a fixed order: membership,
//! team, role, then phase.
//!
//! Once the game is over every mutation fails with `WrongTime`.
//!
//! ## Example
//!
//! ```
//! use rust_codenames::{Game, GameRng, Phase};
//!
//! let mut game: Game<&str> = Game::new().with_rng(GameRng::new(7));
//! for name in ["ann", "bob", "cid", "dee"] {
//!     game.add_player(name).unwrap();
//! }
//! let pool: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
//! game.start(&pool).unwrap();
//! assert_eq!(game.phase(), Phase::ChooseHinter);
//! ```

use tracing::{debug, error, info};

use super::outcome::{GuessOutcome, TeamPreferences};
use crate::core::{
    GameConfig, GameError, GameRng, InvariantViolation, Phase, Result, Role, Seat, TeamId, TeamMap,
};
use crate::players::{Identity, Player, Team, TeamAssigner};
use crate::registry::GameId;
use crate::turn::{GuessAllowance, Hint, HintNumber, RequestedNumber};
use crate::words::{Board, HinterWords, PublicWords, WordRole};

/// One game.
#[derive(Clone, Debug)]
pub struct Game<I> {
    id: Option<GameId>,
    channel_name: Option<String>,
    config: GameConfig,
    rng: GameRng,
    players: Vec<Player<I>>,
    board: Board,
    scores: TeamMap<usize>,
    turn_number: u32,
    current_team: TeamId,
    phase: Phase,
    /// Every hint given, oldest first.
    hints: Vec<Hint>,
    /// Index into `hints` while a team is guessing.
    active_hint: Option<usize>,
    winning_team: Option<TeamId>,
}

impl<I: Identity> Default for Game<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Identity> Game<I> {
    /// New game with standard rules and an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: None,
            channel_name: None,
            config: GameConfig::default(),
            rng: GameRng::from_entropy(),
            players: Vec::new(),
            board: Board::default(),
            scores: TeamMap::with_default(),
            turn_number: 0,
            current_team: TeamId::FIRST,
            phase: Phase::Setup,
            hints: Vec::new(),
            active_hint: None,
            winning_team: None,
        }
    }

    /// New game with custom rules.
    pub fn with_config(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new_unchecked(config))
    }

    /// `config` must already be validated.
    pub(crate) fn new_unchecked(config: GameConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Use a specific RNG (e.g. a seeded one for reproducible games).
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Attach the registry id and channel this game is played in.
    #[must_use]
    pub fn with_label(mut self, id: GameId, channel_name: impl Into<String>) -> Self {
        self.id = Some(id);
        self.channel_name = Some(channel_name.into());
        self
    }

    // === Membership ===

    /// Add a player. Returns `false` if they were already in the game.
    pub fn add_player(&mut self, identity: I) -> Result<bool> {
        self.ensure_phase(Phase::Setup)?;
        if self.position(&identity).is_some() {
            return Ok(false);
        }
        if self.players.len() >= self.config.max_players {
            return Err(GameError::GameFull {
                max: self.config.max_players,
            });
        }
        debug!(game = ?self.id, player = ?identity, players = self.players.len() + 1, "player joined");
        self.players.push(Player::new(identity));
        Ok(true)
    }

    /// Remove a player. Returns `false` if they were not in the game.
    pub fn remove_player(&mut self, identity: &I) -> Result<bool> {
        self.ensure_phase(Phase::Setup)?;
        let Some(index) = self.position(identity) else {
            return Ok(false);
        };
        self.players.remove(index);
        debug!(game = ?self.id, player = ?identity, players = self.players.len(), "player left");
        Ok(true)
    }

    /// Hand an existing player's place to someone new.
    ///
    /// Seat, role and preference carry over. Allowed in every phase until the
    /// game is over. Returns `false` if `replaced` is not playing or
    /// `replacing` already is.
    pub fn replace_player(&mut self, replaced: &I, replacing: I) -> Result<bool> {
        if self.phase == Phase::GameOver {
            return Err(GameError::WrongTime(Phase::Setup));
        }
        if self.position(&replacing).is_some() {
            return Ok(false);
        }
        let Some(index) = self.position(replaced) else {
            return Ok(false);
        };
        debug!(game = ?self.id, replaced = ?replaced, replacing = ?replacing, "player replaced");
        self.players[index].set_identity(replacing);
        Ok(true)
    }

    /// Set (or with `None`, clear) the team a player would like to join.
    pub fn prefer_team(&mut self, identity: &I, team: Option<usize>) -> Result<()> {
        self.ensure_phase(Phase::Setup)?;
        let index = self.position(identity).ok_or(GameError::NotInGame)?;
        let team = team
            .map(|t| TeamId::new(t).ok_or(GameError::InvalidTeam(t)))
            .transpose()?;
        debug!(game = ?self.id, player = ?identity, team = ?team, "team preference set");
        self.players[index].set_preference(team);
        Ok(())
    }

    // === Setup ===

    /// Deal the board from `pool` and split the players into teams.
    ///
    /// On error nothing changes and the game stays in `Setup`.
    pub fn start<S: AsRef<str>>(&mut self, pool: &[S]) -> Result<()> {
        self.ensure_phase(Phase::Setup)?;
        if self.players.len() < self.config.min_players {
            return Err(GameError::NotEnoughPlayers {
                min: self.config.min_players,
            });
        }

        let board = Board::deal(pool, &self.config, &mut self.rng)?;
        let preferences: Vec<_> = self.players.iter().map(Player::preference).collect();
        let assignment = TeamAssigner::assign(&preferences, &mut self.rng)?;

        enforce(assignment.apply(&mut self.players));
        self.board = board;
        if assignment.needs_hinters() {
            self.phase = Phase::ChooseHinter;
        } else {
            self.begin_play();
        }

        info!(
            game = ?self.id,
            players = self.players.len(),
            team_sizes = ?TeamId::all().map(|t| self.team(t).size()).collect::<Vec<_>>(),
            phase = %self.phase,
            "game started"
        );
        Ok(())
    }

    /// Pick the caller's team's hinter: the caller, or with `random` any
    /// member of the team. Everyone else on the team becomes a guesser.
    ///
    /// Returns whether both teams have now picked.
    pub fn choose_hinter(&mut self, identity: &I, random: bool) -> Result<bool> {
        self.ensure_live(Phase::ChooseHinter)?;
        let index = self.position(identity).ok_or(GameError::NotInGame)?;
        let team = match self.players[index].seat() {
            Some(Seat::Team(team)) => Some(team),
            _ => None,
        };
        if let Some(team) = team {
            if self.team_picked(team) {
                return Err(GameError::AlreadyChoseHinter);
            }
        }
        let Some(team) = team.filter(|_| self.phase == Phase::ChooseHinter) else {
            return Err(GameError::WrongTime(Phase::ChooseHinter));
        };

        let members: Vec<usize> = (0..self.players.len())
            .filter(|&i| self.players[i].is_on(team))
            .collect();
        let hinter = if random {
            self.rng.choose(&members).copied().unwrap_or(index)
        } else {
            index
        };
        for &i in &members {
            let role = if i == hinter { Role::Hinter } else { Role::Guesser };
            enforce(self.players[i].assign_role(role));
        }
        debug!(
            game = ?self.id,
            %team,
            hinter = ?self.players[hinter].identity(),
            random,
            "hinter chosen"
        );

        let all_picked = TeamId::all().all(|t| self.team_picked(t));
        if all_picked {
            self.begin_play();
            info!(game = ?self.id, "all hinters chosen");
        }
        Ok(all_picked)
    }

    // === Play ===

    /// Give a hint for the current team.
    ///
    /// `number` must be `unlimited` or an integer between 0 and the number
    /// of words the team still has to find.
    pub fn give_hint(
        &mut self,
        identity: &I,
        word: impl Into<String>,
        number: impl Into<RequestedNumber>,
    ) -> Result<()> {
        self.check_role(identity, Role::Hinter)?;
        let number = number.into().resolve(self.words_remaining(self.current_team))?;

        let hint = Hint::new(self.current_team, word, number);
        debug!(game = ?self.id, team = %self.current_team, hint = %hint, "hint given");
        self.hints.push(hint);
        self.active_hint = Some(self.hints.len() - 1);
        self.phase = Phase::Guess;
        Ok(())
    }

    /// Guess a word for the current team.
    pub fn guess(&mut self, identity: &I, word: &str) -> Result<GuessOutcome> {
        self.check_role(identity, Role::Guesser)?;
        let target = self.board.get(word).ok_or(GameError::WordNotFound)?;
        if target.is_revealed() {
            return Err(GameError::WordAlreadyGuessed);
        }
        let text = target.text().to_owned();

        let role = enforce(self.board.reveal(&text));
        let hint = self.active_hint_mut();
        enforce(hint.record_guess(&text, role));
        let exhausted = hint.guesses_remaining().is_exhausted();
        let team = self.current_team;
        debug!(game = ?self.id, %team, word = %text, %role, "word guessed");

        let outcome = match role {
            WordRole::Assassin => {
                self.finish(team.other());
                GuessOutcome {
                    role,
                    correct: false,
                    turn_ends: true,
                    winner: Some(team.other()),
                }
            }
            WordRole::Neutral => {
                self.end_turn();
                GuessOutcome {
                    role,
                    correct: false,
                    turn_ends: true,
                    winner: None,
                }
            }
            WordRole::Team(owner) => {
                self.scores[owner] += 1;
                let turn_ends = owner != team || exhausted;
                let winner = self.check_victory(owner);
                if turn_ends && winner.is_none() {
                    self.end_turn();
                }
                GuessOutcome {
                    role,
                    correct: owner == team,
                    turn_ends,
                    winner,
                }
            }
        };
        Ok(outcome)
    }

    /// Stop guessing. The team must have made at least one guess.
    pub fn no_guess(&mut self, identity: &I) -> Result<()> {
        self.check_role(identity, Role::Guesser)?;
        if !self.guessed_this_turn() {
            return Err(GameError::MustGuess);
        }
        debug!(game = ?self.id, team = %self.current_team, "team stopped guessing");
        self.end_turn();
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> Option<GameId> {
        self.id
    }

    #[must_use]
    pub fn channel_name(&self) -> Option<&str> {
        self.channel_name.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn counter, starting at 1 once play begins (0 before).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.current_team
    }

    #[must_use]
    pub fn other_team(&self) -> TeamId {
        self.current_team.other()
    }

    /// The hint the current team is guessing against.
    #[must_use]
    pub fn current_hint(&self) -> Option<&Hint> {
        self.active_hint.map(|i| &self.hints[i])
    }

    #[must_use]
    pub fn current_hint_word(&self) -> Option<&str> {
        self.current_hint().map(Hint::word)
    }

    #[must_use]
    pub fn current_hint_number(&self) -> Option<HintNumber> {
        self.current_hint().map(Hint::number)
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> Option<GuessAllowance> {
        self.current_hint().map(Hint::guesses_remaining)
    }

    #[must_use]
    pub fn guessed_this_turn(&self) -> bool {
        self.current_hint().is_some_and(Hint::guessed_this_turn)
    }

    /// Every hint given so far, oldest first.
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    /// Both teams' rosters. Empty before the game starts.
    #[must_use]
    pub fn teams(&self) -> TeamMap<Team<I>> {
        TeamMap::new(|team| self.team(team))
    }

    #[must_use]
    pub fn team(&self, team: TeamId) -> Team<I> {
        Team::from_players(team, &self.players)
    }

    #[must_use]
    pub fn team_preferences(&self) -> TeamPreferences<I> {
        let mut prefs = TeamPreferences {
            teams: TeamMap::with_default(),
            undecided: Vec::new(),
        };
        for player in &self.players {
            let identity = player.identity().clone();
            match player.preference() {
                Some(team) => prefs.teams[team].push(identity),
                None => prefs.undecided.push(identity),
            }
        }
        prefs
    }

    #[must_use]
    pub fn role_of(&self, identity: &I) -> Option<Role> {
        self.player(identity).and_then(Player::role)
    }

    #[must_use]
    pub fn seat_of(&self, identity: &I) -> Option<Seat> {
        self.player(identity).and_then(Player::seat)
    }

    /// Words `team` has found so far.
    #[must_use]
    pub fn score(&self, team: TeamId) -> usize {
        self.scores[team]
    }

    /// Words `team` still has to find.
    #[must_use]
    pub fn words_remaining(&self, team: TeamId) -> usize {
        self.config.target(team).saturating_sub(self.scores[team])
    }

    #[must_use]
    pub fn winning_team(&self) -> Option<TeamId> {
        self.winning_team
    }

    /// Everyone on the winning team, shared guesser included.
    #[must_use]
    pub fn winning_players(&self) -> Option<Vec<I>> {
        self.winning_team
            .map(|team| self.team(team).users().cloned().collect())
    }

    /// Identities of every player, in join order.
    pub fn users(&self) -> impl Iterator<Item = &I> {
        self.players.iter().map(Player::identity)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn contains(&self, identity: &I) -> bool {
        self.position(identity).is_some()
    }

    /// What every player may see of the board.
    #[must_use]
    pub fn public_words(&self) -> PublicWords {
        self.board.public_words()
    }

    /// Every word's secret role. Only hinters should be shown this.
    #[must_use]
    pub fn hinter_words(&self, exclude_revealed: bool) -> HinterWords {
        self.board.hinter_words(exclude_revealed)
    }

    /// [`Game::hinter_words`], refused to anyone who is not a hinter.
    pub fn hinter_words_for(&self, identity: &I, exclude_revealed: bool) -> Result<HinterWords> {
        let player = self.player(identity).ok_or(GameError::NotInGame)?;
        if player.role() != Some(Role::Hinter) {
            return Err(GameError::WrongRole(Role::Hinter));
        }
        Ok(self.hinter_words(exclude_revealed))
    }

    // === Internals ===

    fn position(&self, identity: &I) -> Option<usize> {
        self.players.iter().position(|p| p.identity() == identity)
    }

    fn player(&self, identity: &I) -> Option<&Player<I>> {
        self.players.iter().find(|p| p.identity() == identity)
    }

    fn ensure_live(&self, expected: Phase) -> Result<()> {
        if self.phase == Phase::GameOver {
            return Err(GameError::WrongTime(expected));
        }
        Ok(())
    }

    fn ensure_phase(&self, expected: Phase) -> Result<()> {
        if self.phase != expected {
            return Err(GameError::WrongTime(expected));
        }
        Ok(())
    }

    /// Checks for hinter and guesser actions, in reporting order.
    fn check_role(&self, identity: &I, role: Role) -> Result<()> {
        let expected = role.acting_phase();
        self.ensure_live(expected)?;
        let player = self.player(identity).ok_or(GameError::NotInGame)?;
        if !player.is_on(self.current_team) {
            return Err(GameError::WrongTeam);
        }
        if player.role() != Some(role) {
            return Err(GameError::WrongRole(role));
        }
        self.ensure_phase(expected)
    }

    fn team_picked(&self, team: TeamId) -> bool {
        self.players
            .iter()
            .filter(|p| p.is_on(team))
            .all(|p| p.role().is_some())
    }

    fn begin_play(&mut self) {
        self.phase = Phase::Hint;
        self.turn_number = 1;
    }

    fn active_hint_mut(&mut self) -> &mut Hint {
        match self.active_hint {
            Some(i) => &mut self.hints[i],
            None => fatal(InvariantViolation::NoActiveHint),
        }
    }

    /// The team that just scored wins once it reaches its target.
    fn check_victory(&mut self, team: TeamId) -> Option<TeamId> {
        if self.scores[team] >= self.config.target(team) {
            self.finish(team);
            Some(team)
        } else {
            None
        }
    }

    fn end_turn(&mut self) {
        if self.phase != Phase::Guess {
            fatal(InvariantViolation::PhaseMismatch {
                expected: Phase::Guess,
                actual: self.phase,
            });
        }
        self.turn_number += 1;
        self.current_team = self.current_team.other();
        self.active_hint = None;
        self.phase = Phase::Hint;
        info!(game = ?self.id, turn = self.turn_number, team = %self.current_team, "turn started");
    }

    fn finish(&mut self, winner: TeamId) {
        self.winning_team = Some(winner);
        self.active_hint = None;
        self.phase = Phase::GameOver;
        info!(
            game = ?self.id,
            %winner,
            scores = ?self.scores,
            turn = self.turn_number,
            "game over"
        );
    }
}

/// Unwrap an internal contract check. A violation here is a bug in the game
/// itself, so it is logged and aborts the operation.
fn enforce<T>(result: std::result::Result<T, InvariantViolation>) -> T {
    match result {
        Ok(value) => value,
        Err(violation) => fatal(violation),
    }
}

#[track_caller]
fn fatal(violation: InvariantViolation) -> ! {
    error!(%violation, "game invariant violated");
    panic!("game invariant violated: {violation}");
}
