//! The game engine.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{
    Board, CellIndex, GameConfig, GameRng, GameRngState, Line, Mark, MarkAssignment, MoveRecord,
    Participant, RoundId, RoundState, RoundStatus,
};
use crate::display;
use crate::error::ConfigError;
use crate::policy::{self, MovePolicy};
use crate::rules::{self, Verdict};
use crate::schedule::ThinkTicket;

/// Why a move attempt changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Index is not one of the nine cells.
    OutOfRange,
    /// Target cell already holds a mark.
    Occupied,
    /// Round is already won or drawn.
    RoundOver,
    /// Actor is not the turn owner.
    NotYourTurn,
    /// Ticket was issued for an earlier round.
    StaleTicket,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::OutOfRange => write!(f, "cell is off the board"),
            Rejection::Occupied => write!(f, "cell is already taken"),
            Rejection::RoundOver => write!(f, "round is over"),
            Rejection::NotYourTurn => write!(f, "not this participant's turn"),
            Rejection::StaleTicket => write!(f, "ticket belongs to an earlier round"),
        }
    }
}

/// Result of a move attempt.
///
/// Rejections are ordinary outcomes, not errors; callers are free to
/// ignore them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move applied; carries the round status after evaluation.
    Accepted(RoundStatus),
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    #[must_use]
    pub fn rejection(self) -> Option<Rejection> {
        match self {
            MoveOutcome::Rejected(reason) => Some(reason),
            MoveOutcome::Accepted(_) => None,
        }
    }
}

/// Round plus RNG position, enough to resume a game exactly.
///
/// The move policy and config are not captured; pass the config back to
/// [`Game::restore`] and re-apply any custom policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round: RoundState,
    pub rng: GameRngState,
}

/// A human-versus-computer game.
///
/// Owns the current round, the RNG and the computer's move policy. All
/// mutation goes through [`attempt_move`](Game::attempt_move),
/// [`computer_select`](Game::computer_select) and [`reset`](Game::reset).
///
/// ```
/// use tictac::core::{GameConfig, Participant};
/// use tictac::engine::Game;
///
/// let mut game = Game::new(GameConfig::new().with_seed(42).instant()).unwrap();
/// if let Some(ticket) = game.pending_computer_move() {
///     game.computer_select(ticket);
/// }
/// assert_eq!(game.turn_owner(), Participant::Human);
///
/// let cell = game.board().empty_cells()[0];
/// assert!(game.attempt_move(cell.get(), Participant::Human).is_accepted());
/// ```
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    policy: Box<dyn MovePolicy>,
    state: RoundState,
}

impl Game {
    /// Create a game and start its first round.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("new game with seed {}", rng.seed());

        let state = Self::roll_round(RoundId::default(), &mut rng);
        let policy = policy::build(config.policy);

        Ok(Self {
            config,
            rng,
            policy,
            state,
        })
    }

    /// Create a game that continues from an explicit round state.
    ///
    /// The RNG is still seeded from `config`; only the round is taken as given.
    pub fn from_round(config: GameConfig, state: RoundState) -> Result<Self, ConfigError> {
        let mut game = Self::new(config)?;
        game.state = state;
        Ok(game)
    }

    /// Resume a game from a snapshot.
    ///
    /// Future coin flips and computer moves match the game the snapshot
    /// was taken from.
    pub fn restore(config: GameConfig, snapshot: &GameSnapshot) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::from_state(&snapshot.rng);
        let policy = policy::build(config.policy);
        info!("restored game at {} with seed {}", snapshot.round.round, rng.seed());

        Ok(Self {
            config,
            rng,
            policy,
            state: snapshot.round.clone(),
        })
    }

    /// Replace the computer's move policy.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn MovePolicy>) -> Self {
        self.policy = policy;
        self
    }

    fn roll_round(round: RoundId, rng: &mut GameRng) -> RoundState {
        let human_mark = if rng.coin_flip() { Mark::X } else { Mark::O };
        let turn_owner = if rng.coin_flip() {
            Participant::Human
        } else {
            Participant::Computer
        };

        let marks = MarkAssignment::new(human_mark);
        info!(
            "{round} starts: human plays {}, computer plays {}, {turn_owner} moves first",
            marks.human(),
            marks.computer()
        );
        RoundState::new(round, marks, turn_owner)
    }

    // === Operations ===

    /// Try to write `actor`'s mark at `index`.
    ///
    /// Illegal attempts (off the board, occupied cell, finished round,
    /// wrong actor) leave the game untouched and return a rejection.
    pub fn attempt_move(&mut self, index: usize, actor: Participant) -> MoveOutcome {
        match self.check_move(index, actor) {
            Ok(cell) => {
                let mark = self.state.marks.mark_of(actor);
                let sequence = self.state.history.len() as u8;

                self.state.board.set(cell, mark);
                self.state.history.push(MoveRecord::new(actor, mark, cell, sequence));
                debug!("{actor} plays {mark} at {cell}");

                MoveOutcome::Accepted(self.evaluate_round())
            }
            Err(reason) => {
                debug!("rejected move by {actor} at index {index}: {reason}");
                MoveOutcome::Rejected(reason)
            }
        }
    }

    fn check_move(&self, index: usize, actor: Participant) -> Result<CellIndex, Rejection> {
        if self.state.status.is_terminal() {
            return Err(Rejection::RoundOver);
        }
        if actor != self.state.turn_owner {
            return Err(Rejection::NotYourTurn);
        }
        let cell = CellIndex::new(index).ok_or(Rejection::OutOfRange)?;
        if !self.state.board.is_empty_at(cell) {
            return Err(Rejection::Occupied);
        }
        Ok(cell)
    }

    /// Evaluate the board and advance the round.
    ///
    /// A completed line wins and a full board draws; otherwise the turn
    /// passes to the other participant. A finished round is returned
    /// as-is.
    pub fn evaluate_round(&mut self) -> RoundStatus {
        if self.state.status.is_terminal() {
            return self.state.status;
        }

        match rules::judge(&self.state.board) {
            Verdict::Won { mark, line } => {
                self.state.status = RoundStatus::Won { mark, line };
                info!("{} won by {} on {line:?}", self.state.round, self.state.owner_of(mark));
            }
            Verdict::Drawn => {
                self.state.status = RoundStatus::Drawn;
                info!("{} drawn", self.state.round);
            }
            Verdict::Ongoing => {
                self.state.turn_owner = self.state.turn_owner.other();
            }
        }

        self.state.status
    }

    /// Ticket for the computer's next move, if the computer owns the turn.
    #[must_use]
    pub fn pending_computer_move(&self) -> Option<ThinkTicket> {
        (self.state.status.is_in_progress() && self.state.turn_owner == Participant::Computer)
            .then(|| ThinkTicket::new(self.state.round, self.config.think_delay))
    }

    /// Play the computer's move for `ticket`.
    ///
    /// Refused without effect if the ticket is from an earlier round, the
    /// round is over, or the human owns the turn.
    pub fn computer_select(&mut self, ticket: ThinkTicket) -> MoveOutcome {
        if ticket.round != self.state.round {
            warn!("dropping computer move for {}; current is {}", ticket.round, self.state.round);
            return MoveOutcome::Rejected(Rejection::StaleTicket);
        }
        if self.state.status.is_terminal() {
            return MoveOutcome::Rejected(Rejection::RoundOver);
        }
        if self.state.turn_owner != Participant::Computer {
            return MoveOutcome::Rejected(Rejection::NotYourTurn);
        }

        match self.policy.select(&self.state.board, &mut self.rng) {
            Some(cell) => self.attempt_move(cell.get(), Participant::Computer),
            None => MoveOutcome::Rejected(Rejection::RoundOver),
        }
    }

    /// Start a new round: empty board, fresh marks and first mover.
    ///
    /// Any ticket issued before the reset becomes stale.
    pub fn reset(&mut self) {
        let next = self.state.round.next();
        self.state = Self::roll_round(next, &mut self.rng);
    }

    /// Capture the round and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    // === Views ===

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.state.status
    }

    #[must_use]
    pub fn turn_owner(&self) -> Participant {
        self.state.turn_owner
    }

    #[must_use]
    pub fn marks(&self) -> MarkAssignment {
        self.state.marks
    }

    #[must_use]
    pub fn round_id(&self) -> RoundId {
        self.state.round
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.state.history
    }

    /// Cells to highlight after a win.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        self.state.status.winning_line()
    }

    #[must_use]
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&index))
    }

    /// Status line: whose turn it is, or the result.
    #[must_use]
    pub fn status_text(&self) -> String {
        display::status_text(&self.state)
    }

    /// Seed driving this game's randomness.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("seed", &self.rng.seed())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> GameConfig {
        GameConfig::new().with_seed(42).instant()
    }

    /// Human plays X and moves first on `pattern`.
    fn game_with(pattern: &str, turn_owner: Participant) -> Game {
        let state = RoundState::new(RoundId(0), MarkAssignment::new(Mark::X), turn_owner)
            .with_board(pattern.parse().unwrap());
        Game::from_round(config(), state).unwrap()
    }

    #[test]
    fn test_new_game_starts_empty() {
        let game = Game::new(config()).unwrap();

        assert_eq!(game.board(), &Board::empty());
        assert_eq!(game.status(), RoundStatus::InProgress);
        assert_eq!(game.round_id(), RoundId(0));
        assert!(game.history().is_empty());
        assert_eq!(game.seed(), 42);
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        let result = Game::new(GameConfig::new().with_think_delay(Duration::from_secs(60)));
        assert!(matches!(result, Err(ConfigError::ThinkDelayTooLong { .. })));
    }

    #[test]
    fn test_accepted_move_writes_mark_and_alternates() {
        let mut game = game_with("_________", Participant::Human);

        let outcome = game.attempt_move(4, Participant::Human);

        assert_eq!(outcome, MoveOutcome::Accepted(RoundStatus::InProgress));
        assert_eq!(game.board().to_string(), "____X____");
        assert_eq!(game.turn_owner(), Participant::Computer);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].sequence, 0);
    }

    #[test]
    fn test_rejections() {
        let mut game = game_with("X________", Participant::Human);

        assert_eq!(
            game.attempt_move(0, Participant::Human),
            MoveOutcome::Rejected(Rejection::Occupied)
        );
        assert_eq!(
            game.attempt_move(9, Participant::Human),
            MoveOutcome::Rejected(Rejection::OutOfRange)
        );
        assert_eq!(
            game.attempt_move(1, Participant::Computer),
            MoveOutcome::Rejected(Rejection::NotYourTurn)
        );

        assert_eq!(game.board().to_string(), "X________");
        assert_eq!(game.turn_owner(), Participant::Human);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_winning_move_ends_round() {
        let mut game = game_with("XX_OO____", Participant::Human);

        let outcome = game.attempt_move(2, Participant::Human);

        let won = RoundStatus::Won { mark: Mark::X, line: [0, 1, 2] };
        assert_eq!(outcome, MoveOutcome::Accepted(won));
        assert_eq!(game.turn_owner(), Participant::Human);
        assert_eq!(game.winning_line(), Some([0, 1, 2]));
        assert!(game.is_winning_cell(1));
        assert!(!game.is_winning_cell(3));
        assert_eq!(game.status_text(), "X wins");

        assert_eq!(
            game.attempt_move(5, Participant::Human),
            MoveOutcome::Rejected(Rejection::RoundOver)
        );
        assert_eq!(game.pending_computer_move(), None);
    }

    #[test]
    fn test_evaluate_round_is_idempotent_once_terminal() {
        let mut game = game_with("XOXXOOOXX", Participant::Human);

        assert_eq!(game.evaluate_round(), RoundStatus::Drawn);
        assert_eq!(game.evaluate_round(), RoundStatus::Drawn);
        assert_eq!(game.turn_owner(), Participant::Human);
        assert_eq!(game.status_text(), "Draw");
    }

    #[test]
    fn test_pending_computer_move() {
        let game = game_with("_________", Participant::Computer);
        let ticket = game.pending_computer_move().unwrap();

        assert_eq!(ticket.round, RoundId(0));
        assert_eq!(ticket.delay, Duration::ZERO);
        assert_eq!(game_with("_________", Participant::Human).pending_computer_move(), None);
    }

    #[test]
    fn test_computer_select_plays_empty_cell() {
        let mut game = game_with("X_XOO_XO_", Participant::Computer);
        let ticket = game.pending_computer_move().unwrap();

        let outcome = game.computer_select(ticket);

        assert!(outcome.is_accepted());
        assert_eq!(game.board().filled_count(), 7);
        assert_eq!(game.history()[0].actor, Participant::Computer);
        assert_eq!(game.history()[0].mark, Mark::O);
    }

    #[test]
    fn test_computer_select_refuses_on_human_turn() {
        let mut game = game_with("_________", Participant::Human);
        let ticket = ThinkTicket::new(RoundId(0), Duration::ZERO);

        assert_eq!(game.computer_select(ticket).rejection(), Some(Rejection::NotYourTurn));
        assert_eq!(game.board().filled_count(), 0);
    }

    #[test]
    fn test_reset_bumps_round_and_clears_board() {
        let mut game = game_with("XX_OO____", Participant::Human);
        game.attempt_move(2, Participant::Human);

        game.reset();

        assert_eq!(game.round_id(), RoundId(1));
        assert_eq!(game.board(), &Board::empty());
        assert_eq!(game.status(), RoundStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_stale_ticket_is_refused_after_reset() {
        let mut game = game_with("_________", Participant::Computer);
        let stale = game.pending_computer_move().unwrap();

        game.reset();
        let before = game.round().clone();

        assert_eq!(game.computer_select(stale).rejection(), Some(Rejection::StaleTicket));
        assert_eq!(game.round(), &before);
    }

    #[test]
    fn test_custom_policy() {
        struct LowestCell;

        impl MovePolicy for LowestCell {
            fn select(&self, board: &Board, _rng: &mut GameRng) -> Option<CellIndex> {
                board.empty_cells().first().copied()
            }
        }

        let mut game =
            game_with("X________", Participant::Computer).with_policy(Box::new(LowestCell));
        let ticket = game.pending_computer_move().unwrap();
        game.computer_select(ticket);

        assert_eq!(game.board().to_string(), "XO_______");
    }

    #[test]
    fn test_restored_game_continues_identically() {
        let mut original = Game::new(config()).unwrap();
        for _ in 0..3 {
            original.reset();
        }
        let snapshot = original.snapshot();
        let mut restored = Game::restore(config(), &snapshot).unwrap();
        assert_eq!(restored.round(), original.round());

        for _ in 0..5 {
            if let Some(ticket) = original.pending_computer_move() {
                original.computer_select(ticket);
            }
            if let Some(ticket) = restored.pending_computer_move() {
                restored.computer_select(ticket);
            }
            assert_eq!(restored.round(), original.round());

            original.reset();
            restored.reset();
            assert_eq!(restored.round(), original.round());
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let mut game = game_with("X___O____", Participant::Human);
        game.attempt_move(8, Participant::Human);

        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
        assert_eq!(deserialized.round.board.to_string(), "X___O___X");
        assert_eq!(deserialized.rng.seed, 42);
    }
}
