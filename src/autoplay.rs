//! Unattended rounds for checking the engine end to end.
//!
//! A random policy stands in for the human, the computer plays as usual
//! with no think delay, and each finished round is tallied.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Participant, RoundStatus};
use crate::engine::{Game, MoveOutcome};
use crate::policy::MovePolicy;

/// Outcome counts over a batch of rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Tally {
    /// Total rounds counted.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    fn record(&mut self, game: &Game) {
        match game.status() {
            RoundStatus::Won { mark, .. } => match game.round().owner_of(mark) {
                Participant::Human => self.human_wins += 1,
                Participant::Computer => self.computer_wins += 1,
            },
            RoundStatus::Drawn => self.draws += 1,
            RoundStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: human {} / computer {} / draw {}",
            self.rounds(),
            self.human_wins,
            self.computer_wins,
            self.draws
        )
    }
}

/// Play the current round of `game` to completion.
///
/// `stand_in` picks the human's cells using `rng`. Think tickets are
/// redeemed immediately regardless of the configured delay.
///
/// Stops early, leaving the round in progress, if the stand-in has no
/// cell to offer or any move is rejected.
pub fn play_round(game: &mut Game, stand_in: &dyn MovePolicy, rng: &mut GameRng) -> RoundStatus {
    while game.status().is_in_progress() {
        let outcome = if let Some(ticket) = game.pending_computer_move() {
            game.computer_select(ticket)
        } else if let Some(cell) = stand_in.select(game.board(), rng) {
            game.attempt_move(cell.get(), Participant::Human)
        } else {
            break;
        };

        if let MoveOutcome::Rejected(reason) = outcome {
            warn!("autoplay stopped in {}: {reason}", game.round_id());
            break;
        }
    }
    game.status()
}

/// Play `rounds` rounds, resetting between them, and tally the results.
///
/// The current round of `game` counts as the first.
/// Rounds that stop early are not counted.
pub fn play_rounds(
    game: &mut Game,
    rounds: u32,
    stand_in: &dyn MovePolicy,
    rng: &mut GameRng,
) -> Tally {
    let mut tally = Tally::default();

    for index in 0..rounds {
        if index > 0 {
            game.reset();
        }
        let status = play_round(game, stand_in, rng);
        debug!("autoplay {}: {status:?} after {} moves", game.round_id(), game.history().len());
        tally.record(game);
    }

    tally
}
