//! Deferred computer moves.
//!
//! When the computer takes the turn, the engine hands out a
//! [`ThinkTicket`] naming the round it was issued for and how long to
//! wait. A frontend parks it in a [`ThinkTimer`] and redeems it with
//! [`Game::computer_select`](crate::engine::Game::computer_select) once
//! due. Tickets from an earlier round are refused by the engine, so a
//! restart during the wait never receives a stale move.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tictac::core::RoundId;
//! use tictac::schedule::{ThinkTicket, ThinkTimer};
//!
//! let start = Instant::now();
//! let mut timer = ThinkTimer::new();
//! timer.arm(ThinkTicket::new(RoundId(0), Duration::from_millis(500)), start);
//!
//! assert_eq!(timer.poll(start), None);
//! assert!(timer.poll(start + Duration::from_millis(500)).is_some());
//! assert!(!timer.is_armed());
//! ```

use std::time::{Duration, Instant};

use crate::core::RoundId;

/// A claim on the computer's next move in a specific round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThinkTicket {
    /// Round the ticket was issued in.
    pub round: RoundId,

    /// Wait before redeeming.
    pub delay: Duration,
}

impl ThinkTicket {
    #[must_use]
    pub fn new(round: RoundId, delay: Duration) -> Self {
        Self { round, delay }
    }
}

/// One-shot timer holding at most one ticket.
#[derive(Clone, Debug, Default)]
pub struct ThinkTimer {
    armed: Option<(ThinkTicket, Instant)>,
}

impl ThinkTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start waiting on `ticket`, replacing any ticket already held.
    pub fn arm(&mut self, ticket: ThinkTicket, now: Instant) {
        self.armed = Some((ticket, now + ticket.delay));
    }

    /// Drop the held ticket, if any.
    pub fn disarm(&mut self) -> Option<ThinkTicket> {
        self.armed.take().map(|(ticket, _)| ticket)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Time left until the held ticket is due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.armed.map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Take the ticket if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<ThinkTicket> {
        match self.armed {
            Some((ticket, due)) if now >= due => {
                self.armed = None;
                Some(ticket)
            }
            _ => None,
        }
    }
}
