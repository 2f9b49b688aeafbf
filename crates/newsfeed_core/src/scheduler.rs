//! Pure half of the fetch scheduler.
//!
//! Every fetch is issued with a [`FetchTicket`]. The engine executes the
//! resulting effects and hands the ticket back with the outcome; [`FetchScheduler::accept`]
//! then decides whether that outcome may still be applied. In-flight requests
//! are never aborted, only outvoted.

use std::time::Duration;

use crate::{Effect, Query};

/// Refresh period used when nothing else is configured (5 minutes).
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_millis(300_000);

/// Tag attached to an issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: Query,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchScheduler {
    period: Duration,
    next_seq: u64,
    last_applied: Option<u64>,
    timer_armed: bool,
}

impl FetchScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_seq: 1,
            last_applied: None,
            timer_armed: false,
        }
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer_armed
    }

    /// Fetch `query` now and restart the refresh timer.
    pub fn schedule(&mut self, query: &Query) -> Vec<Effect> {
        vec![self.issue(query), self.rearm()]
    }

    /// Fetch `query` now without touching the timer.
    pub fn issue(&mut self, query: &Query) -> Effect {
        let ticket = FetchTicket {
            seq: self.next_seq,
            query: query.clone(),
        };
        self.next_seq += 1;
        Effect::IssueFetch { ticket }
    }

    /// Disarm any running timer and arm a fresh one.
    pub fn rearm(&mut self) -> Effect {
        self.timer_armed = true;
        Effect::ArmTimer {
            period: self.period,
        }
    }

    /// Disarm the timer. Returns no effect if nothing was armed.
    pub fn cancel(&mut self) -> Option<Effect> {
        if std::mem::replace(&mut self.timer_armed, false) {
            Some(Effect::CancelTimer)
        } else {
            None
        }
    }

    /// Whether a completed ticket may be applied against the `current` query.
    ///
    /// A ticket is stale when its query is no longer current, or when a newer
    /// ticket has already been applied. Accepting records the ticket as applied.
    pub fn accept(&mut self, ticket: &FetchTicket, current: &Query) -> bool {
        if ticket.query != *current {
            return false;
        }
        if self.last_applied.is_some_and(|applied| ticket.seq <= applied) {
            return false;
        }
        self.last_applied = Some(ticket.seq);
        true
    }
}

impl Default for FetchScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_PERIOD)
    }
}
