//! Detection of a settled Vaadin page.
//!
//! A page is settled when no client instance reports pending work. Pages that
//! are not Vaadin applications count as settled straight away. Once a client
//! has been seen during a wait, a missing registry means the application is
//! being reloaded (e.g. a theme switch) and the wait continues.

use std::cell::Cell;

use log::warn;

use crate::connector::Window;
use crate::error::VaadinResult;

/// What the current wait has observed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleState {
    NoClientSeenYet,
    ClientSeen,
}

impl Default for SettleState {
    fn default() -> Self {
        SettleState::NoClientSeenYet
    }
}

/// Outcome of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// No Vaadin application on the page; nothing to wait for.
    NotVaadin,
    /// Every client is idle.
    Settled,
    /// At least one client is active.
    Busy,
    /// A client was seen earlier but the registry is gone for now.
    Reloading,
}

impl Settle {
    /// Whether the wait can stop.
    pub fn is_done(self) -> bool {
        matches!(self, Settle::NotVaadin | Settle::Settled)
    }
}

/// Evaluate the settle predicate once.
///
/// `state` is advanced to `ClientSeen` as soon as the registry lists its
/// clients, before any of them is asked whether it is busy. A client that
/// fails to answer still counts as seen.
pub fn poll_settle<W: Window>(window: &W, state: &mut SettleState) -> VaadinResult<Settle> {
    let activity = match window.client_activity()? {
        Some(activity) => activity,
        None => {
            return Ok(match state {
                SettleState::NoClientSeenYet => Settle::NotVaadin,
                SettleState::ClientSeen => Settle::Reloading,
            });
        }
    };

    *state = SettleState::ClientSeen;
    for active in activity {
        if active? {
            return Ok(Settle::Busy);
        }
    }
    Ok(Settle::Settled)
}

/// Sticky "no testable application" warning. Logs at most once.
#[derive(Debug, Default)]
pub struct NoApplicationWarning {
    issued: Cell<bool>,
}

impl NoApplicationWarning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the warning unless it was logged before. Returns true if it was logged now.
    pub fn issue(&self) -> bool {
        if self.issued.replace(true) {
            return false;
        }
        warn!("No testable Vaadin applications found!");
        true
    }

    pub fn is_issued(&self) -> bool {
        self.issued.get()
    }
}

/// Stateful settle predicate for a single wait.
#[derive(Debug)]
pub struct SettlePoller<'a, W: Window> {
    window: &'a W,
    state: SettleState,
    warning: &'a NoApplicationWarning,
    warnings_issued: u32,
}

impl<'a, W: Window> SettlePoller<'a, W> {
    pub fn new(window: &'a W, warning: &'a NoApplicationWarning) -> Self {
        SettlePoller {
            window,
            state: SettleState::default(),
            warning,
            warnings_issued: 0,
        }
    }

    pub fn state(&self) -> SettleState {
        self.state
    }

    /// How many times this wait logged the "no application" warning.
    pub fn warnings_issued(&self) -> u32 {
        self.warnings_issued
    }

    pub fn poll(&mut self) -> VaadinResult<Settle> {
        let outcome = poll_settle(self.window, &mut self.state)?;
        if outcome == Settle::NotVaadin && self.warning.issue() {
            self.warnings_issued += 1;
        }
        Ok(outcome)
    }
}
