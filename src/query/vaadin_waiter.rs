use log::debug;
use std::time::Duration;

use crate::connector::Window;
use crate::error::{VaadinError, VaadinResult};
use crate::query::{ElementPoller, ElementPollerTicker, NoApplicationWarning, SettlePoller};

/// Explicit wait for the Vaadin clients on a page to finish their pending work.
///
/// The waiter repeatedly evaluates the settle predicate until it reports done,
/// or until the poller's timeout elapses, in which case it returns
/// `VaadinError::Timeout`.
///
/// # Example:
/// ```ignore
/// # use thirtyfour_vaadin::prelude::*;
/// session.wait_until_settled().error("Vaadin never settled after login").run()?;
/// ```
#[derive(Debug)]
pub struct VaadinWaiter<'a, W: Window> {
    window: &'a W,
    warning: &'a NoApplicationWarning,
    poller: ElementPoller,
    message: String,
    ignore_errors: bool,
}

impl<'a, W: Window> VaadinWaiter<'a, W> {
    pub fn new(window: &'a W, warning: &'a NoApplicationWarning, poller: ElementPoller) -> Self {
        Self {
            window,
            warning,
            poller,
            message: String::new(),
            ignore_errors: true,
        }
    }

    /// Use the specified ElementPoller for this wait only.
    pub fn with_poller(mut self, poller: ElementPoller) -> Self {
        self.poller = poller;
        self
    }

    /// Provide a human-readable error message to be returned in the case of timeout.
    pub fn error(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    /// By default errors raised while polling (e.g. a script failing during a
    /// page reload) are treated as "not settled yet". Pass `false` to return
    /// them immediately instead.
    pub fn ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = ignore;
        self
    }

    /// Wait for the specified timeout, polling once after each interval.
    pub fn wait(self, timeout: Duration, interval: Duration) -> Self {
        self.with_poller(ElementPoller::TimeoutWithInterval(timeout, interval))
    }

    fn run_poller(&self) -> VaadinResult<bool> {
        let mut settle = SettlePoller::new(self.window, self.warning);
        let mut ticker = ElementPollerTicker::new(self.poller.clone());
        loop {
            match settle.poll() {
                Ok(outcome) if outcome.is_done() => return Ok(true),
                Ok(outcome) => debug!("waiting for Vaadin: {:?}", outcome),
                Err(e) if self.ignore_errors => debug!("ignoring error while waiting for Vaadin: {}", e),
                Err(e) => return Err(e),
            }

            if !ticker.tick() {
                return Ok(false);
            }
        }
    }

    /// Block until the page has settled.
    pub fn run(self) -> VaadinResult<()> {
        match self.run_poller()? {
            true => Ok(()),
            false => Err(VaadinError::Timeout(self.message)),
        }
    }
}
