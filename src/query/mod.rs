//! Explicit waits for Vaadin applications.

mod settle;
mod vaadin_waiter;

pub use settle::{poll_settle, NoApplicationWarning, Settle, SettlePoller, SettleState};
pub use thirtyfour_sync::query::{ElementPoller, ElementPollerTicker};
pub use vaadin_waiter::VaadinWaiter;
