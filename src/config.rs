use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::commands::gestures::DEFAULT_CONTEXT_MENU_OFFSET;
use crate::query::ElementPoller;

/// Tunables for a [VaadinSession](struct.VaadinSession.html).
///
/// All fields have defaults, so a partial JSON object is enough to deserialize one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaadinConfig {
    /// Upper bound for `waitForVaadin`.
    pub settle_timeout_ms: u64,
    /// Delay between two settle polls.
    pub settle_interval_ms: u64,
    /// Offset used by `contextmenuAt` when none is given.
    pub context_menu_offset: String,
    /// How long `closeNotification` waits for the notification to go away.
    pub notification_timeout_ms: u64,
    pub notification_interval_ms: u64,
}

impl Default for VaadinConfig {
    fn default() -> Self {
        VaadinConfig {
            settle_timeout_ms: 20_000,
            settle_interval_ms: 50,
            context_menu_offset: DEFAULT_CONTEXT_MENU_OFFSET.to_string(),
            notification_timeout_ms: 5_000,
            notification_interval_ms: 200,
        }
    }
}

impl VaadinConfig {
    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }

    pub fn settle_interval(&self) -> Duration {
        Duration::from_millis(self.settle_interval_ms)
    }

    /// The poller used by `waitForVaadin`.
    pub fn settle_poller(&self) -> ElementPoller {
        ElementPoller::TimeoutWithInterval(self.settle_timeout(), self.settle_interval())
    }

    /// The poller used by `closeNotification`.
    pub fn notification_poller(&self) -> ElementPoller {
        ElementPoller::TimeoutWithInterval(
            Duration::from_millis(self.notification_timeout_ms),
            Duration::from_millis(self.notification_interval_ms),
        )
    }
}
