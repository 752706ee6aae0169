//! Vaadin extensions for the `thirtyfour_sync` Selenium / WebDriver library.
//!
//! This crate adds what a plain WebDriver session lacks when testing a Vaadin
//! application:
//!
//! - A `vaadin=<appId>::<elementPath>` locator strategy. It resolves elements
//!   through the Vaadin client running in the page instead of through CSS or XPath.
//! - `waitForVaadin`, which blocks until every Vaadin client on the page has
//!   finished its pending server round-trips.
//! - Gestures that WebDriver does not offer directly: setting `scrollTop` and
//!   `scrollLeft`, opening context menus, typing characters so that combo
//!   boxes notice them, arrow-key presses, hovering for tooltips and closing
//!   notifications.
//!
//! Commands can be called as methods on [VaadinSession](struct.VaadinSession.html)
//! or by name through [VaadinSession::execute](struct.VaadinSession.html#method.execute),
//! in the style of Selenium IDE test steps.
//!
//! ## Example
//!
//! The following example assumes chromedriver is running at localhost:4444
//! and a Vaadin application is served at http://localhost:8080/calc
//!
//! ```no_run
//! use thirtyfour_sync::prelude::*;
//! use thirtyfour_vaadin::prelude::*;
//!
//! fn main() -> VaadinResult<()> {
//!     let caps = DesiredCapabilities::chrome();
//!     let driver = WebDriver::new("http://localhost:4444", &caps)?;
//!     driver.get("http://localhost:8080/calc")?;
//!
//!     let vaadin = driver.vaadin();
//!     vaadin.wait_for_vaadin()?;
//!
//!     // Find a button by its Vaadin path and click it.
//!     let button = vaadin.find_element("vaadin=calc::PID_Sbutton1")?;
//!     button.click()?;
//!     vaadin.wait_for_vaadin()?;
//!
//!     // Open the context menu slightly inside a table row.
//!     vaadin.contextmenu_at("vaadin=calc::PID_Stable/row[0]", "5, 5")?;
//!
//!     // The same, written as Selenium IDE steps.
//!     vaadin.execute("pressArrowKey", "vaadin=calc::PID_Stable", "down")?;
//!     vaadin.execute("waitForVaadin", "", "")?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::needless_doctest_main)]

pub mod browser;
pub mod commands;
pub mod config;
pub mod connector;
pub mod error;
pub mod locator;
pub mod query;
mod session;

#[cfg(test)]
mod testing;

pub use browser::{VaadinExt, WebDriverPage, WebDriverVaadinSession};
pub use commands::{Command, CommandRegistry, Page};
pub use config::VaadinConfig;
pub use connector::{find_registry, Client, ClientActivity, ClientRegistry, Window};
pub use error::{VaadinError, VaadinResult};
pub use locator::vaadin::{locate_by_vaadin, VaadinLocator, VaadinPath};
pub use locator::{Locator, LocatorStrategy, Selector, StrategyRegistry};
pub use query::{ElementPoller, Settle, VaadinWaiter};
pub use session::VaadinSession;

pub mod prelude {
    pub use crate::browser::{VaadinExt, WebDriverPage, WebDriverVaadinSession};
    pub use crate::commands::{Command, Page};
    pub use crate::config::VaadinConfig;
    pub use crate::error::{VaadinError, VaadinResult};
    pub use crate::session::VaadinSession;
}
