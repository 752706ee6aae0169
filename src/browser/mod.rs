//! The Vaadin extensions on top of a live `thirtyfour_sync` WebDriver session.

use thirtyfour_sync::{WebDriver, WebDriverSession};

use crate::config::VaadinConfig;
use crate::session::VaadinSession;

mod element;
mod page;
mod scripts;
mod window;

pub use element::element_from_value;
pub use page::WebDriverPage;
pub use window::{BrowserClient, BrowserRegistry, BrowserWindow};

/// A Vaadin session driving a real browser.
pub type WebDriverVaadinSession<'a> = VaadinSession<WebDriverPage<'a>>;

/// Trait for enabling the Vaadin extensions on a WebDriver.
pub trait VaadinExt {
    /// Start a Vaadin session with the default configuration.
    ///
    /// The session keeps its own "no application found" warning state, so keep
    /// hold of it for the duration of a test rather than creating one per step.
    fn vaadin(&self) -> WebDriverVaadinSession<'_> {
        self.vaadin_with_config(VaadinConfig::default())
    }

    fn vaadin_with_config(&self, config: VaadinConfig) -> WebDriverVaadinSession<'_>;
}

impl VaadinExt for WebDriverSession {
    fn vaadin_with_config(&self, config: VaadinConfig) -> WebDriverVaadinSession<'_> {
        VaadinSession::with_config(WebDriverPage::new(self), config)
    }
}

impl VaadinExt for WebDriver {
    fn vaadin_with_config(&self, config: VaadinConfig) -> WebDriverVaadinSession<'_> {
        self.session.vaadin_with_config(config)
    }
}

#[cfg(test)]
/// This function checks that the browser-backed API fits together. It is not intended to be executed.
fn _test_browser_api() -> crate::error::VaadinResult<()> {
    use crate::commands::Page;
    use thirtyfour_sync::prelude::*;

    let caps = DesiredCapabilities::chrome();
    let driver = WebDriver::new("http://localhost:4444", &caps)?;
    driver.get("http://localhost:8080/calc")?;

    let vaadin = driver.vaadin();
    vaadin.wait_for_vaadin()?;
    let button: WebElement = vaadin.find_element("vaadin=calc::PID_Sbutton1")?;
    button.click()?;
    vaadin.press_arrow_key("vaadin=calc::PID_Stree", "down")?;
    vaadin.execute("enterCharacter", "id=combo", "fin")?;
    vaadin.show_tooltip("css=.v-button")?;
    let _closed: bool = vaadin.close_notification("css=.v-Notification")?;
    let _origin = vaadin.page().element_origin(&button)?;
    Ok(())
}
