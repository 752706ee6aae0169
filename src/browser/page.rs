use serde_json::json;
use thirtyfour_sync::prelude::*;
use thirtyfour_sync::WebDriverSession;

use crate::browser::element::{run_script, script_args};
use crate::browser::scripts;
use crate::browser::window::BrowserWindow;
use crate::commands::keys::KeySequence;
use crate::commands::Page;
use crate::error::VaadinResult;
use crate::locator::{Selector, StrategyRegistry};

/// A [Page](trait.Page.html) backed by a live `thirtyfour_sync` session.
///
/// Locator strings use the Selenium IDE conventions. `id=`, `name=`, `css=`,
/// `xpath=`, `link=` and `identifier=` are mapped onto WebDriver `By`
/// selectors. Any other scheme is looked up in the page's strategy registry,
/// which contains `vaadin=` by default.
///
/// # Example:
/// ```ignore
/// # use thirtyfour_vaadin::prelude::*;
/// let page = WebDriverPage::new(&driver.session);
/// let button = page.find_element("vaadin=calc::/VVerticalLayout[0]/VButton[0]")?;
/// ```
#[derive(Debug)]
pub struct WebDriverPage<'a> {
    session: &'a WebDriverSession,
    window: BrowserWindow<'a>,
    strategies: StrategyRegistry<BrowserWindow<'a>>,
}

impl<'a> WebDriverPage<'a> {
    pub fn new(session: &'a WebDriverSession) -> Self {
        WebDriverPage {
            session,
            window: BrowserWindow::new(session),
            strategies: StrategyRegistry::with_defaults(),
        }
    }

    pub fn session(&self) -> &'a WebDriverSession {
        self.session
    }

    pub fn strategies(&self) -> &StrategyRegistry<BrowserWindow<'a>> {
        &self.strategies
    }

    pub fn strategies_mut(&mut self) -> &mut StrategyRegistry<BrowserWindow<'a>> {
        &mut self.strategies
    }

    fn find_by(&self, by: By) -> VaadinResult<WebElement<'a>> {
        let session: &'a WebDriverSession = self.session;
        Ok(session.find_element(by)?)
    }

    /// Selenium's `identifier=` strategy: match by id, then by name.
    fn find_by_identifier(&self, identifier: &str) -> VaadinResult<WebElement<'a>> {
        self.find_by(By::Id(identifier)).or_else(|_| self.find_by(By::Name(identifier)))
    }

    fn run(&self, script: &str, args: &[serde_json::Value]) -> VaadinResult<serde_json::Value> {
        run_script(self.session, script, script_args(args)?)
    }

    fn key_event(&self, event: &str, element: &WebElement<'a>, sequence: &str) -> VaadinResult<()> {
        let key = KeySequence::parse(sequence)?;
        self.run(
            scripts::KEY_EVENT,
            &[serde_json::to_value(element)?, json!(event), json!(key.key_name()), json!(key.key_code)],
        )?;
        Ok(())
    }
}

impl<'a> Page for WebDriverPage<'a> {
    type Element = WebElement<'a>;
    type Window = BrowserWindow<'a>;

    fn window(&self) -> &BrowserWindow<'a> {
        &self.window
    }

    fn find_element(&self, locator: &str) -> VaadinResult<WebElement<'a>> {
        self.strategies.resolve(&self.window, locator, |selector| match selector {
            Selector::Id(id) => self.find_by(By::Id(id)),
            Selector::Name(name) => self.find_by(By::Name(name)),
            Selector::Css(css) => self.find_by(By::Css(css)),
            Selector::XPath(xpath) => self.find_by(By::XPath(xpath)),
            Selector::LinkText(text) => self.find_by(By::LinkText(text)),
            Selector::Identifier(identifier) => self.find_by_identifier(identifier),
        })
    }

    fn element_origin(&self, element: &WebElement<'a>) -> VaadinResult<(f64, f64)> {
        let value = self.run(scripts::ELEMENT_ORIGIN, &[serde_json::to_value(element)?])?;
        Ok(serde_json::from_value(value)?)
    }

    fn set_scroll_top(&self, element: &WebElement<'a>, scroll_top: &str) -> VaadinResult<()> {
        self.run(scripts::SET_SCROLL_TOP, &[serde_json::to_value(element)?, json!(scroll_top)])?;
        Ok(())
    }

    fn set_scroll_left(&self, element: &WebElement<'a>, scroll_left: &str) -> VaadinResult<()> {
        self.run(scripts::SET_SCROLL_LEFT, &[serde_json::to_value(element)?, json!(scroll_left)])?;
        Ok(())
    }

    fn hover(&self, element: &WebElement<'a>) -> VaadinResult<()> {
        self.run(scripts::HOVER, &[serde_json::to_value(element)?])?;
        Ok(())
    }

    fn click(&self, element: &WebElement<'a>) -> VaadinResult<()> {
        Ok(element.click()?)
    }

    fn is_displayed(&self, element: &WebElement<'a>) -> VaadinResult<bool> {
        let value = self.run(scripts::IS_DISPLAYED, &[serde_json::to_value(element)?])?;
        Ok(serde_json::from_value(value)?)
    }

    fn fire_mouse_event(
        &self,
        event: &str,
        element: &WebElement<'a>,
        client_x: f64,
        client_y: f64,
    ) -> VaadinResult<()> {
        // Secondary button for context menus, primary otherwise.
        let button = if event == "contextmenu" { 2 } else { 0 };
        self.run(
            scripts::FIRE_MOUSE_EVENT,
            &[
                serde_json::to_value(element)?,
                json!(event),
                json!(client_x),
                json!(client_y),
                json!(button),
            ],
        )?;
        Ok(())
    }

    fn type_text(&self, element: &WebElement<'a>, text: &str) -> VaadinResult<()> {
        self.run(scripts::TYPE_TEXT, &[serde_json::to_value(element)?, json!(text)])?;
        Ok(())
    }

    fn key_down(&self, element: &WebElement<'a>, key_sequence: &str) -> VaadinResult<()> {
        self.key_event("keydown", element, key_sequence)
    }

    fn key_up(&self, element: &WebElement<'a>, key_sequence: &str) -> VaadinResult<()> {
        self.key_event("keyup", element, key_sequence)
    }
}
