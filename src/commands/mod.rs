//! Extension commands and the page primitives they are built on.

use std::fmt;

use crate::connector::Window;
use crate::error::VaadinResult;
use crate::session::VaadinSession;

pub mod gestures;
pub mod keys;

pub use gestures::{
    CloseNotification, ContextMenu, ContextMenuAt, EnterCharacter, PressArrowKey, ScreenCapture,
    Scroll, ScrollLeft, ShowTooltip, WaitForVaadin,
};

/// Element lookup and low-level event synthesis supplied by the host runner.
pub trait Page {
    type Element;
    type Window: Window;

    /// The current browser window.
    fn window(&self) -> &Self::Window;

    /// Find an element by locator string, including custom strategies such as `vaadin=`.
    fn find_element(&self, locator: &str) -> VaadinResult<Self::Element>;

    /// Client coordinates of the element's top-left corner.
    fn element_origin(&self, element: &Self::Element) -> VaadinResult<(f64, f64)>;

    fn set_scroll_top(&self, element: &Self::Element, scroll_top: &str) -> VaadinResult<()>;

    fn set_scroll_left(&self, element: &Self::Element, scroll_left: &str) -> VaadinResult<()>;

    /// Move the pointer onto the element.
    fn hover(&self, element: &Self::Element) -> VaadinResult<()>;

    fn click(&self, element: &Self::Element) -> VaadinResult<()>;

    fn is_displayed(&self, element: &Self::Element) -> VaadinResult<bool>;

    fn fire_mouse_event(
        &self,
        event: &str,
        element: &Self::Element,
        client_x: f64,
        client_y: f64,
    ) -> VaadinResult<()>;

    /// Replace the element's value in one go.
    fn type_text(&self, element: &Self::Element, text: &str) -> VaadinResult<()>;

    fn key_down(&self, element: &Self::Element, key_sequence: &str) -> VaadinResult<()>;

    fn key_up(&self, element: &Self::Element, key_sequence: &str) -> VaadinResult<()>;
}

/// A named command taking a locator (`target`) and a value, in the style of
/// Selenium IDE test steps.
pub trait Command<P: Page>: fmt::Debug {
    fn name(&self) -> &str;

    fn execute(&self, session: &VaadinSession<P>, target: &str, value: &str) -> VaadinResult<()>;
}

/// Commands known to a session, looked up by name.
pub struct CommandRegistry<P: Page> {
    commands: Vec<Box<dyn Command<P>>>,
}

impl<P: Page> CommandRegistry<P> {
    pub fn new() -> Self {
        CommandRegistry {
            commands: Vec::new(),
        }
    }

    /// A registry holding every built-in Vaadin command.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(WaitForVaadin);
        registry.register(Scroll);
        registry.register(ScrollLeft);
        registry.register(ContextMenu);
        registry.register(ContextMenuAt);
        registry.register(ScreenCapture);
        registry.register(EnterCharacter);
        registry.register(PressArrowKey);
        registry.register(ShowTooltip);
        registry.register(CloseNotification);
        registry
    }

    /// Add a command. A later registration under the same name replaces the earlier one.
    pub fn register<C>(&mut self, command: C)
    where
        C: Command<P> + 'static,
    {
        self.commands.retain(|c| c.name() != command.name());
        self.commands.push(Box::new(command));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command<P>> {
        self.commands.iter().find(|c| c.name() == name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }
}

impl<P: Page> Default for CommandRegistry<P> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<P: Page> fmt::Debug for CommandRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry").field("commands", &self.names()).finish()
    }
}
