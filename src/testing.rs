//! In-memory stand-ins for a browser page, used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::commands::Page;
use crate::connector::{Client, ClientRegistry, Window};
use crate::error::{VaadinError, VaadinResult};
use crate::locator::{Selector, StrategyRegistry};

/// Elements are identified by name in the fakes.
pub type FakeElement = String;

#[derive(Debug, Clone, Default)]
pub struct FakeClient {
    active: Rc<Cell<bool>>,
    broken: bool,
    elements: Rc<HashMap<String, FakeElement>>,
}

impl FakeClient {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn active() -> Self {
        let client = Self::default();
        client.set_active(true);
        client
    }

    /// A client whose methods throw, like a stale `ApplicationConnection`.
    pub fn broken() -> Self {
        FakeClient {
            broken: true,
            ..Self::default()
        }
    }

    pub fn with_element(mut self, path: &str, element: &str) -> Self {
        let mut elements = (*self.elements).clone();
        elements.insert(path.to_string(), element.to_string());
        self.elements = Rc::new(elements);
        self
    }

    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

impl Client for FakeClient {
    type Element = FakeElement;

    fn is_active(&self) -> VaadinResult<bool> {
        if self.broken {
            return Err(VaadinError::Script("isActive is not a function".to_string()));
        }
        Ok(self.active.get())
    }

    fn element_by_path(&self, path: &str) -> VaadinResult<Option<FakeElement>> {
        if self.broken {
            return Err(VaadinError::Script("getElementByPath is not a function".to_string()));
        }
        Ok(self.elements.get(path).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeRegistry {
    clients: Option<Vec<(String, FakeClient)>>,
}

impl FakeRegistry {
    /// A connector with an empty `clients` map.
    pub fn empty() -> Self {
        FakeRegistry {
            clients: Some(Vec::new()),
        }
    }

    /// A connector whose `clients` map is missing.
    pub fn without_clients() -> Self {
        FakeRegistry {
            clients: None,
        }
    }

    pub fn with_clients(clients: Vec<(&str, FakeClient)>) -> Self {
        FakeRegistry {
            clients: Some(clients.into_iter().map(|(id, c)| (id.to_string(), c)).collect()),
        }
    }
}

impl ClientRegistry for FakeRegistry {
    type Client = FakeClient;

    fn clients(&self) -> VaadinResult<Option<Vec<FakeClient>>> {
        Ok(self.clients.as_ref().map(|c| c.iter().map(|(_, client)| client.clone()).collect()))
    }

    fn client(&self, app_id: &str) -> VaadinResult<FakeClient> {
        self.clients
            .iter()
            .flatten()
            .find(|(id, _)| id == app_id)
            .map(|(_, client)| client.clone())
            .ok_or_else(|| VaadinError::UnknownClient(app_id.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct FakeWindow {
    wrapped: Option<Box<FakeWindow>>,
    registries: RefCell<Vec<(String, FakeRegistry)>>,
}

impl FakeWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrapping(inner: FakeWindow) -> Self {
        FakeWindow {
            wrapped: Some(Box::new(inner)),
            ..Self::default()
        }
    }

    pub fn with_registry(self, property: &str, registry: FakeRegistry) -> Self {
        self.set_registry(property, registry);
        self
    }

    pub fn set_registry(&self, property: &str, registry: FakeRegistry) {
        let mut registries = self.registries.borrow_mut();
        registries.retain(|(name, _)| name != property);
        registries.push((property.to_string(), registry));
    }

    pub fn clear_registries(&self) {
        self.registries.borrow_mut().clear();
    }
}

impl Window for FakeWindow {
    type Registry = FakeRegistry;

    fn wrapped_object(&self) -> Option<&Self> {
        self.wrapped.as_deref()
    }

    fn registry(&self, property: &str) -> VaadinResult<Option<FakeRegistry>> {
        Ok(self
            .registries
            .borrow()
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, registry)| registry.clone()))
    }
}

/// A page that records every dispatched gesture as a string.
///
/// Native selectors resolve to their value; `missing` is never found.
#[derive(Debug, Default)]
pub struct FakePage {
    window: FakeWindow,
    strategies: StrategyRegistry<FakeWindow>,
    events: RefCell<Vec<String>>,
    displayed: RefCell<HashMap<FakeElement, u32>>,
}

impl FakePage {
    pub fn new(window: FakeWindow) -> Self {
        FakePage {
            window,
            ..Self::default()
        }
    }

    /// Report the element as displayed for the next `checks` visibility checks.
    pub fn hide_after_checks(&self, element: &str, checks: u32) {
        self.displayed.borrow_mut().insert(element.to_string(), checks);
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn record(&self, event: String) {
        self.events.borrow_mut().push(event);
    }
}

impl Page for FakePage {
    type Element = FakeElement;
    type Window = FakeWindow;

    fn window(&self) -> &FakeWindow {
        &self.window
    }

    fn find_element(&self, locator: &str) -> VaadinResult<FakeElement> {
        self.strategies.resolve(&self.window, locator, |selector| match selector {
            Selector::Identifier("missing") => {
                Err(VaadinError::ElementNotFound(locator.to_string()))
            }
            Selector::Id(value)
            | Selector::Name(value)
            | Selector::Css(value)
            | Selector::XPath(value)
            | Selector::LinkText(value)
            | Selector::Identifier(value) => Ok(value.to_string()),
        })
    }

    fn element_origin(&self, _element: &FakeElement) -> VaadinResult<(f64, f64)> {
        Ok((10.0, 20.0))
    }

    fn set_scroll_top(&self, element: &FakeElement, scroll_top: &str) -> VaadinResult<()> {
        self.record(format!("scrollTop {} {}", element, scroll_top));
        Ok(())
    }

    fn set_scroll_left(&self, element: &FakeElement, scroll_left: &str) -> VaadinResult<()> {
        self.record(format!("scrollLeft {} {}", element, scroll_left));
        Ok(())
    }

    fn hover(&self, element: &FakeElement) -> VaadinResult<()> {
        self.record(format!("hover {}", element));
        Ok(())
    }

    fn click(&self, element: &FakeElement) -> VaadinResult<()> {
        self.record(format!("click {}", element));
        Ok(())
    }

    fn is_displayed(&self, element: &FakeElement) -> VaadinResult<bool> {
        let mut displayed = self.displayed.borrow_mut();
        match displayed.get_mut(element) {
            Some(checks) if *checks > 0 => {
                *checks -= 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn fire_mouse_event(
        &self,
        event: &str,
        element: &FakeElement,
        client_x: f64,
        client_y: f64,
    ) -> VaadinResult<()> {
        self.record(format!("{} {} {},{}", event, element, client_x, client_y));
        Ok(())
    }

    fn type_text(&self, element: &FakeElement, text: &str) -> VaadinResult<()> {
        self.record(format!("type {} {}", element, text));
        Ok(())
    }

    fn key_down(&self, element: &FakeElement, key_sequence: &str) -> VaadinResult<()> {
        self.record(format!("keydown {} {}", element, key_sequence));
        Ok(())
    }

    fn key_up(&self, element: &FakeElement, key_sequence: &str) -> VaadinResult<()> {
        self.record(format!("keyup {} {}", element, key_sequence));
        Ok(())
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Keeps log records per thread, so parallel tests don't see each other's output.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            RECORDS.with(|records| {
                records.borrow_mut().push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Start capturing the log records emitted on the current thread.
pub fn capture_logs() {
    // Only fails if already installed, which is fine.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Records emitted on the current thread since `capture_logs`.
pub fn captured_logs() -> Vec<(Level, String)> {
    RECORDS.with(|records| records.borrow().clone())
}
