//! Selenium-style locator strings and pluggable locator strategies.
//!
//! A locator string is one of:
//!
//! - `scheme=value`, e.g. `id=login`, `css=div.v-button`, `vaadin=app::PID_Sok`
//! - an XPath expression starting with `//`
//! - a bare identifier, matched against the element id and then its name
//!
//! Schemes that the host does not understand itself are dispatched to a
//! [LocatorStrategy](trait.LocatorStrategy.html) registered under that scheme.

use std::fmt;

use crate::connector::{ElementOf, Window};
use crate::error::{VaadinError, VaadinResult};

pub mod vaadin;

/// A locator string split into its strategy and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    Scheme {
        scheme: &'a str,
        value: &'a str,
    },
    XPath(&'a str),
    Identifier(&'a str),
}

impl<'a> Locator<'a> {
    pub fn parse(locator: &'a str) -> Self {
        if let Some((scheme, value)) = split_scheme(locator) {
            return Locator::Scheme {
                scheme,
                value,
            };
        }
        if locator.starts_with("//") {
            Locator::XPath(locator)
        } else {
            Locator::Identifier(locator)
        }
    }
}

/// Split `word=rest`, where `word` is a non-empty run of word characters.
fn split_scheme(locator: &str) -> Option<(&str, &str)> {
    let idx = locator.find('=')?;
    let scheme = &locator[..idx];
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((scheme, &locator[idx + 1..]))
}

/// A locator the host resolves natively, without a registered strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Id(&'a str),
    Name(&'a str),
    Css(&'a str),
    XPath(&'a str),
    LinkText(&'a str),
    /// Match by id, then by name.
    Identifier(&'a str),
}

impl<'a> Selector<'a> {
    /// The native selector for one of the built-in schemes.
    pub fn from_scheme(scheme: &str, value: &'a str) -> Option<Self> {
        let selector = match scheme {
            "id" => Selector::Id(value),
            "name" => Selector::Name(value),
            "css" => Selector::Css(value),
            "xpath" => Selector::XPath(value),
            "link" => Selector::LinkText(value),
            "identifier" => Selector::Identifier(value),
            _ => return None,
        };
        Some(selector)
    }
}

/// A custom locator strategy, keyed by the scheme prefix it handles.
pub trait LocatorStrategy<W: Window>: fmt::Debug {
    fn scheme(&self) -> &str;

    /// Resolve `value` (the text after `scheme=`). `None` means no match.
    fn locate(&self, window: &W, value: &str) -> Option<ElementOf<W>>;
}

/// Locator strategies known to a page, looked up by scheme.
pub struct StrategyRegistry<W: Window> {
    strategies: Vec<Box<dyn LocatorStrategy<W>>>,
}

impl<W: Window> StrategyRegistry<W> {
    /// An empty registry.
    pub fn new() -> Self {
        StrategyRegistry {
            strategies: Vec::new(),
        }
    }

    /// A registry with the `vaadin=` strategy installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(vaadin::VaadinLocator);
        registry
    }

    /// Add a strategy. A later registration for the same scheme replaces the earlier one.
    pub fn register<S>(&mut self, strategy: S)
    where
        S: LocatorStrategy<W> + 'static,
    {
        self.strategies.retain(|s| s.scheme() != strategy.scheme());
        self.strategies.push(Box::new(strategy));
    }

    pub fn get(&self, scheme: &str) -> Option<&dyn LocatorStrategy<W>> {
        self.strategies.iter().find(|s| s.scheme() == scheme).map(|s| s.as_ref())
    }

    pub fn schemes(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.scheme()).collect()
    }

    /// Resolve a locator string.
    ///
    /// Built-in schemes, XPath expressions and bare identifiers are handed to
    /// `find` as a [Selector](enum.Selector.html). Every other scheme goes to
    /// the strategy registered for it.
    pub fn resolve<'l, F>(&self, window: &W, locator: &'l str, find: F) -> VaadinResult<ElementOf<W>>
    where
        F: FnOnce(Selector<'l>) -> VaadinResult<ElementOf<W>>,
    {
        let (scheme, value) = match Locator::parse(locator) {
            Locator::XPath(xpath) => return find(Selector::XPath(xpath)),
            Locator::Identifier(identifier) => return find(Selector::Identifier(identifier)),
            Locator::Scheme {
                scheme,
                value,
            } => (scheme, value),
        };
        if let Some(selector) = Selector::from_scheme(scheme, value) {
            return find(selector);
        }

        let strategy =
            self.get(scheme).ok_or_else(|| VaadinError::UnknownLocatorType(scheme.to_string()))?;
        strategy.locate(window, value).ok_or_else(|| VaadinError::ElementNotFound(locator.to_string()))
    }
}

impl<W: Window> Default for StrategyRegistry<W> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<W: Window> fmt::Debug for StrategyRegistry<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry").field("schemes", &self.schemes()).finish()
    }
}
