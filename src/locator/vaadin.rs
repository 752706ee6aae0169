use log::error;

use crate::connector::{find_registry, Client, ClientRegistry, ElementOf, Window};
use crate::error::{VaadinError, VaadinResult};
use crate::locator::LocatorStrategy;

/// Separator between the application id and the element path.
pub const PATH_SEPARATOR: &str = "::";

/// A parsed `appId::elementPath` locator.
///
/// Only the first two segments are used. Anything after a second `::` is
/// dropped, so `app::a::b` resolves the path `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaadinPath<'a> {
    pub app_id: &'a str,
    pub path: &'a str,
}

impl<'a> VaadinPath<'a> {
    pub fn parse(locator: &'a str) -> VaadinResult<Self> {
        let mut parts = locator.split(PATH_SEPARATOR);
        let app_id = parts.next().unwrap_or_default();
        match parts.next() {
            Some(path) => Ok(VaadinPath {
                app_id,
                path,
            }),
            None => Err(VaadinError::MissingSeparator(locator.to_string())),
        }
    }
}

/// Resolve a Vaadin locator, reporting failures to the caller.
///
/// `Ok(None)` means the page is not a Vaadin application, or the client
/// found no element for the path.
pub fn try_locate<W: Window>(window: &W, locator: &str) -> VaadinResult<Option<ElementOf<W>>> {
    let registry = match find_registry(window).map_err(|e| VaadinError::locate(locator, e))? {
        Some(registry) => registry,
        None => return Ok(None),
    };

    let resolve = || -> VaadinResult<Option<ElementOf<W>>> {
        let target = VaadinPath::parse(locator)?;
        registry.client(target.app_id)?.element_by_path(target.path)
    };
    resolve().map_err(|e| VaadinError::locate(locator, e))
}

/// Resolve a Vaadin locator to an element.
///
/// This never fails. Resolution errors are logged and reported as no match,
/// so that other locator strategies can still be tried.
pub fn locate_by_vaadin<W: Window>(window: &W, locator: &str) -> Option<ElementOf<W>> {
    match try_locate(window, locator) {
        Ok(element) => element,
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

/// The `vaadin=` locator strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaadinLocator;

impl<W: Window> LocatorStrategy<W> for VaadinLocator {
    fn scheme(&self) -> &str {
        "vaadin"
    }

    fn locate(&self, window: &W, value: &str) -> Option<ElementOf<W>> {
        locate_by_vaadin(window, value)
    }
}
