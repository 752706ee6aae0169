//! Lookup of the Vaadin client registry on a browser window.
//!
//! A Vaadin page exposes its running client instances through a connector
//! object on `window`. Older releases published it as `window.itmill`, newer
//! ones as `window.vaadin`. Both expose a `clients` map from application id to
//! client instance.

use crate::error::VaadinResult;

/// Window properties that may hold the connector, in lookup order.
pub const CONNECTOR_NAMES: [&str; 2] = ["itmill", "vaadin"];

/// A single Vaadin client instance (an `ApplicationConnection` on the page).
pub trait Client {
    type Element;

    /// Whether the client still has pending server communication or layout work.
    fn is_active(&self) -> VaadinResult<bool>;

    /// Resolve a Vaadin element path to a DOM element.
    fn element_by_path(&self, path: &str) -> VaadinResult<Option<Self::Element>>;
}

/// The connector object that owns the `clients` map.
pub trait ClientRegistry {
    type Client: Client;

    /// Every registered client, or `None` while the `clients` map is missing
    /// (e.g. in the middle of a theme change).
    fn clients(&self) -> VaadinResult<Option<Vec<Self::Client>>>;

    /// Index into the `clients` map.
    fn client(&self, app_id: &str) -> VaadinResult<Self::Client>;
}

/// Read-only view of the current browser window.
pub trait Window {
    type Registry: ClientRegistry;

    /// The unwrapped object, if this window is behind a security wrapper.
    fn wrapped_object(&self) -> Option<&Self> {
        None
    }

    /// The connector stored under the given window property, if any.
    fn registry(&self, property: &str) -> VaadinResult<Option<Self::Registry>>;

    /// The busy flag of every registered client, read in one pass.
    ///
    /// `None` when there is no registry or it has no `clients` map. A client
    /// that fails to report keeps its slot as an `Err`, so the caller still
    /// learns that clients were present.
    fn client_activity(&self) -> VaadinResult<Option<ClientActivity>>
    where
        Self: Sized,
    {
        let clients = match find_registry(self)? {
            Some(registry) => registry.clients()?,
            None => None,
        };
        Ok(clients.map(|clients| clients.iter().map(Client::is_active).collect()))
    }
}

/// Per-client busy flags, in registry order.
pub type ClientActivity = Vec<VaadinResult<bool>>;

pub type ClientOf<W> = <<W as Window>::Registry as ClientRegistry>::Client;
pub type ElementOf<W> = <ClientOf<W> as Client>::Element;

/// Find the client registry on the given window.
///
/// Returns `Ok(None)` when the page is not running a Vaadin application.
pub fn find_registry<W: Window>(window: &W) -> VaadinResult<Option<W::Registry>> {
    let window = window.wrapped_object().unwrap_or(window);
    for name in CONNECTOR_NAMES.iter() {
        if let Some(registry) = window.registry(name)? {
            return Ok(Some(registry));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeClient, FakeRegistry, FakeWindow};

    #[test]
    fn finds_registry_under_either_name() {
        let window = FakeWindow::new().with_registry("vaadin", FakeRegistry::empty());
        assert!(find_registry(&window).unwrap().is_some());

        let window = FakeWindow::new().with_registry("itmill", FakeRegistry::empty());
        assert!(find_registry(&window).unwrap().is_some());
    }

    #[test]
    fn legacy_name_wins() {
        let legacy = FakeRegistry::with_clients(vec![("legacy", FakeClient::idle())]);
        let current = FakeRegistry::with_clients(vec![("current", FakeClient::idle())]);
        let window =
            FakeWindow::new().with_registry("vaadin", current).with_registry("itmill", legacy);

        let registry = find_registry(&window).unwrap().unwrap();
        assert!(registry.client("legacy").is_ok());
        assert!(registry.client("current").is_err());
    }

    #[test]
    fn nothing_without_connector() {
        let window = FakeWindow::new().with_registry("somethingElse", FakeRegistry::empty());
        assert!(find_registry(&window).unwrap().is_none());
    }

    #[test]
    fn reads_through_wrapper() {
        let inner = FakeWindow::new().with_registry("vaadin", FakeRegistry::empty());
        let window = FakeWindow::wrapping(inner);
        assert!(find_registry(&window).unwrap().is_some());
    }

    #[test]
    fn wrapper_without_connector() {
        let window = FakeWindow::wrapping(FakeWindow::new());
        assert!(find_registry(&window).unwrap().is_none());
    }

    #[test]
    fn wrapped_object_shadows_outer_properties() {
        // Only the unwrapped object is consulted once a wrapper is present.
        let window =
            FakeWindow::wrapping(FakeWindow::new()).with_registry("vaadin", FakeRegistry::empty());
        assert!(find_registry(&window).unwrap().is_none());
    }

    #[test]
    fn activity_keeps_failing_clients() {
        let window = FakeWindow::new().with_registry(
            "vaadin",
            FakeRegistry::with_clients(vec![
                ("a", FakeClient::active()),
                ("b", FakeClient::broken()),
            ]),
        );
        let activity = window.client_activity().unwrap().unwrap();
        assert_eq!(activity.len(), 2);
        assert!(activity[0].as_ref().unwrap());
        assert!(activity[1].is_err());
    }

    #[test]
    fn no_activity_without_clients_map() {
        let window = FakeWindow::new().with_registry("vaadin", FakeRegistry::without_clients());
        assert!(window.client_activity().unwrap().is_none());
        assert!(FakeWindow::new().client_activity().unwrap().is_none());
    }
}
