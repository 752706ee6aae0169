use serde_json::json;
use thirtyfour_sync::prelude::*;
use thirtyfour_sync::WebDriverSession;

use crate::browser::element::{element_from_value, run_script, script_args};
use crate::browser::scripts;
use crate::connector::{Client, ClientActivity, ClientRegistry, Window, CONNECTOR_NAMES};
use crate::error::{VaadinError, VaadinResult};

/// The current window of a WebDriver session.
///
/// Every read is a fresh script call, so nothing is cached between polls.
#[derive(Debug, Clone, Copy)]
pub struct BrowserWindow<'a> {
    session: &'a WebDriverSession,
}

impl<'a> BrowserWindow<'a> {
    pub fn new(session: &'a WebDriverSession) -> Self {
        BrowserWindow {
            session,
        }
    }
}

impl<'a> Window for BrowserWindow<'a> {
    type Registry = BrowserRegistry<'a>;

    fn registry(&self, property: &str) -> VaadinResult<Option<BrowserRegistry<'a>>> {
        let args = script_args(&[json!(property)])?;
        let found: bool = serde_json::from_value(run_script(self.session, scripts::HAS_CONNECTOR, args)?)?;
        if !found {
            return Ok(None);
        }
        Ok(Some(BrowserRegistry {
            session: self.session,
            connector: property.to_string(),
        }))
    }

    fn client_activity(&self) -> VaadinResult<Option<ClientActivity>> {
        let args = script_args(&[json!(CONNECTOR_NAMES)])?;
        activity_from_value(run_script(self.session, scripts::CLIENT_ACTIVITY, args)?)
    }
}

/// Decode the result of the activity script.
///
/// Each slot is either the client's busy flag or the message of the exception
/// it threw.
fn activity_from_value(value: serde_json::Value) -> VaadinResult<Option<ClientActivity>> {
    let slots: Option<Vec<serde_json::Value>> = serde_json::from_value(value)?;
    Ok(slots.map(|slots| {
        slots
            .into_iter()
            .map(|slot| match slot {
                serde_json::Value::Bool(active) => Ok(active),
                serde_json::Value::String(message) => Err(VaadinError::Script(message)),
                other => Err(VaadinError::Script(format!("unexpected client state: {}", other))),
            })
            .collect()
    }))
}

/// The connector object (`window.vaadin` or `window.itmill`) on the page.
#[derive(Debug, Clone)]
pub struct BrowserRegistry<'a> {
    session: &'a WebDriverSession,
    connector: String,
}

impl<'a> BrowserRegistry<'a> {
    fn client_handle(&self, app_id: String) -> BrowserClient<'a> {
        BrowserClient {
            session: self.session,
            connector: self.connector.clone(),
            app_id,
        }
    }
}

impl<'a> ClientRegistry for BrowserRegistry<'a> {
    type Client = BrowserClient<'a>;

    fn clients(&self) -> VaadinResult<Option<Vec<BrowserClient<'a>>>> {
        let args = script_args(&[json!(self.connector)])?;
        let ids: Option<Vec<String>> =
            serde_json::from_value(run_script(self.session, scripts::CLIENT_IDS, args)?)?;
        Ok(ids.map(|ids| ids.into_iter().map(|id| self.client_handle(id)).collect()))
    }

    fn client(&self, app_id: &str) -> VaadinResult<BrowserClient<'a>> {
        let args = script_args(&[json!(self.connector), json!(app_id)])?;
        let found: bool = serde_json::from_value(run_script(self.session, scripts::HAS_CLIENT, args)?)?;
        if !found {
            return Err(VaadinError::UnknownClient(app_id.to_string()));
        }
        Ok(self.client_handle(app_id.to_string()))
    }
}

/// One `ApplicationConnection` on the page, addressed by connector and application id.
#[derive(Debug, Clone)]
pub struct BrowserClient<'a> {
    session: &'a WebDriverSession,
    connector: String,
    app_id: String,
}

impl<'a> BrowserClient<'a> {
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
}

impl<'a> Client for BrowserClient<'a> {
    type Element = WebElement<'a>;

    fn is_active(&self) -> VaadinResult<bool> {
        let args = script_args(&[json!(self.connector), json!(self.app_id)])?;
        let active = serde_json::from_value(run_script(self.session, scripts::CLIENT_IS_ACTIVE, args)?)?;
        Ok(active)
    }

    fn element_by_path(&self, path: &str) -> VaadinResult<Option<WebElement<'a>>> {
        let args = script_args(&[json!(self.connector), json!(self.app_id), json!(path)])?;
        let value = run_script(self.session, scripts::ELEMENT_BY_PATH, args)?;
        element_from_value(self.session, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_null_means_no_clients() {
        assert!(activity_from_value(json!(null)).unwrap().is_none());
    }

    #[test]
    fn activity_slots() {
        let activity =
            activity_from_value(json!([false, true, "client calc: TypeError"])).unwrap().unwrap();
        assert_eq!(activity.len(), 3);
        assert!(!activity[0].as_ref().unwrap());
        assert!(activity[1].as_ref().unwrap());
        match &activity[2] {
            Err(VaadinError::Script(message)) => assert!(message.contains("calc")),
            other => panic!("unexpected slot: {:?}", other),
        }
    }

    #[test]
    fn activity_rejects_malformed_result() {
        assert!(activity_from_value(json!({"clients": []})).is_err());
    }
}
