use serde::Serialize;
use serde_json::Value;
use thirtyfour::common::types::{ElementId, ElementRef};
use thirtyfour_sync::prelude::*;
use thirtyfour_sync::WebDriverSession;

use crate::error::VaadinResult;

/// Run a script and return its raw result.
pub fn run_script(session: &WebDriverSession, script: &str, args: ScriptArgs) -> VaadinResult<Value> {
    let ret = session.execute_script_with_args(script, &args)?;
    Ok(ret.value().clone())
}

/// Build script arguments from a list of serializable values.
pub fn script_args<T: Serialize>(values: &[T]) -> VaadinResult<ScriptArgs> {
    let mut args = ScriptArgs::new();
    for value in values {
        args.push(value)?;
    }
    Ok(args)
}

/// Unwrap a script result into a WebElement. `null` means no element.
pub fn element_from_value<'a>(
    session: &'a WebDriverSession,
    value: &Value,
) -> VaadinResult<Option<WebElement<'a>>> {
    if value.is_null() {
        return Ok(None);
    }
    let elem_id: ElementRef = serde_json::from_value(value.clone())?;
    Ok(Some(WebElement::new(session, ElementId::from(elem_id.id))))
}
