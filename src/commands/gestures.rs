//! UI gestures that the plain WebDriver command set does not offer.

use crate::commands::keys::arrow_key_sequence;
use crate::commands::{Command, Page};
use crate::error::{VaadinError, VaadinResult};
use crate::query::{ElementPoller, ElementPollerTicker};
use crate::session::VaadinSession;

/// Offset used by `contextmenuAt` when no coordinates are given.
pub const DEFAULT_CONTEXT_MENU_OFFSET: &str = "2, 2";

/// Parse an `"x, y"` offset string.
pub fn parse_offset(coords: &str) -> VaadinResult<(f64, f64)> {
    let invalid = || VaadinError::InvalidCoordinates(coords.to_string());
    let mut parts = coords.split(',');
    let (x, y) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => return Err(invalid()),
    };
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    Ok((x, y))
}

/// Set the element's `scrollTop`.
pub fn scroll<P: Page>(page: &P, locator: &str, scroll_top: &str) -> VaadinResult<()> {
    let element = page.find_element(locator)?;
    page.set_scroll_top(&element, scroll_top)
}

/// Set the element's `scrollLeft`.
pub fn scroll_left<P: Page>(page: &P, locator: &str, scroll_left: &str) -> VaadinResult<()> {
    let element = page.find_element(locator)?;
    page.set_scroll_left(&element, scroll_left)
}

/// Hover over the element so that its tooltip is shown.
pub fn show_tooltip<P: Page>(page: &P, locator: &str) -> VaadinResult<()> {
    let element = page.find_element(locator)?;
    page.hover(&element)
}

/// Click a notification and wait for it to disappear.
///
/// Returns false if the notification is still displayed once `poller` runs out.
pub fn close_notification<P: Page>(
    page: &P,
    locator: &str,
    poller: ElementPoller,
) -> VaadinResult<bool> {
    let element = page.find_element(locator)?;
    page.click(&element)?;
    let mut ticker = ElementPollerTicker::new(poller);
    loop {
        if !page.is_displayed(&element)? {
            return Ok(true);
        }
        if !ticker.tick() {
            return Ok(false);
        }
    }
}

/// Open the context menu of an element (fired at client coordinates 0,0).
pub fn contextmenu<P: Page>(page: &P, locator: &str) -> VaadinResult<()> {
    let element = page.find_element(locator)?;
    page.fire_mouse_event("contextmenu", &element, 0.0, 0.0)
}

/// Open the context menu at an offset from the element's top-left corner.
///
/// An empty `coords` string falls back to `default_offset`.
pub fn contextmenu_at<P: Page>(
    page: &P,
    locator: &str,
    coords: &str,
    default_offset: &str,
) -> VaadinResult<()> {
    let coords = if coords.is_empty() { default_offset } else { coords };
    let (dx, dy) = parse_offset(coords)?;
    let element = page.find_element(locator)?;
    let (x, y) = page.element_origin(&element)?;
    page.fire_mouse_event("contextmenu", &element, x + dx, y + dy)
}

/// Type `value`, then send key-down/key-up for each character so that widgets
/// which only react to keystrokes (combo box filters etc.) notice the input.
pub fn enter_character<P: Page>(page: &P, locator: &str, value: &str) -> VaadinResult<()> {
    let element = page.find_element(locator)?;
    page.type_text(&element, value)?;
    if value.chars().count() > 1 {
        let mut buf = [0u8; 4];
        for c in value.chars() {
            let key = c.encode_utf8(&mut buf);
            page.key_down(&element, key)?;
            page.key_up(&element, key)?;
        }
    } else {
        page.key_down(&element, value)?;
        page.key_up(&element, value)?;
    }
    Ok(())
}

/// Press an arrow key (`left`, `right`, `up`, `down`) on the element.
/// Other values are sent as-is.
pub fn press_arrow_key<P: Page>(page: &P, locator: &str, value: &str) -> VaadinResult<()> {
    let key = arrow_key_sequence(value);
    let element = page.find_element(locator)?;
    page.key_down(&element, key)?;
    page.key_up(&element, key)
}

/// `waitForVaadin`. Target and value are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaitForVaadin;

impl<P: Page> Command<P> for WaitForVaadin {
    fn name(&self) -> &str {
        "waitForVaadin"
    }

    fn execute(&self, session: &VaadinSession<P>, _target: &str, _value: &str) -> VaadinResult<()> {
        session.wait_for_vaadin()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scroll;

impl<P: Page> Command<P> for Scroll {
    fn name(&self) -> &str {
        "scroll"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, value: &str) -> VaadinResult<()> {
        session.scroll(target, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollLeft;

impl<P: Page> Command<P> for ScrollLeft {
    fn name(&self) -> &str {
        "scrollLeft"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, value: &str) -> VaadinResult<()> {
        session.scroll_left(target, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContextMenu;

impl<P: Page> Command<P> for ContextMenu {
    fn name(&self) -> &str {
        "contextmenu"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, _value: &str) -> VaadinResult<()> {
        session.contextmenu(target)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContextMenuAt;

impl<P: Page> Command<P> for ContextMenuAt {
    fn name(&self) -> &str {
        "contextmenuAt"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, value: &str) -> VaadinResult<()> {
        session.contextmenu_at(target, value)
    }
}

/// Accepted so that exported test cases which capture screens still run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenCapture;

impl<P: Page> Command<P> for ScreenCapture {
    fn name(&self) -> &str {
        "screenCapture"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, value: &str) -> VaadinResult<()> {
        session.screen_capture(target, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnterCharacter;

impl<P: Page> Command<P> for EnterCharacter {
    fn name(&self) -> &str {
        "enterCharacter"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, value: &str) -> VaadinResult<()> {
        session.enter_character(target, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PressArrowKey;

impl<P: Page> Command<P> for PressArrowKey {
    fn name(&self) -> &str {
        "pressArrowKey"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, value: &str) -> VaadinResult<()> {
        session.press_arrow_key(target, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowTooltip;

impl<P: Page> Command<P> for ShowTooltip {
    fn name(&self) -> &str {
        "showTooltip"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, _value: &str) -> VaadinResult<()> {
        session.show_tooltip(target)
    }
}

/// Fails with `VaadinError::Timeout` if the notification stays on screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloseNotification;

impl<P: Page> Command<P> for CloseNotification {
    fn name(&self) -> &str {
        "closeNotification"
    }

    fn execute(&self, session: &VaadinSession<P>, target: &str, _value: &str) -> VaadinResult<()> {
        if session.close_notification(target)? {
            Ok(())
        } else {
            Err(VaadinError::Timeout(format!("notification {} is still displayed", target)))
        }
    }
}
