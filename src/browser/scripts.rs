//! JavaScript executed in the page through `execute_script`.
//!
//! Connector scripts read through `window.wrappedJSObject` when the driver
//! exposes the page behind a security wrapper (Firefox).

pub const HAS_CONNECTOR: &str = r#"
var w = window.wrappedJSObject || window;
return !!w[arguments[0]];
"#;

// One snapshot per poll: the connector can vanish between separate calls.
pub const CLIENT_ACTIVITY: &str = r#"
var w = window.wrappedJSObject || window;
var names = arguments[0];
var connector = null;
for (var i = 0; i < names.length; i++) {
    if (w[names[i]]) {
        connector = w[names[i]];
        break;
    }
}
if (!connector || !connector.clients) {
    return null;
}
var activity = [];
for (var id in connector.clients) {
    try {
        activity.push(!!connector.clients[id].isActive());
    } catch (e) {
        activity.push('client ' + id + ': ' + e);
    }
}
return activity;
"#;

pub const CLIENT_IDS: &str = r#"
var w = window.wrappedJSObject || window;
var connector = w[arguments[0]];
if (!connector || !connector.clients) {
    return null;
}
var ids = [];
for (var id in connector.clients) {
    ids.push(id);
}
return ids;
"#;

pub const HAS_CLIENT: &str = r#"
var w = window.wrappedJSObject || window;
var connector = w[arguments[0]];
return !!(connector && connector.clients && connector.clients[arguments[1]]);
"#;

pub const CLIENT_IS_ACTIVE: &str = r#"
var w = window.wrappedJSObject || window;
return !!w[arguments[0]].clients[arguments[1]].isActive();
"#;

pub const ELEMENT_BY_PATH: &str = r#"
var w = window.wrappedJSObject || window;
var element = w[arguments[0]].clients[arguments[1]].getElementByPath(arguments[2]);
return element || null;
"#;

pub const ELEMENT_ORIGIN: &str = r#"
var rect = arguments[0].getBoundingClientRect();
return [rect.left, rect.top];
"#;

pub const SET_SCROLL_TOP: &str = r#"
arguments[0].scrollTop = arguments[1];
"#;

pub const SET_SCROLL_LEFT: &str = r#"
arguments[0].scrollLeft = arguments[1];
"#;

// Pointer enters at the element's centre, as a native mouse move would.
pub const HOVER: &str = r#"
var element = arguments[0];
var rect = element.getBoundingClientRect();
var x = rect.left + rect.width / 2;
var y = rect.top + rect.height / 2;
['mouseover', 'mouseenter', 'mousemove'].forEach(function (type) {
    element.dispatchEvent(new MouseEvent(type, {
        bubbles: type !== 'mouseenter',
        cancelable: true,
        view: window,
        clientX: x,
        clientY: y
    }));
});
"#;

// Detached elements count as hidden.
pub const IS_DISPLAYED: &str = r#"
var element = arguments[0];
if (!element.isConnected) {
    return false;
}
var style = window.getComputedStyle(element);
if (style.display === 'none' || style.visibility === 'hidden') {
    return false;
}
var rect = element.getBoundingClientRect();
return rect.width > 0 && rect.height > 0;
"#;

pub const FIRE_MOUSE_EVENT: &str = r#"
var evt = new MouseEvent(arguments[1], {
    bubbles: true,
    cancelable: true,
    view: window,
    clientX: arguments[2],
    clientY: arguments[3],
    button: arguments[4]
});
arguments[0].dispatchEvent(evt);
"#;

pub const TYPE_TEXT: &str = r#"
var element = arguments[0];
if (element.focus) {
    element.focus();
}
element.value = arguments[1];
element.dispatchEvent(new Event('input', { bubbles: true }));
element.dispatchEvent(new Event('change', { bubbles: true }));
"#;

// keyCode/which are read-only on KeyboardEvent, so they are patched in.
pub const KEY_EVENT: &str = r#"
var element = arguments[0];
var code = arguments[3];
var evt = new KeyboardEvent(arguments[1], {
    bubbles: true,
    cancelable: true,
    key: arguments[2]
});
Object.defineProperty(evt, 'keyCode', { get: function() { return code; } });
Object.defineProperty(evt, 'which', { get: function() { return code; } });
element.dispatchEvent(evt);
"#;
