//! Renderer warnings with colored terminal output.
//!
//! Each unique message is printed once so that a large document with the same
//! unsupported value on every element does not flood stderr. The cascade, the
//! box builder, the painter and the font loader all report through here.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported input (prints once per unique message).
///
/// # Example
/// ```
/// wisp_common::warn_once("Layout", "unsupported display value 'flex', treating as inline");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[wisp {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before each render).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Record a warning key, returning `true` the first time it is seen.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}
