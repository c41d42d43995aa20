//! Keyboard state: which keys are currently held.
//!
//! A [`Keyboard`] is a cheap handle over a shared map. The engine owns one;
//! event sources (the DOM listener in [`crate::web::KeyListener`], or tests)
//! hold clones and feed it [`KeyEvent`]s. Reads and writes happen on the one
//! thread that runs the host's event loop, so the map sits in a `RefCell`
//! rather than behind a lock.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A key transition reported by the host.
///
/// The key string is the identifier the host reports (the DOM `key` value,
/// e.g. `"a"`, `"ArrowLeft"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
    /// The page lost focus; release events for held keys will not arrive.
    FocusLost,
}

/// DOM event types carrying a key transition, listened for on the document.
pub const KEY_EVENT_TYPES: [&str; 2] = ["keydown", "keyup"];

/// DOM event type signalling focus loss, listened for on the window.
pub const FOCUS_LOST_EVENT_TYPE: &str = "blur";

impl KeyEvent {
    /// Map a DOM event type and its `key` value (if any) to a transition.
    ///
    /// Key events without a key value and unrelated event types yield `None`.
    #[must_use]
    pub fn from_dom(event_type: &str, key: Option<&str>) -> Option<Self> {
        match (event_type, key) {
            ("keydown", Some(key)) => Some(Self::Pressed(key.to_owned())),
            ("keyup", Some(key)) => Some(Self::Released(key.to_owned())),
            (FOCUS_LOST_EVENT_TYPE, _) => Some(Self::FocusLost),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    keys: Rc<RefCell<HashMap<String, bool>>>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition.
    pub fn apply(&self, event: &KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => self.press(key),
            KeyEvent::Released(key) => self.release(key),
            KeyEvent::FocusLost => self.release_all(),
        }
    }

    pub fn press(&self, key: &str) {
        self.keys.borrow_mut().insert(key.to_owned(), true);
    }

    /// Mark `key` released. Entries are kept, never removed.
    pub fn release(&self, key: &str) {
        self.keys.borrow_mut().insert(key.to_owned(), false);
    }

    /// Mark every known key released, e.g. when the page loses focus and
    /// release events will never arrive.
    pub fn release_all(&self) {
        for held in self.keys.borrow_mut().values_mut() {
            *held = false;
        }
    }

    /// Whether `key` is held. Keys never seen are not held.
    #[must_use]
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.borrow().get(key).copied().unwrap_or(false)
    }

    /// Number of distinct keys seen so far.
    #[must_use]
    pub fn known_keys(&self) -> usize {
        self.keys.borrow().len()
    }
}
