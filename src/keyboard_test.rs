use super::*;

fn pressed(key: &str) -> KeyEvent {
    KeyEvent::Pressed(key.to_owned())
}

fn released(key: &str) -> KeyEvent {
    KeyEvent::Released(key.to_owned())
}

// =============================================================
// Press / release
// =============================================================

#[test]
fn unseen_key_is_not_pressed() {
    let keys = Keyboard::new();
    assert!(!keys.is_pressed("unseen-key"));
    assert_eq!(keys.known_keys(), 0);
}

#[test]
fn press_then_release() {
    let keys = Keyboard::new();
    keys.apply(&pressed("a"));
    assert!(keys.is_pressed("a"));
    keys.apply(&released("a"));
    assert!(!keys.is_pressed("a"));
}

#[test]
fn release_keeps_entry() {
    let keys = Keyboard::new();
    keys.press("ArrowLeft");
    keys.release("ArrowLeft");
    assert_eq!(keys.known_keys(), 1);
}

#[test]
fn keys_are_independent() {
    let keys = Keyboard::new();
    keys.press("a");
    keys.press("b");
    keys.release("a");
    assert!(!keys.is_pressed("a"));
    assert!(keys.is_pressed("b"));
}

#[test]
fn key_identifiers_are_case_sensitive() {
    let keys = Keyboard::new();
    keys.press("A");
    assert!(keys.is_pressed("A"));
    assert!(!keys.is_pressed("a"));
}

#[test]
fn repeated_press_stays_pressed() {
    let keys = Keyboard::new();
    keys.press(" ");
    keys.press(" ");
    assert!(keys.is_pressed(" "));
    assert_eq!(keys.known_keys(), 1);
}

#[test]
fn release_of_unseen_key_records_it_released() {
    let keys = Keyboard::new();
    keys.release("Shift");
    assert!(!keys.is_pressed("Shift"));
    assert_eq!(keys.known_keys(), 1);
}

#[test]
fn release_all_clears_every_held_key() {
    let keys = Keyboard::new();
    keys.press("a");
    keys.press("ArrowUp");
    keys.release_all();
    assert!(!keys.is_pressed("a"));
    assert!(!keys.is_pressed("ArrowUp"));
    assert_eq!(keys.known_keys(), 2);
}

#[test]
fn focus_lost_releases_every_held_key() {
    let keys = Keyboard::new();
    keys.apply(&pressed("a"));
    keys.apply(&pressed("ArrowUp"));
    keys.apply(&KeyEvent::FocusLost);
    assert!(!keys.is_pressed("a"));
    assert!(!keys.is_pressed("ArrowUp"));
}

// =============================================================
// DOM event mapping
// =============================================================

#[test]
fn keydown_and_keyup_map_to_transitions() {
    assert_eq!(KeyEvent::from_dom("keydown", Some("a")), Some(pressed("a")));
    assert_eq!(KeyEvent::from_dom("keyup", Some("a")), Some(released("a")));
}

#[test]
fn blur_maps_to_focus_lost() {
    assert_eq!(KeyEvent::from_dom(FOCUS_LOST_EVENT_TYPE, None), Some(KeyEvent::FocusLost));
}

#[test]
fn every_listened_key_event_type_is_mapped() {
    for kind in KEY_EVENT_TYPES {
        assert!(KeyEvent::from_dom(kind, Some("x")).is_some(), "{kind} is not mapped");
    }
}

#[test]
fn key_event_without_key_or_unknown_type_is_ignored() {
    assert_eq!(KeyEvent::from_dom("keydown", None), None);
    assert_eq!(KeyEvent::from_dom("focus", None), None);
    assert_eq!(KeyEvent::from_dom("click", Some("a")), None);
}

#[test]
fn blur_after_presses_leaves_nothing_held() {
    let keys = Keyboard::new();
    for (kind, key) in [("keydown", Some("a")), ("keydown", Some("b")), (FOCUS_LOST_EVENT_TYPE, None)] {
        if let Some(event) = KeyEvent::from_dom(kind, key) {
            keys.apply(&event);
        }
    }
    assert!(!keys.is_pressed("a"));
    assert!(!keys.is_pressed("b"));
}

// =============================================================
// Shared handles
// =============================================================

#[test]
fn clones_share_state() {
    let keys = Keyboard::new();
    let source = keys.clone();
    source.apply(&pressed("x"));
    assert!(keys.is_pressed("x"));
}

#[test]
fn separate_keyboards_are_isolated() {
    let a = Keyboard::new();
    let b = Keyboard::new();
    a.press("q");
    assert!(!b.is_pressed("q"));
}
