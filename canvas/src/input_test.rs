use uuid::Uuid;

use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
    assert!(!m.command());
}

#[test]
fn command_is_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Default::default() }.command());
    assert!(Modifiers { meta: true, ..Default::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Default::default() }.command());
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_match_ignores_case() {
    assert!(Key::new("Z").is("z"));
    assert!(Key::new("Escape").is("escape"));
    assert!(!Key::new("Enter").is("Escape"));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert!(state.active_id().is_none());
    assert!(state.revert_fields().is_none());
}

#[test]
fn dragging_reverts_to_original_position() {
    let id = Uuid::new_v4();
    let state = InputState::Dragging {
        id,
        offset: Point::new(5.0, 5.0),
        original: Position::new(50.0, 60.0),
        last: Some(Position::new(90.0, 90.0)),
    };
    assert!(!state.is_idle());
    assert_eq!(state.active_id(), Some(id));
    assert_eq!(state.revert_fields(), Some(PartialElement::position(50.0, 60.0)));
}

#[test]
fn resizing_reverts_to_captured_style() {
    let id = Uuid::new_v4();
    let mut original = PartialElement::default();
    original.styles = Some([("width".to_owned(), None)].into_iter().collect());
    let state = InputState::Resizing {
        id,
        direction: ResizeDirection::Right,
        start: Point::new(0.0, 0.0),
        start_size: Size::new(100.0, 50.0),
        original: original.clone(),
        last: None,
    };
    assert_eq!(state.active_id(), Some(id));
    assert_eq!(state.revert_fields(), Some(original));
}
