use uuid::Uuid;

use super::*;

#[test]
fn new_is_empty() {
    let s = Selection::new();
    assert!(s.selected().is_none());
    assert!(s.editing().is_none());
}

#[test]
fn select_replaces_previous() {
    let mut s = Selection::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    assert!(s.select(a));
    assert!(s.select(b));
    assert_eq!(s.selected(), Some(b));
    assert!(!s.is_selected(&a));
}

#[test]
fn reselect_same_is_unchanged() {
    let mut s = Selection::new();
    let a = Uuid::new_v4();
    s.select(a);
    assert!(!s.select(a));
}

#[test]
fn clear_reports_change() {
    let mut s = Selection::new();
    assert!(!s.clear());
    s.select(Uuid::new_v4());
    assert!(s.clear());
    assert!(s.selected().is_none());
}

#[test]
fn forget_only_matching() {
    let mut s = Selection::new();
    let a = Uuid::new_v4();
    s.select(a);
    assert!(!s.forget(&Uuid::new_v4()));
    assert!(s.forget(&a));
    assert!(s.selected().is_none());
}

#[test]
fn begin_edit_requires_inline_editable_kind() {
    let mut s = Selection::new();
    let id = Uuid::new_v4();
    assert!(!s.begin_edit(id, ElementKind::Image, String::new()));
    assert!(s.editing().is_none());
    assert!(s.begin_edit(id, ElementKind::Heading, "Title".into()));
    assert!(s.is_editing(&id));
    assert_eq!(s.selected(), Some(id));
    assert_eq!(s.editing().unwrap().original, "Title");
}

#[test]
fn selecting_another_element_ends_edit() {
    let mut s = Selection::new();
    let a = Uuid::new_v4();
    s.begin_edit(a, ElementKind::Text, String::new());
    s.select(Uuid::new_v4());
    assert!(!s.is_editing(&a));
}

#[test]
fn clear_ends_edit() {
    let mut s = Selection::new();
    let a = Uuid::new_v4();
    s.begin_edit(a, ElementKind::Button, String::new());
    s.clear();
    assert!(s.editing().is_none());
}

#[test]
fn end_edit_returns_session_and_keeps_selection() {
    let mut s = Selection::new();
    let a = Uuid::new_v4();
    s.begin_edit(a, ElementKind::Card, "body".into());
    let session = s.end_edit().unwrap();
    assert_eq!(session.id, a);
    assert_eq!(session.kind, ElementKind::Card);
    assert_eq!(s.selected(), Some(a));
    assert!(s.end_edit().is_none());
}
