#![allow(clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;

fn make_element(kind: ElementKind) -> Element {
    Element {
        id: Uuid::new_v4(),
        kind,
        content: "hello".into(),
        styles: Styles::new(),
        position: Position::new(10.0, 20.0),
        link_to: None,
    }
}

fn fallback() -> Size {
    Size::new(100.0, 50.0)
}

// =============================================================
// ElementKind
// =============================================================

#[test]
fn kind_serde_lowercase() {
    assert_eq!(serde_json::to_string(&ElementKind::Slideshow).unwrap(), "\"slideshow\"");
    let back: ElementKind = serde_json::from_str("\"navigation\"").unwrap();
    assert_eq!(back, ElementKind::Navigation);
}

#[test]
fn kind_serde_matches_as_str() {
    for kind in ElementKind::ALL {
        assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", kind.as_str()));
    }
}

#[test]
fn kind_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<ElementKind>("\"carousel\"").is_err());
}

#[test]
fn kind_from_str_is_case_insensitive() {
    assert_eq!("Heading".parse::<ElementKind>(), Ok(ElementKind::Heading));
    assert_eq!(" quote ".parse::<ElementKind>(), Ok(ElementKind::Quote));
}

#[test]
fn kind_from_str_unknown() {
    let err = "carousel".parse::<ElementKind>().unwrap_err();
    assert_eq!(err, UnknownKind("carousel".into()));
    assert_eq!(err.to_string(), "unknown element kind: carousel");
}

#[test]
fn kind_all_is_exhaustive_and_distinct() {
    let mut names: Vec<&str> = ElementKind::ALL.iter().map(|k| k.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 15);
}

#[test]
fn resizable_set() {
    let resizable: Vec<ElementKind> = ElementKind::ALL.into_iter().filter(|k| k.is_resizable()).collect();
    assert_eq!(
        resizable,
        vec![
            ElementKind::Image,
            ElementKind::Video,
            ElementKind::Divider,
            ElementKind::Spacer,
            ElementKind::Card,
            ElementKind::List,
            ElementKind::Quote,
            ElementKind::Slideshow,
        ]
    );
}

#[test]
fn inline_editable_set() {
    assert!(ElementKind::Text.is_inline_editable());
    assert!(ElementKind::Card.is_inline_editable());
    assert!(ElementKind::Link.is_inline_editable());
    assert!(!ElementKind::Image.is_inline_editable());
    assert!(!ElementKind::Accordion.is_inline_editable());
}

#[test]
fn composite_set() {
    assert!(ElementKind::Accordion.is_composite());
    assert!(ElementKind::Navigation.is_composite());
    assert!(ElementKind::Slideshow.is_composite());
    assert!(!ElementKind::Text.is_composite());
}

// =============================================================
// Element serde
// =============================================================

#[test]
fn element_serializes_camel_case_with_type_key() {
    let mut el = make_element(ElementKind::Button);
    el.link_to = Some(LinkTarget::Url("https://example.com".into()));
    let value = serde_json::to_value(&el).unwrap();
    assert_eq!(value["type"], "button");
    assert_eq!(value["position"], json!({ "x": 10.0, "y": 20.0 }));
    assert_eq!(value["linkTo"], json!({ "type": "url", "value": "https://example.com" }));
}

#[test]
fn element_without_link_omits_key() {
    let value = serde_json::to_value(make_element(ElementKind::Text)).unwrap();
    assert!(value.get("linkTo").is_none());
}

#[test]
fn element_roundtrip() {
    let mut el = make_element(ElementKind::Card);
    el.styles.insert("width".into(), "250px".into());
    el.link_to = Some(LinkTarget::Page(Uuid::new_v4()));
    let json = serde_json::to_string(&el).unwrap();
    let back: Element = serde_json::from_str(&json).unwrap();
    assert_eq!(back, el);
}

#[test]
fn element_missing_content_and_styles_default_empty() {
    let id = Uuid::new_v4();
    let el: Element = serde_json::from_value(json!({
        "id": id,
        "type": "spacer",
        "position": { "x": 1.0, "y": 2.0 },
    }))
    .unwrap();
    assert_eq!(el.content, "");
    assert!(el.styles.is_empty());
}

// =============================================================
// Element: apply_partial / capture
// =============================================================

#[test]
fn apply_partial_position_only() {
    let mut el = make_element(ElementKind::Text);
    el.apply_partial(&PartialElement::position(120.0, 80.0));
    assert_eq!(el.position, Position::new(120.0, 80.0));
    assert_eq!(el.content, "hello");
}

#[test]
fn apply_partial_merges_style_keys() {
    let mut el = make_element(ElementKind::Image);
    el.styles.insert("color".into(), "red".into());
    el.apply_partial(&PartialElement::style("width", "300px"));
    assert_eq!(el.styles["color"], "red");
    assert_eq!(el.styles["width"], "300px");
}

#[test]
fn apply_partial_none_style_removes_key() {
    let mut el = make_element(ElementKind::Image);
    el.styles.insert("width".into(), "300px".into());
    let mut patch = StylePatch::new();
    patch.insert("width".into(), None);
    el.apply_partial(&PartialElement { styles: Some(patch), ..Default::default() });
    assert!(!el.styles.contains_key("width"));
}

#[test]
fn apply_partial_link_set_and_clear() {
    let mut el = make_element(ElementKind::Link);
    el.apply_partial(&PartialElement::link(Some(LinkTarget::Url("/x".into()))));
    assert_eq!(el.link_to, Some(LinkTarget::Url("/x".into())));
    el.apply_partial(&PartialElement::link(None));
    assert_eq!(el.link_to, None);
}

#[test]
fn capture_then_apply_restores() {
    let mut el = make_element(ElementKind::Image);
    let before = el.clone();
    let change = PartialElement {
        content: Some("new".into()),
        position: Some(Position::new(1.0, 1.0)),
        ..PartialElement::style("height", "99px")
    };
    let original = el.capture(&change);
    el.apply_partial(&change);
    assert_ne!(el, before);
    el.apply_partial(&original);
    assert_eq!(el, before);
}

#[test]
fn is_unchanged_by() {
    let el = make_element(ElementKind::Text);
    assert!(el.is_unchanged_by(&PartialElement::position(10.0, 20.0)));
    assert!(!el.is_unchanged_by(&PartialElement::position(11.0, 20.0)));
    assert!(el.is_unchanged_by(&PartialElement::default()));
}

// =============================================================
// PartialElement serde
// =============================================================

#[test]
fn partial_absent_link_is_none() {
    let p: PartialElement = serde_json::from_value(json!({ "content": "x" })).unwrap();
    assert_eq!(p.link_to, None);
    assert_eq!(p.content.as_deref(), Some("x"));
}

#[test]
fn partial_null_link_clears() {
    let p: PartialElement = serde_json::from_value(json!({ "linkTo": null })).unwrap();
    assert_eq!(p.link_to, Some(None));
}

#[test]
fn partial_null_style_value_removes() {
    let p: PartialElement = serde_json::from_value(json!({ "styles": { "width": null, "color": "blue" } })).unwrap();
    let styles = p.styles.unwrap();
    assert_eq!(styles["width"], None);
    assert_eq!(styles["color"], Some("blue".into()));
}

#[test]
fn partial_serialize_skips_absent() {
    let value = serde_json::to_value(PartialElement::position(1.0, 2.0)).unwrap();
    assert_eq!(value, json!({ "position": { "x": 1.0, "y": 2.0 } }));
}

#[test]
fn partial_is_empty() {
    assert!(PartialElement::default().is_empty());
    assert!(!PartialElement::content("").is_empty());
}

// =============================================================
// Sizes
// =============================================================

#[test]
fn parse_px_integer_prefix() {
    assert_eq!(parse_px("120px"), Some(120.0));
    assert_eq!(parse_px("  42"), Some(42.0));
    assert_eq!(parse_px("12.7px"), Some(12.0));
    assert_eq!(parse_px("+8px"), Some(8.0));
}

#[test]
fn parse_px_rejects_unusable() {
    assert_eq!(parse_px(""), None);
    assert_eq!(parse_px("auto"), None);
    assert_eq!(parse_px("0px"), None);
    assert_eq!(parse_px("-5px"), None);
    assert_eq!(parse_px("px"), None);
}

#[test]
fn format_px_rounds() {
    assert_eq!(format_px(120.0), "120px");
    assert_eq!(format_px(120.6), "121px");
}

#[test]
fn size_prefers_styles_then_measured_then_fallback() {
    let mut el = make_element(ElementKind::Image);
    let measured = Some(Size::new(64.0, 32.0));
    assert_eq!(el.size(None, fallback()), Size::new(100.0, 50.0));
    assert_eq!(el.size(measured, fallback()), Size::new(64.0, 32.0));
    el.styles.insert("width".into(), "300px".into());
    el.styles.insert("height".into(), "nonsense".into());
    assert_eq!(el.size(measured, fallback()), Size::new(300.0, 32.0));
}

#[test]
fn rect_anchors_at_position() {
    let el = make_element(ElementKind::Text);
    let r = el.rect(None, fallback());
    assert_eq!((r.x, r.y, r.width, r.height), (10.0, 20.0, 100.0, 50.0));
}

// =============================================================
// Page
// =============================================================

#[test]
fn page_lookup() {
    let mut page = Page::new("Home");
    let el = make_element(ElementKind::Text);
    let id = el.id;
    page.elements.push(el);
    assert!(page.contains(&id));
    assert!(page.element(&Uuid::new_v4()).is_none());
    page.element_mut(&id).unwrap().content = "changed".into();
    assert_eq!(page.element(&id).unwrap().content, "changed");
}

#[test]
fn page_serializes_camel_case() {
    let page = Page::new("About");
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["name"], "About");
    assert_eq!(value["elements"], json!([]));
}
