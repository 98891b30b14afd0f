//! Document model: elements, pages, and the sparse-update type.
//!
//! This module defines what sits on a page (`Element`, `ElementKind`), a
//! partial-update type for incremental edits (`PartialElement`), a typed
//! accessor for the open-ended style bag (`StyleProps`), and the `Page`
//! container that owns an ordered element list.
//!
//! Everything here is plain serde data. Projects round-trip through JSON with
//! camelCase field names (`linkTo`, `currentPageId`), which is the only
//! contract persistence relies on.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::geometry::{Rect, Size};

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// Unique identifier for a page.
pub type PageId = Uuid;

/// CSS-like presentation properties keyed by camelCase property name.
pub type Styles = BTreeMap<String, String>;

/// Style keys to set or remove (`None` deletes the key).
pub type StylePatch = BTreeMap<String, Option<String>>;

/// The kind of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Heading,
    Button,
    Link,
    Image,
    Video,
    Icon,
    Divider,
    Spacer,
    Card,
    List,
    Quote,
    /// One image URL per content line.
    Slideshow,
    /// `title|body` per content line.
    Accordion,
    /// `label|url` per content line.
    Navigation,
}

impl ElementKind {
    /// Every kind, in component-library order.
    pub const ALL: [ElementKind; 15] = [
        Self::Text,
        Self::Heading,
        Self::Button,
        Self::Link,
        Self::Image,
        Self::Video,
        Self::Icon,
        Self::Divider,
        Self::Spacer,
        Self::Card,
        Self::List,
        Self::Quote,
        Self::Slideshow,
        Self::Accordion,
        Self::Navigation,
    ];

    /// The lowercase name used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Button => "button",
            Self::Link => "link",
            Self::Image => "image",
            Self::Video => "video",
            Self::Icon => "icon",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::Card => "card",
            Self::List => "list",
            Self::Quote => "quote",
            Self::Slideshow => "slideshow",
            Self::Accordion => "accordion",
            Self::Navigation => "navigation",
        }
    }

    /// Whether the element exposes right/bottom resize handles when selected.
    #[must_use]
    pub fn is_resizable(self) -> bool {
        matches!(
            self,
            Self::Image
                | Self::Video
                | Self::Card
                | Self::Slideshow
                | Self::Divider
                | Self::Spacer
                | Self::List
                | Self::Quote
        )
    }

    /// Whether a double-click enters in-place text editing.
    #[must_use]
    pub fn is_inline_editable(self) -> bool {
        matches!(self, Self::Text | Self::Heading | Self::Button | Self::Card | Self::Link | Self::Icon)
    }

    /// Whether the content string encodes a list of records.
    #[must_use]
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Slideshow | Self::Accordion | Self::Navigation | Self::List)
    }

    /// Whether inline editing is multi-line (Enter inserts a newline instead
    /// of committing).
    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Card)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind name that is not one of the known element kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ElementKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownKind(name.to_owned()))
    }
}

/// Absolute top-left offset in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Navigation target for buttons and links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum LinkTarget {
    /// Another page of the same project.
    Page(PageId),
    /// An external URL.
    Url(String),
}

/// A placed, typed, styled element as stored in a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Type-dependent payload; composite kinds use the delimited encoding.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub styles: Styles,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_to: Option<LinkTarget>,
}

impl Element {
    /// Typed access to this element's styles.
    #[must_use]
    pub fn style_props(&self) -> StyleProps<'_> {
        StyleProps::new(&self.styles)
    }

    /// Current size: styled width/height, then the renderer's measurement,
    /// then the fixed fallback.
    #[must_use]
    pub fn size(&self, measured: Option<Size>, fallback: Size) -> Size {
        let props = self.style_props();
        Size {
            width: props.width_px().or(measured.map(|m| m.width)).unwrap_or(fallback.width),
            height: props.height_px().or(measured.map(|m| m.height)).unwrap_or(fallback.height),
        }
    }

    /// Bounding box in canvas space.
    #[must_use]
    pub fn rect(&self, measured: Option<Size>, fallback: Size) -> Rect {
        let size = self.size(measured, fallback);
        Rect::new(self.position.x, self.position.y, size.width, size.height)
    }

    /// Apply a partial update in place.
    pub fn apply_partial(&mut self, partial: &PartialElement) {
        if let Some(ref content) = partial.content {
            self.content.clone_from(content);
        }
        if let Some(position) = partial.position {
            self.position = position;
        }
        if let Some(ref patch) = partial.styles {
            for (key, value) in patch {
                match value {
                    Some(v) => {
                        self.styles.insert(key.clone(), v.clone());
                    }
                    None => {
                        self.styles.remove(key);
                    }
                }
            }
        }
        if let Some(ref link) = partial.link_to {
            self.link_to.clone_from(link);
        }
    }

    /// Capture the current values of exactly the fields `partial` touches.
    ///
    /// Applying the result undoes `partial`, including removing style keys
    /// that did not exist before.
    #[must_use]
    pub fn capture(&self, partial: &PartialElement) -> PartialElement {
        PartialElement {
            content: partial.content.as_ref().map(|_| self.content.clone()),
            styles: partial.styles.as_ref().map(|patch| {
                patch
                    .keys()
                    .map(|key| (key.clone(), self.styles.get(key).cloned()))
                    .collect()
            }),
            position: partial.position.map(|_| self.position),
            link_to: partial.link_to.as_ref().map(|_| self.link_to.clone()),
        }
    }

    /// Whether applying `partial` would leave the element unchanged.
    #[must_use]
    pub fn is_unchanged_by(&self, partial: &PartialElement) -> bool {
        let mut probe = self.clone();
        probe.apply_partial(partial);
        probe == *self
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialElement {
    /// Replacement content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Style keys to merge (`null` values delete keys).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StylePatch>,
    /// New top-left position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// `Some(None)` (JSON `null`) clears the link.
    #[serde(default, deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
    pub link_to: Option<Option<LinkTarget>>,
}

impl PartialElement {
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { position: Some(Position::new(x, y)), ..Default::default() }
    }

    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), ..Default::default() }
    }

    /// Set a single style key.
    #[must_use]
    pub fn style(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut patch = StylePatch::new();
        patch.insert(key.into(), Some(value.into()));
        Self { styles: Some(patch), ..Default::default() }
    }

    #[must_use]
    pub fn link(target: Option<LinkTarget>) -> Self {
        Self { link_to: Some(target), ..Default::default() }
    }

    /// Returns `true` if no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.styles.is_none() && self.position.is_none() && self.link_to.is_none()
    }
}

/// Distinguish an explicit `null` from an absent field.
fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Typed access to common fields of an element's style bag.
pub struct StyleProps<'a> {
    styles: &'a Styles,
}

impl<'a> StyleProps<'a> {
    #[must_use]
    pub fn new(styles: &'a Styles) -> Self {
        Self { styles }
    }

    /// Raw value of a style key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.styles.get(key).map(String::as_str)
    }

    /// Width in pixels, if the style holds a usable positive number.
    #[must_use]
    pub fn width_px(&self) -> Option<f64> {
        self.get("width").and_then(parse_px)
    }

    /// Height in pixels, if the style holds a usable positive number.
    #[must_use]
    pub fn height_px(&self) -> Option<f64> {
        self.get("height").and_then(parse_px)
    }
}

/// Parse the leading integer of a CSS length (`"120px"` → 120).
///
/// Mirrors integer-prefix parsing: trailing units are ignored and anything
/// after a decimal point is truncated. Zero, negative and non-numeric values
/// yield `None` so callers fall through to measured or default sizes.
#[must_use]
pub fn parse_px(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let value = digits[..end].parse::<u32>().map(f64::from).unwrap_or(0.0);
    if negative || value <= 0.0 { None } else { Some(value) }
}

/// Format a pixel length the way styles store it (`"120px"`).
#[must_use]
pub fn format_px(value: f64) -> String {
    format!("{}px", value.round())
}

/// An ordered list of elements plus identity and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub name: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    /// Create an empty page with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), elements: Vec::new() }
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == *id)
    }

    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.element(id).is_some()
    }
}
