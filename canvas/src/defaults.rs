//! Per-kind defaults applied when an element is created.
//!
//! Defaults are resolved once, at creation time. Later renders fall back to
//! their own per-kind values for keys the user removed; nothing here is
//! consulted after the element exists.

#[cfg(test)]
#[path = "defaults_test.rs"]
mod defaults_test;

use crate::doc::{ElementKind, Styles};

/// Placeholder image used for new slideshow slides.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x300";

/// Content and styles a new element starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDefaults {
    pub content: String,
    pub styles: Styles,
}

/// Shared base every kind starts from before its own overrides.
fn base_styles() -> Styles {
    styles(&[
        ("color", "#333333"),
        ("backgroundColor", "transparent"),
        ("padding", "10px"),
        ("borderRadius", "4px"),
        ("border", "none"),
        ("fontSize", "16px"),
        ("fontFamily", "Arial, sans-serif"),
    ])
}

fn styles(pairs: &[(&str, &str)]) -> Styles {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn with(mut base: Styles, overrides: &[(&str, &str)]) -> Styles {
    for (k, v) in overrides {
        base.insert((*k).to_owned(), (*v).to_owned());
    }
    base
}

/// Default content and styles for `kind`.
#[must_use]
pub fn defaults_for(kind: ElementKind) -> ElementDefaults {
    let base = base_styles();
    let (content, styles) = match kind {
        ElementKind::Text => ("Your text here", base),
        ElementKind::Heading => ("Your Heading", with(base, &[("fontSize", "32px"), ("fontWeight", "bold")])),
        ElementKind::Button => (
            "Click Me",
            with(
                base,
                &[
                    ("backgroundColor", "#007bff"),
                    ("color", "white"),
                    ("padding", "12px 24px"),
                    ("borderRadius", "6px"),
                    ("cursor", "pointer"),
                ],
            ),
        ),
        ElementKind::Link => (
            "Click here",
            with(base, &[("color", "#007bff"), ("textDecoration", "underline"), ("cursor", "pointer")]),
        ),
        ElementKind::Image => ("", with(base, &[("width", "200px"), ("height", "150px")])),
        ElementKind::Video => (
            "",
            with(base, &[("width", "320px"), ("height", "180px"), ("backgroundColor", "#000000"), ("padding", "0px")]),
        ),
        ElementKind::Icon => ("\u{2b50}", with(base, &[("fontSize", "24px"), ("textAlign", "center")])),
        ElementKind::Divider => (
            "",
            with(base, &[("width", "200px"), ("height", "2px"), ("padding", "0px"), ("borderRadius", "0px")]),
        ),
        ElementKind::Spacer => ("", with(base, &[("width", "200px"), ("height", "50px"), ("padding", "0px")])),
        ElementKind::Card => (
            "Card content goes here",
            with(
                base,
                &[
                    ("backgroundColor", "#ffffff"),
                    ("border", "1px solid #e5e7eb"),
                    ("padding", "20px"),
                    ("borderRadius", "8px"),
                    ("boxShadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
                    ("width", "250px"),
                    ("height", "150px"),
                ],
            ),
        ),
        ElementKind::List => ("Item 1\nItem 2\nItem 3", with(base, &[("width", "200px"), ("height", "100px")])),
        ElementKind::Quote => (
            "Your inspiring quote here",
            with(
                base,
                &[
                    ("fontStyle", "italic"),
                    ("borderLeft", "4px solid #007bff"),
                    ("padding", "10px 20px"),
                    ("width", "300px"),
                    ("height", "80px"),
                ],
            ),
        ),
        ElementKind::Slideshow => (
            "https://via.placeholder.com/400x300\nhttps://via.placeholder.com/400x300?text=Slide+2",
            with(base, &[("width", "400px"), ("height", "300px"), ("padding", "0px")]),
        ),
        ElementKind::Accordion => (
            "Section 1|Content for section 1\nSection 2|Content for section 2",
            with(
                base,
                &[
                    ("backgroundColor", "#ffffff"),
                    ("border", "1px solid #e5e7eb"),
                    ("borderRadius", "8px"),
                    ("fontSize", "14px"),
                    ("color", "#374151"),
                    ("padding", "0px"),
                    ("width", "300px"),
                ],
            ),
        ),
        ElementKind::Navigation => (
            "Home|#\nAbout|#about\nContact|#contact",
            with(
                base,
                &[
                    ("backgroundColor", "#ffffff"),
                    ("border", "1px solid #e5e7eb"),
                    ("borderRadius", "0px"),
                    ("fontSize", "14px"),
                    ("fontWeight", "500"),
                    ("color", "#374151"),
                    ("padding", "0px"),
                    ("width", "400px"),
                ],
            ),
        ),
    };
    ElementDefaults { content: content.to_owned(), styles }
}

/// Defaults for a kind given by name; unknown names get empty content and the
/// base styles.
#[must_use]
pub fn defaults_for_name(name: &str) -> ElementDefaults {
    match name.parse::<ElementKind>() {
        Ok(kind) => defaults_for(kind),
        Err(_) => ElementDefaults { content: String::new(), styles: base_styles() },
    }
}
