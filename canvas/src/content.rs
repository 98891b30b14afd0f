//! Typed payloads for composite element content.
//!
//! Accordion, navigation, slideshow and list elements store their records in
//! the flat `content` string: one record per line, sub-fields separated by
//! `|`. That string stays the storage format so existing projects load
//! unchanged; [`CompositeContent`] is the typed view editors work with.
//!
//! Decoding never fails. Blank lines are skipped and missing sub-fields fall
//! back to numbered placeholders.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

use crate::defaults::PLACEHOLDER_IMAGE_URL;
use crate::doc::ElementKind;

const RECORD_SEP: char = '\n';
const FIELD_SEP: char = '|';

/// One collapsible accordion section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionSection {
    pub title: String,
    pub content: String,
}

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub url: String,
}

/// Decoded content of a composite element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "records", rename_all = "lowercase")]
pub enum CompositeContent {
    Accordion(Vec<AccordionSection>),
    Navigation(Vec<NavItem>),
    /// Image URLs in display order.
    Slideshow(Vec<String>),
    List(Vec<String>),
}

impl CompositeContent {
    /// Decode `content` for an element of `kind`. Returns `None` for kinds
    /// whose content is not record-based.
    #[must_use]
    pub fn decode(kind: ElementKind, content: &str) -> Option<Self> {
        let records = records(content);
        let decoded = match kind {
            ElementKind::Accordion => Self::Accordion(
                records
                    .enumerate()
                    .map(|(i, line)| {
                        let (title, body) = split_fields(line);
                        AccordionSection {
                            title: or_placeholder(title, || format!("Section {}", i + 1)),
                            content: or_placeholder(body, || "Content here...".to_owned()),
                        }
                    })
                    .collect(),
            ),
            ElementKind::Navigation => Self::Navigation(
                records
                    .enumerate()
                    .map(|(i, line)| {
                        let (label, url) = split_fields(line);
                        NavItem {
                            label: or_placeholder(label, || format!("Link {}", i + 1)),
                            url: or_placeholder(url, || "#".to_owned()),
                        }
                    })
                    .collect(),
            ),
            ElementKind::Slideshow => Self::Slideshow(records.map(str::to_owned).collect()),
            ElementKind::List => Self::List(records.map(str::to_owned).collect()),
            _ => return None,
        };
        Some(decoded)
    }

    /// Encode back to the delimited storage format.
    #[must_use]
    pub fn encode(&self) -> String {
        let lines: Vec<String> = match self {
            Self::Accordion(sections) => sections.iter().map(|s| format!("{}|{}", s.title, s.content)).collect(),
            Self::Navigation(items) => items.iter().map(|n| format!("{}|{}", n.label, n.url)).collect(),
            Self::Slideshow(entries) | Self::List(entries) => entries.clone(),
        };
        lines.join("\n")
    }

    /// The element kind this payload belongs to.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Accordion(_) => ElementKind::Accordion,
            Self::Navigation(_) => ElementKind::Navigation,
            Self::Slideshow(_) => ElementKind::Slideshow,
            Self::List(_) => ElementKind::List,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Accordion(v) => v.len(),
            Self::Navigation(v) => v.len(),
            Self::Slideshow(v) | Self::List(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append the record an editor's "add" button creates.
    pub fn push_default(&mut self) {
        match self {
            Self::Accordion(v) => v.push(AccordionSection {
                title: "New Section".to_owned(),
                content: "Add your content here...".to_owned(),
            }),
            Self::Navigation(v) => v.push(NavItem { label: "New Link".to_owned(), url: "#".to_owned() }),
            Self::Slideshow(v) => v.push(PLACEHOLDER_IMAGE_URL.to_owned()),
            Self::List(v) => v.push("New item".to_owned()),
        }
    }

    /// Remove the record at `index`. Returns `false` when out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        match self {
            Self::Accordion(v) => {
                v.remove(index);
            }
            Self::Navigation(v) => {
                v.remove(index);
            }
            Self::Slideshow(v) | Self::List(v) => {
                v.remove(index);
            }
        }
        true
    }
}

/// Non-empty lines of a content string.
fn records(content: &str) -> impl Iterator<Item = &str> {
    content.split(RECORD_SEP).filter(|line| !line.is_empty())
}

/// First two `|`-separated fields of a record; further fields are ignored.
fn split_fields(line: &str) -> (&str, &str) {
    let mut fields = line.split(FIELD_SEP);
    let first = fields.next().unwrap_or("");
    let second = fields.next().unwrap_or("");
    (first, second)
}

fn or_placeholder(value: &str, placeholder: impl FnOnce() -> String) -> String {
    if value.is_empty() { placeholder() } else { value.to_owned() }
}
