//! Headless editing core for the site builder canvas.
//!
//! The crate owns everything between raw pointer/key events and the page
//! data: the element model and per-kind defaults, the page store with its
//! snapshot history, and the drag, resize and inline-edit interactions. It
//! never renders and never touches a UI tree; the host pushes in canvas
//! placement and measured sizes and consumes the [`engine::Action`]s that
//! come back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event-driven facade over the store and interaction state |
//! | [`store`] | Pages, current page, tracked mutations, undo/redo |
//! | [`history`] | Generic snapshot history |
//! | [`doc`] | Element, page, and partial-update types |
//! | [`defaults`] | Default content and styles per element kind |
//! | [`content`] | Typed view of composite element content |
//! | [`selection`] | Selection and inline-edit focus |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing bodies and resize handles |
//! | [`geometry`] | Points, rects, canvas frame, drag bounds |
//! | [`consts`] | Shared numeric constants (positions, minimum sizes, canvas) |

pub mod consts;
pub mod content;
pub mod defaults;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod selection;
pub mod store;
