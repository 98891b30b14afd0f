//! Shared numeric constants for the canvas crate.

// ── Placement ───────────────────────────────────────────────────

/// Canvas-space x of a freshly added element.
pub const INITIAL_X: f64 = 50.0;

/// Canvas-space y of a freshly added element.
pub const INITIAL_Y: f64 = 50.0;

/// Offset applied on both axes when duplicating an element.
pub const DUPLICATE_OFFSET: f64 = 30.0;

// ── Resize ──────────────────────────────────────────────────────

/// Smallest width a right-edge resize may commit, in pixels.
pub const MIN_RESIZE_WIDTH: f64 = 50.0;

/// Smallest height a bottom-edge resize may commit, in pixels.
pub const MIN_RESIZE_HEIGHT: f64 = 30.0;

/// Width used when neither the styles nor the renderer report one.
pub const FALLBACK_WIDTH: f64 = 100.0;

/// Height used when neither the styles nor the renderer report one.
pub const FALLBACK_HEIGHT: f64 = 50.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Thickness of a resize handle strip in screen pixels, centred on the edge.
pub const RESIZE_HANDLE_PX: f64 = 20.0;

// ── Canvas bounds ───────────────────────────────────────────────

/// Width of the fixed design canvas.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Height of the fixed design canvas.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Horizontal margin kept visible when clamping a drag to the canvas.
pub const CANVAS_MARGIN_X: f64 = 100.0;

/// Vertical margin kept visible when clamping a drag to the canvas.
pub const CANVAS_MARGIN_Y: f64 = 50.0;
