//! Shared constants for the slide preview renderer (all in SVG user units).

// ── Canvas ──────────────────────────────────────────────────────────
pub(super) const CANVAS_PADDING: f64 = 12.0;
pub(super) const LANE_LINE_WIDTH: f64 = 0.5;

// ── Notes ───────────────────────────────────────────────────────────
pub(super) const NOTE_CORNER_RADIUS: f64 = 1.5;
pub(super) const NOTE_BORDER_WIDTH: f64 = 1.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "#000000";
pub(super) const LANE_LINE_COLOR: &str = "#404040";
pub(super) const NOTE_DARK_COLOR: &str = "#00108a"; // rgb(0, 16, 138)
pub(super) const NOTE_LIGHT_COLOR: &str = "#566aff"; // rgb(86, 106, 255)
