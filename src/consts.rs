//! Shared numeric constants for the whiteboard engine.

use std::f64::consts::PI;

// ── Pens ────────────────────────────────────────────────────────

/// Line width for ordinary palette pens.
pub const PEN_WIDTH: f64 = 2.0;

/// Line width for wash (marker) colors.
pub const WASH_WIDTH: f64 = 10.0;

/// Global alpha for wash colors; the semi-transparent marker effect.
pub const WASH_OPACITY: f64 = 0.25;

/// Pen color applied when no color has been selected yet.
pub const DEFAULT_COLOR: &str = "black";

/// Opaque pen colors offered by the toolbar.
pub const PEN_COLORS: &[&str] = &["black", "red", "green", "blue"];

/// Wash marker colors; drawn wide and semi-transparent.
pub const WASH_COLORS: &[&str] = &["yellow", "cyan", "magenta"];

// ── Eraser ──────────────────────────────────────────────────────

/// Stroke color recorded for eraser drags. White over a white board reads as
/// erased; underlying items are never removed.
pub const ERASER_COLOR: &str = "white";

/// Line width for replayed eraser strokes.
pub const ERASER_WIDTH: f64 = 20.0;

/// Side length of the square cleared under the pointer while erasing live.
pub const ERASER_RECT: f64 = 20.0;

// ── Arrowheads ──────────────────────────────────────────────────

/// Length of each arrowhead wing segment, in canvas units.
pub const ARROW_WING_LEN: f64 = 15.0;

/// Half-angle between an arrowhead wing and the shaft (30°).
pub const ARROW_WING_ANGLE: f64 = PI / 6.0;
