//! Pen styles derived from the color palette.
//!
//! Colors are plain CSS tokens on the wire; everything the renderer needs
//! beyond the token itself (line width, global alpha) is derived from the
//! color's palette class, so the same rule applies to strokes at creation
//! time and to shapes at replay time.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::consts::{
    ERASER_COLOR, ERASER_WIDTH, PEN_WIDTH, WASH_COLORS, WASH_OPACITY, WASH_WIDTH,
};

/// Everything the surface needs set before stroking: color, width, alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct PenStyle {
    pub color: String,
    pub width: f64,
    pub opacity: f64,
}

impl PenStyle {
    /// The style a freehand drag in `color` records and paints with.
    #[must_use]
    pub fn pen(color: &str) -> Self {
        Self {
            color: color.to_owned(),
            width: width_for(color),
            opacity: opacity_for(color),
        }
    }

    /// The fixed white wide style eraser drags record and paint with.
    #[must_use]
    pub fn eraser() -> Self {
        Self {
            color: ERASER_COLOR.to_owned(),
            width: ERASER_WIDTH,
            opacity: 1.0,
        }
    }
}

/// Whether a color token belongs to the wash (marker) subset.
#[must_use]
pub fn is_wash(color: &str) -> bool {
    WASH_COLORS.contains(&color)
}

/// Line width for a color token. Unknown tokens draw like ordinary pens.
#[must_use]
pub fn width_for(color: &str) -> f64 {
    if is_wash(color) { WASH_WIDTH } else { PEN_WIDTH }
}

/// Global alpha for a color token.
#[must_use]
pub fn opacity_for(color: &str) -> f64 {
    if is_wash(color) { WASH_OPACITY } else { 1.0 }
}
