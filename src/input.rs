//! Input model: tools, the toolbar state, and the pointer gesture machine.
//!
//! `Tool` and `ToolState` capture what the toolbar has selected; `Gesture` is
//! the active drag being tracked between pointer-down and pointer-up,
//! carrying all context needed to paint incrementally and to seal a record
//! on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::DEFAULT_COLOR;
use crate::doc::ShapeKind;
use crate::geometry::Point;
use crate::style::PenStyle;

/// Which drawing mode is active.
///
/// Modes are mutually exclusive. `Freehand` is the resting default: turning
/// any other mode off falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand pen (default).
    #[default]
    Freehand,
    /// Eraser: records white wide strokes and clears under the pointer.
    Eraser,
    /// One of the four parametric shape tools.
    Shape(ShapeKind),
}

/// Toolbar state: active tool and current color token.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pub tool: Tool,
    pub color: String,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Freehand,
            color: DEFAULT_COLOR.to_owned(),
        }
    }
}

impl ToolState {
    /// Select a color. Cancels an active shape tool or eraser; color choice
    /// itself is orthogonal to the mode.
    pub fn select_color(&mut self, color: &str) {
        self.color = color.to_owned();
        self.tool = Tool::Freehand;
    }

    /// Toggle a shape tool: re-clicking the active kind deactivates it,
    /// selecting another kind replaces it.
    pub fn select_shape_tool(&mut self, kind: ShapeKind) {
        self.tool = if self.tool == Tool::Shape(kind) {
            Tool::Freehand
        } else {
            Tool::Shape(kind)
        };
    }

    /// Toggle the eraser. Cancels an active shape tool.
    pub fn toggle_eraser(&mut self) {
        self.tool = if self.tool == Tool::Eraser {
            Tool::Freehand
        } else {
            Tool::Eraser
        };
    }

    /// The style a freehand drag started right now would paint with.
    #[must_use]
    pub fn pen(&self) -> PenStyle {
        match self.tool {
            Tool::Eraser => PenStyle::eraser(),
            _ => PenStyle::pen(&self.color),
        }
    }
}

/// The active pointer drag, if any.
///
/// Each variant carries the context accumulated since pointer-down; sealing
/// happens on pointer-up (or pointer-leave, treated identically).
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// No drag in progress; waiting for the next pointer-down.
    Idle,
    /// A freehand or eraser drag accumulating samples.
    Stroking {
        /// Samples so far; pointer-down contributes the first.
        points: Vec<Point>,
        /// Style fixed at pointer-down; the sealed record copies it.
        pen: PenStyle,
        /// Whether this drag is an eraser drag (clears under the pointer).
        erasing: bool,
    },
    /// A shape drag from an anchor corner to the live cursor.
    ShapeDrag {
        kind: ShapeKind,
        /// Where the drag started; the committed shape's `start`.
        anchor: Point,
        /// Latest pointer position; provisional `end` for the preview.
        cursor: Point,
    },
}

impl Default for Gesture {
    fn default() -> Self {
        Self::Idle
    }
}

impl Gesture {
    /// The position pointer-leave should seal at: the last observed sample.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Stroking { points, .. } => points.last().copied(),
            Self::ShapeDrag { cursor, .. } => Some(*cursor),
        }
    }
}
