//! Top-level engine: pointer protocol, tool actions, and paint effects.
//!
//! [`EngineCore`] holds everything that does not depend on the browser — the
//! board, toolbar state, and gesture machine — and is exercised directly by
//! native tests. [`Engine`] wraps it for the plugin: it owns the canvas
//! element, acquires the (possibly absent) 2D context, stamps wall-clock
//! timestamps, and executes the [`Action`]s the core hands back. When the
//! context is absent every paint effect is a no-op; the model still updates.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::doc::{Board, Shape, ShapeKind, SnapshotError, Stroke};
use crate::geometry::Point;
use crate::input::{Gesture, Tool, ToolState};
use crate::render;
use crate::style::PenStyle;

/// Paint effect returned from core handlers for the surface layer to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing to paint.
    None,
    /// Paint one freehand segment incrementally.
    Segment { from: Point, to: Point, pen: PenStyle },
    /// Clear the eraser square centered on a point.
    Erase { at: Point },
    /// Clear and replay all committed content plus any live preview.
    Repaint,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without a browser.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub board: Board,
    pub tools: ToolState,
    pub gesture: Gesture,
    /// Highest timestamp handed out so far; commits never go backwards.
    last_ts: i64,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Toolbar actions ---

    /// Select a pen color. Cancels an active shape tool or eraser.
    pub fn select_color(&mut self, color: &str) {
        self.tools.select_color(color);
    }

    /// Toggle a shape tool (mutually exclusive; re-click deactivates).
    pub fn select_shape_tool(&mut self, kind: ShapeKind) {
        self.tools.select_shape_tool(kind);
    }

    /// Toggle the eraser. Cancels an active shape tool.
    pub fn toggle_eraser(&mut self) {
        self.tools.toggle_eraser();
    }

    // --- Pointer protocol ---

    /// Begin a drag. Starting new work discards the redo branch.
    pub fn on_pointer_down(&mut self, at: Point) -> Action {
        self.board.invalidate_redo();

        match self.tools.tool {
            Tool::Freehand | Tool::Eraser => {
                let erasing = self.tools.tool == Tool::Eraser;
                self.gesture = Gesture::Stroking {
                    points: vec![at],
                    pen: self.tools.pen(),
                    erasing,
                };
                Action::None
            }
            Tool::Shape(kind) => {
                self.gesture = Gesture::ShapeDrag { kind, anchor: at, cursor: at };
                Action::None
            }
        }
    }

    /// Track a drag sample. Freehand and eraser paint incrementally; a shape
    /// drag requests a full replay so the preview follows the cursor.
    pub fn on_pointer_move(&mut self, at: Point) -> Action {
        match &mut self.gesture {
            Gesture::Idle => Action::None,
            Gesture::Stroking { points, pen, erasing } => {
                let from = points.last().copied().unwrap_or(at);
                points.push(at);
                if *erasing {
                    Action::Erase { at }
                } else {
                    Action::Segment { from, to: at, pen: pen.clone() }
                }
            }
            Gesture::ShapeDrag { cursor, .. } => {
                *cursor = at;
                Action::Repaint
            }
        }
    }

    /// End the drag: seal the pending stroke or commit the pending shape,
    /// stamped with the current (clamped) wall-clock time.
    pub fn on_pointer_up(&mut self, at: Point, now_ms: i64) -> Action {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => Action::None,
            Gesture::Stroking { points, pen, .. } => {
                let ts = self.stamp(now_ms);
                log::debug!("sealed stroke: {} points at ts {ts}", points.len());
                self.board.commit_stroke(Stroke::sealed(points, &pen, ts));
                Action::None
            }
            Gesture::ShapeDrag { kind, anchor, .. } => {
                let ts = self.stamp(now_ms);
                log::debug!("committed {kind:?} at ts {ts}");
                self.board
                    .commit_shape(Shape::new(kind, anchor, at, &self.tools.color, ts));
                Action::Repaint
            }
        }
    }

    /// The pointer left the canvas: treated exactly like pointer-up at the
    /// last observed position.
    pub fn on_pointer_leave(&mut self, now_ms: i64) -> Action {
        match self.gesture.last_position() {
            Some(at) => self.on_pointer_up(at, now_ms),
            None => Action::None,
        }
    }

    // --- History ---

    /// Remove the newest committed item. No-op on an empty board.
    pub fn undo(&mut self) -> Action {
        if self.board.undo() {
            log::debug!("undo: {} items remain", self.board.len());
            Action::Repaint
        } else {
            Action::None
        }
    }

    /// Reinstate the most recently undone item. No-op on an empty history.
    pub fn redo(&mut self) -> Action {
        if self.board.redo() {
            log::debug!("redo: {} items remain", self.board.len());
            Action::Repaint
        } else {
            Action::None
        }
    }

    // --- Persistence ---

    /// Encode the document as the persisted JSON format.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn snapshot_json(&self) -> Result<String, SnapshotError> {
        self.board.to_json()
    }

    /// Replace the document from persisted JSON and drop any drag in
    /// progress. The document is untouched when parsing fails.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::MalformedDocument`] for input missing either
    /// expected array.
    pub fn load_json(&mut self, json: &str) -> Result<(), SnapshotError> {
        self.board.load_json(json)?;
        self.gesture = Gesture::Idle;
        log::debug!(
            "loaded document: {} shapes, {} strokes",
            self.board.shapes().len(),
            self.board.strokes().len()
        );
        Ok(())
    }

    // --- Queries ---

    /// The in-progress shape to paint on top of the scene, if a shape drag
    /// is active. Never committed; pointer-up builds the real record.
    #[must_use]
    pub fn preview_shape(&self) -> Option<Shape> {
        match &self.gesture {
            Gesture::ShapeDrag { kind, anchor, cursor } => {
                Some(Shape::new(*kind, *anchor, *cursor, &self.tools.color, 0))
            }
            _ => None,
        }
    }

    /// Next commit timestamp: wall clock, clamped non-decreasing.
    fn stamp(&mut self, now_ms: i64) -> i64 {
        self.last_ts = now_ms.max(self.last_ts);
        self.last_ts
    }
}

/// The full whiteboard engine. Wraps [`EngineCore`] and owns the canvas.
pub struct Engine {
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// A canvas without a usable 2D context still yields a working engine:
    /// the model accepts every operation and paint effects are dropped.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let context = context_2d(&canvas);
        if context.is_none() {
            log::warn!("whiteboard canvas has no 2d context; drawing is disabled");
        }
        Self { canvas, context, core: EngineCore::new() }
    }

    // --- Pointer events (host wires DOM listeners here) ---

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let action = self.core.on_pointer_down(Point::new(x, y));
        self.perform(action);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let action = self.core.on_pointer_move(Point::new(x, y));
        self.perform(action);
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        let action = self.core.on_pointer_up(Point::new(x, y), now_ms());
        self.perform(action);
    }

    pub fn pointer_leave(&mut self) {
        let action = self.core.on_pointer_leave(now_ms());
        self.perform(action);
    }

    // --- Toolbar buttons ---

    pub fn select_color(&mut self, color: &str) {
        self.core.select_color(color);
    }

    pub fn select_shape_tool(&mut self, kind: ShapeKind) {
        self.core.select_shape_tool(kind);
    }

    pub fn toggle_eraser(&mut self) {
        self.core.toggle_eraser();
    }

    pub fn undo(&mut self) {
        let action = self.core.undo();
        self.perform(action);
    }

    pub fn redo(&mut self) {
        let action = self.core.redo();
        self.perform(action);
    }

    // --- Persistence (host wires file dialogs here) ---

    /// Encode the document for the host's save dialog.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn save_json(&self) -> Result<String, SnapshotError> {
        self.core.snapshot_json()
    }

    /// Replace the document from the host's load dialog and repaint.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::MalformedDocument`] for input missing either
    /// expected array; the current document is left untouched.
    pub fn load_json(&mut self, json: &str) -> Result<(), SnapshotError> {
        self.core.load_json(json)?;
        self.perform(Action::Repaint);
        Ok(())
    }

    /// Clear and replay the scene, e.g. after the host resizes the panel.
    pub fn repaint(&mut self) {
        self.perform(Action::Repaint);
    }

    // --- Delegated queries (the host reflects these into its toolbar) ---

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.core.tools.tool
    }

    /// The current color token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.core.tools.color
    }

    /// Execute a paint effect against the context, if one exists.
    fn perform(&mut self, action: Action) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        match action {
            Action::None => {}
            Action::Segment { from, to, pen } => render::draw_segment(context, from, to, &pen),
            Action::Erase { at } => render::erase_rect(context, at),
            Action::Repaint => {
                let width = f64::from(self.canvas.width());
                let height = f64::from(self.canvas.height());
                let preview = self.core.preview_shape();
                if let Err(err) =
                    render::draw_scene(context, width, height, &self.core.board, preview.as_ref())
                {
                    log::warn!("whiteboard repaint failed: {err:?}");
                }
            }
        }
    }
}

/// Wall clock in milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// The canvas's 2D context, if the platform provides one.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let object = match canvas.get_context("2d") {
        Ok(Some(object)) => object,
        Ok(None) | Err(_) => return None,
    };
    match object.dyn_into::<CanvasRenderingContext2d>() {
        Ok(context) => Some(context),
        Err(_) => None,
    }
}
