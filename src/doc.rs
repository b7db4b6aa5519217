//! Document model: drawn items, the board store, and the JSON snapshot.
//!
//! This module defines the two persisted record types (`Shape`, `Stroke`),
//! the owned/borrowed item unions used for undo and paint ordering, and the
//! runtime store that owns all committed content (`Board`). Data flows in
//! from the input engine (commits) and from the host's load path (snapshot
//! deserialization); the renderer reads back via `sorted_items` to determine
//! draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::style::{self, PenStyle};

/// The kind of a parametric shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Directed arrow (line with a two-wing arrowhead at `end`).
    Arrow,
    /// Axis-aligned rectangle outline spanned by `start`/`end`.
    Rectangle,
    /// Straight line segment.
    Line,
    /// Circle centered on `start` through `end`.
    Circle,
}

/// Marker tag for freehand records on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    #[default]
    Drawing,
}

/// A parametric shape, created atomically on pointer-up.
///
/// Immutable once committed; undo removes it whole and redo reinserts it.
/// Line width is not stored — the renderer derives it from the color's
/// palette class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Anchor recorded at pointer-down.
    pub start: Point,
    /// Release position recorded at pointer-up.
    pub end: Point,
    /// CSS color token.
    pub color: String,
    /// Global alpha, derived from the color class at creation.
    pub opacity: f64,
    /// Commit time in milliseconds since the Unix epoch; paint order.
    pub timestamp: i64,
}

impl Shape {
    #[must_use]
    pub fn new(kind: ShapeKind, start: Point, end: Point, color: &str, timestamp: i64) -> Self {
        Self {
            kind,
            start,
            end,
            color: color.to_owned(),
            opacity: style::opacity_for(color),
            timestamp,
        }
    }
}

/// A freehand stroke: the points of one pointer drag, sealed on pointer-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    #[serde(default)]
    pub kind: StrokeKind,
    /// Drag samples in order; never empty (pointer-down contributes the first).
    pub points: Vec<Point>,
    /// CSS color token; `"white"` for eraser drags.
    pub color: String,
    pub line_width: f64,
    pub opacity: f64,
    /// Commit time in milliseconds since the Unix epoch; paint order.
    pub timestamp: i64,
}

impl Stroke {
    /// Seal a drag's samples into a stroke record.
    #[must_use]
    pub fn sealed(points: Vec<Point>, pen: &PenStyle, timestamp: i64) -> Self {
        Self {
            kind: StrokeKind::Drawing,
            points,
            color: pen.color.clone(),
            line_width: pen.width,
            opacity: pen.opacity,
            timestamp,
        }
    }
}

/// An owned drawable item; what the undo history holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Shape(Shape),
    Stroke(Stroke),
}

impl Item {
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Shape(shape) => shape.timestamp,
            Self::Stroke(stroke) => stroke.timestamp,
        }
    }
}

/// A borrowed drawable item; what the renderer iterates in paint order.
#[derive(Debug, Clone, Copy)]
pub enum ItemRef<'a> {
    Shape(&'a Shape),
    Stroke(&'a Stroke),
}

impl ItemRef<'_> {
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Shape(shape) => shape.timestamp,
            Self::Stroke(stroke) => stroke.timestamp,
        }
    }
}

/// The persisted document: a verbatim snapshot of both collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub saved_shapes: Vec<Shape>,
    pub hand_drawn_shapes: Vec<Stroke>,
}

/// Errors from the snapshot codec.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The input is not a document with both expected arrays.
    #[error("malformed whiteboard document: {0}")]
    MalformedDocument(#[source] serde_json::Error),
    /// The in-memory document could not be encoded.
    #[error("failed to encode whiteboard document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// In-memory store of committed whiteboard content.
///
/// Shapes and strokes live in separate collections (mirroring the persisted
/// format); paint order is the union sorted by timestamp. `removed` is the
/// linear redo stack — committing new work discards it.
#[derive(Debug, Default)]
pub struct Board {
    shapes: Vec<Shape>,
    strokes: Vec<Stroke>,
    removed: Vec<Item>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a shape. Clears the redo stack.
    pub fn commit_shape(&mut self, shape: Shape) {
        self.removed.clear();
        self.shapes.push(shape);
    }

    /// Commit a sealed stroke. Clears the redo stack.
    pub fn commit_stroke(&mut self, stroke: Stroke) {
        self.removed.clear();
        self.strokes.push(stroke);
    }

    /// Discard any redoable items. Called when a new gesture begins, so a
    /// drag that never commits still invalidates the redo branch.
    pub fn invalidate_redo(&mut self) {
        self.removed.clear();
    }

    /// Remove the most recently committed item — the globally maximum
    /// timestamp across both collections — and push it on the redo stack.
    ///
    /// Returns false (and changes nothing) on an empty board. On a timestamp
    /// tie the shape wins; the choice is arbitrary but deterministic.
    pub fn undo(&mut self) -> bool {
        let newest_shape = index_of_newest(self.shapes.iter().map(|s| s.timestamp));
        let newest_stroke = index_of_newest(self.strokes.iter().map(|s| s.timestamp));

        match (newest_shape, newest_stroke) {
            (None, None) => false,
            (Some(i), None) => {
                self.removed.push(Item::Shape(self.shapes.remove(i)));
                true
            }
            (None, Some(i)) => {
                self.removed.push(Item::Stroke(self.strokes.remove(i)));
                true
            }
            (Some(si), Some(ki)) => {
                if self.strokes[ki].timestamp > self.shapes[si].timestamp {
                    self.removed.push(Item::Stroke(self.strokes.remove(ki)));
                } else {
                    self.removed.push(Item::Shape(self.shapes.remove(si)));
                }
                true
            }
        }
    }

    /// Reinsert the most recently undone item into its original collection.
    ///
    /// Returns false on an empty redo stack.
    pub fn redo(&mut self) -> bool {
        match self.removed.pop() {
            Some(Item::Shape(shape)) => {
                self.shapes.push(shape);
                true
            }
            Some(Item::Stroke(stroke)) => {
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Both collections as a verbatim, round-trippable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            saved_shapes: self.shapes.clone(),
            hand_drawn_shapes: self.strokes.clone(),
        }
    }

    /// Replace all content with a snapshot. Clears the redo stack.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        self.shapes = snapshot.saved_shapes;
        self.strokes = snapshot.hand_drawn_shapes;
        self.removed.clear();
    }

    /// Encode the board as the persisted JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(&self.snapshot()).map_err(SnapshotError::Encode)
    }

    /// Parse and load a persisted JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::MalformedDocument`] if the input lacks either
    /// expected array or a record does not parse. The board is untouched on
    /// failure.
    pub fn load_json(&mut self, json: &str) -> Result<(), SnapshotError> {
        let snapshot: Snapshot =
            serde_json::from_str(json).map_err(SnapshotError::MalformedDocument)?;
        self.load_snapshot(snapshot);
        Ok(())
    }

    /// All items in paint order: timestamp ascending, stable on ties.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<ItemRef<'_>> {
        let mut items: Vec<ItemRef<'_>> = self
            .shapes
            .iter()
            .map(ItemRef::Shape)
            .chain(self.strokes.iter().map(ItemRef::Stroke))
            .collect();
        items.sort_by_key(ItemRef::timestamp);
        items
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of redoable items.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.removed.len()
    }

    /// Number of committed items across both collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len() + self.strokes.len()
    }

    /// Returns `true` if nothing has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.strokes.is_empty()
    }
}

/// Index of the first maximum in a timestamp sequence, if any.
fn index_of_newest(timestamps: impl Iterator<Item = i64>) -> Option<usize> {
    let mut newest: Option<(usize, i64)> = None;
    for (index, ts) in timestamps.enumerate() {
        match newest {
            Some((_, best)) if ts <= best => {}
            _ => newest = Some((index, ts)),
        }
    }
    newest.map(|(index, _)| index)
}
