//! Rendering: replays the document onto a [`Surface`].
//!
//! Scene replay is a pure function of the item list — clear, then stroke
//! every item in timestamp order, then the optional in-progress preview
//! shape on top. The incremental entry points (`draw_segment`, `erase_rect`)
//! serve freehand and eraser drags at pointer-move rate without a full
//! replay. Nothing here mutates application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{ARROW_WING_ANGLE, ARROW_WING_LEN, ERASER_RECT};
use crate::doc::{Board, ItemRef, Shape, ShapeKind, Stroke};
use crate::geometry::Point;
use crate::style::{self, PenStyle};
use crate::surface::Surface;

/// Replay the full scene: committed items in paint order, then the preview.
///
/// `width`/`height` are the surface dimensions to clear.
///
/// # Errors
///
/// Propagates the first failed surface primitive.
pub fn draw_scene<S: Surface>(
    surface: &mut S,
    width: f64,
    height: f64,
    board: &Board,
    preview: Option<&Shape>,
) -> Result<(), S::Error> {
    surface.clear_rect(0.0, 0.0, width, height);

    for item in board.sorted_items() {
        match item {
            ItemRef::Shape(shape) => draw_shape(surface, shape)?,
            ItemRef::Stroke(stroke) => draw_stroke(surface, stroke),
        }
    }

    if let Some(shape) = preview {
        draw_shape(surface, shape)?;
    }

    Ok(())
}

/// Stroke one parametric shape.
///
/// # Errors
///
/// Propagates a failed arc for circles.
pub fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape) -> Result<(), S::Error> {
    surface.set_stroke_color(&shape.color);
    surface.set_line_width(style::width_for(&shape.color));
    surface.set_opacity(shape.opacity);
    surface.set_round_caps(false);

    match shape.kind {
        ShapeKind::Line => {
            surface.begin_path();
            surface.move_to(shape.start);
            surface.line_to(shape.end);
            surface.stroke();
        }
        ShapeKind::Arrow => {
            surface.begin_path();
            surface.move_to(shape.start);
            surface.line_to(shape.end);
            append_arrowhead(surface, shape.start, shape.end);
            surface.stroke();
        }
        ShapeKind::Rectangle => {
            let x = shape.start.x.min(shape.end.x);
            let y = shape.start.y.min(shape.end.y);
            let w = (shape.end.x - shape.start.x).abs();
            let h = (shape.end.y - shape.start.y).abs();
            surface.stroke_rect(x, y, w, h);
        }
        ShapeKind::Circle => {
            let radius = shape.start.distance_to(shape.end);
            surface.begin_path();
            surface.arc(shape.start, radius)?;
            surface.stroke();
        }
    }

    Ok(())
}

/// Stroke one freehand record as a connected polyline.
pub fn draw_stroke<S: Surface>(surface: &mut S, stroke: &Stroke) {
    let Some(first) = stroke.points.first() else {
        return;
    };

    surface.set_stroke_color(&stroke.color);
    surface.set_line_width(stroke.line_width);
    surface.set_opacity(stroke.opacity);
    surface.set_round_caps(true);

    surface.begin_path();
    surface.move_to(*first);
    for point in &stroke.points[1..] {
        surface.line_to(*point);
    }
    surface.stroke();
}

/// Paint one freehand segment incrementally, without touching the rest of
/// the scene.
pub fn draw_segment<S: Surface>(surface: &mut S, from: Point, to: Point, pen: &PenStyle) {
    surface.set_stroke_color(&pen.color);
    surface.set_line_width(pen.width);
    surface.set_opacity(pen.opacity);
    surface.set_round_caps(true);

    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke();
}

/// Clear the eraser square centered on the pointer.
pub fn erase_rect<S: Surface>(surface: &mut S, at: Point) {
    surface.clear_rect(
        at.x - ERASER_RECT / 2.0,
        at.y - ERASER_RECT / 2.0,
        ERASER_RECT,
        ERASER_RECT,
    );
}

/// Append the two arrowhead wing segments to the current path.
///
/// Each wing is [`ARROW_WING_LEN`] long and sits [`ARROW_WING_ANGLE`] off
/// the shaft, oriented by the segment's angle.
fn append_arrowhead<S: Surface>(surface: &mut S, start: Point, end: Point) {
    let angle = start.angle_to(end);

    for wing in [angle - ARROW_WING_ANGLE, angle + ARROW_WING_ANGLE] {
        let tail = Point::new(
            end.x - ARROW_WING_LEN * wing.cos(),
            end.y - ARROW_WING_LEN * wing.sin(),
        );
        surface.move_to(end);
        surface.line_to(tail);
    }
}
