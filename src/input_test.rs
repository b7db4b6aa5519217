#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{ERASER_WIDTH, PEN_WIDTH, WASH_WIDTH};

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_freehand() {
    assert_eq!(Tool::default(), Tool::Freehand);
}

#[test]
fn tool_shape_variants_are_distinct() {
    assert_ne!(Tool::Shape(ShapeKind::Line), Tool::Shape(ShapeKind::Arrow));
    assert_ne!(Tool::Shape(ShapeKind::Circle), Tool::Freehand);
}

// =============================================================
// ToolState: defaults
// =============================================================

#[test]
fn tool_state_defaults_to_black_freehand() {
    let tools = ToolState::default();
    assert_eq!(tools.tool, Tool::Freehand);
    assert_eq!(tools.color, "black");
}

// =============================================================
// ToolState: shape tool toggling
// =============================================================

#[test]
fn selecting_a_shape_tool_activates_it() {
    let mut tools = ToolState::default();
    tools.select_shape_tool(ShapeKind::Rectangle);
    assert_eq!(tools.tool, Tool::Shape(ShapeKind::Rectangle));
}

#[test]
fn reclicking_the_active_shape_tool_deactivates_it() {
    let mut tools = ToolState::default();
    tools.select_shape_tool(ShapeKind::Circle);
    tools.select_shape_tool(ShapeKind::Circle);
    assert_eq!(tools.tool, Tool::Freehand);
}

#[test]
fn selecting_another_shape_tool_leaves_exactly_one_active() {
    let mut tools = ToolState::default();
    tools.select_shape_tool(ShapeKind::Line);
    tools.select_shape_tool(ShapeKind::Arrow);
    assert_eq!(tools.tool, Tool::Shape(ShapeKind::Arrow));
}

#[test]
fn selecting_a_color_cancels_the_shape_tool() {
    let mut tools = ToolState::default();
    tools.select_shape_tool(ShapeKind::Line);
    tools.select_color("red");
    assert_eq!(tools.tool, Tool::Freehand);
    assert_eq!(tools.color, "red");
}

#[test]
fn activating_the_eraser_cancels_the_shape_tool() {
    let mut tools = ToolState::default();
    tools.select_shape_tool(ShapeKind::Arrow);
    tools.toggle_eraser();
    assert_eq!(tools.tool, Tool::Eraser);
}

// =============================================================
// ToolState: eraser and color
// =============================================================

#[test]
fn eraser_toggles_off_back_to_freehand() {
    let mut tools = ToolState::default();
    tools.toggle_eraser();
    assert_eq!(tools.tool, Tool::Eraser);
    tools.toggle_eraser();
    assert_eq!(tools.tool, Tool::Freehand);
}

#[test]
fn selecting_a_color_cancels_the_eraser() {
    let mut tools = ToolState::default();
    tools.toggle_eraser();
    tools.select_color("green");
    assert_eq!(tools.tool, Tool::Freehand);
    assert_eq!(tools.color, "green");
}

#[test]
fn color_survives_tool_toggling() {
    let mut tools = ToolState::default();
    tools.select_color("blue");
    tools.toggle_eraser();
    tools.toggle_eraser();
    assert_eq!(tools.color, "blue");
}

// =============================================================
// ToolState: derived pen
// =============================================================

#[test]
fn freehand_pen_follows_the_palette() {
    let mut tools = ToolState::default();
    tools.select_color("red");
    let pen = tools.pen();
    assert_eq!(pen.color, "red");
    assert_eq!(pen.width, PEN_WIDTH);
    assert_eq!(pen.opacity, 1.0);
}

#[test]
fn wash_color_pen_is_wide_and_translucent() {
    let mut tools = ToolState::default();
    tools.select_color("cyan");
    let pen = tools.pen();
    assert_eq!(pen.width, WASH_WIDTH);
    assert_eq!(pen.opacity, crate::consts::WASH_OPACITY);
}

#[test]
fn eraser_pen_is_white_regardless_of_color() {
    let mut tools = ToolState::default();
    tools.select_color("red");
    tools.toggle_eraser();
    let pen = tools.pen();
    assert_eq!(pen.color, "white");
    assert_eq!(pen.width, ERASER_WIDTH);
}

// =============================================================
// Gesture
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert_eq!(Gesture::default(), Gesture::Idle);
}

#[test]
fn idle_gesture_has_no_position() {
    assert!(Gesture::Idle.last_position().is_none());
}

#[test]
fn stroking_gesture_reports_last_sample() {
    let g = Gesture::Stroking {
        points: vec![Point::new(1.0, 1.0), Point::new(4.0, 5.0)],
        pen: PenStyle::pen("black"),
        erasing: false,
    };
    assert_eq!(g.last_position(), Some(Point::new(4.0, 5.0)));
}

#[test]
fn shape_drag_reports_the_cursor() {
    let g = Gesture::ShapeDrag {
        kind: ShapeKind::Circle,
        anchor: Point::new(0.0, 0.0),
        cursor: Point::new(9.0, 9.0),
    };
    assert_eq!(g.last_position(), Some(Point::new(9.0, 9.0)));
}
