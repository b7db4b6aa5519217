//! Drawing-surface abstraction.
//!
//! The renderer is written against [`Surface`] so scene replay stays
//! independent of the browser: the real implementation is
//! [`web_sys::CanvasRenderingContext2d`], and tests substitute a recording
//! surface to assert paint order. The trait mirrors the small slice of the
//! Canvas2D API the whiteboard needs — stroke state plus path, rectangle,
//! and arc primitives.

use web_sys::CanvasRenderingContext2d;

use crate::geometry::Point;

/// A raster surface the renderer can stroke onto.
pub trait Surface {
    /// Error produced by fallible primitives (`JsValue` on the browser).
    type Error;

    /// Erase a rectangle back to transparent/background.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Set the stroke color from a CSS color token.
    fn set_stroke_color(&mut self, color: &str);

    fn set_line_width(&mut self, width: f64);

    /// Set the global alpha applied to subsequent strokes.
    fn set_opacity(&mut self, opacity: f64);

    /// Round caps and joins for polylines; square/butt otherwise.
    fn set_round_caps(&mut self, round: bool);

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Append a full circle to the current path.
    ///
    /// # Errors
    ///
    /// Propagates the surface's failure for an invalid arc (e.g. a negative
    /// radius reported by the canvas).
    fn arc(&mut self, center: Point, radius: f64) -> Result<(), Self::Error>;

    /// Stroke the current path.
    fn stroke(&mut self);

    /// Stroke a rectangle outline directly.
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

impl Surface for CanvasRenderingContext2d {
    type Error = wasm_bindgen::JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.set_global_alpha(opacity);
    }

    fn set_round_caps(&mut self, round: bool) {
        if round {
            self.set_line_cap("round");
            self.set_line_join("round");
        } else {
            self.set_line_cap("butt");
            self.set_line_join("miter");
        }
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, p: Point) {
        CanvasRenderingContext2d::move_to(self, p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        CanvasRenderingContext2d::line_to(self, p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64) -> Result<(), Self::Error> {
        CanvasRenderingContext2d::arc(self, center.x, center.y, radius, 0.0, std::f64::consts::TAU)
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, width, height);
    }
}
