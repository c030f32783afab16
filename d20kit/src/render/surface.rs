use crate::types::*;

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Real,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: Real) -> Color {
        Color { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// CSS colour syntax: `rgb(...)` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// 0 at the inner circle, 1 at the outer.
    pub offset: Real,
    pub color: Color,
}

/// A gradient between two circles, like the canvas `createRadialGradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Pt2,
    pub inner_radius: Real,
    pub outer_center: Pt2,
    pub outer_radius: Real,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Radial(RadialGradient),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// In device pixels.
    pub size: Real,
    /// CSS-style fallback list, e.g. `"Georgia, serif"`.
    pub family: String,
}

/// The handful of 2D primitives the renderer needs.
///
/// Coordinates are device pixels with the origin at the top left.
/// Text is centred on `at`, both horizontally and vertically.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: Real, y: Real, width: Real, height: Real, paint: &Paint);

    fn fill_triangle(&mut self, points: &[Pt2; 3], color: Color);

    fn stroke_triangle(&mut self, points: &[Pt2; 3], color: Color, line_width: Real);

    fn fill_text(&mut self, text: &str, at: Pt2, font: &Font, color: Color);

    fn stroke_text(&mut self, text: &str, at: Pt2, font: &Font, color: Color, line_width: Real);

    /// Angles in radians, clockwise from the positive x-axis (y points down).
    fn stroke_arc(
        &mut self,
        center: Pt2,
        radius: Real,
        start_angle: Real,
        end_angle: Real,
        color: Color,
        line_width: Real,
    );
}
