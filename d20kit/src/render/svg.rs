use std::f64::consts::PI;

use super::surface::{Color, DrawSurface, Font, Paint, RadialGradient};
use crate::types::*;

/// Drawing surface that builds a standalone SVG document.
///
/// Draw a frame into it, then call `finish` to get the document text.
pub struct SvgSurface {
    width: Real,
    height: Real,
    defs: String,
    body: String,
    next_gradient_id: usize,
}

impl SvgSurface {
    pub fn new(width: Real, height: Real) -> SvgSurface {
        SvgSurface {
            width,
            height,
            defs: String::new(),
            body: String::new(),
            next_gradient_id: 0,
        }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n<defs>\n{defs}</defs>\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            defs = self.defs,
            body = self.body,
        )
    }

    fn add_gradient(&mut self, gradient: &RadialGradient) -> String {
        let id = format!("gradient{}", self.next_gradient_id);
        self.next_gradient_id += 1;

        self.defs.push_str(&format!(
            "<radialGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" cx=\"{}\" cy=\"{}\" r=\"{}\" fx=\"{}\" fy=\"{}\" fr=\"{}\">\n",
            id,
            gradient.outer_center.x,
            gradient.outer_center.y,
            gradient.outer_radius,
            gradient.inner_center.x,
            gradient.inner_center.y,
            gradient.inner_radius,
        ));
        for stop in &gradient.stops {
            self.defs.push_str(&format!(
                "<stop offset=\"{}\" {}/>\n",
                stop.offset,
                color_attributes("stop-color", "stop-opacity", stop.color),
            ));
        }
        self.defs.push_str("</radialGradient>\n");
        id
    }

    fn text(&mut self, text: &str, at: Pt2, font: &Font, paint_attributes: String) {
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" {}>{}</text>\n",
            at.x,
            at.y,
            font.size,
            escape(&font.family),
            paint_attributes,
            escape(text),
        ));
    }
}

fn color_attributes(color_name: &str, opacity_name: &str, color: Color) -> String {
    let rgb = format!("{}=\"rgb({},{},{})\"", color_name, color.r, color.g, color.b);
    if color.is_opaque() {
        rgb
    } else {
        format!("{} {}=\"{}\"", rgb, opacity_name, color.a)
    }
}

fn stroke_attributes(color: Color, line_width: Real) -> String {
    format!(
        "fill=\"none\" {} stroke-width=\"{}\" stroke-linejoin=\"round\"",
        color_attributes("stroke", "stroke-opacity", color),
        line_width,
    )
}

fn points_attribute(points: &[Pt2; 3]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl DrawSurface for SvgSurface {
    fn fill_rect(&mut self, x: Real, y: Real, width: Real, height: Real, paint: &Paint) {
        let fill = match paint {
            Paint::Solid(color) => color_attributes("fill", "fill-opacity", *color),
            Paint::Radial(gradient) => format!("fill=\"url(#{})\"", self.add_gradient(gradient)),
        };
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>\n",
            x, y, width, height, fill,
        ));
    }

    fn fill_triangle(&mut self, points: &[Pt2; 3], color: Color) {
        self.body.push_str(&format!(
            "<polygon points=\"{}\" {}/>\n",
            points_attribute(points),
            color_attributes("fill", "fill-opacity", color),
        ));
    }

    fn stroke_triangle(&mut self, points: &[Pt2; 3], color: Color, line_width: Real) {
        self.body.push_str(&format!(
            "<polygon points=\"{}\" {}/>\n",
            points_attribute(points),
            stroke_attributes(color, line_width),
        ));
    }

    fn fill_text(&mut self, text: &str, at: Pt2, font: &Font, color: Color) {
        self.text(text, at, font, color_attributes("fill", "fill-opacity", color));
    }

    fn stroke_text(&mut self, text: &str, at: Pt2, font: &Font, color: Color, line_width: Real) {
        self.text(text, at, font, stroke_attributes(color, line_width));
    }

    fn stroke_arc(
        &mut self,
        center: Pt2,
        radius: Real,
        start_angle: Real,
        end_angle: Real,
        color: Color,
        line_width: Real,
    ) {
        let sweep = end_angle - start_angle;
        if sweep.abs() >= PI * 2.0 {
            self.body.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>\n",
                center.x,
                center.y,
                radius,
                stroke_attributes(color, line_width),
            ));
            return;
        }

        let point_at = |angle: Real| {
            Pt2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };
        let (start, end) = (point_at(start_angle), point_at(end_angle));
        let large_arc = if sweep.abs() > PI { 1 } else { 0 };
        let clockwise = if sweep > 0.0 { 1 } else { 0 };
        self.body.push_str(&format!(
            "<path d=\"M {} {} A {} {} 0 {} {} {} {}\" {}/>\n",
            start.x,
            start.y,
            radius,
            radius,
            large_arc,
            clockwise,
            end.x,
            end.y,
            stroke_attributes(color, line_width),
        ));
    }
}
