use super::surface::{Color, DrawSurface, Font, Paint};
use crate::types::*;

/// One call made against a `RecordingSurface`.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: Real,
        y: Real,
        width: Real,
        height: Real,
        paint: Paint,
    },
    FillTriangle {
        points: [Pt2; 3],
        color: Color,
    },
    StrokeTriangle {
        points: [Pt2; 3],
        color: Color,
        line_width: Real,
    },
    FillText {
        text: String,
        at: Pt2,
        font: Font,
        color: Color,
    },
    StrokeText {
        text: String,
        at: Pt2,
        font: Font,
        color: Color,
        line_width: Real,
    },
    StrokeArc {
        center: Pt2,
        radius: Real,
        start_angle: Real,
        end_angle: Real,
        color: Color,
        line_width: Real,
    },
}

/// Drawing surface that just remembers what it was asked to draw.
///
/// Handy for tests, and for hosts that want to replay frames
/// onto something else later.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand over everything recorded so far, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn filled_triangles(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillTriangle { .. }))
            .count()
    }

    /// Text of every filled label, in drawing order.
    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: Real, y: Real, width: Real, height: Real, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            paint: paint.clone(),
        });
    }

    fn fill_triangle(&mut self, points: &[Pt2; 3], color: Color) {
        self.commands.push(DrawCommand::FillTriangle {
            points: *points,
            color,
        });
    }

    fn stroke_triangle(&mut self, points: &[Pt2; 3], color: Color, line_width: Real) {
        self.commands.push(DrawCommand::StrokeTriangle {
            points: *points,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, at: Pt2, font: &Font, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            font: font.clone(),
            color,
        });
    }

    fn stroke_text(&mut self, text: &str, at: Pt2, font: &Font, color: Color, line_width: Real) {
        self.commands.push(DrawCommand::StrokeText {
            text: text.to_string(),
            at,
            font: font.clone(),
            color,
            line_width,
        });
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
        self.commands.push(DrawCommand::StrokeArc {
            center,
            radius,
            start_angle,
            end_angle,
            color,
            line_width,
        });
    }
}
