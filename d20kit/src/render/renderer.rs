use std::cmp::Ordering;
use std::f64::consts::PI;

use slog::Logger;

use super::surface::{Color, DrawSurface, Font, GradientStop, Paint, RadialGradient};
use super::viewport::{Projector, Viewport};
use crate::die::{face_normal, Mesh};
use crate::math::quaternion::rotate;
use crate::math::{centroid, view_axis};
use crate::settings::Settings;
use crate::theme::Theme;
use crate::types::*;

const BACKGROUND: Color = Color::rgb(0x0b, 0x0e, 0x13);
const VIGNETTE_INNER: Color = Color::rgba(0, 0, 0, 0.0);
const VIGNETTE_OUTER: Color = Color::rgba(0, 0, 0, 7.0 / 15.0);
const LABEL_OUTLINE: Color = Color::rgba(0, 0, 0, 0.18);
const LABEL_FONT_FAMILY: &str = "Cinzel, Georgia, serif";

// Faces never get darker than this, even facing away from the light.
const AMBIENT: Real = 0.35;
const LABEL_AMBIENT: Real = 0.30;
const MIN_LABEL_LUMINANCE: Real = 0.20;

/// One face of the die as seen this frame, in view space.
///
/// These are rebuilt from scratch every frame; nothing carries over.
#[derive(Clone, Debug)]
pub struct RenderItem {
    pub face_index: usize,
    pub label: u8,
    pub vertices: [Vec3; 3],
    pub normal: Vec3,
    pub centroid: Vec3,
    /// Average z of the three vertices.
    pub depth: Real,
}

impl RenderItem {
    pub fn is_front_facing(&self) -> bool {
        self.normal.dot(&view_axis()) > 0.0
    }
}

/// Rotate the mesh into view space and order its faces back to front
/// (ascending average z) for the painter's algorithm.
pub fn render_items(mesh: &Mesh, orientation: &Quat) -> Vec<RenderItem> {
    let rotated: Vec<Vec3> = mesh
        .vertices()
        .iter()
        .map(|v| rotate(orientation, v))
        .collect();

    let mut items: Vec<RenderItem> = mesh
        .faces()
        .iter()
        .enumerate()
        .map(|(face_index, face)| {
            let [a, b, c] = face.indexes;
            let (a, b, c) = (rotated[a], rotated[b], rotated[c]);
            RenderItem {
                face_index,
                label: face.label,
                vertices: [a, b, c],
                // Re-derived rather than rotated, so they always match
                // the triangle actually being drawn.
                normal: face_normal(&a, &b, &c),
                centroid: centroid(&a, &b, &c),
                depth: (a.z + b.z + c.z) / 3.0,
            }
        })
        .collect();

    items.sort_by(|x, y| x.depth.partial_cmp(&y.depth).unwrap_or(Ordering::Equal));
    items
}

/// How prominently a face's label is drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelTier {
    Dim,
    Mid,
    Bright,
}

impl LabelTier {
    pub fn from_luminance(lum: Real) -> LabelTier {
        if lum <= 0.35 {
            LabelTier::Dim
        } else if lum <= 0.58 {
            LabelTier::Mid
        } else {
            LabelTier::Bright
        }
    }

    pub fn color(self) -> Color {
        match self {
            LabelTier::Dim => Color::rgb(0x6e, 0x73, 0x80),
            LabelTier::Mid => Color::rgb(0xb7, 0xbc, 0xc8),
            LabelTier::Bright => Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

/// Draws render items onto a `DrawSurface`: background, shaded
/// front faces with their labels, and the bounding ring.
pub struct Renderer {
    log: Logger,
    light: Vec3,
    camera_offset: Real,
}

impl Renderer {
    pub fn new(parent_log: &Logger, settings: &Settings) -> Renderer {
        Renderer {
            log: parent_log.new(o!("system" => "render")),
            light: settings.light(),
            camera_offset: settings.camera_offset,
        }
    }

    // Lambert term; zero for faces turned away from the light.
    fn diffuse(&self, normal: &Vec3) -> Real {
        crate::math::normalize(normal).dot(&self.light).max(0.0)
    }

    pub fn brightness(&self, normal: &Vec3) -> Real {
        (AMBIENT + (1.0 - AMBIENT) * self.diffuse(normal))
            .max(AMBIENT)
            .min(1.0)
    }

    pub fn label_luminance(&self, normal: &Vec3) -> Real {
        LABEL_AMBIENT + (1.0 - LABEL_AMBIENT) * self.diffuse(normal)
    }

    /// Draw a complete frame. `items` must already be in back-to-front
    /// order, as `render_items` returns them.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        items: &[RenderItem],
        viewport: &Viewport,
        theme: &Theme,
    ) {
        let projector = Projector::new(viewport, self.camera_offset);
        let dpr = viewport.device_pixel_ratio();
        let min = viewport.min_dimension();
        let edge = theme.edge();

        self.draw_background(surface, viewport);

        let font = Font {
            size: (min / dpr * 0.024).max(12.0) * dpr,
            family: LABEL_FONT_FAMILY.to_string(),
        };

        let mut visible = 0;
        for item in items.iter().filter(|item| item.is_front_facing()) {
            visible += 1;
            let [a, b, c] = &item.vertices;
            let triangle = [
                projector.project(a).point,
                projector.project(b).point,
                projector.project(c).point,
            ];

            surface.fill_triangle(&triangle, theme.shade(self.brightness(&item.normal)));
            surface.stroke_triangle(&triangle, edge, 1.2 * dpr);

            let lum = self.label_luminance(&item.normal);
            if lum > MIN_LABEL_LUMINANCE {
                let center = projector.project(&item.centroid).point;
                let at = Pt2::new(center.x, center.y + 1.0);
                let text = item.label.to_string();
                surface.fill_text(&text, at, &font, LabelTier::from_luminance(lum).color());
                surface.stroke_text(&text, at, &font, LABEL_OUTLINE, 0.7 * dpr);
            }
        }

        surface.stroke_arc(viewport.center(), min * 0.30, 0.0, PI * 2.0, edge, dpr);

        trace!(self.log, "Drew frame"; "visible_faces" => visible);
    }

    fn draw_background<S: DrawSurface + ?Sized>(&self, surface: &mut S, viewport: &Viewport) {
        let (width, height) = (viewport.width(), viewport.height());
        let min = viewport.min_dimension();

        surface.fill_rect(0.0, 0.0, width, height, &Paint::Solid(BACKGROUND));

        let focus = Pt2::new(width * 0.5, height * 0.45);
        let vignette = RadialGradient {
            inner_center: focus,
            inner_radius: min * 0.05,
            outer_center: focus,
            outer_radius: min * 0.6,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: VIGNETTE_INNER,
                },
                GradientStop {
                    offset: 1.0,
                    color: VIGNETTE_OUTER,
                },
            ],
        };
        surface.fill_rect(0.0, 0.0, width, height, &Paint::Radial(vignette));
    }
}
