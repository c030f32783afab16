use crate::settings::Settings;
use crate::types::*;

/// The drawing surface's size and how big the die should be on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    // Device pixels.
    width: Real,
    height: Real,
    device_pixel_ratio: Real,
    scale: Real,
}

impl Viewport {
    /// Sizes are in logical units (CSS pixels, points, ...); the device
    /// pixel size is derived from them and the device pixel ratio.
    ///
    /// Nonsense input degrades rather than failing: a missing or
    /// non-positive ratio counts as 1, and negative or NaN sizes as 0.
    pub fn new(
        logical_width: Real,
        logical_height: Real,
        device_pixel_ratio: Real,
        settings: &Settings,
    ) -> Viewport {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(settings.max_device_pixel_ratio)
        } else {
            1.0
        };
        let device_size = |logical: Real| {
            if logical.is_finite() && logical > 0.0 {
                (logical * dpr).floor()
            } else {
                0.0
            }
        };
        Viewport {
            width: device_size(logical_width),
            height: device_size(logical_height),
            device_pixel_ratio: dpr,
            scale: settings.scale_for_width(logical_width),
        }
    }

    pub fn width(&self) -> Real {
        self.width
    }

    pub fn height(&self) -> Real {
        self.height
    }

    pub fn min_dimension(&self) -> Real {
        self.width.min(self.height)
    }

    pub fn device_pixel_ratio(&self) -> Real {
        self.device_pixel_ratio
    }

    pub fn scale(&self) -> Real {
        self.scale
    }

    pub fn center(&self) -> Pt2 {
        Pt2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Where a view-space point lands on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub point: Pt2,
    /// Distance from the camera along the view axis.
    pub depth: Real,
}

/// Fixed-camera perspective projection onto a `Viewport`.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    center: Pt2,
    // Screen size of one view-space unit at unit distance.
    extent: Real,
    camera_offset: Real,
}

impl Projector {
    pub fn new(viewport: &Viewport, camera_offset: Real) -> Projector {
        Projector {
            center: viewport.center(),
            extent: viewport.min_dimension() * viewport.scale(),
            camera_offset,
        }
    }

    pub fn project(&self, v: &Vec3) -> Projected {
        let depth = v.z + self.camera_offset;
        let perspective = 1.0 / depth;
        Projected {
            point: Pt2::new(
                self.center.x + v.x * perspective * self.extent,
                self.center.y + v.y * perspective * self.extent,
            ),
            depth,
        }
    }
}
