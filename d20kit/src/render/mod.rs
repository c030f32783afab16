mod recording;
mod renderer;
mod surface;
mod svg;
mod viewport;

pub use self::recording::{DrawCommand, RecordingSurface};
pub use self::renderer::{render_items, LabelTier, RenderItem, Renderer};
pub use self::surface::{Color, DrawSurface, Font, GradientStop, Paint, RadialGradient};
pub use self::svg::SvgSurface;
pub use self::viewport::{Projected, Projector, Viewport};
