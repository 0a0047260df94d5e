//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use polydraw_core::geometry::Point;
use polydraw_core::render::{RenderDescription, RenderFrame};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The frame to render.
    pub frame: &'a RenderFrame,
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Outline width for shapes.
    pub stroke_width: f64,
    /// Radius of pending point markers.
    pub marker_radius: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(frame: &'a RenderFrame, viewport_size: Size) -> Self {
        Self {
            frame,
            viewport_size,
            background_color: frame.background.into(),
            stroke_width: 1.0,
            marker_radius: 3.0,
        }
    }

    /// Set the shape outline width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the pending point marker radius.
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Fails if the viewport has no area.
    pub fn check_viewport(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        if width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(RendererError::InvalidViewport { width, height })
        }
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene for a frame, replacing any previous one.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Per-item drawing, used by renderers while building a scene.
pub trait ShapeRenderer {
    /// Render one shape outline, filled if it has a fill color.
    fn render_shape(&mut self, shape: &RenderDescription, stroke_width: f64) -> RenderResult<()>;

    /// Render a pending point marker.
    fn render_marker(&mut self, point: Point, radius: f64, color: Color) -> RenderResult<()>;
}
