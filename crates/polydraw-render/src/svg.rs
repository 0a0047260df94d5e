//! SVG renderer implementation.

use crate::path::{marker_path, outline_path};
use crate::renderer::{RenderContext, RenderResult, Renderer, ShapeRenderer};
use kurbo::Size;
use peniko::Color;
use polydraw_core::geometry::Point;
use polydraw_core::render::{RenderDescription, RenderFrame};
use polydraw_core::shapes::RgbColor;
use std::fmt::Write;

fn css_color(color: Color) -> String {
    RgbColor::from(color).to_hex()
}

/// Renders frames as standalone SVG documents.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    /// Create a new SVG renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a frame in one call.
    pub fn render(frame: &RenderFrame, viewport_size: Size) -> RenderResult<String> {
        let mut renderer = Self::new();
        renderer.build_scene(&RenderContext::new(frame, viewport_size))?;
        Ok(renderer.into_svg())
    }

    /// The last built document.
    pub fn svg(&self) -> &str {
        &self.document
    }

    pub fn into_svg(self) -> String {
        self.document
    }
}

impl ShapeRenderer for SvgRenderer {
    fn render_shape(&mut self, shape: &RenderDescription, stroke_width: f64) -> RenderResult<()> {
        let path = outline_path(&shape.outline);
        let fill = match shape.fill {
            Some(fill) => fill.to_hex(),
            None => "none".to_string(),
        };
        writeln!(
            self.document,
            r#"  <path data-kind="{}" d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            shape.kind,
            path.to_svg(),
            fill,
            shape.stroke.to_hex(),
            stroke_width
        )?;
        Ok(())
    }

    fn render_marker(&mut self, point: Point, radius: f64, color: Color) -> RenderResult<()> {
        writeln!(
            self.document,
            r#"  <path d="{}" fill="{}"/>"#,
            marker_path(point, radius).to_svg(),
            css_color(color)
        )?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.check_viewport()?;
        self.document.clear();

        let Size { width, height } = ctx.viewport_size;
        writeln!(
            self.document,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            self.document,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            css_color(self.background_color(ctx))
        )?;

        for shape in &ctx.frame.shapes {
            self.render_shape(shape, ctx.stroke_width)?;
        }
        let marker_color: Color = ctx.frame.marker_color.into();
        for &point in &ctx.frame.pending_points {
            self.render_marker(point, ctx.marker_radius, marker_color)?;
        }

        self.document.push_str("</svg>\n");
        log::debug!(
            "Built SVG scene: {} shape(s), {} marker(s)",
            ctx.frame.shapes.len(),
            ctx.frame.pending_points.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polydraw_core::canvas::Canvas;
    use polydraw_core::input::InputEvent;
    use polydraw_core::tools::ToolKind;

    fn frame_after(events: Vec<InputEvent>) -> RenderFrame {
        let mut canvas = Canvas::new();
        for event in events {
            canvas.handle_event(event).unwrap();
        }
        canvas.render_frame()
    }

    #[test]
    fn test_empty_canvas() {
        let frame = frame_after(Vec::new());
        let svg = SvgRenderer::render(&frame, Size::new(200.0, 100.0)).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_shapes_in_draw_order() {
        let frame = frame_after(vec![
            InputEvent::ToolChanged { tool: ToolKind::Triangle },
            InputEvent::click(0, 0),
            InputEvent::click(10, 0),
            InputEvent::click(0, 10),
            InputEvent::ToolChanged { tool: ToolKind::Circle },
            InputEvent::click(50, 50),
            InputEvent::click(70, 50),
        ]);
        let svg = SvgRenderer::render(&frame, Size::new(200.0, 100.0)).unwrap();
        let triangle = svg.find(r#"data-kind="triangle""#).unwrap();
        let circle = svg.find(r#"data-kind="circle""#).unwrap();
        assert!(triangle < circle);
        assert!(svg.contains(r#"fill="none""#));
    }

    #[test]
    fn test_pending_points_get_markers() {
        let frame = frame_after(vec![InputEvent::click(5, 5)]);
        let mut renderer = SvgRenderer::new();
        renderer
            .build_scene(&RenderContext::new(&frame, Size::new(20.0, 20.0)))
            .unwrap();
        assert_eq!(renderer.svg().matches("<path").count(), 1);
        assert!(renderer.svg().contains(r##"fill="#000000""##));
    }

    #[test]
    fn test_filled_shape() {
        let frame = frame_after(vec![
            InputEvent::StyleChanged {
                stroke: RgbColor::black(),
                fill: RgbColor::crimson(),
                filled: true,
            },
            InputEvent::click(0, 0),
            InputEvent::click(10, 10),
        ]);
        let svg = SvgRenderer::render(&frame, Size::new(20.0, 20.0)).unwrap();
        assert!(svg.contains(r##"fill="#dc143c""##));
    }
}
