//! Polydraw Render Library
//!
//! Renderer abstraction for polydraw frames, with an SVG backend used by the
//! headless driver.

mod path;
mod renderer;
mod svg;

pub use path::{marker_path, outline_path};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, ShapeRenderer};
pub use svg::SvgRenderer;
