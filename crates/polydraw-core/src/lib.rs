//! Polydraw Core Library
//!
//! Shape model, selection, undo history and event routing for the polydraw
//! canvas. Rendering is left to the caller: the canvas hands out a
//! [`RenderFrame`] describing what to draw.

pub mod canvas;
pub mod config;
pub mod events;
pub mod geometry;
pub mod history;
pub mod input;
pub mod render;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::{Canvas, CanvasDocument, CanvasError, CanvasResult};
pub use config::{CanvasConfig, Palette};
pub use geometry::{Bounds, Point};
pub use history::{ChangeAction, ChangeRecord, History};
pub use input::{ArrowKey, InputEvent, MouseButton};
pub use render::{Outline, RenderDescription, RenderFrame};
pub use selection::Selection;
pub use shapes::{RgbColor, Shape, ShapeError, ShapeId, ShapeKind, ShapeStyle};
pub use tools::{ToolKind, ToolManager};
