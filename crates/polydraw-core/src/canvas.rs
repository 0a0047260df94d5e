//! Canvas document and session state.

use crate::config::CanvasConfig;
use crate::geometry::Point;
use crate::history::{ChangeRecord, DEFAULT_HISTORY_CAPACITY, History};
use crate::input::ArrowKey;
use crate::render::RenderFrame;
use crate::selection::{self, Selection};
use crate::shapes::{RgbColor, Shape, ShapeError, ShapeId, ShapeKind, ShapeStyle};
use crate::tools::{ToolKind, ToolManager};
use std::collections::HashMap;
use thiserror::Error;

/// Largest rotation, in either direction, accepted by a transform.
pub const MAX_ROTATION_DEGREES: i32 = 360;

/// Canvas operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("No shape is selected")]
    NothingSelected,
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),
    #[error("Rotation {0} is outside -360..=360 degrees")]
    InvalidRotation(i32),
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// The live shapes, in draw order.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    /// All shapes in the document, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Z-order of shapes (back to front).
    z_order: Vec<ShapeId>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of the others.
    ///
    /// Returns false, leaving the document untouched, if a shape with the same
    /// identity is already present.
    pub fn add_shape(&mut self, shape: Shape) -> bool {
        let id = shape.id();
        if self.shapes.contains_key(&id) {
            log::warn!("Shape {} is already on the canvas", id);
            return false;
        }
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        true
    }

    /// Remove a shape from the document. Absent shapes are a no-op.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let shape = self.shapes.remove(&id)?;
        self.z_order.retain(|&shape_id| shape_id != id);
        Some(shape)
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// First shape, back to front, matching the predicate.
    pub fn find(&self, mut predicate: impl FnMut(&Shape) -> bool) -> Option<&Shape> {
        self.shapes_ordered().find(|shape| predicate(shape))
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Shape IDs in z-order.
    pub fn z_order(&self) -> &[ShapeId] {
        &self.z_order
    }

    /// Draw-order index of a shape.
    pub fn position_of(&self, id: ShapeId) -> Option<usize> {
        self.z_order.iter().position(|&shape_id| shape_id == id)
    }

    /// Shape ID at a draw-order index.
    pub fn id_at(&self, index: usize) -> Option<ShapeId> {
        self.z_order.get(index).copied()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// A drag of the selected shape in progress.
#[derive(Debug, Clone)]
struct DragState {
    id: ShapeId,
    origin: Point,
    /// Offset already applied to the shape.
    applied: (i32, i32),
    /// The shape as it was when the drag started.
    before: Shape,
}

/// Canvas session: the document plus everything needed to edit it.
#[derive(Debug, Clone)]
pub struct Canvas {
    document: CanvasDocument,
    history: History,
    selection: Selection,
    /// Tool manager.
    pub tool_manager: ToolManager,
    config: CanvasConfig,
    drag: Option<DragState>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with default configuration.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create a canvas with custom configuration.
    pub fn with_config(config: CanvasConfig) -> Self {
        let mut tool_manager = ToolManager::new();
        tool_manager.current_style = config.initial_style();
        tool_manager.close_tolerance = config.polygon_close_tolerance;
        let capacity = if config.history_capacity == 0 {
            log::warn!("History capacity 0 would disable undo, using {}", DEFAULT_HISTORY_CAPACITY);
            DEFAULT_HISTORY_CAPACITY
        } else {
            config.history_capacity
        };
        Self {
            document: CanvasDocument::new(),
            history: History::new(capacity),
            selection: Selection::new(),
            tool_manager,
            config,
            drag: None,
        }
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The selected shape, if it is still on the canvas.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection
            .selected()
            .and_then(|id| self.document.get_shape(id))
    }

    /// Set the current tool, dropping any half-built shape and abandoning a drag.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool_manager.set_tool(tool);
        self.cancel_drag();
    }

    /// Style for shapes created from now on.
    pub fn set_style(&mut self, stroke: RgbColor, fill: RgbColor, filled: bool) {
        self.tool_manager.current_style = ShapeStyle::new(stroke, fill, filled);
    }

    /// Build a shape from clicked points and add it to the canvas.
    pub fn create_shape(&mut self, kind: ShapeKind, points: &[Point]) -> CanvasResult<ShapeId> {
        let shape = Shape::build(kind, points, self.tool_manager.current_style)?;
        let id = shape.id();
        self.document.add_shape(shape.clone());
        self.history.record(ChangeRecord::Create { after: shape });
        log::info!("Created {} {}", kind, id);
        Ok(id)
    }

    /// Select the shape with the vertex nearest to `point`.
    pub fn select_at(&mut self, point: Point) -> Option<ShapeId> {
        let id = selection::nearest_shape(&self.document, point)?;
        self.selection.select(id);
        log::debug!("Selected {} near ({}, {})", id, point.x, point.y);
        Some(id)
    }

    /// Step the selection to the previous or next shape in draw order.
    ///
    /// The candidate's pivot is then picked like a click, so a shape sharing
    /// that position but drawn earlier wins.
    pub fn select_step(&mut self, key: ArrowKey) -> Option<ShapeId> {
        let candidate = selection::step(&self.document, self.selection.selected(), key)?;
        let pivot = self.document.get_shape(candidate)?.pivot()?;
        self.select_at(pivot)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Delete the selected shape.
    ///
    /// Returns the removed shape's ID, or `None` when there was nothing to delete.
    pub fn delete_selected(&mut self) -> Option<ShapeId> {
        if !self.selection.is_selecting() {
            return None;
        }
        self.cancel_drag();
        let id = self.selection.selected()?;
        self.selection.clear();
        match self.document.remove_shape(id) {
            Some(shape) => {
                self.history.record(ChangeRecord::Delete { before: shape });
                log::info!("Deleted {}", id);
                Some(id)
            }
            None => {
                log::debug!("Delete skipped, shape {} is no longer on the canvas", id);
                None
            }
        }
    }

    /// Rotate the selected shape by `rotation` degrees and move its pivot to `target`.
    ///
    /// The edited shape replaces the selected one on top of the draw order.
    /// Targets outside the canvas are clamped to its edges.
    pub fn transform_selected(&mut self, rotation: i32, target: Point) -> CanvasResult<ShapeId> {
        if rotation.abs() > MAX_ROTATION_DEGREES {
            return Err(CanvasError::InvalidRotation(rotation));
        }
        let id = self.selection.selected().ok_or(CanvasError::NothingSelected)?;
        self.cancel_drag();
        let before = self
            .document
            .remove_shape(id)
            .ok_or(CanvasError::ShapeNotFound(id))?;
        self.tool_manager.cancel();

        let target = Point::new(
            target.x.clamp(0, self.config.canvas_width.max(0)),
            target.y.clamp(0, self.config.canvas_height.max(0)),
        );
        let mut after = before.duplicate();
        after.rotate(rotation);
        if let Some(pivot) = after.pivot() {
            after.translate(target.x.saturating_sub(pivot.x), target.y.saturating_sub(pivot.y));
        }

        let new_id = after.id();
        self.document.add_shape(after.clone());
        self.history.record(ChangeRecord::Update { before, after });
        self.selection.clear();
        log::info!("Transformed {} into {}", id, new_id);
        Ok(new_id)
    }

    /// Start dragging the selected shape from `point`.
    pub fn begin_drag(&mut self, point: Point) -> bool {
        self.cancel_drag();
        let Some(shape) = self.selected_shape() else {
            return false;
        };
        self.drag = Some(DragState {
            id: shape.id(),
            origin: point,
            applied: (0, 0),
            before: shape.clone(),
        });
        true
    }

    /// Move the dragged shape so it follows the pointer.
    pub fn drag_to(&mut self, point: Point) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let total = (
            point.x.saturating_sub(drag.origin.x),
            point.y.saturating_sub(drag.origin.y),
        );
        let (dx, dy) = (
            total.0.saturating_sub(drag.applied.0),
            total.1.saturating_sub(drag.applied.1),
        );
        match self.document.get_shape_mut(drag.id) {
            Some(shape) => {
                shape.translate(dx, dy);
                drag.applied = total;
                true
            }
            None => {
                log::debug!("Dragged shape {} disappeared", drag.id);
                self.drag = None;
                false
            }
        }
    }

    /// Finish a drag, committing the move as an update.
    ///
    /// Returns the ID of the moved shape, or `None` if nothing moved.
    pub fn end_drag(&mut self) -> Option<ShapeId> {
        let drag = self.drag.take()?;
        if drag.applied == (0, 0) {
            return None;
        }
        let moved = self.document.remove_shape(drag.id)?;
        let after = moved.duplicate();
        let new_id = after.id();
        self.document.add_shape(after.clone());
        self.history.record(ChangeRecord::Update {
            before: drag.before,
            after,
        });
        self.selection.select(new_id);
        log::info!("Moved {} by ({}, {})", drag.id, drag.applied.0, drag.applied.1);
        Some(new_id)
    }

    /// Abandon a drag in progress, putting the shape back where it started.
    ///
    /// Nothing is recorded, so the log never misses a move.
    pub fn cancel_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let id = drag.id;
        match self.document.get_shape_mut(id) {
            Some(shape) => {
                *shape = drag.before;
                log::debug!("Drag of {} abandoned", id);
            }
            None => log::debug!("Abandoned drag of {}, shape already gone", id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Reverse the most recent change.
    ///
    /// Returns true if a change was undone, false if the history was empty.
    pub fn undo(&mut self) -> bool {
        self.cancel_drag();
        let Some(record) = self.history.undo_last() else {
            return false;
        };
        let action = record.action();
        match record {
            ChangeRecord::Create { after } => {
                if self.document.remove_shape(after.id()).is_none() {
                    log::debug!("Undo create: shape {} already gone", after.id());
                }
            }
            ChangeRecord::Delete { before } => {
                self.document.add_shape(before.duplicate());
            }
            ChangeRecord::Update { before, after } => {
                if self.document.remove_shape(after.id()).is_some() {
                    self.document.add_shape(before);
                } else {
                    log::debug!("Undo update: shape {} already gone", after.id());
                }
            }
        }
        self.selection.clear();
        log::info!("Undid {:?}", action);
        true
    }

    /// Describe the whole canvas for the renderer.
    ///
    /// The selected shape is outlined in the selection color; its stored style
    /// is not touched.
    pub fn render_frame(&self) -> RenderFrame {
        let palette = &self.config.palette;
        let shapes = self
            .document
            .shapes_ordered()
            .filter_map(|shape| match shape.render_description() {
                Ok(mut desc) => {
                    if self.selection.is_selected(desc.id) {
                        desc.stroke = palette.selection;
                    }
                    Some(desc)
                }
                Err(err) => {
                    log::warn!("Skipping shape {}: {}", shape.id(), err);
                    None
                }
            })
            .collect();
        RenderFrame {
            background: palette.background,
            shapes,
            pending_points: self.tool_manager.pending_points().to_vec(),
            marker_color: self.tool_manager.current_style.stroke_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ChangeAction;

    fn square_points(x: i32) -> [Point; 2] {
        [Point::new(x, 0), Point::new(x + 10, 10)]
    }

    fn canvas_with_squares(n: i32) -> (Canvas, Vec<ShapeId>) {
        let mut canvas = Canvas::new();
        let ids = (0..n)
            .map(|i| {
                canvas
                    .create_shape(ShapeKind::Square, &square_points(i * 100))
                    .unwrap()
            })
            .collect();
        (canvas, ids)
    }

    #[test]
    fn test_document_creation() {
        let doc = CanvasDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_add_and_remove_shape() {
        let mut doc = CanvasDocument::new();
        let shape = Shape::build(ShapeKind::Circle, &[Point::new(0, 0), Point::new(8, 0)], ShapeStyle::default())
            .unwrap();
        let id = shape.id();

        assert!(doc.add_shape(shape.clone()));
        assert!(!doc.add_shape(shape));
        assert_eq!(doc.len(), 1);
        assert!(doc.get_shape(id).is_some());

        assert!(doc.remove_shape(id).is_some());
        assert!(doc.remove_shape(id).is_none());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_identity_not_value_equality() {
        let mut doc = CanvasDocument::new();
        let shape = Shape::build(ShapeKind::Square, &square_points(0), ShapeStyle::default()).unwrap();
        let twin = shape.duplicate();
        let (a, b) = (shape.id(), twin.id());
        doc.add_shape(shape);
        doc.add_shape(twin);

        doc.remove_shape(b);
        assert_eq!(doc.z_order(), &[a]);
    }

    #[test]
    fn test_find_and_order() {
        let (canvas, ids) = canvas_with_squares(3);
        let doc = canvas.document();
        assert_eq!(doc.z_order(), ids.as_slice());
        assert_eq!(doc.position_of(ids[2]), Some(2));
        let found = doc.find(|s| s.pivot() == Some(Point::new(100, 0))).map(Shape::id);
        assert_eq!(found, Some(ids[1]));
    }

    #[test]
    fn test_create_records_history() {
        let (canvas, ids) = canvas_with_squares(1);
        let last = canvas.history().last().unwrap();
        assert_eq!(last.action(), ChangeAction::Create);
        assert_eq!(last.live_id(), Some(ids[0]));
    }

    #[test]
    fn test_create_with_too_few_points_changes_nothing() {
        let mut canvas = Canvas::new();
        let err = canvas
            .create_shape(ShapeKind::Triangle, &[Point::new(0, 0)])
            .unwrap_err();
        assert!(matches!(err, CanvasError::Shape(ShapeError::InsufficientPoints { .. })));
        assert!(canvas.document().is_empty());
        assert!(canvas.history().is_empty());
    }

    #[test]
    fn test_six_creates_keep_five_and_undo() {
        let (mut canvas, ids) = canvas_with_squares(6);
        assert_eq!(canvas.history().len(), 5);

        assert!(canvas.undo());
        assert!(!canvas.document().contains(ids[5]));
        assert_eq!(canvas.document().len(), 5);

        for _ in 0..4 {
            assert!(canvas.undo());
        }
        assert_eq!(canvas.document().z_order(), &[ids[0]]);
        assert!(!canvas.undo());
        assert_eq!(canvas.document().len(), 1);
    }

    #[test]
    fn test_delete_then_undo_restores_shape() {
        let (mut canvas, ids) = canvas_with_squares(2);
        let original = canvas.document().get_shape(ids[0]).cloned().unwrap();

        canvas.select_at(Point::new(0, 0));
        assert_eq!(canvas.delete_selected(), Some(ids[0]));
        assert_eq!(canvas.document().len(), 1);
        assert_eq!(canvas.history().last().map(ChangeRecord::action), Some(ChangeAction::Delete));

        assert!(canvas.undo());
        assert_eq!(canvas.document().len(), 2);
        let restored = canvas
            .document()
            .find(|s| s.same_content(&original))
            .unwrap();
        assert_ne!(restored.id(), original.id());
        assert!(canvas.selection().selected().is_none());
    }

    #[test]
    fn test_delete_requires_selection() {
        let (mut canvas, _) = canvas_with_squares(1);
        assert_eq!(canvas.delete_selected(), None);
        assert_eq!(canvas.document().len(), 1);
    }

    #[test]
    fn test_transform_rotates_and_moves() {
        let mut canvas = Canvas::new();
        let id = canvas
            .create_shape(ShapeKind::Triangle, &[Point::new(10, 10), Point::new(20, 10), Point::new(10, 20)])
            .unwrap();
        canvas.select_at(Point::new(10, 10));

        let new_id = canvas.transform_selected(90, Point::new(100, 100)).unwrap();
        assert_ne!(new_id, id);
        assert!(!canvas.document().contains(id));
        let shape = canvas.document().get_shape(new_id).unwrap();
        assert_eq!(
            shape.vertices(),
            &[Point::new(100, 100), Point::new(100, 110), Point::new(90, 100)]
        );
        assert_eq!(shape.rotation(), 90);
        assert!(canvas.selection().selected().is_none());

        assert!(canvas.undo());
        let restored = canvas.document().get_shape(id).unwrap();
        assert_eq!(restored.pivot(), Some(Point::new(10, 10)));
        assert!(!canvas.document().contains(new_id));
    }

    #[test]
    fn test_transform_validation() {
        let (mut canvas, ids) = canvas_with_squares(1);
        assert_eq!(
            canvas.transform_selected(0, Point::new(0, 0)),
            Err(CanvasError::NothingSelected)
        );
        canvas.select_at(Point::new(0, 0));
        assert_eq!(
            canvas.transform_selected(361, Point::new(0, 0)),
            Err(CanvasError::InvalidRotation(361))
        );
        assert!(canvas.document().contains(ids[0]));

        let new_id = canvas.transform_selected(0, Point::new(-50, 99999)).unwrap();
        let pivot = canvas.document().get_shape(new_id).and_then(Shape::pivot);
        assert_eq!(pivot, Some(Point::new(0, canvas.config().canvas_height)));
    }

    #[test]
    fn test_drag_follows_pointer_and_commits_update() {
        let (mut canvas, ids) = canvas_with_squares(1);
        canvas.select_at(Point::new(0, 0));
        assert!(canvas.begin_drag(Point::new(5, 5)));
        assert!(canvas.drag_to(Point::new(15, 5)));
        assert!(canvas.drag_to(Point::new(25, 10)));
        assert_eq!(
            canvas.document().get_shape(ids[0]).and_then(Shape::pivot),
            Some(Point::new(20, 5))
        );

        let moved = canvas.end_drag().unwrap();
        assert_eq!(canvas.selection().selected(), Some(moved));
        assert_eq!(canvas.history().last().map(ChangeRecord::action), Some(ChangeAction::Update));

        assert!(canvas.undo());
        assert_eq!(
            canvas.document().get_shape(ids[0]).and_then(Shape::pivot),
            Some(Point::new(0, 0))
        );
    }

    #[test]
    fn test_drag_without_movement_records_nothing() {
        let (mut canvas, _) = canvas_with_squares(1);
        canvas.select_at(Point::new(0, 0));
        canvas.begin_drag(Point::new(3, 3));
        assert_eq!(canvas.end_drag(), None);
        assert_eq!(canvas.history().len(), 1);
    }

    #[test]
    fn test_tool_change_reverts_abandoned_drag() {
        let (mut canvas, ids) = canvas_with_squares(1);
        canvas.select_at(Point::new(0, 0));
        canvas.begin_drag(Point::new(0, 0));
        canvas.drag_to(Point::new(200, 200));

        canvas.set_tool(ToolKind::Triangle);
        assert!(!canvas.is_dragging());
        assert_eq!(
            canvas.document().get_shape(ids[0]).and_then(Shape::pivot),
            Some(Point::new(0, 0))
        );
        assert_eq!(canvas.history().len(), 1);
        assert_eq!(canvas.end_drag(), None);
    }

    #[test]
    fn test_undo_during_drag_reverts_move_first() {
        let (mut canvas, ids) = canvas_with_squares(2);
        canvas.select_at(Point::new(0, 0));
        canvas.begin_drag(Point::new(0, 0));
        canvas.drag_to(Point::new(40, 60));

        assert!(canvas.undo());
        assert!(!canvas.is_dragging());
        assert!(!canvas.document().contains(ids[1]));
        assert_eq!(
            canvas.document().get_shape(ids[0]).and_then(Shape::pivot),
            Some(Point::new(0, 0))
        );
        assert_eq!(canvas.history().len(), 1);
    }

    #[test]
    fn test_negative_canvas_size_clamps_to_origin() {
        let config = CanvasConfig {
            canvas_width: -1,
            canvas_height: -20,
            ..CanvasConfig::default()
        };
        let mut canvas = Canvas::with_config(config);
        canvas.create_shape(ShapeKind::Square, &square_points(0)).unwrap();
        canvas.select_at(Point::new(0, 0));

        let new_id = canvas.transform_selected(0, Point::new(5, 5)).unwrap();
        let pivot = canvas.document().get_shape(new_id).and_then(Shape::pivot);
        assert_eq!(pivot, Some(Point::new(0, 0)));
    }

    #[test]
    fn test_zero_history_capacity_keeps_undo() {
        let config = CanvasConfig {
            history_capacity: 0,
            ..CanvasConfig::default()
        };
        let mut canvas = Canvas::with_config(config);
        canvas.create_shape(ShapeKind::Square, &square_points(0)).unwrap();
        assert_eq!(canvas.history().len(), 1);
        assert!(canvas.undo());
        assert!(canvas.document().is_empty());
    }

    #[test]
    fn test_extreme_coordinates_select_and_drag() {
        let (mut canvas, ids) = canvas_with_squares(1);
        assert_eq!(canvas.select_at(Point::new(i32::MIN, 0)), Some(ids[0]));

        canvas.begin_drag(Point::new(i32::MAX, 0));
        assert!(canvas.drag_to(Point::new(i32::MIN, 0)));
        let moved = canvas.end_drag().unwrap();
        let pivot = canvas.document().get_shape(moved).and_then(Shape::pivot);
        assert_eq!(pivot, Some(Point::new(i32::MIN, 0)));
    }

    #[test]
    fn test_undo_create_after_update_is_skipped() {
        let (mut canvas, ids) = canvas_with_squares(1);
        canvas.select_at(Point::new(0, 0));
        let new_id = canvas.transform_selected(0, Point::new(300, 300)).unwrap();
        canvas.select_at(Point::new(300, 300));
        canvas.delete_selected();

        assert!(canvas.undo()); // delete
        assert!(canvas.undo()); // update: the re-added duplicate is not `new_id`
        assert!(canvas.document().get_shape(ids[0]).is_none());
        assert!(canvas.document().get_shape(new_id).is_none());
        assert_eq!(canvas.document().len(), 1);
        assert!(canvas.undo()); // create: original id is gone, skipped
        assert_eq!(canvas.document().len(), 1);
    }

    #[test]
    fn test_render_frame_highlights_without_mutating() {
        let (mut canvas, ids) = canvas_with_squares(2);
        canvas.select_at(Point::new(100, 0));
        let frame = canvas.render_frame();
        let palette = canvas.config().palette;

        assert_eq!(frame.shapes.len(), 2);
        assert_eq!(frame.shape(ids[0]).map(|d| d.stroke), Some(palette.stroke));
        assert_eq!(frame.shape(ids[1]).map(|d| d.stroke), Some(palette.selection));
        let stored = canvas.document().get_shape(ids[1]).unwrap();
        assert_eq!(stored.style().stroke_color, palette.stroke);

        canvas.clear_selection();
        let frame = canvas.render_frame();
        assert_eq!(frame.shape(ids[1]).map(|d| d.stroke), Some(palette.stroke));
    }

    #[test]
    fn test_new_shapes_use_current_style() {
        let mut canvas = Canvas::new();
        canvas.set_style(RgbColor::new(1, 2, 3), RgbColor::new(4, 5, 6), true);
        let id = canvas.create_shape(ShapeKind::Square, &square_points(0)).unwrap();
        let style = *canvas.document().get_shape(id).unwrap().style();
        assert_eq!(style, ShapeStyle::new(RgbColor::new(1, 2, 3), RgbColor::new(4, 5, 6), true));
    }
}
