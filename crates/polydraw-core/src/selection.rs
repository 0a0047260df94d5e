//! Single-shape selection: nearest-vertex picking and keyboard stepping.

use crate::canvas::CanvasDocument;
use crate::geometry::{Point, distance};
use crate::input::ArrowKey;
use crate::shapes::ShapeId;

/// Which shape is selected, if any.
///
/// `selected` is a handle into the live document, never a copy of the shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ShapeId>,
    is_selecting: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }

    /// Whether the last interaction was a selection.
    pub fn is_selecting(&self) -> bool {
        self.is_selecting
    }

    pub fn set_selecting(&mut self, selecting: bool) {
        self.is_selecting = selecting;
    }

    /// Select a shape, replacing any previous selection.
    pub fn select(&mut self, id: ShapeId) {
        self.selected = Some(id);
        self.is_selecting = true;
    }

    /// Drop the selected shape; the selecting flag is left alone.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Find the shape owning the vertex nearest to `point`.
///
/// Shapes are scanned back to front and vertices in order; only a strictly
/// smaller distance replaces the current best, so ties go to the earlier vertex.
pub fn nearest_shape(document: &CanvasDocument, point: Point) -> Option<ShapeId> {
    let mut best: Option<(ShapeId, f64)> = None;
    for shape in document.shapes_ordered() {
        for &vertex in shape.vertices() {
            let dist = distance(point, vertex);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((shape.id(), dist));
            }
        }
    }
    best.map(|(id, _)| id)
}

/// The shape one step away from `current` in draw order, wrapping at both ends.
///
/// With nothing selected, or a stale handle, stepping starts from the first shape.
pub fn step(document: &CanvasDocument, current: Option<ShapeId>, key: ArrowKey) -> Option<ShapeId> {
    let len = document.len();
    if len == 0 {
        return None;
    }
    let index = match current.and_then(|id| document.position_of(id)) {
        Some(index) => index,
        None => {
            if current.is_some() {
                log::debug!("Selected shape is gone, stepping from the first shape");
            }
            0
        }
    };
    let next = match key {
        ArrowKey::Left => (index + len - 1) % len,
        ArrowKey::Right => (index + 1) % len,
    };
    document.id_at(next)
}
