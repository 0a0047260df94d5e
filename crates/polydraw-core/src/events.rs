//! Routing of input events to canvas operations.

use crate::canvas::{Canvas, CanvasResult};
use crate::geometry::Point;
use crate::input::{InputEvent, MouseButton};
use crate::tools::{ClickOutcome, ToolKind};

impl Canvas {
    /// Apply one input event.
    ///
    /// Returns whether the canvas needs to be redrawn.
    pub fn handle_event(&mut self, event: InputEvent) -> CanvasResult<bool> {
        log::trace!("Event: {:?}", event);
        match event {
            InputEvent::PointClicked { position, button } => match button {
                MouseButton::Primary => self.handle_click(position),
                MouseButton::Secondary => Ok(false),
            },
            InputEvent::DragStarted { position } => {
                Ok(self.selection().is_selecting() && self.begin_drag(position))
            }
            InputEvent::DragMoved { position } => Ok(self.drag_to(position)),
            InputEvent::DragEnded => Ok(self.end_drag().is_some()),
            InputEvent::KeyPressed { key } => {
                if self.tool_manager.current_tool != ToolKind::Select
                    || !self.selection().is_selecting()
                {
                    return Ok(false);
                }
                Ok(self.select_step(key).is_some())
            }
            InputEvent::ToolChanged { tool } => {
                self.set_tool(tool);
                Ok(true)
            }
            InputEvent::DeleteRequested => Ok(self.delete_selected().is_some()),
            InputEvent::UndoRequested => Ok(self.undo()),
            InputEvent::StyleChanged {
                stroke,
                fill,
                filled,
            } => {
                self.set_style(stroke, fill, filled);
                Ok(false)
            }
            InputEvent::TransformRequested { rotation, position } => {
                self.transform_selected(rotation, position)?;
                Ok(true)
            }
        }
    }

    fn handle_click(&mut self, position: Point) -> CanvasResult<bool> {
        let selecting = self.tool_manager.current_tool == ToolKind::Select;
        self.selection_mut().set_selecting(selecting);
        if selecting {
            self.select_at(position);
            return Ok(true);
        }

        match self.tool_manager.accept_click(position) {
            ClickOutcome::Ignored => Ok(false),
            ClickOutcome::Pending => Ok(true),
            ClickOutcome::Complete { kind, points } => {
                self.create_shape(kind, &points)?;
                Ok(true)
            }
        }
    }
}
