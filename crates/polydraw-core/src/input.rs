//! Events the UI layer feeds into the canvas.

use crate::geometry::Point;
use crate::shapes::RgbColor;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
}

/// Keys that step the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowKey {
    Left,
    Right,
}

/// A primitive input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointClicked {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer pressed; starts dragging the selected shape.
    DragStarted { position: Point },
    DragMoved { position: Point },
    DragEnded,
    KeyPressed { key: ArrowKey },
    ToolChanged { tool: ToolKind },
    DeleteRequested,
    UndoRequested,
    StyleChanged {
        stroke: RgbColor,
        fill: RgbColor,
        filled: bool,
    },
    /// Rotate the selected shape by `rotation` degrees, then move its pivot to `position`.
    TransformRequested { rotation: i32, position: Point },
}

impl InputEvent {
    /// Primary-button click at (x, y).
    pub fn click(x: i32, y: i32) -> Self {
        InputEvent::PointClicked {
            position: Point::new(x, y),
            button: MouseButton::Primary,
        }
    }
}
