//! The typed turtle command model.

use crate::color::PaletteColor;
use serde::{Deserialize, Serialize};

/// A single validated turtle command.
///
/// Each kind carries two fixed capabilities, exposed through
/// [`mutates_state`](Self::mutates_state) and
/// [`produces_stroke`](Self::produces_stroke): whether replaying the command
/// updates the turtle pose, and whether it draws a visible primitive while the
/// pen is down. The capabilities depend only on the kind, never on the
/// instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Return to the home position with zero heading.
    Home,
    /// Raise or lower the pen.
    SetPenState { down: bool },
    /// Show or hide the turtle glyph.
    SetVisible { visible: bool },
    /// Set the heading to an absolute angle.
    RotateAbsolute { radians: f32 },
    /// Rotate counter-clockwise by an angle.
    RotateLeft { radians: f32 },
    /// Rotate clockwise by an angle.
    RotateRight { radians: f32 },
    /// Jump to an absolute position without drawing.
    MoveTo { x: f32, y: f32 },
    /// Set the stroke width for subsequent strokes.
    SetStrokeWidth { width: f32 },
    /// Walk along the current heading, drawing a line segment.
    ///
    /// `step` is the spoken forward distance, negated at construction so that
    /// "forward" moves toward the top of a y-down drawing surface.
    DrawLine { step: f32 },
    /// Draw a circle centered on the current position. Leaves the pose alone.
    DrawCircle { radius: f32 },
    /// Draw a regular polygon centered on the current position. Leaves the
    /// pose alone; the side length is a replay-config concern.
    DrawPolygon { sides: u32 },
    /// Set the stroke color for subsequent strokes.
    SetColor { color: PaletteColor },
}

impl Command {
    /// Whether replaying this command updates the turtle pose.
    pub fn mutates_state(&self) -> bool {
        !matches!(self, Command::DrawCircle { .. } | Command::DrawPolygon { .. })
    }

    /// Whether this command draws a visible primitive when the pen is down.
    pub fn produces_stroke(&self) -> bool {
        matches!(
            self,
            Command::DrawLine { .. } | Command::DrawCircle { .. } | Command::DrawPolygon { .. }
        )
    }
}
