//! Turtle pose, draw operations, and the whole-history replay.

use crate::color::{PaletteColor, Rgb};
use crate::command::Command;
use crate::history::CommandHistory;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Replay parameters shared by every tick of a session.
#[derive(Clone, Debug)]
pub struct ReplayConfig {
    /// The home position; where the turtle starts each replay and where
    /// `home` returns it to. Typically the center of the drawing surface.
    pub home: Vec2,
    /// Fixed circumradius used when drawing polygons.
    pub polygon_size: f32,
    /// Stroke width of the initial pose.
    pub default_stroke_width: f32,
    /// Color of the initial pose.
    pub default_color: PaletteColor,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            home: Vec2::ZERO,
            polygon_size: 25.0,
            default_stroke_width: 2.0,
            default_color: PaletteColor::White,
        }
    }
}

/// The turtle's instantaneous position, heading, and drawing style.
///
/// A pose is ephemeral: it is rebuilt from the home pose at the start of every
/// replay and discarded once the frame is rendered. It never survives between
/// ticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtlePose {
    pub position: Vec2,
    /// Heading in radians; zero points along +X.
    pub heading: f32,
    pub pen_down: bool,
    pub visible: bool,
    pub stroke_width: f32,
    pub color: PaletteColor,
}

impl TurtlePose {
    /// The canonical start-of-replay pose: at home, zero heading, pen down,
    /// visible, default style.
    pub fn at_home(config: &ReplayConfig) -> Self {
        Self {
            position: config.home,
            heading: 0.0,
            pen_down: true,
            visible: true,
            stroke_width: config.default_stroke_width,
            color: config.default_color,
        }
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Applies a state-mutating command to this pose. Non-mutating commands
    /// (circle, polygon) leave the pose untouched.
    pub fn apply(&mut self, command: &Command, config: &ReplayConfig) {
        match *command {
            Command::Home => {
                self.position = config.home;
                self.heading = 0.0;
            }
            Command::SetPenState { down } => self.pen_down = down,
            Command::SetVisible { visible } => self.visible = visible,
            Command::RotateAbsolute { radians } => self.heading = radians,
            Command::RotateLeft { radians } => self.heading -= radians,
            Command::RotateRight { radians } => self.heading += radians,
            Command::MoveTo { x, y } => self.position = Vec2::new(x, y),
            Command::SetStrokeWidth { width } => self.stroke_width = width,
            Command::DrawLine { step } => {
                self.position += self.direction() * step;
            }
            Command::SetColor { color } => self.color = color,
            Command::DrawCircle { .. } | Command::DrawPolygon { .. } => {}
        }
    }
}

/// An abstract drawing surface.
///
/// The replay emits primitive operations into a sink; the concrete backend
/// (a canvas, an SVG writer, a test recorder) lives outside this crate.
pub trait RenderSink {
    /// A line segment with stroke width and color.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb);
    /// A full circle outline.
    fn circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgb);
    /// A closed regular polygon of fixed circumradius `size`.
    fn polygon(&mut self, center: Vec2, sides: u32, size: f32, width: f32, color: Rgb);
    /// The turtle glyph at its final pose. The sink chooses the sprite or a
    /// small marker depending on `pose.visible`.
    fn glyph(&mut self, pose: &TurtlePose);
}

/// A recorded draw operation, mirroring [`RenderSink`] one to one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgb,
    },
    Circle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Rgb,
    },
    Polygon {
        center: Vec2,
        sides: u32,
        size: f32,
        width: f32,
        color: Rgb,
    },
    Glyph {
        pose: TurtlePose,
    },
}

/// Records every operation, in order. Lets hosts and tests treat a replay as
/// a comparable value instead of wiring up a real backend.
impl RenderSink for Vec<DrawOp> {
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) {
        self.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgb) {
        self.push(DrawOp::Circle {
            center,
            radius,
            width,
            color,
        });
    }

    fn polygon(&mut self, center: Vec2, sides: u32, size: f32, width: f32, color: Rgb) {
        self.push(DrawOp::Polygon {
            center,
            sides,
            size,
            width,
            color,
        });
    }

    fn glyph(&mut self, pose: &TurtlePose) {
        self.push(DrawOp::Glyph { pose: pose.clone() });
    }
}

/// Replays the full history against a fresh pose and returns the final pose.
///
/// Folds the commands in order: a stroke-producing command first emits its
/// draw operation anchored at the pose *before* its own mutation, then the
/// mutation (if any) is applied. Strokes are suppressed while the pen is up.
/// After the fold the final glyph is emitted.
///
/// The emitted operation sequence and the returned pose are a pure function
/// of the history's contents and order, so replaying the same history twice
/// yields identical output. Cost is O(history length) per call; the trade is
/// that undo and clear need no incremental invalidation at all.
pub fn replay(
    history: &CommandHistory,
    config: &ReplayConfig,
    sink: &mut dyn RenderSink,
) -> TurtlePose {
    let mut pose = TurtlePose::at_home(config);

    for command in history.iter() {
        if pose.pen_down && command.produces_stroke() {
            emit_stroke(&pose, command, config, sink);
        }
        if command.mutates_state() {
            pose.apply(command, config);
        }
    }

    sink.glyph(&pose);
    pose
}

/// Emits the draw operation for one stroke-producing command, anchored at the
/// pre-mutation pose.
fn emit_stroke(
    pose: &TurtlePose,
    command: &Command,
    config: &ReplayConfig,
    sink: &mut dyn RenderSink,
) {
    let color = pose.color.rgb();
    match *command {
        Command::DrawLine { step } => {
            let to = pose.position + pose.direction() * step;
            sink.line(pose.position, to, pose.stroke_width, color);
        }
        Command::DrawCircle { radius } => {
            sink.circle(pose.position, radius, pose.stroke_width, color);
        }
        Command::DrawPolygon { sides } => {
            sink.polygon(
                pose.position,
                sides,
                config.polygon_size,
                pose.stroke_width,
                color,
            );
        }
        _ => {}
    }
}
