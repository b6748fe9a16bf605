// tests/replay_determinism.rs
use glam::Vec2;
use verbal_turtle::{
    Command, CommandHistory, DrawOp, PaletteColor, ReplayConfig, Rgb, TurtlePose, replay,
};

fn history(commands: &[Command]) -> CommandHistory {
    let mut history = CommandHistory::new();
    for command in commands {
        history.append(*command);
    }
    history
}

fn run(history: &CommandHistory, config: &ReplayConfig) -> (Vec<DrawOp>, TurtlePose) {
    let mut ops = Vec::new();
    let pose = replay(history, config, &mut ops);
    (ops, pose)
}

#[test]
fn two_replays_of_the_same_history_are_identical() {
    let config = ReplayConfig::default();
    let history = history(&[
        Command::SetColor {
            color: PaletteColor::Red,
        },
        Command::DrawLine { step: 50.0 },
        Command::RotateRight {
            radians: 90.0f32.to_radians(),
        },
        Command::DrawLine { step: 50.0 },
    ]);

    let (first_ops, first_pose) = run(&history, &config);
    let (second_ops, second_pose) = run(&history, &config);

    assert_eq!(first_ops, second_ops);
    assert_eq!(first_pose, second_pose);
}

#[test]
fn strokes_anchor_at_the_pre_mutation_pose() {
    let config = ReplayConfig::default();
    let history = history(&[Command::DrawLine { step: 50.0 }]);

    let (ops, pose) = run(&history, &config);

    // The line starts where the turtle stood before the command moved it.
    assert_eq!(
        ops[0],
        DrawOp::Line {
            from: Vec2::ZERO,
            to: Vec2::new(50.0, 0.0),
            width: 2.0,
            color: Rgb::WHITE,
        }
    );
    assert_eq!(pose.position, Vec2::new(50.0, 0.0));
}

#[test]
fn style_changes_affect_only_subsequent_strokes() {
    let config = ReplayConfig::default();
    let history = history(&[
        Command::DrawLine { step: 10.0 },
        Command::SetColor {
            color: PaletteColor::Red,
        },
        Command::SetStrokeWidth { width: 5.0 },
        Command::DrawCircle { radius: 30.0 },
    ]);

    let (ops, _) = run(&history, &config);

    assert_eq!(
        ops[0],
        DrawOp::Line {
            from: Vec2::ZERO,
            to: Vec2::new(10.0, 0.0),
            width: 2.0,
            color: Rgb::WHITE,
        }
    );
    assert_eq!(
        ops[1],
        DrawOp::Circle {
            center: Vec2::new(10.0, 0.0),
            radius: 30.0,
            width: 5.0,
            color: Rgb::new(255, 0, 0),
        }
    );
}

#[test]
fn pen_up_suppresses_strokes_but_not_movement() {
    let config = ReplayConfig::default();
    let history = history(&[
        Command::SetPenState { down: false },
        Command::DrawLine { step: 50.0 },
        Command::SetPenState { down: true },
        Command::DrawLine { step: 25.0 },
    ]);

    let (ops, pose) = run(&history, &config);

    // Only the pen-down segment and the final glyph are emitted; the pen-up
    // walk still advanced the pose.
    assert_eq!(ops.len(), 2);
    assert_eq!(
        ops[0],
        DrawOp::Line {
            from: Vec2::new(50.0, 0.0),
            to: Vec2::new(75.0, 0.0),
            width: 2.0,
            color: Rgb::WHITE,
        }
    );
    assert!(matches!(ops[1], DrawOp::Glyph { .. }));
    assert_eq!(pose.position, Vec2::new(75.0, 0.0));
}

#[test]
fn circle_and_polygon_leave_the_pose_alone() {
    let config = ReplayConfig::default();
    let history = history(&[
        Command::DrawCircle { radius: 40.0 },
        Command::DrawPolygon { sides: 6 },
    ]);

    let (ops, pose) = run(&history, &config);

    assert_eq!(pose, TurtlePose::at_home(&config));
    assert_eq!(
        ops[1],
        DrawOp::Polygon {
            center: Vec2::ZERO,
            sides: 6,
            size: config.polygon_size,
            width: 2.0,
            color: Rgb::WHITE,
        }
    );
}

#[test]
fn home_returns_position_and_heading_only() {
    let config = ReplayConfig {
        home: Vec2::new(100.0, 100.0),
        ..ReplayConfig::default()
    };
    let history = history(&[
        Command::MoveTo { x: 10.0, y: 20.0 },
        Command::RotateRight {
            radians: 90.0f32.to_radians(),
        },
        Command::SetColor {
            color: PaletteColor::Teal,
        },
        Command::SetPenState { down: false },
        Command::Home,
    ]);

    let (_, pose) = run(&history, &config);

    assert_eq!(pose.position, Vec2::new(100.0, 100.0));
    assert_eq!(pose.heading, 0.0);
    // Style and pen state survive a home command.
    assert_eq!(pose.color, PaletteColor::Teal);
    assert!(!pose.pen_down);
}

#[test]
fn glyph_carries_the_visibility_flag() {
    let config = ReplayConfig::default();
    let history = history(&[Command::SetVisible { visible: false }]);

    let (ops, pose) = run(&history, &config);

    assert!(!pose.visible);
    assert_eq!(ops.len(), 1);
    let DrawOp::Glyph { pose: glyph_pose } = &ops[0] else {
        panic!("expected a glyph operation");
    };
    assert!(!glyph_pose.visible);
}

#[test]
fn rotate_left_and_right_are_inverse() {
    let config = ReplayConfig::default();
    let history = history(&[
        Command::RotateRight {
            radians: 90.0f32.to_radians(),
        },
        Command::RotateLeft {
            radians: 90.0f32.to_radians(),
        },
    ]);

    let (_, pose) = run(&history, &config);
    assert_eq!(pose.heading, 0.0);
}
