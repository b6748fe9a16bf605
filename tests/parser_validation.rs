// tests/parser_validation.rs
use verbal_turtle::{Command, Directive, PaletteColor, ParseError, ParsedItem, Parser};

fn parser() -> Parser {
    Parser::new()
}

#[test]
fn parses_a_single_forward() {
    let outcome = parser().parse("forward 50");

    assert!(outcome.errors.is_empty());
    let commands: Vec<_> = outcome.commands().collect();
    assert_eq!(commands, vec![&Command::DrawLine { step: -50.0 }]);
}

#[test]
fn parses_multiple_commands_per_line() {
    let outcome = parser().parse("color green forward 50 right 90");

    assert!(outcome.errors.is_empty());
    let commands: Vec<_> = outcome.commands().collect();
    assert_eq!(commands.len(), 3);
    assert_eq!(
        commands[0],
        &Command::SetColor {
            color: PaletteColor::Green
        }
    );
    assert_eq!(commands[1], &Command::DrawLine { step: -50.0 });
    assert_eq!(
        commands[2],
        &Command::RotateRight {
            radians: 90.0f32.to_radians()
        }
    );
}

#[test]
fn non_integer_argument_is_rejected() {
    let outcome = parser().parse("forward abc");

    assert_eq!(outcome.commands().count(), 0);
    assert_eq!(
        outcome.errors,
        vec![ParseError::InvalidArgument {
            keyword: "forward".to_owned(),
            arg: "step",
            reason: "is not an integer value".to_owned(),
        }]
    );
}

#[test]
fn polygon_must_have_more_than_two_sides() {
    let outcome = parser().parse("polygon 2");
    assert_eq!(outcome.commands().count(), 0);
    assert_eq!(outcome.errors.len(), 1);
    assert!(matches!(
        &outcome.errors[0],
        ParseError::InvalidArgument { keyword, arg: "sides", .. } if keyword == "polygon"
    ));

    let outcome = parser().parse("polygon 5");
    assert!(outcome.errors.is_empty());
    assert_eq!(
        outcome.commands().collect::<Vec<_>>(),
        vec![&Command::DrawPolygon { sides: 5 }]
    );
}

#[test]
fn pen_state_is_a_closed_enum() {
    let outcome = parser().parse("pen up");
    assert_eq!(
        outcome.commands().collect::<Vec<_>>(),
        vec![&Command::SetPenState { down: false }]
    );

    let outcome = parser().parse("pen sideways");
    assert_eq!(outcome.commands().count(), 0);
    assert!(matches!(
        &outcome.errors[0],
        ParseError::InvalidArgument { keyword, arg: "state", .. } if keyword == "pen"
    ));
}

#[test]
fn bare_up_and_down_are_pen_aliases() {
    let outcome = parser().parse("up forward 10 down");

    assert!(outcome.errors.is_empty());
    let commands: Vec<_> = outcome.commands().collect();
    assert_eq!(commands[0], &Command::SetPenState { down: false });
    assert_eq!(commands[2], &Command::SetPenState { down: true });
}

#[test]
fn unknown_color_is_rejected() {
    let outcome = parser().parse("color chartreuse");

    assert_eq!(outcome.commands().count(), 0);
    assert!(matches!(
        &outcome.errors[0],
        ParseError::InvalidArgument { keyword, arg: "color", .. } if keyword == "color"
    ));
}

#[test]
fn unknown_command_abandons_the_rest_of_the_line() {
    let outcome = parser().parse("forward 10 frobnicate 5 forward 20");

    // The already-validated command survives; nothing after the unknown
    // keyword is interpreted.
    let commands: Vec<_> = outcome.commands().collect();
    assert_eq!(commands, vec![&Command::DrawLine { step: -10.0 }]);
    assert_eq!(
        outcome.errors,
        vec![ParseError::UnknownCommand {
            keyword: "frobnicate".to_owned(),
        }]
    );
}

#[test]
fn argument_shortfall_abandons_the_line() {
    let outcome = parser().parse("goto 10");

    assert_eq!(outcome.commands().count(), 0);
    assert_eq!(
        outcome.errors,
        vec![ParseError::ArityMismatch {
            keyword: "goto".to_owned(),
            expected: 2,
            got: 1,
        }]
    );
}

#[test]
fn validation_failure_continues_with_the_next_keyword() {
    let outcome = parser().parse("forward abc forward 20");

    // Unlike an unknown keyword, a failed validator leaves the token stream
    // synchronized, so the rest of the line still parses.
    let commands: Vec<_> = outcome.commands().collect();
    assert_eq!(commands, vec![&Command::DrawLine { step: -20.0 }]);
    assert_eq!(outcome.errors.len(), 1);
}

#[test]
fn undo_and_clear_are_directives_not_commands() {
    let outcome = parser().parse("forward 10 undo clear");

    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.items.len(), 3);
    assert_eq!(outcome.items[1], ParsedItem::Directive(Directive::Undo));
    assert_eq!(outcome.items[2], ParsedItem::Directive(Directive::Clear));
    assert_eq!(outcome.commands().count(), 1);
}

#[test]
fn rotate_converts_degrees_to_radians() {
    let outcome = parser().parse("rotate 180");

    assert_eq!(
        outcome.commands().collect::<Vec<_>>(),
        vec![&Command::RotateAbsolute {
            radians: 180.0f32.to_radians()
        }]
    );
}

#[test]
fn goto_accepts_comma_separated_arguments() {
    let outcome = parser().parse("goto 10, 20");

    assert_eq!(
        outcome.commands().collect::<Vec<_>>(),
        vec![&Command::MoveTo { x: 10.0, y: 20.0 }]
    );
}
