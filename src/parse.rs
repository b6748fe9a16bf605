//! Command table and validating parser.
//!
//! The parser turns a normalized command line into typed [`Command`]s plus
//! structured errors. Dispatch is a keyword table built once at construction:
//! each keyword carries a fixed argument arity and a builder function that
//! validates the raw arguments and constructs the command.

use crate::color::PaletteColor;
use crate::command::Command;
use crate::normalize::tokenize;
use std::collections::HashMap;
use thiserror::Error;

/// A structured parse failure. All variants are recoverable at the line
/// level; a malformed line never appends a partial command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The keyword is not in the command table. Parsing of the remaining
    /// line stops, since the token stream is desynchronized past this point.
    #[error("'{keyword}' is not a valid command")]
    UnknownCommand { keyword: String },

    /// The line ended before the keyword's declared arguments were supplied.
    #[error("'{keyword}' command expects {expected} argument(s) but got {got}")]
    ArityMismatch {
        keyword: String,
        expected: usize,
        got: usize,
    },

    /// An argument failed the command's validation.
    #[error("argument '{arg}' to '{keyword}' command {reason}")]
    InvalidArgument {
        keyword: String,
        arg: &'static str,
        reason: String,
    },
}

/// A session directive recognized by the parser but applied to the command
/// history by the caller. Directives never construct a [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Remove the most recently appended command, if any.
    Undo,
    /// Empty the history.
    Clear,
}

/// One successfully parsed element of a line, in line order.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedItem {
    Command(Command),
    Directive(Directive),
}

/// Everything a line produced: validated items and collected errors, both in
/// the order they were encountered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutcome {
    pub items: Vec<ParsedItem>,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    /// The validated commands of this line, skipping directives.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.items.iter().filter_map(|item| match item {
            ParsedItem::Command(command) => Some(command),
            ParsedItem::Directive(_) => None,
        })
    }
}

type Builder = fn(&[&str]) -> Result<ParsedItem, ParseError>;

/// A command table entry: fixed argument count plus validator/constructor.
struct CommandSpec {
    arity: usize,
    build: Builder,
}

/// Validating command parser with an immutable keyword table.
pub struct Parser {
    table: HashMap<&'static str, CommandSpec>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Builds the parser with the full command vocabulary.
    pub fn new() -> Self {
        let mut table = HashMap::new();
        let mut register = |keyword: &'static str, arity: usize, build: Builder| {
            table.insert(keyword, CommandSpec { arity, build });
        };

        register("forward", 1, build_forward);
        register("color", 1, build_color);
        register("rotate", 1, build_rotate);
        register("pen", 1, build_pen);
        register("up", 0, |_| Ok(pen_state(false)));
        register("down", 0, |_| Ok(pen_state(true)));
        register("home", 0, |_| Ok(ParsedItem::Command(Command::Home)));
        register("hide", 0, |_| Ok(visibility(false)));
        register("show", 0, |_| Ok(visibility(true)));
        register("circle", 1, build_circle);
        register("width", 1, build_width);
        register("goto", 2, build_goto);
        register("polygon", 1, build_polygon);
        register("left", 1, build_left);
        register("right", 1, build_right);
        register("undo", 0, |_| Ok(ParsedItem::Directive(Directive::Undo)));
        register("clear", 0, |_| Ok(ParsedItem::Directive(Directive::Clear)));

        Self { table }
    }

    /// Parses one normalized line into items and errors.
    ///
    /// Tokens are consumed greedily: one keyword, then exactly the keyword's
    /// declared argument count. An unknown keyword or an argument shortfall
    /// abandons the rest of the line; a validation failure is recorded and
    /// parsing continues with the next keyword. Nothing here touches session
    /// state, so a caller can preview validation without committing.
    pub fn parse(&self, line: &str) -> ParseOutcome {
        let tokens = tokenize(line);
        let mut outcome = ParseOutcome::default();

        let mut index = 0;
        while index < tokens.len() {
            let keyword = tokens[index].as_str();
            index += 1;

            let Some(spec) = self.table.get(keyword) else {
                outcome.errors.push(ParseError::UnknownCommand {
                    keyword: keyword.to_owned(),
                });
                break;
            };

            let remaining = tokens.len() - index;
            if remaining < spec.arity {
                outcome.errors.push(ParseError::ArityMismatch {
                    keyword: keyword.to_owned(),
                    expected: spec.arity,
                    got: remaining,
                });
                break;
            }

            let args: Vec<&str> = tokens[index..index + spec.arity]
                .iter()
                .map(String::as_str)
                .collect();
            index += spec.arity;

            match (spec.build)(&args) {
                Ok(item) => outcome.items.push(item),
                Err(error) => {
                    tracing::debug!(%error, "rejected command");
                    outcome.errors.push(error);
                }
            }
        }

        outcome
    }
}

fn pen_state(down: bool) -> ParsedItem {
    ParsedItem::Command(Command::SetPenState { down })
}

fn visibility(visible: bool) -> ParsedItem {
    ParsedItem::Command(Command::SetVisible { visible })
}

/// Strict base-10 integer parse for a command argument.
fn parse_int(keyword: &'static str, arg: &'static str, raw: &str) -> Result<i32, ParseError> {
    raw.parse::<i32>().map_err(|_| ParseError::InvalidArgument {
        keyword: keyword.to_owned(),
        arg,
        reason: "is not an integer value".to_owned(),
    })
}

fn degrees_arg(keyword: &'static str, raw: &str) -> Result<f32, ParseError> {
    Ok((parse_int(keyword, "degrees", raw)? as f32).to_radians())
}

fn build_forward(args: &[&str]) -> Result<ParsedItem, ParseError> {
    let pixels = parse_int("forward", "step", args[0])?;
    // Negated so that "forward" walks up the screen on a y-down surface.
    Ok(ParsedItem::Command(Command::DrawLine {
        step: -pixels as f32,
    }))
}

fn build_color(args: &[&str]) -> Result<ParsedItem, ParseError> {
    let color = PaletteColor::from_token(args[0]).ok_or_else(|| ParseError::InvalidArgument {
        keyword: "color".to_owned(),
        arg: "color",
        reason: format!("names '{}', which is not a recognized color", args[0]),
    })?;
    Ok(ParsedItem::Command(Command::SetColor { color }))
}

fn build_rotate(args: &[&str]) -> Result<ParsedItem, ParseError> {
    Ok(ParsedItem::Command(Command::RotateAbsolute {
        radians: degrees_arg("rotate", args[0])?,
    }))
}

fn build_left(args: &[&str]) -> Result<ParsedItem, ParseError> {
    Ok(ParsedItem::Command(Command::RotateLeft {
        radians: degrees_arg("left", args[0])?,
    }))
}

fn build_right(args: &[&str]) -> Result<ParsedItem, ParseError> {
    Ok(ParsedItem::Command(Command::RotateRight {
        radians: degrees_arg("right", args[0])?,
    }))
}

fn build_pen(args: &[&str]) -> Result<ParsedItem, ParseError> {
    match args[0] {
        "up" => Ok(pen_state(false)),
        "down" => Ok(pen_state(true)),
        other => Err(ParseError::InvalidArgument {
            keyword: "pen".to_owned(),
            arg: "state",
            reason: format!("must be 'up' or 'down', not '{other}'"),
        }),
    }
}

fn build_circle(args: &[&str]) -> Result<ParsedItem, ParseError> {
    let radius = parse_int("circle", "radius", args[0])?;
    Ok(ParsedItem::Command(Command::DrawCircle {
        radius: radius as f32,
    }))
}

fn build_width(args: &[&str]) -> Result<ParsedItem, ParseError> {
    let width = parse_int("width", "width", args[0])?;
    Ok(ParsedItem::Command(Command::SetStrokeWidth {
        width: width as f32,
    }))
}

fn build_goto(args: &[&str]) -> Result<ParsedItem, ParseError> {
    let x = parse_int("goto", "x", args[0])?;
    let y = parse_int("goto", "y", args[1])?;
    Ok(ParsedItem::Command(Command::MoveTo {
        x: x as f32,
        y: y as f32,
    }))
}

fn build_polygon(args: &[&str]) -> Result<ParsedItem, ParseError> {
    let sides = parse_int("polygon", "sides", args[0])?;
    if sides <= 2 {
        return Err(ParseError::InvalidArgument {
            keyword: "polygon".to_owned(),
            arg: "sides",
            reason: "must be greater than 2".to_owned(),
        });
    }
    Ok(ParsedItem::Command(Command::DrawPolygon {
        sides: sides as u32,
    }))
}
