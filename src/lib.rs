//! # verbal-turtle
//!
//! A backend-agnostic interpretation crate that turns loosely-formed spoken
//! utterances (as transcribed by an upstream speech recognizer) into a
//! deterministic sequence of 2D turtle drawing commands.
//!
//! The pipeline is: raw text → [`Normalizer`] (ordered token rewriting that
//! repairs recognizer artifacts like "for word" → "forward") → [`Parser`]
//! (validating keyword table producing typed [`Command`]s and structured
//! errors) → [`CommandHistory`] → whole-history [`replay`] each render tick,
//! emitting primitive draw operations into a [`RenderSink`] supplied by the
//! host (canvas, SVG, test recorder).
//!
//! Audio capture, the recognition backend, and the concrete drawing surface
//! are all external collaborators; this crate only ever sees resolved text
//! and only ever emits abstract draw operations.

pub mod color;
pub mod command;
pub mod history;
pub mod normalize;
pub mod parse;
pub mod session;
pub mod turtle;

pub use color::*;
pub use command::*;
pub use history::*;
pub use normalize::*;
pub use parse::*;
pub use session::*;
pub use turtle::*;
