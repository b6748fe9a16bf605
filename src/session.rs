//! An interpreter session: the host-facing surface of the crate.

use crate::history::CommandHistory;
use crate::normalize::Normalizer;
use crate::parse::{Directive, ParseError, ParseOutcome, ParsedItem, Parser};
use crate::turtle::{RenderSink, ReplayConfig, TurtlePose, replay};
use tracing::{debug, trace};

/// One voice-controlled turtle session.
///
/// Owns the normalizer, the parser, and the command history. Submitted text
/// flows normalizer → parser → history; every render tick replays the whole
/// history from scratch. A session assumes a single input source at a time —
/// concurrent submitters must be serialized by the host.
pub struct Session {
    normalizer: Normalizer,
    parser: Parser,
    history: CommandHistory,
    config: ReplayConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ReplayConfig::default())
    }
}

impl Session {
    /// Creates a session with the production rule set and command vocabulary.
    pub fn new(config: ReplayConfig) -> Self {
        Self {
            normalizer: Normalizer::default(),
            parser: Parser::new(),
            history: CommandHistory::new(),
            config,
        }
    }

    /// Creates a session with a caller-supplied normalizer, for hosts that
    /// register extra rewrite rules for their recognizer's quirks.
    pub fn with_normalizer(config: ReplayConfig, normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            parser: Parser::new(),
            history: CommandHistory::new(),
            config,
        }
    }

    /// Normalizes and parses one line of transcribed text, commits the result
    /// to the history, and returns every error the line produced.
    ///
    /// Validated commands append in line order; `undo` and `clear` directives
    /// act on the history immediately, so `"forward 50 undo"` leaves it
    /// unchanged. A line that only produced errors leaves the history
    /// untouched — no partial command is ever committed.
    pub fn submit(&mut self, raw: &str) -> Vec<ParseError> {
        let normalized = self.normalizer.normalize(raw);
        debug!(raw, %normalized, "submitting utterance");

        let outcome = self.parser.parse(&normalized);
        for item in outcome.items {
            match item {
                ParsedItem::Command(command) => {
                    trace!(?command, "appending command");
                    self.history.append(command);
                }
                ParsedItem::Directive(Directive::Undo) => {
                    trace!("undoing last command");
                    self.history.pop_last();
                }
                ParsedItem::Directive(Directive::Clear) => {
                    trace!("clearing history");
                    self.history.clear();
                }
            }
        }

        outcome.errors
    }

    /// Normalizes and parses a line without touching the session, so callers
    /// can report validation results before committing.
    pub fn preview(&self, raw: &str) -> ParseOutcome {
        self.parser.parse(&self.normalizer.normalize(raw))
    }

    /// Removes the most recently accepted command, if any.
    pub fn undo_last(&mut self) {
        self.history.pop_last();
    }

    /// Empties the command history.
    pub fn clear_all(&mut self) {
        self.history.clear();
    }

    /// Number of commands currently in the history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The accepted commands, in order.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Runs one render tick: resets an ephemeral pose to home, folds the full
    /// history into draw operations on `sink`, and returns the final pose.
    ///
    /// The periodic timer driving ticks belongs to the host; each call is a
    /// complete, non-suspending pass and the session keeps no render state
    /// between calls.
    pub fn render_frame(&self, sink: &mut dyn RenderSink) -> TurtlePose {
        replay(&self.history, &self.config, sink)
    }
}
