//! The authoritative record of accepted commands.

use crate::command::Command;
use serde::{Deserialize, Serialize};

/// An ordered, append-only-with-undo sequence of validated commands.
///
/// The history is the only persistent state of an interpreter session; the
/// turtle pose is rederived from it on every render tick, which is what makes
/// [`pop_last`](Self::pop_last) and [`clear`](Self::clear) trivially correct.
/// A history belongs to exactly one session; concurrent submitters must be
/// serialized by the caller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommandHistory {
    commands: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated command.
    pub fn append(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Removes and returns the most recently appended command. No-op on an
    /// empty history.
    pub fn pop_last(&mut self) -> Option<Command> {
        self.commands.pop()
    }

    /// Empties the history.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The commands in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }
}
