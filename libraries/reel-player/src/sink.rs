//! Output and input seams for command execution
//!
//! The facade itself never does I/O. [`execute`](crate::execute) writes
//! outcomes to an [`OutputSink`] and reads the post-search answer from a
//! [`SelectionPrompt`], so the same command path serves the REPL, JSON
//! output, and tests.

use crate::{error::CommandError, notice::Notice};
use std::collections::VecDeque;

/// Destination for command outcomes
pub trait OutputSink {
    /// A successful outcome
    fn notice(&mut self, notice: &Notice);

    /// A reported, non-fatal failure
    fn failure(&mut self, error: &CommandError);
}

/// Collects rendered lines, success and failure alike
impl OutputSink for Vec<String> {
    fn notice(&mut self, notice: &Notice) {
        self.extend(notice.lines());
    }

    fn failure(&mut self, error: &CommandError) {
        self.extend(error.lines());
    }
}

/// Source of the answer to "Would you like to play any of the above?"
pub trait SelectionPrompt {
    /// Next answer, or `None` when input is exhausted
    fn read_selection(&mut self) -> Option<String>;
}

/// Always declines
#[derive(Debug, Clone, Copy, Default)]
pub struct Decline;

impl SelectionPrompt for Decline {
    fn read_selection(&mut self) -> Option<String> {
        None
    }
}

/// Pre-recorded answers, consumed in order
#[derive(Debug, Clone, Default)]
pub struct Answers(VecDeque<String>);

impl Answers {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self(answers.into_iter().map(Into::into).collect())
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl SelectionPrompt for Answers {
    fn read_selection(&mut self) -> Option<String> {
        self.0.pop_front()
    }
}
