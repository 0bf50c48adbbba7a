//! History recall for the input line.
//!
//! Walks a most-recent-first history the way the up/down keys do in the
//! page: up moves toward older entries and sticks at the oldest, down moves
//! back toward newer ones, and down from the newest entry clears the input.

use std::collections::VecDeque;

/// What the input line should show after a recall step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    Entry(&'a str),
    /// Empty the input line.
    Clear,
}

/// Position in a session's history. `None` means "not recalling".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    position: Option<usize>,
}

impl HistoryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Step toward older entries.
    pub fn older<'h>(&mut self, history: &'h VecDeque<String>) -> Option<Recall<'h>> {
        let Some(oldest) = history.len().checked_sub(1) else {
            self.position = None;
            return None;
        };
        let next = self.position.map_or(0, |p| p + 1).min(oldest);
        self.position = Some(next);
        history.get(next).map(|line| Recall::Entry(line.as_str()))
    }

    /// Step toward newer entries. At the newest entry the input is cleared
    /// and the cursor stays put.
    pub fn newer<'h>(&mut self, history: &'h VecDeque<String>) -> Option<Recall<'h>> {
        match self.position {
            None => None,
            Some(0) => Some(Recall::Clear),
            Some(p) => {
                self.position = Some(p - 1);
                history.get(p - 1).map(|line| Recall::Entry(line.as_str()))
            },
        }
    }

    /// Forget the position; called after a line is submitted.
    pub fn reset(&mut self) {
        self.position = None;
    }
}
