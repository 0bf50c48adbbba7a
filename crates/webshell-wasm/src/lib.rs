//! Browser bindings.
//!
//! The page owns one [`WebShell`], calls `command` on Enter and appends the
//! result to its output area, and uses `recall_older` / `recall_newer` for
//! the arrow keys.

use wasm_bindgen::prelude::*;

use webshell_terminal::{HistoryCursor, Recall, ShellSession};

#[wasm_bindgen]
pub struct WebShell {
    session: ShellSession,
    cursor: HistoryCursor,
}

impl Default for WebShell {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WebShell {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebShell {
        WebShell {
            session: ShellSession::new(),
            cursor: HistoryCursor::new(),
        }
    }

    #[wasm_bindgen]
    pub fn welcome(&self) -> String {
        self.session.welcome()
    }

    /// Run a line; always returns text safe to append to the output area.
    #[wasm_bindgen]
    pub fn command(&mut self, text: &str) -> String {
        self.cursor.reset();
        self.session.command(text)
    }

    /// Submitted lines, most recent first.
    #[wasm_bindgen]
    pub fn history(&self) -> Vec<String> {
        self.session.history().iter().cloned().collect()
    }

    /// Up arrow. `None` leaves the input untouched.
    #[wasm_bindgen]
    pub fn recall_older(&mut self) -> Option<String> {
        self.cursor
            .older(self.session.history())
            .map(recall_text)
    }

    /// Down arrow. `None` leaves the input untouched; an empty string clears it.
    #[wasm_bindgen]
    pub fn recall_newer(&mut self) -> Option<String> {
        self.cursor
            .newer(self.session.history())
            .map(recall_text)
    }
}

fn recall_text(recall: Recall<'_>) -> String {
    match recall {
        Recall::Entry(line) => line.to_string(),
        Recall::Clear => String::new(),
    }
}
