//! Terminal-backed [`Host`].

use aroov_runtime::Host;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use tracing::debug;

/// Alerts go to stderr, confirmations are asked on the terminal (or answered
/// by `--yes`). There is no system clipboard or browser: copied text and
/// opened URLs are kept for the command to report.
pub struct ConsoleHost {
    assume_yes: bool,
    interactive: bool,
    clipboard: RefCell<Option<String>>,
    opened: RefCell<Vec<String>>,
}

impl ConsoleHost {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            interactive: std::io::stdin().is_terminal(),
            clipboard: RefCell::new(None),
            opened: RefCell::new(Vec::new()),
        }
    }

    /// Last text placed on the clipboard.
    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    fn ask(&self, message: &str) -> bool {
        eprint!("{} {} [y/N] ", "?".cyan().bold(), message);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

impl Host for ConsoleHost {
    fn alert(&self, message: &str) {
        eprintln!("{} {}", "!".yellow().bold(), message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if !self.interactive {
            debug!(question = message, "no terminal to confirm on, declining");
            eprintln!("{} (pass --yes to confirm)", message);
            return false;
        }
        self.ask(message)
    }

    fn copy_to_clipboard(&self, text: &str) -> bool {
        *self.clipboard.borrow_mut() = Some(text.to_string());
        true
    }

    fn open_url(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
