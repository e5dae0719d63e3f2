use aroov_runtime::Host;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Host that records every interaction.
///
/// Confirmations answer from a script, falling back to a default (`true`
/// unless changed).
pub struct RecordingHost {
    alerts: RefCell<Vec<String>>,
    questions: RefCell<Vec<String>>,
    answers: RefCell<VecDeque<bool>>,
    default_answer: Cell<bool>,
    clipboard: RefCell<Option<String>>,
    clipboard_available: Cell<bool>,
    opened: RefCell<Vec<String>>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            alerts: RefCell::new(Vec::new()),
            questions: RefCell::new(Vec::new()),
            answers: RefCell::new(VecDeque::new()),
            default_answer: Cell::new(true),
            clipboard: RefCell::new(None),
            clipboard_available: Cell::new(true),
            opened: RefCell::new(Vec::new()),
        }
    }

    /// Answer the next confirmation with `answer`.
    pub fn answer_next(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    pub fn set_default_answer(&self, answer: bool) {
        self.default_answer.set(answer);
    }

    pub fn set_clipboard_available(&self, available: bool) {
        self.clipboard_available.set(available);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn last_alert(&self) -> Option<String> {
        self.alerts.borrow().last().cloned()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Host for RecordingHost {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.questions.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.default_answer.get())
    }

    fn copy_to_clipboard(&self, text: &str) -> bool {
        if !self.clipboard_available.get() {
            return false;
        }
        *self.clipboard.borrow_mut() = Some(text.to_string());
        true
    }

    fn open_url(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
