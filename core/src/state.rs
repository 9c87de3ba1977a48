//! Explicit application state shared by the dispatcher and the renderer.

use crate::types::{Animal, NewAnimal};

/// Where the quiz currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Idle,
    Submitted,
    Fetching,
    ResultShown,
    /// The registry fetch or the selection failed; a notice says why.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-facing message produced by an action, the equivalent of an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Registry snapshot from the last successful listing.
    pub animals: Vec<Animal>,
    pub quiz: QuizPhase,
    pub result: Option<String>,
    /// Record looked up by id, if any.
    pub selected: Option<Animal>,
    /// Pending input of the add-animal form.
    pub add_form: NewAnimal,
    pub notices: Vec<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Hand pending notices to the host, leaving none behind.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
