use std::fmt::{Display, Formatter};

use log::{Level, log};

use cutlayout::error::WorkshopError;

/// How urgent a [`Notice`] is
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message meant for the person operating the workshop
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

impl From<&WorkshopError> for Notice {
    fn from(err: &WorkshopError) -> Self {
        let severity = match err {
            WorkshopError::NoSpace { .. } | WorkshopError::SnapshotNotFound => Severity::Info,
            WorkshopError::Validation { .. } | WorkshopError::Precondition(_) => Severity::Warning,
            WorkshopError::SnapshotCorrupt { .. } | WorkshopError::Store(_) => Severity::Error,
        };
        Notice {
            severity,
            message: err.to_string(),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.severity, self.message)
    }
}

/// Receives the outcome of every user-facing operation.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    /// Turns the result of an operation into a notice: `success` describes the happy path,
    /// errors are reported with a severity matching their kind.
    fn report<T>(&mut self, result: &Result<T, WorkshopError>, success: impl FnOnce(&T) -> String)
    where
        Self: Sized,
    {
        let notice = match result {
            Ok(value) => Notice::info(success(value)),
            Err(err) => Notice::from(err),
        };
        self.notify(notice);
    }
}

/// Forwards notices to the logger
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        let level = match notice.severity {
            Severity::Info => Level::Info,
            Severity::Warning => Level::Warn,
            Severity::Error => Level::Error,
        };
        log!(level, "[WS] {}", notice.message);
    }
}

/// Keeps every notice, in order of arrival
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
