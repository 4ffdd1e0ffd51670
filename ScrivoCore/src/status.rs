//! Transient status bar messages

use std::time::Duration;

/// How long a status message stays visible.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    #[default]
    Info,
    Error,
}

/// Outcome summary shown after every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub level: StatusLevel,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

/// The message currently on the status bar.
///
/// Each [`post`](Self::post) returns a ticket; [`expire`](Self::expire) with
/// that ticket clears the message only if nothing newer was posted since, so
/// a timer started for an old message never wipes a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSlot {
    current: Option<Status>,
    seq: u64,
}

impl StatusSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the message. Returns the ticket for expiring it.
    pub fn post(&mut self, status: Status) -> u64 {
        self.seq += 1;
        self.current = Some(status);
        self.seq
    }

    /// Clear the message posted with `ticket`. Returns false if it was
    /// already replaced.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Status> {
        self.current.as_ref()
    }
}
