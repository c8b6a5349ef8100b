//! Outbound collaborators: the system clipboard and the user-facing
//! notification area.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard access denied: {0}")]
    Denied(String),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard contents did not match the copied text")]
    NotConfirmed,
}

/// Somewhere text can be placed for a later paste.
pub trait ClipboardSink {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn normal(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Normal,
        }
    }

    pub fn error(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Fire-and-forget display of a [`Notification`].
pub trait NotificationSink {
    fn notify(
        &mut self,
        notification: Notification,
    );
}

/// Collects notifications in arrival order.
impl NotificationSink for Vec<Notification> {
    fn notify(
        &mut self,
        notification: Notification,
    ) {
        self.push(notification);
    }
}
