//! Notifications shown as auto-hiding toasts in the window's notification
//! layer.

use gpui::{App, Window};
use gpui_component::{
    WindowExt,
    notification::{Notification as Toast, NotificationType},
};
use soat_core::{Notification, NotificationSink, Severity};
use tracing::{info, warn};

pub fn toast_type(severity: Severity) -> NotificationType {
    match severity {
        Severity::Normal => NotificationType::Success,
        Severity::Error => NotificationType::Error,
    }
}

pub fn make_toast(notification: Notification) -> Toast {
    Toast::new()
        .title(notification.title)
        .message(notification.message)
        .with_type(toast_type(notification.severity))
}

/// Pushes every notification onto the window's toast stack.
pub struct WindowToasts<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
}

impl<'a> WindowToasts<'a> {
    pub fn new(
        window: &'a mut Window,
        cx: &'a mut App,
    ) -> Self {
        Self { window, cx }
    }

    /// Shows notifications that were collected while the app context was
    /// borrowed elsewhere (the clipboard holds it during copy actions).
    pub fn show_all(
        &mut self,
        notifications: impl IntoIterator<Item = Notification>,
    ) {
        for notification in notifications {
            self.notify(notification);
        }
    }
}

impl NotificationSink for WindowToasts<'_> {
    fn notify(
        &mut self,
        notification: Notification,
    ) {
        match notification.severity {
            Severity::Normal => info!(title = %notification.title, "{}", notification.message),
            Severity::Error => warn!(title = %notification.title, "{}", notification.message),
        }
        self.window
            .push_notification(make_toast(notification), self.cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_notifications_show_as_success() {
        assert!(matches!(
            toast_type(Severity::Normal),
            NotificationType::Success
        ));
    }

    #[test]
    fn error_notifications_show_as_error() {
        assert!(matches!(
            toast_type(Severity::Error),
            NotificationType::Error
        ));
    }
}
