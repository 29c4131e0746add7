pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use super::notification::{Notification, Severity};
use crate::{msg_error, msg_info, msg_success, msg_warning};

/// Prints a notification with the macro matching its severity.
pub fn show(notification: &Notification) {
    match notification.severity {
        Severity::Info => msg_info!(notification.message),
        Severity::Success => msg_success!(notification.message),
        Severity::Warning => msg_warning!(notification.message),
        Severity::Error => msg_error!(notification.message),
    }
}
