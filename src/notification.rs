//! Desktop notification mirror for in-app toasts

use crate::config::Config;

/// Mirror a toast as a desktop notification, when enabled.
pub fn notify_toast(config: &Config, title: &str, description: &str) {
    if !config.notifications.enabled {
        return;
    }

    // Fire and forget, don't block on errors
    if let Err(e) = send_notification(title, description) {
        tracing::warn!("Failed to send desktop notification: {}", e);
    }
}

/// Low-level notification sending
fn send_notification(summary: &str, body: &str) -> Result<(), notify_rust::error::Error> {
    use notify_rust::Notification;

    Notification::new()
        .summary(summary)
        .body(body)
        .appname("tonecraft")
        .timeout(notify_rust::Timeout::Milliseconds(5000))
        .show()?;
    Ok(())
}
