//! Modal operator notifications.

/// Show `message` in a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("no window for alert: {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
