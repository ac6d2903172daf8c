//! Blocking user acknowledgements.
//!
//! Browser-only; SSR and native builds only log the message.

/// Show `message` in a native alert dialog.
pub fn alert(message: &str) {
    log::info!("{message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
