//! Native browser dialogs.

/// Ask the user to confirm a destructive action via `window.confirm`.
///
/// Returns `false` outside the browser or when the dialog cannot be shown.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
