//! Full-page browser navigation, outside the client-side router.

/// Replace the whole page with `url`. Native builds only log.
pub fn navigate_full(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {url}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Full navigation requested to {url}");
    }
}
