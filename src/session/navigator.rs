//! Full-page navigation capability.

/// Leaves the single-page app for an external URL.
pub trait Navigator {
    fn navigate_to(&self, url: &str);
}

/// Sets `window.location.href` in the browser. Off the browser it only logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, url: &str) {
        log::info!("leaving console for {url}");
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    log::warn!("navigation to {url} failed: {e:?}");
                }
            }
        }
    }
}
