//! Browser Capabilities
//!
//! Blocking dialogs and navigation, injected into the flows so they can run
//! without a real window.

pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// The real `window`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl Dialogs for BrowserPlatform {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

impl Navigator for BrowserPlatform {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(err) = window.location().set_href(path) {
            log::error!("redirect to {} failed: {:?}", path, err);
        }
    }
}
