//! Impressum / about overlays and the cookie notice.

use crate::dom::{self, Elements};
use crate::prefs;

const OPEN_CLASS: &str = "open";
const HIDDEN_CLASS: &str = "hidden";

pub fn open_legal(els: &Elements) {
    dom::add_class(&els.legal_overlay, OPEN_CLASS);
}

pub fn open_about(els: &Elements) {
    dom::add_class(&els.about_overlay, OPEN_CLASS);
}

/// Close both static overlays, whichever is open.
pub fn close_all(els: &Elements) {
    dom::remove_class(&els.legal_overlay, OPEN_CLASS);
    dom::remove_class(&els.about_overlay, OPEN_CLASS);
}

/// The banner shows until the visitor has acknowledged it once.
pub fn init_cookie_banner(els: &Elements) {
    if !prefs::with(|p| p.cookie_consent()) {
        dom::remove_class(&els.cookie_banner, HIDDEN_CLASS);
    }
}

pub fn accept_cookies(els: &Elements) {
    prefs::with(|p| p.set_cookie_consent(true));
    dom::add_class(&els.cookie_banner, HIDDEN_CLASS);
}
