//! Dark mode toggle, persisted across visits.

use crate::dom::{self, Elements};
use crate::prefs;

const DARK_CLASS: &str = "dark";

/// Re-apply the persisted choice on startup.
pub fn restore(els: &Elements) {
    apply(els, prefs::with(|p| p.dark_mode()));
}

pub fn toggle(els: &Elements) {
    let dark = !dom::has_class(&els.body, DARK_CLASS);
    prefs::with(|p| p.set_dark_mode(dark));
    apply(els, dark);
}

fn apply(els: &Elements, dark: bool) {
    if dark {
        dom::add_class(&els.body, DARK_CLASS);
    } else {
        dom::remove_class(&els.body, DARK_CLASS);
    }
    dom::set_text(&els.theme_toggle_btn, if dark { "☀" } else { "🌙" });
}
