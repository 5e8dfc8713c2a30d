//! Hardwarehalle24 storefront WASM frontend.
//!
//! Pure Rust + WASM storefront UI on top of the hh-* crates. Modularised
//! by concern: each rendering area lives in its own module.

pub mod api;
pub mod catalog_feed;
pub mod catalog_view;
pub mod dom;
pub mod events;
pub mod i18n;
pub mod inquiry;
pub mod item_detail;
pub mod modals;
pub mod prefs;
pub mod seo;
pub mod state;
pub mod theme;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Restore persisted language and theme before anything renders
    let lang = prefs::with(|p| p.language());
    state::set_language(lang);
    dom::set_select_value(&els.lang_select, lang.code());
    theme::restore(&els);

    i18n::apply_static_text();
    seo::apply_list_meta();
    modals::init_cookie_banner(&els);

    // Bind all event listeners
    events::bind_events(&els);

    // First paint off the empty snapshot, then start the feed. The feed's
    // first delivery re-renders and honors a product link in the URL hash.
    catalog_view::render_all(&els);
    inquiry::render_status(&els);
    catalog_feed::subscribe(&els);

    Ok(())
}
