//! Event binding.
//!
//! Wires all static UI event listeners. Listeners on dynamically rendered
//! cards are attached by the render functions in `catalog_view` and
//! `item_detail`; everything bound here is bound once at startup.

use std::cell::RefCell;

use hh_catalog_types::{CatalogTab, Language, SortOrder};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{self, Elements};
use crate::{catalog_feed, catalog_view, i18n, inquiry, item_detail, modals, prefs, seo, state, theme};

const SEARCH_DEBOUNCE_MS: i32 = 250;

thread_local! {
    static SEARCH_TIMER: RefCell<Option<i32>> = RefCell::new(None);
}

/// Helper: attach async click handler to an element.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Tabs ──
    for tab in &els.tabs {
        let tab_name = tab.get_attribute("data-tab").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            state::update_filter(|f| f.tab = CatalogTab::parse(&tab_name));
            catalog_view::render_all(&els2);
        }) as Box<dyn FnMut(_)>);
        tab.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Category / sub-category ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let value = dom::get_select_value(&els2.category_select);
            // Picking a category always resets the sub-category.
            state::update_filter(|f| {
                f.category = if value.is_empty() { None } else { Some(value.clone()) };
                f.sub_category = None;
            });
            catalog_view::render_all(&els2);
        }) as Box<dyn FnMut(_)>);
        els.category_select
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let value = dom::get_select_value(&els2.sub_category_select);
            state::update_filter(|f| {
                f.sub_category = if value.is_empty() { None } else { Some(value.clone()) };
            });
            catalog_view::render_all(&els2);
        }) as Box<dyn FnMut(_)>);
        els.sub_category_select
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Sort ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let value = dom::get_select_value(&els2.sort_select);
            state::update_filter(|f| f.sort = SortOrder::parse(&value));
            catalog_view::render_grid(&els2);
        }) as Box<dyn FnMut(_)>);
        els.sort_select
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Price window ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let value = dom::get_input_value(&els2.min_price_input);
            state::update_filter(|f| f.min_price = value);
            catalog_view::render_grid(&els2);
        }) as Box<dyn FnMut(_)>);
        els.min_price_input
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let value = dom::get_input_value(&els2.max_price_input);
            state::update_filter(|f| f.max_price = value);
            catalog_view::render_grid(&els2);
        }) as Box<dyn FnMut(_)>);
        els.max_price_input
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Search (debounced) ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            schedule_search(&els2);
        }) as Box<dyn FnMut(_)>);
        els.search_input
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Language ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            on_language_change(&els2);
        }) as Box<dyn FnMut(_)>);
        els.lang_select
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Theme ──
    {
        let els2 = els.clone();
        on_click!(els.theme_toggle_btn, move |_: web_sys::MouseEvent| {
            theme::toggle(&els2);
        });
    }

    // ── Item detail ──
    {
        let els2 = els.clone();
        on_click!(els.detail_close_btn, move |_: web_sys::MouseEvent| {
            item_detail::close(&els2);
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.detail_wishlist_btn, move |_: web_sys::MouseEvent| {
            if let Some(item) = state::selected_item() {
                prefs::with(|p| p.toggle_wishlist(&item.id));
                item_detail::render_wishlist_button(&els2);
                catalog_view::render_grid(&els2);
                catalog_view::render_wishlist_count(&els2);
            }
        });
    }
    {
        // Click on the backdrop itself closes the overlay.
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            if let Some(target) = e.target() {
                let target_js: &JsValue = target.as_ref();
                let overlay_js: &JsValue = els2.detail_overlay.as_ref();
                if target_js == overlay_js {
                    item_detail::close(&els2);
                }
            }
        }) as Box<dyn FnMut(_)>);
        els.detail_overlay
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Inquiry ──
    on_click_async!(els.inquiry_submit_btn, els, inquiry::on_submit);

    // ── Static overlays / cookie banner ──
    {
        let els2 = els.clone();
        on_click!(els.legal_open_btn, move |_: web_sys::MouseEvent| {
            modals::open_legal(&els2);
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.about_open_btn, move |_: web_sys::MouseEvent| {
            modals::open_about(&els2);
        });
    }
    for btn in &els.overlay_close_btns {
        let els2 = els.clone();
        on_click!(btn, move |_: web_sys::MouseEvent| {
            modals::close_all(&els2);
        });
    }
    bind_overlay_dismiss(els, &els.legal_overlay);
    bind_overlay_dismiss(els, &els.about_overlay);
    {
        let els2 = els.clone();
        on_click!(els.cookie_accept_btn, move |_: web_sys::MouseEvent| {
            modals::accept_cookies(&els2);
        });
    }

    // ── Escape closes whatever is open ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" {
                if dom::has_class(&els2.detail_overlay, "open") {
                    item_detail::close(&els2);
                }
                modals::close_all(&els2);
            }
        }) as Box<dyn FnMut(_)>);
        dom::document()
            .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Stop polling when the page goes away ──
    {
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            catalog_feed::unsubscribe();
        }) as Box<dyn FnMut(_)>);
        dom::window()
            .add_event_listener_with_callback("pagehide", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Debounced search: the filter only updates once typing pauses.
fn schedule_search(els: &Elements) {
    SEARCH_TIMER.with(|t| {
        if let Some(handle) = t.borrow_mut().take() {
            dom::window().clear_timeout_with_handle(handle);
        }
    });

    let els2 = els.clone();
    let cb = Closure::once(move || {
        SEARCH_TIMER.with(|t| *t.borrow_mut() = None);
        let term = dom::get_input_value(&els2.search_input);
        state::update_filter(|f| f.search = term);
        catalog_view::render_grid(&els2);
    });
    let handle = dom::window()
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            SEARCH_DEBOUNCE_MS,
        )
        .unwrap();
    SEARCH_TIMER.with(|t| *t.borrow_mut() = Some(handle));
    cb.forget();
}

fn on_language_change(els: &Elements) {
    let lang = Language::parse(&dom::get_select_value(&els.lang_select));
    state::set_language(lang);
    prefs::with(|p| p.set_language(lang));

    i18n::apply_static_text();
    catalog_view::render_all(els);
    inquiry::render_status(els);
    if state::selected_item_id().is_some() {
        item_detail::rerender_open(els);
    } else {
        seo::apply_list_meta();
    }
}

fn bind_overlay_dismiss(els: &Elements, overlay: &web_sys::Element) {
    let els2 = els.clone();
    let overlay2 = overlay.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        if let Some(target) = e.target() {
            let target_js: &JsValue = target.as_ref();
            let overlay_js: &JsValue = overlay2.as_ref();
            if target_js == overlay_js {
                modals::close_all(&els2);
            }
        }
    }) as Box<dyn FnMut(_)>);
    overlay
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
