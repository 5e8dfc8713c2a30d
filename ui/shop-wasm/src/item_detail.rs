//! Item detail overlay.
//!
//! Renders the full product view: gallery, price, stock, description, spec
//! table and similar items. The open item is mirrored into the URL hash so
//! product links can be shared.

use hh_catalog::specs;
use hh_catalog_types::CatalogItem;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{self, Elements};
use crate::i18n::{self, TextKey};
use crate::{catalog_view, inquiry, prefs, seo, state};

const OPEN_CLASS: &str = "open";
const HASH_PREFIX: &str = "#item=";

/// Open the detail overlay for an item, recording the visit.
pub fn open(els: &Elements, id: &str) {
    let Some(item) = state::find_item(id) else {
        web_sys::console::warn_1(&format!("unknown item {id}").into());
        return;
    };
    state::set_selected_item(Some(item.id.clone()));
    prefs::with(|p| p.add_recently_viewed(&item.id));
    render(els, &item);
    inquiry::reset_status(els);
    seo::apply_item_meta(&item);
    set_hash(Some(&item.id));
    dom::add_class(&els.detail_overlay, OPEN_CLASS);
    catalog_view::render_recents(els);
}

pub fn close(els: &Elements) {
    dom::remove_class(&els.detail_overlay, OPEN_CLASS);
    state::set_selected_item(None);
    set_hash(None);
    seo::apply_list_meta();
}

/// Reconcile the overlay with a freshly applied snapshot: re-render the open
/// item, close if it left the catalog, or honor a pending product link.
pub fn sync_after_snapshot(els: &Elements) {
    match state::selected_item_id() {
        Some(id) => match state::find_item(&id) {
            Some(item) => render(els, &item),
            None => close(els),
        },
        None => {
            if !dom::has_class(&els.detail_overlay, OPEN_CLASS) {
                if let Some(id) = item_id_from_hash() {
                    open(els, &id);
                }
            }
        }
    }
}

/// Re-render the overlay contents for the open item, if any. Used when the
/// language flips while the overlay is up.
pub fn rerender_open(els: &Elements) {
    if let Some(item) = state::selected_item() {
        render(els, &item);
        seo::apply_item_meta(&item);
    }
}

fn render(els: &Elements, item: &CatalogItem) {
    let lang = state::language();

    dom::set_text(&els.detail_title, &item.name);
    dom::set_inner_html(&els.detail_badge, &catalog_view::badge_chip(item));

    let classification = [item.category.as_deref(), item.sub_category.as_deref()]
        .into_iter()
        .flatten()
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    dom::set_text(&els.detail_meta, &classification);

    dom::set_inner_html(&els.detail_price, &catalog_view::price_html(item, lang));
    render_stock(els, item);
    render_description(els, item);
    render_specs(els, item);
    render_gallery(els, item);
    render_wishlist_button(els);
    render_similar(els, item);
}

fn render_stock(els: &Elements, item: &CatalogItem) {
    match item.quantity {
        Some(0) => {
            dom::set_text(&els.detail_stock, i18n::t(TextKey::SoldOut));
            dom::add_class(&els.detail_stock, "out");
        }
        Some(n) => {
            dom::set_text(
                &els.detail_stock,
                &format!("{}: {}", i18n::t(TextKey::InStock), n),
            );
            dom::remove_class(&els.detail_stock, "out");
        }
        None => {
            dom::set_text(&els.detail_stock, "");
            dom::remove_class(&els.detail_stock, "out");
        }
    }
}

fn render_description(els: &Elements, item: &CatalogItem) {
    let html = match item.description(state::language()) {
        Some(text) if !text.trim().is_empty() => format!(
            r#"<h3>{}</h3><p>{}</p>"#,
            i18n::t(TextKey::DescriptionHeading),
            dom::escape_html(text).replace('\n', "<br>")
        ),
        _ => String::new(),
    };
    dom::set_inner_html(&els.detail_description, &html);
}

fn render_specs(els: &Elements, item: &CatalogItem) {
    let keys = specs::ordered_spec_keys(item.specs.as_ref(), item.category_fields.as_deref());
    let Some(table) = item.specs.as_ref().filter(|_| !keys.is_empty()) else {
        dom::set_inner_html(&els.detail_specs, "");
        return;
    };

    let mut rows = String::new();
    for key in &keys {
        if let Some(value) = table.get(key) {
            rows.push_str(&format!(
                r#"<tr><th>{}</th><td>{}</td></tr>"#,
                dom::escape_html(key),
                dom::escape_html(&value.to_string())
            ));
        }
    }
    dom::set_inner_html(
        &els.detail_specs,
        &format!(
            r#"<h3>{}</h3><table class="spec-table"><tbody>{}</tbody></table>"#,
            i18n::t(TextKey::SpecsHeading),
            rows
        ),
    );
}

fn render_gallery(els: &Elements, item: &CatalogItem) {
    let mut urls: Vec<&str> = Vec::new();
    if let Some(u) = item.image_url.as_deref() {
        if !u.is_empty() {
            urls.push(u);
        }
    }
    for u in &item.store_gallery_urls {
        if !u.is_empty() && !urls.contains(&u.as_str()) {
            urls.push(u);
        }
    }

    match urls.first() {
        Some(first) => {
            els.gallery_main_img.set_src(first);
            els.gallery_main_img.set_alt(&item.name);
            dom::remove_class(els.gallery_main_img.unchecked_ref(), "hidden");
        }
        None => {
            els.gallery_main_img.set_src("");
            dom::add_class(els.gallery_main_img.unchecked_ref(), "hidden");
        }
    }

    let thumbs = &els.gallery_thumbs;
    dom::set_inner_html(thumbs, "");
    if urls.len() < 2 {
        return;
    }
    for (i, url) in urls.iter().enumerate() {
        let thumb = dom::create_element("img");
        let cls = if i == 0 {
            "gallery-thumb active"
        } else {
            "gallery-thumb"
        };
        thumb.set_attribute("class", cls).unwrap();
        thumb.set_attribute("src", url).unwrap();
        thumb.set_attribute("data-src", url).unwrap();
        thumbs.append_child(&thumb).unwrap();
    }
    wire_gallery(els);
}

/// Wire thumbnail clicks to swap the main image.
fn wire_gallery(els: &Elements) {
    for thumb in dom::query_all_within(&els.gallery_thumbs, ".gallery-thumb") {
        let src = thumb.get_attribute("data-src").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            els2.gallery_main_img.set_src(&src);
            for t in dom::query_all_within(&els2.gallery_thumbs, ".gallery-thumb") {
                dom::remove_class(&t, "active");
            }
            let target = e.current_target().unwrap();
            let el: &web_sys::Element = target.unchecked_ref();
            dom::add_class(el, "active");
        }) as Box<dyn FnMut(_)>);
        thumb
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

pub fn render_wishlist_button(els: &Elements) {
    let Some(item) = state::selected_item() else {
        return;
    };
    let wishlisted = prefs::with(|p| p.is_wishlisted(&item.id));
    dom::toggle_class(els.detail_wishlist_btn.unchecked_ref(), "active", wishlisted);
    dom::set_text(
        els.detail_wishlist_btn.unchecked_ref(),
        if wishlisted {
            i18n::t(TextKey::WishlistRemove)
        } else {
            i18n::t(TextKey::WishlistAdd)
        },
    );
}

fn render_similar(els: &Elements, item: &CatalogItem) {
    let items = state::items();
    let lang = state::language();
    let similar = hh_catalog::similar_items(&items, item);

    if similar.is_empty() {
        dom::add_class(&els.similar_section, "hidden");
        return;
    }
    dom::remove_class(&els.similar_section, "hidden");

    let strip = &els.similar_strip;
    dom::set_inner_html(strip, "");
    for s in similar {
        let card = dom::create_element("div");
        card.set_attribute("class", "mini-card").unwrap();
        card.set_attribute("data-id", &s.id).unwrap();
        dom::set_inner_html(&card, &catalog_view::mini_card_html(s, lang));
        strip.append_child(&card).unwrap();
    }
    catalog_view::wire_strip(els, strip);
}

// ── Product links ──

pub fn item_id_from_hash() -> Option<String> {
    let hash = dom::window().location().hash().ok()?;
    let raw = hash.strip_prefix(HASH_PREFIX)?;
    if raw.is_empty() {
        return None;
    }
    js_sys::decode_uri_component(raw)
        .ok()
        .map(String::from)
}

fn set_hash(id: Option<&str>) {
    let value = match id {
        Some(id) => format!(
            "{HASH_PREFIX}{}",
            String::from(js_sys::encode_uri_component(id))
        ),
        None => String::new(),
    };
    let _ = dom::window().location().set_hash(&value);
}
