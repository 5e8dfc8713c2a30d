//! Catalog list rendering.
//!
//! Re-renders tabs, filter controls, breadcrumb, item grid and the
//! recently-viewed strip from the current snapshot and filter state.

use hh_catalog::price;
use hh_catalog_types::{Badge, CatalogItem, Language};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{self, Elements};
use crate::i18n::{self, TextKey};
use crate::item_detail;
use crate::prefs;
use crate::state;

/// Full list re-render. Called after every change that affects the list.
pub fn render_all(els: &Elements) {
    render_tabs(els);
    render_filter_options(els);
    render_breadcrumb(els);
    render_grid(els);
    render_recents(els);
    render_wishlist_count(els);
}

pub fn render_tabs(els: &Elements) {
    let current = state::filter().tab;
    for tab in &els.tabs {
        let value = tab.get_attribute("data-tab").unwrap_or_default();
        dom::toggle_class(tab, "active", value == current.as_str());
    }
}

/// Rebuild the category and sub-category dropdowns around the current
/// selection. Sub-categories are scoped to the selected category.
pub fn render_filter_options(els: &Elements) {
    let items = state::items();
    let filter = state::filter();

    let sel = &els.category_select;
    dom::set_inner_html(sel.unchecked_ref(), "");
    sel.append_child(&dom::create_option(
        "",
        i18n::t(TextKey::AllCategories),
        filter.category.is_none(),
    ))
    .unwrap();
    for cat in hh_catalog::categories(&items) {
        let selected = filter.category.as_deref() == Some(cat.as_str());
        sel.append_child(&dom::create_option(&cat, &cat, selected))
            .unwrap();
    }

    let sub_sel = &els.sub_category_select;
    dom::set_inner_html(sub_sel.unchecked_ref(), "");
    sub_sel
        .append_child(&dom::create_option(
            "",
            i18n::t(TextKey::AllSubCategories),
            filter.sub_category.is_none(),
        ))
        .unwrap();
    match filter.category.as_deref() {
        Some(cat) => {
            sub_sel.set_disabled(false);
            for sub in hh_catalog::sub_categories(&items, cat) {
                let selected = filter.sub_category.as_deref() == Some(sub.as_str());
                sub_sel
                    .append_child(&dom::create_option(&sub, &sub, selected))
                    .unwrap();
            }
        }
        None => sub_sel.set_disabled(true),
    }
}

pub fn render_breadcrumb(els: &Elements) {
    let items = state::items();
    let filter = state::filter();
    let counts = hh_catalog::breadcrumb_counts(
        &items,
        filter.category.as_deref(),
        filter.sub_category.as_deref(),
    );

    let mut html = format!(
        r#"<span class="crumb">{} ({})</span>"#,
        i18n::t(TextKey::TabAll),
        counts.total
    );
    if let Some(cat) = filter.category.as_deref() {
        html.push_str(&format!(
            r#" <span class="crumb-sep">›</span> <span class="crumb">{} ({})</span>"#,
            dom::escape_html(cat),
            counts.in_category
        ));
        if let Some(sub) = filter.sub_category.as_deref() {
            html.push_str(&format!(
                r#" <span class="crumb-sep">›</span> <span class="crumb">{} ({})</span>"#,
                dom::escape_html(sub),
                counts.in_sub_category
            ));
        }
    }
    dom::set_inner_html(&els.breadcrumb, &html);
}

/// Render item cards in the grid container.
pub fn render_grid(els: &Elements) {
    let items = state::items();
    let filter = state::filter();
    let lang = state::language();
    let container = &els.item_grid;
    dom::set_inner_html(container, "");

    let visible = hh_catalog::visible_items(&items, &filter);
    if visible.is_empty() {
        dom::set_inner_html(
            container,
            &format!(
                r#"<div class="grid-empty">{}</div>"#,
                i18n::t(TextKey::EmptyCatalog)
            ),
        );
        return;
    }

    for item in visible {
        let card = dom::create_element("article");
        let mut cls = "item-card".to_string();
        if item.quantity == Some(0) {
            cls.push_str(" item-card--sold-out");
        }
        card.set_attribute("class", &cls).unwrap();
        card.set_attribute("data-id", &item.id).unwrap();
        dom::set_inner_html(&card, &card_html(item, lang));
        container.append_child(&card).unwrap();
    }

    wire_grid_events(els);
}

fn card_html(item: &CatalogItem, lang: Language) -> String {
    let name = dom::escape_html(&item.name);
    let img_html = match &item.image_url {
        Some(url) if !url.is_empty() => format!(
            r#"<img class="card-img" src="{}" alt="{}" loading="lazy">"#,
            dom::escape_html(url),
            name
        ),
        _ => r#"<div class="card-img card-img--empty"></div>"#.to_string(),
    };
    let classification = [item.category.as_deref(), item.sub_category.as_deref()]
        .into_iter()
        .flatten()
        .filter(|v| !v.is_empty())
        .map(dom::escape_html)
        .collect::<Vec<_>>()
        .join(" · ");
    let stock_html = if item.quantity == Some(0) {
        format!(
            r#"<span class="card-stock card-stock--out">{}</span>"#,
            i18n::t(TextKey::SoldOut)
        )
    } else {
        String::new()
    };
    let wishlisted = prefs::with(|p| p.is_wishlisted(&item.id));
    let heart_cls = if wishlisted {
        "card-wishlist-btn active"
    } else {
        "card-wishlist-btn"
    };
    let heart_title = if wishlisted {
        i18n::t(TextKey::WishlistRemove)
    } else {
        i18n::t(TextKey::WishlistAdd)
    };

    format!(
        r#"
        {}
        {}
        <button class="{}" data-id="{}" title="{}">♥</button>
        <div class="card-name" title="{}">{}</div>
        <div class="card-classification">{}</div>
        <div class="card-price">{}</div>
        {}
        "#,
        img_html,
        badge_chip(item),
        heart_cls,
        item.id,
        heart_title,
        name,
        name,
        classification,
        price_html(item, lang),
        stock_html,
    )
}

pub fn badge_chip(item: &CatalogItem) -> String {
    match item.badge {
        Some(Badge::New) => format!(
            r#"<span class="badge badge--new">{}</span>"#,
            i18n::t(TextKey::BadgeNew)
        ),
        Some(Badge::PriceReduced) => format!(
            r#"<span class="badge badge--sale">{}</span>"#,
            i18n::t(TextKey::BadgePriceReduced)
        ),
        None => String::new(),
    }
}

pub fn price_html(item: &CatalogItem, lang: Language) -> String {
    match price::price_tag(item, lang) {
        Some(tag) => {
            let mut html = format!(r#"<span class="price-current">{}</span>"#, tag.current);
            if let Some(regular) = &tag.regular {
                html.push_str(&format!(
                    r#" <span class="price-regular">{}</span>"#,
                    regular
                ));
            }
            html
        }
        None => format!(
            r#"<span class="price-request">{}</span>"#,
            i18n::t(TextKey::PriceOnRequest)
        ),
    }
}

/// Wire click events on dynamically-created grid cards.
fn wire_grid_events(els: &Elements) {
    let container = &els.item_grid;

    // Card click opens the detail view
    for card in dom::query_all_within(container, ".item-card") {
        let id = card.get_attribute("data-id").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            item_detail::open(&els2, &id);
        }) as Box<dyn FnMut(_)>);
        card.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // Heart toggles the wish list without opening the card
    for btn in dom::query_all_within(container, ".card-wishlist-btn") {
        let id = btn.get_attribute("data-id").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            prefs::with(|p| p.toggle_wishlist(&id));
            render_grid(&els2);
            render_wishlist_count(&els2);
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Render the recently-viewed strip, hidden while it has nothing to show.
pub fn render_recents(els: &Elements) {
    let items = state::items();
    let lang = state::language();
    let ids = prefs::with(|p| p.recently_viewed());
    let recents = hh_catalog::resolve_ids(&items, &ids);

    if recents.is_empty() {
        dom::add_class(&els.recents_section, "hidden");
        return;
    }
    dom::remove_class(&els.recents_section, "hidden");

    let strip = &els.recents_strip;
    dom::set_inner_html(strip, "");
    for item in recents {
        let card = dom::create_element("div");
        card.set_attribute("class", "mini-card").unwrap();
        card.set_attribute("data-id", &item.id).unwrap();
        dom::set_inner_html(&card, &mini_card_html(item, lang));
        strip.append_child(&card).unwrap();
    }
    wire_strip(els, strip);
}

pub fn mini_card_html(item: &CatalogItem, lang: Language) -> String {
    let name = dom::escape_html(&item.name);
    let img_html = match &item.image_url {
        Some(url) if !url.is_empty() => format!(
            r#"<img class="mini-img" src="{}" alt="{}" loading="lazy">"#,
            dom::escape_html(url),
            name
        ),
        _ => r#"<div class="mini-img mini-img--empty"></div>"#.to_string(),
    };
    let price = match price::price_tag(item, lang) {
        Some(tag) => tag.current,
        None => i18n::t(TextKey::PriceOnRequest).to_string(),
    };
    format!(
        r#"
        {}
        <div class="mini-name" title="{}">{}</div>
        <div class="mini-price">{}</div>
        "#,
        img_html, name, name, price
    )
}

/// Wire mini cards in a strip to open their item.
pub fn wire_strip(els: &Elements, container: &web_sys::Element) {
    for card in dom::query_all_within(container, ".mini-card") {
        let id = card.get_attribute("data-id").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            item_detail::open(&els2, &id);
        }) as Box<dyn FnMut(_)>);
        card.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Wish list counter in the header, counted against the current catalog.
pub fn render_wishlist_count(els: &Elements) {
    let items = state::items();
    let ids = prefs::with(|p| p.wishlist());
    let count = hh_catalog::resolve_ids(&items, &ids).len();
    dom::set_text(&els.wishlist_count, &count.to_string());
}
