//! DOM element bindings.
//!
//! All element references are resolved once at startup. To add new UI
//! elements, add a field here and bind it in `Elements::bind()`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn set_input_value(el: &HtmlInputElement, val: &str) {
    el.set_value(val);
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn set_select_value(el: &HtmlSelectElement, val: &str) {
    el.set_value(val);
}

pub fn get_textarea_value(el: &HtmlTextAreaElement) -> String {
    el.value().trim().to_string()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn create_option(value: &str, text: &str, selected: bool) -> web_sys::HtmlOptionElement {
    let opt: web_sys::HtmlOptionElement = create_element("option").dyn_into().unwrap();
    opt.set_value(value);
    opt.set_text_content(Some(text));
    opt.set_selected(selected);
    opt
}

/// Escape feed-supplied text before interpolating it into `innerHTML`.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements struct ──

/// All DOM element references used by the storefront UI.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,

    // Header
    pub theme_toggle_btn: HtmlElement,
    pub lang_select: HtmlSelectElement,
    pub wishlist_count: Element,

    // Tabs / filter bar
    pub tabs: Vec<Element>,
    pub search_input: HtmlInputElement,
    pub category_select: HtmlSelectElement,
    pub sub_category_select: HtmlSelectElement,
    pub min_price_input: HtmlInputElement,
    pub max_price_input: HtmlInputElement,
    pub sort_select: HtmlSelectElement,
    pub breadcrumb: Element,

    // Catalog grid
    pub item_grid: Element,
    pub recents_section: Element,
    pub recents_strip: Element,

    // Item detail overlay
    pub detail_overlay: Element,
    pub detail_close_btn: HtmlElement,
    pub detail_title: Element,
    pub detail_badge: Element,
    pub detail_meta: Element,
    pub detail_price: Element,
    pub detail_stock: Element,
    pub detail_description: Element,
    pub detail_specs: Element,
    pub gallery_main_img: HtmlImageElement,
    pub gallery_thumbs: Element,
    pub detail_wishlist_btn: HtmlElement,
    pub similar_section: Element,
    pub similar_strip: Element,

    // Inquiry form
    pub inquiry_name_input: HtmlInputElement,
    pub inquiry_email_input: HtmlInputElement,
    pub inquiry_phone_input: HtmlInputElement,
    pub inquiry_message_input: HtmlTextAreaElement,
    pub inquiry_submit_btn: HtmlButtonElement,
    pub inquiry_status: Element,

    // Static overlays and cookie banner
    pub legal_overlay: Element,
    pub about_overlay: Element,
    pub legal_open_btn: HtmlElement,
    pub about_open_btn: HtmlElement,
    pub overlay_close_btns: Vec<Element>,
    pub cookie_banner: Element,
    pub cookie_accept_btn: HtmlElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

macro_rules! get_textarea {
    ($id:expr) => {
        by_id_typed::<HtmlTextAreaElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing textarea #{}", $id)))?
    };
}

macro_rules! get_img {
    ($id:expr) => {
        by_id_typed::<HtmlImageElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing img #{}", $id)))?
    };
}

macro_rules! get_button {
    ($id:expr) => {
        by_id_typed::<HtmlButtonElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing button #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            body: doc()
                .body()
                .ok_or_else(|| JsValue::from_str("missing <body>"))?,

            theme_toggle_btn: get_html!("themeToggleBtn"),
            lang_select: get_select!("langSelect"),
            wishlist_count: get_el!("wishlistCount"),

            tabs: query_all(".catalog-tab"),
            search_input: get_input!("searchInput"),
            category_select: get_select!("categorySelect"),
            sub_category_select: get_select!("subCategorySelect"),
            min_price_input: get_input!("minPriceInput"),
            max_price_input: get_input!("maxPriceInput"),
            sort_select: get_select!("sortSelect"),
            breadcrumb: get_el!("breadcrumb"),

            item_grid: get_el!("itemGrid"),
            recents_section: get_el!("recentsSection"),
            recents_strip: get_el!("recentsStrip"),

            detail_overlay: get_el!("detailOverlay"),
            detail_close_btn: get_html!("detailCloseBtn"),
            detail_title: get_el!("detailTitle"),
            detail_badge: get_el!("detailBadge"),
            detail_meta: get_el!("detailMeta"),
            detail_price: get_el!("detailPrice"),
            detail_stock: get_el!("detailStock"),
            detail_description: get_el!("detailDescription"),
            detail_specs: get_el!("detailSpecs"),
            gallery_main_img: get_img!("galleryMainImg"),
            gallery_thumbs: get_el!("galleryThumbs"),
            detail_wishlist_btn: get_html!("detailWishlistBtn"),
            similar_section: get_el!("similarSection"),
            similar_strip: get_el!("similarStrip"),

            inquiry_name_input: get_input!("inquiryNameInput"),
            inquiry_email_input: get_input!("inquiryEmailInput"),
            inquiry_phone_input: get_input!("inquiryPhoneInput"),
            inquiry_message_input: get_textarea!("inquiryMessageInput"),
            inquiry_submit_btn: get_button!("inquirySubmitBtn"),
            inquiry_status: get_el!("inquiryStatus"),

            legal_overlay: get_el!("legalOverlay"),
            about_overlay: get_el!("aboutOverlay"),
            legal_open_btn: get_html!("legalOpenBtn"),
            about_open_btn: get_html!("aboutOpenBtn"),
            overlay_close_btns: query_all(".overlay-close"),
            cookie_banner: get_el!("cookieBanner"),
            cookie_accept_btn: get_html!("cookieAcceptBtn"),
        })
    }
}
