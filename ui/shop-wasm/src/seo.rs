//! Document metadata for crawlers and link previews.
//!
//! Title, meta description and Open Graph tags track whatever the visitor is
//! looking at: the storefront defaults on the list, the item itself on detail.

use hh_catalog_types::CatalogItem;

use crate::dom;
use crate::i18n::{self, TextKey};
use crate::state;

const DESCRIPTION_LIMIT: usize = 160;

pub fn apply_list_meta() {
    apply(i18n::t(TextKey::SiteTitle), i18n::t(TextKey::SiteDescription));
}

pub fn apply_item_meta(item: &CatalogItem) {
    let title = format!("{} | Hardwarehalle24", item.name);
    let description = item
        .description(state::language())
        .map(|d| truncate(d, DESCRIPTION_LIMIT))
        .unwrap_or_else(|| i18n::t(TextKey::SiteDescription).to_string());
    apply(&title, &description);
}

fn apply(title: &str, description: &str) {
    dom::document().set_title(title);
    set_meta_tag("name", "description", description);
    set_meta_tag("property", "og:title", title);
    set_meta_tag("property", "og:description", description);
}

fn set_meta_tag(attr: &str, key: &str, content: &str) {
    let el = match dom::query(&format!("meta[{attr}='{key}']")) {
        Some(el) => el,
        None => {
            let meta = dom::create_element("meta");
            let _ = meta.set_attribute(attr, key);
            if let Some(head) = dom::query("head") {
                let _ = head.append_child(&meta);
            }
            meta
        }
    };
    let _ = el.set_attribute("content", content);
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
