pub mod price;
pub mod snapshot;
pub mod specs;

use hh_catalog_types::{CatalogItem, CatalogTab, FilterState, SortOrder};
use std::cmp::Ordering;
use std::collections::BTreeSet;

pub const SIMILAR_LIMIT: usize = 3;

pub fn categories(items: &[CatalogItem]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for item in items {
        if let Some(category) = selection(&item.category) {
            set.insert(category.to_owned());
        }
    }
    set.into_iter().collect()
}

pub fn sub_categories(items: &[CatalogItem], category: &str) -> Vec<String> {
    if category.is_empty() {
        return Vec::new();
    }
    let mut set = BTreeSet::new();
    for item in items {
        if item.category.as_deref() != Some(category) {
            continue;
        }
        if let Some(sub) = selection(&item.sub_category) {
            set.insert(sub.to_owned());
        }
    }
    set.into_iter().collect()
}

/// Narrows the item list predicate by predicate: sale tab, category,
/// sub-category, price window, then search text.
pub fn filter<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    state: &FilterState,
) -> Vec<&'a CatalogItem> {
    let mut kept: Vec<&CatalogItem> = items.into_iter().collect();

    if state.tab == CatalogTab::Sale {
        kept.retain(|item| item.store_on_sale);
    }
    if let Some(category) = selection(&state.category) {
        kept.retain(|item| item.category.as_deref() == Some(category));
    }
    if let Some(sub) = selection(&state.sub_category) {
        kept.retain(|item| item.sub_category.as_deref() == Some(sub));
    }
    if let Some(min) = price::parse_bound(&state.min_price) {
        kept.retain(|item| matches!(price::effective_price(item), Some(p) if p >= min));
    }
    if let Some(max) = price::parse_bound(&state.max_price) {
        kept.retain(|item| matches!(price::effective_price(item), Some(p) if p <= max));
    }
    let needle = state.search.trim().to_lowercase();
    if !needle.is_empty() {
        kept.retain(|item| matches_search(item, &needle));
    }

    kept
}

fn matches_search(item: &CatalogItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item
            .category
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle)
        || item
            .sub_category
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle)
}

/// Stable sort; items without an effective price always sort last for the
/// price orders.
pub fn sort(mut items: Vec<&CatalogItem>, order: SortOrder) -> Vec<&CatalogItem> {
    match order {
        SortOrder::Default => {}
        SortOrder::PriceAsc => items.sort_by(|a, b| {
            compare_prices(price::effective_price(a), price::effective_price(b), true)
        }),
        SortOrder::PriceDesc => items.sort_by(|a, b| {
            compare_prices(price::effective_price(a), price::effective_price(b), false)
        }),
        SortOrder::NameAsc => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
    items
}

fn compare_prices(a: Option<f64>, b: Option<f64>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if ascending {
                x.total_cmp(&y)
            } else {
                y.total_cmp(&x)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// DIN 5007-1 folding: umlauts compare as their base vowel, ß as ss. Raw
// lowercase comparison breaks ties so "Muller" still sorts before "Müller".
fn fold_name(raw: &str) -> String {
    let mut folded = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            'ä' | 'Ä' => folded.push('a'),
            'ö' | 'Ö' => folded.push('o'),
            'ü' | 'Ü' => folded.push('u'),
            'ß' => folded.push_str("ss"),
            _ => folded.extend(ch.to_lowercase()),
        }
    }
    folded
}

fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(&fold_name(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

/// Filter plus sort in one step, the list the grid actually renders.
pub fn visible_items<'a>(items: &'a [CatalogItem], state: &FilterState) -> Vec<&'a CatalogItem> {
    sort(filter(items, state), state.sort)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadcrumbCounts {
    pub total: usize,
    pub in_category: usize,
    pub in_sub_category: usize,
}

/// Counts against the full item list, independent of price/search filters.
pub fn breadcrumb_counts(
    items: &[CatalogItem],
    category: Option<&str>,
    sub_category: Option<&str>,
) -> BreadcrumbCounts {
    let category = category.filter(|value| !value.is_empty());
    let sub_category = sub_category.filter(|value| !value.is_empty());

    let in_category = match category {
        Some(cat) => items
            .iter()
            .filter(|item| item.category.as_deref() == Some(cat))
            .count(),
        None => 0,
    };
    let in_sub_category = match (category, sub_category) {
        (Some(cat), Some(sub)) => items
            .iter()
            .filter(|item| {
                item.category.as_deref() == Some(cat)
                    && item.sub_category.as_deref() == Some(sub)
            })
            .count(),
        _ => 0,
    };

    BreadcrumbCounts {
        total: items.len(),
        in_category,
        in_sub_category,
    }
}

/// Other items sharing the focal item's category or sub-category, first
/// [`SIMILAR_LIMIT`] in list order.
pub fn similar_items<'a>(items: &'a [CatalogItem], focal: &CatalogItem) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| item.id != focal.id)
        .filter(|item| shares_classification(item, focal))
        .take(SIMILAR_LIMIT)
        .collect()
}

fn shares_classification(a: &CatalogItem, b: &CatalogItem) -> bool {
    let same_category = match (selection(&a.category), selection(&b.category)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    };
    let same_sub = match (selection(&a.sub_category), selection(&b.sub_category)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    };
    same_category || same_sub
}

/// Maps persisted IDs (wishlist, recently viewed) onto the current catalog,
/// dropping IDs with no matching item and preserving the given order.
pub fn resolve_ids<'a>(items: &'a [CatalogItem], ids: &[String]) -> Vec<&'a CatalogItem> {
    ids.iter()
        .filter_map(|id| find_item(items, id))
        .collect()
}

pub fn find_item<'a>(items: &'a [CatalogItem], id: &str) -> Option<&'a CatalogItem> {
    items.iter().find(|item| item.id == id)
}

fn selection(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hh_catalog_types::Language;

    fn item(
        id: &str,
        name: &str,
        category: Option<&str>,
        sub: Option<&str>,
        price: Option<f64>,
    ) -> CatalogItem {
        CatalogItem {
            id: id.to_owned(),
            name: name.to_owned(),
            category: category.map(str::to_owned),
            sub_category: sub.map(str::to_owned),
            sell_price: price,
            ..CatalogItem::default()
        }
    }

    fn demo_catalog() -> Vec<CatalogItem> {
        vec![
            item("g1", "RTX 3080", Some("GPU"), Some("RTX"), Some(699.0)),
            item("g2", "RTX 4070", Some("GPU"), Some("RTX"), Some(649.0)),
            item("g3", "RX 7800 XT", Some("GPU"), Some("Radeon"), Some(549.0)),
            item("g4", "GTX 1080", Some("GPU"), None, Some(199.0)),
            item("c1", "Ryzen 7 5800X", Some("CPU"), Some("AM4"), Some(219.9)),
            item("c2", "Core i5-12400F", Some("CPU"), Some("LGA1700"), Some(139.0)),
            item("m1", "B550 Tomahawk", Some("Mainboard"), Some("AM4"), Some(149.0)),
            item("k1", "Antikes Gehäuse", None, None, None),
            item("k2", "Lüfter 120mm", Some("Kühlung"), None, Some(12.5)),
            item("k3", "Wärmeleitpaste", Some("Kühlung"), None, Some(7.9)),
        ]
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let catalog = demo_catalog();
        assert_eq!(
            categories(&catalog),
            vec!["CPU", "GPU", "Kühlung", "Mainboard"]
        );
    }

    #[test]
    fn sub_categories_are_scoped_to_their_category() {
        let catalog = demo_catalog();
        assert_eq!(sub_categories(&catalog, "GPU"), vec!["RTX", "Radeon"]);
        assert_eq!(sub_categories(&catalog, "Kühlung"), Vec::<String>::new());
        assert_eq!(sub_categories(&catalog, ""), Vec::<String>::new());
    }

    #[test]
    fn sale_tab_keeps_only_sale_items() {
        let mut catalog = demo_catalog();
        catalog[0].store_on_sale = true;
        catalog[4].store_on_sale = true;

        let state = FilterState {
            tab: CatalogTab::Sale,
            ..FilterState::default()
        };
        let kept = filter(&catalog, &state);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|item| item.store_on_sale));
    }

    #[test]
    fn category_and_sub_category_narrow_in_sequence() {
        let catalog = demo_catalog();
        let state = FilterState {
            category: Some("GPU".into()),
            sub_category: Some("RTX".into()),
            ..FilterState::default()
        };
        let kept = filter(&catalog, &state);
        assert_eq!(
            kept.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["g1", "g2"]
        );
    }

    #[test]
    fn price_window_keeps_items_inside_bounds() {
        let catalog = vec![
            item("a", "A", None, None, Some(50.0)),
            item("b", "B", None, None, Some(100.0)),
            item("c", "C", None, None, Some(150.0)),
        ];
        let state = FilterState {
            min_price: "80".into(),
            max_price: "120".into(),
            ..FilterState::default()
        };
        let kept = filter(&catalog, &state);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "b");
    }

    #[test]
    fn price_bounds_exclude_priceless_items() {
        let catalog = vec![
            item("a", "A", None, None, None),
            item("b", "B", None, None, Some(100.0)),
        ];
        let state = FilterState {
            min_price: "1".into(),
            ..FilterState::default()
        };
        let kept = filter(&catalog, &state);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "b");
    }

    #[test]
    fn unparseable_bounds_are_ignored() {
        let catalog = demo_catalog();
        let state = FilterState {
            min_price: "abc".into(),
            max_price: "  ".into(),
            ..FilterState::default()
        };
        assert_eq!(filter(&catalog, &state).len(), catalog.len());
    }

    #[test]
    fn search_matches_name_category_and_sub_category() {
        let catalog = vec![
            item("a", "RTX 3080", Some("GPU"), None, None),
            item("b", "Gamer-Bundle", Some("RTX Series"), None, None),
            item("c", "GTX 1080", Some("GPU"), None, None),
        ];
        let state = FilterState {
            search: "rtx".into(),
            ..FilterState::default()
        };
        let kept = filter(&catalog, &state);
        assert_eq!(
            kept.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let mut catalog = demo_catalog();
        catalog[0].store_on_sale = true;
        catalog[1].store_on_sale = true;
        let state = FilterState {
            tab: CatalogTab::Sale,
            category: Some("GPU".into()),
            search: "rtx".into(),
            ..FilterState::default()
        };
        let once = filter(&catalog, &state);
        let twice = filter(once.clone(), &state);
        assert_eq!(
            once.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            twice.iter().map(|item| item.id.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn price_asc_puts_absent_prices_last() {
        let catalog = vec![
            item("a", "A", None, None, None),
            item("b", "B", None, None, Some(50.0)),
            item("c", "C", None, None, Some(10.0)),
        ];
        let sorted = sort(catalog.iter().collect(), SortOrder::PriceAsc);
        assert_eq!(
            sorted.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["c", "b", "a"]
        );
    }

    #[test]
    fn price_desc_also_puts_absent_prices_last() {
        let catalog = vec![
            item("a", "A", None, None, None),
            item("b", "B", None, None, Some(50.0)),
            item("c", "C", None, None, Some(10.0)),
        ];
        let sorted = sort(catalog.iter().collect(), SortOrder::PriceDesc);
        assert_eq!(
            sorted.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c", "a"]
        );
    }

    #[test]
    fn sale_price_drives_price_sorting() {
        let mut catalog = vec![
            item("a", "A", None, None, Some(100.0)),
            item("b", "B", None, None, Some(300.0)),
        ];
        catalog[1].store_on_sale = true;
        catalog[1].store_sale_price = Some(50.0);
        let sorted = sort(catalog.iter().collect(), SortOrder::PriceAsc);
        assert_eq!(
            sorted.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "a"]
        );
    }

    #[test]
    fn sorting_is_stable_and_idempotent() {
        let catalog = vec![
            item("a", "Same", None, None, Some(99.0)),
            item("b", "Same", None, None, Some(99.0)),
            item("c", "Same", None, None, Some(99.0)),
        ];
        for order in [
            SortOrder::Default,
            SortOrder::PriceAsc,
            SortOrder::PriceDesc,
            SortOrder::NameAsc,
        ] {
            let once = sort(catalog.iter().collect(), order);
            assert_eq!(
                once.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
                vec!["a", "b", "c"],
                "{order:?} must keep input order for equal keys"
            );
            let twice = sort(once.clone(), order);
            assert_eq!(
                once.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
                twice.iter().map(|item| item.id.as_str()).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn name_sort_folds_german_umlauts() {
        let catalog = vec![
            item("z", "Zalman Z3", None, None, None),
            item("u", "Übertaktungs-Kit", None, None, None),
            item("a", "Arctic P12", None, None, None),
            item("s", "Straßenpreis-Bundle", None, None, None),
        ];
        let sorted = sort(catalog.iter().collect(), SortOrder::NameAsc);
        assert_eq!(
            sorted.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "s", "u", "z"]
        );
    }

    #[test]
    fn breadcrumb_counts_match_selection() {
        let mut catalog = Vec::new();
        for n in 0..4 {
            let sub = if n < 2 { Some("RTX") } else { Some("Radeon") };
            catalog.push(item(&format!("g{n}"), "G", Some("GPU"), sub, None));
        }
        for n in 0..6 {
            catalog.push(item(&format!("x{n}"), "X", Some("CPU"), None, None));
        }

        let counts = breadcrumb_counts(&catalog, Some("GPU"), Some("RTX"));
        assert_eq!(
            counts,
            BreadcrumbCounts {
                total: 10,
                in_category: 4,
                in_sub_category: 2
            }
        );

        let none_selected = breadcrumb_counts(&catalog, None, None);
        assert_eq!(none_selected.total, 10);
        assert_eq!(none_selected.in_category, 0);
        assert_eq!(none_selected.in_sub_category, 0);

        // Sub-category alone counts nothing without a category.
        let sub_only = breadcrumb_counts(&catalog, None, Some("RTX"));
        assert_eq!(sub_only.in_sub_category, 0);
    }

    #[test]
    fn similar_items_share_category_or_sub_category() {
        let catalog = demo_catalog();
        let focal = &catalog[6]; // Mainboard / AM4
        let similar = similar_items(&catalog, focal);
        // c1 shares the AM4 sub-category; no other mainboards exist.
        assert_eq!(
            similar.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["c1"]
        );

        let gpu = &catalog[0];
        let similar = similar_items(&catalog, gpu);
        assert_eq!(similar.len(), SIMILAR_LIMIT);
        assert!(similar.iter().all(|item| item.id != gpu.id));
    }

    #[test]
    fn unclassified_focal_item_has_no_similar_items() {
        let catalog = demo_catalog();
        let focal = &catalog[7]; // no category, no sub-category
        assert!(similar_items(&catalog, focal).is_empty());
    }

    #[test]
    fn resolve_ids_drops_missing_and_keeps_order() {
        let catalog = demo_catalog();
        let ids = vec![
            "c1".to_owned(),
            "deleted".to_owned(),
            "g3".to_owned(),
        ];
        let resolved = resolve_ids(&catalog, &ids);
        assert_eq!(
            resolved.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["c1", "g3"]
        );
    }

    #[test]
    fn visible_items_filter_then_sort() {
        let catalog = demo_catalog();
        let state = FilterState {
            category: Some("GPU".into()),
            sort: SortOrder::PriceAsc,
            ..FilterState::default()
        };
        let visible = visible_items(&catalog, &state);
        assert_eq!(
            visible.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["g4", "g3", "g2", "g1"]
        );
    }

    #[test]
    fn pipeline_handles_raw_feed_json() -> anyhow::Result<()> {
        let catalog: Vec<CatalogItem> = serde_json::from_str(
            r#"[
                {"id":"a","name":"RTX 4070","category":"GPU","subCategory":"RTX",
                 "sellPrice":649.0,"storeOnSale":true,"storeSalePrice":599.0,
                 "badge":"priceReduced","quantity":2},
                {"id":"b","name":"Beratungstermin","category":"Service"},
                {"id":"c","name":"RX 7800 XT","category":"GPU","subCategory":"Radeon",
                 "sellPrice":549.0,"storeGalleryUrls":null,"badge":"weird"}
            ]"#,
        )?;

        let state = FilterState {
            category: Some("GPU".into()),
            sort: SortOrder::PriceAsc,
            ..FilterState::default()
        };
        let visible = visible_items(&catalog, &state);
        assert_eq!(
            visible.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            vec!["c", "a"]
        );

        let tag = price::price_tag(visible[1], Language::De).unwrap();
        assert_eq!(tag.current, "599,00 €");
        assert_eq!(tag.regular.as_deref(), Some("649,00 €"));

        // The service item has no price and renders as "on request".
        let service = find_item(&catalog, "b").unwrap();
        assert!(!price::has_price(service));
        Ok(())
    }
}
