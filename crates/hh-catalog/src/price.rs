use hh_catalog_types::{CatalogItem, Language};

/// Sale price wins while the item is flagged on sale, otherwise the list
/// price. Items can have neither, which renders as "price on request".
pub fn effective_price(item: &CatalogItem) -> Option<f64> {
    if item.store_on_sale {
        if let Some(sale) = item.store_sale_price {
            return Some(sale);
        }
    }
    item.sell_price
}

pub fn has_price(item: &CatalogItem) -> bool {
    matches!(effective_price(item), Some(price) if price > 0.0)
}

/// Parses a price bound typed by the user. Blank and unparseable input means
/// "no bound", never an error.
pub fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formatted price pair for display: the current price, plus the crossed-out
/// list price when a sale undercuts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTag {
    pub current: String,
    pub regular: Option<String>,
}

pub fn price_tag(item: &CatalogItem, lang: Language) -> Option<PriceTag> {
    let current = effective_price(item).filter(|price| *price > 0.0)?;
    let regular = match (item.store_on_sale, item.store_sale_price, item.sell_price) {
        (true, Some(sale), Some(list)) if list > sale => Some(format_eur(list, lang)),
        _ => None,
    };
    Some(PriceTag {
        current: format_eur(current, lang),
        regular,
    })
}

/// `1.234,56 €` in German, `€1,234.56` in English.
pub fn format_eur(amount: f64, lang: Language) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let whole = (cents / 100).abs();
    let frac = (cents % 100).abs();

    let (thousands, decimal) = match lang {
        Language::De => ('.', ','),
        Language::En => (',', '.'),
    };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(thousands);
        }
        grouped.push(ch);
    }

    match lang {
        Language::De => format!("{sign}{grouped}{decimal}{frac:02} €"),
        Language::En => format!("€{sign}{grouped}{decimal}{frac:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_price_wins_only_while_on_sale() {
        let mut item = CatalogItem {
            sell_price: Some(219.9),
            store_sale_price: Some(189.0),
            ..CatalogItem::default()
        };
        assert_eq!(effective_price(&item), Some(219.9));
        item.store_on_sale = true;
        assert_eq!(effective_price(&item), Some(189.0));
        item.store_sale_price = None;
        assert_eq!(effective_price(&item), Some(219.9));
    }

    #[test]
    fn zero_priced_items_count_as_priceless() {
        let item = CatalogItem {
            sell_price: Some(0.0),
            ..CatalogItem::default()
        };
        assert!(!has_price(&item));
        assert_eq!(price_tag(&item, Language::De), None);
    }

    #[test]
    fn bounds_parse_forgivingly() {
        assert_eq!(parse_bound(" 80 "), Some(80.0));
        assert_eq!(parse_bound("79.5"), Some(79.5));
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("inf"), None);
        assert_eq!(parse_bound("NaN"), None);
    }

    #[test]
    fn eur_formats_per_locale() {
        assert_eq!(format_eur(1234.56, Language::De), "1.234,56 €");
        assert_eq!(format_eur(1234.56, Language::En), "€1,234.56");
        assert_eq!(format_eur(9.9, Language::De), "9,90 €");
        assert_eq!(format_eur(1_000_000.0, Language::De), "1.000.000,00 €");
        assert_eq!(format_eur(999.999, Language::En), "€1,000.00");
    }

    #[test]
    fn price_tag_shows_crossed_out_list_price() {
        let item = CatalogItem {
            sell_price: Some(219.9),
            store_on_sale: true,
            store_sale_price: Some(189.0),
            ..CatalogItem::default()
        };
        let tag = price_tag(&item, Language::De).unwrap();
        assert_eq!(tag.current, "189,00 €");
        assert_eq!(tag.regular.as_deref(), Some("219,90 €"));

        // A "sale" that does not undercut the list price shows no strike-out.
        let odd = CatalogItem {
            sell_price: Some(100.0),
            store_on_sale: true,
            store_sale_price: Some(120.0),
            ..CatalogItem::default()
        };
        let tag = price_tag(&odd, Language::De).unwrap();
        assert_eq!(tag.current, "120,00 €");
        assert_eq!(tag.regular, None);
    }
}
