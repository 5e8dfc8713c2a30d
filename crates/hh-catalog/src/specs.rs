use hh_catalog_types::SpecValue;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Display priority for hardware spec keys when the item's category defines
/// no explicit field order. Matching is case-insensitive substring in either
/// direction, first hit wins.
pub const SPEC_PRIORITY: &[&str] = &[
    "cpu",
    "prozessor",
    "gpu",
    "grafik",
    "ram",
    "arbeitsspeicher",
    "speicher",
    "ssd",
    "festplatte",
    "mainboard",
    "sockel",
    "chipsatz",
    "netzteil",
    "watt",
    "kerne",
    "threads",
    "takt",
    "boost",
    "formfaktor",
];

pub fn priority_index(key: &str) -> Option<usize> {
    let folded = key.to_lowercase();
    SPEC_PRIORITY
        .iter()
        .position(|entry| folded.contains(entry) || entry.contains(folded.as_str()))
}

/// Orders spec keys for display. `category_fields`, when non-empty, dictates
/// the order for the keys it names; everything else falls back to the
/// hardware priority list, with unmatched keys last in lexicographic order.
pub fn ordered_spec_keys(
    specs: Option<&BTreeMap<String, SpecValue>>,
    category_fields: Option<&[String]>,
) -> Vec<String> {
    let Some(specs) = specs else {
        return Vec::new();
    };

    if let Some(fields) = category_fields {
        if !fields.is_empty() {
            let mut ordered: Vec<String> = Vec::new();
            for key in fields {
                if specs.contains_key(key) && !ordered.contains(key) {
                    ordered.push(key.clone());
                }
            }
            let mut rest: Vec<&String> = specs
                .keys()
                .filter(|key| !fields.contains(*key))
                .collect();
            rest.sort_by(|a, b| lexicographic(a, b));
            ordered.extend(rest.into_iter().cloned());
            return ordered;
        }
    }

    let mut keys: Vec<&String> = specs.keys().collect();
    keys.sort_by(|a, b| match (priority_index(a), priority_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => lexicographic(a, b),
    });
    keys.into_iter().cloned().collect()
}

fn lexicographic(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs_of(keys: &[&str]) -> BTreeMap<String, SpecValue> {
        keys.iter()
            .map(|key| ((*key).to_owned(), SpecValue::Text("x".into())))
            .collect()
    }

    #[test]
    fn priority_list_orders_cpu_before_ram_before_unknown() {
        let specs = specs_of(&["RAM", "CPU", "Color"]);
        assert_eq!(ordered_spec_keys(Some(&specs), None), vec!["CPU", "RAM", "Color"]);
    }

    #[test]
    fn matching_is_substring_both_directions() {
        assert_eq!(priority_index("Prozessor"), Some(1));
        assert_eq!(priority_index("Grafikkarte"), Some(3));
        assert_eq!(priority_index("Boost-Takt"), Some(16));
        assert_eq!(priority_index("Lieferumfang"), None);
    }

    #[test]
    fn unmatched_keys_sort_lexicographically_after_matched() {
        let specs = specs_of(&["Gewicht", "Abmessungen", "Sockel", "Farbe"]);
        assert_eq!(
            ordered_spec_keys(Some(&specs), None),
            vec!["Sockel", "Abmessungen", "Farbe", "Gewicht"]
        );
    }

    #[test]
    fn category_fields_take_precedence() {
        let specs = specs_of(&["Takt", "Kerne", "Sockel", "TDP"]);
        let fields = vec!["Kerne".to_owned(), "Takt".to_owned(), "Boost".to_owned()];
        // "Boost" is not a spec key and is skipped; the rest follow
        // lexicographically.
        assert_eq!(
            ordered_spec_keys(Some(&specs), Some(&fields)),
            vec!["Kerne", "Takt", "Sockel", "TDP"]
        );
    }

    #[test]
    fn empty_category_fields_fall_back_to_priority_list() {
        let specs = specs_of(&["RAM", "CPU"]);
        let fields: Vec<String> = Vec::new();
        assert_eq!(
            ordered_spec_keys(Some(&specs), Some(&fields)),
            vec!["CPU", "RAM"]
        );
    }

    #[test]
    fn missing_specs_yield_no_keys() {
        assert!(ordered_spec_keys(None, None).is_empty());
    }
}
