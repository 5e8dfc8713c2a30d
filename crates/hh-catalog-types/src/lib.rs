use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Badge {
    New,
    PriceReduced,
}

impl Badge {
    pub fn parse(raw: &str) -> Option<Badge> {
        match raw {
            "new" => Some(Badge::New),
            "priceReduced" => Some(Badge::PriceReduced),
            _ => None,
        }
    }
}

// The catalog feed is hand-maintained; unknown badge strings and wrong-typed
// values must degrade to "no badge" instead of rejecting the whole item.
fn de_badge<'de, D>(de: D) -> Result<Option<Badge>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(de)?;
    Ok(raw.as_str().and_then(Badge::parse))
}

// Tolerates null, a non-array value, and non-string entries in the array.
fn de_string_list<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(de)?;
    Ok(raw
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                write!(f, "{}", *n as i64)
            }
            SpecValue::Number(n) => write!(f, "{n}"),
            SpecValue::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub sell_price: Option<f64>,
    #[serde(default)]
    pub store_on_sale: bool,
    #[serde(default)]
    pub store_sale_price: Option<f64>,
    #[serde(default)]
    pub specs: Option<BTreeMap<String, SpecValue>>,
    #[serde(default)]
    pub category_fields: Option<Vec<String>>,
    #[serde(default)]
    pub store_description: Option<String>,
    #[serde(default)]
    pub store_description_en: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de_string_list")]
    pub store_gallery_urls: Vec<String>,
    #[serde(default, deserialize_with = "de_badge")]
    pub badge: Option<Badge>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl CatalogItem {
    /// Localized long description; English falls back to German when untranslated.
    pub fn description(&self, lang: Language) -> Option<&str> {
        match lang {
            Language::De => self.store_description.as_deref(),
            Language::En => self
                .store_description_en
                .as_deref()
                .or(self.store_description.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Anything other than `"en"` is German, the storefront default.
    pub fn parse(raw: &str) -> Language {
        match raw {
            "en" => Language::En,
            _ => Language::De,
        }
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogTab {
    #[default]
    All,
    Sale,
}

impl CatalogTab {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogTab::All => "all",
            CatalogTab::Sale => "sale",
        }
    }

    pub fn parse(raw: &str) -> CatalogTab {
        match raw {
            "sale" => CatalogTab::Sale,
            _ => CatalogTab::All,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "priceAsc",
            SortOrder::PriceDesc => "priceDesc",
            SortOrder::NameAsc => "nameAsc",
        }
    }

    pub fn parse(raw: &str) -> SortOrder {
        match raw {
            "priceAsc" => SortOrder::PriceAsc,
            "priceDesc" => SortOrder::PriceDesc,
            "nameAsc" => SortOrder::NameAsc,
            _ => SortOrder::Default,
        }
    }
}

/// Current catalog view selection. Session-only, never persisted.
///
/// `min_price` and `max_price` hold the raw input text; unparseable values
/// mean "no bound" rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub tab: CatalogTab,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub min_price: String,
    pub max_price: String,
    pub search: String,
    pub sort: SortOrder,
}
