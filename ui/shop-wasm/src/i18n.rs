//! DE/EN interface text.
//!
//! A plain two-language lookup table; German is the storefront default.
//! Static markup is translated in place via `data-i18n` attributes, dynamic
//! renders call [`t`] directly.

use crate::dom;
use crate::state;
use hh_catalog_types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    TabAll,
    TabSale,
    AllCategories,
    AllSubCategories,
    SearchPlaceholder,
    MinPrice,
    MaxPrice,
    SortDefault,
    SortPriceAsc,
    SortPriceDesc,
    SortNameAsc,
    PriceOnRequest,
    SoldOut,
    InStock,
    BadgeNew,
    BadgePriceReduced,
    EmptyCatalog,
    RecentlyViewed,
    SimilarItems,
    SpecsHeading,
    DescriptionHeading,
    WishlistAdd,
    WishlistRemove,
    InquiryHeading,
    InquiryName,
    InquiryEmail,
    InquiryPhone,
    InquiryMessage,
    InquirySubmit,
    InquirySending,
    InquirySent,
    InquiryFailed,
    InquiryMessageMissing,
    InquiryItemMissing,
    CookieNotice,
    CookieAccept,
    LegalLink,
    AboutLink,
    LegalHeading,
    AboutHeading,
    ThemeToggleTitle,
    SiteTitle,
    SiteDescription,
}

impl TextKey {
    pub fn parse(raw: &str) -> Option<TextKey> {
        use TextKey::*;
        let key = match raw {
            "tab-all" => TabAll,
            "tab-sale" => TabSale,
            "all-categories" => AllCategories,
            "all-sub-categories" => AllSubCategories,
            "search-placeholder" => SearchPlaceholder,
            "min-price" => MinPrice,
            "max-price" => MaxPrice,
            "sort-default" => SortDefault,
            "sort-price-asc" => SortPriceAsc,
            "sort-price-desc" => SortPriceDesc,
            "sort-name-asc" => SortNameAsc,
            "price-on-request" => PriceOnRequest,
            "sold-out" => SoldOut,
            "badge-new" => BadgeNew,
            "badge-price-reduced" => BadgePriceReduced,
            "empty-catalog" => EmptyCatalog,
            "recently-viewed" => RecentlyViewed,
            "similar-items" => SimilarItems,
            "specs-heading" => SpecsHeading,
            "description-heading" => DescriptionHeading,
            "wishlist-add" => WishlistAdd,
            "wishlist-remove" => WishlistRemove,
            "inquiry-heading" => InquiryHeading,
            "inquiry-name" => InquiryName,
            "inquiry-email" => InquiryEmail,
            "inquiry-phone" => InquiryPhone,
            "inquiry-message" => InquiryMessage,
            "inquiry-submit" => InquirySubmit,
            "cookie-notice" => CookieNotice,
            "cookie-accept" => CookieAccept,
            "legal-link" => LegalLink,
            "about-link" => AboutLink,
            "legal-heading" => LegalHeading,
            "about-heading" => AboutHeading,
            "theme-toggle-title" => ThemeToggleTitle,
            _ => return None,
        };
        Some(key)
    }
}

/// Text for the currently selected language.
pub fn t(key: TextKey) -> &'static str {
    text(state::language(), key)
}

pub fn text(lang: Language, key: TextKey) -> &'static str {
    use Language::{De, En};
    use TextKey::*;
    match (lang, key) {
        (De, TabAll) => "Alle Produkte",
        (En, TabAll) => "All products",
        (De, TabSale) => "Angebote",
        (En, TabSale) => "On sale",
        (De, AllCategories) => "Alle Kategorien",
        (En, AllCategories) => "All categories",
        (De, AllSubCategories) => "Alle Unterkategorien",
        (En, AllSubCategories) => "All sub-categories",
        (De, SearchPlaceholder) => "Produkte suchen…",
        (En, SearchPlaceholder) => "Search products…",
        (De, MinPrice) => "Preis ab",
        (En, MinPrice) => "Min price",
        (De, MaxPrice) => "Preis bis",
        (En, MaxPrice) => "Max price",
        (De, SortDefault) => "Sortierung: Standard",
        (En, SortDefault) => "Sort: default",
        (De, SortPriceAsc) => "Preis aufsteigend",
        (En, SortPriceAsc) => "Price low to high",
        (De, SortPriceDesc) => "Preis absteigend",
        (En, SortPriceDesc) => "Price high to low",
        (De, SortNameAsc) => "Name A-Z",
        (En, SortNameAsc) => "Name A-Z",
        (De, PriceOnRequest) => "Preis auf Anfrage",
        (En, PriceOnRequest) => "Price on request",
        (De, SoldOut) => "Ausverkauft",
        (En, SoldOut) => "Sold out",
        (De, InStock) => "Auf Lager",
        (En, InStock) => "In stock",
        (De, BadgeNew) => "Neu",
        (En, BadgeNew) => "New",
        (De, BadgePriceReduced) => "Preis gesenkt",
        (En, BadgePriceReduced) => "Price reduced",
        (De, EmptyCatalog) => "Keine Produkte gefunden.",
        (En, EmptyCatalog) => "No products found.",
        (De, RecentlyViewed) => "Zuletzt angesehen",
        (En, RecentlyViewed) => "Recently viewed",
        (De, SimilarItems) => "Ähnliche Produkte",
        (En, SimilarItems) => "Similar products",
        (De, SpecsHeading) => "Technische Daten",
        (En, SpecsHeading) => "Specifications",
        (De, DescriptionHeading) => "Beschreibung",
        (En, DescriptionHeading) => "Description",
        (De, WishlistAdd) => "Zur Merkliste hinzufügen",
        (En, WishlistAdd) => "Add to wish list",
        (De, WishlistRemove) => "Von der Merkliste entfernen",
        (En, WishlistRemove) => "Remove from wish list",
        (De, InquiryHeading) => "Produktanfrage",
        (En, InquiryHeading) => "Product inquiry",
        (De, InquiryName) => "Ihr Name (optional)",
        (En, InquiryName) => "Your name (optional)",
        (De, InquiryEmail) => "Ihre E-Mail-Adresse (optional)",
        (En, InquiryEmail) => "Your email (optional)",
        (De, InquiryPhone) => "Ihre Telefonnummer (optional)",
        (En, InquiryPhone) => "Your phone (optional)",
        (De, InquiryMessage) => "Ihre Nachricht…",
        (En, InquiryMessage) => "Your message…",
        (De, InquirySubmit) => "Anfrage senden",
        (En, InquirySubmit) => "Send inquiry",
        (De, InquirySending) => "Wird gesendet…",
        (En, InquirySending) => "Sending…",
        (De, InquirySent) => "Anfrage gesendet. Wir melden uns!",
        (En, InquirySent) => "Inquiry sent. We will get back to you!",
        (De, InquiryFailed) => "Senden fehlgeschlagen. Bitte erneut versuchen.",
        (En, InquiryFailed) => "Sending failed. Please try again.",
        (De, InquiryMessageMissing) => "Bitte eine Nachricht eingeben.",
        (En, InquiryMessageMissing) => "Please enter a message.",
        (De, InquiryItemMissing) => "Kein Produkt ausgewählt.",
        (En, InquiryItemMissing) => "No product selected.",
        (De, CookieNotice) => "Diese Seite nutzt nur technisch notwendige Cookies.",
        (En, CookieNotice) => "This site only uses technically required cookies.",
        (De, CookieAccept) => "Verstanden",
        (En, CookieAccept) => "Got it",
        (De, LegalLink) => "Impressum",
        (En, LegalLink) => "Legal notice",
        (De, AboutLink) => "Über uns",
        (En, AboutLink) => "About us",
        (De, LegalHeading) => "Impressum",
        (En, LegalHeading) => "Legal notice",
        (De, AboutHeading) => "Über Hardwarehalle24",
        (En, AboutHeading) => "About Hardwarehalle24",
        (De, ThemeToggleTitle) => "Dunkelmodus umschalten",
        (En, ThemeToggleTitle) => "Toggle dark mode",
        (De, SiteTitle) => "Hardwarehalle24 | PC-Hardware & Komponenten",
        (En, SiteTitle) => "Hardwarehalle24 | PC hardware & components",
        (De, SiteDescription) => {
            "Grafikkarten, Prozessoren, Mainboards und mehr. Geprüfte Hardware zu fairen Preisen."
        }
        (En, SiteDescription) => {
            "Graphics cards, CPUs, mainboards and more. Tested hardware at fair prices."
        }
    }
}

/// Re-translate all static markup carrying `data-i18n` attributes.
pub fn apply_static_text() {
    for el in dom::query_all("[data-i18n]") {
        if let Some(key) = el
            .get_attribute("data-i18n")
            .as_deref()
            .and_then(TextKey::parse)
        {
            dom::set_text(&el, t(key));
        }
    }
    for el in dom::query_all("[data-i18n-placeholder]") {
        if let Some(key) = el
            .get_attribute("data-i18n-placeholder")
            .as_deref()
            .and_then(TextKey::parse)
        {
            let _ = el.set_attribute("placeholder", t(key));
        }
    }
    for el in dom::query_all("[data-i18n-title]") {
        if let Some(key) = el
            .get_attribute("data-i18n-title")
            .as_deref()
            .and_then(TextKey::parse)
        {
            let _ = el.set_attribute("title", t(key));
        }
    }
}
