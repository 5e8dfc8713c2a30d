//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Extend `AppState` and the accessor helpers to add new state fields.

use hh_catalog::snapshot::SnapshotCell;
use hh_catalog_types::{CatalogItem, FilterState, Language};
use hh_inquiry::InquiryMachine;
use std::cell::RefCell;

/// Central application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: SnapshotCell,
    pub filter: FilterState,
    pub selected_item: Option<String>,
    pub language: Language,
    pub inquiry: InquiryMachine,
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn items() -> Vec<CatalogItem> {
    with(|s| s.catalog.items().to_vec())
}

pub fn find_item(id: &str) -> Option<CatalogItem> {
    with(|s| hh_catalog::find_item(s.catalog.items(), id).cloned())
}

/// Latest-wins: answers whether the snapshot was applied.
pub fn offer_snapshot(revision: u64, items: Vec<CatalogItem>) -> bool {
    with_mut(|s| s.catalog.offer(revision, items))
}

pub fn filter() -> FilterState {
    with(|s| s.filter.clone())
}

pub fn update_filter<F>(f: F)
where
    F: FnOnce(&mut FilterState),
{
    with_mut(|s| f(&mut s.filter));
}

pub fn language() -> Language {
    with(|s| s.language)
}

pub fn set_language(lang: Language) {
    with_mut(|s| s.language = lang);
}

pub fn selected_item_id() -> Option<String> {
    with(|s| s.selected_item.clone())
}

pub fn selected_item() -> Option<CatalogItem> {
    with(|s| {
        s.selected_item
            .as_deref()
            .and_then(|id| hh_catalog::find_item(s.catalog.items(), id).cloned())
    })
}

pub fn set_selected_item(id: Option<String>) {
    with_mut(|s| s.selected_item = id);
}

pub fn with_inquiry<F, R>(f: F) -> R
where
    F: FnOnce(&mut InquiryMachine) -> R,
{
    with_mut(|s| f(&mut s.inquiry))
}
