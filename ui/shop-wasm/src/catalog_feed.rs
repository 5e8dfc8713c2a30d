//! Catalog snapshot feed.
//!
//! Polls the catalog endpoint and offers every delivery to the snapshot cell.
//! Each delivery carries a revision stamped before its fetch starts, so a slow
//! response from an earlier poll can never clobber a newer catalog: the cell
//! rejects it and the delivery is dropped.

use std::cell::{Cell, RefCell};

use hh_catalog_types::CatalogItem;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{self, Elements};
use crate::{api, catalog_view, item_detail, state};

const POLL_INTERVAL_MS: i32 = 60_000;

thread_local! {
    static POLL_HANDLE: RefCell<Option<i32>> = RefCell::new(None);
    static NEXT_REVISION: Cell<u64> = Cell::new(1);
}

/// Fetch once right away, then keep polling until [`unsubscribe`] is called.
pub fn subscribe(els: &Elements) {
    unsubscribe();
    deliver(els.clone());

    let tick = {
        let els = els.clone();
        Closure::wrap(Box::new(move || deliver(els.clone())) as Box<dyn FnMut()>)
    };
    let handle = dom::window()
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            POLL_INTERVAL_MS,
        )
        .unwrap();
    POLL_HANDLE.with(|h| *h.borrow_mut() = Some(handle));
    tick.forget();
}

/// Stop polling. Safe to call repeatedly.
pub fn unsubscribe() {
    if let Some(handle) = POLL_HANDLE.with(|h| h.borrow_mut().take()) {
        dom::window().clear_interval_with_handle(handle);
    }
}

fn deliver(els: Elements) {
    // Stamped before the fetch: a later poll outranks this one even if its
    // response arrives first.
    let revision = NEXT_REVISION.with(|r| {
        let v = r.get();
        r.set(v + 1);
        v
    });
    spawn_local(async move {
        match fetch_snapshot().await {
            Ok(items) => {
                if state::offer_snapshot(revision, items) {
                    catalog_view::render_all(&els);
                    item_detail::sync_after_snapshot(&els);
                } else {
                    web_sys::console::warn_1(
                        &format!("catalog snapshot {revision} superseded, dropped").into(),
                    );
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("catalog fetch failed: {e}").into());
            }
        }
    });
}

/// Accepts either `{"items": [...]}` or a bare top-level array.
async fn fetch_snapshot() -> Result<Vec<CatalogItem>, String> {
    let payload = api::request("/catalog", "GET", None).await?;
    let list = match payload {
        serde_json::Value::Object(mut map) => map
            .remove("items")
            .ok_or_else(|| "catalog payload has no items field".to_string())?,
        other => other,
    };
    serde_json::from_value(list).map_err(|e| format!("catalog decode failed: {e}"))
}
