//! HTTP API client.
//!
//! Wraps `fetch` for JSON requests against the storefront backend.
//! `base_url()` honors a `<meta name="hh-api-base">` override for staging.

use crate::dom;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use hh_inquiry::{InquiryDraft, InquiryGateway};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Determine the API base URL.
///
/// Priority: `<meta name="hh-api-base">` override, then same-origin `/api`.
pub fn base_url() -> String {
    if let Some(meta) = dom::query("meta[name='hh-api-base']") {
        if let Some(content) = meta.get_attribute("content") {
            let v = content.trim();
            if !v.is_empty() {
                return v.trim_end_matches('/').to_string();
            }
        }
    }
    "/api".to_string()
}

/// Perform a fetch request, returning the parsed JSON as `serde_json::Value`.
pub async fn request(
    path: &str,
    method: &str,
    body: Option<String>,
) -> Result<serde_json::Value, String> {
    let url = format!("{}{}", base_url(), path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;

    if let Some(ref b) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{:?}", e))?;
        let js_body = JsValue::from_str(b);
        opts.set_body(&js_body);
    }

    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{:?}", e))?;

    let window = dom::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    let text_str = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(format!(
            "{} {}: {}",
            resp.status(),
            resp.status_text(),
            text_str
        ));
    }

    serde_json::from_str(&text_str).map_err(|e| format!("JSON parse error: {}", e))
}

/// Inquiry gateway backed by `POST /inquiries`.
pub struct HttpInquiryGateway;

#[async_trait(?Send)]
impl InquiryGateway for HttpInquiryGateway {
    async fn create_inquiry(&self, draft: &InquiryDraft) -> Result<()> {
        let body = serde_json::to_string(draft)
            .map_err(|e| anyhow!("inquiry encode failed: {e}"))?;
        request("/inquiries", "POST", Some(body))
            .await
            .map(|_| ())
            .map_err(|e| anyhow!(e))
    }
}
