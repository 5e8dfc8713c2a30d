//! Product inquiry form.
//!
//! Builds a draft from the form fields, validates it locally and drives the
//! send through the inquiry machine: one request in flight at a time, the
//! status line mirrors the machine.

use hh_inquiry::{InquiryDraft, InquiryError, InquiryGateway, InquiryStatus};

use crate::api::HttpInquiryGateway;
use crate::dom::{self, Elements};
use crate::i18n::{self, TextKey};
use crate::state;

/// Submit handler. Refuses to double-send while a request is in flight.
pub async fn on_submit(els: &Elements) {
    let Some(item) = state::selected_item() else {
        render_validation_error(els, TextKey::InquiryItemMissing);
        return;
    };

    let draft = draft_from_form(els, &item.id, &item.name);
    if let Err(e) = draft.validate() {
        let key = match e {
            InquiryError::MissingItem => TextKey::InquiryItemMissing,
            InquiryError::EmptyMessage => TextKey::InquiryMessageMissing,
        };
        render_validation_error(els, key);
        return;
    }

    if !state::with_inquiry(|m| m.begin()) {
        return;
    }
    render_status(els);

    let outcome = HttpInquiryGateway
        .create_inquiry(&draft)
        .await
        .map_err(|e| e.to_string());
    if let Err(e) = &outcome {
        web_sys::console::error_1(&format!("inquiry failed: {e}").into());
    }
    state::with_inquiry(|m| m.settle(outcome));

    if state::with_inquiry(|m| m.status()) == InquiryStatus::Sent {
        els.inquiry_message_input.set_value("");
    }
    render_status(els);
}

fn draft_from_form(els: &Elements, item_id: &str, item_name: &str) -> InquiryDraft {
    InquiryDraft {
        item_id: item_id.to_string(),
        item_name: item_name.to_string(),
        message: dom::get_textarea_value(&els.inquiry_message_input),
        contact_name: optional(dom::get_input_value(&els.inquiry_name_input)),
        contact_email: optional(dom::get_input_value(&els.inquiry_email_input)),
        contact_phone: optional(dom::get_input_value(&els.inquiry_phone_input)),
    }
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Reflect the machine in the form: status line plus submit button lock.
pub fn render_status(els: &Elements) {
    let status = state::with_inquiry(|m| m.status());
    els.inquiry_submit_btn
        .set_disabled(status == InquiryStatus::Sending);

    let (cls, text) = match status {
        InquiryStatus::Idle => ("inquiry-status", ""),
        InquiryStatus::Sending => ("inquiry-status pending", i18n::t(TextKey::InquirySending)),
        InquiryStatus::Sent => ("inquiry-status ok", i18n::t(TextKey::InquirySent)),
        InquiryStatus::Failed => ("inquiry-status error", i18n::t(TextKey::InquiryFailed)),
    };
    els.inquiry_status.set_attribute("class", cls).unwrap();
    dom::set_text(&els.inquiry_status, text);
}

/// Clear the status line between items. A send in flight keeps its status.
pub fn reset_status(els: &Elements) {
    state::with_inquiry(|m| m.reset());
    render_status(els);
}

fn render_validation_error(els: &Elements, key: TextKey) {
    els.inquiry_status
        .set_attribute("class", "inquiry-status error")
        .unwrap();
    dom::set_text(&els.inquiry_status, i18n::t(key));
}
