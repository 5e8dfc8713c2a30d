use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub item_id: String,
    pub item_name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("no item attached to the inquiry")]
    MissingItem,
    #[error("inquiry message is empty")]
    EmptyMessage,
}

impl InquiryDraft {
    pub fn validate(&self) -> Result<(), InquiryError> {
        if self.item_id.trim().is_empty() || self.item_name.trim().is_empty() {
            return Err(InquiryError::MissingItem);
        }
        if self.message.trim().is_empty() {
            return Err(InquiryError::EmptyMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InquiryStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Submission lifecycle for one inquiry form. Transitions happen only on
/// explicit submit (`begin`) and on call completion (`settle`); there are no
/// retries and no timeouts of its own.
#[derive(Debug, Default)]
pub struct InquiryMachine {
    status: InquiryStatus,
    last_error: Option<String>,
}

impl InquiryMachine {
    pub fn new() -> InquiryMachine {
        InquiryMachine::default()
    }

    pub fn status(&self) -> InquiryStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Moves to `Sending` unless a send is already in flight. Returns whether
    /// the caller may proceed with the submission.
    pub fn begin(&mut self) -> bool {
        if self.status == InquiryStatus::Sending {
            return false;
        }
        self.status = InquiryStatus::Sending;
        self.last_error = None;
        true
    }

    /// Resolves the in-flight send. Ignored unless currently `Sending`, so a
    /// stray completion cannot clobber a later state.
    pub fn settle(&mut self, outcome: Result<(), String>) {
        if self.status != InquiryStatus::Sending {
            return;
        }
        match outcome {
            Ok(()) => self.status = InquiryStatus::Sent,
            Err(message) => {
                self.status = InquiryStatus::Failed;
                self.last_error = Some(message);
            }
        }
    }

    /// Back to `Idle`, e.g. when the form opens for a different item.
    pub fn reset(&mut self) {
        if self.status == InquiryStatus::Sending {
            return;
        }
        self.status = InquiryStatus::Idle;
        self.last_error = None;
    }
}

/// Submission port implemented by the presentation layer's HTTP client.
/// `?Send` because browser futures are single-threaded.
#[async_trait(?Send)]
pub trait InquiryGateway {
    async fn create_inquiry(&self, draft: &InquiryDraft) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;

    struct RecordingGateway {
        sent: RefCell<Vec<InquiryDraft>>,
        fail_with: Option<String>,
    }

    impl RecordingGateway {
        fn succeeding() -> RecordingGateway {
            RecordingGateway {
                sent: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> RecordingGateway {
            RecordingGateway {
                sent: RefCell::new(Vec::new()),
                fail_with: Some(message.to_owned()),
            }
        }
    }

    #[async_trait(?Send)]
    impl InquiryGateway for RecordingGateway {
        async fn create_inquiry(&self, draft: &InquiryDraft) -> Result<()> {
            self.sent.borrow_mut().push(draft.clone());
            match &self.fail_with {
                Some(message) => Err(anyhow!("{message}")),
                None => Ok(()),
            }
        }
    }

    fn draft() -> InquiryDraft {
        InquiryDraft {
            item_id: "gpu-1".into(),
            item_name: "RTX 4070".into(),
            message: "Ist die Karte ab Lager lieferbar?".into(),
            ..InquiryDraft::default()
        }
    }

    #[test]
    fn validation_requires_item_and_message() {
        let mut incomplete = draft();
        incomplete.item_id.clear();
        assert_eq!(incomplete.validate(), Err(InquiryError::MissingItem));

        let mut blank = draft();
        blank.message = "   ".into();
        assert_eq!(blank.validate(), Err(InquiryError::EmptyMessage));

        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn machine_walks_idle_sending_sent() {
        let mut machine = InquiryMachine::new();
        assert_eq!(machine.status(), InquiryStatus::Idle);
        assert!(machine.begin());
        assert_eq!(machine.status(), InquiryStatus::Sending);
        machine.settle(Ok(()));
        assert_eq!(machine.status(), InquiryStatus::Sent);
        assert_eq!(machine.last_error(), None);
    }

    #[test]
    fn double_submit_is_refused_while_sending() {
        let mut machine = InquiryMachine::new();
        assert!(machine.begin());
        assert!(!machine.begin());
        assert_eq!(machine.status(), InquiryStatus::Sending);
    }

    #[test]
    fn failure_records_the_error_and_allows_resubmit() {
        let mut machine = InquiryMachine::new();
        assert!(machine.begin());
        machine.settle(Err("502 Bad Gateway".into()));
        assert_eq!(machine.status(), InquiryStatus::Failed);
        assert_eq!(machine.last_error(), Some("502 Bad Gateway"));

        // No automatic retry; the user submits again by hand.
        assert!(machine.begin());
        assert_eq!(machine.last_error(), None);
        machine.settle(Ok(()));
        assert_eq!(machine.status(), InquiryStatus::Sent);
    }

    #[test]
    fn stray_settle_outside_sending_is_ignored() {
        let mut machine = InquiryMachine::new();
        machine.settle(Err("late completion".into()));
        assert_eq!(machine.status(), InquiryStatus::Idle);
        assert_eq!(machine.last_error(), None);

        machine.begin();
        machine.settle(Ok(()));
        machine.settle(Err("even later".into()));
        assert_eq!(machine.status(), InquiryStatus::Sent);
    }

    #[test]
    fn reset_returns_to_idle_except_mid_send() {
        let mut machine = InquiryMachine::new();
        machine.begin();
        machine.settle(Err("boom".into()));
        machine.reset();
        assert_eq!(machine.status(), InquiryStatus::Idle);
        assert_eq!(machine.last_error(), None);

        machine.begin();
        machine.reset();
        assert_eq!(machine.status(), InquiryStatus::Sending);
    }

    #[tokio::test]
    async fn gateway_receives_the_draft() -> anyhow::Result<()> {
        let gateway = RecordingGateway::succeeding();
        let mut machine = InquiryMachine::new();

        let draft = draft();
        draft.validate()?;
        assert!(machine.begin());
        let outcome = gateway
            .create_inquiry(&draft)
            .await
            .map_err(|e| e.to_string());
        machine.settle(outcome);

        assert_eq!(machine.status(), InquiryStatus::Sent);
        let sent = gateway.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].item_id, "gpu-1");
        Ok(())
    }

    #[tokio::test]
    async fn gateway_failure_surfaces_as_failed() -> anyhow::Result<()> {
        let gateway = RecordingGateway::failing("mail service down");
        let mut machine = InquiryMachine::new();

        assert!(machine.begin());
        let outcome = gateway
            .create_inquiry(&draft())
            .await
            .map_err(|e| e.to_string());
        machine.settle(outcome);

        assert_eq!(machine.status(), InquiryStatus::Failed);
        assert_eq!(machine.last_error(), Some("mail service down"));
        Ok(())
    }

    #[test]
    fn wire_names_are_camel_case_and_skip_empty_contact() -> anyhow::Result<()> {
        let mut full = draft();
        full.contact_email = Some("kunde@example.de".into());
        let json = serde_json::to_string(&full)?;
        assert!(json.contains(r#""itemId":"gpu-1""#));
        assert!(json.contains(r#""itemName":"RTX 4070""#));
        assert!(json.contains(r#""contactEmail":"kunde@example.de""#));
        assert!(!json.contains("contactName"));
        assert!(!json.contains("contactPhone"));
        Ok(())
    }
}
