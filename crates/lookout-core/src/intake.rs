//! Lead intake service.
//!
//! [`LeadIntake`] is the single path from a raw form submission to an email
//! in the operator inbox: validate, render, send once. It performs no retry
//! and no deduplication, so two identical submissions produce two emails.

use std::sync::Arc;

use lettre::message::Mailbox;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::{IntakeError, LeadError, MailError};
use crate::lead::{LEAD_SUBJECT, Lead, LeadSubmission};
use crate::mailer::{Mailer, OutboundEmail};

/// Validates submissions and forwards them to the operator inbox.
#[derive(Clone)]
pub struct LeadIntake {
    mailer: Arc<dyn Mailer>,
    inbox: String,
}

impl std::fmt::Debug for LeadIntake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadIntake")
            .field("inbox", &self.inbox)
            .finish_non_exhaustive()
    }
}

impl LeadIntake {
    /// Create the service. The inbox address is checked here so that a
    /// misconfigured deployment fails at startup instead of on every lead.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`] if `inbox` is not a mailbox.
    pub fn new(mailer: Arc<dyn Mailer>, inbox: impl Into<String>) -> Result<Self, MailError> {
        let inbox = inbox.into();
        inbox
            .parse::<Mailbox>()
            .map_err(|_| MailError::InvalidAddress(inbox.clone()))?;
        Ok(Self { mailer, inbox })
    }

    /// Build the notification for a validated lead.
    pub fn compose(&self, lead: &Lead) -> OutboundEmail {
        // An unparseable visitor email stays in the body but is not used as
        // Reply-To, otherwise the relay would reject the whole message.
        let reply_to = lead
            .email()
            .filter(|email| email.parse::<Mailbox>().is_ok())
            .map(str::to_owned);

        OutboundEmail {
            to: self.inbox.clone(),
            reply_to,
            subject: LEAD_SUBJECT.to_owned(),
            text: lead.email_body(),
        }
    }

    /// Validate a submission and send exactly one notification for it.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Validation`] without touching the network when
    /// `name` or `phone` is missing, and [`IntakeError::Delivery`] when the
    /// mailer fails.
    pub async fn submit(&self, submission: LeadSubmission) -> Result<(), IntakeError> {
        let lead = Lead::try_from(submission).inspect_err(
            |LeadError::MissingRequired { fields }| debug!(?fields, "lead rejected"),
        )?;
        let lead_id = Uuid::new_v4();

        info!(
            %lead_id,
            name = lead.name(),
            city = lead.city().unwrap_or_default(),
            service_type = lead.service_type().unwrap_or_default(),
            "incoming lead"
        );

        let email = self.compose(&lead);
        if let Err(e) = self.mailer.send(&email).await {
            error!(%lead_id, error = %e, "failed to send lead email");
            return Err(e.into());
        }

        info!(%lead_id, "lead email sent");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::memory::MemoryMailer;

    fn intake(mailer: &Arc<MemoryMailer>) -> LeadIntake {
        LeadIntake::new(Arc::clone(mailer) as Arc<dyn Mailer>, "owner@example.com").unwrap()
    }

    fn asha() -> LeadSubmission {
        LeadSubmission {
            name: Some("Asha".to_owned()),
            phone: Some("9999999999".to_owned()),
            ..LeadSubmission::default()
        }
    }

    #[test]
    fn invalid_inbox_is_rejected() {
        let mailer: Arc<dyn Mailer> = Arc::new(MemoryMailer::new());
        let err = LeadIntake::new(mailer, "not-an-inbox").unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn valid_lead_sends_once() {
        let mailer = Arc::new(MemoryMailer::new());
        intake(&mailer).submit(asha()).await.unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].subject, LEAD_SUBJECT);
        assert_eq!(sent[0].reply_to, None);
        assert!(sent[0].text.contains("Service Type: Not selected"));
    }

    #[tokio::test]
    async fn missing_phone_sends_nothing() {
        let mailer = Arc::new(MemoryMailer::new());
        let err = intake(&mailer)
            .submit(LeadSubmission {
                phone: None,
                ..asha()
            })
            .await
            .unwrap_err();

        let IntakeError::Validation(LeadError::MissingRequired { fields }) = &err else {
            unreachable!("expected a validation error, got {err:?}");
        };
        assert_eq!(*fields, ["phone"]);
        assert_eq!(mailer.sent_count().await, 0);
    }

    #[tokio::test]
    async fn repeated_submission_sends_twice() {
        let mailer = Arc::new(MemoryMailer::new());
        let service = intake(&mailer);
        service.submit(asha()).await.unwrap();
        service.submit(asha()).await.unwrap();
        assert_eq!(mailer.sent_count().await, 2);
    }

    #[tokio::test]
    async fn transport_failure_is_delivery_error() {
        let mailer = Arc::new(MemoryMailer::failing());
        let err = intake(&mailer).submit(asha()).await.unwrap_err();
        assert!(matches!(err, IntakeError::Delivery(MailError::Smtp(_))));
    }

    #[test]
    fn reply_to_only_for_parseable_email() {
        let mailer = Arc::new(MemoryMailer::new());
        let service = intake(&mailer);

        let good = Lead::try_from(LeadSubmission {
            email: Some("asha@example.com".to_owned()),
            ..asha()
        })
        .unwrap();
        assert_eq!(
            service.compose(&good).reply_to.as_deref(),
            Some("asha@example.com")
        );

        let bad = Lead::try_from(LeadSubmission {
            email: Some("asha at home".to_owned()),
            ..asha()
        })
        .unwrap();
        let email = service.compose(&bad);
        assert_eq!(email.reply_to, None);
        assert!(email.text.contains("Email: asha at home"));
    }
}
