//! In-memory mailer for tests and local development.
//!
//! Records every accepted email instead of sending it. Can be flipped into a
//! failing mode to simulate a relay outage.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::MailError;
use crate::mailer::{Mailer, OutboundEmail};

/// A [`Mailer`] that keeps sent mail in a vector.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    failing: AtomicBool,
}

impl MemoryMailer {
    /// Create an empty mailer that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mailer whose every `send` and `verify` fails with a
    /// connection error.
    pub fn failing() -> Self {
        let mailer = Self::default();
        mailer.set_failing(true);
        mailer
    }

    /// Toggle simulated relay failure.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of everything sent so far, oldest first.
    pub async fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().await.clone()
    }

    /// Number of emails sent so far.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    fn check(&self) -> Result<(), MailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailError::Smtp("connection refused".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.check()?;
        self.sent.lock().await.push(email.clone());
        Ok(())
    }

    async fn verify(&self) -> Result<(), MailError> {
        self.check()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email() -> OutboundEmail {
        OutboundEmail {
            to: "owner@example.com".to_owned(),
            reply_to: None,
            subject: "subject".to_owned(),
            text: "body".to_owned(),
        }
    }

    #[tokio::test]
    async fn records_sent_mail_in_order() {
        let mailer = MemoryMailer::new();
        mailer.send(&email()).await.unwrap();
        mailer
            .send(&OutboundEmail {
                subject: "second".to_owned(),
                ..email()
            })
            .await
            .unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].subject, "second");
    }

    #[tokio::test]
    async fn failing_mode_records_nothing() {
        let mailer = MemoryMailer::failing();
        assert!(mailer.send(&email()).await.is_err());
        assert!(mailer.verify().await.is_err());
        assert_eq!(mailer.sent_count().await, 0);

        mailer.set_failing(false);
        mailer.send(&email()).await.unwrap();
        assert_eq!(mailer.sent_count().await, 1);
    }
}
