//! Mailer capability and SMTP implementation.
//!
//! The [`Mailer`] trait is the only way the rest of the system sends mail.
//! Production code uses [`SmtpMailer`], a thin wrapper over a pooled
//! [`lettre`] transport built once at startup; tests and local development
//! substitute [`crate::memory::MemoryMailer`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::MailError;

/// Port on which the relay expects TLS from the first byte.
const IMPLICIT_TLS_PORT: u16 = 465;

/// Default submission port (STARTTLS).
const DEFAULT_PORT: u16 = 587;

/// Transport timeout when `SMTP_TIMEOUT_SECS` is not set. Same value as
/// lettre's builder default, which `timeout(None)` would otherwise clear.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Display name used when `SMTP_FROM_NAME` is not set.
pub const DEFAULT_FROM_NAME: &str = "LookOutline Leads";

/// A plaintext email ready to hand to a [`Mailer`].
///
/// The sender is chosen by the mailer, not the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Recipient mailbox (`addr@host` or `Name <addr@host>`).
    pub to: String,
    /// Optional reply-to mailbox.
    pub reply_to: Option<String>,
    pub subject: String,
    /// Plaintext body.
    pub text: String,
}

/// Async email sending capability.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Attempt delivery. Resolves once the relay has accepted the message.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] on any addressing, connection, authentication,
    /// or protocol failure.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;

    /// Check that the relay is reachable and accepts our credentials.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Smtp`] when the relay cannot be reached.
    async fn verify(&self) -> Result<(), MailError> {
        Ok(())
    }
}

/// SMTP connection profile.
#[derive(Clone)]
pub struct SmtpConfig {
    /// Relay hostname.
    pub host: String,
    /// Relay port. `465` selects implicit TLS, anything else STARTTLS.
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender address; falls back to `username`.
    pub from: Option<String>,
    /// Sender display name.
    pub from_name: String,
    /// Skip relay certificate validation.
    pub accept_invalid_certs: bool,
    /// Transport timeout; `None` means [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("from", &self.from)
            .field("from_name", &self.from_name)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SmtpConfig {
    /// Load the profile from `SMTP_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`SmtpConfig::from_lookup`].
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the profile through an arbitrary key lookup.
    ///
    /// Variables:
    /// - `SMTP_HOST`: relay host (required)
    /// - `SMTP_PORT`: relay port (default: `587`)
    /// - `SMTP_USER` / `SMTP_PASS`: credentials (optional, used together)
    /// - `SMTP_FROM`: sender address (default: `SMTP_USER`)
    /// - `SMTP_FROM_NAME`: sender display name (default: `LookOutline Leads`)
    /// - `SMTP_TLS_REJECT_UNAUTHORIZED`: validate the relay certificate (default: `false`)
    /// - `SMTP_TIMEOUT_SECS`: transport timeout (default: 60 seconds)
    ///
    /// # Errors
    ///
    /// Returns [`MailError::MissingConfig`] when `SMTP_HOST` is unset and
    /// [`MailError::InvalidConfig`] when a numeric value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MailError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("SMTP_HOST")
            .ok_or_else(|| MailError::MissingConfig("SMTP_HOST".to_owned()))?;

        let port = match non_empty("SMTP_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| MailError::InvalidConfig {
                var: "SMTP_PORT".to_owned(),
                reason: format!("'{raw}' is not a valid port"),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout = match non_empty("SMTP_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                MailError::InvalidConfig {
                    var: "SMTP_TIMEOUT_SECS".to_owned(),
                    reason: format!("'{raw}' is not a whole number of seconds"),
                }
            })?)),
            None => None,
        };

        let reject_unauthorized = non_empty("SMTP_TLS_REJECT_UNAUTHORIZED")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true") || v.trim() == "1");

        Ok(Self {
            host,
            port,
            username: non_empty("SMTP_USER"),
            password: lookup("SMTP_PASS"),
            from: non_empty("SMTP_FROM"),
            from_name: non_empty("SMTP_FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_owned()),
            accept_invalid_certs: !reject_unauthorized,
            timeout,
        })
    }

    /// Timeout applied to the transport.
    pub fn effective_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Whether the relay is reached over implicit TLS.
    pub fn implicit_tls(&self) -> bool {
        self.port == IMPLICIT_TLS_PORT
    }
}

/// SMTP mailer backed by a pooled lettre transport.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from.to_string())
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Build the transport from a connection profile. No network I/O happens
    /// here; call [`Mailer::verify`] to check the relay.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::MissingConfig`] when neither `from` nor
    /// `username` is set, [`MailError::InvalidAddress`] when the sender does
    /// not parse, and [`MailError::Smtp`] when TLS parameters are rejected.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let sender = config
            .from
            .as_deref()
            .or(config.username.as_deref())
            .ok_or_else(|| MailError::MissingConfig("SMTP_FROM or SMTP_USER".to_owned()))?;
        let address: Address = sender
            .parse()
            .map_err(|_| MailError::InvalidAddress(sender.to_owned()))?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);

        let tls_parameters = TlsParameters::builder(config.host.clone())
            .dangerous_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        let tls = if config.implicit_tls() {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Opportunistic(tls_parameters)
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .tls(tls)
            .timeout(Some(config.effective_timeout()));

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: Arc::new(builder.build()),
            from,
        })
    }

    /// The sender mailbox stamped on every message.
    pub fn from_mailbox(&self) -> &Mailbox {
        &self.from
    }

    fn build_message(&self, email: &OutboundEmail) -> Result<Message, MailError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        let mut builder = Message::builder().from(self.from.clone()).to(to);

        if let Some(reply_to) = &email.reply_to {
            let mailbox: Mailbox = reply_to
                .parse()
                .map_err(|_| MailError::InvalidAddress(reply_to.clone()))?;
            builder = builder.reply_to(mailbox);
        }

        builder
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.text.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }

    async fn verify(&self) -> Result<(), MailError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailError::Smtp(
                "relay did not answer the connection test".to_owned(),
            )),
            Err(e) => Err(MailError::Smtp(e.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn host_is_required() {
        let err = SmtpConfig::from_lookup(lookup(&[("SMTP_PORT", "587")])).unwrap_err();
        assert!(matches!(err, MailError::MissingConfig(ref v) if v == "SMTP_HOST"));
    }

    #[test]
    fn defaults_apply() {
        let config = SmtpConfig::from_lookup(lookup(&[("SMTP_HOST", "smtp.example.com")])).unwrap();
        assert_eq!(config.port, 587);
        assert_eq!(config.from_name, DEFAULT_FROM_NAME);
        assert!(config.accept_invalid_certs);
        assert!(!config.implicit_tls());
        assert_eq!(config.timeout, None);
        assert_eq!(config.effective_timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn unset_timeout_keeps_a_bound() {
        let config = SmtpConfig::from_lookup(lookup(&[("SMTP_HOST", "smtp.example.com")])).unwrap();
        assert_eq!(config.effective_timeout(), Duration::from_secs(60));

        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.effective_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn reject_unauthorized_ignores_case() {
        for value in ["TRUE", "True", " true ", "1"] {
            let config = SmtpConfig::from_lookup(lookup(&[
                ("SMTP_HOST", "smtp.example.com"),
                ("SMTP_TLS_REJECT_UNAUTHORIZED", value),
            ]))
            .unwrap();
            assert!(!config.accept_invalid_certs, "value {value:?}");
        }

        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_TLS_REJECT_UNAUTHORIZED", "FALSE"),
        ]))
        .unwrap();
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn port_465_uses_implicit_tls() {
        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "465"),
            ("SMTP_TLS_REJECT_UNAUTHORIZED", "true"),
            ("SMTP_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();
        assert!(config.implicit_tls());
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn bad_port_is_reported() {
        let err = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "smtp"),
        ]))
        .unwrap_err();
        assert!(matches!(err, MailError::InvalidConfig { ref var, .. } if var == "SMTP_PORT"));
    }

    #[test]
    fn debug_redacts_password() {
        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USER", "leads@example.com"),
            ("SMTP_PASS", "hunter2"),
        ]))
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[redacted]"));
    }

    #[tokio::test]
    async fn sender_falls_back_to_username() {
        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USER", "leads@example.com"),
            ("SMTP_PASS", "secret"),
        ]))
        .unwrap();
        let mailer = SmtpMailer::from_config(&config).unwrap();
        let from = mailer.from_mailbox();
        assert_eq!(from.email.to_string(), "leads@example.com");
        assert_eq!(from.name.as_deref(), Some("LookOutline Leads"));
    }

    #[tokio::test]
    async fn missing_sender_is_rejected() {
        let config = SmtpConfig::from_lookup(lookup(&[("SMTP_HOST", "smtp.example.com")])).unwrap();
        let err = SmtpMailer::from_config(&config).unwrap_err();
        assert!(matches!(err, MailError::MissingConfig(_)));
    }

    #[tokio::test]
    async fn message_carries_reply_to_and_subject() {
        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_FROM", "noreply@example.com"),
        ]))
        .unwrap();
        let mailer = SmtpMailer::from_config(&config).unwrap();
        let message = mailer
            .build_message(&OutboundEmail {
                to: "owner@example.com".to_owned(),
                reply_to: Some("visitor@example.com".to_owned()),
                subject: "New CCTV / Biometric Service Lead".to_owned(),
                text: "hello".to_owned(),
            })
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: owner@example.com"));
        assert!(raw.contains("Reply-To: visitor@example.com"));
        assert!(raw.contains("Subject: New CCTV / Biometric Service Lead"));
    }

    #[tokio::test]
    async fn bad_recipient_is_reported() {
        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_FROM", "noreply@example.com"),
        ]))
        .unwrap();
        let mailer = SmtpMailer::from_config(&config).unwrap();
        let err = mailer
            .build_message(&OutboundEmail {
                to: "not an address".to_owned(),
                reply_to: None,
                subject: "s".to_owned(),
                text: "t".to_owned(),
            })
            .unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(_)));
    }
}
