//! Error types for `lookout-core`.
//!
//! Validation errors carry the exact message shown to the website visitor.
//! Mail errors carry the transport's diagnostic text for operator logs and
//! are never rendered to clients verbatim.

/// Errors from validating a lead submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    /// `name` or `phone` was absent, empty, or whitespace only.
    #[error("Name and phone are required")]
    MissingRequired {
        /// Which required fields were missing, in form order.
        fields: Vec<&'static str>,
    },
}

/// Errors from building or delivering an outbound email.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A required configuration value is missing.
    #[error("missing required config: {0}")]
    MissingConfig(String),

    /// A configuration value could not be parsed.
    #[error("invalid config value for {var}: {reason}")]
    InvalidConfig { var: String, reason: String },

    /// An address did not parse as an RFC 5322 mailbox.
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// The message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(String),

    /// The relay rejected the message or the connection failed.
    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// Errors from submitting a lead through [`crate::intake::LeadIntake`].
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The submission failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] LeadError),

    /// The submission was valid but the email could not be delivered.
    #[error("lead delivery failed: {0}")]
    Delivery(#[from] MailError),
}
