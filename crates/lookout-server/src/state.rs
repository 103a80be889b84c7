//! Shared application state for `LookOutline` server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. The mailer inside [`LeadIntake`] is the only
//! long-lived resource; it is injected so tests can substitute
//! [`lookout_core::memory::MemoryMailer`].

use lookout_core::intake::LeadIntake;

use crate::config::SiteConfig;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Lead validation and delivery.
    pub intake: LeadIntake,
    /// Origins permitted to call `/api/*`.
    pub allowed_origins: Vec<String>,
    /// Contact details rendered on the landing page.
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(intake: LeadIntake, allowed_origins: Vec<String>, site: SiteConfig) -> Self {
        Self {
            intake,
            allowed_origins,
            site,
        }
    }

    /// Whether `origin` is on the allow-list.
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}
