//! Core library for `LookOutline`.
//!
//! Contains the lead model and its validation rules, the plaintext email
//! rendering for the operator inbox, the [`mailer::Mailer`] capability with
//! SMTP and in-memory implementations, the [`intake::LeadIntake`] service
//! that ties them together, and the ordered chat reply rule table used by the
//! landing page assistant. This crate knows nothing about HTTP.

pub mod chat;
pub mod error;
pub mod intake;
pub mod lead;
pub mod mailer;
pub mod memory;
