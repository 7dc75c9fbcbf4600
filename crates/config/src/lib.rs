//! Environment-backed settings for the remessa gateway.
//!
//! Required variables fail fast at startup; tests load through an explicit
//! lookup function so they never touch process env.

pub mod schema;

pub use schema::{NotionSettings, Settings, SmtpSettings, ZapiSettings};
