//! Messaging channel adapter for the Z-API WhatsApp HTTP gateway.

pub mod client;

pub use client::ZapiMessenger;
