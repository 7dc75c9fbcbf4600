//! Shared vocabulary for the remessa delivery pipeline.
//!
//! Defines the request/record data model, the static package catalog, the
//! typed delivery error, and the four capability traits behind which all
//! outbound I/O (record source, file host, messaging API, SMTP) sits.

pub mod capability;
pub mod catalog;
pub mod error;
pub mod types;

pub use {
    capability::{EmailSender, FileFetcher, MessagingChannel, RecordSource},
    catalog::PackageCatalog,
    error::{Error, Result},
    types::{DeliverableFile, IncomingRequest, ResolvedRecord, FALLBACK_PACKAGE_LABEL},
};
