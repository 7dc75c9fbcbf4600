//! Record source adapter for the Notion database API.
//!
//! Queries the configured database for its most recent row and extracts
//! the delivery fields from Notion's typed property wrappers.

pub mod client;
mod props;

pub use client::NotionRecordSource;
