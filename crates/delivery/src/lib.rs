//! Record resolution and the delivery pipeline.
//!
//! This crate is the whole of the system's own logic: everything else is
//! adapters around it. It depends only on the capability traits in
//! `remessa-channels`, so the pipeline runs against fakes in tests.

pub mod message;
pub mod pipeline;
pub mod resolver;

pub use {
    pipeline::{DeliveryPipeline, DeliveryReceipt},
    resolver::RecordResolver,
};
